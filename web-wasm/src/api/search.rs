//! 템플릿 검색/상세 조회 API

use super::{http_get, response_error, response_json, response_text};
use draft_ai_common::{Result, SearchResponse};

/// 템플릿 검색
///
/// 쿼리 문자열은 [`draft_ai_common::build_search_query`]로 만든 것을 받는다.
pub async fn search_templates(query: &str, timeout_ms: u32) -> Result<SearchResponse> {
    let url = format!("/api/search?{}", query);

    let resp = http_get(&url, Some(timeout_ms)).await?;
    if !resp.ok() {
        return Err(response_error(&resp).await);
    }
    response_json(&resp).await
}

/// 백엔드가 렌더링한 상세 HTML 조각 조회
pub async fn fetch_template_detail(id: &str) -> Result<String> {
    let url = format!("/template_detail/{}", urlencoding::encode(id));

    let resp = http_get(&url, None).await?;
    if !resp.ok() {
        return Err(response_error(&resp).await);
    }
    response_text(&resp).await
}
