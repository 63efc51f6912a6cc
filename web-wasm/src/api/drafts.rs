//! 보고서 생성/템플릿 분석 API

use super::{http_get, post_json, response_error, response_json};
use draft_ai_common::{
    bare_file_name, fetch_with_retry, AnalysisReport, AnalyzeContentResult,
    AnalyzeTemplatesResult, DraftResult, PollOutcome, Result, RetryPolicy,
};
use gloo::timers::future::TimeoutFuture;
use serde::Serialize;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    template_ids: &'a [String],
    user_input: &'a str,
}

/// 보고서 초안 생성
pub async fn generate_draft(template_ids: &[String], user_input: &str) -> Result<DraftResult> {
    let resp = post_json(
        "/api/drafts/generate",
        &GenerateRequest {
            template_ids,
            user_input,
        },
    )
    .await?;

    if !resp.ok() {
        return Err(response_error(&resp).await);
    }
    response_json(&resp).await
}

#[derive(Serialize)]
struct AnalyzeTemplatesRequest<'a> {
    template_ids: &'a [String],
}

/// 선택 템플릿 수집 분석
pub async fn analyze_templates(template_ids: &[String]) -> Result<AnalyzeTemplatesResult> {
    let resp = post_json(
        "/api/drafts/analyze-templates",
        &AnalyzeTemplatesRequest { template_ids },
    )
    .await?;

    if !resp.ok() {
        return Err(response_error(&resp).await);
    }
    response_json(&resp).await
}

#[derive(Serialize)]
struct AnalyzeContentRequest<'a> {
    jsonl_file: &'a str,
}

/// 수집된 템플릿의 내용(NLP) 분석 요청
pub async fn analyze_content(jsonl_file: &str) -> Result<AnalyzeContentResult> {
    let resp = post_json(
        "/api/drafts/analyze-content",
        &AnalyzeContentRequest { jsonl_file },
    )
    .await?;

    if !resp.ok() {
        return Err(response_error(&resp).await);
    }
    response_json(&resp).await
}

/// 분석 결과 조회
///
/// 산출물이 비동기로 만들어지므로 404는 준비 안 됨으로 보고 정책에
/// 따라 재시도한다. 파일명은 경로 접두어를 제거한 순수 이름만 쓴다.
pub async fn fetch_analysis_report(
    policy: &RetryPolicy,
    file_name: &str,
) -> Result<AnalysisReport> {
    let name = bare_file_name(file_name);
    let url = format!("/api/drafts/analysis/{}", urlencoding::encode(name));

    fetch_with_retry(
        policy,
        |_| {
            let url = url.clone();
            async move {
                let resp = http_get(&url, None).await?;

                if resp.status() == 404 {
                    return Ok(PollOutcome::NotReady);
                }
                if !resp.ok() {
                    return Err(response_error(&resp).await);
                }

                let report: AnalysisReport = response_json(&resp).await?;
                Ok(PollOutcome::Ready(report))
            }
        },
        |delay| TimeoutFuture::new(delay.as_millis() as u32),
    )
    .await
}

/// 생성 결과 파일 다운로드 경로
pub fn download_url(result_file: &str) -> String {
    format!("/download/{}", urlencoding::encode(result_file))
}
