//! 클라이언트 설정
//!
//! 병행 운영되던 두 화면 사본의 동작 차이는 제품 결정이 나기 전까지
//! 설정 값으로 유지한다 (담당자 필터, 상세 렌더링 방식, 최소 입력 길이).

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};

/// 담당자 검색 조건 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerFilterMode {
    /// 담당자 입력란 없이 항상 와일드카드(`%`)를 전송
    Wildcard,
    /// 보도자료 검색에서만 담당자 입력을 받고, 필수로 요구
    PressRequired,
}

/// 상세 모달 렌더링 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailRenderMode {
    /// 백엔드가 렌더링한 HTML 조각을 받아 주입
    ServerHtml,
    /// 보유한 레코드에서 문서 유형별 필드 맵으로 직접 구성
    FieldMap,
}

/// 클라이언트 설정
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClientConfig {
    /// 페이지당 결과 수
    pub per_page: u32,

    /// 검색 요청 타임아웃 (밀리초)
    pub search_timeout_ms: u32,

    pub manager_filter: ManagerFilterMode,
    pub detail_render: DetailRenderMode,

    /// 보고서 요청 최소 입력 길이 (문자 수)
    pub min_report_len: usize,

    /// 보고서 요청 최대 입력 길이 (문자 수)
    pub max_report_len: usize,

    /// 분석 결과 조회 재시도 정책
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            per_page: 12,
            search_timeout_ms: 10_000,
            manager_filter: ManagerFilterMode::Wildcard,
            detail_render: DetailRenderMode::ServerHtml,
            min_report_len: 10,
            max_report_len: 1000,
            retry: RetryPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.per_page, 12);
        assert_eq!(config.search_timeout_ms, 10_000);
        assert_eq!(config.manager_filter, ManagerFilterMode::Wildcard);
        assert_eq!(config.detail_render, DetailRenderMode::ServerHtml);
        assert_eq!(config.min_report_len, 10);
        assert_eq!(config.max_report_len, 1000);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ClientConfig {
            manager_filter: ManagerFilterMode::PressRequired,
            detail_render: DetailRenderMode::FieldMap,
            ..Default::default()
        };

        let json = serde_json::to_string(&config).expect("직렬화 실패");
        assert!(json.contains("\"press_required\""));
        assert!(json.contains("\"field_map\""));

        let restored: ClientConfig = serde_json::from_str(&json).expect("역직렬화 실패");
        assert_eq!(restored.manager_filter, ManagerFilterMode::PressRequired);
        assert_eq!(restored.detail_render, DetailRenderMode::FieldMap);
    }
}
