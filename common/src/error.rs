//! 오류 타입 정의

use thiserror::Error;

/// 공통 오류 타입
///
/// 네트워크/HTTP/타임아웃/검증 오류를 구분한다.
/// 분석 결과가 아직 준비되지 않은 상태(404)는 오류가 아니며
/// [`crate::retry::PollOutcome`]으로 표현한다.
#[derive(Error, Debug)]
pub enum Error {
    #[error("네트워크 오류: {0}")]
    Network(String),

    #[error("API 요청 실패: {0}")]
    Http(u16),

    /// 백엔드가 내려준 구조화된 오류 메시지 (`{"error": "..."}`)
    #[error("{0}")]
    Backend(String),

    #[error("요청 시간이 초과되었습니다")]
    Timeout,

    #[error("JSON 해석 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("분석 결과를 가져오지 못했습니다 ({attempts}회 시도)")]
    RetryExhausted { attempts: u32 },
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("네트워크 오류"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_http() {
        let error = Error::Http(500);
        assert_eq!(format!("{}", error), "API 요청 실패: 500");
    }

    #[test]
    fn test_error_display_backend_passthrough() {
        let error = Error::Backend("일부 템플릿 정보를 찾을 수 없습니다.".to_string());
        assert_eq!(format!("{}", error), "일부 템플릿 정보를 찾을 수 없습니다.");
    }

    #[test]
    fn test_error_display_retry_exhausted() {
        let error = Error::RetryExhausted { attempts: 5 };
        let display = format!("{}", error);
        assert!(display.contains("5회"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("검색어를 입력해주세요.".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
    }
}
