//! 검색 질의 구성과 입력 검증
//!
//! 폼 상태를 그대로 받아 검증하고, 검색 API 쿼리 문자열을 만든다.
//! 담당자(manager) 파라미터 처리는 화면 사본마다 달랐으므로
//! [`ManagerFilterMode`]에 따라 분기한다.

use crate::config::ManagerFilterMode;
use crate::types::DocType;

/// 검색 폼 입력 (가공 전 원본 값)
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub keyword: String,
    pub doc_type: String,
    pub manager: String,
}

/// 폼 검증 실패 사유
///
/// 실패한 입력란으로 포커스를 돌려야 하므로 메시지와 함께 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInputError {
    EmptyKeyword,
    EmptyDocType,
    ManagerRequired,
}

impl SearchInputError {
    pub fn message(&self) -> &'static str {
        match self {
            SearchInputError::EmptyKeyword => "검색어를 입력해주세요.",
            SearchInputError::EmptyDocType => "문서 유형을 선택해주세요.",
            SearchInputError::ManagerRequired => "보도자료 검색 시 담당자 정보가 필요합니다.",
        }
    }

    /// 포커스를 옮길 입력란의 요소 id
    pub fn field_id(&self) -> &'static str {
        match self {
            SearchInputError::EmptyKeyword => "search-input",
            SearchInputError::EmptyDocType => "doc-type",
            SearchInputError::ManagerRequired => "manager-input",
        }
    }
}

/// 검색 실행 전 폼 검증
///
/// 요청을 보내기 전에 막는 클라이언트 검증이며, 위반 시 어떤 요청도
/// 발생해서는 안 된다.
pub fn validate_search(
    input: &SearchInput,
    mode: ManagerFilterMode,
) -> Result<(), SearchInputError> {
    if input.keyword.trim().is_empty() {
        return Err(SearchInputError::EmptyKeyword);
    }
    if input.doc_type.is_empty() {
        return Err(SearchInputError::EmptyDocType);
    }
    if mode == ManagerFilterMode::PressRequired
        && input.doc_type == DocType::Press.as_param()
        && input.manager.trim().is_empty()
    {
        return Err(SearchInputError::ManagerRequired);
    }
    Ok(())
}

/// 보고서 요청 전 검증 실패 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportInputError {
    TooShort { min: usize },
    NoSelection,
}

impl ReportInputError {
    pub fn message(&self) -> String {
        match self {
            ReportInputError::TooShort { min } => {
                format!("보고서 내용을 최소 {}자 이상 입력해주세요.", min)
            }
            ReportInputError::NoSelection => "선택된 템플릿이 없습니다.".to_string(),
        }
    }
}

/// 보고서 생성 요청 전 검증
///
/// 입력 길이는 trim 후 문자 수 기준이며, 위반 시 요청을 보내지 않는다.
pub fn validate_report(
    user_input: &str,
    selection_count: usize,
    min_len: usize,
) -> Result<(), ReportInputError> {
    if user_input.trim().chars().count() < min_len {
        return Err(ReportInputError::TooShort { min: min_len });
    }
    if selection_count == 0 {
        return Err(ReportInputError::NoSelection);
    }
    Ok(())
}

/// 검색 API 쿼리 문자열 구성
///
/// `page`, `per_page`는 항상 포함. 키워드는 trim 후 비어 있지 않을 때만,
/// 문서 유형은 `all`이 아닐 때만 포함한다.
pub fn build_search_query(
    input: &SearchInput,
    page: u32,
    per_page: u32,
    mode: ManagerFilterMode,
) -> String {
    let mut query = format!("page={}&per_page={}", page, per_page);

    let keyword = input.keyword.trim();
    if !keyword.is_empty() {
        query.push_str("&keyword=");
        query.push_str(&urlencoding::encode(keyword));
    }

    if !input.doc_type.is_empty() && input.doc_type != DocType::All.as_param() {
        query.push_str("&doc_type=");
        query.push_str(&urlencoding::encode(&input.doc_type));
    }

    match mode {
        ManagerFilterMode::Wildcard => {
            // 담당자 조건은 항상 와일드카드
            query.push_str("&manager=");
            query.push_str(&urlencoding::encode("%"));
        }
        ManagerFilterMode::PressRequired => {
            let manager = input.manager.trim();
            if input.doc_type == DocType::Press.as_param() && !manager.is_empty() {
                query.push_str("&manager=");
                query.push_str(&urlencoding::encode(manager));
            }
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(keyword: &str, doc_type: &str, manager: &str) -> SearchInput {
        SearchInput {
            keyword: keyword.to_string(),
            doc_type: doc_type.to_string(),
            manager: manager.to_string(),
        }
    }

    // =============================================
    // 검증 테스트
    // =============================================

    #[test]
    fn test_validate_requires_keyword() {
        let result = validate_search(&input("  ", "press", ""), ManagerFilterMode::Wildcard);
        assert_eq!(result, Err(SearchInputError::EmptyKeyword));
    }

    #[test]
    fn test_validate_requires_doc_type() {
        let result = validate_search(&input("예산", "", ""), ManagerFilterMode::Wildcard);
        assert_eq!(result, Err(SearchInputError::EmptyDocType));
    }

    #[test]
    fn test_validate_manager_required_for_press() {
        let result = validate_search(&input("예산", "press", " "), ManagerFilterMode::PressRequired);
        assert_eq!(result, Err(SearchInputError::ManagerRequired));

        // 와일드카드 모드에서는 담당자 없이 통과
        let result = validate_search(&input("예산", "press", ""), ManagerFilterMode::Wildcard);
        assert!(result.is_ok());

        // 보도자료가 아니면 담당자 불필요
        let result = validate_search(&input("예산", "speech", ""), ManagerFilterMode::PressRequired);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_error_messages() {
        assert_eq!(SearchInputError::EmptyKeyword.message(), "검색어를 입력해주세요.");
        assert_eq!(SearchInputError::EmptyKeyword.field_id(), "search-input");
    }

    #[test]
    fn test_validate_report_length_boundary() {
        // 9자는 거부, 10자는 통과 (요청 없이 차단되는 클라이언트 검증)
        let nine = "가".repeat(9);
        let result = validate_report(&nine, 2, 10);
        assert_eq!(result, Err(ReportInputError::TooShort { min: 10 }));

        let ten = "가".repeat(10);
        assert!(validate_report(&ten, 2, 10).is_ok());
    }

    #[test]
    fn test_validate_report_requires_selection() {
        let input = "충분히 긴 보고서 입력입니다";
        assert_eq!(
            validate_report(input, 0, 10),
            Err(ReportInputError::NoSelection)
        );
    }

    #[test]
    fn test_validate_report_trims_input() {
        let padded = format!("   {}   ", "가".repeat(9));
        assert!(validate_report(&padded, 1, 10).is_err());
    }

    // =============================================
    // 쿼리 구성 테스트
    // =============================================

    #[test]
    fn test_query_wildcard_manager_always_sent() {
        let query = build_search_query(&input("예산", "press", ""), 1, 12, ManagerFilterMode::Wildcard);
        assert!(query.starts_with("page=1&per_page=12"));
        assert!(query.contains("&keyword=%EC%98%88%EC%82%B0"));
        assert!(query.contains("&doc_type=press"));
        assert!(query.ends_with("&manager=%25"));
    }

    #[test]
    fn test_query_doc_type_all_omitted() {
        let query = build_search_query(&input("예산", "all", ""), 2, 12, ManagerFilterMode::Wildcard);
        assert!(!query.contains("doc_type"));
        assert!(query.contains("page=2"));
    }

    #[test]
    fn test_query_keyword_trimmed_and_omitted_when_blank() {
        let query = build_search_query(&input("  ", "speech", ""), 1, 12, ManagerFilterMode::Wildcard);
        assert!(!query.contains("keyword"));

        let query = build_search_query(&input(" 예산 ", "speech", ""), 1, 12, ManagerFilterMode::Wildcard);
        assert!(query.contains("&keyword=%EC%98%88%EC%82%B0"));
    }

    #[test]
    fn test_query_press_manager_only_in_press_mode() {
        let query = build_search_query(
            &input("예산", "press", " 김담당 "),
            1,
            12,
            ManagerFilterMode::PressRequired,
        );
        assert!(query.contains("&manager=%EA%B9%80%EB%8B%B4%EB%8B%B9"));

        // 보도자료가 아니면 담당자 파라미터 제외
        let query = build_search_query(
            &input("예산", "speech", "김담당"),
            1,
            12,
            ManagerFilterMode::PressRequired,
        );
        assert!(!query.contains("manager"));
    }
}
