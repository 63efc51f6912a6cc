//! 백엔드 연동 타입 정의
//!
//! 검색/상세/보고서 생성/분석 API가 주고받는 타입:
//! - TemplateRecord: 검색 결과 한 건 (문서 템플릿 메타데이터)
//! - SearchResponse: 검색 응답 (items + totalCount)
//! - DraftResult / TokenInfo: 보고서 생성 결과
//! - AnalysisReport: NLP 분석 결과

use serde::{Deserialize, Serialize};

/// 문서 유형
///
/// 백엔드 검색 API의 `doc_type` 파라미터 값과 화면 표기 이름의 대응.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    Press,
    Speech,
    Publication,
    Report,
    Plan,
    All,
}

impl DocType {
    pub const ALL_TYPES: [DocType; 6] = [
        DocType::All,
        DocType::Press,
        DocType::Speech,
        DocType::Publication,
        DocType::Report,
        DocType::Plan,
    ];

    /// 검색 API 파라미터 값
    pub fn as_param(&self) -> &'static str {
        match self {
            DocType::Press => "press",
            DocType::Speech => "speech",
            DocType::Publication => "publication",
            DocType::Report => "report",
            DocType::Plan => "plan",
            DocType::All => "all",
        }
    }

    /// 화면 표기 이름
    pub fn label(&self) -> &'static str {
        match self {
            DocType::Press => "보도자료",
            DocType::Speech => "연설문",
            DocType::Publication => "발간사",
            DocType::Report => "정책보고서",
            DocType::Plan => "회의·행사계획",
            DocType::All => "전체",
        }
    }
}

/// 검색 결과 한 건: 문서 템플릿 메타데이터
///
/// 클라이언트는 사본만 보유하며 수정하지 않는다.
/// 문서 유형에 따라 채워지는 필드가 다르다 (없는 필드는 빈 문자열).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateRecord {
    pub id: String,
    pub title: String,
    pub doc_type: String,
    pub ministry: String,
    pub department: String,
    pub manager: String,
    pub date: String,
    pub person: String,
    pub place: String,
    pub time: String,

    /// 본문 전체
    pub content: String,

    /// 백엔드가 미리 잘라 보낸 미리보기 (`desc`로 내려오는 변형 존재)
    #[serde(alias = "desc")]
    pub description: String,
}

impl TemplateRecord {
    /// 카드 미리보기에 쓸 원문: description 우선, 없으면 content
    pub fn preview_source(&self) -> &str {
        if !self.description.is_empty() {
            &self.description
        } else {
            &self.content
        }
    }
}

/// 검색 응답
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub items: Vec<TemplateRecord>,
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    pub error: Option<String>,
}

/// 토큰 사용량/비용 정보 (백엔드는 snake_case로 내려준다)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TokenInfo {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub cost_krw: f64,
    pub model: String,
    pub processing_time: f64,
}

impl TokenInfo {
    /// 출력 토큰 수 기반 단어 수 추정 (토큰 4개당 1단어)
    pub fn estimated_words(&self) -> u32 {
        self.output_tokens.div_ceil(4)
    }
}

/// 보고서 생성 결과
///
/// 구 버전 백엔드는 `report`/`token_usage` 키를 쓰므로 alias로 흡수한다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftResult {
    #[serde(default, alias = "report")]
    pub content: String,

    #[serde(default, alias = "token_usage")]
    pub token_info: TokenInfo,

    /// 다운로드 가능한 산출물 파일명
    #[serde(default, rename = "resultFile")]
    pub result_file: Option<String>,
}

/// 템플릿 수집 분석 응답
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeTemplatesResult {
    pub template_count: u32,
    pub output_file: String,
}

/// 내용(NLP) 분석 요청 접수 응답
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeContentResult {
    pub output_file: String,
}

/// NLP 분석 결과 문서
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    pub templates: Vec<TemplateAnalysis>,
}

/// 템플릿 한 건의 분석 결과
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateAnalysis {
    pub title: String,
    pub structure: Vec<StructureItem>,
    pub keywords: Vec<String>,
}

/// 문서 구조 항목
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureItem {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_record_default() {
        let record = TemplateRecord::default();
        assert_eq!(record.id, "");
        assert_eq!(record.doc_type, "");
    }

    #[test]
    fn test_template_record_deserialize() {
        let json = r#"{
            "id": "DOC-001",
            "title": "2024년 주요 정책 추진계획",
            "docType": "보도자료",
            "ministry": "기획재정부",
            "date": "2024-03-05"
        }"#;

        let record: TemplateRecord = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(record.id, "DOC-001");
        assert_eq!(record.doc_type, "보도자료");
        assert_eq!(record.ministry, "기획재정부");
        assert_eq!(record.manager, ""); // 기본값
    }

    #[test]
    fn test_template_record_desc_alias() {
        // 구 버전 백엔드는 description 대신 desc를 내려준다
        let json = r#"{"id": "A", "desc": "미리보기 본문"}"#;
        let record: TemplateRecord = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(record.description, "미리보기 본문");
    }

    #[test]
    fn test_template_record_preview_source() {
        let record = TemplateRecord {
            content: "본문 전체".to_string(),
            description: "미리보기".to_string(),
            ..Default::default()
        };
        assert_eq!(record.preview_source(), "미리보기");

        let record = TemplateRecord {
            content: "본문 전체".to_string(),
            ..Default::default()
        };
        assert_eq!(record.preview_source(), "본문 전체");
    }

    #[test]
    fn test_search_response_deserialize() {
        let json = r#"{
            "items": [{"id": "A", "title": "제목"}],
            "totalCount": 37
        }"#;

        let response: SearchResponse = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.total_count, 37);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_search_response_empty() {
        let response: SearchResponse = serde_json::from_str("{}").expect("역직렬화 실패");
        assert!(response.items.is_empty());
        assert_eq!(response.total_count, 0);
    }

    // =============================================
    // DraftResult / TokenInfo 테스트
    // =============================================

    #[test]
    fn test_draft_result_deserialize() {
        let json = r##"{
            "content": "# 보고서 제목\n본문",
            "token_info": {
                "input_tokens": 1200,
                "output_tokens": 340,
                "cost_krw": 12.5,
                "model": "gpt-4o-mini",
                "processing_time": 3.2
            },
            "resultFile": "draft_1718000000.md"
        }"##;

        let result: DraftResult = serde_json::from_str(json).expect("역직렬화 실패");
        assert!(result.content.starts_with("# 보고서 제목"));
        assert_eq!(result.token_info.output_tokens, 340);
        assert_eq!(result.result_file.as_deref(), Some("draft_1718000000.md"));
    }

    #[test]
    fn test_draft_result_legacy_aliases() {
        // report/token_usage 키를 쓰는 구 버전 응답
        let json = r#"{
            "report": "본문",
            "token_usage": {"input_tokens": 10, "output_tokens": 7}
        }"#;

        let result: DraftResult = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(result.content, "본문");
        assert_eq!(result.token_info.output_tokens, 7);
        assert!(result.result_file.is_none());
    }

    #[test]
    fn test_token_info_estimated_words() {
        let info = TokenInfo {
            output_tokens: 340,
            ..Default::default()
        };
        assert_eq!(info.estimated_words(), 85);

        let info = TokenInfo {
            output_tokens: 342,
            ..Default::default()
        };
        assert_eq!(info.estimated_words(), 86); // 올림
    }

    // =============================================
    // 분석 응답 테스트
    // =============================================

    #[test]
    fn test_analyze_templates_result_deserialize() {
        let json = r#"{"template_count": 3, "output_file": "templates_20240305.jsonl"}"#;
        let result: AnalyzeTemplatesResult = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(result.template_count, 3);
        assert_eq!(result.output_file, "templates_20240305.jsonl");
    }

    #[test]
    fn test_analysis_report_deserialize() {
        let json = r#"{
            "templates": [{
                "title": "보도자료 템플릿",
                "structure": [{"name": "제목"}, {"name": "개요"}],
                "keywords": ["정책", "추진"]
            }]
        }"#;

        let report: AnalysisReport = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(report.templates.len(), 1);
        assert_eq!(report.templates[0].structure.len(), 2);
        assert_eq!(report.templates[0].keywords, vec!["정책", "추진"]);
    }

    #[test]
    fn test_doc_type_param_label() {
        assert_eq!(DocType::Press.as_param(), "press");
        assert_eq!(DocType::Press.label(), "보도자료");
        assert_eq!(DocType::All.as_param(), "all");
        assert_eq!(DocType::ALL_TYPES.len(), 6);
    }
}
