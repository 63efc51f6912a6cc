//! 상세 모달 필드 맵
//!
//! 백엔드 HTML을 쓰지 않는 변형에서, 보유한 레코드만으로 문서 유형별
//! 메타 정보 표를 구성한다. docType 표기 문자열에 포함된 키워드로
//! 유형을 판별하며 먼저 일치한 유형이 우선한다.

use crate::preview::format_date_korean;
use crate::types::TemplateRecord;

/// 값이 없을 때 표기
const NO_INFO: &str = "정보 없음";

/// 상세 정보 한 줄 (라벨 + 값)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

fn field(label: &'static str, value: &str) -> DetailField {
    DetailField {
        label,
        value: if value.trim().is_empty() {
            NO_INFO.to_string()
        } else {
            value.to_string()
        },
    }
}

fn date_field(label: &'static str, date: &str) -> DetailField {
    DetailField {
        label,
        value: format_date_korean(date).unwrap_or_else(|| NO_INFO.to_string()),
    }
}

/// 문서 유형별 상세 필드 구성
///
/// 어떤 유형에도 해당하지 않으면 {유형, 날짜, ID} 기본 셋을 쓰고,
/// 문서 ID 행은 아직 없을 때만 끝에 덧붙인다.
pub fn detail_fields(record: &TemplateRecord) -> Vec<DetailField> {
    let doc_type = record.doc_type.as_str();

    let mut fields = if doc_type.contains("보도자료") {
        vec![
            field("발행 부처", &record.ministry),
            field("발행 부서", &record.department),
            field("담당자", &record.manager),
            date_field("보도일자", &record.date),
            field("보도시점", &record.time),
        ]
    } else if doc_type.contains("연설문") {
        vec![
            field("연설자", &record.person),
            field("연설 장소", &record.place),
            date_field("연설일", &record.date),
        ]
    } else if doc_type.contains("발간사") {
        vec![
            field("작성자", &record.person),
            date_field("발간일", &record.date),
        ]
    } else if doc_type.contains("정책보고서") {
        vec![
            field("발행 부처", &record.ministry),
            field("발행 부서", &record.department),
            field("담당자", &record.manager),
            date_field("작성일", &record.date),
        ]
    } else if doc_type.contains("회의") || doc_type.contains("행사계획") {
        vec![
            date_field("일자", &record.date),
            field("장소", &record.place),
            field("참석자", &record.person),
        ]
    } else {
        vec![
            field("문서 유형", doc_type),
            date_field("날짜", &record.date),
            field("문서 ID", &record.id),
        ]
    };

    if !fields.iter().any(|f| f.label == "문서 ID") {
        fields.push(field("문서 ID", &record.id));
    }

    fields
}
