//! Draft AI Common Library
//!
//! 코어 로직과 Web(WASM)에서 공유되는 타입과 유틸리티

pub mod artifact;
pub mod config;
pub mod detail;
pub mod error;
pub mod pagination;
pub mod preview;
pub mod query;
pub mod retry;
pub mod selection;
pub mod types;

pub use artifact::bare_file_name;
pub use config::{ClientConfig, DetailRenderMode, ManagerFilterMode};
pub use detail::{detail_fields, DetailField};
pub use error::{Error, Result};
pub use pagination::{page_window, total_pages, PageState, PageWindow};
pub use preview::{card_preview, format_content, format_date_korean};
pub use query::{
    build_search_query, validate_report, validate_search, ReportInputError, SearchInput,
    SearchInputError,
};
pub use retry::{fetch_with_retry, PollOutcome, RetryPolicy};
pub use selection::{AddOutcome, SelectionStore, MAX_SELECTED};
pub use types::{
    AnalysisReport, AnalyzeContentResult, AnalyzeTemplatesResult, DocType, DraftResult,
    SearchResponse, StructureItem, TemplateAnalysis, TemplateRecord, TokenInfo,
};
