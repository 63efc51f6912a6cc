//! 메인 애플리케이션 컴포넌트
//!
//! 검색 → 카드 렌더링 → 선택 → 보고서 생성/분석으로 이어지는 전체
//! 흐름의 상태와 핸들러를 한곳에서 묶는다. 선택 목록은
//! [`SelectionStore`] 시그널 하나가 단일 진실이며, 모든 변이는
//! 시그널 갱신을 통해 즉시 화면에 반영된다.

use crate::api;
use crate::components::{
    analysis_modal::{AnalysisBusyOverlay, AnalysisModal},
    detail_modal::DetailModal,
    header::Header,
    pagination::Pagination,
    report_modal::ReportModal,
    result_modal::ResultModal,
    search_form::SearchForm,
    selection_panel::SelectionPanel,
    template_grid::TemplateGrid,
};
use crate::theme;
use draft_ai_common::{
    build_search_query, detail_fields, total_pages, validate_report, validate_search, AddOutcome,
    AnalysisReport, ClientConfig, DetailField, DetailRenderMode, DraftResult, Error, PageState,
    Result, RetryPolicy, SearchInput, SearchResponse, SelectionStore, TemplateRecord,
};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// 페이지 전환/모달 표시 전 렌더링 안정화 대기 (밀리초)
const SETTLE_DELAY_MS: u32 = 50;

/// 모달 페이드 인 시작 지연 (밀리초)
const FADE_IN_DELAY_MS: u32 = 10;

/// 모달 페이드 아웃 시간 (밀리초, CSS transition과 일치)
const FADE_OUT_MS: u32 = 300;

/// 검색 결과 영역 상태
#[derive(Clone, PartialEq)]
pub enum SearchView {
    /// 첫 진입: 안내 문구만 표시
    Initial,
    /// 결과 목록과 페이지네이션 표시
    Results,
    /// 결과 없음 문구 표시
    Empty,
    /// 오류/타임아웃 문구 표시
    Failed(String),
}

impl SearchView {
    /// 검색 응답에 따른 다음 화면 상태
    pub fn from_response(resp: &SearchResponse) -> SearchView {
        if let Some(message) = &resp.error {
            return SearchView::Failed(format!("오류가 발생했습니다: {}", message));
        }
        if resp.items.is_empty() {
            SearchView::Empty
        } else {
            SearchView::Results
        }
    }
}

/// 상세 모달 상태
#[derive(Clone)]
pub struct DetailState {
    pub record: TemplateRecord,
    pub content: DetailContent,
}

/// 상세 모달 본문
#[derive(Clone)]
pub enum DetailContent {
    Loading,
    Html(String),
    Fields(Vec<DetailField>),
    Failed(String),
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn focus_field(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    if let Some(element) = element {
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    }
}

/// 모달이 열려 있는 동안 body 스크롤 정지
fn set_body_modal_open(open: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    let result = if open {
        body.class_list().add_1("modal-open")
    } else {
        body.class_list().remove_1("modal-open")
    };
    if result.is_err() {
        gloo::console::warn!("body 클래스 갱신 실패");
    }
}

/// 내용 분석 요청 후 결과 산출물을 재시도 조회
async fn analyze_content_and_fetch(jsonl_file: &str, retry: RetryPolicy) -> Result<AnalysisReport> {
    let content = api::drafts::analyze_content(jsonl_file).await?;
    api::drafts::fetch_analysis_report(&retry, &content.output_file).await
}

/// 메인 애플리케이션 컴포넌트
#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::default();

    // 검색 폼
    let (keyword, set_keyword) = signal(String::new());
    let (doc_type, set_doc_type) = signal(String::new());
    let (manager, set_manager) = signal(String::new());

    // 검색 결과
    let (view, set_view) = signal(SearchView::Initial);
    let (loading, set_loading) = signal(false);
    let (templates, set_templates) = signal(Vec::<TemplateRecord>::new());
    let (total_count, set_total_count) = signal(0u32);
    let (page_state, set_page_state) = signal(PageState::default());
    let (search_seq, set_search_seq) = signal(0u64);

    // 선택 템플릿
    let (selection, set_selection) = signal(SelectionStore::new());

    // 상세 모달
    let (detail, set_detail) = signal(None::<DetailState>);
    let (detail_visible, set_detail_visible) = signal(false);

    // 보고서 모달
    let (report_open, set_report_open) = signal(false);
    let (report_visible, set_report_visible) = signal(false);
    let (report_input, set_report_input) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // 생성 결과
    let (draft, set_draft) = signal(None::<DraftResult>);
    let (draft_visible, set_draft_visible) = signal(false);

    // 분석
    let (analyzing, set_analyzing) = signal(false);
    let (analysis_busy, set_analysis_busy) = signal(false);
    let (analysis, set_analysis) = signal(None::<AnalysisReport>);
    let (analysis_visible, set_analysis_visible) = signal(false);

    // 테마
    let (current_theme, set_theme) = signal(theme::load_theme());
    theme::apply_theme(current_theme.get_untracked());

    // 모달이 하나라도 열려 있으면 body 스크롤 정지
    Effect::new(move |_| {
        let open = detail.get().is_some()
            || report_open.get()
            || draft.get().is_some()
            || analysis.get().is_some()
            || analysis_busy.get();
        set_body_modal_open(open);
    });

    let on_toggle_theme = move |_: ()| {
        let next = current_theme.get_untracked().toggled();
        set_theme.set(next);
        theme::apply_theme(next);
        theme::store_theme(next);
    };

    // 검색 실행: 요청이 추월당하면 늦은 응답은 버린다
    let run_search = move |page: u32| {
        let seq = search_seq.get_untracked() + 1;
        set_search_seq.set(seq);
        set_loading.set(true);

        spawn_local(async move {
            let input = SearchInput {
                keyword: keyword.get_untracked(),
                doc_type: doc_type.get_untracked(),
                manager: manager.get_untracked(),
            };
            let query = build_search_query(&input, page, config.per_page, config.manager_filter);
            let result = api::search::search_templates(&query, config.search_timeout_ms).await;

            if search_seq.get_untracked() != seq {
                return;
            }
            set_loading.set(false);

            match result {
                Ok(resp) => {
                    let next_view = SearchView::from_response(&resp);
                    if next_view == SearchView::Results {
                        set_total_count.set(resp.total_count);
                        set_page_state.set(PageState {
                            current_page: page,
                            total_pages: total_pages(resp.total_count, config.per_page),
                        });
                        set_templates.set(resp.items);
                    } else {
                        set_templates.set(Vec::new());
                    }
                    set_view.set(next_view);
                }
                Err(Error::Timeout) => {
                    set_view.set(SearchView::Failed(
                        "요청 시간이 초과되었습니다. 잠시 후 다시 시도해주세요.".to_string(),
                    ));
                }
                Err(e) => {
                    gloo::console::error!(format!("검색 요청 오류: {}", e));
                    set_view.set(SearchView::Failed(format!("오류가 발생했습니다: {}", e)));
                }
            }
        });
    };

    // 검색 폼 제출
    let on_search_submit = move |_: ()| {
        let input = SearchInput {
            keyword: keyword.get_untracked(),
            doc_type: doc_type.get_untracked(),
            manager: manager.get_untracked(),
        };

        if let Err(err) = validate_search(&input, config.manager_filter) {
            alert(err.message());
            focus_field(err.field_id());
            return;
        }

        // 이전 결과 정리 후 1페이지부터 다시 검색
        set_view.set(SearchView::Initial);
        set_templates.set(Vec::new());
        set_page_state.set(PageState::default());

        spawn_local(async move {
            TimeoutFuture::new(SETTLE_DELAY_MS).await;
            run_search(1);
        });
    };

    // 페이지 버튼 클릭
    let on_page = move |page: u32| {
        spawn_local(async move {
            TimeoutFuture::new(SETTLE_DELAY_MS).await;
            run_search(page);
        });
    };

    // 카드 체크박스 토글
    let on_toggle_select = move |record: TemplateRecord| {
        let already = selection.get_untracked().contains(&record.id);

        if already {
            set_selection.update(|store| {
                store.remove(&record.id);
            });
        } else {
            let mut outcome = AddOutcome::Added;
            // 상한 초과 시에도 update 알림이 가면서 체크박스가 원래 상태로 돌아간다
            set_selection.update(|store| {
                outcome = store.add(&record);
            });
            if outcome == AddOutcome::CapReached {
                alert("최대 5개까지 템플릿을 선택할 수 있습니다.");
            }
        }
    };

    let on_remove_selected = move |id: String| {
        set_selection.update(|store| {
            store.remove(&id);
        });
    };

    let on_clear_selected = move |_: ()| {
        set_selection.update(|store| store.clear());
    };

    // 상세 모달 열기
    let open_detail = move |record: TemplateRecord| {
        let content = match config.detail_render {
            DetailRenderMode::FieldMap => DetailContent::Fields(detail_fields(&record)),
            DetailRenderMode::ServerHtml => DetailContent::Loading,
        };
        let id = record.id.clone();
        set_detail.set(Some(DetailState { record, content }));

        set_detail_visible.set(false);
        spawn_local(async move {
            TimeoutFuture::new(FADE_IN_DELAY_MS).await;
            set_detail_visible.set(true);
        });

        if config.detail_render == DetailRenderMode::ServerHtml {
            spawn_local(async move {
                let result = api::search::fetch_template_detail(&id).await;
                set_detail.update(|state| {
                    let Some(state) = state else { return };
                    if state.record.id != id {
                        return;
                    }
                    state.content = match result {
                        Ok(html) => DetailContent::Html(html),
                        Err(e) => {
                            gloo::console::error!(format!("상세 정보 로드 오류: {}", e));
                            DetailContent::Failed(format!(
                                "상세 정보를 불러오는 중 오류가 발생했습니다: {}",
                                e
                            ))
                        }
                    };
                });
            });
        }
    };

    let close_detail = move |_: ()| {
        set_detail_visible.set(false);
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            set_detail.set(None);
        });
    };

    // 보고서 모달 열기/닫기
    let open_report = move |_: ()| {
        set_report_input.set(String::new());
        set_report_open.set(true);
        set_report_visible.set(false);
        spawn_local(async move {
            TimeoutFuture::new(FADE_IN_DELAY_MS).await;
            set_report_visible.set(true);
        });
    };

    let close_report = move |_: ()| {
        set_report_visible.set(false);
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            set_report_open.set(false);
        });
    };

    // 보고서 생성 요청
    let submit_report = move |_: ()| {
        let user_input = report_input.get_untracked().trim().to_string();

        let selected = selection.get_untracked().len();
        if let Err(err) = validate_report(&user_input, selected, config.min_report_len) {
            alert(&err.message());
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let ids = selection.get_untracked().ids();
            let result = api::drafts::generate_draft(&ids, &user_input).await;
            set_submitting.set(false);

            match result {
                Ok(draft_result) => {
                    set_draft.set(Some(draft_result));
                    set_draft_visible.set(false);
                    close_report(());
                    spawn_local(async move {
                        TimeoutFuture::new(FADE_IN_DELAY_MS).await;
                        set_draft_visible.set(true);
                    });
                }
                Err(e) => {
                    gloo::console::error!(format!("보고서 생성 오류: {}", e));
                    alert(&format!("보고서 생성 중 오류가 발생했습니다: {}", e));
                }
            }
        });
    };

    let close_draft = move |_: ()| {
        set_draft_visible.set(false);
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            set_draft.set(None);
        });
    };

    // 템플릿 분석: 수집 → (확인 후) NLP 내용 분석 → 결과 조회
    let run_analysis = move |_: ()| {
        if selection.get_untracked().is_empty() {
            alert("선택된 템플릿이 없습니다.");
            return;
        }
        // 같은 산출물에 대한 중복 조회 방지
        if analyzing.get_untracked() || analysis_busy.get_untracked() {
            return;
        }

        set_analyzing.set(true);
        spawn_local(async move {
            let ids = selection.get_untracked().ids();

            match api::drafts::analyze_templates(&ids).await {
                Ok(summary) => {
                    alert(&format!(
                        "템플릿 분석 완료: {}개 템플릿이 {} 파일에 저장되었습니다.",
                        summary.template_count, summary.output_file
                    ));

                    let proceed = confirm(
                        "수집된 템플릿 데이터를 자연어 처리(NLP) 기법으로 분석하시겠습니까?\n\
                         문서 구조, 어조, 핵심 키워드를 추출하고 결과는 JSON으로 저장됩니다.",
                    );
                    if proceed {
                        set_analysis_busy.set(true);
                        let result =
                            analyze_content_and_fetch(&summary.output_file, config.retry).await;
                        set_analysis_busy.set(false);

                        match result {
                            Ok(report) => {
                                set_analysis.set(Some(report));
                                set_analysis_visible.set(false);
                                spawn_local(async move {
                                    TimeoutFuture::new(FADE_IN_DELAY_MS).await;
                                    set_analysis_visible.set(true);
                                });
                            }
                            Err(e) => {
                                gloo::console::error!(format!("템플릿 내용 분석 오류: {}", e));
                                alert(&format!(
                                    "템플릿 내용 분석 중 오류가 발생했습니다: {}",
                                    e
                                ));
                            }
                        }
                    }
                }
                Err(e) => {
                    gloo::console::error!(format!("템플릿 분석 오류: {}", e));
                    alert(&format!("템플릿 분석 중 오류가 발생했습니다: {}", e));
                }
            }

            set_analyzing.set(false);
        });
    };

    let close_analysis = move |_: ()| {
        set_analysis_visible.set(false);
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            set_analysis.set(None);
        });
    };

    view! {
        <div class="container">
            <Header theme=current_theme on_toggle_theme=on_toggle_theme />

            <SearchForm
                keyword=keyword
                set_keyword=set_keyword
                doc_type=doc_type
                set_doc_type=set_doc_type
                manager=manager
                set_manager=set_manager
                manager_filter=config.manager_filter
                on_submit=on_search_submit
            />

            <SelectionPanel
                selection=selection
                analyzing=analyzing
                on_remove=on_remove_selected
                on_clear=on_clear_selected
                on_generate=open_report
                on_analyze=run_analysis
            />

            <Show when=move || loading.get()>
                <div class="loading-indicator">
                    <div class="spinner"></div>
                    <span>"검색 중..."</span>
                </div>
            </Show>

            <Show when=move || view.get() == SearchView::Initial>
                <div class="empty-state">
                    "검색어와 문서 유형을 선택해 템플릿을 찾아보세요."
                </div>
            </Show>

            <Show when=move || view.get() == SearchView::Empty>
                <div class="empty-state">"검색 결과가 없습니다."</div>
            </Show>

            {move || match view.get() {
                SearchView::Failed(message) => Some(view! {
                    <div class="empty-state error-text">{message}</div>
                }),
                _ => None,
            }}

            <Show when=move || view.get() == SearchView::Results>
                <div class="search-summary">
                    "총 "
                    <span class="result-count">{move || total_count.get()}</span>
                    "건의 템플릿을 찾았습니다."
                </div>

                <TemplateGrid
                    templates=templates
                    selection=selection
                    on_toggle=on_toggle_select
                    on_open=open_detail
                />

                <Pagination page_state=page_state on_page=on_page />
            </Show>

            <DetailModal detail=detail visible=detail_visible on_close=close_detail />

            <ReportModal
                open=report_open
                visible=report_visible
                input=report_input
                set_input=set_report_input
                submitting=submitting
                max_len=config.max_report_len
                on_close=close_report
                on_submit=submit_report
            />

            <ResultModal draft=draft visible=draft_visible on_close=close_draft />

            <AnalysisBusyOverlay visible=analysis_busy />
            <AnalysisModal report=analysis visible=analysis_visible on_close=close_analysis />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(count: usize, total: u32) -> SearchResponse {
        SearchResponse {
            items: (0..count)
                .map(|i| TemplateRecord {
                    id: i.to_string(),
                    ..Default::default()
                })
                .collect(),
            total_count: total,
            error: None,
        }
    }

    #[test]
    fn test_view_empty_when_no_items() {
        let next = SearchView::from_response(&response(0, 0));
        assert!(next == SearchView::Empty);
    }

    #[test]
    fn test_view_results_when_items_present() {
        let next = SearchView::from_response(&response(12, 37));
        assert!(next == SearchView::Results);
    }

    #[test]
    fn test_view_failed_on_backend_error() {
        let resp = SearchResponse {
            error: Some("지원하지 않는 문서 유형: memo".to_string()),
            ..Default::default()
        };

        match SearchView::from_response(&resp) {
            SearchView::Failed(message) => {
                assert!(message.contains("오류가 발생했습니다"));
                assert!(message.contains("지원하지 않는 문서 유형"));
            }
            _ => panic!("Failed 상태여야 한다"),
        }
    }
}
