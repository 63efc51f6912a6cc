//! 템플릿 상세 모달 컴포넌트
//!
//! 본문은 설정에 따라 두 방식 중 하나로 채워진다:
//! 백엔드 HTML 주입(로딩 스피너/오류 블록 포함) 또는
//! 문서 유형별 필드 맵 기반 클라이언트 렌더링.

use crate::app::{DetailContent, DetailState};
use draft_ai_common::{format_content, format_date_korean};
use leptos::prelude::*;

#[component]
pub fn DetailModal<F>(
    detail: ReadSignal<Option<DetailState>>,
    visible: ReadSignal<bool>,
    on_close: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        {move || {
            let state = detail.get()?;
            let on_close_backdrop = on_close.clone();
            let on_close_button = on_close.clone();

            let title = if state.record.title.is_empty() {
                "제목 없음".to_string()
            } else {
                state.record.title.clone()
            };
            let doc_type_label = if state.record.doc_type.is_empty() {
                "문서".to_string()
            } else {
                state.record.doc_type.clone()
            };
            let date_label = format_date_korean(&state.record.date)
                .unwrap_or_else(|| "날짜 정보 없음".to_string());

            let body_text = if !state.record.content.is_empty() {
                state.record.content.clone()
            } else if !state.record.description.is_empty() {
                state.record.description.clone()
            } else {
                "내용 정보가 없습니다.".to_string()
            };

            Some(view! {
                <div
                    class="modal-backdrop"
                    class:visible=move || visible.get()
                    on:click=move |_| on_close_backdrop(())
                >
                    <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" on:click=move |_| on_close_button(())>
                            "×"
                        </button>

                        <h2 class="modal-title">{title}</h2>
                        <div class="modal-meta">
                            <span class="badge">{doc_type_label}</span>
                            <span class="card-date">{date_label}</span>
                        </div>

                        {match state.content {
                            DetailContent::Loading => view! {
                                <div class="modal-loading">
                                    <div class="spinner"></div>
                                    <span>"상세 정보 로딩 중..."</span>
                                </div>
                            }
                            .into_any(),
                            DetailContent::Html(html) => view! {
                                <div class="detail-body" inner_html=html></div>
                            }
                            .into_any(),
                            DetailContent::Fields(fields) => view! {
                                <div class="detail-body">
                                    <h3>"문서 정보"</h3>
                                    <dl class="detail-fields">
                                        {fields
                                            .into_iter()
                                            .map(|field| view! {
                                                <div class="detail-field">
                                                    <dt>{field.label}</dt>
                                                    <dd>{field.value}</dd>
                                                </div>
                                            })
                                            .collect_view()}
                                    </dl>
                                    <h3>"내용"</h3>
                                    <div
                                        class="detail-content"
                                        inner_html=format_content(&body_text)
                                    ></div>
                                </div>
                            }
                            .into_any(),
                            DetailContent::Failed(message) => view! {
                                <div class="detail-error">{message}</div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            })
        }}
    }
}
