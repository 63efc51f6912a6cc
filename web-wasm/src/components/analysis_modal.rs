//! 템플릿 분석 진행 오버레이와 결과 모달

use draft_ai_common::AnalysisReport;
use leptos::prelude::*;

/// NLP 내용 분석이 도는 동안 덮는 전체 화면 오버레이
#[component]
pub fn AnalysisBusyOverlay(visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="modal-backdrop visible">
                <div class="analysis-busy">
                    <div class="spinner spinner-large"></div>
                    <p class="analysis-busy-title">"템플릿 내용 분석 중..."</p>
                    <p class="analysis-busy-desc">
                        "문서 구조, 어조, 핵심 키워드를 추출하고 있습니다."
                    </p>
                </div>
            </div>
        </Show>
    }
}

/// 분석 결과 모달
#[component]
pub fn AnalysisModal<F>(
    report: ReadSignal<Option<AnalysisReport>>,
    visible: ReadSignal<bool>,
    on_close: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        {move || {
            let result = report.get()?;
            let on_close_backdrop = on_close.clone();
            let on_close_button = on_close.clone();

            Some(view! {
                <div
                    class="modal-backdrop"
                    class:visible=move || visible.get()
                    on:click=move |_| on_close_backdrop(())
                >
                    <div class="modal-panel modal-wide" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" on:click=move |_| on_close_button(())>
                            "×"
                        </button>

                        <h2 class="modal-title">"템플릿 분석 결과"</h2>
                        <p class="modal-desc">
                            {format!("{}개 템플릿의 구조와 키워드입니다.", result.templates.len())}
                        </p>

                        <div class="analysis-list">
                            {result
                                .templates
                                .into_iter()
                                .map(|template| {
                                    let title = if template.title.is_empty() {
                                        "제목 없음".to_string()
                                    } else {
                                        template.title
                                    };
                                    view! {
                                        <div class="analysis-item">
                                            <h3>{title}</h3>

                                            <h4>"문서 구조"</h4>
                                            <ol class="structure-list">
                                                {template
                                                    .structure
                                                    .into_iter()
                                                    .map(|item| view! { <li>{item.name}</li> })
                                                    .collect_view()}
                                            </ol>

                                            <h4>"핵심 키워드"</h4>
                                            <div class="keyword-chips">
                                                {template
                                                    .keywords
                                                    .into_iter()
                                                    .map(|keyword| view! {
                                                        <span class="keyword-chip">{keyword}</span>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            })
        }}
    }
}
