//! 선택 템플릿 패널 컴포넌트
//!
//! 선택 저장소의 내용을 보여주고, 보고서 생성/분석의 진입점이 된다.
//! 두 동작 모두 선택이 하나 이상 있을 때만 가능하다.

use draft_ai_common::{format_date_korean, SelectionStore, TemplateRecord, MAX_SELECTED};
use leptos::prelude::*;

#[component]
pub fn SelectionPanel<FR, FC, FG, FA>(
    selection: ReadSignal<SelectionStore>,
    analyzing: ReadSignal<bool>,
    on_remove: FR,
    on_clear: FC,
    on_generate: FG,
    on_analyze: FA,
) -> impl IntoView
where
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FG: Fn(()) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
{
    let has_selection = move || !selection.get().is_empty();
    let count_label = move || format!("{}/{}", selection.get().len(), MAX_SELECTED);

    view! {
        <div class="selection-panel">
            <div class="selection-header">
                <h2>
                    "선택된 템플릿 "
                    <span class="selected-count">{count_label}</span>
                </h2>
                <Show when=has_selection>
                    <button
                        class="btn btn-small btn-tertiary"
                        on:click={
                            let on_clear = on_clear.clone();
                            move |_| on_clear(())
                        }
                    >
                        "모든 선택 취소"
                    </button>
                </Show>
            </div>

            <Show when=has_selection>
                <div class="selected-list">
                    <For
                        each=move || selection.get().list().to_vec()
                        key=|template| template.id.clone()
                        children={
                            let on_remove = on_remove.clone();
                            move |template| {
                                let on_remove = on_remove.clone();
                                view! { <SelectedItem template=template on_remove=on_remove /> }
                            }
                        }
                    />
                </div>
            </Show>

            <div class="selection-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || !has_selection() || analyzing.get()
                    on:click={
                        let on_analyze = on_analyze.clone();
                        move |_| on_analyze(())
                    }
                >
                    {move || if analyzing.get() { "분석 중..." } else { "템플릿 분석" }}
                </button>

                <button
                    class="btn btn-primary"
                    disabled=move || !has_selection()
                    on:click={
                        let on_generate = on_generate.clone();
                        move |_| on_generate(())
                    }
                >
                    "보고서 생성"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SelectedItem<FR>(template: TemplateRecord, on_remove: FR) -> impl IntoView
where
    FR: Fn(String) + 'static + Clone + Send + Sync,
{
    let doc_type_label = if template.doc_type.is_empty() {
        "문서".to_string()
    } else {
        template.doc_type.clone()
    };
    let title_label = if template.title.is_empty() {
        "제목 없음".to_string()
    } else {
        template.title.clone()
    };
    let ministry_label = if template.ministry.is_empty() {
        "부처 정보 없음".to_string()
    } else {
        template.ministry.clone()
    };
    let date_label =
        format_date_korean(&template.date).unwrap_or_else(|| "날짜 정보 없음".to_string());

    view! {
        <div class="selected-item">
            <div class="selected-item-info">
                <div class="selected-item-head">
                    <span class="badge">{doc_type_label}</span>
                    <h4>{title_label}</h4>
                </div>
                <p class="selected-item-meta">{format!("{} ({})", ministry_label, date_label)}</p>
            </div>
            <button
                class="remove-btn"
                title="선택 해제"
                on:click={
                    let on_remove = on_remove.clone();
                    let id = template.id.clone();
                    move |_| on_remove(id.clone())
                }
            >
                "×"
            </button>
        </div>
    }
}
