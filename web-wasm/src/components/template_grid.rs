//! 템플릿 카드 그리드 컴포넌트
//!
//! 검색 결과를 서버가 내려준 순서 그대로 카드로 렌더링한다.
//! 카드 체크박스는 선택 저장소 시그널을 그대로 비추므로, 상한 초과로
//! 저장소가 바뀌지 않으면 체크 표시도 원래대로 돌아간다.

use draft_ai_common::{card_preview, format_date_korean, SelectionStore, TemplateRecord};
use leptos::prelude::*;

#[component]
pub fn TemplateGrid<FT, FO>(
    templates: ReadSignal<Vec<TemplateRecord>>,
    selection: ReadSignal<SelectionStore>,
    on_toggle: FT,
    on_open: FO,
) -> impl IntoView
where
    FT: Fn(TemplateRecord) + 'static + Clone + Send + Sync,
    FO: Fn(TemplateRecord) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="template-grid">
            <For
                each=move || templates.get()
                key=|template| template.id.clone()
                children=move |template| {
                    let on_toggle = on_toggle.clone();
                    let on_open = on_open.clone();
                    view! {
                        <TemplateCard
                            template=template
                            selection=selection
                            on_toggle=on_toggle
                            on_open=on_open
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn TemplateCard<FT, FO>(
    template: TemplateRecord,
    selection: ReadSignal<SelectionStore>,
    on_toggle: FT,
    on_open: FO,
) -> impl IntoView
where
    FT: Fn(TemplateRecord) + 'static + Clone + Send + Sync,
    FO: Fn(TemplateRecord) + 'static + Clone + Send + Sync,
{
    let preview = card_preview(template.preview_source());
    let date_label =
        format_date_korean(&template.date).unwrap_or_else(|| "날짜 정보 없음".to_string());
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

    let is_selected = {
        let id = template.id.clone();
        move || selection.get().contains(&id)
    };
    let is_selected_class = is_selected.clone();
    let is_selected_checkbox = is_selected.clone();

    view! {
        <div class="template-card" class:selected=is_selected_class>
            <div class="card-top">
                <span class="badge">{doc_type_label}</span>
                <div class="card-top-right">
                    <label class="select-check">
                        <input
                            type="checkbox"
                            prop:checked=move || is_selected_checkbox()
                            on:change={
                                let on_toggle = on_toggle.clone();
                                let template = template.clone();
                                move |_| on_toggle(template.clone())
                            }
                        />
                        "선택"
                    </label>
                    <span class="card-date">{date_label}</span>
                </div>
            </div>

            <h3
                class="card-title"
                on:click={
                    let on_open = on_open.clone();
                    let template = template.clone();
                    move |_| on_open(template.clone())
                }
            >
                {title_label}
            </h3>

            <p class="card-preview">{preview}</p>

            <div class="card-bottom">
                <span class="card-ministry">{ministry_label}</span>
                <button
                    class="view-detail-btn"
                    on:click={
                        let on_open = on_open.clone();
                        let template = template.clone();
                        move |_| on_open(template.clone())
                    }
                >
                    "자세히 보기"
                </button>
            </div>
        </div>
    }
}
