//! 검색 폼 컴포넌트
//!
//! 담당자 입력란은 담당자 필터 모드가 PressRequired이고 문서 유형이
//! 보도자료일 때만 나타난다 (와일드카드 모드는 입력 없이 `%` 전송).

use draft_ai_common::{DocType, ManagerFilterMode};
use leptos::prelude::*;

#[component]
pub fn SearchForm<F>(
    keyword: ReadSignal<String>,
    set_keyword: WriteSignal<String>,
    doc_type: ReadSignal<String>,
    set_doc_type: WriteSignal<String>,
    manager: ReadSignal<String>,
    set_manager: WriteSignal<String>,
    manager_filter: ManagerFilterMode,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let show_manager = move || {
        manager_filter == ManagerFilterMode::PressRequired
            && doc_type.get() == DocType::Press.as_param()
    };

    view! {
        <form
            class="search-form"
            on:submit={
                let on_submit = on_submit.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit(());
                }
            }
        >
            <div class="form-group search-keyword">
                <input
                    type="text"
                    id="search-input"
                    placeholder="검색어를 입력하세요..."
                    prop:value=move || keyword.get()
                    on:input=move |ev| {
                        set_keyword.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <select
                    id="doc-type"
                    on:change=move |ev| {
                        set_doc_type.set(event_target_value(&ev));
                    }
                >
                    <option value="" disabled=true selected=move || doc_type.get().is_empty()>
                        "문서 유형 선택"
                    </option>
                    {DocType::ALL_TYPES
                        .iter()
                        .map(|dt| {
                            let value = dt.as_param();
                            view! {
                                <option value=value selected=move || doc_type.get() == value>
                                    {dt.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=show_manager>
                <div class="form-group">
                    <input
                        type="text"
                        id="manager-input"
                        placeholder="담당자 이름"
                        prop:value=move || manager.get()
                        on:input=move |ev| {
                            set_manager.set(event_target_value(&ev));
                        }
                    />
                    <span class="required-mark">"필수"</span>
                </div>
            </Show>

            <button type="submit" class="btn btn-primary">
                "검색"
            </button>
        </form>
    }
}
