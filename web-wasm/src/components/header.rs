//! 헤더 컴포넌트

use crate::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn Header<F>(theme: ReadSignal<Theme>, on_toggle_theme: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"공공문서 템플릿 검색 · AI 보고서 초안"</h1>
            <button
                class="theme-toggle"
                title="테마 전환"
                on:click={
                    let on_toggle_theme = on_toggle_theme.clone();
                    move |_| on_toggle_theme(())
                }
            >
                {move || if theme.get() == Theme::Dark { "☀️" } else { "🌙" }}
            </button>
        </header>
    }
}
