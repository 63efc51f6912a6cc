//! 생성 결과 모달 컴포넌트
//!
//! 생성된 본문, 토큰/비용 정보, 클립보드 복사, 산출물 다운로드 링크를
//! 담는 오버레이. 복사 버튼 라벨은 성공 후 2초 동안 바뀌었다 돌아온다.

use crate::api::drafts::download_url;
use draft_ai_common::DraftResult;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

/// 복사 성공 표시 유지 시간 (밀리초)
const COPY_FEEDBACK_MS: u32 = 2000;

/// 천 단위 구분 표기 (JS toLocaleString에 대응)
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// 비용 표기: 정수면 천 단위 구분, 소수면 한 자리까지
fn format_cost(cost_krw: f64) -> String {
    if cost_krw.fract().abs() < f64::EPSILON {
        group_digits(cost_krw as u64)
    } else {
        format!("{:.1}", cost_krw)
    }
}

#[component]
pub fn ResultModal<F>(
    draft: ReadSignal<Option<DraftResult>>,
    visible: ReadSignal<bool>,
    on_close: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (copy_label, set_copy_label) = signal("복사");

    let copy_content = move |content: String| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();

        spawn_local(async move {
            match JsFuture::from(clipboard.write_text(&content)).await {
                Ok(_) => {
                    set_copy_label.set("복사됨");
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    set_copy_label.set("복사");
                }
                Err(e) => {
                    gloo::console::error!(format!("복사 실패: {:?}", e));
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("텍스트 복사에 실패했습니다.");
                    }
                }
            }
        });
    };

    view! {
        {move || {
            let result = draft.get()?;
            let on_close_backdrop = on_close.clone();
            let on_close_button = on_close.clone();

            let info = result.token_info.clone();
            let model_label = if info.model.is_empty() {
                "gpt-4o-mini".to_string()
            } else {
                info.model.clone()
            };
            let content_for_copy = result.content.clone();

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

                        <h2 class="modal-title">"생성된 보고서"</h2>
                        <div class="result-toolbar">
                            <p class="modal-desc">"AI가 생성한 문서입니다."</p>
                            <div class="result-toolbar-right">
                                <span class="token-summary">
                                    {format!(
                                        "약 {} 단어 (토큰: {})",
                                        info.estimated_words(),
                                        info.output_tokens
                                    )}
                                </span>
                                <button
                                    class="btn btn-small btn-outline"
                                    on:click=move |_| copy_content(content_for_copy.clone())
                                >
                                    {move || copy_label.get()}
                                </button>
                            </div>
                        </div>

                        <div class="result-content">{result.content.clone()}</div>

                        <div class="token-info">
                            <div class="token-info-head">
                                <h3>"토큰 사용 정보"</h3>
                                <span>
                                    {format!("추정 비용: {}원", format_cost(info.cost_krw))}
                                </span>
                            </div>
                            <div class="token-info-grid">
                                <div>
                                    <p>{format!("입력 토큰: {}", group_digits(info.input_tokens as u64))}</p>
                                    <p>{format!("출력 토큰: {}", group_digits(info.output_tokens as u64))}</p>
                                </div>
                                <div>
                                    <p>{format!("모델: {}", model_label)}</p>
                                    <p>{format!("처리 시간: {:.2}초", info.processing_time)}</p>
                                </div>
                            </div>
                        </div>

                        {result.result_file.as_ref().map(|file| view! {
                            <a class="btn btn-secondary download-link" href=download_url(file)>
                                "결과 파일 다운로드"
                            </a>
                        })}
                    </div>
                </div>
            })
        }}
    }
}
