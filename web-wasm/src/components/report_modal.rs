//! 보고서 입력 모달 컴포넌트
//!
//! 입력 글자 수를 실시간 표시하고 상한을 넘는 입력은 잘라낸다.
//! 제출 중에는 버튼을 비활성화하고 라벨을 바꾼다.

use leptos::prelude::*;

#[component]
pub fn ReportModal<FC, FS>(
    open: ReadSignal<bool>,
    visible: ReadSignal<bool>,
    input: ReadSignal<String>,
    set_input: WriteSignal<String>,
    submitting: ReadSignal<bool>,
    max_len: usize,
    on_close: FC,
    on_submit: FS,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let count_label = move || format!("{}/{}", input.get().chars().count(), max_len);

    view! {
        <Show when=move || open.get()>
            {
                let on_close_backdrop = on_close.clone();
                let on_close_cancel = on_close.clone();
                let on_close_x = on_close.clone();
                let on_submit = on_submit.clone();
                view! {
                    <div
                        class="modal-backdrop"
                        class:visible=move || visible.get()
                        on:click=move |_| on_close_backdrop(())
                    >
                        <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                            <button class="modal-close" on:click=move |_| on_close_x(())>
                                "×"
                            </button>

                            <h2 class="modal-title">"보고서 생성"</h2>
                            <p class="modal-desc">
                                "선택한 템플릿을 참고해 초안을 작성합니다. 보고서에 담을 내용을 입력해주세요."
                            </p>

                            <textarea
                                class="report-input"
                                rows="6"
                                placeholder="예: 2024년 상반기 청년 일자리 지원 사업 성과, 주요 지표, 향후 계획..."
                                prop:value=move || input.get()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    if value.chars().count() > max_len {
                                        // 상한 초과분은 입력 자체를 잘라낸다
                                        set_input.set(value.chars().take(max_len).collect());
                                    } else {
                                        set_input.set(value);
                                    }
                                }
                            ></textarea>
                            <div class="character-count">{count_label}</div>

                            <div class="modal-actions">
                                <button
                                    class="btn btn-tertiary"
                                    on:click=move |_| on_close_cancel(())
                                >
                                    "취소"
                                </button>
                                <button
                                    class="btn btn-primary"
                                    disabled=move || submitting.get()
                                    on:click=move |_| on_submit(())
                                >
                                    {move || if submitting.get() { "생성 중..." } else { "생성하기" }}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }
        </Show>
    }
}
