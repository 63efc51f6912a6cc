//! 페이지네이션 컴포넌트
//!
//! 번호 버튼 윈도우 계산은 코어의 [`page_window`]가 담당하고,
//! 여기서는 버튼 목록을 펼쳐 그리기만 한다. 현재 페이지 버튼은
//! 클릭해도 아무 일도 하지 않는다.

use draft_ai_common::{page_window, PageState};
use leptos::prelude::*;

/// 펼쳐진 버튼 한 개
#[derive(Clone)]
struct PageButton {
    target: u32,
    label: String,
    current: bool,
}

fn expand_buttons(state: PageState) -> Vec<PageButton> {
    let Some(window) = page_window(state.current_page, state.total_pages) else {
        return Vec::new();
    };

    let current = state.current_page;
    let mut buttons = Vec::new();

    if window.has_prev {
        buttons.push(PageButton {
            target: 1,
            label: "처음".to_string(),
            current: false,
        });
        buttons.push(PageButton {
            target: current - 1,
            label: "이전".to_string(),
            current: false,
        });
    }

    for page in &window.pages {
        buttons.push(PageButton {
            target: *page,
            label: page.to_string(),
            current: *page == current,
        });
    }

    if window.has_next {
        buttons.push(PageButton {
            target: current + 1,
            label: "다음".to_string(),
            current: false,
        });
        buttons.push(PageButton {
            target: state.total_pages,
            label: "마지막".to_string(),
            current: false,
        });
    }

    buttons
}

#[component]
pub fn Pagination<F>(page_state: ReadSignal<PageState>, on_page: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send + Sync,
{
    view! {
        {move || {
            let buttons = expand_buttons(page_state.get());
            if buttons.is_empty() {
                return None;
            }

            let on_page = on_page.clone();
            Some(view! {
                <nav class="pagination">
                    {buttons
                        .into_iter()
                        .map(|button| {
                            let on_page = on_page.clone();
                            let PageButton { target, label, current } = button;
                            view! {
                                <button
                                    class="page-btn"
                                    class:current=current
                                    on:click=move |_| {
                                        if !current {
                                            on_page(target);
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_buttons_middle_page() {
        let buttons = expand_buttons(PageState {
            current_page: 7,
            total_pages: 20,
        });

        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["처음", "이전", "5", "6", "7", "8", "9", "다음", "마지막"]);

        let current: Vec<_> = buttons.iter().filter(|b| b.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].target, 7);

        // 이전/다음 버튼의 이동 대상
        assert_eq!(buttons[1].target, 6);
        assert_eq!(buttons[7].target, 8);
        assert_eq!(buttons[8].target, 20);
    }

    #[test]
    fn test_expand_buttons_first_page() {
        let buttons = expand_buttons(PageState {
            current_page: 1,
            total_pages: 3,
        });

        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "다음", "마지막"]);
    }

    #[test]
    fn test_expand_buttons_last_page() {
        let buttons = expand_buttons(PageState {
            current_page: 3,
            total_pages: 3,
        });

        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["처음", "이전", "1", "2", "3"]);
    }

    #[test]
    fn test_expand_buttons_single_page_hidden() {
        assert!(expand_buttons(PageState {
            current_page: 1,
            total_pages: 1,
        })
        .is_empty());
    }
}
