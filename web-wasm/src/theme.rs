//! 라이트/다크 테마 전환과 저장
//!
//! 유일하게 새로고침을 넘어 유지되는 상태. localStorage의 `theme` 키에
//! 저장하고, 다크 모드는 body의 `dark` 클래스로 적용한다.

use gloo::storage::{LocalStorage, Storage};

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// 저장된 테마 불러오기 (없거나 읽기 실패 시 라이트)
pub fn load_theme() -> Theme {
    match LocalStorage::get::<String>(THEME_KEY) {
        Ok(value) if value == "dark" => Theme::Dark,
        _ => Theme::Light,
    }
}

/// 테마 저장 (저장 실패는 무시)
pub fn store_theme(theme: Theme) {
    let _ = LocalStorage::set(THEME_KEY, theme.as_str());
}

/// body 클래스에 테마 반영
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let class_list = body.class_list();
    let result = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
    if result.is_err() {
        gloo::console::warn!("테마 클래스 적용 실패");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_as_str() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
