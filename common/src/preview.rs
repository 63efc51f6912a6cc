//! 본문 미리보기/표시 가공
//!
//! 카드 미리보기는 표 태그를 들어내고 고정 안내 문구로 대체한 뒤
//! 150자로 자른다. 상세 모달 본문은 HTML이면 빈 단락만 정리해
//! 그대로 쓰고, 일반 텍스트면 줄 단위로 단락 태그를 입힌다.

use chrono::{Datelike, NaiveDate};

/// 카드 미리보기 최대 길이 (문자 수)
pub const PREVIEW_MAX_CHARS: usize = 150;

/// 표를 들어낸 자리에 붙이는 안내 문구
pub const TABLE_OMITTED_PREFIX: &str = "표 내용 생략... ";

/// ASCII 대소문자 무시 부분 문자열 탐색 (바이트 오프셋 반환)
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}

/// `<table>...</table>` 블록 제거
///
/// 반환값은 (표를 제거한 나머지, 표 존재 여부).
/// 닫는 태그가 없으면 문서 끝까지 표로 간주한다.
pub fn strip_tables(html: &str) -> (String, bool) {
    let mut out = String::new();
    let mut rest = html;
    let mut had_table = false;

    while let Some(start) = find_ci(rest, "<table") {
        had_table = true;
        out.push_str(&rest[..start]);

        let after_open = &rest[start..];
        match find_ci(after_open, "</table") {
            Some(close) => {
                let tail = &after_open[close..];
                match tail.find('>') {
                    Some(gt) => rest = &tail[gt + 1..],
                    None => rest = "",
                }
            }
            None => rest = "",
        }
    }

    out.push_str(rest);
    (out, had_table)
}

/// 태그를 걷어내고 공백을 접어 텍스트만 남긴다
fn strip_tags(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 문자 수 기준 잘라내기 (초과 시 말줄임표)
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// 카드 미리보기 텍스트 생성
pub fn card_preview(html: &str) -> String {
    let (without_tables, had_table) = strip_tables(html);
    let text = strip_tags(&without_tables);

    let combined = if had_table {
        format!("{}{}", TABLE_OMITTED_PREFIX, text)
    } else {
        text
    };

    truncate_chars(&combined, PREVIEW_MAX_CHARS)
}

/// HTML 포함 여부 판정: `<` 뒤에 영문자가 오고 이후에 `>`가 닫히는가
fn contains_html(content: &str) -> bool {
    let mut chars = content.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch == '<' {
            if let Some((_, next)) = chars.peek() {
                if next.is_ascii_alphabetic() && content[i..].contains('>') {
                    return true;
                }
            }
        }
    }
    false
}

/// 내용이 비어 있는 `<p></p>` 단락 제거
fn remove_empty_paragraphs(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;

    while let Some(start) = find_ci(rest, "<p>") {
        let body_start = start + 3;
        match find_ci(&rest[body_start..], "</p>") {
            Some(close) => {
                let body = &rest[body_start..body_start + close];
                if body.trim().is_empty() {
                    out.push_str(&rest[..start]);
                } else {
                    out.push_str(&rest[..body_start + close + 4]);
                }
                rest = &rest[body_start + close + 4..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// 상세 모달 본문 가공
///
/// HTML이면 빈 단락만 정리해 유지, 일반 텍스트면 줄 단위로
/// `<p>` 처리하고 빈 줄은 `<br>`로 바꾼다.
pub fn format_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    if contains_html(content) {
        remove_empty_paragraphs(content)
    } else {
        content
            .split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    "<br>".to_string()
                } else {
                    format!("<p>{}</p>", line)
                }
            })
            .collect()
    }
}

/// 날짜 문자열을 ko-KR 표기(`YYYY. M. D.`)로 변환
///
/// 해석할 수 없으면 None을 돌려주고 호출자가 대체 문구를 쓴다.
pub fn format_date_korean(date: &str) -> Option<String> {
    let candidate = date.trim().split(['T', ' ']).next()?;
    if candidate.is_empty() {
        return None;
    }

    for fmt in ["%Y-%m-%d", "%Y.%m.%d", "%Y%m%d"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(candidate, fmt) {
            return Some(format!(
                "{}. {}. {}.",
                parsed.year(),
                parsed.month(),
                parsed.day()
            ));
        }
    }
    None
}
