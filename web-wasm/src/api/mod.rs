//! 백엔드 API 연동
//!
//! fetch 기반 공통 호출 계층. 타임아웃은 AbortController로 요청 자체를
//! 중단시키므로, 타임아웃 이후 늦게 도착한 응답이 화면을 건드릴 수 없다.

pub mod drafts;
pub mod search;

use draft_ai_common::{Error, Result};
use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

fn js_error(context: &str, value: JsValue) -> Error {
    Error::Network(format!("{}: {:?}", context, value))
}

/// 요청 전송 공통 처리
///
/// `timeout_ms`가 주어지면 fetch와 타이머를 경쟁시키고, 타이머가 먼저
/// 끝나는 순간 요청을 중단한 뒤 [`Error::Timeout`]을 돌려준다.
async fn dispatch(url: &str, opts: &RequestInit, timeout_ms: Option<u32>) -> Result<Response> {
    let controller = AbortController::new().ok();
    if let Some(controller) = &controller {
        opts.set_signal(Some(&controller.signal()));
    }

    let request =
        Request::new_with_str_and_init(url, opts).map_err(|e| js_error("요청 생성 실패", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("요청 헤더 설정 실패", e))?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window 없음".to_string()))?;
    let fetch = JsFuture::from(window.fetch_with_request(&request));

    let resp_value = match timeout_ms {
        Some(ms) => match select(Box::pin(fetch), Box::pin(TimeoutFuture::new(ms))).await {
            Either::Left((result, _)) => result,
            Either::Right((_, _)) => {
                if let Some(controller) = &controller {
                    controller.abort();
                }
                return Err(Error::Timeout);
            }
        },
        None => fetch.await,
    };

    let resp_value = resp_value.map_err(|e| js_error("요청 실패", e))?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|e| js_error("응답 변환 실패", e))
}

/// GET 요청
pub(crate) async fn http_get(url: &str, timeout_ms: Option<u32>) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    dispatch(url, &opts, timeout_ms).await
}

/// JSON 본문을 싣는 POST 요청
pub(crate) async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<Response> {
    let payload = serde_json::to_string(body)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));
    dispatch(url, &opts, None).await
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// 2xx가 아닌 응답을 오류로 변환
///
/// 본문이 `{"error": "..."}` 형태면 그 메시지를 그대로 쓰고,
/// 아니면 상태 코드와 본문을 붙여 돌려준다.
pub(crate) async fn response_error(resp: &Response) -> Error {
    let status = resp.status();

    let text = match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
        if let Some(message) = body.error {
            return Error::Backend(message);
        }
    }

    if text.is_empty() {
        Error::Http(status)
    } else {
        Error::Backend(format!("API 요청 실패: {} - {}", status, text))
    }
}

/// 응답 본문을 JSON으로 해석
pub(crate) async fn response_json<T: DeserializeOwned>(resp: &Response) -> Result<T> {
    let promise = resp.json().map_err(|e| js_error("응답 본문 읽기 실패", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("응답 본문 읽기 실패", e))?;

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| Error::Network(format!("응답 해석 실패: {}", e)))
}

/// 응답 본문을 문자열로 읽기
pub(crate) async fn response_text(resp: &Response) -> Result<String> {
    let promise = resp.text().map_err(|e| js_error("응답 본문 읽기 실패", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("응답 본문 읽기 실패", e))?;
    Ok(value.as_string().unwrap_or_default())
}
