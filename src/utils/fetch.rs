//! Browser HTTP transport with timeout support.
//!
//! Implements [`HttpTransport`] on top of the Fetch API, racing every request
//! against a timeout.

use async_trait::async_trait;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::config::{FETCH_TIMEOUT_MS, api_base_url};
use crate::core::{ContentClient, ContentError, Endpoints, HttpRequest, HttpResponse, HttpTransport};
use crate::utils::dom;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Race a promise against a timeout using `Promise.race`.
///
/// The timeout promise resolves to `undefined`, which is how a timeout is
/// told apart from a completed promise.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

// =============================================================================
// Transport
// =============================================================================

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTransport {
    timeout_ms: i32,
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

fn build_request(request: &HttpRequest) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    if request.credentials {
        opts.set_credentials(RequestCredentials::Include);
    }

    let req = Request::new_with_str_and_init(&request.url, &opts)?;
    if request.accept_json {
        req.headers().set("Accept", "application/json")?;
    }
    Ok(req)
}

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ContentError> {
        let window = dom::window()
            .ok_or_else(|| ContentError::NetworkFailure("window not available".to_string()))?;

        let req = build_request(request)
            .map_err(|e| ContentError::InvalidUrl(js_error_message(&e)))?;

        match race_with_timeout(window.fetch_with_request(&req), self.timeout_ms).await {
            RaceResult::TimedOut => Err(ContentError::NetworkFailure(format!(
                "no response within {} ms",
                self.timeout_ms
            ))),
            RaceResult::Error(msg) => Err(ContentError::NetworkFailure(msg)),
            RaceResult::Completed(result) => {
                let resp: Response = result.dyn_into().map_err(|_| {
                    ContentError::InvalidResponse("fetch did not return a Response".to_string())
                })?;

                let read_failed =
                    |e: JsValue| ContentError::InvalidResponse(js_error_message(&e));
                let buffer = JsFuture::from(resp.array_buffer().map_err(read_failed)?)
                    .await
                    .map_err(read_failed)?;

                Ok(HttpResponse {
                    status: resp.status(),
                    body: Uint8Array::new(&buffer).to_vec(),
                })
            }
        }
    }
}

impl ContentClient<BrowserTransport> {
    /// Client for this page's backend.
    pub fn browser() -> Result<Self, ContentError> {
        let endpoints = Endpoints::parse(&api_base_url())?;
        Ok(Self::new(endpoints, BrowserTransport::default()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_pending_promise_times_out() {
        let never = Promise::new(&mut |_, _| {});
        assert!(matches!(race_with_timeout(never, 10).await, RaceResult::TimedOut));
    }

    #[wasm_bindgen_test]
    async fn test_resolved_promise_completes() {
        let ready = Promise::resolve(&JsValue::from_str("ok"));
        match race_with_timeout(ready, 1000).await {
            RaceResult::Completed(value) => assert_eq!(value.as_string().as_deref(), Some("ok")),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    async fn test_rejection_keeps_error_message() {
        let failed = Promise::reject(&js_sys::Error::new("connection refused").into());
        match race_with_timeout(failed, 1000).await {
            RaceResult::Error(message) => assert_eq!(message, "connection refused"),
            other => panic!("expected error, got {:?}", other),
        }
    }
}
