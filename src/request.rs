//! Form-encoded POST helper for the game's internal ajax endpoints.
//!
//! Session identity is an explicit [`SessionContext`] rather than a read of
//! the host page's globals at call time; `SessionContext::from_page()` does
//! that read once at the page boundary.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use crate::util::clog;

pub const BASE_URL: &str = "https://www.mousehuntgame.com/";

const SERVICE_NAME: &str = "Hitgrab";

/// Identity and routing info the ajax endpoints require, owned by the host
/// page and captured once per interaction.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub unique_hash: String,
    pub user_id: String,
    pub environment_type: String,
    /// Alternate request base some pages define (`callbackurl`); when unset,
    /// requests go to [`BASE_URL`].
    pub callback_url: Option<String>,
}

impl SessionContext {
    pub fn has_session(&self) -> bool {
        !self.unique_hash.is_empty()
    }

    /// Capture the host page's `user` global (and optional `callbackurl`).
    /// Missing globals produce an empty context, which
    /// [`build_request_body`] later rejects.
    pub fn from_page() -> Self {
        let global = js_sys::global();
        let user = match js_sys::Reflect::get(&global, &JsValue::from_str("user")) {
            Ok(u) if !u.is_undefined() && !u.is_null() => u,
            _ => return Self::default(),
        };
        let callback_url = js_sys::Reflect::get(&global, &JsValue::from_str("callbackurl"))
            .ok()
            .and_then(|v| v.as_string())
            .filter(|s| !s.is_empty());
        Self {
            unique_hash: reflect_string(&user, "unique_hash"),
            user_id: reflect_string(&user, "user_id"),
            environment_type: reflect_string(&user, "environment_type"),
            callback_url,
        }
    }
}

fn reflect_string(obj: &JsValue, key: &str) -> String {
    let value = match js_sys::Reflect::get(obj, &JsValue::from_str(key)) {
        Ok(v) => v,
        Err(_) => return String::new(),
    };
    if let Some(s) = value.as_string() {
        s
    } else if let Some(n) = value.as_f64() {
        // user_id arrives as a number
        format!("{}", n as i64)
    } else {
        String::new()
    }
}

/// Percent-encode one form component, `application/x-www-form-urlencoded`
/// style (space becomes `+`).
fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Encode key/value pairs as a form-urlencoded body.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Body for an authenticated ajax POST: the fixed service fields plus the
/// caller's. `None` when the context carries no session hash.
pub fn build_request_body(ctx: &SessionContext, fields: &[(&str, &str)]) -> Option<String> {
    if !ctx.has_session() {
        return None;
    }
    let mut pairs: Vec<(&str, &str)> = vec![
        ("sn", SERVICE_NAME),
        ("hg_is_ajax", "1"),
        ("uh", ctx.unique_hash.as_str()),
    ];
    pairs.extend_from_slice(fields);
    Some(encode_form(&pairs))
}

/// Full URL for an endpoint path, honoring the page's callback base.
pub fn request_url(ctx: &SessionContext, path: &str) -> String {
    match &ctx.callback_url {
        Some(base) => format!("{base}{path}"),
        None => format!("{BASE_URL}{path}"),
    }
}

/// POST `fields` to `path` and parse the JSON response. Best effort: one
/// request, no retry, no timeout; any failure (including a missing session
/// hash) resolves to `None`.
pub async fn post_request(
    ctx: &SessionContext,
    path: &str,
    fields: &[(&str, &str)],
) -> Option<serde_json::Value> {
    let body = build_request_body(ctx, fields)?;
    let window = web_sys::window()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));
    let headers = Headers::new().ok()?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .ok()?;
    opts.set_headers(&headers);

    let url = request_url(ctx, path);
    let resp = match JsFuture::from(window.fetch_with_str_and_init(&url, &opts)).await {
        Ok(r) => r,
        Err(_) => {
            clog("ajax request failed");
            return None;
        }
    };
    let resp: Response = resp.dyn_into().ok()?;
    let text = JsFuture::from(resp.text().ok()?).await.ok()?;
    let text = text.as_string()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(_) => {
            clog("ajax response was not valid JSON");
            None
        }
    }
}
