//! HTTP Command Wrappers
//!
//! Frontend bindings to the admin backend endpoints, built on the browser
//! fetch API. All commands return `Result<_, String>` with the error
//! stringified for display/logging.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Collection, SortResponse};

/// Bootstrap endpoint serving the page's sortable collections
pub const COLLECTIONS_URL: &str = "/admin/sortable/collections/";

fn js_err(err: JsValue) -> String {
    format!("{:?}", err)
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

async fn fetch_response(request: &Request) -> Result<Response, String> {
    let fetched = JsFuture::from(window()?.fetch_with_request(request))
        .await
        .map_err(js_err)?;
    let response: Response = fetched.dyn_into().map_err(|_| "fetch did not yield a Response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(response)
}

/// Await and parse a response's JSON body
async fn response_json(response: &Response) -> Result<JsValue, String> {
    let promise: js_sys::Promise = response.json().map_err(js_err)?;
    JsFuture::from(promise).await.map_err(js_err)
}

// ========================
// Collection Commands
// ========================

/// Load the page's sortable collections
pub async fn fetch_collections() -> Result<Vec<Collection>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(COLLECTIONS_URL, &opts).map_err(js_err)?;
    request
        .headers()
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(js_err)?;

    let response = fetch_response(&request).await?;
    let json = response_json(&response).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

// ========================
// Ordering Commands
// ========================

/// POST a new ordering to a collection's sorting endpoint.
///
/// `payload` is the form-encoded `indexes=...` body. The server answers
/// `{"objects_sorted": bool}`; `false` is reported as an error.
pub async fn submit_order(sorting_url: &str, payload: &str) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(payload));
    let request = Request::new_with_str_and_init(sorting_url, &opts).map_err(js_err)?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(js_err)?;
    headers
        .set("X-Requested-With", "XMLHttpRequest")
        .map_err(js_err)?;

    let response = fetch_response(&request).await?;
    let json = response_json(&response).await?;
    let body: SortResponse = serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;
    if body.objects_sorted {
        Ok(())
    } else {
        Err("server did not apply the ordering".to_string())
    }
}
