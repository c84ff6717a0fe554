//! HTTP Wrappers
//!
//! Browser `fetch` bindings to the meals endpoints.

mod meals;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::{MealsError, MealsResult};

pub use meals::*;

/// Append `?query` only when a query is present
pub fn build_url(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{}?{}", path, q),
        None => path.to_string(),
    }
}

/// Issue a request and fail on non-2xx statuses
async fn send(method: &str, url: &str, body: Option<(&str, &str)>) -> MealsResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some((_, payload)) = body {
        opts.set_body(&payload.into());
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(MealsError::network)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(MealsError::network)?;
    if let Some((content_type, _)) = body {
        headers.set("Content-Type", content_type).map_err(MealsError::network)?;
    }

    let window = web_sys::window().ok_or_else(|| MealsError::Dom("window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(MealsError::network)?;
    let response: Response = value
        .dyn_into()
        .map_err(|v| MealsError::Decode(format!("not a Response: {:?}", v)))?;

    if !response.ok() {
        return Err(MealsError::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }
    Ok(response)
}

/// Decode a JSON response body
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> MealsResult<T> {
    let promise = response.json().map_err(|e| MealsError::Decode(format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| MealsError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| MealsError::Decode(e.to_string()))
}
