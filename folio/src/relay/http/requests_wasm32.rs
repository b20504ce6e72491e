use std::collections::HashMap;

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::RelayError;

pub async fn http_post_json(
    url: &str,
    headers: &HashMap<String, String>,
    body: &str,
) -> Result<(u16, String), RelayError> {
    debug!("http_post_json: {}", url);
    let window = web_sys::window().ok_or_else(|| {
        RelayError::Unavailable("No window available".to_string())
    })?;

    let request_init = RequestInit::new();
    request_init.set_method("POST");
    request_init.set_mode(RequestMode::Cors);
    request_init.set_body(&JsValue::from_str(body));

    let headers_map = Headers::new()?;
    headers_map.set("Content-Type", "application/json")?;
    for (key, value) in headers {
        headers_map.set(key, value)?;
    }
    request_init.set_headers(&headers_map);

    let request = Request::new_with_str_and_init(url, &request_init)?;
    let response_js =
        JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response_js.dyn_into()?;

    let status = response.status();
    let text_js = JsFuture::from(response.text()?).await?;
    let text = text_js.as_string().unwrap_or_default();
    Ok((status, text))
}
