#[cfg(not(target_arch = "wasm32"))]
mod requests;

#[cfg(target_arch = "wasm32")]
#[path = "requests_wasm32.rs"]
mod requests;

pub use requests::http_post_json;
