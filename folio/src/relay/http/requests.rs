use std::collections::HashMap;

use crate::error::RelayError;

// The relay is called from the visitor's browser; native builds only exist
// to run the unit tests.
pub async fn http_post_json(
    url: &str,
    _headers: &HashMap<String, String>,
    _body: &str,
) -> Result<(u16, String), RelayError> {
    Err(RelayError::Unavailable(format!(
        "fetch is only available in the browser: {}",
        url
    )))
}
