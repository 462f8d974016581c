//! HTTP helpers shared by the storefront API modules
//!
//! Relative URLs resolve against the page, so `cakes/<id>.txt` is served
//! from the same origin as `index.html`.

use contracts::shared::catalog::error::FetchError;
use gloo_net::http::Request;

/// GET `url` and return the body as text
///
/// # Errors
/// - `FetchError::Network` if the request could not be sent
/// - `FetchError::Status` for any non-2xx status
/// - `FetchError::Body` if the body could not be read
pub async fn fetch_text(url: &str, accept: Option<&str>) -> Result<String, FetchError> {
    let mut request = Request::get(url);
    if let Some(accept) = accept {
        request = request.header("Accept", accept);
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}
