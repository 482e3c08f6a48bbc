use serde_json::Value;
use shared_types::ApiError;

/// Send a request and normalize the outcome.
///
/// - 2xx with a JSON body resolves to that body verbatim.
/// - An error status with a parseable JSON body rejects with that body.
/// - Everything else (transport failure, unreadable or non-JSON body)
///   rejects with `{"detail": <fallback>}`.
///
/// Single attempt, no retry; timeouts are whatever the transport defaults to.
pub(crate) async fn dispatch(
    request: reqwest::RequestBuilder,
    fallback: &str,
) -> Result<Value, ApiError> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "request failed before a response arrived");
            return Err(ApiError::transport(fallback));
        }
    };

    let status = response.status();
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(status = status.as_u16(), error = %err, "response body unreadable");
            return Err(ApiError::opaque(status.as_u16(), fallback));
        }
    };

    let parsed: Option<Value> = serde_json::from_slice(&bytes).ok();

    if status.is_success() {
        return match parsed {
            Some(body) => Ok(body),
            None => {
                tracing::warn!(status = status.as_u16(), "success response was not JSON");
                Err(ApiError::opaque(status.as_u16(), fallback))
            }
        };
    }

    match parsed {
        Some(body) => Err(ApiError::from_body(status.as_u16(), body)),
        None => Err(ApiError::opaque(status.as_u16(), fallback)),
    }
}
