//! Generic authenticated JSON request helper. Every resource service goes
//! through here so timeouts, bearer auth, and error classification are
//! decided in exactly one place.

use futures::future::{self, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::AbortSignal;

use crate::services::error::{classify, ApiError};
use crate::utils::constants::{API_BASE_URL, REQUEST_TIMEOUT_MS};

/// Credential requirement of an endpoint. `Bearer(None)` fails fast with
/// `Unauthenticated` before any network traffic happens; `MaybeBearer`
/// attaches the token when one exists and goes out public otherwise.
#[derive(Debug, Clone, Copy)]
pub enum Credentials<'a> {
    Public,
    Bearer(Option<&'a str>),
    MaybeBearer(Option<&'a str>),
}

/// Resolve the Authorization header for a request, or refuse the request
/// outright when a required token is missing.
fn bearer_header(credentials: Credentials<'_>) -> Result<Option<String>, ApiError> {
    match credentials {
        Credentials::Public | Credentials::MaybeBearer(None) => Ok(None),
        Credentials::Bearer(Some(token)) | Credentials::MaybeBearer(Some(token)) => {
            Ok(Some(format!("Bearer {token}")))
        }
        Credentials::Bearer(None) => Err(ApiError::Unauthenticated),
    }
}

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    credentials: Credentials<'_>,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let response = send(Request::get(&url(path)), credentials, None::<&()>, signal).await?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    credentials: Credentials<'_>,
) -> Result<T, ApiError> {
    let response = send(Request::post(&url(path)), credentials, Some(body), None).await?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    credentials: Credentials<'_>,
) -> Result<T, ApiError> {
    let response = send(Request::put(&url(path)), credentials, Some(body), None).await?;
    decode(response).await
}

/// PUT where the response body is not trusted for anything.
pub async fn put_ok<B: Serialize>(
    path: &str,
    body: &B,
    credentials: Credentials<'_>,
) -> Result<(), ApiError> {
    send(Request::put(&url(path)), credentials, Some(body), None).await?;
    Ok(())
}

/// GET where only the status matters (logout).
pub async fn get_ok(path: &str, credentials: Credentials<'_>) -> Result<(), ApiError> {
    send(Request::get(&url(path)), credentials, None::<&()>, None).await?;
    Ok(())
}

pub async fn delete(path: &str, credentials: Credentials<'_>) -> Result<(), ApiError> {
    send(Request::delete(&url(path)), credentials, None::<&()>, None).await?;
    Ok(())
}

async fn send<B: Serialize>(
    builder: RequestBuilder,
    credentials: Credentials<'_>,
    body: Option<&B>,
    signal: Option<&AbortSignal>,
) -> Result<Response, ApiError> {
    let builder = match bearer_header(credentials)? {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    };
    let builder = builder.abort_signal(signal);

    let request = match body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Unknown {
            message: format!("failed to encode request: {e}"),
        })?,
        None => builder.build().map_err(|e| ApiError::Unknown {
            message: format!("failed to build request: {e}"),
        })?,
    };

    let fetch = request.send();
    pin_mut!(fetch);

    // Bounded timeout: whichever future finishes first decides the outcome.
    let response = match future::select(fetch, TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?,
        Either::Right(_) => return Err(ApiError::Timeout),
    };

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(classify(status, &body));
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Unknown {
        message: format!("unparseable response body: {e}"),
    })
}

fn url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

/// Join base and path without doubling or dropping slashes.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::{bearer_header, join_url, Credentials};
    use crate::services::error::ApiError;

    #[test]
    fn join_handles_slash_combinations() {
        assert_eq!(join_url("http://x", "/rooms"), "http://x/rooms");
        assert_eq!(join_url("http://x/", "rooms"), "http://x/rooms");
        assert_eq!(join_url("http://x/", "/rooms"), "http://x/rooms");
        assert_eq!(join_url("http://x", "rooms"), "http://x/rooms");
    }

    #[test]
    fn required_bearer_without_a_token_refuses_before_any_fetch() {
        assert_eq!(
            bearer_header(Credentials::Bearer(None)),
            Err(ApiError::Unauthenticated)
        );
    }

    #[test]
    fn present_tokens_become_a_bearer_header() {
        assert_eq!(
            bearer_header(Credentials::Bearer(Some("t1"))).unwrap().as_deref(),
            Some("Bearer t1")
        );
        assert_eq!(
            bearer_header(Credentials::MaybeBearer(Some("t1"))).unwrap().as_deref(),
            Some("Bearer t1")
        );
    }

    #[test]
    fn optional_bearer_without_a_token_goes_out_public() {
        assert_eq!(bearer_header(Credentials::MaybeBearer(None)).unwrap(), None);
        assert_eq!(bearer_header(Credentials::Public).unwrap(), None);
    }
}
