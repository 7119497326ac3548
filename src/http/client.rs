use std::time::Duration;

use reqwest::{Client, Proxy};

use crate::error::HttpError;

/// Builds the HTTP client one worker drives, bound to its proxy assignment
/// (or the default transport when none is assigned).
///
/// # Errors
///
/// Returns an error when the proxy URI is rejected or the TLS backend fails
/// to initialize.
pub(crate) fn build_client(
    proxy: Option<&str>,
    request_timeout: Duration,
) -> Result<Client, HttpError> {
    let mut builder = Client::builder().timeout(request_timeout);

    if let Some(proxy_url) = proxy {
        let upstream = Proxy::all(proxy_url).map_err(|err| HttpError::InvalidProxy {
            url: proxy_url.to_owned(),
            source: err,
        })?;
        builder = builder.proxy(upstream);
    }

    builder
        .build()
        .map_err(|err| HttpError::BuildClientFailed { source: err })
}
