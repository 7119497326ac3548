use std::ops::RangeInclusive;

use bytes::Bytes;
use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

pub(crate) const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Mobile/15E148 Safari/604.1",
];

pub(crate) const REFERERS: [&str; 6] = [
    "http://www.google.com/?q=",
    "http://www.usatoday.com/search/results?q=",
    "http://engadget.search.aol.com/search?q=",
    "http://www.bing.com/search?q=",
    "http://www.yahoo.com/search?p=",
    "http://duckduckgo.com/?q=",
];

/// Numeric suffix range for the per-attempt marker header.
const MARKER_SUFFIX: RangeInclusive<u32> = 1..=1000;
/// Length range for the marker header's filler value.
const FILLER_LEN: RangeInclusive<usize> = 100..=1000;
/// Fill byte for payloads and filler values.
const FILL: &str = "A";

/// Builds a fresh randomized header set for one attempt: uniformly chosen
/// User-Agent and Referer plus one marker header with a randomized name and
/// filler value.
pub(crate) fn random_headers() -> HeaderMap {
    let mut rng = thread_rng();
    let mut headers = HeaderMap::new();

    if let Some(agent) = USER_AGENTS.choose(&mut rng) {
        headers.insert(header::USER_AGENT, HeaderValue::from_static(agent));
    }
    if let Some(referer) = REFERERS.choose(&mut rng) {
        headers.insert(header::REFERER, HeaderValue::from_static(referer));
    }
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

    let name = format!("x-custom-header-{}", rng.gen_range(MARKER_SUFFIX));
    let filler = FILL.repeat(rng.gen_range(FILLER_LEN));
    if let (Ok(name), Ok(value)) = (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(&filler),
    ) {
        headers.insert(name, value);
    }

    headers
}

/// Payload shared by all of one worker's tasks: constant fill, random
/// length within the configured bounds. Generated once per worker, not per
/// request.
pub(crate) fn build_payload(min: usize, max: usize) -> Bytes {
    let len = thread_rng().gen_range(min..=max);
    Bytes::from(FILL.repeat(len))
}
