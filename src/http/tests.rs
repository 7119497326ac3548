use std::collections::HashSet;
use std::time::Duration;

use super::client::build_client;
use super::request::{REFERERS, USER_AGENTS, build_payload, random_headers};

#[test]
fn header_sets_vary_across_samples() -> Result<(), String> {
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        let headers = random_headers();
        let mut rendered: Vec<String> = headers
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}: {}",
                    name.as_str(),
                    value.to_str().unwrap_or_default()
                )
            })
            .collect();
        rendered.sort_unstable();
        seen.insert(rendered.join("\n"));
    }
    // The marker header alone has ~900k (name, value-length) combinations;
    // byte-identical repeats across 1,000 samples should be essentially
    // nonexistent. A loose bound keeps the test deterministic in practice.
    if seen.len() < 990 {
        return Err(format!(
            "Expected near-unique header sets, got {} distinct out of 1000",
            seen.len()
        ));
    }
    Ok(())
}

#[test]
fn headers_draw_from_static_pools() -> Result<(), String> {
    for _ in 0..100 {
        let headers = random_headers();
        let agent = headers
            .get(reqwest::header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| "Missing User-Agent".to_owned())?;
        if !USER_AGENTS.contains(&agent) {
            return Err(format!("Unknown User-Agent: {}", agent));
        }
        let referer = headers
            .get(reqwest::header::REFERER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| "Missing Referer".to_owned())?;
        if !REFERERS.contains(&referer) {
            return Err(format!("Unknown Referer: {}", referer));
        }
        if headers.get(reqwest::header::CONNECTION).is_none() {
            return Err("Missing Connection header".to_owned());
        }
    }
    Ok(())
}

#[test]
fn payload_length_stays_within_bounds() -> Result<(), String> {
    for _ in 0..500 {
        let payload = build_payload(5_000, 10_000);
        if payload.len() < 5_000 || payload.len() > 10_000 {
            return Err(format!("Payload length {} out of bounds", payload.len()));
        }
    }
    let fixed = build_payload(64, 64);
    if fixed.len() != 64 {
        return Err(format!(
            "Equal bounds should pin the length, got {}",
            fixed.len()
        ));
    }
    Ok(())
}

#[test]
fn client_builds_with_and_without_proxy() -> Result<(), String> {
    if build_client(None, Duration::from_secs(10)).is_err() {
        return Err("Default client should build".to_owned());
    }
    if build_client(Some("http://127.0.0.1:3128"), Duration::from_secs(10)).is_err() {
        return Err("HTTP proxy client should build".to_owned());
    }
    if build_client(Some("socks5://127.0.0.1:1080"), Duration::from_secs(10)).is_err() {
        return Err("SOCKS proxy client should build".to_owned());
    }
    Ok(())
}

#[test]
fn invalid_proxy_is_rejected_at_build_time() -> Result<(), String> {
    if build_client(Some("not a proxy uri"), Duration::from_secs(10)).is_ok() {
        return Err("Expected an error for a malformed proxy URI".to_owned());
    }
    Ok(())
}
