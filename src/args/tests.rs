use clap::Parser;
use std::time::Duration;

use super::cli::LoadArgs;
use super::parsers::parse_duration_arg;
use super::types::{HttpMethod, PositiveU64, PositiveUsize};

fn parse_args(argv: &[&str]) -> Result<LoadArgs, String> {
    LoadArgs::try_parse_from(argv).map_err(|err| err.to_string())
}

#[test]
fn defaults_match_documented_values() -> Result<(), String> {
    let args = parse_args(&["viper", "--url", "http://localhost"])?;

    if args.threads.get() != 20 {
        return Err(format!("Expected 20 threads, got {}", args.threads.get()));
    }
    if args.coroutines.get() != 100 {
        return Err(format!(
            "Expected 100 coroutines, got {}",
            args.coroutines.get()
        ));
    }
    if args.requests.get() != 500 {
        return Err(format!(
            "Expected 500 requests, got {}",
            args.requests.get()
        ));
    }
    if args.method != HttpMethod::Post {
        return Err("Expected default method post".to_owned());
    }
    if args.request_timeout != Duration::from_secs(10) {
        return Err(format!(
            "Expected 10s timeout, got {:?}",
            args.request_timeout
        ));
    }
    if args.delay_min != Duration::from_millis(10) || args.delay_max != Duration::from_millis(300) {
        return Err(format!(
            "Expected 10ms..300ms jitter bounds, got {:?}..{:?}",
            args.delay_min, args.delay_max
        ));
    }
    if args.payload_min.get() != 5_000 || args.payload_max.get() != 10_000 {
        return Err(format!(
            "Expected 5000..10000 payload bounds, got {}..{}",
            args.payload_min.get(),
            args.payload_max.get()
        ));
    }
    if args.infinite || args.verbose || args.no_ui || args.no_color {
        return Err("Expected all flags off by default".to_owned());
    }
    Ok(())
}

#[test]
fn url_is_required() -> Result<(), String> {
    if parse_args(&["viper"]).is_ok() {
        return Err("Missing --url should be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn zero_counts_are_rejected() -> Result<(), String> {
    for flag in ["--threads", "--coroutines", "--requests"] {
        if parse_args(&["viper", "--url", "http://localhost", flag, "0"]).is_ok() {
            return Err(format!("{} 0 should be rejected", flag));
        }
    }
    Ok(())
}

#[test]
fn duration_parser_accepts_units() -> Result<(), String> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("9", Duration::from_secs(9)),
        ("10s", Duration::from_secs(10)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed =
            parse_duration_arg(input).map_err(|err| format!("'{}' rejected: {}", input, err))?;
        if parsed != expected {
            return Err(format!("'{}' parsed to {:?}", input, parsed));
        }
    }
    Ok(())
}

#[test]
fn duration_parser_rejects_garbage() -> Result<(), String> {
    for input in ["", "ms", "10x", "0s", "abc"] {
        if parse_duration_arg(input).is_ok() {
            return Err(format!("'{}' should be rejected", input));
        }
    }
    Ok(())
}

#[test]
fn positive_newtypes_reject_zero() -> Result<(), String> {
    if PositiveU64::try_from(0).is_ok() {
        return Err("PositiveU64 must reject zero".to_owned());
    }
    if PositiveUsize::try_from(0).is_ok() {
        return Err("PositiveUsize must reject zero".to_owned());
    }
    Ok(())
}
