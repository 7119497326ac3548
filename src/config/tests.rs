use std::io::Write;
use std::time::Duration;

use clap::Parser;

use super::{build_run_config, load_proxy_list};
use crate::args::LoadArgs;

fn args_for(argv: &[&str]) -> Result<LoadArgs, String> {
    LoadArgs::try_parse_from(argv).map_err(|err| err.to_string())
}

#[test]
fn builds_config_from_defaults() -> Result<(), String> {
    let args = args_for(&["viper", "--url", "http://localhost:8080/path"])?;
    let config = build_run_config(&args, vec![]).map_err(|err| err.to_string())?;

    if config.workers != 20 || config.tasks_per_worker != 100 {
        return Err(format!(
            "Unexpected concurrency shape: {}x{}",
            config.workers, config.tasks_per_worker
        ));
    }
    if config.requests_per_task != Some(500) {
        return Err(format!(
            "Expected 500 requests per task, got {:?}",
            config.requests_per_task
        ));
    }
    if config.planned_requests() != Some(1_000_000) {
        return Err(format!(
            "Expected 1,000,000 planned requests, got {:?}",
            config.planned_requests()
        ));
    }
    Ok(())
}

#[test]
fn infinite_clears_request_budget() -> Result<(), String> {
    let args = args_for(&["viper", "--url", "http://localhost", "--infinite"])?;
    let config = build_run_config(&args, vec![]).map_err(|err| err.to_string())?;
    if config.requests_per_task.is_some() {
        return Err("Expected unbounded requests under --infinite".to_owned());
    }
    if config.planned_requests().is_some() {
        return Err("Expected no planned total under --infinite".to_owned());
    }
    Ok(())
}

#[test]
fn malformed_url_is_fatal() -> Result<(), String> {
    let args = args_for(&["viper", "--url", "not a url"])?;
    if build_run_config(&args, vec![]).is_ok() {
        return Err("Malformed URL should be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn inverted_bounds_are_rejected() -> Result<(), String> {
    let args = args_for(&[
        "viper",
        "--url",
        "http://localhost",
        "--delay-min",
        "500ms",
        "--delay-max",
        "100ms",
    ])?;
    if build_run_config(&args, vec![]).is_ok() {
        return Err("Inverted delay bounds should be rejected".to_owned());
    }

    let payload_args = args_for(&[
        "viper",
        "--url",
        "http://localhost",
        "--payload-min",
        "9000",
        "--payload-max",
        "100",
    ])?;
    if build_run_config(&payload_args, vec![]).is_ok() {
        return Err("Inverted payload bounds should be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn delay_bounds_may_be_equal() -> Result<(), String> {
    let args = args_for(&[
        "viper",
        "--url",
        "http://localhost",
        "--delay-min",
        "50ms",
        "--delay-max",
        "50ms",
    ])?;
    let config = build_run_config(&args, vec![]).map_err(|err| err.to_string())?;
    if config.delay_min != Duration::from_millis(50) || config.delay_max != Duration::from_millis(50)
    {
        return Err("Equal jitter bounds should be accepted".to_owned());
    }
    Ok(())
}

#[test]
fn proxy_list_keeps_order_and_drops_blanks() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("proxies.txt");
    let mut file =
        std::fs::File::create(&path).map_err(|err| format!("create failed: {}", err))?;
    writeln!(file, "http://10.0.0.1:8080")
        .and_then(|()| writeln!(file))
        .and_then(|()| writeln!(file, "  socks5://10.0.0.2:1080  "))
        .and_then(|()| writeln!(file, "http://10.0.0.3:3128"))
        .map_err(|err| format!("write failed: {}", err))?;

    let proxies =
        load_proxy_list(&path.to_string_lossy()).map_err(|err| format!("load failed: {}", err))?;
    let expected = [
        "http://10.0.0.1:8080",
        "socks5://10.0.0.2:1080",
        "http://10.0.0.3:3128",
    ];
    if proxies != expected {
        return Err(format!("Unexpected proxy list: {:?}", proxies));
    }
    Ok(())
}

#[test]
fn missing_proxy_file_is_fatal() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("absent.txt");
    if load_proxy_list(&path.to_string_lossy()).is_ok() {
        return Err("Missing proxy file should be an error".to_owned());
    }
    Ok(())
}

#[test]
fn empty_proxy_file_loads_empty_list() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("proxies.txt");
    std::fs::write(&path, "\n   \n").map_err(|err| format!("write failed: {}", err))?;
    let proxies =
        load_proxy_list(&path.to_string_lossy()).map_err(|err| format!("load failed: {}", err))?;
    if !proxies.is_empty() {
        return Err(format!("Expected empty list, got {:?}", proxies));
    }
    Ok(())
}
