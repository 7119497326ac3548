//! Resolved run configuration and proxy-file loading.
#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::args::{HttpMethod, LoadArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

/// Immutable parameters for one load run, resolved from the CLI surface.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: String,
    pub method: HttpMethod,
    pub workers: usize,
    pub tasks_per_worker: usize,
    /// `None` means unbounded; termination is by cancellation only.
    pub requests_per_task: Option<u64>,
    pub delay_min: Duration,
    pub delay_max: Duration,
    pub payload_min: usize,
    pub payload_max: usize,
    pub request_timeout: Duration,
    pub proxies: Vec<String>,
}

impl RunConfig {
    /// Total attempts the run will make, or `None` under `--infinite`.
    #[must_use]
    pub fn planned_requests(&self) -> Option<u64> {
        self.requests_per_task.map(|requests| {
            requests
                .saturating_mul(u64::try_from(self.workers).unwrap_or(u64::MAX))
                .saturating_mul(u64::try_from(self.tasks_per_worker).unwrap_or(u64::MAX))
        })
    }
}

/// Builds the immutable run configuration.
///
/// # Errors
///
/// Returns an error when the target URL is malformed or the jitter/payload
/// bounds are inverted.
pub fn build_run_config(args: &LoadArgs, proxies: Vec<String>) -> AppResult<RunConfig> {
    let target = Url::parse(&args.url).map_err(|err| {
        AppError::config(ConfigError::InvalidUrl {
            url: args.url.clone(),
            source: err,
        })
    })?;

    if args.delay_min > args.delay_max {
        return Err(AppError::validation(ValidationError::DelayBoundsInverted {
            min_ms: args.delay_min.as_millis(),
            max_ms: args.delay_max.as_millis(),
        }));
    }
    if args.payload_min.get() > args.payload_max.get() {
        return Err(AppError::validation(
            ValidationError::PayloadBoundsInverted {
                min: args.payload_min.get(),
                max: args.payload_max.get(),
            },
        ));
    }

    Ok(RunConfig {
        target: String::from(target),
        method: args.method,
        workers: args.threads.get(),
        tasks_per_worker: args.coroutines.get(),
        requests_per_task: if args.infinite {
            None
        } else {
            Some(args.requests.get())
        },
        delay_min: args.delay_min,
        delay_max: args.delay_max,
        payload_min: args.payload_min.get(),
        payload_max: args.payload_max.get(),
        request_timeout: args.request_timeout,
        proxies,
    })
}

/// Reads a newline-delimited proxy list, dropping blank lines.
///
/// # Errors
///
/// Returns an error when the file cannot be read; an empty list is not an
/// error here (the caller decides whether to proceed proxy-less).
pub fn load_proxy_list(path: &str) -> AppResult<Vec<String>> {
    let contents = std::fs::read_to_string(Path::new(path)).map_err(|err| {
        AppError::config(ConfigError::ReadProxyFile {
            path: path.into(),
            source: err,
        })
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect())
}

/// Asks the operator whether to continue without proxies. Loops until an
/// unambiguous answer is given.
///
/// # Errors
///
/// Returns an error when stdin or stdout is unavailable.
pub fn confirm_proxyless() -> AppResult<bool> {
    let stdin = std::io::stdin();
    loop {
        print!("[WARNING] No proxies found in the file. Proceed without proxies? (Y/N): ");
        std::io::stdout()
            .flush()
            .map_err(|err| AppError::config(ConfigError::ReadConfirmation { source: err }))?;

        let mut line = String::new();
        stdin
            .read_line(&mut line)
            .map_err(|err| AppError::config(ConfigError::ReadConfirmation { source: err }))?;

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer Y or N."),
        }
    }
}
