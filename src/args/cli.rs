use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_u64, parse_positive_usize};
use super::types::{HttpMethod, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Hybrid multi-worker async HTTP load generator with proxy rotation and a live terminal dashboard.",
    after_help = "Use only against endpoints you are authorized to test."
)]
pub struct LoadArgs {
    /// Target URL for the load run
    #[arg(long, short)]
    pub url: String,

    /// HTTP method to use
    #[arg(long, short = 'X', default_value = "post", ignore_case = true)]
    pub method: HttpMethod,

    /// Number of parallel workers
    #[arg(long = "threads", default_value = "20", value_parser = parse_positive_usize)]
    pub threads: PositiveUsize,

    /// Concurrent request tasks per worker
    #[arg(long = "coroutines", default_value = "100", value_parser = parse_positive_usize)]
    pub coroutines: PositiveUsize,

    /// Requests per task (ignored with --infinite)
    #[arg(long = "requests", default_value = "500", value_parser = parse_positive_u64)]
    pub requests: PositiveU64,

    /// File containing proxy URIs, one scheme://host:port per line
    #[arg(long = "proxy-file")]
    pub proxy_file: Option<String>,

    /// Run until interrupted
    #[arg(long)]
    pub infinite: bool,

    /// Enable per-attempt debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Minimum pre-request jitter delay (supports ms/s/m/h)
    #[arg(
        long = "delay-min",
        default_value = "10ms",
        value_parser = parse_duration_arg
    )]
    pub delay_min: Duration,

    /// Maximum pre-request jitter delay (supports ms/s/m/h)
    #[arg(
        long = "delay-max",
        default_value = "300ms",
        value_parser = parse_duration_arg
    )]
    pub delay_max: Duration,

    /// Minimum payload length in bytes
    #[arg(long = "payload-min", default_value = "5000", value_parser = parse_positive_usize)]
    pub payload_min: PositiveUsize,

    /// Maximum payload length in bytes
    #[arg(long = "payload-max", default_value = "10000", value_parser = parse_positive_usize)]
    pub payload_max: PositiveUsize,

    /// Disable the live dashboard
    #[arg(long = "no-ui", alias = "no-tui")]
    pub no_ui: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
