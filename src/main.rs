mod app;
mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;
mod proxy;
mod shutdown;
mod shutdown_handlers;
mod system;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
