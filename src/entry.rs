use clap::Parser;

use crate::app::{self, RunOptions};
use crate::args::LoadArgs;
use crate::config::{self, RunConfig};
use crate::error::AppResult;
use crate::ui::format::format_count;

pub(crate) fn run() -> AppResult<()> {
    let args = LoadArgs::parse();
    crate::logger::init_logging(args.verbose);

    crate::system::banner::print_cli_banner(args.no_color);

    let Some(proxies) = load_proxies(&args)? else {
        println!("[INFO] Exiting at operator request.");
        return Ok(());
    };

    let run_config = config::build_run_config(&args, proxies)?;
    print_run_header(&run_config);

    let target = run_config.target.clone();
    let options = RunOptions {
        no_ui: args.no_ui,
        no_color: args.no_color,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let snapshot = runtime.block_on(app::run(run_config, options, None));
    app::print_summary(&snapshot, &target);
    Ok(())
}

/// Resolves the proxy list from `--proxy-file`; `None` means the operator
/// declined to proceed without proxies.
fn load_proxies(args: &LoadArgs) -> AppResult<Option<Vec<String>>> {
    let Some(path) = args.proxy_file.as_deref() else {
        return Ok(Some(Vec::new()));
    };

    let proxies = config::load_proxy_list(path)?;
    if proxies.is_empty() {
        if !config::confirm_proxyless()? {
            return Ok(None);
        }
        println!("[INFO] Proceeding without proxies...");
    } else {
        println!("  Proxies:  {} loaded", proxies.len());
    }
    Ok(Some(proxies))
}

fn print_run_header(config: &RunConfig) {
    println!("  Target :  {}", config.target);
    let requests = config
        .requests_per_task
        .map_or_else(|| "unbounded".to_owned(), |count| count.to_string());
    println!(
        "  Workers:  {}  |  Tasks/worker: {}  |  Requests/task: {}",
        config.workers, config.tasks_per_worker, requests
    );
    config.planned_requests().map_or_else(
        || println!("  Mode   :  Infinite (Ctrl+C to stop)"),
        |total| println!("  Total  :  {} requests", format_count(total)),
    );
    println!();
}
