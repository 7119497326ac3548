use crate::metrics::RunSnapshot;
use crate::ui::format::{
    bar, format_bytes, format_count, format_elapsed, format_percent_x10, format_x100, percent_x10,
};

/// Width of the per-class percentage bars in the final report.
const BAR_WIDTH: usize = 20;

/// Prints the end-of-run report from the final snapshot. Plain text only;
/// the dashboard has already been torn down when this runs.
pub(crate) fn print_summary(snapshot: &RunSnapshot, target: &str) {
    let total = snapshot.total;

    println!();
    println!(" FINAL RESULTS");
    println!("  Target       :  {}", target);
    println!("  Duration     :  {}", format_elapsed(snapshot.elapsed));
    println!("  Total Sent   :  {}", format_count(total));
    println!(
        "  Success      :  {}  ({})",
        format_count(snapshot.success),
        format_percent_x10(percent_x10(snapshot.success, total))
    );
    println!(
        "  Failed       :  {}  ({})",
        format_count(snapshot.failed),
        format_percent_x10(percent_x10(snapshot.failed, total))
    );
    println!("  Avg Req/sec  :  {}", format_x100(snapshot.rps_x100));
    println!("  Data Sent    :  {}", format_bytes(snapshot.bytes_sent));

    let classes = snapshot.classes;
    let class_rows = [
        ("2xx", classes.success_2xx),
        ("3xx", classes.redirect_3xx),
        ("4xx", classes.client_error_4xx),
        ("5xx", classes.server_error_5xx),
        ("err", classes.transport_error),
    ];
    if class_rows.iter().any(|(_, count)| *count > 0) {
        println!();
        for (label, count) in class_rows {
            if count == 0 {
                continue;
            }
            let pct_x10 = percent_x10(count, total);
            println!(
                "    {}  {}  {:>6}  ({})",
                label,
                bar(pct_x10, BAR_WIDTH),
                format_percent_x10(pct_x10),
                format_count(count)
            );
        }
    }
    println!();
}
