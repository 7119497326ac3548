use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    prelude::{Backend, Frame},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::time::MissedTickBehavior;
use tracing::warn;

use crate::error::AppResult;
use crate::metrics::MetricsCollector;
use crate::shutdown::ShutdownSender;
use crate::ui::format::{
    bar, format_bytes, format_count, format_elapsed, format_percent_x10, format_x100, percent_x10,
};
use crate::ui::model::UiState;

/// Fixed dashboard redraw interval.
const RENDER_INTERVAL: Duration = Duration::from_millis(500);
/// Width of the per-class percentage bars.
const BAR_WIDTH: usize = 20;

pub trait UiActions {
    /// Initializes the terminal for UI rendering.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup fails.
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>>;
    fn cleanup();
    fn render<B: Backend>(terminal: &mut Terminal<B>, state: &UiState);
}

pub struct Ui;

impl UiActions for Ui {
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(io::stdout());
        match Terminal::new(backend) {
            Ok(mut terminal) => {
                if let Err(err) = terminal.clear() {
                    Self::cleanup();
                    return Err(err.into());
                }
                Ok(terminal)
            }
            Err(err) => {
                Self::cleanup();
                Err(err.into())
            }
        }
    }

    fn cleanup() {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
    }

    // Render failures are logged and swallowed; a broken frame must never
    // abort the run.
    fn render<B: Backend>(terminal: &mut Terminal<B>, state: &UiState) {
        if let Err(err) = terminal.draw(|frame| draw_frame(frame, state)) {
            warn!("Failed to render dashboard: {}", err);
        }
    }
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Spawns the dashboard task: every tick it takes one consistent snapshot
/// of the collector and redraws; it stops on the shutdown signal and never
/// blocks worker progress.
#[must_use]
pub fn setup_render_ui(
    shutdown_tx: &ShutdownSender,
    collector: Arc<MetricsCollector>,
    target: String,
    planned_total: Option<u64>,
    no_color: bool,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut terminal = match Ui::setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                warn!("Failed to set up terminal, dashboard disabled: {}", err);
                return;
            }
        };
        let _guard = TerminalGuard;

        let mut tick = tokio::time::interval(RENDER_INTERVAL);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = tick.tick() => {
                    let state = UiState {
                        target: target.clone(),
                        planned_total,
                        no_color,
                        snapshot: collector.snapshot(),
                    };
                    Ui::render(&mut terminal, &state);
                }
            }
        }
    })
}

fn style_fg(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

fn draw_frame<B: Backend>(frame: &mut Frame<'_, B>, state: &UiState) {
    let snapshot = &state.snapshot;
    let total = snapshot.total;

    let mut lines = Vec::with_capacity(16);
    lines.push(stat_line(
        state,
        "Target",
        state.target.clone(),
        Color::Yellow,
    ));
    lines.push(stat_line(
        state,
        "Elapsed",
        format_elapsed(snapshot.elapsed),
        Color::White,
    ));
    lines.push(stat_line(
        state,
        "Workers",
        format!("{} active", snapshot.active_workers),
        Color::Green,
    ));
    lines.push(stat_line(
        state,
        "Req/sec",
        format_x100(snapshot.rps_x100),
        Color::Yellow,
    ));
    lines.push(Line::from(""));

    let sent = state.planned_total.map_or_else(
        || format_count(total),
        |planned| format!("{} / {}", format_count(total), format_count(planned)),
    );
    lines.push(stat_line(state, "Total Sent", sent, Color::White));
    lines.push(stat_line(
        state,
        "Success",
        format!(
            "{}  ({})",
            format_count(snapshot.success),
            format_percent_x10(percent_x10(snapshot.success, total))
        ),
        Color::Green,
    ));
    lines.push(stat_line(
        state,
        "Failed",
        format!(
            "{}  ({})",
            format_count(snapshot.failed),
            format_percent_x10(percent_x10(snapshot.failed, total))
        ),
        Color::Red,
    ));
    lines.push(stat_line(
        state,
        "Data Sent",
        format_bytes(snapshot.bytes_sent),
        Color::White,
    ));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Status Classes:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let classes = snapshot.classes;
    let class_rows = [
        ("2xx", classes.success_2xx, Color::Green),
        ("3xx", classes.redirect_3xx, Color::Cyan),
        ("4xx", classes.client_error_4xx, Color::Yellow),
        ("5xx", classes.server_error_5xx, Color::Red),
        ("err", classes.transport_error, Color::LightRed),
    ];
    for (label, count, color) in class_rows {
        if count == 0 {
            continue;
        }
        let pct_x10 = percent_x10(count, total);
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", label), style_fg(state.no_color, color)),
            Span::raw(bar(pct_x10, BAR_WIDTH)),
            Span::raw(format!(
                " {:>6}  ({})",
                format_percent_x10(pct_x10),
                format_count(count)
            )),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Ctrl+C to stop",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let title = format!(" VIPER v{} ", env!("CARGO_PKG_VERSION"));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style_fg(state.no_color, Color::Cyan))
        .title(title);
    let panel = Paragraph::new(lines).block(block);
    let area = frame.size();
    frame.render_widget(panel, area);
}

fn stat_line(state: &UiState, label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {:<12}:  ", label)),
        Span::styled(value, style_fg(state.no_color, color)),
    ])
}
