//! Logging setup
//!
//! Inside an Actions runner, warnings and errors are written as workflow
//! commands so they surface as annotations on the run.

use std::fmt;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};

/// Formats events as GitHub workflow commands
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowCommandFormat;

impl WorkflowCommandFormat {
    fn prefix(level: Level) -> &'static str {
        match level {
            Level::ERROR => "::error::",
            Level::WARN => "::warning::",
            Level::INFO => "",
            _ => "::debug::",
        }
    }
}

impl<S, N> FormatEvent<S, N> for WorkflowCommandFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;

        let prefix = Self::prefix(*event.metadata().level());
        if prefix.is_empty() {
            writeln!(writer, "{message}")
        } else {
            writeln!(writer, "{prefix}{}", escape_data(&message))
        }
    }
}

/// Escape a workflow command message so it stays on one line
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Whether we are running inside a GitHub Actions runner
fn in_actions_runner() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Level forced by `-v` flags, if any
fn verbosity_level(verbose: u8) -> Option<Level> {
    match verbose {
        0 => None,
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Build the filter from `RUST_LOG` and the `-v` count
///
/// Without `RUST_LOG` the default is info, so the run log shows each
/// decision. A set `RUST_LOG` replaces that default. `-v` sets the global
/// level, replacing any bare level in `RUST_LOG`; its per-target directives
/// still apply.
fn build_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(rust_log.unwrap_or_default());

    match verbosity_level(verbose) {
        Some(level) => filter.add_directive(level.into()),
        None => filter,
    }
}

/// Initialize the global subscriber
pub fn init(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, rust_log.as_deref());

    if in_actions_runner() {
        tracing_subscriber::registry()
            .with(
                tracing_fmt::layer()
                    .event_format(WorkflowCommandFormat)
                    .with_ansi(false)
                    .with_writer(std::io::stdout),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}
