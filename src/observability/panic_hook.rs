//! Panic hook that prints a short crash report with run context.

use super::context::{current_context, RunContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "────────────────────────────────────────────────────────────";

/// Install the crash-report hook. Call once, early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info, &current_context()));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, context: &RunContext) -> String {
    let mut lines = vec![
        RULE.to_string(),
        format!("assetrank {VERSION} crashed ({})", std::env::consts::OS),
        format!("  panic:    {}", truncate(&panic_message(info), 60)),
    ];

    if let Some(location) = info.location() {
        lines.push(format!(
            "  location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    lines.extend(context_lines(context));

    if std::env::var_os("RUST_BACKTRACE").is_some() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("  run with RUST_BACKTRACE=1 for a stack trace".to_string());
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

fn context_lines(context: &RunContext) -> Vec<String> {
    let phase = context
        .phase
        .map(|p| p.to_string())
        .unwrap_or_else(|| "(not started)".to_string());
    let mut lines = vec![format!("  phase:    {phase}")];
    if let Some(line) = context.current_line {
        lines.push(format!("  record:   {line}"));
    }
    lines
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
