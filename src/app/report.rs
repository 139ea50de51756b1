//! Plugin output.
//!
//! Renders a verdict as the single status line monitoring systems expect,
//! with performance data after the `|`, or as a JSON object.

use serde_json::json;

use crate::check::Verdict;
use crate::config::PLUGIN_NAME;
use crate::error_handling::CheckError;
use crate::threshold::Status;

/// Renders `verdict` as a plugin status line.
///
/// ```text
/// CHECK_RBL CRITICAL - mail.example.org (192.0.2.1) BLACKLISTED on 1 server of 3 (bl.example), 1 timed out (slow.example) | servers=1;0;0;0;3 timeouts=1;;;0;3 time=0.412s;;;0
/// ```
pub fn render_status_line(verdict: &Verdict) -> String {
    let report = &verdict.report;

    let mut line = format!("{PLUGIN_NAME} {} - {}", verdict.status, report.host);
    if report.address != report.host {
        line.push_str(&format!(" ({})", report.address));
    }
    line.push_str(&format!(
        " {} on {} {} of {}",
        report.mode.label(),
        report.listed_count,
        if report.listed_count == 1 {
            "server"
        } else {
            "servers"
        },
        report.total_servers
    ));
    if !report.listed_servers.is_empty() {
        line.push_str(&format!(" ({})", report.listed_servers.join(" ")));
    }
    if !report.timed_out_servers.is_empty() {
        line.push_str(&format!(
            ", {} timed out ({})",
            report.timed_out_servers.len(),
            report.timed_out_servers.join(" ")
        ));
    }

    line.push_str(&format!(
        " | servers={};{};{};0;{} timeouts={};;;0;{} time={:.3}s;;;0",
        report.listed_count,
        verdict.warning,
        verdict.critical,
        report.total_servers,
        report.timed_out_servers.len(),
        report.total_servers,
        report.elapsed_seconds
    ));
    line
}

/// Renders `verdict` as a JSON object.
pub fn render_json(verdict: &Verdict) -> serde_json::Result<String> {
    serde_json::to_string(verdict)
}

/// Renders a check that could not complete.
pub fn render_failure(error: &CheckError, as_json: bool) -> String {
    if as_json {
        json!({ "status": Status::Unknown, "error": error.to_string() }).to_string()
    } else {
        format!("{PLUGIN_NAME} {} - {error}", Status::Unknown)
    }
}
