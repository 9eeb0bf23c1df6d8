use crate::domain::models::{ErrorReport, RunReport};

/// Print a successful run. JSON mode emits the whole report object on
/// stdout; plain mode prints the output line to stdout and warnings to
/// stderr, keeping them out of the primary value.
pub fn print_report(json: bool, report: &RunReport) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.output);
        for warning in &report.warnings {
            eprintln!("warning: {}", warning);
        }
    }
    Ok(())
}

/// Print a failed run. JSON mode keeps stdout as the sole output channel;
/// plain mode writes a single line to stderr.
pub fn print_error(json: bool, message: &str) {
    if json {
        let report = ErrorReport {
            status: "error",
            error: message.to_string(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{}", body),
            Err(_) => println!("{{\"status\":\"error\"}}"),
        }
    } else {
        eprintln!("error: {}", message);
    }
}
