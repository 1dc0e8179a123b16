use std::env;
use std::process::ExitCode;

use yantra_validator::Report;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let json_mode = args.iter().any(|arg| arg == "--json");
    let files: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if files.is_empty() {
        eprintln!("Usage: yantra-validator [--json] <file>...");
        return ExitCode::from(2);
    }

    let mut failed = false;

    for path in files {
        eprintln!("Validating {}...", path);

        let report = match yantra_validator::validate_file(path) {
            Ok(report) => report,
            Err(err) => {
                eprintln!("{}: {}", path, err);
                failed = true;
                continue;
            }
        };

        if json_mode {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("{}: could not serialize report: {}", path, err);
                    failed = true;
                }
            }
        } else {
            print_report(path, &report);
        }

        if report.has_errors() {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_report(path: &str, report: &Report) {
    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("{}: no issues found", path);
        return;
    }

    for diag in &report.errors {
        println!("{}:{}: error: {}", path, diag.line, diag.message);
        if let Some(suggestion) = &diag.suggestion {
            println!("    suggestion: {}", suggestion);
        }
    }
    for diag in &report.warnings {
        println!("{}:{}: warning: {}", path, diag.line, diag.message);
        if let Some(suggestion) = &diag.suggestion {
            println!("    suggestion: {}", suggestion);
        }
    }

    println!(
        "{}: {} error(s), {} warning(s)",
        path,
        report.errors.len(),
        report.warnings.len()
    );
}
