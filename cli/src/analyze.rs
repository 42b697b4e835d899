use std::fs;
use std::path::{Path, PathBuf};

use analysis::formatter::ReportFormatter;
use analysis::{AnalysisConfig, AnalysisReport, TextReportFormatter};

use crate::discover;
use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;

pub fn execute(log_dir: String, report_dir: String, window: usize, verbose: bool) -> Result<()> {
    let mut progress = ProgressTracker::new("Log Analysis").with_steps(vec![
        "Collecting latest log set".to_string(),
        "Scanning log files".to_string(),
        "Writing analysis report".to_string(),
    ]);

    progress.start_step();
    let log_dir = PathBuf::from(log_dir);
    let log_files = discover::latest_log_set(&log_dir)?;
    if log_files.is_empty() {
        ui::info_message("No log files found to analyze.");
        return Ok(());
    }
    progress.complete_step();

    if verbose {
        println!("Analyzing {} log files...", log_files.len());
    }

    progress.start_step();
    let config = AnalysisConfig::default().with_scan_window(window);
    let mut report = AnalysisReport::new(log_dir.to_string_lossy());
    for path in &log_files {
        match analysis::scan::scan_file(path, &config) {
            Ok(file_report) => {
                if verbose {
                    println!(
                        "{}: {} error blocks",
                        file_report.file_name, file_report.extraction.error_count
                    );
                }
                report.push(file_report);
            }
            Err(err) => {
                // An unreadable file aborts only that file, not the run.
                let err = CliError::Analysis(err);
                ui::warning_message(&format!(
                    "Skipping {}: {}",
                    path.display(),
                    err.user_message()
                ));
            }
        }
    }
    progress.complete_step();

    progress.start_step();
    let report_dir = Path::new(&report_dir);
    fs::create_dir_all(report_dir)
        .map_err(|e| CliError::Io(e).with_context("Failed to create report directory"))?;
    let report_path = report_dir.join(format!("analysis-{}.txt", report.generated_at.timestamp()));
    let rendered = TextReportFormatter.format(&report);
    fs::write(&report_path, rendered)
        .map_err(|e| CliError::Io(e).with_context("Failed to write analysis report"))?;
    progress.complete_step();

    progress.complete();

    ui::success_message(&format!("Analyzed {} log files.", report.files.len()));
    ui::info_message(&format!("Report saved to {}", report_path.display()));

    Ok(())
}
