use crate::types::{AnalysisReport, FileReport};

const SECTION_RULE_WIDTH: usize = 30;
const BLOCK_SEPARATOR_WIDTH: usize = 20;

/// Serializes a finished report. Rendering is write-once and append-only:
/// file sections are walked in order and no block is revisited.
pub trait ReportFormatter: Send + Sync {
    fn format(&self, report: &AnalysisReport) -> String;
}

/// The plain-text layout of the operator report
#[derive(Debug, Clone, Default)]
pub struct TextReportFormatter;

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(&format!(
            "=== Analysis Report - {} ===\n",
            report.generated_at.format("%a %b %e %H:%M:%S %Y")
        ));
        out.push_str(&format!("Source Logs: {}\n\n", report.source_dir));

        for file in &report.files {
            Self::format_file(&mut out, file);
        }

        out
    }
}

impl TextReportFormatter {
    fn format_file(out: &mut String, file: &FileReport) {
        let rule = "=".repeat(SECTION_RULE_WIDTH);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("SERVICE: {}\n", file.service));
        out.push_str(&format!("FILE: {}\n", file.file_name));
        out.push_str(&rule);
        out.push('\n');

        let separator = "-".repeat(BLOCK_SEPARATOR_WIDTH);
        for block in &file.extraction.blocks {
            for line in &block.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(&separator);
            out.push('\n');
        }

        if file.extraction.error_count == 0 {
            out.push_str("(No ERRORs found in tail)\n");
        } else {
            out.push_str(&format!(
                "\nFound {} error blocks.\n",
                file.extraction.error_count
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorBlock, Extraction};

    fn report_with(files: Vec<FileReport>) -> AnalysisReport {
        let mut report = AnalysisReport::new("docs/dev-logs/remote-logs");
        for file in files {
            report.push(file);
        }
        report
    }

    fn file_report(service: &str, file_name: &str, extraction: Extraction) -> FileReport {
        FileReport {
            service: service.to_string(),
            file_name: file_name.to_string(),
            extraction,
        }
    }

    #[test]
    fn test_header_names_source_directory() {
        let report = report_with(vec![]);
        let text = TextReportFormatter.format(&report);

        assert!(text.starts_with("=== Analysis Report - "));
        assert!(text.contains("Source Logs: docs/dev-logs/remote-logs\n"));
    }

    #[test]
    fn test_file_section_layout() {
        let extraction = Extraction {
            blocks: vec![ErrorBlock {
                lines: vec![
                    "2024-01-01 ERROR boom".to_string(),
                    "  at foo()".to_string(),
                ],
            }],
            error_count: 1,
        };
        let report = report_with(vec![file_report("auth", "auth-service-100.log", extraction)]);
        let text = TextReportFormatter.format(&report);

        assert!(text.contains("==============================\nSERVICE: auth\nFILE: auth-service-100.log\n==============================\n"));
        assert!(text.contains("2024-01-01 ERROR boom\n  at foo()\n--------------------\n"));
        assert!(text.contains("\nFound 1 error blocks.\n"));
    }

    #[test]
    fn test_no_errors_marker_replaces_block_list() {
        let report = report_with(vec![file_report(
            "gateway",
            "gateway-100.log",
            Extraction::default(),
        )]);
        let text = TextReportFormatter.format(&report);

        assert!(text.contains("(No ERRORs found in tail)\n"));
        assert!(!text.contains("Found"));
        assert!(!text.contains("--------------------"));
    }

    #[test]
    fn test_every_block_is_followed_by_a_separator() {
        let extraction = Extraction {
            blocks: vec![
                ErrorBlock {
                    lines: vec!["2024-01-01 ERROR a".to_string()],
                },
                ErrorBlock {
                    lines: vec!["2024-01-01 ERROR b".to_string()],
                },
            ],
            error_count: 2,
        };
        let report = report_with(vec![file_report("cart", "cart-service-7.log", extraction)]);
        let text = TextReportFormatter.format(&report);

        assert_eq!(text.matches("--------------------\n").count(), 2);
        assert!(text.contains("\nFound 2 error blocks.\n"));
    }
}
