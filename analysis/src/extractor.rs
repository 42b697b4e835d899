use crate::config::AnalysisConfig;
use crate::types::{ErrorBlock, Extraction};

/// Per-pass accumulator: whether we are inside a block, and the lines of the
/// block currently being built.
#[derive(Debug, Default)]
struct ExtractorState {
    in_error_block: bool,
    open_block: Vec<String>,
}

/// Single-pass extractor that groups error/exception lines and their
/// stack-trace continuations into discrete blocks.
///
/// The only signal used to decide that a block has ended is the
/// record-boundary pattern: log lines either start with a full date or are
/// continuations (stack frames, indentation, wrapped message text). That is a
/// heuristic, not a guarantee, and it is kept as-is.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: AnalysisConfig,
}

impl Extractor {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// True when the line carries an error-level marker or an exception name.
    #[must_use]
    pub fn is_error_trigger(&self, line: &str) -> bool {
        self.config
            .error_markers
            .iter()
            .any(|marker| line.contains(marker.as_str()))
    }

    /// True when the line opens a new top-level log record.
    #[must_use]
    pub fn is_entry_start(&self, line: &str) -> bool {
        self.config.entry_pattern.is_match(line)
    }

    /// Scans an already-windowed line sequence and returns the flushed blocks
    /// plus the trigger count.
    pub fn extract<'a, I>(&self, lines: I) -> Extraction
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = ExtractorState::default();
        let mut extraction = Extraction::default();

        for line in lines {
            if state.in_error_block && self.is_entry_start(line) {
                // A dated line always ends the open block. If it is itself a
                // trigger it opens the next block immediately; otherwise it
                // is an ordinary record boundary and is discarded.
                Self::flush(&mut state.open_block, &mut extraction.blocks);
                if self.is_error_trigger(line) {
                    extraction.error_count += 1;
                    state.open_block.push(line.to_string());
                } else {
                    state.in_error_block = false;
                }
                continue;
            }

            if self.is_error_trigger(line) {
                if !state.in_error_block {
                    state.in_error_block = true;
                    extraction.error_count += 1;
                }
                // A trigger seen while already inside a block (a Caused-by
                // frame, say) is a continuation, not a new event.
                state.open_block.push(line.to_string());
                continue;
            }

            if state.in_error_block {
                // Undated line inside a block: stack frame or wrapped text.
                state.open_block.push(line.to_string());
            }
        }

        // Input ended mid-block.
        Self::flush(&mut state.open_block, &mut extraction.blocks);
        extraction
    }

    fn flush(open_block: &mut Vec<String>, blocks: &mut Vec<ErrorBlock>) {
        if !open_block.is_empty() {
            blocks.push(ErrorBlock {
                lines: std::mem::take(open_block),
            });
        }
    }
}
