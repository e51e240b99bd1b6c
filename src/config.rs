/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One sentence per sample.
    #[default]
    Text,
    /// A single pretty-printed JSON array.
    Json,
}

/// Runtime configuration for the command line harness.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output format for reports.
    pub format: OutputFormat,
    /// Print the batch summary after the reports.
    pub summary: bool,
}

impl Config {
    pub fn new(json: bool, summary: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            summary,
        }
    }
}
