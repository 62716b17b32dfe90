use colored::*;
use serde::Serialize;

/// Output mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Error,
    Warning,
    Success,
    Info,
}

/// One line of `--json` output.
#[derive(Debug, Serialize, Clone)]
pub struct JsonResultEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub results: &'a [JsonResultEntry],
}

/// Reporter handles all user-facing output. Diagnostics go through `tracing`.
///
/// In JSON mode nothing is printed until [`Reporter::finish`], which emits a
/// single `{"results": [...]}` document on stdout.
pub struct Reporter {
    mode: OutputMode,
    json_results: Vec<JsonResultEntry>,
}

impl Reporter {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            json_results: Vec::new(),
        }
    }

    pub fn error(&mut self, message: &str) {
        self.emit(EntryKind::Error, message, None);
    }

    pub fn warning(&mut self, message: &str) {
        self.emit(EntryKind::Warning, message, None);
    }

    pub fn success(&mut self, message: &str) {
        self.emit(EntryKind::Success, message, None);
    }

    /// Like [`Reporter::success`]; `details` is shown indented under the
    /// message in human mode.
    pub fn success_with_details(&mut self, message: &str, details: &str) {
        self.emit(EntryKind::Success, message, Some(details));
    }

    pub fn info(&mut self, message: &str) {
        self.emit(EntryKind::Info, message, None);
    }

    fn emit(&mut self, kind: EntryKind, message: &str, details: Option<&str>) {
        match self.mode {
            OutputMode::Json => self.json_results.push(JsonResultEntry {
                kind,
                message: message.to_string(),
                details: details.map(str::to_string),
            }),
            // Errors are the only thing quiet mode lets through.
            OutputMode::Quiet if kind != EntryKind::Error => {}
            OutputMode::Human | OutputMode::Quiet => {
                let line = match kind {
                    EntryKind::Error => format!("{} {message}", "ERROR:".red()),
                    EntryKind::Warning => format!("{} {message}", "WARNING:".yellow()),
                    EntryKind::Success => format!("{} {message}", "✓".green()),
                    EntryKind::Info => format!("{} {message}", "INFO:".blue()),
                };
                match kind {
                    EntryKind::Error | EntryKind::Warning => eprintln!("{line}"),
                    EntryKind::Success | EntryKind::Info => println!("{line}"),
                }
                if let Some(details) = details {
                    println!("  {}", details.dimmed());
                }
            }
        }
    }

    pub fn finish(&self) {
        if self.mode == OutputMode::Json {
            let output = JsonOutput {
                results: &self.json_results,
            };
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                println!("{json}");
            }
        }
    }
}
