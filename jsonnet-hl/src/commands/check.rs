//! Check command implementation.
//!
//! Reports malformed tokens and constructs left open at end of input.

use std::fmt;
use std::path::PathBuf;

use jsonnet_lex::{coalesce, line_indentation, reset, scan, LexerState, Span, TokenClass};

use crate::commands::common::{display_name, error_messages, read_source, require_inputs};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{HlError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
}

/// A single problem, printed as `file:line:col: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// File name as given on the command line.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: {}", self.file, self.line, self.column, self.message)
    }
}

fn column(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count() + 1
}

/// Describe an error span by what produced it.
fn malformed_message(line: &str, span: &Span) -> String {
    let text = span.text(line);
    if text.starts_with('\\') {
        match line[span.end..].chars().next() {
            Some(next) => format!("malformed escape sequence '\\{}'", next),
            None => "malformed escape sequence at end of line".to_string(),
        }
    } else {
        "malformed text block line: indented less than the block".to_string()
    }
}

fn unterminated_message(state: LexerState) -> Option<&'static str> {
    match state {
        LexerState::Normal => None,
        LexerState::BlockComment => Some("unterminated block comment"),
        LexerState::TextBlock(_) => Some("unterminated text block"),
        LexerState::StringLiteral(string) if string.is_import => Some("unterminated import path"),
        LexerState::StringLiteral(_) => Some("unterminated string"),
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Scan one source and collect its findings.
    pub fn check_source(&self, file: &str, source: &str) -> Vec<Finding> {
        let mut state = reset();
        let mut findings = Vec::new();
        let mut opened_at = (1, 1);

        for (index, line) in source.lines().enumerate() {
            let number = index + 1;
            let indentation = line_indentation(line, self.config.tab_width);
            let mut spans = Vec::new();
            let mut start = 0;

            while start < line.len() {
                let was_normal = state.is_normal();
                let token = scan(&mut state, &line[start..], indentation);
                if was_normal && !state.is_normal() {
                    opened_at = (number, column(line, start));
                }
                let end = start + token.len;
                spans.push(Span {
                    start,
                    end,
                    class: token.class,
                });
                start = end;
            }

            for span in coalesce(&spans)
                .iter()
                .filter(|span| span.class == TokenClass::Error)
            {
                findings.push(Finding {
                    file: file.to_string(),
                    line: number,
                    column: column(line, span.start),
                    message: malformed_message(line, span),
                });
            }
        }

        if let Some(message) = unterminated_message(state) {
            findings.push(Finding {
                file: file.to_string(),
                line: opened_at.0,
                column: opened_at.1,
                message: message.to_string(),
            });
        }

        findings
    }

    /// Check every input, continuing past files that cannot be read.
    fn collect_findings(&self) -> Result<(Vec<Finding>, usize)> {
        require_inputs(&self.args.inputs)?;
        let mut findings = Vec::new();
        let mut files_failed = 0;

        for path in &self.args.inputs {
            let name = display_name(path);
            match read_source(path) {
                Ok(source) => {
                    let found = self.check_source(&name, &source);
                    tracing::debug!(file = %name, problems = found.len(), "checked");
                    findings.extend(found);
                },
                Err(e) => {
                    files_failed += 1;
                    tracing::error!("Failed to check {}: {}", name, e);
                },
            }
        }

        Ok((findings, files_failed))
    }

    /// Execute the command, printing findings to standard output.
    ///
    /// Fails when anything was reported or a file could not be read.
    pub fn run(&self) -> Result<()> {
        let (findings, files_failed) = self.collect_findings()?;
        for finding in &findings {
            println!("{}", finding);
        }

        if files_failed > 0 {
            return Err(HlError::CommandExecution(format!(
                "{} {}",
                files_failed,
                error_messages::FILES_FAILED
            )));
        }
        if !findings.is_empty() {
            return Err(HlError::CommandExecution(format!(
                "{} {}",
                findings.len(),
                error_messages::PROBLEMS_FOUND
            )));
        }

        tracing::info!("{} file(s) checked, no problems found", self.args.inputs.len());
        Ok(())
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = Vec<Finding>;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.collect_findings().map(|(findings, _)| findings)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    tracing::debug!(command = CheckCommand::name(), "running");
    let command = CheckCommand::new(args, config);
    command.run()
}
