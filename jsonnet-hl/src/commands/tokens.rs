//! Tokens command implementation.
//!
//! Dumps the highlighting spans of each input, either as text rows or as
//! a JSON array of records.

use std::fmt::Write as _;
use std::path::PathBuf;

use jsonnet_lex::{coalesce, highlight_with, Highlighter, Span, TokenClass};
use serde::Serialize;

use crate::commands::common::{
    display_name, error_messages, read_source, require_inputs, OutputFormat,
};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{HlError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to scan; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
    /// Output format, overriding the configured one.
    pub format: Option<String>,
    /// Only print spans of these classes. Empty prints everything.
    pub only: Vec<TokenClass>,
    /// Merge adjacent spans of the same class first.
    pub coalesce: bool,
}

/// One span as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    file: &'a str,
    line: usize,
    start: usize,
    end: usize,
    class: &'static str,
    text: &'a str,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Render the spans of every input.
    pub fn render(&self) -> Result<String> {
        require_inputs(&self.args.inputs)?;
        let format = self.determine_output_format()?;

        let mut text_out = String::new();
        let mut records_out = Vec::new();
        let with_headers = self.args.inputs.len() > 1;

        for path in &self.args.inputs {
            let source = read_source(path)?;
            let name = display_name(path);
            let mut highlighter = Highlighter::with_tab_width(self.config.tab_width);
            let lines = highlight_with(&mut highlighter, &source);
            tracing::debug!(file = %name, lines = lines.len(), format = format.name(), "scanned");

            if with_headers && format == OutputFormat::Text {
                let _ = writeln!(text_out, "==> {} <==", name);
            }

            for line in &lines {
                for span in self.select_spans(&line.spans) {
                    let text = span.text(line.text);
                    match format {
                        OutputFormat::Text => {
                            let _ = writeln!(
                                text_out,
                                "{}:{}-{} {} {:?}",
                                line.number,
                                span.start,
                                span.end,
                                span.class.name(),
                                text
                            );
                        },
                        OutputFormat::Json => records_out.push(serde_json::to_value(
                            TokenRecord {
                                file: &name,
                                line: line.number,
                                start: span.start,
                                end: span.end,
                                class: span.class.name(),
                                text,
                            },
                        )?),
                    }
                }
            }
        }

        match format {
            OutputFormat::Text => Ok(text_out),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&records_out)?;
                json.push('\n');
                Ok(json)
            },
        }
    }

    /// Execute the command, writing to standard output.
    pub fn run(&self) -> Result<()> {
        print!("{}", self.execute()?);
        Ok(())
    }

    /// Apply `--coalesce` and `--only` to one line's spans.
    fn select_spans(&self, spans: &[Span]) -> Vec<Span> {
        let spans = if self.args.coalesce {
            coalesce(spans)
        } else {
            spans.to_vec()
        };
        spans
            .into_iter()
            .filter(|span| self.args.only.is_empty() || self.args.only.contains(&span.class))
            .collect()
    }

    /// Determine the output format.
    fn determine_output_format(&self) -> Result<OutputFormat> {
        if let Some(ref format_str) = self.args.format {
            return OutputFormat::from_str(format_str).ok_or_else(|| {
                HlError::Validation(format!(
                    "{} {}",
                    error_messages::UNKNOWN_FORMAT,
                    format_str
                ))
            });
        }

        OutputFormat::from_str(&self.config.format).ok_or_else(|| {
            HlError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                self.config.format
            ))
        })
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = String;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.render()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    tracing::debug!(command = TokensCommand::name(), "running");
    let command = TokensCommand::new(args, config);
    command.run()
}
