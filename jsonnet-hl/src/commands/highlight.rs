//! Highlight command implementation.
//!
//! Prints each input with ANSI colours chosen by the configured theme.

use std::fmt::Write as _;
use std::path::PathBuf;

use jsonnet_lex::{coalesce, highlight_with, Highlighter, TokenClass};
use owo_colors::{AnsiColors, OwoColorize};

use crate::commands::common::{
    display_name, error_messages, parse_color, read_source, require_inputs,
};
use crate::commands::traits::Command;
use crate::config::{Config, ThemeConfig};
use crate::error::{HlError, Result};

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Files to print; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
    /// Print plain text without escape sequences.
    pub no_color: bool,
}

/// Resolved colour of every token class.
#[derive(Debug, Clone, Copy)]
struct Palette {
    colors: [Option<AnsiColors>; TokenClass::ALL.len()],
}

impl Palette {
    fn from_theme(theme: &ThemeConfig) -> Result<Self> {
        let mut colors = [None; TokenClass::ALL.len()];
        for (slot, class) in colors.iter_mut().zip(TokenClass::ALL) {
            if let Some(name) = theme.color_name(class) {
                let color = parse_color(name).ok_or_else(|| {
                    HlError::Validation(format!("{} {}", error_messages::UNKNOWN_COLOR, name))
                })?;
                *slot = Some(color);
            }
        }
        Ok(Self { colors })
    }

    fn color(&self, class: TokenClass) -> Option<AnsiColors> {
        TokenClass::ALL
            .iter()
            .position(|c| *c == class)
            .and_then(|index| self.colors[index])
    }
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
    config: Config,
}

impl HighlightCommand {
    /// Render every input, coloured unless `no_color` is set.
    pub fn render(&self) -> Result<String> {
        require_inputs(&self.args.inputs)?;
        let palette = Palette::from_theme(&self.config.theme)?;
        let mut out = String::new();

        for path in &self.args.inputs {
            let source = read_source(path)?;
            let mut highlighter = Highlighter::with_tab_width(self.config.tab_width);
            let lines = highlight_with(&mut highlighter, &source);
            tracing::debug!(file = %display_name(path), lines = lines.len(), "highlighting");

            for line in &lines {
                for span in coalesce(&line.spans) {
                    let text = span.text(line.text);
                    match palette.color(span.class) {
                        Some(color) if !self.args.no_color => {
                            let _ = write!(out, "{}", text.color(color));
                        },
                        _ => out.push_str(text),
                    }
                }
                out.push('\n');
            }
        }

        Ok(out)
    }

    /// Execute the command, writing to standard output.
    pub fn run(&self) -> Result<()> {
        print!("{}", self.execute()?);
        Ok(())
    }
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = String;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.render()
    }

    fn name() -> &'static str {
        "highlight"
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs, config: Config) -> Result<()> {
    tracing::debug!(command = HighlightCommand::name(), "running");
    let command = HighlightCommand::new(args, config);
    command.run()
}
