//! Output printer with format awareness.

use std::fmt::Display;

use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Format-aware output handler
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(ctx: &CommandContext) -> Self {
        Self {
            format: ctx.format,
            quiet: ctx.quiet,
        }
    }

    /// Print a value with appropriate formatting
    pub fn print<T>(&self, value: &T) -> Result<(), CliError>
    where
        T: Serialize + Display,
    {
        match self.format {
            OutputFormat::Json => self.print_json(value),
            OutputFormat::Text => {
                println!("{value}");
                Ok(())
            }
        }
    }

    /// Print as JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(value)?;
        println!("{json}");
        Ok(())
    }

    /// Print a message (respects quiet mode)
    pub fn message(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }
}
