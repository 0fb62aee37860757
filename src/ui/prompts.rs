//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations that need more input are cancelled with
//! [`PromptError::NotInteractive`] instead of blocking on a script or pipe.
//!
//! Prompts read from the same input the shell reads commands from, so the
//! answer is simply the next line.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Prompt for a line of text.
///
/// Returns the trimmed answer. A blank answer or end of input counts as
/// [`PromptError::Cancelled`].
pub fn input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    interactive: bool,
) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    write!(writer, "{} ", message)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::Cancelled);
    }

    let answer = line.trim();
    if answer.is_empty() {
        return Err(PromptError::Cancelled);
    }
    Ok(answer.to_string())
}
