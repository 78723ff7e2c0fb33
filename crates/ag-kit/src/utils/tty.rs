use std::io::{self, BufRead as _, IsTerminal as _, Read as _, Write as _};

use anyhow::{Context, Result, anyhow};
use inquire::{Confirm as ConfirmPrompt, InquireError};
use owo_colors::OwoColorize as _;

use crate::installer::Confirm;
use crate::log_info;

/// Longest answer we bother reading from piped stdin.
const MAX_ANSWER_LEN: usize = 200;

/// Terminal detection and yes/no prompts.
///
/// Initialized once at startup and stored in `AppContext`. When both stdin
/// and stdout are terminals the prompt is rendered with `inquire`, otherwise
/// a plain `[y/N]` line is printed and one line is read from stdin.
#[derive(Debug, Clone)]
pub struct Tty {
  is_interactive: bool,
}

impl Tty {
  #[must_use]
  pub fn new() -> Self {
    let stdin_tty = io::stdin().is_terminal();
    let stdout_tty = io::stdout().is_terminal();
    Self {
      is_interactive: stdin_tty && stdout_tty,
    }
  }

  /// Ask a yes/no question and block until it is answered.
  ///
  /// # Errors
  /// Returns an error if the prompt is interrupted or stdin cannot be read.
  pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
    if self.is_interactive {
      return match ConfirmPrompt::new(prompt).with_default(default).prompt() {
        Ok(answer) => Ok(answer),
        // Esc dismisses the question, which we read as "no".
        Err(InquireError::OperationCanceled) => Ok(false),
        Err(err) => Err(anyhow!(err)),
      };
    }
    fallback_confirm(prompt, default)
  }
}

impl Default for Tty {
  fn default() -> Self {
    Self::new()
  }
}

impl Confirm for Tty {
  fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
    Tty::confirm(self, prompt, default)
  }
}

fn fallback_confirm(prompt: &str, default: bool) -> Result<bool> {
  let suffix = if default { "[Y/n]" } else { "[y/N]" };
  log_info!("{} {}", prompt, suffix);
  anstream::print!("{}", "-> ".bright_cyan());
  io::stdout().flush().ok();

  let input = read_answer(&mut io::stdin().lock())?;
  Ok(parse_answer(&input, default))
}

/// Read one line, without the line terminator. EOF yields an empty answer;
/// bytes that are not UTF-8 are replaced rather than rejected.
fn read_answer(reader: &mut impl io::BufRead) -> Result<String> {
  let mut line = Vec::new();
  reader
    .take(MAX_ANSWER_LEN as u64)
    .read_until(b'\n', &mut line)
    .context("failed to read from stdin")?;
  let answer = String::from_utf8_lossy(&line);
  Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

/// Interpret a typed answer: blank keeps the default, anything starting with
/// `y` means yes, everything else means no.
#[must_use]
pub fn parse_answer(input: &str, default: bool) -> bool {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return default;
  }
  let first = trimmed.chars().next().unwrap_or_default();
  matches!(first, 'y' | 'Y')
}
