/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style
/// specific values inside info messages consistently across the CLI.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  /// A command the user can type, e.g. `ag-kit init`.
  pub fn cmd(c: impl Display) -> String {
    format!("{}", c.to_string().cyan())
  }

  /// A follow-up instruction line.
  pub fn step(s: impl Display) -> String {
    format!("{}", s.to_string().cyan())
  }

  pub fn banner(s: impl Display) -> String {
    format!("{}", s.to_string().blue())
  }

  pub fn ok(s: impl Display) -> String {
    format!("{}", s.to_string().green())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }

  pub fn err(s: impl Display) -> String {
    format!("{}", s.to_string().red())
  }
}

// User-facing output. info = neutral, success/warn/error = full-line tint.
// Use `t::*` helpers to highlight tokens in info messages only.
// Diagnostics for developers go through the `log` crate instead.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Success,
  Warn,
  Error,
}

impl LogLevel {
  #[must_use]
  pub fn to_stderr(self) -> bool {
    matches!(self, LogLevel::Error)
  }
}

pub(crate) fn emit(level: LogLevel, text: &str) {
  if level.to_stderr() {
    anstream::eprintln!("{}", text);
  } else {
    anstream::println!("{}", text);
  }
}

#[macro_export]
macro_rules! log_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Info,
      &format!($fmt $(, $args )*)
    );
  }};
}

#[macro_export]
macro_rules! log_success {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Success,
      &$crate::utils::log::t::ok(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_warn {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Warn,
      &$crate::utils::log::t::warn(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_error {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Error,
      &$crate::utils::log::t::err(format!($fmt $(, $args )*))
    );
  }};
}
