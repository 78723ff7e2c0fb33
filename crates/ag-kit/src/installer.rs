//! Materializes the bundled template into a project.
//!
//! The installer owns no process state: the caller passes the source and
//! target paths, and the yes/no prompt is an injected [`Confirm`]
//! implementation so the overwrite branch can be scripted.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::entry_exists;
use crate::utils::copy::copy_dir_merge;

/// Question asked before copying over an existing target.
pub const OVERWRITE_PROMPT: &str = "The .agent folder already exists. Do you want to overwrite it?";

/// Hint shown when the bundled template is missing.
pub const SOURCE_MISSING_HINT: &str = "Make sure you have installed the package correctly.";

/// A blocking yes/no question.
pub trait Confirm {
  /// # Errors
  /// Returns an error if no answer can be obtained.
  fn confirm(&self, prompt: &str, default: bool) -> anyhow::Result<bool>;
}

/// One `init` invocation.
#[derive(Debug, Clone)]
pub struct InstallRequest {
  pub source_dir: PathBuf,
  pub target_dir: PathBuf,
  /// Skip the overwrite question.
  pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
  Installed,
  /// The target existed and the user declined to overwrite it.
  Cancelled,
}

#[derive(Debug, Error)]
pub enum InstallError {
  #[error("Source directory not found at {}", .0.display())]
  SourceMissing(PathBuf),

  #[error("Failed to copy .agent folder into {}", .target.display())]
  Copy {
    target: PathBuf,
    #[source]
    source: anyhow::Error,
  },

  #[error("Failed to read overwrite confirmation")]
  Prompt(#[source] anyhow::Error),
}

impl InstallError {
  /// Follow-up advice to print under the error, if any.
  #[must_use]
  pub fn hint(&self) -> Option<&'static str> {
    match self {
      InstallError::SourceMissing(_) => Some(SOURCE_MISSING_HINT),
      InstallError::Copy { .. } | InstallError::Prompt(_) => None,
    }
  }
}

pub type InstallResult<T> = Result<T, InstallError>;

pub struct Installer<'a, C: Confirm + ?Sized> {
  confirm: &'a C,
}

impl<'a, C: Confirm + ?Sized> Installer<'a, C> {
  pub fn new(confirm: &'a C) -> Self {
    Self { confirm }
  }

  /// Check the request and ask before overwriting. Returns `false` when the
  /// user declined and nothing should be copied.
  ///
  /// # Errors
  /// Fails if the source is missing or the prompt cannot be answered.
  pub fn prepare(&self, request: &InstallRequest) -> InstallResult<bool> {
    if !request.source_dir.exists() {
      return Err(InstallError::SourceMissing(request.source_dir.clone()));
    }

    if entry_exists(&request.target_dir) && !request.force {
      log::debug!("{} exists, asking before overwrite", request.target_dir.display());
      let overwrite = self
        .confirm
        .confirm(OVERWRITE_PROMPT, false)
        .map_err(InstallError::Prompt)?;
      return Ok(overwrite);
    }
    Ok(true)
  }

  /// Copy the template once [`Installer::prepare`] agreed.
  ///
  /// # Errors
  /// Fails with [`InstallError::Copy`] on the first I/O error.
  pub fn copy(&self, request: &InstallRequest) -> InstallResult<()> {
    copy_dir_merge(&request.source_dir, &request.target_dir).map_err(|source| {
      InstallError::Copy {
        target: request.target_dir.clone(),
        source,
      }
    })
  }

  /// Prepare and copy in one step.
  ///
  /// # Errors
  /// See [`Installer::prepare`] and [`Installer::copy`].
  pub fn install(&self, request: &InstallRequest) -> InstallResult<InstallOutcome> {
    if !self.prepare(request)? {
      return Ok(InstallOutcome::Cancelled);
    }
    self.copy(request)?;
    Ok(InstallOutcome::Installed)
  }
}
