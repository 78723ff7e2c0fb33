use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::utils::tty::Tty;

/// Name of the template folder, both inside the package and in user projects.
pub const AGENT_DIR_NAME: &str = ".agent";

#[derive(Debug, Clone)]
pub struct KitPaths {
  bundle_dir: PathBuf,
  cwd: PathBuf,
}

impl KitPaths {
  pub fn new(bundle_dir: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
    Self {
      bundle_dir: bundle_dir.into(),
      cwd: cwd.into(),
    }
  }

  /// Resolve paths from the running process: its working directory and the
  /// location of the executable.
  ///
  /// # Errors
  /// Returns an error if the working directory or the executable path cannot
  /// be read.
  pub fn from_process() -> Result<Self> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let exe = std::env::current_exe().context("failed to locate the ag-kit executable")?;
    let bundle_dir = bundle_dir_for_exe(&exe);
    log::debug!("bundle dir: {}", bundle_dir.display());
    Ok(Self::new(bundle_dir, cwd))
  }

  /// The bundled template shipped with the tool.
  #[must_use]
  pub fn bundle_dir(&self) -> &PathBuf {
    &self.bundle_dir
  }

  /// The `.agent` folder of the project in the working directory.
  #[must_use]
  pub fn target_dir(&self) -> PathBuf {
    self.cwd.join(AGENT_DIR_NAME)
  }
}

/// Template folder for an executable.
///
/// Packages keep the binary in `bin/` next to `.agent/`, so the template is
/// `<exe dir>/../.agent`. The path is returned whether or not it exists; the
/// installer reports a missing template.
#[must_use]
pub fn bundle_dir_for_exe(exe: &Path) -> PathBuf {
  let package_root = exe
    .parent()
    .and_then(Path::parent)
    .unwrap_or_else(|| Path::new("/"));
  package_root.join(AGENT_DIR_NAME)
}

/// Whether anything sits at `path`. Links count even when dangling, so
/// `status` and `init` agree on what "installed" means.
#[must_use]
pub fn entry_exists(path: &Path) -> bool {
  path.symlink_metadata().is_ok()
}

#[derive(Debug, Clone)]
pub struct AppContext {
  pub paths: KitPaths,
  pub tty: Tty,
}

impl AppContext {
  /// # Errors
  /// Returns an error if the process paths cannot be resolved.
  pub fn from_process() -> Result<Self> {
    Ok(Self {
      paths: KitPaths::from_process()?,
      tty: Tty::new(),
    })
  }
}
