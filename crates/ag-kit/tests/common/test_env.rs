use ag_kit::utils::copy::copy_dir_merge;
use anyhow::{Context as _, Result};
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::{Builder, TempDir};

/// A scratch project plus an installed package to run `ag-kit` from.
///
/// Layout under the temp dir:
/// - `pkg/bin/ag-kit` the binary under test
/// - `pkg/.agent` the bundled template (absent for `without_bundle`)
/// - `project/` the working directory
#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  pub fn run<F, R>(f: F) -> R
  where
    F: FnOnce(&TestEnv) -> R,
  {
    let env = TestEnv::new();
    f(&env)
  }

  pub fn new() -> Self {
    Self::stage(true).expect("stage test package")
  }

  /// A package whose `.agent` template was never shipped.
  pub fn without_bundle() -> Self {
    Self::stage(false).expect("stage test package")
  }

  fn stage(with_bundle: bool) -> Result<Self> {
    let temp = Builder::new()
      .prefix("ag-kit-test-")
      .tempdir_in(tmp_root())?;
    let env = Self { temp };

    let bin_dir = env.pkg_dir().join("bin");
    fs::create_dir_all(&bin_dir)?;
    fs::create_dir_all(env.path())?;
    let built = assert_cmd::cargo::cargo_bin("ag-kit");
    let staged = env.exe();
    // A hard link keeps the exe path inside pkg/ without copying the binary.
    if fs::hard_link(&built, &staged).is_err() {
      fs::copy(&built, &staged)
        .with_context(|| format!("copy {} to {}", built.display(), staged.display()))?;
    }
    if with_bundle {
      copy_dir_merge(&bundle_dir(), &env.pkg_bundle_dir())?;
    }
    Ok(env)
  }

  /// The project directory `ag-kit` runs in.
  pub fn path(&self) -> PathBuf {
    self.temp.path().join("project")
  }

  /// `.agent` inside the project.
  pub fn agent_dir(&self) -> PathBuf {
    self.path().join(".agent")
  }

  fn pkg_dir(&self) -> PathBuf {
    self.temp.path().join("pkg")
  }

  fn exe(&self) -> PathBuf {
    self
      .pkg_dir()
      .join("bin")
      .join(format!("ag-kit{}", std::env::consts::EXE_SUFFIX))
  }

  /// Where the staged binary looks for its template.
  pub fn pkg_bundle_dir(&self) -> PathBuf {
    self.pkg_dir().join(".agent")
  }

  pub fn ag_kit(&self) -> Result<Command> {
    let mut cmd = Command::new(self.exe());
    cmd.current_dir(self.path());
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
  }

  pub fn write_file(&self, relative: &str, body: &str) -> Result<PathBuf> {
    let path = self.path().join(relative);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).map_err(|err| {
        anyhow::anyhow!(
          "create parent dir for file under {}: {err}",
          self.path().display()
        )
      })?;
    }
    std::fs::write(&path, body).map_err(|err| {
      anyhow::anyhow!(
        "write file body at {} relative to {}: {err}",
        path.display(),
        self.path().display()
      )
    })?;
    Ok(path)
  }
}

/// The repository's own `.agent`, staged into every test package.
pub fn bundle_dir() -> PathBuf {
  workspace_root().join(".agent")
}

fn workspace_root() -> PathBuf {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/ag-kit -> crates -> workspace root
  manifest_dir
    .parent()
    .and_then(|parent| parent.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf()
}

/// Returns a workspace-local temp root for tests under `./target/test-tmp`.
pub fn tmp_root() -> PathBuf {
  let root = workspace_root().join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}
