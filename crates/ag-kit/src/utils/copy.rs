use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use reflink_copy::reflink_or_copy;

/// Recursively copy `src_dir` into `dst_dir`.
///
/// Files that exist in both trees are overwritten with the source bytes.
/// Entries that only exist under `dst_dir` are left alone.
///
/// # Errors
/// Returns the first I/O failure. Entries copied before the failure stay in place.
pub fn copy_dir_merge(src_dir: &Path, dst_dir: &Path) -> Result<()> {
  if dst_dir.exists() && !dst_dir.is_dir() {
    anyhow::bail!("destination exists and is not a dir: {}", dst_dir.display());
  }
  fs::create_dir_all(dst_dir).with_context(|| format!("failed to create {}", dst_dir.display()))?;
  for entry in
    fs::read_dir(src_dir).with_context(|| format!("failed to read dir {}", src_dir.display()))?
  {
    let entry = entry.with_context(|| format!("failed to read dir {}", src_dir.display()))?;
    let file_type = entry
      .file_type()
      .with_context(|| format!("failed to stat {}", entry.path().display()))?;
    let src = entry.path();
    let dst = dst_dir.join(entry.file_name());
    if file_type.is_dir() {
      copy_dir_merge(&src, &dst)?;
    } else if file_type.is_symlink() {
      copy_symlink(&src, &dst)?;
    } else {
      copy_file(&src, &dst)?;
    }
  }
  Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
  log::debug!("copy {} -> {}", src.display(), dst.display());
  remove_existing_file(dst)?;
  // Prefer reflink, fallback to regular copy automatically
  reflink_or_copy(src, dst)
    .with_context(|| format!("failed to copy {} -> {}", src.display(), dst.display()))?;
  copy_permissions(src, dst)
}

fn copy_permissions(src: &Path, dst: &Path) -> Result<()> {
  let perms = fs::metadata(src)
    .with_context(|| format!("failed to stat {}", src.display()))?
    .permissions();
  fs::set_permissions(dst, perms)
    .with_context(|| format!("failed to set permissions on {}", dst.display()))
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
  let target =
    fs::read_link(src).with_context(|| format!("failed to read link {}", src.display()))?;
  log::debug!("link {} -> {}", dst.display(), target.display());
  remove_existing_file(dst)?;
  std::os::unix::fs::symlink(&target, dst)
    .with_context(|| format!("failed to create link {}", dst.display()))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
  copy_file(src, dst)
}

/// Clear a file or link in the way of a copy. Directories are left for the
/// copy to fail on.
fn remove_existing_file(path: &Path) -> Result<()> {
  let Ok(meta) = fs::symlink_metadata(path) else {
    return Ok(());
  };
  if meta.is_dir() {
    return Ok(());
  }
  fs::remove_file(path).with_context(|| format!("failed to replace {}", path.display()))
}
