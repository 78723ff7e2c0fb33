use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Relative path -> file bytes for every file below `root`.
pub fn snapshot(root: &Path) -> Result<BTreeMap<PathBuf, Vec<u8>>> {
  let mut out = BTreeMap::new();
  walk(root, root, &mut out)?;
  Ok(out)
}

fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) -> Result<()> {
  for entry in std::fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
    let path = entry?.path();
    if path.is_dir() {
      walk(root, &path, out)?;
    } else {
      let rel = path.strip_prefix(root)?.to_path_buf();
      let bytes = std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
      out.insert(rel, bytes);
    }
  }
  Ok(())
}
