use crate::config::{AppContext, entry_exists};
use crate::utils::log::t;
use crate::{log_info, log_success, log_warn};

pub fn run(ctx: &AppContext) {
  let target = ctx.paths.target_dir();
  log::debug!("checking {}", target.display());
  if entry_exists(&target) {
    log_success!("✅ Antigravity Kit is installed in this project.");
  } else {
    log_warn!("❌ Antigravity Kit is NOT installed in this directory.");
    log_info!("Run {} to install.", t::cmd("ag-kit init"));
  }
}
