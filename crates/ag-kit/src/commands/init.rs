use anyhow::Result;

use crate::config::AppContext;
use crate::installer::{InstallRequest, Installer};
use crate::utils::log::t;
use crate::{log_info, log_success, log_warn};

const NEXT_STEPS: [&str; 3] = [
  "1. Read the .agent/ARCHITECTURE.md file",
  "2. Configure your environment",
  "3. Start using agents with your AI assistant",
];

pub fn run(ctx: &AppContext, force: bool) -> Result<()> {
  log_info!("{}", t::banner("🚀 Initializing Antigravity Kit..."));

  let request = InstallRequest {
    source_dir: ctx.paths.bundle_dir().clone(),
    target_dir: ctx.paths.target_dir(),
    force,
  };
  let installer = Installer::new(&ctx.tty);
  if !installer.prepare(&request)? {
    log_warn!("Operation cancelled.");
    return Ok(());
  }

  log_info!("Copying {} folder...", t::path(".agent"));
  installer.copy(&request)?;

  log_success!("Successfully initialized .agent folder!");
  log_info!("");
  log_info!("Next steps:");
  for step in NEXT_STEPS {
    log_info!("{}", t::step(step));
  }
  Ok(())
}
