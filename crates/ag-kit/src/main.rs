fn main() {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .format_timestamp(None)
    .try_init();

  if let Err(err) = ag_kit::run() {
    ag_kit::report(&err);
    std::process::exit(1);
  }
}
