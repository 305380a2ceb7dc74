use std::sync::atomic::AtomicBool;

use tracing::Level;

static IS_INIT: AtomicBool = AtomicBool::new(false);

/// Environment variable that turns logging on for embedders that never call [init].
pub const LOG_ENV: &str = "ESBRIDGE_LOG";

pub fn init() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if !IS_INIT.swap(true, std::sync::atomic::Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer())
      .with(EnvFilter::from_env(LOG_ENV))
      .with(
        tracing_subscriber::filter::Targets::new().with_targets(vec![("esbridge", Level::TRACE)]),
      )
      .init();
  }
}

pub fn enable_tracing_on_demand() {
  if std::env::var_os(LOG_ENV).is_some() {
    init();
  }
}
