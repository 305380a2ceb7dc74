mod args;
pub use args::*;
mod filter;
pub use filter::*;
mod plugin;
pub use plugin::*;
mod plugin_driver;
pub use plugin_driver::*;

pub use async_trait;
