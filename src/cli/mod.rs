pub mod args;
pub mod dispatch;
pub mod handlers;

pub use args::{Cli, Commands, ScanArgs};
pub use dispatch::execute;
