//! Utility commands registered by the entry point.

mod add;
mod echo;

pub use add::AddHandler;
pub use echo::EchoHandler;
