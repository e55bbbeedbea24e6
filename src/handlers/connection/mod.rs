//! Connection lifecycle commands.

mod quit;

pub use quit::QuitHandler;
