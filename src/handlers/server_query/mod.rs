//! Server query handlers: version and command listing.

mod help;
mod version;

pub use help::HelpHandler;
pub use version::VersionHandler;
