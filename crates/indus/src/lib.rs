#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod session;
pub mod universe;

pub use session::{Session, SessionError, SessionState};
pub use universe::NseUniverse;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
