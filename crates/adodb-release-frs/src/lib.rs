//! ADOdb Release FRS - SourceForge Release API client
//!
//! After release files land in the project's download area, each one gets
//! its default download platforms set through the Release API, so the big
//! green button on SourceForge serves the right file per operating system.

pub mod client;
pub mod error;
pub mod platforms;

pub use client::{FrsClient, FrsConfig};
pub use error::{FrsError, Result};
pub use platforms::{defaults_for_extension, DefaultPlatform};
