//! ADOdb Release Transfer - pushes release files to the download host
//!
//! Transfers run as two external commands, `ssh ... mkdir -p` followed by
//! `rsync`, mirroring how releases have always been shipped to the
//! SourceForge file area.

pub mod error;
pub mod rsync;

pub use error::{Result, TransferError};
pub use rsync::{
    is_available, remote_destination, CommandOutcome, RsyncExecutor, TransferPlan, UploadRequest,
    REMOTE_BASE,
};
