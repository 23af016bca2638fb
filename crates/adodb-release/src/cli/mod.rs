//! CLI definition and command handling

pub mod output;
mod upload;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use adodb_release_core::RunConfig;

/// Upload ADOdb release files to SourceForge
#[derive(Debug, Parser)]
#[command(name = "adodb-release")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SourceForge account (defaults to the current user)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Do not upload or update SourceForge, print what would run
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not upload the release files, only update previously uploaded
    /// files information
    #[arg(short, long)]
    pub skip_upload: bool,

    /// Location of the release files to upload (defaults to the current
    /// directory)
    pub release_path: Option<PathBuf>,
}

impl Cli {
    /// Execute the upload run
    pub fn execute(self) -> anyhow::Result<()> {
        println!("ADOdb release upload script");

        if self.dry_run {
            println!("Dry-run mode - files will not be uploaded or modified");
        }

        let config = RunConfig::new(self.user, self.release_path, self.dry_run, self.skip_upload)?;
        info!(
            user = %config.username,
            path = %config.release_path.display(),
            dry_run = config.dry_run,
            skip_upload = config.skip_upload,
            "executing upload run"
        );

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(upload::run(&config))
    }
}
