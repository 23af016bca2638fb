//! rsync/ssh transfer execution
//!
//! A transfer is two commands: a remote `mkdir -p` over ssh so the target
//! directory exists, then an `rsync` push of the release files. Both are
//! built as argv vectors and never pass through a shell.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{Result, TransferError};

/// Root of the project's file area on the download host
pub const REMOTE_BASE: &str = "frs.sourceforge.net:/home/frs/project/adodb/";

/// Remote destination for a release target directory, `host:/path`
pub fn remote_destination(target_dir: &str) -> String {
    format!("{}{}", REMOTE_BASE, target_dir)
}

/// Check whether the transfer tools resolve on PATH
pub fn is_available() -> bool {
    which::which("rsync").is_ok() && which::which("ssh").is_ok()
}

/// One release transfer: which files go where, as which user
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Directory holding the files to push
    pub source: PathBuf,
    /// Names of the files to push, relative to `source`
    pub files: Vec<String>,
    /// Remote destination, `host:/path`
    pub destination: String,
    /// ssh account on the remote host
    pub username: String,
    /// Extra rsync options, inserted before the sources
    pub options: Vec<String>,
}

/// The two commands a transfer runs, as argv vectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    /// Remote directory creation: `ssh user@host mkdir -p path`
    pub mkdir: Vec<String>,
    /// File push: `rsync -vP --rsh ssh [options] sources... user@destination`
    pub rsync: Vec<String>,
}

/// Exit outcome of one executed transfer command
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Rendered command line
    pub command: String,
    /// Exit code, if the process terminated normally
    pub code: Option<i32>,
    /// Whether the command exited successfully
    pub success: bool,
}

/// Runs transfers, or prints them in dry-run mode
#[derive(Debug, Clone)]
pub struct RsyncExecutor {
    dry_run: bool,
}

impl RsyncExecutor {
    /// Create an executor
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Build the command pair for a request without running anything.
    pub fn plan(&self, request: &UploadRequest) -> Result<TransferPlan> {
        let (host, path) = request
            .destination
            .split_once(':')
            .ok_or_else(|| TransferError::InvalidDestination(request.destination.clone()))?;

        let mkdir = vec![
            "ssh".to_string(),
            format!("{}@{}", request.username, host),
            "mkdir".to_string(),
            "-p".to_string(),
            path.to_string(),
        ];

        let mut rsync = vec![
            "rsync".to_string(),
            "-vP".to_string(),
            "--rsh".to_string(),
            "ssh".to_string(),
        ];
        rsync.extend(request.options.iter().cloned());
        for file in &request.files {
            rsync.push(request.source.join(file).to_string_lossy().into_owned());
        }
        rsync.push(format!("{}@{}", request.username, request.destination));

        Ok(TransferPlan { mkdir, rsync })
    }

    /// Run the transfer, or print the planned command lines in dry-run mode.
    ///
    /// A command that starts but exits with errors is reported in the
    /// outcome and logged, not raised: the file area tolerates partial
    /// uploads and re-runs. Only failure to start a command is an error.
    pub async fn run(&self, request: &UploadRequest) -> Result<Vec<CommandOutcome>> {
        let plan = self.plan(request)?;

        if self.dry_run {
            println!("{}", render(&plan.mkdir));
            println!("{}", render(&plan.rsync));
            return Ok(Vec::new());
        }

        let mut outcomes = Vec::new();
        for argv in [&plan.mkdir, &plan.rsync] {
            outcomes.push(run_command(argv).await?);
        }
        Ok(outcomes)
    }
}

async fn run_command(argv: &[String]) -> Result<CommandOutcome> {
    let rendered = render(argv);
    debug!(command = %rendered, "running transfer command");

    // Inherit stdio so rsync progress reaches the terminal.
    let status = Command::new(&argv[0])
        .args(&argv[1..])
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|source| TransferError::CommandFailed {
            command: rendered.clone(),
            source,
        })?;

    if !status.success() {
        warn!(command = %rendered, status = %status, "transfer command finished with errors");
    }

    Ok(CommandOutcome {
        command: rendered,
        code: status.code(),
        success: status.success(),
    })
}

fn render(argv: &[String]) -> String {
    argv.join(" ")
}
