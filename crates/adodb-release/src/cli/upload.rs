//! Upload run orchestration
//!
//! Stages run in order: locate the release archive and derive its target
//! directory, push the files to the download host (unless skipped), then
//! set the default download platforms for each uploaded file.

use adodb_release_core::{
    locate_release_archive, release_files, target_directory, working_files, RunConfig,
};
use adodb_release_frs::{defaults_for_extension, FrsClient, FrsConfig};
use adodb_release_transfer::{remote_destination, RsyncExecutor, UploadRequest};

use crate::cli::output;

/// Run the transfer and file-information stages with the given configuration.
pub async fn run(config: &RunConfig) -> anyhow::Result<()> {
    let archive = locate_release_archive(&config.release_path)?;
    let target_dir = target_directory(&archive.version);

    if config.skip_upload {
        println!("Skipping upload of release files");
    } else {
        upload_release_files(config, &target_dir).await?;
    }

    update_file_information(config, &target_dir).await
}

/// Push everything in the release directory to the download host.
async fn upload_release_files(config: &RunConfig, target_dir: &str) -> anyhow::Result<()> {
    let files = working_files(&config.release_path)?;
    let destination = remote_destination(target_dir);

    println!();
    println!("Uploading release files...");
    println!("  Source: {}", config.release_path.display());
    println!("  Target: {}", destination);
    println!("  Files:  {}", files.join(", "));
    println!();

    if !config.dry_run && !adodb_release_transfer::is_available() {
        output::warning("rsync or ssh not found on PATH");
    }

    let request = UploadRequest {
        source: config.release_path.clone(),
        files,
        destination,
        username: config.username.clone(),
        options: Vec::new(),
    };

    // A transfer that ran but exited with errors is reported and the run
    // carries on: the file area tolerates partial uploads and re-runs.
    let outcomes = RsyncExecutor::new(config.dry_run).run(&request).await?;
    for outcome in outcomes.iter().filter(|outcome| !outcome.success) {
        let status = match outcome.code {
            Some(code) => format!("exit status {}", code),
            None => "a signal".to_string(),
        };
        output::warning(&format!("{} finished with {}", outcome.command, status));
    }

    println!();
    Ok(())
}

/// Set the default download platforms for each release file.
///
/// The first API failure aborts the loop; remaining files keep whatever
/// information they had.
async fn update_file_information(config: &RunConfig, target_dir: &str) -> anyhow::Result<()> {
    println!("Updating uploaded files information");

    // Dry runs work without credentials: a placeholder key stands in so
    // the composed URL can still be printed.
    let frs_config = if config.dry_run {
        FrsConfig::load().unwrap_or_else(|_| FrsConfig::for_dry_run())
    } else {
        FrsConfig::load()?
    };
    let client = FrsClient::new(frs_config);

    for file in release_files(&config.release_path)? {
        println!("  {}", file);

        let defaults = match defaults_for_extension(&file) {
            Some(defaults) => defaults,
            None => {
                output::warning(&format!("Unknown extension for file {}", file));
                continue;
            }
        };

        if config.dry_run {
            let url = client.prepared_url(target_dir, &file, defaults)?;
            println!("    Calling SourceForge Release API: {}", url);
        } else {
            let applied = client.update_file(target_dir, &file, defaults).await?;
            println!("    Download default for: {:?}", applied);
        }
    }

    Ok(())
}
