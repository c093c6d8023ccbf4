//! Command-line localization sync against Gridly.
//!
//! Mirrors the original sync commandlet: one invocation reads a named
//! config section and runs the import and/or export flows it enables.

use anyhow::{Context, Result, bail};
use clap::Parser;
use gridly_sync::tasks::{DownloadLocalizedTexts, ExportLocalizedTexts};
use gridly_sync::{ProgressEvent, po};
use gridly_types::LocalizedText;
use std::fs;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{ConfigFile, SyncProfile};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long)]
    config: PathBuf,

    /// Config section to run.
    #[arg(long)]
    section: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let file = ConfigFile::load(&cli.config)?;
    let profile = file.section(&cli.section)?;

    if !profile.b_import_loc && !profile.b_export_loc {
        bail!(
            "section [{}] enables neither bImportLoc nor bExportLoc",
            cli.section
        );
    }

    if profile.b_import_loc {
        import_loc(profile).await?;
    }
    if profile.b_export_loc {
        export_loc(profile).await?;
    }

    Ok(())
}

/// Spawns a drain task so senders never observe a closed channel.
fn progress_logger() -> mpsc::UnboundedSender<ProgressEvent> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<ProgressEvent>();
    tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            debug!(
                "progress: {:.0}% ({} records)",
                event.fraction * 100.0,
                event.accumulated
            );
        }
    });
    sender
}

/// Downloads all records once, then writes one `.po` file per
/// non-native culture.
async fn import_loc(profile: &SyncProfile) -> Result<()> {
    info!("importing localization from Gridly");

    let records = DownloadLocalizedTexts::new(profile.settings.clone(), profile.cultures.clone())
        .with_progress(progress_logger())
        .run()
        .await?;
    info!("downloaded {} records", records.len());

    for culture in &profile.cultures {
        if *culture == profile.native_culture {
            continue;
        }
        let path = profile
            .po_output_dir
            .join(culture)
            .join(format!("{}.po", profile.target_name));
        po::write_po_file(&records, culture, &path)?;
    }

    if let Some(command) = &profile.import_command {
        run_import_command(command).await;
    }

    Ok(())
}

/// Hands the written `.po` files to the engine's own import step.
/// A failure here leaves the files on disk for a manual retry.
async fn run_import_command(command: &str) {
    info!("running import command: {command}");
    let status = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .await;
    match status {
        Ok(status) if status.success() => info!("import command finished"),
        Ok(status) => warn!("import command exited with {status}"),
        Err(error) => warn!("import command failed to start: {error}"),
    }
}

/// Uploads the export manifest's source strings to the export view.
async fn export_loc(profile: &SyncProfile) -> Result<()> {
    let Some(manifest_path) = &profile.export_manifest_path else {
        bail!("bExportLoc is set but exportManifestPath is not");
    };

    info!("exporting native culture to Gridly");
    let content = fs::read_to_string(manifest_path)
        .with_context(|| format!("failed to read manifest {}", manifest_path.display()))?;
    let records: Vec<LocalizedText> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse manifest {}", manifest_path.display()))?;

    let updated = ExportLocalizedTexts::new(
        profile.settings.clone(),
        records,
        profile.cultures.clone(),
    )
    .with_progress(progress_logger())
    .run()
    .await?;

    info!("number of entries updated: {updated}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn config_and_section_are_required() {
        assert!(Cli::try_parse_from(["gridly-sync"]).is_err());
        assert!(Cli::try_parse_from(["gridly-sync", "--config", "gridly.toml"]).is_err());
        assert!(Cli::try_parse_from(["gridly-sync", "--section", "Gridly"]).is_err());

        let cli = Cli::try_parse_from([
            "gridly-sync",
            "--config",
            "gridly.toml",
            "--section",
            "Gridly",
        ])
        .unwrap();
        assert_eq!(cli.section, "Gridly");
    }
}
