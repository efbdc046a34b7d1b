use anyhow::{Context, Result};
use log::info;
use std::process::ExitCode;

use sysdata_finder::config::ScanCatalog;
use sysdata_finder::probe::{SnapshotChecker, SystemTools};
use sysdata_finder::report;
use sysdata_finder::scan::{self, IndicatifProgress};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    print!("{}", report::render_banner());

    if !cfg!(target_os = "macos") {
        println!("WARNING: This tool is designed for macOS only!");
        return ExitCode::FAILURE;
    }

    // Dropping the scan future kills any running du/find/tmutil child
    tokio::select! {
        result = run() => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("\nUnexpected error: {:?}", e);
                ExitCode::FAILURE
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            println!();
            println!("Operation cancelled by user (Ctrl+C).");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let catalog = ScanCatalog::load()?;
    let tools = SystemTools::new();
    let progress = IndicatifProgress;

    println!("Scanning system locations... This may take a few minutes.");
    println!();
    let entries = catalog.resolve_locations(&home);
    let records = scan::scan_catalog(&entries, &tools, &progress).await;
    println!();

    print!("{}", report::render_results_heading());
    let table = report::render(&records);
    print!("{}", table.text);
    println!();
    info!(
        "{} of {} locations present, {} bytes measured",
        records.len(),
        entries.len(),
        table.total_bytes
    );

    println!("Scanning for large subdirectories in key locations...");
    println!();
    let roots = catalog.resolve_roots(&home);
    let reports =
        scan::scan_subdirectories(&roots, catalog.min_subdirectory_gb, &tools, &progress).await;
    for found in &reports {
        print!(
            "{}",
            report::render_large_directories(
                &found.label,
                &found.directories,
                catalog.top_subdirectories,
            )
        );
    }

    println!("Checking for Time Machine local snapshots...");
    let snapshots = SnapshotChecker::new(&tools).list_snapshots().await;
    print!("{}", report::render_snapshot_notice(&snapshots));

    print!("{}", report::render_tips());
    Ok(())
}
