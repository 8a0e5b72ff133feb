pub mod config;
pub mod document;
pub mod effects;
pub mod host;
pub mod logging;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asset_stager::{tree_digest, AtomicFileWriter, StageOptions};
use chrono::Utc;
use page_core::{compute_layout, Viewport};
use stage_logging::stage_info;

pub struct StageArgs<'a> {
    pub root: &'a Path,
    pub manifest: Option<&'a Path>,
    pub options: StageOptions,
    pub report: Option<&'a Path>,
}

pub fn run_stage(args: StageArgs<'_>) -> Result<()> {
    let (manifest, source) = config::resolve_manifest(args.manifest, args.root)?;
    stage_info!(
        "Staging {} entr(ies) from {:?} into {}",
        manifest.entries.len(),
        source,
        args.root.display()
    );
    let report = asset_stager::stage(&manifest, args.root, args.options)
        .context("asset staging failed")?;

    for cleaned in &manifest.clean {
        let dir = args.root.join(cleaned);
        if dir.is_dir() {
            let digest = tree_digest(&dir)
                .with_context(|| format!("failed to fingerprint {}", dir.display()))?;
            stage_info!("{} digest {}", dir.display(), digest);
        }
    }
    println!(
        "staged {} file(s) from {} entr(ies), {} warning(s)",
        report.total_files(),
        report.entries.len(),
        report.warnings.len()
    );

    if let Some(path) = args.report {
        let json = report.to_json(&Utc::now().to_rfc3339());
        write_report(path, &serde_json::to_string_pretty(&json)?)?;
    }
    Ok(())
}

pub fn run_clean(root: &Path, manifest: Option<&Path>, options: StageOptions) -> Result<()> {
    let (manifest, _) = config::resolve_manifest(manifest, root)?;
    let removed = asset_stager::clean(&manifest, root, options).context("clean failed")?;
    println!("removed {} tree(s)", removed.len());
    Ok(())
}

pub fn run_print_manifest(root: &Path, manifest: Option<&Path>) -> Result<()> {
    let (manifest, _) = config::resolve_manifest(manifest, root)?;
    println!("{}", config::render_manifest(&manifest)?);
    Ok(())
}

pub fn run_layout(viewport: Viewport) -> Result<()> {
    let layout = compute_layout(viewport);
    println!("width: {}", viewport.width());
    println!("height: {}", viewport.height());
    println!("navbar collapsed: {}", layout.navbar_collapsed);
    println!("top offset: {}", layout.top_offset);
    match layout.content_min_height {
        Some(height) => println!("content min-height: {height}px"),
        None => println!("content min-height: unchanged"),
    }
    Ok(())
}

pub fn run_simulate(script: &Path) -> Result<()> {
    let outcome = session::replay_file(script)?;
    print!("{}", outcome.render());
    Ok(())
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .with_context(|| format!("report path {} has no file name", path.display()))?;
    let written = AtomicFileWriter::new(dir)
        .write(name, content.as_bytes())
        .with_context(|| format!("failed to write report {}", path.display()))?;
    stage_info!("Wrote stage report to {}", written.display());
    Ok(())
}
