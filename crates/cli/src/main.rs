mod settings;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use cluster_viewer_core::artifact::domain::cluster::Cluster;
use cluster_viewer_core::artifact::infrastructure::json_artifact_loader::load_from_path;
use cluster_viewer_core::pipeline::summarize_clusters_use_case::{
    summarize_clusters, ClusterSummary,
};
use cluster_viewer_core::pipeline::view_cluster_use_case::{ClusterView, ViewClusterUseCase};
use cluster_viewer_core::pipeline::view_state::ViewState;
use cluster_viewer_core::rendering::domain::annotated_image::AnnotatedImage;
use cluster_viewer_core::rendering::infrastructure::directory_image_source::normalize_directory_argument;
use cluster_viewer_core::shared::warning::Warning;

use settings::Settings;

/// Inspect face-clustering results with boxes drawn over the source images.
#[derive(Parser)]
#[command(name = "cluster-viewer")]
struct Cli {
    /// Cluster artifact (JSON array of clusters).
    artifact: PathBuf,

    /// Directory holding the source images.
    image_dir: String,

    /// Cluster label to show (defaults to the first cluster).
    #[arg(long, allow_hyphen_values = true)]
    cluster: Option<i64>,

    /// Only show images with more than one face.
    #[arg(long)]
    multi_face_only: bool,

    /// Draw every box in red instead of cycling the palette.
    #[arg(long)]
    monochrome: bool,

    /// Save annotated images as PNG into this directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Save decoded cluster thumbnails into this directory.
    #[arg(long)]
    thumbnails: Option<PathBuf>,

    /// Print the full record of this face id from the shown cluster.
    #[arg(long)]
    face: Option<String>,

    /// Store --multi-face-only and --monochrome as the new defaults.
    #[arg(long)]
    remember: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = if cli.remember {
        Settings {
            color_coded: !cli.monochrome,
            multi_face_only: cli.multi_face_only,
        }
    } else {
        Settings::load()
    };

    let clusters = load_from_path(&cli.artifact)?;
    if clusters.is_empty() {
        println!("No clusters to display.");
        return Ok(());
    }
    let state = build_state(&cli, &settings);

    let summary = summarize_clusters(&clusters);
    let active_label = state.active_cluster(&clusters).map(|c| c.cluster_label);
    print_sidebar(&summary.summaries, active_label);
    if let Some(dir) = &cli.thumbnails {
        save_thumbnails(dir, &summary.summaries)?;
    }
    let mut warnings = summary.warnings;

    let image_dir = normalize_directory_argument(&cli.image_dir);
    let use_case = ViewClusterUseCase::for_directory(image_dir);
    let view = use_case
        .execute(&clusters, &state)?
        .ok_or("No clusters to display")?;

    print_view(&view, &state);
    if let Some(face_id) = &cli.face {
        match face_detail(&clusters, view.cluster_label, face_id)? {
            Some(json) => {
                println!();
                println!("Face {face_id}:");
                println!("{json}");
            }
            None => println!("Face {face_id} not found in cluster {}.", view.cluster_label),
        }
    }

    merge_warnings(&mut warnings, view.warnings);
    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }

    if cli.remember {
        settings.save();
    }
    if let Some(dir) = &cli.output {
        save_rendered(dir, &view.rendered)?;
    }
    Ok(())
}

fn build_state(cli: &Cli, settings: &Settings) -> ViewState {
    let mut state = ViewState::new();
    if let Some(label) = cli.cluster {
        state.select_cluster(label);
    }
    state.set_multi_face_only(cli.multi_face_only || settings.multi_face_only);
    state.set_color_coded(settings.color_coded && !cli.monochrome);
    state
}

fn print_sidebar(summaries: &[ClusterSummary], active_label: Option<i64>) {
    println!("Clusters");
    for s in summaries {
        let marker = if Some(s.cluster_label) == active_label {
            ">"
        } else {
            " "
        };
        let mut line = format!(
            "{marker} Cluster {} (Size: {})",
            s.cluster_label, s.cluster_size
        );
        if s.multi_face_images > 0 {
            line.push_str(&format!(
                "  ⚠️ Multiple Faces in {} image(s)",
                s.multi_face_images
            ));
        }
        if !s.thumbnails.is_empty() {
            line.push_str(&format!("  [{} thumbnail(s)]", s.thumbnails.len()));
        }
        println!("{line}");
    }
    println!();
}

fn print_view(view: &ClusterView, state: &ViewState) {
    println!("Cluster {} (Size: {})", view.cluster_label, view.cluster_size);

    if state.multi_face_only() && view.visible.is_empty() {
        println!("No images with multiple faces in this cluster.");
    }
    if view.rendered.is_empty() {
        println!("No valid images to display.");
        return;
    }

    for annotated in &view.rendered {
        println!();
        println!("{}  ({})", annotated.file_name, annotated.path.display());
        for region in &annotated.regions {
            println!(
                "    {:<7} {}  {}",
                region.color.name(),
                region.face_id,
                region.cords
            );
        }
        if let Some(group) = view.images.get(&annotated.file_name) {
            println!("  Face IDs:");
            for line in group.face_ids_text().lines() {
                println!("    {line}");
            }
        }
    }
}

/// Full record of `face_id` in cluster `label`, pretty-printed.
fn face_detail(
    clusters: &[Cluster],
    label: i64,
    face_id: &str,
) -> Result<Option<String>, serde_json::Error> {
    clusters
        .iter()
        .find(|c| c.cluster_label == label)
        .and_then(|c| c.find_face(face_id))
        .map(serde_json::to_string_pretty)
        .transpose()
}

fn save_rendered(
    dir: &Path,
    rendered: &[AnnotatedImage],
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let names = output_names(rendered.iter().map(|a| a.file_name.as_str()));
    for (annotated, name) in rendered.iter().zip(names) {
        annotated.image.save(dir.join(name))?;
    }
    log::info!("Saved {} annotated images to {}", rendered.len(), dir.display());
    Ok(())
}

fn save_thumbnails(
    dir: &Path,
    summaries: &[ClusterSummary],
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let mut saved = 0;
    for s in summaries {
        for thumb in &s.thumbnails {
            let path = dir.join(format!("cluster_{}_{}.png", s.cluster_label, thumb.key));
            thumb.image.save(&path)?;
            saved += 1;
        }
    }
    log::info!("Saved {saved} thumbnails to {}", dir.display());
    Ok(())
}

/// Output name for a rendered image: the source file name with `.png`
/// appended, unless it already ends in `.png`.
fn png_name(file_name: &str) -> String {
    let name = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("image");
    if name.to_lowercase().ends_with(".png") {
        name.to_string()
    } else {
        format!("{name}.png")
    }
}

/// One output name per source, suffixed `_2`, `_3`, ... where names would
/// otherwise collide. Compared case-insensitively.
fn output_names<'a>(file_names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    let mut names = Vec::new();
    for file_name in file_names {
        let base = png_name(file_name);
        let mut name = base.clone();
        let mut n = 2;
        while !taken.insert(name.to_lowercase()) {
            let stem = base.rsplit_once('.').map_or(base.as_str(), |(stem, _)| stem);
            name = format!("{stem}_{n}.png");
            n += 1;
        }
        names.push(name);
    }
    names
}

/// Appends the view's render warnings to `warnings`. Its grouping warnings
/// are dropped because the summary pass already grouped every cluster.
fn merge_warnings(warnings: &mut Vec<Warning>, view_warnings: Vec<Warning>) {
    warnings.extend(view_warnings.into_iter().filter(|w| {
        matches!(w, Warning::FileNotFound { .. } | Warning::ImageDecode { .. })
    }));
}
