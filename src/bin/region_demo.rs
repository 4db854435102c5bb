use region_finder::config::{load_config, ModeConfig, OutputConfig};
use region_finder::detector::WorkingScale;
use region_finder::edges::{CannyEdgeDetector, EdgeDetector};
use region_finder::image::io::{load_working_image, save_grayscale, write_json_file};
use region_finder::image::WorkingImage;
use region_finder::{Rect, RegionDetector, RegionScorer, ScoredRegion, SearchParams};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let image = load_working_image(&config.input, config.max_working_size)?;

    match &config.mode {
        ModeConfig::Weighted {
            amount,
            min_width,
            min_height,
            search,
        } => {
            let detector = RegionDetector::new(search.clone());
            let report = detector
                .search_with_diagnostics(&image, *amount, *min_width, *min_height)
                .map_err(|e| format!("Region search failed: {e}"))?;
            eprintln!("{}", report.summary());
            emit(&config.output, &report)?;
            if let Some(dir) = &config.output.debug_dir {
                save_sweep_maps(dir, &image, search)?;
            }
        }
        ModeConfig::Bounded { regions, score } => {
            let scorer = RegionScorer::new(score.clone());
            let scores = scorer
                .score_original(&image, regions)
                .map_err(|e| format!("Scoring failed: {e}"))?;
            let report = BoundedReport {
                width: image.width(),
                height: image.height(),
                scores,
            };
            emit(&config.output, &report)?;
            if let Some(dir) = &config.output.debug_dir {
                save_crop_maps(dir, &image, &scorer, regions)?;
            }
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: region_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoundedReport {
    width: usize,
    height: usize,
    scores: Vec<ScoredRegion>,
}

fn emit<T: Serialize>(output: &OutputConfig, value: &T) -> Result<(), String> {
    match &output.json_out {
        Some(path) => {
            write_json_file(path, value)?;
            println!("JSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Working image plus the edge map of every sweep threshold.
fn save_sweep_maps(dir: &Path, image: &WorkingImage, search: &SearchParams) -> Result<(), String> {
    save_grayscale(image.gray(), &dir.join("working.png"))?;
    let edges = CannyEdgeDetector::new(search.blur_divisor);
    for threshold in search.thresholds() {
        let map = edges.edge_map(image.gray(), threshold, search.edge_ratio);
        save_grayscale(&map, &dir.join(format!("edges_t{threshold:02}.png")))?;
    }
    eprintln!("Debug artifacts written to {}", dir.display());
    Ok(())
}

/// Working image plus the edge map of every scored crop.
fn save_crop_maps(
    dir: &Path,
    image: &WorkingImage,
    scorer: &RegionScorer,
    regions: &[Rect],
) -> Result<(), String> {
    save_grayscale(image.gray(), &dir.join("working.png"))?;
    let scale = WorkingScale::of(image);
    let working: Vec<Rect> = regions.iter().map(|r| scale.rect_to_working(r)).collect();
    let maps = scorer
        .crop_edge_maps(image, &working)
        .map_err(|e| format!("Crop edge maps failed: {e}"))?;
    for (index, map) in maps.iter().enumerate() {
        save_grayscale(map, &dir.join(format!("crop_{index:02}_edges.png")))?;
    }
    eprintln!("Debug artifacts written to {}", dir.display());
    Ok(())
}
