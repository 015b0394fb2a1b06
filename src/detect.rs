//! Still-image target detection using narwhal-cv

use anyhow::{Context, Result};
use narwhal_cv::{
    utils::ImageUtils, AnnotationConfig, FrameStats, PipelineConfig, TargetInformation,
    TargetPipeline,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Known heights used to estimate target distance
#[derive(Debug, Clone, Copy)]
pub struct Heights {
    pub target: f32,
    pub camera: f32,
}

/// One reported target, with its distance when heights were supplied
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedTarget {
    #[serde(flatten)]
    pub info: TargetInformation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

/// Detection report for one image
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub image: PathBuf,
    pub targets: Vec<ReportedTarget>,
    pub stats: FrameStats,
}

/// What to do with one image
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    pub annotation: AnnotationConfig,
    pub annotated_output: Option<PathBuf>,
    pub heights: Option<Heights>,
}

/// Run the pipeline once over an image file
pub fn detect_targets(
    image_path: &Path,
    config: PipelineConfig,
    options: &DetectOptions,
) -> Result<Report> {
    let mut frame = ImageUtils::load_rgb(image_path)?;

    let mut pipeline = TargetPipeline::new(config)
        .context("Failed to build the detection pipeline")?
        .with_annotation(options.annotation.clone());
    let result = pipeline
        .process(&mut frame)
        .with_context(|| format!("Detection failed for {:?}", image_path))?;

    if let Some(path) = &options.annotated_output {
        ImageUtils::save_rgb(&frame, path)?;
        log::info!("Annotated frame saved: {:?}", path);
    }

    let targets = result
        .targets
        .into_iter()
        .map(|info| ReportedTarget {
            distance: options
                .heights
                .and_then(|h| info.target_distance(h.target, h.camera)),
            info,
        })
        .collect();

    Ok(Report {
        image: image_path.to_path_buf(),
        targets,
        stats: result.stats,
    })
}

/// Write a report as pretty JSON
pub fn export_json(report: &Report, output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize detection report")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON to: {:?}", output_path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use narwhal_cv::{ColorBand, TargetConfig};

    fn write_square_image(name: &str) -> Result<PathBuf> {
        let mut img = RgbImage::new(100, 100);
        for y in 40..60 {
            for x in 40..60 {
                img.put_pixel(x, y, Rgb([0, 255, 0]));
            }
        }
        let path = std::env::temp_dir().join(name);
        ImageUtils::save_rgb(&img, &path)?;
        Ok(path)
    }

    fn green_config() -> PipelineConfig {
        PipelineConfig {
            target: TargetConfig {
                color_band: ColorBand::new([75, 200, 200], [95, 255, 255]),
                min_area_percent: 1.0,
                aspect_fuzz_factor: 4.0,
                ..TargetConfig::default()
            },
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_detect_targets_with_distance() -> Result<()> {
        let path = write_square_image("narwhal_detect_square.png")?;
        let options = DetectOptions {
            heights: Some(Heights {
                target: 250.0,
                camera: 50.0,
            }),
            ..DetectOptions::default()
        };

        let report = detect_targets(&path, green_config(), &options)?;
        let _ = std::fs::remove_file(&path);

        assert_eq!(report.targets.len(), 1);
        assert_eq!(report.targets[0].info.bounding_rect_center_x, 50.0);
        assert_eq!(report.targets[0].distance, Some(200.0));
        Ok(())
    }

    #[test]
    fn test_report_json_is_flat() -> Result<()> {
        let path = write_square_image("narwhal_detect_json.png")?;
        let report = detect_targets(&path, green_config(), &DetectOptions::default())?;
        let _ = std::fs::remove_file(&path);

        let json = serde_json::to_value(&report)?;
        assert_eq!(json["targets"][0]["boundingRectCenterX"], 50.0);
        assert!(json["targets"][0].get("distance").is_none());
        assert_eq!(json["stats"]["winners"], 1);
        Ok(())
    }
}
