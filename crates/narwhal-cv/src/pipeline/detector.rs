//! Target pipeline driver

use super::config::{AnnotationConfig, OutputMode};
use super::result::{FrameResult, FrameStats};
use crate::candidate::{self, CandidateDescriptor};
use crate::contours::{Contour, ImageprocContourExtractor};
use crate::segment::ColorSegmenter;
use crate::select::TargetSelector;
use crate::traits::ContourExtractor;
use crate::utils::{draw_box, paint_mask, ImageUtils};
use crate::Result;
use image::{RgbImage, RgbaImage};
use narwhal_core::{ConfigError, ConfigSource, PipelineConfig, SharedConfig, TargetInformation};
use std::time::Instant;

/// Runs segmentation, contour extraction, filtering, scoring, selection and
/// angle resolution over one frame at a time.
///
/// The configuration is copied out of its source when the pipeline is built
/// and again only on [`reload_config`](Self::reload_config); edits made to
/// the source in between do not affect frames being processed. Calls must be
/// serialized by the caller. The only state kept between frames is the mask
/// buffer and the configuration snapshot.
pub struct TargetPipeline<S = SharedConfig, E = ImageprocContourExtractor> {
    source: S,
    config: PipelineConfig,
    annotation: AnnotationConfig,
    segmenter: ColorSegmenter,
    extractor: E,
}

impl<S: ConfigSource> TargetPipeline<S, ImageprocContourExtractor> {
    /// Create a pipeline using the default contour backend.
    ///
    /// Fails if `source` has no configuration loaded or it is invalid.
    pub fn new(source: S) -> Result<Self> {
        Self::with_extractor(source, ImageprocContourExtractor)
    }
}

impl<S: ConfigSource, E: ContourExtractor> TargetPipeline<S, E> {
    /// Create a pipeline with a specific contour backend
    pub fn with_extractor(source: S, extractor: E) -> Result<Self> {
        let config = load_snapshot(&source)?;
        log_thresholds(&config);

        Ok(Self {
            source,
            config,
            annotation: AnnotationConfig::default(),
            segmenter: ColorSegmenter::new(),
            extractor,
        })
    }

    pub fn with_annotation(mut self, annotation: AnnotationConfig) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn set_annotation(&mut self, annotation: AnnotationConfig) {
        self.annotation = annotation;
    }

    pub fn annotation(&self) -> &AnnotationConfig {
        &self.annotation
    }

    /// The configuration snapshot frames are processed with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Take a fresh snapshot from the configuration source.
    ///
    /// Call between frames. On failure the previous snapshot stays active.
    pub fn reload_config(&mut self) -> Result<()> {
        match load_snapshot(&self.source) {
            Ok(config) => {
                log_thresholds(&config);
                self.config = config;
                Ok(())
            }
            Err(e) => {
                log::warn!("Keeping previous configuration: {}", e);
                Err(e)
            }
        }
    }

    /// Process a frame and draw the overlay into it.
    ///
    /// In [`OutputMode::ColorFilter`] the frame is replaced by the threshold
    /// mask and no targets are returned.
    pub fn process(&mut self, frame: &mut RgbImage) -> Result<FrameResult> {
        if self.annotation.mode == OutputMode::ColorFilter {
            let start = Instant::now();
            let band = self.config.target.color_band;
            let mask = self.segmenter.segment(frame, &band);
            paint_mask(frame, mask);
            return Ok(FrameResult {
                stats: FrameStats {
                    processing_time_us: start.elapsed().as_micros() as u64,
                    ..FrameStats::default()
                },
                ..FrameResult::default()
            });
        }

        let result = self.detect(frame)?;
        self.annotate(frame, &result);
        Ok(result)
    }

    /// Process an RGBA frame, returning an annotated RGB copy with the result
    pub fn process_rgba(&mut self, frame: &RgbaImage) -> Result<(RgbImage, FrameResult)> {
        let mut rgb = ImageUtils::rgba_to_rgb(frame);
        let result = self.process(&mut rgb)?;
        Ok((rgb, result))
    }

    /// Find targets without touching the frame
    pub fn detect(&mut self, frame: &RgbImage) -> Result<FrameResult> {
        let start = Instant::now();
        let (width, height) = frame.dimensions();
        if width == 0 || height == 0 {
            log::debug!("Skipping empty frame");
            return Ok(FrameResult::default());
        }

        let band = self.config.target.color_band;
        let mask = self.segmenter.segment(frame, &band);
        let contours = self.extractor.extract_contours(mask)?;

        let mut result = self.evaluate_contours(&contours, width, height);
        result.stats.processing_time_us = start.elapsed().as_micros() as u64;
        Ok(result)
    }

    /// Run the shape stages over already extracted contours
    pub fn evaluate_contours(&self, contours: &[Contour], width: u32, height: u32) -> FrameResult {
        evaluate(contours, &self.config, width, height)
    }

    fn annotate(&self, frame: &mut RgbImage, result: &FrameResult) {
        let winners = result.targets.len();
        let thickness = self.annotation.thickness;

        if self.annotation.draw_survivors {
            for candidate in &result.candidates[winners..] {
                draw_box(frame, &candidate.bounding_box, self.annotation.survivor_color, thickness);
            }
        }
        if self.annotation.draw_winners {
            for candidate in &result.candidates[..winners] {
                draw_box(frame, &candidate.bounding_box, self.annotation.winner_color, thickness);
            }
        }
    }
}

/// Build, filter, score and rank candidates, then resolve the winners.
pub fn evaluate(
    contours: &[Contour],
    config: &PipelineConfig,
    width: u32,
    height: u32,
) -> FrameResult {
    let target = &config.target;
    let frame_area = width as f64 * height as f64;

    let built = candidate::build(contours, target);
    let mut survivors = candidate::filter(built, target, frame_area);
    candidate::score_all(&mut survivors, target);

    let targets: Vec<TargetInformation> = TargetSelector::new(target.max_targets)
        .select(&mut survivors)
        .iter()
        .map(|c: &CandidateDescriptor| {
            TargetInformation::resolve(&c.bounding_box, width, height, &config.camera)
        })
        .collect();

    log::debug!(
        "Found contours: {}, survivors: {}, winners: {}",
        contours.len(),
        survivors.len(),
        targets.len()
    );

    FrameResult {
        stats: FrameStats {
            contours: contours.len(),
            survivors: survivors.len(),
            winners: targets.len(),
            processing_time_us: 0,
        },
        targets,
        candidates: survivors,
    }
}

fn load_snapshot<S: ConfigSource>(source: &S) -> Result<PipelineConfig> {
    let config = source.snapshot().ok_or(ConfigError::NotLoaded)?;
    config.validate()?;
    Ok(config)
}

fn log_thresholds(config: &PipelineConfig) {
    let band = &config.target.color_band;
    log::info!(
        "Thresholding from {:?} to {:?}, max targets {}",
        band.lower(),
        band.upper(),
        config.target.max_targets
    );
}
