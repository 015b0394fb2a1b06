use image::{GrayImage, Luma, Rgb, RgbImage};
use narwhal_cv::candidate;
use narwhal_cv::pipeline::detector::evaluate;
use narwhal_cv::traits::ContourExtractor;
use narwhal_cv::{
    BoundingBox, CameraConfig, ColorBand, ImageprocContourExtractor, PipelineConfig, TargetConfig,
    TargetPipeline, TargetSelector,
};

fn config(min_area_percent: f64, max_targets: usize) -> PipelineConfig {
    PipelineConfig {
        target: TargetConfig {
            color_band: ColorBand::new([75, 200, 200], [95, 255, 255]),
            min_area_percent,
            target_aspect_ratio: 1.0,
            aspect_fuzz_factor: 4.0,
            max_targets,
            ..TargetConfig::default()
        },
        camera: CameraConfig::new(60.0, 45.0),
    }
}

fn mask_with(width: u32, height: u32, boxes: &[BoundingBox]) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    for b in boxes {
        for y in b.top..b.bottom {
            for x in b.left..b.right {
                mask.put_pixel(x as u32, y as u32, Luma([255]));
            }
        }
    }
    mask
}

#[test]
fn single_square_is_the_only_winner() {
    let mask = mask_with(100, 100, &[BoundingBox::new(40, 40, 60, 60)]);
    let contours = ImageprocContourExtractor.extract_contours(&mask).unwrap();

    let result = evaluate(&contours, &config(1.0, 3), 100, 100);

    assert_eq!(result.candidates.len(), 1);
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.candidates[0].bounding_box_area, 400.0);
    assert_eq!(result.targets[0].bounding_rect_center_x, 50.0);
    assert_eq!(result.targets[0].horizontal_angle, 0.0);
    assert_eq!(result.targets[0].vertical_angle, 0.0);
}

#[test]
fn min_area_above_candidate_share_filters_everything() {
    let mask = mask_with(100, 100, &[BoundingBox::new(40, 40, 60, 60)]);
    let contours = ImageprocContourExtractor.extract_contours(&mask).unwrap();

    let result = evaluate(&contours, &config(50.0, 1), 100, 100);

    assert_eq!(result.stats.contours, 1);
    assert!(result.candidates.is_empty());
    assert!(result.targets.is_empty());
}

#[test]
fn identical_shapes_tie_to_first_discovered() {
    let mask = mask_with(
        100,
        100,
        &[BoundingBox::new(60, 40, 80, 60), BoundingBox::new(10, 40, 30, 60)],
    );
    let contours = ImageprocContourExtractor.extract_contours(&mask).unwrap();

    for _ in 0..5 {
        let result = evaluate(&contours, &config(1.0, 1), 100, 100);
        assert_eq!(result.candidates.len(), 2);
        assert_eq!(result.candidates[0].score, result.candidates[1].score);
        assert_eq!(result.targets.len(), 1);
        assert_eq!(result.targets[0].bounding_rect_center_x, 20.0);
    }
}

#[test]
fn exact_tie_in_selector_is_stable() {
    let mask = mask_with(
        100,
        100,
        &[BoundingBox::new(10, 10, 30, 30), BoundingBox::new(50, 50, 90, 70)],
    );
    let contours = ImageprocContourExtractor.extract_contours(&mask).unwrap();
    let mut candidates = candidate::build(&contours, &config(1.0, 1).target);
    candidates[0].score = 5.0;
    candidates[1].score = 5.0;

    let selector = TargetSelector::new(1);
    for _ in 0..5 {
        let mut ranked = candidates.clone();
        let selected = selector.select(&mut ranked);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 0);
    }
}

#[test]
fn winners_are_bounded_and_ordered() {
    let boxes = [
        BoundingBox::new(2, 2, 22, 22),
        BoundingBox::new(30, 2, 60, 22),
        BoundingBox::new(2, 40, 40, 80),
        BoundingBox::new(50, 40, 70, 90),
        BoundingBox::new(75, 75, 95, 95),
    ];
    let mask = mask_with(100, 100, &boxes);
    let contours = ImageprocContourExtractor.extract_contours(&mask).unwrap();

    for max in 1..=6 {
        let result = evaluate(&contours, &config(1.0, max), 100, 100);
        assert!(result.targets.len() <= max);
        assert_eq!(result.targets.len(), max.min(result.candidates.len()));
        assert!(result.candidates.windows(2).all(|w| w[0].score >= w[1].score));
        for c in &result.candidates {
            assert!(c.aspect_quotient >= 1.0);
        }
    }
}

#[test]
fn no_contours_gives_empty_result() {
    let result = evaluate(&[], &config(1.0, 1), 100, 100);
    assert!(result.is_empty());
    assert!(result.candidates.is_empty());
}

#[test]
fn rgb_frame_end_to_end() {
    let mut frame = RgbImage::new(100, 100);
    for y in 40..60 {
        for x in 40..60 {
            frame.put_pixel(x, y, Rgb([0, 255, 0]));
        }
    }
    // a blue square that the band ignores
    for y in 5..25 {
        for x in 5..25 {
            frame.put_pixel(x, y, Rgb([0, 0, 255]));
        }
    }

    let mut pipeline = TargetPipeline::new(config(1.0, 2)).unwrap();
    let result = pipeline.process(&mut frame).unwrap();

    assert_eq!(result.stats.contours, 1);
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.best().map(|t| t.bounding_rect_center_x), Some(50.0));
}

#[test]
fn rgba_frame_is_converted() {
    let mut frame = image::RgbaImage::new(100, 100);
    for y in 40..60 {
        for x in 40..60 {
            frame.put_pixel(x, y, image::Rgba([0, 255, 0, 255]));
        }
    }

    let mut pipeline = TargetPipeline::new(config(1.0, 1)).unwrap();
    let (annotated, result) = pipeline.process_rgba(&frame).unwrap();

    assert_eq!(annotated.dimensions(), (100, 100));
    assert_eq!(result.targets.len(), 1);
}
