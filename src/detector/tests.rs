use super::*;
use crate::edges::EdgeDetector;
use crate::error::Error;
use crate::image::WorkingImage;
use crate::types::{MinSize, Rect};
use image::{GrayImage, Luma};
use std::sync::Mutex;

/// Edge map with edge-free blocks on an otherwise fully edged background.
fn edge_free_blocks(w: u32, h: u32, blocks: &[Rect]) -> GrayImage {
    GrayImage::from_fn(w, h, |x, y| {
        let inside = blocks.iter().any(|b| {
            (x as i32) >= b.min_x && (x as i32) < b.max_x && (y as i32) >= b.min_y && (y as i32) < b.max_y
        });
        if inside {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// Returns a fixed edge map per threshold, fully edged otherwise.
struct ScriptedEdges {
    maps: Vec<(f32, GrayImage)>,
    calls: Mutex<Vec<(f32, f32)>>,
}

impl ScriptedEdges {
    fn new(maps: Vec<(f32, GrayImage)>) -> Self {
        Self {
            maps,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn thresholds(&self) -> Vec<f32> {
        self.calls.lock().unwrap().iter().map(|c| c.0).collect()
    }
}

impl EdgeDetector for ScriptedEdges {
    fn edge_map(&self, image: &GrayImage, low_threshold: f32, ratio: f32) -> GrayImage {
        self.calls.lock().unwrap().push((low_threshold, ratio));
        self.maps
            .iter()
            .find(|(t, _)| *t == low_threshold)
            .map(|(_, m)| m.clone())
            .unwrap_or_else(|| GrayImage::from_pixel(image.width(), image.height(), Luma([255])))
    }
}

/// Uses the crop itself as its edge map.
struct IdentityEdges;

impl EdgeDetector for IdentityEdges {
    fn edge_map(&self, image: &GrayImage, _low_threshold: f32, _ratio: f32) -> GrayImage {
        image.clone()
    }
}

fn blank(w: u32, h: u32) -> WorkingImage {
    WorkingImage::from_gray(GrayImage::new(w, h), 800).unwrap()
}

const BIG: Rect = Rect {
    min_x: 0,
    min_y: 0,
    max_x: 20,
    max_y: 20,
};
const SMALL: Rect = Rect {
    min_x: 25,
    min_y: 25,
    max_x: 35,
    max_y: 35,
};

#[test]
fn sweep_stops_once_amount_is_reached() {
    let edges = ScriptedEdges::new(vec![(3.0, edge_free_blocks(40, 40, &[BIG, SMALL]))]);
    let detector = RegionDetector::with_edge_detector(SearchParams::default(), &edges);
    let report = detector
        .search_with_diagnostics(&blank(40, 40), 2, MinSize::pixels(2.0), MinSize::pixels(2.0))
        .unwrap();

    assert_eq!(report.regions, vec![BIG, SMALL]);
    assert!(report.target_reached);
    assert_eq!(report.passes.len(), 1);
    assert_eq!(edges.thresholds(), vec![3.0]);
    assert_eq!(edges.calls.lock().unwrap()[0].1, 3.0);
}

#[test]
fn passes_merge_and_drop_duplicates() {
    let edges = ScriptedEdges::new(vec![
        (3.0, edge_free_blocks(40, 40, &[BIG])),
        (6.0, edge_free_blocks(40, 40, &[BIG, SMALL])),
    ]);
    let detector = RegionDetector::with_edge_detector(SearchParams::default(), &edges);
    let report = detector
        .search_with_diagnostics(&blank(40, 40), 2, MinSize::pixels(2.0), MinSize::pixels(2.0))
        .unwrap();

    assert_eq!(report.regions, vec![BIG, SMALL]);
    assert_eq!(report.passes.len(), 2);
    let second = &report.passes[1];
    assert_eq!(second.extracted, 2);
    assert_eq!(second.merged, 3);
    assert_eq!(second.kept, 2);
}

#[test]
fn exhausted_sweep_returns_what_it_found() {
    let edges = ScriptedEdges::new(vec![(9.0, edge_free_blocks(40, 40, &[SMALL]))]);
    let detector = RegionDetector::with_edge_detector(SearchParams::default(), &edges);
    let report = detector
        .search_with_diagnostics(&blank(40, 40), 5, MinSize::pixels(2.0), MinSize::pixels(2.0))
        .unwrap();

    assert_eq!(report.regions, vec![SMALL]);
    assert!(!report.target_reached);
    assert_eq!(report.passes.len(), 11);
    assert_eq!(edges.thresholds().last(), Some(&33.0));

    let seen: Vec<usize> = report.passes.iter().map(|p| p.candidates_seen).collect();
    assert!(
        seen.windows(2).all(|w| w[0] <= w[1]),
        "candidate count must not decrease: {seen:?}"
    );
}

#[test]
fn fully_edged_image_yields_no_regions() {
    let edges = ScriptedEdges::new(Vec::new());
    let params = SearchParams {
        threshold_ceiling: 10.0,
        ..Default::default()
    };
    let detector = RegionDetector::with_edge_detector(params, &edges);
    let regions = detector
        .search(&blank(30, 20), 3, MinSize::pixels(1.0), MinSize::pixels(1.0))
        .unwrap();
    assert!(regions.is_empty());
    assert_eq!(edges.thresholds(), vec![3.0, 6.0, 9.0]);
}

#[test]
fn zero_amount_is_clamped_to_one() {
    let edges = ScriptedEdges::new(vec![(3.0, edge_free_blocks(40, 40, &[BIG, SMALL]))]);
    let detector = RegionDetector::with_edge_detector(SearchParams::default(), &edges);
    let report = detector
        .search_with_diagnostics(&blank(40, 40), 0, MinSize::pixels(2.0), MinSize::pixels(2.0))
        .unwrap();
    assert_eq!(report.input.amount, 1);
    assert_eq!(report.regions, vec![BIG]);
}

#[test]
fn minimum_size_filters_small_regions() {
    let edges = ScriptedEdges::new(vec![(3.0, edge_free_blocks(40, 40, &[BIG, SMALL]))]);
    let detector = RegionDetector::with_edge_detector(SearchParams::default(), &edges);
    let regions = detector
        .search(&blank(40, 40), 2, MinSize::pixels(12.0), MinSize::pixels(12.0))
        .unwrap();
    assert_eq!(regions, vec![BIG]);
}

#[test]
fn mismatched_edge_map_is_an_internal_error() {
    struct TinyEdges;
    impl EdgeDetector for TinyEdges {
        fn edge_map(&self, _image: &GrayImage, _low: f32, _ratio: f32) -> GrayImage {
            GrayImage::new(1, 1)
        }
    }
    let detector = RegionDetector::with_edge_detector(SearchParams::default(), TinyEdges);
    let err = detector
        .search(&blank(10, 10), 1, MinSize::pixels(1.0), MinSize::pixels(1.0))
        .unwrap_err();
    assert!(matches!(err, Error::Internal(_)));
}

fn banded(values: &[u8], band: u32, h: u32) -> WorkingImage {
    let w = band * values.len() as u32;
    let gray = GrayImage::from_fn(w, h, |x, _| Luma([values[(x / band) as usize]]));
    WorkingImage::from_gray(gray, 800).unwrap()
}

fn bands(count: i32, band: i32, h: i32) -> Vec<Rect> {
    (0..count)
        .map(|i| Rect::new(i * band, 0, (i + 1) * band, h))
        .collect()
}

#[test]
fn scorer_ranks_calm_regions_first() {
    let image = banded(&[12, 3, 30], 10, 8);
    let scorer = RegionScorer::with_edge_detector(ScoreParams::default(), IdentityEdges);
    let scores = scorer.score(&image, &bands(3, 10, 8)).unwrap();

    let order: Vec<usize> = scores.iter().map(|s| s.index).collect();
    assert_eq!(order, vec![1, 0, 2]);
    assert_eq!(scores[0].score, 3.0);
    assert_eq!(scores[1].score, 12.0);
    assert_eq!(scores[2].score, 30.0);
}

#[test]
fn scorer_rejects_out_of_bounds_batch() {
    let image = banded(&[12, 3, 30], 10, 8);
    let scorer = RegionScorer::with_edge_detector(ScoreParams::default(), IdentityEdges);
    let mut rects = bands(3, 10, 8);
    rects[2] = Rect::new(20, 0, 31, 8);
    let err = scorer.score(&image, &rects).unwrap_err();
    assert!(matches!(err, Error::InvalidBounds { index: 2, .. }), "unexpected {err:?}");
}

#[test]
fn scorer_maps_original_coordinates() {
    // 1600x400 original, working copy is 800x200 with bands 200 px wide.
    let gray = GrayImage::from_fn(1600, 400, |x, _| Luma([if x < 800 { 40 } else { 0 }]));
    let image = WorkingImage::from_gray(gray, 800).unwrap();
    let scorer = RegionScorer::with_edge_detector(ScoreParams::default(), IdentityEdges);
    let scores = scorer
        .score_original(&image, &[Rect::new(0, 0, 600, 400), Rect::new(1000, 0, 1600, 400)])
        .unwrap();
    assert_eq!(scores[0].index, 1);
    assert_eq!(scores[0].score, 0.0);
    assert_eq!(scores[1].index, 0);
}

#[test]
fn crop_edge_maps_follow_input_order() {
    let image = banded(&[12, 3, 30], 10, 8);
    let scorer = RegionScorer::with_edge_detector(ScoreParams::default(), IdentityEdges);
    let maps = scorer
        .crop_edge_maps(&image, &[Rect::new(20, 0, 30, 8), Rect::new(0, 2, 5, 6)])
        .unwrap();
    assert_eq!(maps.len(), 2);
    assert_eq!(maps[0].dimensions(), (10, 8));
    assert_eq!(maps[0].get_pixel(0, 0)[0], 30);
    assert_eq!(maps[1].dimensions(), (5, 4));
    assert_eq!(maps[1].get_pixel(4, 3)[0], 12);

    let err = scorer.crop_edge_maps(&image, &[Rect::new(0, 0, 40, 8)]).unwrap_err();
    assert!(matches!(err, Error::InvalidBounds { index: 0, .. }));
}
