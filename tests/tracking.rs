mod common;

use common::synthetic_image::{checkerboard_u8, shifted_u8, textured_u8};
use flow_tracker::image::ImageU8;
use flow_tracker::{FlowTracker, Point, TrackError, TrackerParams};

fn frame(buffer: &[u8], width: usize, height: usize) -> ImageU8<'_> {
    ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: buffer,
    }
}

#[test]
fn border_points_are_never_tracked() {
    let (width, height) = (96usize, 96usize);
    let buffer = textured_u8(width, height);

    let params = TrackerParams {
        pyramid_depth: 1,
        ..Default::default()
    };
    let mut tracker = FlowTracker::new(params);
    let points = vec![
        Point { x: 2, y: 48 },  // inside the half-window margin
        Point { x: 48, y: 94 }, // bottom edge
        Point { x: 0, y: 0 },   // corner
        Point { x: 48, y: 48 }, // interior control point
    ];
    let result = tracker
        .track(frame(&buffer, width, height), frame(&buffer, width, height), &points)
        .expect("valid frames");

    assert_eq!(
        result.vectors.len(),
        1,
        "only the interior point should survive"
    );
    assert_eq!(result.vectors[0].pos.x, 480);
    assert_eq!(result.vectors[0].pos.y, 480);
}

#[test]
fn textureless_regions_are_rejected_by_the_determinant() {
    let (width, height) = (96usize, 96usize);
    let buffer = vec![128u8; width * height];

    let mut tracker = FlowTracker::new(TrackerParams::default());
    let points = vec![Point { x: 48, y: 48 }];
    let report = tracker
        .track_with_diagnostics(
            frame(&buffer, width, height),
            frame(&buffer, width, height),
            &points,
        )
        .expect("valid frames");

    assert!(report.result.vectors.is_empty());
    // The drop happens at the coarsest level, before any iteration.
    let coarsest = &report.trace.levels[0];
    assert_eq!(coarsest.outcomes.rejected_degenerate, 1);
}

#[test]
fn checkerboard_cell_interiors_lack_texture() {
    // Cells larger than the patch: a window centered mid-cell sees a flat
    // region, while a window on a cell corner straddles both edge
    // directions.
    let (width, height) = (96usize, 96usize);
    let buffer = checkerboard_u8(width, height, 16);

    let params = TrackerParams {
        pyramid_depth: 0,
        ..Default::default()
    };
    let mut tracker = FlowTracker::new(params);
    let points = vec![
        Point { x: 40, y: 40 }, // mid-cell
        Point { x: 48, y: 48 }, // cell corner
    ];
    let report = tracker
        .track_with_diagnostics(
            frame(&buffer, width, height),
            frame(&buffer, width, height),
            &points,
        )
        .expect("valid frames");

    assert_eq!(report.result.vectors.len(), 1);
    assert_eq!(report.result.vectors[0].pos.x, 480);
    assert_eq!(report.trace.levels[0].outcomes.rejected_degenerate, 1);
}

#[test]
fn survivor_count_never_increases_across_levels() {
    let (width, height) = (128usize, 128usize);
    let old = textured_u8(width, height);
    let new = shifted_u8(&old, width, height, 2, 2);

    let params = TrackerParams {
        pyramid_depth: 3,
        max_points: 64,
        ..Default::default()
    };
    let mut tracker = FlowTracker::new(params);
    // A mix of interior points and points near the margin.
    let points: Vec<Point> = (0..6)
        .flat_map(|j| (0..6).map(move |i| Point { x: 8 + 20 * i, y: 8 + 20 * j }))
        .collect();
    let report = tracker
        .track_with_diagnostics(
            frame(&new, width, height),
            frame(&old, width, height),
            &points,
        )
        .expect("valid frames");

    let levels = &report.trace.levels;
    assert_eq!(levels.len(), 4);
    for stage in levels {
        assert!(stage.survived <= stage.points_in);
    }
    for pair in levels.windows(2) {
        // Stages are recorded coarsest first; the next stage starts from
        // the previous stage's survivors.
        assert_eq!(pair[1].points_in, pair[0].survived);
        assert!(pair[1].survived <= pair[0].survived);
    }
    assert_eq!(
        report.result.vectors.len(),
        levels.last().expect("at least one level").survived
    );
}

#[test]
fn max_points_caps_the_examined_set() {
    let (width, height) = (96usize, 96usize);
    let buffer = textured_u8(width, height);

    let params = TrackerParams {
        max_points: 4,
        ..Default::default()
    };
    let mut tracker = FlowTracker::new(params);
    let points: Vec<Point> = (0..10).map(|i| Point { x: 20 + 5 * i, y: 48 }).collect();
    let result = tracker
        .track(frame(&buffer, width, height), frame(&buffer, width, height), &points)
        .expect("valid frames");

    assert_eq!(result.attempted, 4);
    assert!(result.vectors.len() <= 4);
    // The cap keeps the first points in input order.
    assert_eq!(result.vectors[0].pos.x, 200);
}

#[test]
fn a_single_iteration_still_produces_tracked_points() {
    let (width, height) = (96usize, 96usize);
    let buffer = textured_u8(width, height);

    let params = TrackerParams {
        max_iterations: 1,
        ..Default::default()
    };
    let mut tracker = FlowTracker::new(params);
    let points = vec![Point { x: 48, y: 48 }];
    let result = tracker
        .track(frame(&buffer, width, height), frame(&buffer, width, height), &points)
        .expect("valid frames");

    assert_eq!(result.vectors.len(), 1);
    assert_eq!(result.vectors[0].flow.x, 0);
}

#[test]
fn mismatched_frame_sizes_are_rejected() {
    let old = vec![0u8; 64 * 64];
    let new = vec![0u8; 32 * 32];

    let mut tracker = FlowTracker::new(TrackerParams::default());
    let err = tracker
        .track(frame(&new, 32, 32), frame(&old, 64, 64), &[])
        .expect_err("sizes differ");
    assert!(matches!(err, TrackError::FrameSizeMismatch { .. }));
}

#[test]
fn invalid_parameters_are_rejected_at_the_boundary() {
    let buffer = vec![0u8; 64 * 64];
    let points = vec![Point { x: 32, y: 32 }];

    let mut tracker = FlowTracker::new(TrackerParams {
        half_window_size: 40,
        ..Default::default()
    });
    assert!(matches!(
        tracker.track(frame(&buffer, 64, 64), frame(&buffer, 64, 64), &points),
        Err(TrackError::InvalidWindow { .. })
    ));

    tracker.set_params(TrackerParams {
        subpixel_factor: 0,
        ..Default::default()
    });
    assert_eq!(
        tracker
            .track(frame(&buffer, 64, 64), frame(&buffer, 64, 64), &points)
            .expect_err("zero factor"),
        TrackError::ZeroSubpixelFactor
    );
}

#[test]
fn empty_point_set_returns_an_empty_result() {
    let (width, height) = (64usize, 64usize);
    let buffer = textured_u8(width, height);

    let mut tracker = FlowTracker::new(TrackerParams::default());
    let report = tracker
        .track_with_diagnostics(
            frame(&buffer, width, height),
            frame(&buffer, width, height),
            &[],
        )
        .expect("valid frames");

    assert!(report.result.vectors.is_empty());
    assert_eq!(report.result.attempted, 0);
    assert_eq!(report.trace.levels.len(), 3);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_tracking_matches_sequential() {
    use flow_tracker::ParallelTrackOptions;

    let (width, height) = (128usize, 128usize);
    let old = textured_u8(width, height);
    let new = shifted_u8(&old, width, height, 1, 2);
    let points: Vec<Point> = (0..5)
        .flat_map(|j| (0..5).map(move |i| Point { x: 24 + 20 * i, y: 24 + 20 * j }))
        .collect();

    let sequential_params = TrackerParams {
        max_points: 64,
        parallel: ParallelTrackOptions::disabled(),
        ..Default::default()
    };
    let parallel_params = TrackerParams {
        max_points: 64,
        parallel: ParallelTrackOptions::new(true, 1),
        ..Default::default()
    };

    let mut sequential = FlowTracker::new(sequential_params);
    let mut parallel = FlowTracker::new(parallel_params);
    let lhs = sequential
        .track(frame(&new, width, height), frame(&old, width, height), &points)
        .expect("valid frames");
    let rhs = parallel
        .track(frame(&new, width, height), frame(&old, width, height), &points)
        .expect("valid frames");

    assert_eq!(lhs.vectors.len(), rhs.vectors.len());
    for (a, b) in lhs.vectors.iter().zip(&rhs.vectors) {
        assert_eq!((a.pos, a.flow), (b.pos, b.flow));
    }
}
