use flow_tracker::image::ImageU8;
use flow_tracker::{FlowTracker, Point, TrackerParams};

fn main() {
    // Demo stub: creates a synthetic textured frame pair and runs the tracker
    let w = 320usize;
    let h = 240usize;
    let stride = w; // tightly packed
    let mut old = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            old[y * w + x] = (((x * 13) ^ (y * 7)) % 251) as u8;
        }
    }
    let new = old.clone();

    let mut tracker = FlowTracker::new(TrackerParams {
        max_points: 9,
        ..Default::default()
    });
    let points = vec![
        Point { x: 80, y: 60 },
        Point { x: 160, y: 120 },
        Point { x: 240, y: 180 },
    ];
    let res = tracker
        .track(
            ImageU8 { w, h, stride, data: &new },
            ImageU8 { w, h, stride, data: &old },
            &points,
        )
        .expect("frames are valid");
    println!(
        "tracked={}/{} latency_ms={:.3}",
        res.vectors.len(),
        res.attempted,
        res.latency_ms
    );
}
