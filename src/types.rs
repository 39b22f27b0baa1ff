use serde::Serialize;

/// Integer pixel coordinate of a candidate point in the finest frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Integer coordinate scaled by the configured subpixel factor.
///
/// All internal position and flow arithmetic happens in this fixed-point
/// representation, so fractional pixel positions stay representable without
/// floating point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubpixelCoord {
    pub x: i32,
    pub y: i32,
}

/// Per-point tracking state: position at the current pyramid level and the
/// accumulated displacement, both in subpixel units.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FlowVector {
    pub pos: SubpixelCoord,
    pub flow: SubpixelCoord,
}

/// Compact result of one tracking call.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TrackResult {
    /// Flow vectors of the surviving points, in input order. The length is
    /// the survivor count.
    pub vectors: Vec<FlowVector>,
    /// Number of candidate points actually examined, after the
    /// max-points cap.
    pub attempted: usize,
    pub latency_ms: f64,
}
