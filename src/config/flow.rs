//! Configuration for the `flow_demo` tool.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tracker::TrackerParams;

#[derive(Debug, Deserialize)]
pub struct FlowDemoConfig {
    /// Frame the points were detected in.
    pub old_frame: PathBuf,
    /// Frame the points are tracked into.
    pub new_frame: PathBuf,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub seed: SeedGridConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub half_window_size: usize,
    pub subpixel_factor: u32,
    pub max_iterations: u32,
    pub step_threshold: u32,
    pub max_points: usize,
    pub pyramid_depth: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let params = TrackerParams::default();
        Self {
            half_window_size: params.half_window_size,
            subpixel_factor: params.subpixel_factor,
            max_iterations: params.max_iterations,
            step_threshold: params.step_threshold,
            max_points: params.max_points,
            pyramid_depth: params.pyramid_depth,
        }
    }
}

impl TrackerConfig {
    pub fn to_params(&self) -> TrackerParams {
        TrackerParams {
            half_window_size: self.half_window_size,
            subpixel_factor: self.subpixel_factor,
            max_iterations: self.max_iterations,
            step_threshold: self.step_threshold,
            max_points: self.max_points,
            pyramid_depth: self.pyramid_depth,
            ..Default::default()
        }
    }
}

/// Regular grid of seed points, `margin` pixels away from the borders.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedGridConfig {
    pub step: u32,
    pub margin: u32,
}

impl Default for SeedGridConfig {
    fn default() -> Self {
        Self {
            step: 16,
            margin: 8,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Optional path for the JSON diagnostics report.
    pub report: Option<PathBuf>,
    /// Optional directory for per-level PNG dumps of the old-frame pyramid.
    pub pyramid_dir: Option<PathBuf>,
}

/// Read a demo configuration from a JSON file.
pub fn load(path: &Path) -> Result<FlowDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
