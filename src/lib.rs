//! Segment Designer
//!
//! Core logic behind an editor for custom multi-segment display layouts:
//! distinct preview colors for every segment, detection of segments a truth
//! table can never tell apart, and the JSON presets and settings the editor
//! stores its state in.

pub mod color_utils;
pub mod error;
pub mod grouping;
pub mod preset;
pub mod settings;
pub mod truth_table;

pub use color_utils::{Rgba, assign_color, segment_palette};
pub use error::PresetError;
pub use grouping::{SegmentGroup, find_exact_groups, redundant_segments};
pub use settings::{AppSettings, LogLevel};
pub use truth_table::TruthTable;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
