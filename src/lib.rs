//! Loopscan finds the smoothest seamless loop (a "video texture") in a short
//! clip: the (start, end) frame pair that, played start → end → start, repeats
//! with the least visible seam.
//!
//! # Pipeline overview
//!
//! 1. **Stack**: `Vec<FrameRgb> -> VideoVolume` (contiguous frame volume)
//! 2. **Similarity**: `VideoVolume -> Matrix` (pairwise RSSD, mean-normalized)
//! 3. **Dynamics**: `Matrix -> Matrix` (diagonal binomial smoothing, trims 2
//!    frames per edge)
//! 4. **Select**: `Matrix + alpha -> LoopSelection` (length vs. smoothness)
//! 5. **Extract**: `VideoVolume + LoopSpec -> Vec<FrameRgb>`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every stage is a pure function over its
//!   input arrays; the opt-in parallel similarity path is bit-identical to
//!   the serial one.
//! - **No IO in analysis**: decoding lives at the boundary
//!   ([`decode_frame_rgb`]) and in the `loopscan` binary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analysis;
mod assets;
mod foundation;
mod pipeline;

pub use analysis::dynamics::{
    BINOMIAL_5, TRIM_PER_EDGE, to_trimmed_index, to_volume_index, transition_costs,
};
pub use analysis::select::{LoopSelection, select_loop};
pub use analysis::similarity::{similarity_matrix, similarity_matrix_parallel};
pub use assets::decode::decode_frame_rgb;
pub use foundation::core::{CHANNELS, FrameRgb, FrameShape, LoopSpec, VideoVolume};
pub use foundation::error::{LoopscanError, LoopscanResult};
pub use foundation::matrix::Matrix;
pub use pipeline::run::{AnalysisStats, AnalysisThreading, find_loop, find_loop_with_stats};
