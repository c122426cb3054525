use anyhow::Context;

use crate::foundation::{core::FrameRgb, error::LoopscanResult};

/// Decode encoded image bytes and convert to a packed RGB8 frame.
pub fn decode_frame_rgb(bytes: &[u8]) -> LoopscanResult<FrameRgb> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    FrameRgb::new(width, height, rgb.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
