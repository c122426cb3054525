use crate::foundation::error::{LoopscanError, LoopscanResult};

/// Number of color channels per pixel. The whole pipeline is packed RGB8.
pub const CHANNELS: usize = 3;

/// Pixel dimensions shared by every frame of a volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameShape {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl FrameShape {
    /// Byte length of one packed RGB8 frame of this shape.
    pub fn byte_len(self) -> usize {
        self.width as usize * self.height as usize * CHANNELS
    }
}

impl std::fmt::Display for FrameShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{CHANNELS}", self.width, self.height)
    }
}

/// A single packed RGB8 frame (row-major, 3 bytes per pixel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Packed RGB8 samples, `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl FrameRgb {
    /// Wrap a packed RGB8 buffer, validating its length against the shape.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> LoopscanResult<Self> {
        let expected = FrameShape { width, height }.byte_len();
        if data.len() != expected {
            return Err(LoopscanError::shape_mismatch(format!(
                "frame buffer is {} bytes, shape {}x{}x{CHANNELS} needs {expected}",
                data.len(),
                width,
                height,
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The frame's (width, height) shape.
    pub fn shape(&self) -> FrameShape {
        FrameShape {
            width: self.width,
            height: self.height,
        }
    }
}

/// An ordered sequence of same-shaped frames stored as one contiguous buffer.
///
/// Conceptually a 4-D array (frame, row, col, channel); frame `i` occupies
/// bytes `i * shape.byte_len() .. (i + 1) * shape.byte_len()`. Stacking is
/// lossless: unstack-then-restack reproduces the input bit-for-bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoVolume {
    shape: FrameShape,
    num_frames: usize,
    data: Vec<u8>,
}

impl VideoVolume {
    /// Stack an ordered frame list into a contiguous volume.
    ///
    /// Fails with [`LoopscanError::ShapeMismatch`] if the list is empty or
    /// any frame differs in shape from the first.
    pub fn from_frames(frames: &[FrameRgb]) -> LoopscanResult<Self> {
        let first = frames.first().ok_or_else(|| {
            LoopscanError::shape_mismatch("cannot stack an empty frame list")
        })?;
        let shape = first.shape();

        let mut data = Vec::with_capacity(shape.byte_len() * frames.len());
        for (idx, frame) in frames.iter().enumerate() {
            if frame.shape() != shape {
                return Err(LoopscanError::shape_mismatch(format!(
                    "frame {idx} is {}, expected {shape}",
                    frame.shape(),
                )));
            }
            data.extend_from_slice(&frame.data);
        }

        Ok(Self {
            shape,
            num_frames: frames.len(),
            data,
        })
    }

    /// The shared shape of every frame in the volume.
    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    /// Number of frames stacked in the volume.
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Borrow the packed RGB8 bytes of frame `index`.
    ///
    /// Fails with [`LoopscanError::IndexRange`] when `index >= num_frames`.
    pub fn frame_bytes(&self, index: usize) -> LoopscanResult<&[u8]> {
        if index >= self.num_frames {
            return Err(LoopscanError::index_range(format!(
                "frame {index} out of bounds for volume of {} frames",
                self.num_frames,
            )));
        }
        let len = self.shape.byte_len();
        Ok(&self.data[index * len..(index + 1) * len])
    }

    /// All frames of the volume as packed byte slices, in order.
    pub fn frame_slices(&self) -> Vec<&[u8]> {
        let len = self.shape.byte_len();
        (0..self.num_frames)
            .map(|i| &self.data[i * len..(i + 1) * len])
            .collect()
    }

    /// Copy frame `index` back out as an owned [`FrameRgb`].
    pub fn frame(&self, index: usize) -> LoopscanResult<FrameRgb> {
        let bytes = self.frame_bytes(index)?;
        Ok(FrameRgb {
            width: self.shape.width,
            height: self.shape.height,
            data: bytes.to_vec(),
        })
    }

    /// Slice the inclusive `[spec.start, spec.end]` range out of the volume
    /// as independent frames, in playback order.
    ///
    /// Fails with [`LoopscanError::IndexRange`] when the range does not fit
    /// the volume. `start <= end` already holds by [`LoopSpec`] construction.
    pub fn extract_loop(&self, spec: &LoopSpec) -> LoopscanResult<Vec<FrameRgb>> {
        if spec.end >= self.num_frames {
            return Err(LoopscanError::index_range(format!(
                "loop [{}, {}] out of bounds for volume of {} frames",
                spec.start, spec.end, self.num_frames,
            )));
        }
        (spec.start..=spec.end).map(|i| self.frame(i)).collect()
    }
}

/// An inclusive (start, end) frame range into the original volume, selected
/// for looped playback start → ... → end → start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoopSpec {
    /// First frame of the loop, 0-based into the original volume.
    pub start: usize,
    /// Last frame of the loop, inclusive, 0-based into the original volume.
    pub end: usize,
}

impl LoopSpec {
    /// Build a loop range, enforcing `start <= end`.
    pub fn new(start: usize, end: usize) -> LoopscanResult<Self> {
        if start > end {
            return Err(LoopscanError::index_range(format!(
                "loop start {start} must be <= end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Number of frames the loop spans, inclusive of both endpoints.
    pub fn len_frames(self) -> usize {
        self.end - self.start + 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
