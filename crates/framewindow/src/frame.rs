//! Per-instant frame records.
//!
//! A [`FrameRecord`] gathers what the sensing pipeline knows about one instant:
//! the camera image, the keypoints detected in it, their descriptors, and the
//! matches against the previous frame. Only the image is known when a record is
//! created. The rest is attached later while the record sits in a
//! [`FrameWindow`](crate::FrameWindow).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Raw image bytes with their dimensions.
///
/// The pixel layout is whatever the producer wrote. It is never decoded here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Interleaved channels per pixel.
    pub channels: u8,
    /// Encoded or raw pixel data.
    pub data: Vec<u8>,
}

impl ImagePayload {
    /// Wrap image bytes with their dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Check if the payload carries no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A 2D point of interest and the detector metadata attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
    /// Diameter of the meaningful neighbourhood.
    pub size: f32,
    /// Orientation in degrees, `-1` when not computed.
    pub angle: f32,
    /// Detector response strength.
    pub response: f32,
    /// Pyramid octave the point was detected in.
    pub octave: i32,
    /// Object class, `-1` when unused.
    pub class_id: i32,
}

impl KeyPoint {
    /// Create a keypoint with no orientation, response, octave or class.
    #[must_use]
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            size,
            angle: -1.0,
            response: 0.0,
            octave: 0,
            class_id: -1,
        }
    }
}

/// Binary feature descriptors stored row-major, one row per keypoint.
///
/// `data` always holds exactly `rows * cols` bytes, including after
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptorMatrix")]
pub struct DescriptorMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

/// Unchecked wire form of [`DescriptorMatrix`].
#[derive(Deserialize)]
struct RawDescriptorMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl TryFrom<RawDescriptorMatrix> for DescriptorMatrix {
    type Error = Error;

    fn try_from(raw: RawDescriptorMatrix) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.data)
    }
}

impl DescriptorMatrix {
    /// Build a matrix from `rows * cols` row-major bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DescriptorShape`] if `data` does not hold exactly
    /// `rows * cols` bytes.
    pub fn new(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::DescriptorShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// A matrix with no descriptors.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of descriptors.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Bytes per descriptor.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if the matrix holds no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// The descriptor in row `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        if index >= self.rows {
            return None;
        }
        let start = index.checked_mul(self.cols)?;
        self.data.get(start..start.checked_add(self.cols)?)
    }

    /// All descriptor bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// A correspondence between a keypoint of the previous frame and one of the
/// current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeypointMatch {
    /// Index into the previous record's keypoints.
    pub previous_idx: usize,
    /// Index into this record's keypoints.
    pub current_idx: usize,
    /// Descriptor distance, lower is better.
    pub distance: f32,
}

impl KeypointMatch {
    /// Create a match between two keypoint indices.
    #[must_use]
    pub fn new(previous_idx: usize, current_idx: usize, distance: f32) -> Self {
        Self {
            previous_idx,
            current_idx,
            distance,
        }
    }
}

/// Everything known about one instant of the sensor stream.
///
/// No consistency between fields is enforced. `matches` may be empty while
/// `keypoints` is populated, and match indices are not checked against either
/// frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// When this record was created.
    pub timestamp: DateTime<Utc>,

    /// The camera image.
    pub image: ImagePayload,

    /// 2D keypoints within the image.
    #[serde(default)]
    pub keypoints: Vec<KeyPoint>,

    /// Descriptors for `keypoints`.
    #[serde(default)]
    pub descriptors: DescriptorMatrix,

    /// Matches between the previous frame's keypoints and these.
    #[serde(default)]
    pub matches: Vec<KeypointMatch>,
}

impl FrameRecord {
    /// Create a record holding only `image`, timestamped now.
    #[must_use]
    pub fn new(image: ImagePayload) -> Self {
        Self::with_timestamp(image, Utc::now())
    }

    /// Create a record holding only `image`, with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(image: ImagePayload, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            image,
            keypoints: Vec::new(),
            descriptors: DescriptorMatrix::empty(),
            matches: Vec::new(),
        }
    }
}
