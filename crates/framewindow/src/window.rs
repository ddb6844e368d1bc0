//! The sliding window of frame records.
//!
//! A [`FrameWindow`] is a [`RingBuffer`] of [`FrameRecord`]s. Records are
//! pushed with only their image, then completed in place:
//!
//! ```
//! use framewindow::{Config, DescriptorMatrix, FrameRecord, FrameWindow, ImagePayload, KeyPoint};
//!
//! let mut window = FrameWindow::from_config(&Config::default().window)?;
//!
//! window.push_back(FrameRecord::new(ImagePayload::new(2, 2, 1, vec![0; 4])));
//! let current = window.back_mut()?;
//! current.keypoints.push(KeyPoint::new(1.0, 1.0, 7.0));
//! current.descriptors = DescriptorMatrix::new(1, 32, vec![0; 32])?;
//! # Ok::<(), framewindow::Error>(())
//! ```

use tracing::debug;

use crate::config::WindowConfig;
use crate::error::{Error, Result};
use crate::frame::FrameRecord;
use crate::ring_buffer::RingBuffer;

/// Most recent frame records, oldest first.
pub type FrameWindow = RingBuffer<FrameRecord>;

impl RingBuffer<FrameRecord> {
    /// Create an empty frame window sized from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if the configured capacity is 0.
    pub fn from_config(config: &WindowConfig) -> Result<Self> {
        let capacity = config.capacity().ok_or(Error::ZeroCapacity)?;
        debug!("Frame window sized to {} frames", capacity);
        Ok(Self::new(capacity))
    }
}
