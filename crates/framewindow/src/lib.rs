//! `framewindow` - A fixed-capacity sliding window over a sensor frame stream
//!
//! This library keeps the most recent N frames of a time-ordered stream in a
//! bounded, insertion-ordered buffer, evicting the oldest frame on overflow.
//! Frames are staged in place: pushed with only their image, then completed
//! with keypoints, descriptors and matches by later processing passes.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod frame;
#[cfg(test)]
mod logging;
pub mod ring_buffer;
pub mod window;

pub use config::{Config, WindowConfig};
pub use error::{Error, Result};
pub use frame::{DescriptorMatrix, FrameRecord, ImagePayload, KeyPoint, KeypointMatch};
pub use ring_buffer::RingBuffer;
pub use window::FrameWindow;
