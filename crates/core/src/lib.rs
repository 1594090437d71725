//! Client for a remote face detection service.
//!
//! Sends an encoded image over gRPC, then draws the returned boxes, scores
//! and landmark points onto the decoded image.

pub mod detection;
pub mod imaging;
pub mod pipeline;
pub mod rendering;
pub mod shared;
