//! Boundary toward the hosting engine's graphics surface.
//!
//! The drawer issues all of its side effects through
//! [`ImmediateContext`]; the host either implements the trait over its
//! own immediate-mode API or drains a [`DrawRecorder`] into vertex
//! buffers once per frame.

/// Immediate-mode context trait and primitive topologies.
pub mod context;
/// Flat-color line material description.
pub mod material;
/// Recording context backend for buffer-upload hosts and tests.
pub mod recorder;

pub use context::{ImmediateContext, WirePrimitive};
pub use material::{BlendFactor, LineMaterialDesc};
pub use recorder::{ColoredVertex, DrawBatch, DrawRecorder, RecordedMaterial};
