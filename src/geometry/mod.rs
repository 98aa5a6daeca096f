//! Precomputed unit-geometry vertex tables.
//!
//! The tables are deterministic, built once when a drawer is
//! constructed, and shared read-only by every subsequent draw call;
//! draw-time parameters only scale and translate them.

/// Unit cube face-quad table.
pub mod cube;
/// Three-circle unit wire-sphere table.
pub mod wire_sphere;

pub use cube::{CubeTable, CUBE_VERTEX_COUNT};
pub use wire_sphere::{WireSphereTable, DEFAULT_CIRCLE_DIVISIONS};
