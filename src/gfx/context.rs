//! Host-facing immediate-mode graphics surface.
//!
//! The drawer never talks to a GPU directly; it streams transform and
//! vertex commands through this trait, which the hosting engine
//! implements over its own rendering context. All methods must be
//! called from the thread that owns that context, inside an active
//! frame-rendering callback.

use glam::{Mat4, Vec3};

use super::material::LineMaterialDesc;

/// Primitive topology for an immediate draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WirePrimitive {
    /// Connected line segments sharing endpoints.
    LineStrip,
    /// Independent quads, four vertices each.
    Quads,
}

/// Immediate-mode graphics context provided by the hosting engine.
///
/// Mirrors a fixed-function surface: a transform stack, a
/// begin/color/vertex/end vertex stream, and a material resource
/// system. Implementations are not expected to be thread-safe; the
/// drawer takes the context by `&mut` and assumes render-thread-only
/// use.
pub trait ImmediateContext {
    /// Host-owned material resource handle.
    type Material;

    /// Create a flat-color line material from the fixed description.
    fn create_line_material(&mut self, desc: &LineMaterialDesc) -> Self::Material;

    /// Whether a previously created material is still usable.
    ///
    /// Returns `false` once the underlying resource has been destroyed
    /// externally (device loss, hot reload); the drawer recreates the
    /// material before its next draw.
    fn material_valid(&self, material: &Self::Material) -> bool;

    /// Activate the material for subsequent immediate draws.
    fn bind_material(&mut self, material: &Self::Material);

    /// Save the current transform.
    fn push_matrix(&mut self);

    /// Multiply the current transform by `matrix`.
    fn mult_matrix(&mut self, matrix: Mat4);

    /// Restore the transform saved by the matching [`Self::push_matrix`].
    fn pop_matrix(&mut self);

    /// Start streaming vertices for one primitive.
    fn begin(&mut self, primitive: WirePrimitive);

    /// Set the RGBA color applied to vertices streamed after this call.
    fn color(&mut self, color: [f32; 4]);

    /// Stream one vertex under the current transform and color.
    fn vertex(&mut self, position: Vec3);

    /// Finish the primitive started by [`Self::begin`].
    fn end(&mut self);
}
