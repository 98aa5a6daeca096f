//! Flat-color line material description.
//!
//! The overlay always draws with the same fixed-function state: alpha
//! blending, no face culling, depth writes enabled. Hosts translate
//! this description into whatever shader/material resource their
//! pipeline uses.

/// Blend factor for source or destination color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    /// Multiply by zero.
    Zero,
    /// Multiply by one.
    One,
    /// Multiply by the fragment's alpha.
    SrcAlpha,
    /// Multiply by one minus the fragment's alpha.
    OneMinusSrcAlpha,
}

/// Fixed-function state for the flat-color line material.
///
/// [`Default`] is the one configuration the drawer ever uses; it never
/// varies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMaterialDesc {
    /// Source color blend factor.
    pub src_blend: BlendFactor,
    /// Destination color blend factor.
    pub dst_blend: BlendFactor,
    /// Whether back faces are culled.
    pub cull_backfaces: bool,
    /// Whether the material writes depth.
    pub depth_write: bool,
}

impl Default for LineMaterialDesc {
    fn default() -> Self {
        Self {
            src_blend: BlendFactor::SrcAlpha,
            dst_blend: BlendFactor::OneMinusSrcAlpha,
            cull_backfaces: false,
            depth_write: true,
        }
    }
}
