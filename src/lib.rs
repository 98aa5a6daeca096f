// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics-math allowances — casts are intentional and safe, and
// overlay math frequently compares against exact constants
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Immediate-mode wireframe debug drawing for real-time renderers.
//!
//! Wiredraw gives a hosting engine visual overlays for debugging
//! spatial logic (collision volumes, grid bounds, paths) without
//! building persistent scene geometry: unit-geometry vertex tables are
//! precomputed once, and a stateless draw API transforms, colors, and
//! streams them through the host's immediate-mode graphics surface on
//! every call.
//!
//! # Key entry points
//!
//! - [`drawer::WireframeDrawer`] - the draw API (wire spheres, cubes,
//!   lines, axis-aligned 3D grids)
//! - [`gfx::ImmediateContext`] - the trait the host implements over its
//!   rendering context
//! - [`gfx::DrawRecorder`] - a recording context for hosts that upload
//!   vertex buffers instead
//! - [`options::WireframeOptions`] - runtime configuration with TOML
//!   preset support
//!
//! # Execution model
//!
//! Single-threaded and synchronous: every draw call must run on the
//! thread that owns the host rendering context, inside an active
//! frame-rendering callback. Nothing is retained across frames beyond
//! the geometry tables and the flat-color line material.

pub mod drawer;
pub mod error;
pub mod geometry;
pub mod gfx;
pub mod options;
