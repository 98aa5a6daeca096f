//! Immediate-mode wireframe draw API.
//!
//! Stateless per call: every operation pushes a transform, streams
//! precomputed or ad-hoc vertices with per-vertex color, and pops the
//! transform. The only state carried across calls is the pair of
//! immutable unit-geometry tables and the flat-color line material,
//! both owned by [`WireframeDrawer`].

use glam::{IVec3, Mat4, Quat, Vec3};

use crate::geometry::{CubeTable, WireSphereTable};
use crate::gfx::{ImmediateContext, LineMaterialDesc, WirePrimitive};
use crate::options::WireframeOptions;

/// Immediate-mode debug drawer for wireframe overlay primitives.
///
/// Construct once during host setup; call the draw methods from the
/// render thread, inside an active frame callback. Draw calls are
/// independent and issue nothing but side effects on the frame's
/// output.
pub struct WireframeDrawer<G: ImmediateContext> {
    sphere: WireSphereTable,
    cube: CubeTable,
    material: Option<G::Material>,
}

impl<G: ImmediateContext> WireframeDrawer<G> {
    /// Build the geometry tables and create the line material up front.
    pub fn new(gfx: &mut G, options: &WireframeOptions) -> Self {
        let sphere = WireSphereTable::generate(options.circle_divisions);
        let cube = CubeTable::generate();
        let material = gfx.create_line_material(&LineMaterialDesc::default());
        log::debug!("created wireframe line material");
        Self { sphere, cube, material: Some(material) }
    }

    /// The line material currently held by the drawer.
    #[must_use]
    pub fn material(&self) -> Option<&G::Material> {
        self.material.as_ref()
    }

    /// The wire-sphere table the drawer was built with.
    #[must_use]
    pub fn sphere_table(&self) -> &WireSphereTable {
        &self.sphere
    }

    // Revalidate-and-bind guard run before every draw. The material is
    // recreated only if the host reports the held resource unusable;
    // drawing repeatedly never duplicates creation.
    fn bind_material(&mut self, gfx: &mut G) {
        let usable = self
            .material
            .as_ref()
            .is_some_and(|m| gfx.material_valid(m));
        if !usable {
            log::debug!("wireframe line material lost, recreating");
            self.material = Some(gfx.create_line_material(&LineMaterialDesc::default()));
        }
        if let Some(material) = &self.material {
            gfx.bind_material(material);
        }
    }

    /// Draw a three-circle wire sphere of `radius` at `center`, one
    /// uniform color.
    ///
    /// Streams the XZ and XY circle runs as a single continuous line
    /// strip (the strip jumps from the end of one run to the start of
    /// the next) and the ZY run as a second strip.
    pub fn wire_sphere(&mut self, gfx: &mut G, center: Vec3, radius: f32, color: [f32; 4]) {
        self.bind_material(gfx);

        gfx.push_matrix();
        gfx.mult_matrix(Mat4::from_scale_rotation_translation(
            Vec3::splat(radius),
            Quat::IDENTITY,
            center,
        ));
        gfx.begin(WirePrimitive::LineStrip);
        gfx.color(color);
        for &v in &self.sphere.vertices()[..self.sphere.c2()] {
            gfx.vertex(v);
        }
        gfx.end();
        gfx.begin(WirePrimitive::LineStrip);
        gfx.color(color);
        for &v in &self.sphere.vertices()[self.sphere.c2()..] {
            gfx.vertex(v);
        }
        gfx.end();
        gfx.pop_matrix();
    }

    /// Draw a wire sphere with each circle colored independently:
    /// `color_xz`, `color_xy`, `color_zy` in run order.
    pub fn wire_sphere_tricolor(
        &mut self,
        gfx: &mut G,
        center: Vec3,
        radius: f32,
        color_xz: [f32; 4],
        color_xy: [f32; 4],
        color_zy: [f32; 4],
    ) {
        self.bind_material(gfx);

        gfx.push_matrix();
        gfx.mult_matrix(Mat4::from_scale_rotation_translation(
            Vec3::splat(radius),
            Quat::IDENTITY,
            center,
        ));
        gfx.begin(WirePrimitive::LineStrip);
        gfx.color(color_xz);
        for &v in &self.sphere.vertices()[..self.sphere.c1()] {
            gfx.vertex(v);
        }
        gfx.color(color_xy);
        for &v in &self.sphere.vertices()[self.sphere.c1()..self.sphere.c2()] {
            gfx.vertex(v);
        }
        gfx.end();
        gfx.begin(WirePrimitive::LineStrip);
        gfx.color(color_zy);
        for &v in &self.sphere.vertices()[self.sphere.c2()..] {
            gfx.vertex(v);
        }
        gfx.end();
        gfx.pop_matrix();
    }

    /// Draw a unit cube's six faces as quads, scaled per-axis by `size`
    /// and translated to `center`.
    pub fn cube(&mut self, gfx: &mut G, center: Vec3, size: Vec3, color: [f32; 4]) {
        self.bind_material(gfx);

        gfx.push_matrix();
        gfx.mult_matrix(Mat4::from_scale_rotation_translation(
            size,
            Quat::IDENTITY,
            center,
        ));
        gfx.begin(WirePrimitive::Quads);
        gfx.color(color);
        for &v in self.cube.vertices() {
            gfx.vertex(v);
        }
        gfx.end();
        gfx.pop_matrix();
    }

    /// Draw a single line between two world-space points. No transform
    /// is applied; the endpoints are streamed as given.
    pub fn line(&mut self, gfx: &mut G, start: Vec3, end: Vec3, color: [f32; 4]) {
        self.bind_material(gfx);

        gfx.push_matrix();
        gfx.begin(WirePrimitive::LineStrip);
        gfx.color(color);
        gfx.vertex(start);
        gfx.vertex(end);
        gfx.end();
        gfx.pop_matrix();
    }

    /// Draw an axis-aligned wireframe grid of
    /// `dimensions.x × dimensions.y × dimensions.z` cells anchored at
    /// `pivot`, cell size given by `cell_extents`.
    ///
    /// Emits three families of parallel segments, one per axis, each
    /// segment an independent [`Self::line`] call. Non-positive
    /// dimensions produce empty families.
    pub fn aa_3d_grid(
        &mut self,
        gfx: &mut G,
        pivot: Vec3,
        dimensions: IVec3,
        cell_extents: Vec3,
        color: [f32; 4],
    ) {
        let x_dim = dimensions.x + 1;
        let y_dim = dimensions.y + 1;
        let z_dim = dimensions.z + 1;

        // Lines along X
        let h_len = dimensions.x as f32 * cell_extents.x;
        for y in 0..y_dim {
            for z in 0..z_dim {
                let start = pivot
                    + Vec3::new(0.0, y as f32 * cell_extents.y, z as f32 * cell_extents.z);
                self.line(gfx, start, start + Vec3::new(h_len, 0.0, 0.0), color);
            }
        }

        // Lines along Y
        let v_len = dimensions.y as f32 * cell_extents.y;
        for x in 0..x_dim {
            for z in 0..z_dim {
                let start = pivot
                    + Vec3::new(x as f32 * cell_extents.x, 0.0, z as f32 * cell_extents.z);
                self.line(gfx, start, start + Vec3::new(0.0, v_len, 0.0), color);
            }
        }

        // Lines along Z
        let t_len = dimensions.z as f32 * cell_extents.z;
        for x in 0..x_dim {
            for y in 0..y_dim {
                let start = pivot
                    + Vec3::new(x as f32 * cell_extents.x, y as f32 * cell_extents.y, 0.0);
                self.line(gfx, start, start + Vec3::new(0.0, 0.0, t_len), color);
            }
        }
    }
}
