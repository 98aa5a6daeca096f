//! CPU-side recording implementation of [`ImmediateContext`].
//!
//! Flattens the immediate-mode stream into GPU-uploadable vertex
//! batches: the matrix stack is baked into each vertex as it is
//! streamed, so a batch holds finished world-space geometry a host can
//! copy straight into a vertex buffer. Hosts without a native
//! immediate-mode surface drain the recorder once per frame; the test
//! suite uses it to observe exactly what the drawer emits.

use glam::{Mat4, Vec3};

use super::context::{ImmediateContext, WirePrimitive};
use super::material::LineMaterialDesc;

/// One recorded vertex, ready for vertex-buffer upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColoredVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// RGBA color.
    pub color: [f32; 4],
}

/// A finished begin/end run: one primitive's worth of vertices.
#[derive(Debug, Clone)]
pub struct DrawBatch {
    /// Topology the vertices were streamed under.
    pub primitive: WirePrimitive,
    /// Vertices with transforms and colors already applied.
    pub vertices: Vec<ColoredVertex>,
}

impl DrawBatch {
    /// The vertex data as raw bytes for buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

struct MaterialSlot {
    desc: LineMaterialDesc,
    alive: bool,
}

/// Handle into a [`DrawRecorder`]'s material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMaterial {
    id: usize,
}

/// Recording [`ImmediateContext`] backend.
pub struct DrawRecorder {
    stack: Vec<Mat4>,
    color: [f32; 4],
    pending: Option<DrawBatch>,
    batches: Vec<DrawBatch>,
    materials: Vec<MaterialSlot>,
    bound: Option<usize>,
}

impl DrawRecorder {
    /// Create an empty recorder with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
            color: [1.0, 1.0, 1.0, 1.0],
            pending: None,
            batches: Vec::new(),
            materials: Vec::new(),
            bound: None,
        }
    }

    /// Batches recorded so far, in draw order.
    #[must_use]
    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    /// Drain the recorded batches, leaving the recorder empty for the
    /// next frame.
    pub fn take_batches(&mut self) -> Vec<DrawBatch> {
        std::mem::take(&mut self.batches)
    }

    /// Total number of materials ever created on this recorder.
    #[must_use]
    pub fn materials_created(&self) -> usize {
        self.materials.len()
    }

    /// Creation-order index of the currently bound material, if any.
    #[must_use]
    pub fn bound_material(&self) -> Option<usize> {
        self.bound
    }

    /// Description a material was created with, if the handle is known.
    #[must_use]
    pub fn material_desc(&self, material: &RecordedMaterial) -> Option<&LineMaterialDesc> {
        self.materials.get(material.id).map(|slot| &slot.desc)
    }

    /// Mark a material destroyed, as an external resource loss would.
    /// Subsequent [`ImmediateContext::material_valid`] calls report it
    /// unusable.
    pub fn destroy_material(&mut self, material: &RecordedMaterial) {
        if let Some(slot) = self.materials.get_mut(material.id) {
            slot.alive = false;
        }
    }

    fn top(&self) -> Mat4 {
        self.stack.last().copied().unwrap_or(Mat4::IDENTITY)
    }
}

impl Default for DrawRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmediateContext for DrawRecorder {
    type Material = RecordedMaterial;

    fn create_line_material(&mut self, desc: &LineMaterialDesc) -> RecordedMaterial {
        let id = self.materials.len();
        self.materials.push(MaterialSlot { desc: *desc, alive: true });
        RecordedMaterial { id }
    }

    fn material_valid(&self, material: &RecordedMaterial) -> bool {
        self.materials
            .get(material.id)
            .is_some_and(|slot| slot.alive)
    }

    fn bind_material(&mut self, material: &RecordedMaterial) {
        self.bound = Some(material.id);
    }

    fn push_matrix(&mut self) {
        self.stack.push(self.top());
    }

    fn mult_matrix(&mut self, matrix: Mat4) {
        if let Some(top) = self.stack.last_mut() {
            *top = *top * matrix;
        }
    }

    fn pop_matrix(&mut self) {
        if self.stack.len() > 1 {
            let _ = self.stack.pop();
        } else {
            log::warn!("pop_matrix with no matching push_matrix");
        }
    }

    fn begin(&mut self, primitive: WirePrimitive) {
        if self.pending.is_some() {
            log::warn!("begin() while a primitive is open; discarding it");
        }
        self.pending = Some(DrawBatch { primitive, vertices: Vec::new() });
    }

    fn color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    fn vertex(&mut self, position: Vec3) {
        let world = self.top().transform_point3(position);
        if let Some(batch) = self.pending.as_mut() {
            batch.vertices.push(ColoredVertex {
                position: world.to_array(),
                color: self.color,
            });
        } else {
            log::warn!("vertex() outside begin()/end(); dropped");
        }
    }

    fn end(&mut self) {
        if let Some(batch) = self.pending.take() {
            self.batches.push(batch);
        } else {
            log::warn!("end() with no open primitive");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

    #[test]
    fn bakes_current_transform_into_vertices() {
        let mut rec = DrawRecorder::new();
        rec.push_matrix();
        rec.mult_matrix(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        rec.begin(WirePrimitive::LineStrip);
        rec.color(RED);
        rec.vertex(Vec3::ZERO);
        rec.end();
        rec.pop_matrix();

        // The pop restores identity for anything streamed afterwards.
        rec.begin(WirePrimitive::LineStrip);
        rec.vertex(Vec3::ZERO);
        rec.end();

        let batches = rec.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(batches[0].vertices[0].color, RED);
        assert_eq!(batches[1].vertices[0].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn color_switches_apply_per_vertex() {
        let mut rec = DrawRecorder::new();
        rec.begin(WirePrimitive::LineStrip);
        rec.color(RED);
        rec.vertex(Vec3::ZERO);
        rec.color(GREEN);
        rec.vertex(Vec3::X);
        rec.end();

        let batch = &rec.batches()[0];
        assert_eq!(batch.vertices[0].color, RED);
        assert_eq!(batch.vertices[1].color, GREEN);
    }

    #[test]
    fn batch_bytes_match_vertex_layout() {
        let mut rec = DrawRecorder::new();
        rec.begin(WirePrimitive::Quads);
        rec.vertex(Vec3::ZERO);
        rec.vertex(Vec3::X);
        rec.end();

        let batch = &rec.batches()[0];
        assert_eq!(
            batch.as_bytes().len(),
            2 * size_of::<ColoredVertex>()
        );
    }

    #[test]
    fn destroyed_materials_report_invalid() {
        let mut rec = DrawRecorder::new();
        let desc = LineMaterialDesc::default();
        let material = rec.create_line_material(&desc);
        assert!(rec.material_valid(&material));
        assert_eq!(rec.material_desc(&material), Some(&desc));

        rec.destroy_material(&material);
        assert!(!rec.material_valid(&material));
        assert_eq!(rec.materials_created(), 1);
    }

    #[test]
    fn take_batches_drains() {
        let mut rec = DrawRecorder::new();
        rec.begin(WirePrimitive::LineStrip);
        rec.vertex(Vec3::ZERO);
        rec.end();
        assert_eq!(rec.take_batches().len(), 1);
        assert!(rec.batches().is_empty());
    }
}
