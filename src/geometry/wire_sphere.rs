//! Unit wire-sphere vertex table.
//!
//! Three unit circles (XZ, XY, ZY planes) concatenated into one flat
//! vertex sequence, with boundary indices marking where each circle's
//! run ends. Built once at drawer construction and never mutated; draw
//! calls scale and translate it per invocation.

use glam::Vec3;

/// Default number of angular divisions per circle.
pub const DEFAULT_CIRCLE_DIVISIONS: u32 = 30;

/// Flat vertex table for a three-circle unit wire sphere.
///
/// Layout: `[XZ run | XY run | ZY run]`, each run `divisions + 1`
/// vertices long. [`Self::c1`] and [`Self::c2`] mark the end of the
/// first and second runs. Each run is explicitly closed: its last
/// vertex equals its first, so a line strip over the run renders a
/// closed circle.
#[derive(Debug, Clone)]
pub struct WireSphereTable {
    vertices: Vec<Vec3>,
    c1: usize,
    c2: usize,
}

impl WireSphereTable {
    /// Build the table for the given division count.
    ///
    /// The walk steps the angle by `2 × (360 / divisions)` degrees and
    /// writes two vertices per plane per iteration. Counts that do not
    /// evenly divide 360 leave gaps or drop edge vertices in the runs;
    /// they are accepted as-is but logged.
    ///
    /// A count of 0 falls back to [`DEFAULT_CIRCLE_DIVISIONS`] and
    /// counts above 360 are clamped to 360 (either would stall the
    /// angular walk).
    #[must_use]
    pub fn generate(divisions: u32) -> Self {
        let divisions = if divisions == 0 {
            log::warn!(
                "circle division count 0 is unusable, falling back to {DEFAULT_CIRCLE_DIVISIONS}"
            );
            DEFAULT_CIRCLE_DIVISIONS
        } else if divisions > 360 {
            log::warn!("circle division count {divisions} clamped to 360");
            360
        } else {
            divisions
        };
        if 360 % divisions != 0 {
            log::warn!(
                "circle division count {divisions} does not evenly divide 360; circles will not close cleanly"
            );
        }

        let ring = (divisions + 1) as usize;
        let mut vertices = vec![Vec3::ZERO; ring * 3];

        let deg = 360 / divisions;
        let mut i = 0;
        while i < 360 {
            let (o1, a1) = (i as f32).to_radians().sin_cos();
            let (o2, a2) = ((i + deg) as f32).to_radians().sin_cos();

            let slot = (i / deg) as usize;
            // XZ plane
            write_slot(&mut vertices, slot, Vec3::new(a1, 0.0, o1));
            write_slot(&mut vertices, slot + 1, Vec3::new(a2, 0.0, o2));
            // XY plane
            write_slot(&mut vertices, slot + ring, Vec3::new(a1, o1, 0.0));
            write_slot(&mut vertices, slot + 1 + ring, Vec3::new(a2, o2, 0.0));
            // ZY plane
            write_slot(&mut vertices, slot + ring * 2, Vec3::new(0.0, o1, a1));
            write_slot(&mut vertices, slot + 1 + ring * 2, Vec3::new(0.0, o2, a2));

            i += 2 * deg;
        }

        // Force closure: the last vertex of each run repeats its first.
        let len = vertices.len();
        vertices[len / 3 - 1] = vertices[0];
        vertices[len * 2 / 3 - 1] = vertices[ring];
        vertices[len - 1] = vertices[ring * 2];

        let table = Self { vertices, c1: len / 3, c2: len * 2 / 3 };
        log::debug!(
            "built wire-sphere table: {} vertices, {divisions} divisions",
            table.vertices.len()
        );
        table
    }

    /// The full vertex sequence, all three runs concatenated.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// End of the XZ run (start of the XY run).
    #[must_use]
    pub fn c1(&self) -> usize {
        self.c1
    }

    /// End of the XY run (start of the ZY run).
    #[must_use]
    pub fn c2(&self) -> usize {
        self.c2
    }
}

impl Default for WireSphereTable {
    fn default() -> Self {
        Self::generate(DEFAULT_CIRCLE_DIVISIONS)
    }
}

// Division counts that do not evenly divide 360 can step the walk past
// the end of a run; such writes land in the next run's slots, and any
// that fall past the whole table are dropped.
fn write_slot(vertices: &mut [Vec3], slot: usize, v: Vec3) {
    if let Some(dst) = vertices.get_mut(slot) {
        *dst = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVEN_DIVISORS: [u32; 10] = [4, 6, 10, 12, 24, 30, 36, 60, 120, 360];

    #[test]
    fn table_length_and_boundaries() {
        for d in EVEN_DIVISORS {
            let table = WireSphereTable::generate(d);
            let len = table.vertices().len();
            assert_eq!(len, 3 * (d as usize + 1), "divisions={d}");
            assert_eq!(table.c1(), len / 3);
            assert_eq!(table.c2(), len * 2 / 3);
            assert!(0 < table.c1() && table.c1() < table.c2() && table.c2() < len);
        }
    }

    #[test]
    fn every_run_closes() {
        for d in EVEN_DIVISORS {
            let table = WireSphereTable::generate(d);
            let v = table.vertices();
            let (c1, c2) = (table.c1(), table.c2());
            assert_eq!(v[c1 - 1], v[0], "XZ run not closed for divisions={d}");
            assert_eq!(v[c2 - 1], v[c1], "XY run not closed for divisions={d}");
            assert_eq!(v[v.len() - 1], v[c2], "ZY run not closed for divisions={d}");
        }
    }

    #[test]
    fn vertices_lie_on_unit_circles() {
        let table = WireSphereTable::generate(DEFAULT_CIRCLE_DIVISIONS);
        for (idx, v) in table.vertices().iter().enumerate() {
            assert!(
                (v.length() - 1.0).abs() < 1e-6,
                "vertex {idx} off the unit sphere: {v:?}"
            );
        }
        // Each run stays in its plane.
        let v = table.vertices();
        assert!(v[..table.c1()].iter().all(|p| p.y == 0.0));
        assert!(v[table.c1()..table.c2()].iter().all(|p| p.z == 0.0));
        assert!(v[table.c2()..].iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn samples_consecutive_angle_steps() {
        // The walk advances two steps per iteration but fills both
        // slots, so slot k holds the angle k * (360 / divisions).
        let table = WireSphereTable::generate(30);
        let deg = 360.0_f32 / 30.0;
        for (k, v) in table.vertices()[..table.c1() - 1].iter().enumerate() {
            let angle = (k as f32 * deg).to_radians();
            assert!((v.x - angle.cos()).abs() < 1e-5, "slot {k}");
            assert!((v.z - angle.sin()).abs() < 1e-5, "slot {k}");
        }
    }

    #[test]
    fn degenerate_counts_are_guarded() {
        // 0 falls back to the default count.
        let table = WireSphereTable::generate(0);
        assert_eq!(
            table.vertices().len(),
            3 * (DEFAULT_CIRCLE_DIVISIONS as usize + 1)
        );
        // Counts above 360 are clamped.
        let table = WireSphereTable::generate(1000);
        assert_eq!(table.vertices().len(), 3 * 361);
    }

    #[test]
    fn uneven_counts_do_not_panic() {
        // 100 does not divide 360; the walk oversteps the runs and the
        // extra slots are dropped, but the table keeps its shape.
        for d in [7, 100, 270] {
            let table = WireSphereTable::generate(d);
            assert_eq!(table.vertices().len(), 3 * (d as usize + 1));
        }
    }
}
