//! MockKernel — deterministic test double implementing [`Kernel`].
//!
//! Tracks solid extents instead of real geometry, records every call in an
//! operation journal, and lets tests inject boolean or tessellation
//! failures. Used by machining-ops and machining-engine for unit testing.

use std::collections::HashMap;

use truck_modeling::Point3;

use crate::frame::Frame;
use crate::traits::Kernel;
use crate::types::*;

/// Canned STEP text returned by the mock transfer stage.
pub const MOCK_STEP_TEXT: &str = "ISO-10303-21;\nHEADER;\nENDSEC;\nDATA;\nENDSEC;\nEND-ISO-10303-21;\n";

/// One recorded kernel call.
#[derive(Debug, Clone, PartialEq)]
pub enum MockOp {
    MakeBox {
        origin: [f64; 3],
        w: f64,
        h: f64,
        d: f64,
    },
    MakeCylinder {
        origin: [f64; 3],
        radius: f64,
        height: f64,
    },
    Cut,
    Common,
    Fuse,
    Tessellate,
    Release {
        id: u64,
    },
}

#[derive(Debug, Clone)]
struct MockSolid {
    aabb: Aabb,
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    /// Recorded calls, in order.
    pub journal: Vec<MockOp>,
    /// When set, the next cut reports not-done and the flag clears.
    pub fail_next_cut: bool,
    /// When set, the next common reports not-done and the flag clears.
    pub fail_next_common: bool,
    /// When set, the next fuse reports not-done and the flag clears.
    pub fail_next_fuse: bool,
    /// When set, every tessellation reports not-done.
    pub fail_tessellation: bool,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            journal: Vec::new(),
            fail_next_cut: false,
            fail_next_common: false,
            fail_next_fuse: false,
            fail_tessellation: false,
        }
    }

    fn store(&mut self, aabb: Aabb) -> KernelSolidHandle {
        let handle = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), MockSolid { aabb });
        handle
    }

    fn get(&self, handle: &KernelSolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound { id: handle.id() })
    }

    /// Number of solids currently stored; used for leak assertions.
    pub fn live_solids(&self) -> usize {
        self.solids.len()
    }

    /// Count of journal entries matching a predicate.
    pub fn count_ops(&self, pred: impl Fn(&MockOp) -> bool) -> usize {
        self.journal.iter().filter(|op| pred(op)).count()
    }

    fn point_aabb(p: Point3) -> Aabb {
        Aabb {
            min: [p.x, p.y, p.z],
            max: [p.x, p.y, p.z],
        }
    }

    fn merge(a: &Aabb, b: &Aabb) -> Aabb {
        let mut merged = *a;
        for i in 0..3 {
            merged.min[i] = merged.min[i].min(b.min[i]);
            merged.max[i] = merged.max[i].max(b.max[i]);
        }
        merged
    }

    fn intersect(a: &Aabb, b: &Aabb) -> Aabb {
        let mut out = *a;
        for i in 0..3 {
            out.min[i] = a.min[i].max(b.min[i]);
            out.max[i] = a.max[i].min(b.max[i]);
        }
        out
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn make_box(
        &mut self,
        frame: &Frame,
        w: f64,
        h: f64,
        d: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.journal.push(MockOp::MakeBox {
            origin: [frame.origin.x, frame.origin.y, frame.origin.z],
            w,
            h,
            d,
        });

        let mut aabb = Self::point_aabb(frame.origin);
        for &sx in &[0.0, w] {
            for &sy in &[0.0, h] {
                for &sz in &[0.0, d] {
                    let corner = frame.origin + frame.x * sx + frame.y * sy + frame.z * sz;
                    aabb = Self::merge(&aabb, &Self::point_aabb(corner));
                }
            }
        }
        Ok(self.store(aabb))
    }

    fn make_cylinder(
        &mut self,
        frame: &Frame,
        radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.journal.push(MockOp::MakeCylinder {
            origin: [frame.origin.x, frame.origin.y, frame.origin.z],
            radius,
            height,
        });

        // Exact box of a capped cylinder: each cap disc extends
        // r·sqrt(1 − n_i²) along world axis i.
        let c0 = frame.origin;
        let c1 = frame.origin + frame.z * height;
        let n = [frame.z.x, frame.z.y, frame.z.z];
        let mut aabb = Self::merge(&Self::point_aabb(c0), &Self::point_aabb(c1));
        for i in 0..3 {
            let ext = radius * (1.0 - n[i] * n[i]).max(0.0).sqrt();
            aabb.min[i] -= ext;
            aabb.max[i] += ext;
        }
        Ok(self.store(aabb))
    }

    fn boolean_cut(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.journal.push(MockOp::Cut);
        let aabb_a = self.get(a)?.aabb;
        self.get(b)?;

        if self.fail_next_cut {
            self.fail_next_cut = false;
            return Err(KernelError::BooleanFailed {
                reason: "injected cut failure".to_string(),
            });
        }
        // Conservative: a cut never grows past the left operand.
        Ok(self.store(aabb_a))
    }

    fn boolean_common(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.journal.push(MockOp::Common);
        let aabb_a = self.get(a)?.aabb;
        let aabb_b = self.get(b)?.aabb;

        if self.fail_next_common {
            self.fail_next_common = false;
            return Err(KernelError::BooleanFailed {
                reason: "injected common failure".to_string(),
            });
        }
        Ok(self.store(Self::intersect(&aabb_a, &aabb_b)))
    }

    fn boolean_fuse(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.journal.push(MockOp::Fuse);
        let aabb_a = self.get(a)?.aabb;
        let aabb_b = self.get(b)?.aabb;

        if self.fail_next_fuse {
            self.fail_next_fuse = false;
            return Err(KernelError::BooleanFailed {
                reason: "injected fuse failure".to_string(),
            });
        }
        Ok(self.store(Self::merge(&aabb_a, &aabb_b)))
    }

    fn bounding_box(&self, solid: &KernelSolidHandle) -> Result<Aabb, KernelError> {
        let aabb = self.get(solid)?.aabb;
        if aabb.is_void() {
            return Err(KernelError::EmptyBoundingBox);
        }
        Ok(aabb)
    }

    fn tessellate(
        &mut self,
        solid: &KernelSolidHandle,
        linear_deflection: f64,
        _angular_deflection: f64,
        _parallel: bool,
    ) -> Result<RenderMesh, KernelError> {
        self.journal.push(MockOp::Tessellate);
        self.get(solid)?;

        if self.fail_tessellation || linear_deflection <= 0.0 {
            return Err(KernelError::TessellationFailed {
                reason: "injected tessellation failure".to_string(),
            });
        }
        // One deterministic triangle is enough for writer tests.
        Ok(RenderMesh {
            vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            normals: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            indices: vec![0, 1, 2],
        })
    }

    fn export_step(&self, solid: &KernelSolidHandle) -> Result<String, KernelError> {
        self.get(solid)?;
        Ok(MOCK_STEP_TEXT.to_string())
    }

    fn release(&mut self, solid: &KernelSolidHandle) -> bool {
        self.journal.push(MockOp::Release { id: solid.id() });
        self.solids.remove(&solid.id()).is_some()
    }
}
