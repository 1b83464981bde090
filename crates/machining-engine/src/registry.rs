//! Shape registry: public `i32` handles mapped onto kernel solids.
//!
//! Handles start at 1 and grow monotonically; an id is never reused, even
//! after its shape is deleted. `ShapeId(0)` stays reserved as the null
//! sentinel.

use std::collections::HashMap;

use kernel_bridge::KernelSolidHandle;
use swarf_types::ShapeId;

#[derive(Debug, Default)]
pub struct ShapeRegistry {
    next_id: i32,
    shapes: HashMap<i32, KernelSolidHandle>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            shapes: HashMap::new(),
        }
    }

    /// Register a kernel solid and hand back its public id.
    pub fn add(&mut self, solid: KernelSolidHandle) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id.0, solid);
        id
    }

    pub fn find(&self, id: ShapeId) -> Option<&KernelSolidHandle> {
        self.shapes.get(&id.0)
    }

    /// Unregister a shape, returning the kernel solid it pointed at.
    pub fn remove(&mut self, id: ShapeId) -> Option<KernelSolidHandle> {
        self.shapes.remove(&id.0)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
