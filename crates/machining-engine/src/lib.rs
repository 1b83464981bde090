//! Machining session: stock creation, feature application, shape registry
//! and file export, layered on a pluggable geometry kernel.

pub mod error;
pub mod registry;
pub mod stl;

mod export;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kernel_bridge::{Frame, Kernel, TruckKernel};
use machining_ops::{execute_machining, synthesize_tool};
use swarf_types::{Feature, OutputOptions, ShapeId, StockKind, StockSpec};

pub use crate::error::EngineError;
pub use crate::registry::ShapeRegistry;

/// Result of applying a feature: the machined stock and the removed volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachiningOutcome {
    /// Stock minus the feature's removal tool.
    pub result: ShapeId,
    /// Material actually removed (stock ∩ tool).
    pub delta: ShapeId,
}

/// A machining session over one kernel instance.
///
/// Owns the kernel and the registry mapping public shape ids onto kernel
/// solids. Shapes live until [`Session::delete_shape`] or drop of the whole
/// session.
pub struct Session<K: Kernel> {
    kernel: K,
    registry: ShapeRegistry,
}

impl Session<TruckKernel> {
    /// Session backed by the real B-rep kernel.
    pub fn truck() -> Self {
        Session::new(TruckKernel::new())
    }
}

impl<K: Kernel> Session<K> {
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            registry: ShapeRegistry::new(),
        }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn kernel_mut(&mut self) -> &mut K {
        &mut self.kernel
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Create a stock solid and register it.
    ///
    /// Box stock spans `p1 × p2 × p3` from its axis origin; cylinder stock
    /// uses `p1` as radius and `p2` as height along the axis direction.
    pub fn create_stock(&mut self, spec: &StockSpec) -> Result<ShapeId, EngineError> {
        let frame = Frame::resolve(&spec.axis)?;
        let solid = match spec.kind {
            StockKind::Box => {
                if spec.p1 <= 0.0 || spec.p2 <= 0.0 || spec.p3 <= 0.0 {
                    return Err(EngineError::invalid("box dimensions must be positive"));
                }
                self.kernel.make_box(&frame, spec.p1, spec.p2, spec.p3)?
            }
            StockKind::Cylinder => {
                if spec.p1 <= 0.0 || spec.p2 <= 0.0 {
                    return Err(EngineError::invalid(
                        "cylinder radius and height must be positive",
                    ));
                }
                self.kernel.make_cylinder(&frame, spec.p1, spec.p2)?
            }
        };

        let id = self.registry.add(solid);
        info!(shape = id.0, kind = ?spec.kind, "created stock");
        Ok(id)
    }

    /// Apply a removal feature to a registered stock shape.
    ///
    /// The stock shape itself is left untouched; the machined result and the
    /// removed volume are registered as two new shapes, result first.
    pub fn apply_feature(
        &mut self,
        stock: ShapeId,
        feature: &Feature,
    ) -> Result<MachiningOutcome, EngineError> {
        let stock_solid = self
            .registry
            .find(stock)
            .cloned()
            .ok_or(EngineError::ShapeNotFound { id: stock.0 })?;

        debug!(shape = stock.0, feature = feature.kind_name(), "synthesizing tool");
        let tool = synthesize_tool(&mut self.kernel, &stock_solid, feature)?;
        let pair = execute_machining(&mut self.kernel, &stock_solid, tool)?;

        let result = self.registry.add(pair.result);
        let delta = self.registry.add(pair.delta);
        info!(
            shape = stock.0,
            feature = feature.kind_name(),
            result = result.0,
            delta = delta.0,
            "applied feature"
        );
        Ok(MachiningOutcome { result, delta })
    }

    /// Delete a registered shape and free its kernel solid.
    pub fn delete_shape(&mut self, id: ShapeId) -> Result<(), EngineError> {
        let solid = self
            .registry
            .remove(id)
            .ok_or(EngineError::ShapeNotFound { id: id.0 })?;
        self.kernel.release(&solid);
        debug!(shape = id.0, "deleted shape");
        Ok(())
    }

    /// Export a registered shape to a file in the requested format.
    pub fn export_shape(
        &mut self,
        id: ShapeId,
        path: impl AsRef<Path>,
        options: &OutputOptions,
    ) -> Result<(), EngineError> {
        let solid = self
            .registry
            .find(id)
            .cloned()
            .ok_or(EngineError::ShapeNotFound { id: id.0 })?;

        let path = path.as_ref();
        export::export_solid(&mut self.kernel, &solid, path, options)?;
        info!(shape = id.0, path = %path.display(), format = ?options.format, "exported shape");
        Ok(())
    }
}
