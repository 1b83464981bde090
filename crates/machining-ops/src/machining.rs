//! Boolean machining: apply a removal tool to stock, producing the machined
//! result and the removed-material delta.

use kernel_bridge::{Kernel, KernelError, KernelSolidHandle};

use crate::types::OpError;

/// The two solids produced by a machining operation.
#[derive(Debug, Clone)]
pub struct MachinedPair {
    /// stock − tool: the post-machining solid.
    pub result: KernelSolidHandle,
    /// stock ∩ tool: the material actually removed.
    pub delta: KernelSolidHandle,
}

/// Cut and intersect the stock with the tool.
///
/// The tool solid is consumed: it is released whether or not the operation
/// succeeds. The stock solid is left untouched either way. A failing cut is
/// [`OpError::BooleanFailed`]; a failing intersection after a successful cut
/// is the distinct [`OpError::DeltaFailed`], and the orphaned cut result is
/// released before returning.
pub fn execute_machining(
    kernel: &mut dyn Kernel,
    stock: &KernelSolidHandle,
    tool: KernelSolidHandle,
) -> Result<MachinedPair, OpError> {
    let result = match kernel.boolean_cut(stock, &tool) {
        Ok(r) => r,
        Err(e) => {
            kernel.release(&tool);
            return Err(match e {
                KernelError::BooleanFailed { reason } => OpError::BooleanFailed { reason },
                other => OpError::Kernel(other),
            });
        }
    };

    let common = kernel.boolean_common(stock, &tool);
    kernel.release(&tool);

    let delta = match common {
        Ok(d) => d,
        Err(e) => {
            kernel.release(&result);
            return Err(match e {
                KernelError::BooleanFailed { reason } => OpError::DeltaFailed { reason },
                other => OpError::Kernel(other),
            });
        }
    };

    Ok(MachinedPair { result, delta })
}
