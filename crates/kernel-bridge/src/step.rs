//! STEP text generation via truck-stepio.

use truck_modeling::topology::Solid;
use truck_stepio::out;

use crate::types::KernelError;

/// Serialize a solid to STEP text. This is the "transfer" stage of exact
/// export; writing the text to disk is the caller's concern.
pub fn solid_to_step(solid: &Solid) -> Result<String, KernelError> {
    let compressed = solid.compress();
    let text = out::CompleteStepDisplay::new(
        out::StepModel::from(&compressed),
        out::StepHeaderDescriptor {
            organization_system: "swarf".to_owned(),
            ..Default::default()
        },
    )
    .to_string();

    if text.is_empty() {
        return Err(KernelError::StepFailed {
            reason: "serializer produced empty output".to_string(),
        });
    }
    Ok(text)
}
