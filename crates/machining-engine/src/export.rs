//! File export: STEP text straight from the kernel, STL via tessellation.

use std::fs;
use std::path::Path;

use kernel_bridge::{Kernel, KernelError, KernelSolidHandle};
use swarf_types::{OutputFormat, OutputOptions};

use crate::error::EngineError;
use crate::stl;

/// Kernel failures during export collapse to `ExportFailed`; anything else
/// stays a kernel exception.
fn into_export_failed(e: KernelError) -> EngineError {
    match e {
        KernelError::StepFailed { reason } | KernelError::TessellationFailed { reason } => {
            EngineError::ExportFailed { reason }
        }
        other => other.into(),
    }
}

pub(crate) fn export_solid<K: Kernel>(
    kernel: &mut K,
    solid: &KernelSolidHandle,
    path: &Path,
    options: &OutputOptions,
) -> Result<(), EngineError> {
    match options.format {
        OutputFormat::Step => {
            let text = kernel.export_step(solid).map_err(into_export_failed)?;
            fs::write(path, text).map_err(|e| EngineError::export(e.to_string()))
        }
        OutputFormat::Stl => {
            let mesh = kernel
                .tessellate(
                    solid,
                    options.linear_deflection,
                    options.angular_deflection,
                    options.parallel,
                )
                .map_err(into_export_failed)?;
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("solid");
            let bytes = stl::encode_binary_stl(&mesh, name)?;
            fs::write(path, bytes).map_err(|e| EngineError::export(e.to_string()))
        }
    }
}
