use serde::{Deserialize, Serialize};

/// Export format for a registered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Exact boundary representation (STEP text).
    Step,
    /// Tessellated triangle mesh (binary STL).
    Stl,
}

/// Export request options.
///
/// The deflection tolerances and the parallel hint apply to mesh export only
/// and are ignored for STEP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub linear_deflection: f64,
    pub angular_deflection: f64,
    /// Hint consumed inside the kernel's mesher; no bearing on API control
    /// flow.
    pub parallel: bool,
}

impl OutputOptions {
    pub fn step() -> Self {
        Self {
            format: OutputFormat::Step,
            linear_deflection: 0.1,
            angular_deflection: 0.5,
            parallel: false,
        }
    }

    pub fn stl(linear_deflection: f64, angular_deflection: f64, parallel: bool) -> Self {
        Self {
            format: OutputFormat::Stl,
            linear_deflection,
            angular_deflection,
            parallel,
        }
    }
}
