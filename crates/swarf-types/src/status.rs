use serde::{Deserialize, Serialize};

/// Stable integer status codes surfaced at every API boundary.
///
/// `Ok` is always 0; the remaining values never change meaning between
/// releases. Callers that receive status as data (the sample harness, FFI
/// adapters) match on these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    /// Missing input, non-positive dimension, unsupported enum value, or a
    /// profile that yields no removable segments.
    InvalidArgument = 1,
    /// A handle did not resolve in the shape registry.
    ShapeNotFound = 2,
    /// Feature tag outside the known variant set.
    FeatureNotSupported = 3,
    /// Unexpected geometry-kernel failure with no more specific mapping.
    KernelException = 4,
    /// The cut or a segment-tool construction/fuse reported not-done.
    BooleanFailed = 5,
    /// The intersection step reported not-done after a successful cut.
    DeltaFailed = 6,
    /// Transfer, tessellation or file write reported not-done.
    ExportFailed = 7,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
