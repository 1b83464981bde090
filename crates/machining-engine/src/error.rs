use kernel_bridge::KernelError;
use machining_ops::OpError;
use swarf_types::ErrorCode;
use thiserror::Error;

/// Errors surfaced by the machining session.
///
/// Every variant maps to a stable [`ErrorCode`] via [`EngineError::code`],
/// so callers that treat status as data never depend on message text.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("shape {id} not found")]
    ShapeNotFound { id: i32 },

    #[error("kernel failure: {reason}")]
    KernelException { reason: String },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("delta extraction failed: {reason}")]
    DeltaFailed { reason: String },

    #[error("export failed: {reason}")]
    ExportFailed { reason: String },
}

impl EngineError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            EngineError::ShapeNotFound { .. } => ErrorCode::ShapeNotFound,
            EngineError::KernelException { .. } => ErrorCode::KernelException,
            EngineError::BooleanFailed { .. } => ErrorCode::BooleanFailed,
            EngineError::DeltaFailed { .. } => ErrorCode::DeltaFailed,
            EngineError::ExportFailed { .. } => ErrorCode::ExportFailed,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn export(reason: impl Into<String>) -> Self {
        EngineError::ExportFailed {
            reason: reason.into(),
        }
    }
}

impl From<KernelError> for EngineError {
    fn from(e: KernelError) -> Self {
        EngineError::KernelException {
            reason: e.to_string(),
        }
    }
}

impl From<OpError> for EngineError {
    fn from(e: OpError) -> Self {
        match e {
            OpError::InvalidParameter { reason } => EngineError::InvalidArgument { reason },
            OpError::BooleanFailed { reason } => EngineError::BooleanFailed { reason },
            OpError::DeltaFailed { reason } => EngineError::DeltaFailed { reason },
            OpError::Kernel(k) => k.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_stable_codes() {
        let cases: Vec<(EngineError, i32)> = vec![
            (EngineError::invalid("x"), 1),
            (EngineError::ShapeNotFound { id: 7 }, 2),
            (
                EngineError::KernelException {
                    reason: "x".into(),
                },
                4,
            ),
            (
                EngineError::BooleanFailed {
                    reason: "x".into(),
                },
                5,
            ),
            (EngineError::DeltaFailed { reason: "x".into() }, 6),
            (EngineError::export("x"), 7),
        ];
        for (err, code) in cases {
            assert_eq!(err.code().as_i32(), code);
        }
    }

    #[test]
    fn op_errors_keep_their_distinction() {
        let boolean: EngineError = OpError::BooleanFailed {
            reason: "cut".into(),
        }
        .into();
        let delta: EngineError = OpError::DeltaFailed {
            reason: "common".into(),
        }
        .into();
        assert_eq!(boolean.code().as_i32(), 5);
        assert_eq!(delta.code().as_i32(), 6);
    }
}
