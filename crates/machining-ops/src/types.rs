use kernel_bridge::KernelError;

/// Errors from machining operations.
///
/// The cut and the delta intersection are kept as two separately observable
/// failure modes: a caller that only wants the machined result can still act
/// on a usable cut when the delta computation is what broke.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OpError {
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("delta computation failed: {reason}")]
    DeltaFailed { reason: String },

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}

impl OpError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        OpError::InvalidParameter {
            reason: reason.into(),
        }
    }
}

/// Map a kernel boolean failure to [`OpError::BooleanFailed`]; anything else
/// stays a kernel error.
pub(crate) fn into_boolean_failed(e: KernelError) -> OpError {
    match e {
        KernelError::BooleanFailed { reason } => OpError::BooleanFailed { reason },
        other => OpError::Kernel(other),
    }
}
