use tensorbind_core::SpecMismatch;
use thiserror::Error;

/// First failure encountered while matching a tensor set against a
/// model signature.
///
/// Every variant describes a static caller/model incompatibility that
/// will not change on retry; the caller is expected to surface it to
/// whoever is integrating against the model, not to swallow or retry
/// it.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("{direction} tensor `{name}` has no matching port in the model signature")]
    PortNotFound { direction: String, name: String },

    #[error("{direction} tensor `{name}` does not match its declared port: {mismatch}")]
    SpecMismatch {
        direction: String,
        name: String,
        mismatch: SpecMismatch,
    },

    #[error("failed to bind {direction} tensor `{name}` to `{target}`: {reason}")]
    BindFailed {
        direction: String,
        name: String,
        target: String,
        #[source]
        reason: anyhow::Error,
    },
}
