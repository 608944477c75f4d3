use tensorbind_core::{IOName, ModelSignature, Port, Tensor};
use tracing::trace;

use crate::VerifyError;

/// Matches each named tensor against the declared ports and hands every
/// good match to `bind`.
///
/// Requests are processed in the order supplied and the binder runs
/// exactly once per request that passes, in that same order. The first
/// failure stops the pass: a signature mismatch is an integration bug,
/// and one precise diagnostic beats a cascade of secondary noise.
///
/// `direction` is a human-readable flow label ("input" or "output")
/// used only in diagnostics. Ports are read, never mutated; the
/// verifier itself has no other side effects.
pub fn verify_and_bind<F>(
    direction: &str,
    ports: &[Port],
    requests: &[(IOName, Tensor)],
    mut bind: F,
) -> Result<(), VerifyError>
where
    F: FnMut(&Port, &Tensor) -> anyhow::Result<()>,
{
    for (name, tensor) in requests {
        let port = ports.iter().find(|p| p.name == *name).ok_or_else(|| {
            VerifyError::PortNotFound {
                direction: direction.to_string(),
                name: name.0.clone(),
            }
        })?;

        if let Err(mismatch) = port.spec.matches(&tensor.desc()) {
            return Err(VerifyError::SpecMismatch {
                direction: direction.to_string(),
                name: name.0.clone(),
                mismatch,
            });
        }

        trace!(direction, name = %name, target = %port.target, "tensor matched port");

        bind(port, tensor).map_err(|reason| VerifyError::BindFailed {
            direction: direction.to_string(),
            name: name.0.clone(),
            target: port.target.clone(),
            reason,
        })?;
    }

    Ok(())
}

/// Verifies tensors the caller wants to feed into the model.
pub fn bind_inputs<F>(
    signature: &ModelSignature,
    requests: &[(IOName, Tensor)],
    bind: F,
) -> Result<(), VerifyError>
where
    F: FnMut(&Port, &Tensor) -> anyhow::Result<()>,
{
    verify_and_bind("input", &signature.inputs, requests, bind)
}

/// Verifies tensors the caller wants to read back from the model.
pub fn bind_outputs<F>(
    signature: &ModelSignature,
    requests: &[(IOName, Tensor)],
    bind: F,
) -> Result<(), VerifyError>
where
    F: FnMut(&Port, &Tensor) -> anyhow::Result<()>,
{
    verify_and_bind("output", &signature.outputs, requests, bind)
}
