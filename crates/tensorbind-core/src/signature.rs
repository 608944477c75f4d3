use thiserror::Error;

use crate::{DType, TensorDesc};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IOName(pub String);

impl IOName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for IOName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared descriptor of a signature port: element kind plus per-axis
/// sizes, where `None` marks a dynamic axis that accepts any size at
/// call time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorSpec {
    pub dtype: DType,
    pub dims: Vec<Option<usize>>,
}

impl TensorSpec {
    /// Spec with every axis fixed.
    pub fn exact(dtype: DType, dims: &[usize]) -> Self {
        Self {
            dtype,
            dims: dims.iter().copied().map(Some).collect(),
        }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Checks a concrete descriptor against this declaration.
    ///
    /// dtype and rank must match exactly; fixed axes must match the
    /// concrete size, dynamic axes accept anything.
    pub fn matches(&self, desc: &TensorDesc) -> Result<(), SpecMismatch> {
        if desc.dtype != self.dtype {
            return Err(SpecMismatch::DType {
                expected: self.dtype,
                got: desc.dtype,
            });
        }

        if desc.shape.rank() != self.rank() {
            return Err(SpecMismatch::Rank {
                expected: self.rank(),
                got: desc.shape.rank(),
            });
        }

        for (axis, (declared, got)) in self.dims.iter().zip(desc.shape.0.iter()).enumerate() {
            if let Some(expected) = declared {
                if *expected != *got {
                    return Err(SpecMismatch::Dim {
                        axis,
                        expected: *expected,
                        got: *got,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Specific reason a concrete tensor failed its declared spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SpecMismatch {
    #[error("dtype mismatch: declared {expected}, got {got}")]
    DType { expected: DType, got: DType },

    #[error("rank mismatch: declared {expected}, got {got}")]
    Rank { expected: usize, got: usize },

    #[error("size mismatch on axis {axis}: declared {expected}, got {got}")]
    Dim {
        axis: usize,
        expected: usize,
        got: usize,
    },
}

/// A named slot in a model signature: the name callers address, the
/// identifier of the tensor it maps to inside the model graph, and the
/// descriptor it expects.
#[derive(Clone, Debug)]
pub struct Port {
    pub name: IOName,
    pub target: String,
    pub spec: TensorSpec,
}

/// The full set of a model's declared input and output ports. Built
/// once per model by the signature source and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct ModelSignature {
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
}

impl ModelSignature {
    pub fn input(&self, name: &IOName) -> Option<&Port> {
        self.inputs.iter().find(|p| p.name == *name)
    }

    pub fn output(&self, name: &IOName) -> Option<&Port> {
        self.outputs.iter().find(|p| p.name == *name)
    }
}
