use anyhow::{ensure, Result};
use bytes::Bytes;

use crate::{DType, Shape, TensorDesc};

/// Owns the storage for a tensor. One payload per element kind; the tag
/// is the single source of truth for the element type, so a buffer can
/// never disagree with its declared kind.
#[derive(Clone, Debug, PartialEq)]
pub enum TensorData {
    F32(Vec<f32>),
    I32(Vec<i32>),
}

impl TensorData {
    pub fn dtype(&self) -> DType {
        match self {
            TensorData::F32(_) => DType::F32,
            TensorData::I32(_) => DType::I32,
        }
    }

    fn len(&self) -> usize {
        match self {
            TensorData::F32(v) => v.len(),
            TensorData::I32(v) => v.len(),
        }
    }
}

/// A homogeneous numeric buffer sized to match a shape.
///
/// Invariant: the payload length always equals `shape.numel()`. Value
/// semantics throughout: `clone` duplicates the buffer, a move consumes
/// the source, and there is no shared ownership.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: TensorData,
}

impl Tensor {
    /// Zero-filled tensor of the given kind and shape. A zero-element
    /// shape (empty, or any axis of size zero) allocates nothing.
    pub fn zeros(dtype: DType, shape: Shape) -> Self {
        let numel = shape.numel();
        let data = match dtype {
            DType::F32 => TensorData::F32(vec![0.0; numel]),
            DType::I32 => TensorData::I32(vec![0; numel]),
        };
        Self { shape, data }
    }

    pub fn from_f32(shape: Shape, values: Vec<f32>) -> Self {
        assert_eq!(
            values.len(),
            shape.numel(),
            "f32 buffer length does not match shape {shape}",
        );
        Self {
            shape,
            data: TensorData::F32(values),
        }
    }

    pub fn from_i32(shape: Shape, values: Vec<i32>) -> Self {
        assert_eq!(
            values.len(),
            shape.numel(),
            "i32 buffer length does not match shape {shape}",
        );
        Self {
            shape,
            data: TensorData::I32(values),
        }
    }

    /// Decodes a little-endian wire buffer, as produced by a remote
    /// inference response. Wire data is untrusted, so a length mismatch
    /// here is a recoverable error rather than a panic.
    pub fn from_le_bytes(dtype: DType, shape: Shape, bytes: &Bytes) -> Result<Self> {
        let expected = shape.numel() * dtype.byte_size();
        ensure!(
            bytes.len() == expected,
            "{dtype} tensor byte size mismatch for shape {shape}: got {}, expected {expected}",
            bytes.len(),
        );

        let data = match dtype {
            DType::F32 => TensorData::F32(
                bytes
                    .chunks_exact(4)
                    .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .collect(),
            ),
            DType::I32 => TensorData::I32(
                bytes
                    .chunks_exact(4)
                    .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .collect(),
            ),
        };

        Ok(Self { shape, data })
    }

    /// Little-endian encoding of the buffer, for handing to a transport
    /// layer.
    pub fn to_le_bytes(&self) -> Bytes {
        let mut out = Vec::with_capacity(self.shape.numel() * self.dtype().byte_size());
        match &self.data {
            TensorData::F32(v) => {
                for x in v {
                    out.extend_from_slice(&x.to_le_bytes());
                }
            }
            TensorData::I32(v) => {
                for x in v {
                    out.extend_from_slice(&x.to_le_bytes());
                }
            }
        }
        Bytes::from(out)
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn desc(&self) -> TensorDesc {
        TensorDesc {
            dtype: self.dtype(),
            shape: self.shape.clone(),
        }
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Typed view over the buffer. Callers are expected to have checked
    /// the descriptor (normally via the verifier) first; requesting the
    /// wrong kind is a programming error and panics.
    pub fn as_f32(&self) -> &[f32] {
        match &self.data {
            TensorData::F32(v) => v,
            other => panic!("requested f32 view of {} tensor", other.dtype()),
        }
    }

    pub fn as_f32_mut(&mut self) -> &mut [f32] {
        match &mut self.data {
            TensorData::F32(v) => v,
            other => panic!("requested f32 view of {} tensor", other.dtype()),
        }
    }

    pub fn as_i32(&self) -> &[i32] {
        match &self.data {
            TensorData::I32(v) => v,
            other => panic!("requested i32 view of {} tensor", other.dtype()),
        }
    }

    pub fn as_i32_mut(&mut self) -> &mut [i32] {
        match &mut self.data {
            TensorData::I32(v) => v,
            other => panic!("requested i32 view of {} tensor", other.dtype()),
        }
    }
}
