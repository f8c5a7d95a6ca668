// binary.rs - Binary array files (bincode container, optional LZ4, CRC32 check)

use super::display::format_array;
use super::{DType, Element};
use crate::error::{ArrayError, ArrayResult};
use crate::output::ensure_parent_dir;
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Leading bytes of every array file
pub const MAGIC: [u8; 8] = *b"DSTARRAY";
pub const FORMAT_VERSION: u16 = 1;

/// Metadata stored in front of the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayHeader {
    pub dtype: DType,
    pub shape: Vec<usize>,
    pub created: String,
    /// CRC32 of the uncompressed payload
    pub checksum: u32,
    pub compressed: bool,
    /// Uncompressed payload size in bytes
    pub payload_len: usize,
}

impl ArrayHeader {
    /// Number of elements implied by `shape`; a product that overflows is corrupt
    pub fn element_count(&self) -> ArrayResult<usize> {
        self.shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| ArrayError::Corrupt(format!("shape {:?} is too large", self.shape)))
    }

    /// Uncompressed payload size implied by `shape` and `dtype`
    pub fn expected_payload_len(&self) -> ArrayResult<usize> {
        self.element_count()?
            .checked_mul(self.dtype.item_size())
            .ok_or_else(|| ArrayError::Corrupt(format!("shape {:?} is too large", self.shape)))
    }
}

/// On-disk array container. The payload holds little-endian elements
/// in row-major order, LZ4-compressed when `header.compressed` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayFile {
    pub magic: [u8; 8],
    pub version: u16,
    pub header: ArrayHeader,
    pub payload: Vec<u8>,
}

impl ArrayFile {
    fn encode<T, S, D>(array: &ArrayBase<S, D>, compress: bool) -> Self
    where
        T: Element,
        S: Data<Elem = T>,
        D: Dimension,
    {
        let mut raw = Vec::with_capacity(array.len() * T::DTYPE.item_size());
        for &item in array.iter() {
            item.write_le(&mut raw);
        }

        let header = ArrayHeader {
            dtype: T::DTYPE,
            shape: array.shape().to_vec(),
            created: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            checksum: crc32fast::hash(&raw),
            compressed: compress,
            payload_len: raw.len(),
        };

        let payload = if compress {
            lz4_flex::compress_prepend_size(&raw)
        } else {
            raw
        };

        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            header,
            payload,
        }
    }

    /// Decompressed payload after length and checksum verification
    pub fn raw_payload(&self) -> ArrayResult<Vec<u8>> {
        let raw = if self.header.compressed {
            lz4_flex::decompress_size_prepended(&self.payload)
                .map_err(|e| ArrayError::Corrupt(format!("LZ4 decompression failed: {}", e)))?
        } else {
            self.payload.clone()
        };

        let expected = self.header.expected_payload_len()?;
        if raw.len() != expected || raw.len() != self.header.payload_len {
            return Err(ArrayError::Corrupt(format!(
                "payload is {} bytes, expected {}",
                raw.len(),
                expected
            )));
        }

        let checksum = crc32fast::hash(&raw);
        if checksum != self.header.checksum {
            return Err(ArrayError::Corrupt(format!(
                "checksum mismatch: stored {:08x}, computed {:08x}",
                self.header.checksum, checksum
            )));
        }
        Ok(raw)
    }

    /// Decode into an array of the stored element type
    pub fn decode<T: Element>(&self) -> ArrayResult<ArrayD<T>> {
        if self.header.dtype != T::DTYPE {
            return Err(ArrayError::DTypeMismatch {
                expected: T::DTYPE.name().to_string(),
                found: self.header.dtype.name().to_string(),
            });
        }

        let raw = self.raw_payload()?;
        let data = raw
            .chunks(T::DTYPE.item_size())
            .map(T::read_le)
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| ArrayError::Corrupt("invalid element encoding".to_string()))?;

        ArrayD::from_shape_vec(IxDyn(&self.header.shape), data)
            .map_err(|e| ArrayError::Corrupt(e.to_string()))
    }

    /// Decode without knowing the element type in advance
    pub fn decode_any(&self) -> ArrayResult<AnyArray> {
        match self.header.dtype {
            DType::Int64 => self.decode().map(AnyArray::Int),
            DType::Float64 => self.decode().map(AnyArray::Float),
            DType::Bool => self.decode().map(AnyArray::Bool),
        }
    }
}

/// An array whose element type is only known at run time
#[derive(Debug, Clone, PartialEq)]
pub enum AnyArray {
    Int(ArrayD<i64>),
    Float(ArrayD<f64>),
    Bool(ArrayD<bool>),
}

impl AnyArray {
    pub fn dtype(&self) -> DType {
        match self {
            AnyArray::Int(_) => DType::Int64,
            AnyArray::Float(_) => DType::Float64,
            AnyArray::Bool(_) => DType::Bool,
        }
    }

    /// Elements as f64 in row-major order (bools become 0/1)
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            AnyArray::Int(a) => a.iter().map(|&x| x.to_f64()).collect(),
            AnyArray::Float(a) => a.iter().copied().collect(),
            AnyArray::Bool(a) => a.iter().map(|&x| x.to_f64()).collect(),
        }
    }
}

impl Display for AnyArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyArray::Int(a) => write!(f, "{}", format_array(a)),
            AnyArray::Float(a) => write!(f, "{}", format_array(a)),
            AnyArray::Bool(a) => write!(f, "{}", format_array(a)),
        }
    }
}

/// Write `array` to `file_path`, returning the stored header
pub fn save_binary<T, S, D>(
    file_path: &Path,
    array: &ArrayBase<S, D>,
    compress: bool,
) -> ArrayResult<ArrayHeader>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    let start = Instant::now();
    let file_data = ArrayFile::encode(array, compress);

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, &file_data)?;
    writer.flush()?;

    tracing::debug!(
        path = %file_path.display(),
        dtype = %file_data.header.dtype,
        bytes = file_data.payload.len(),
        compressed = compress,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "array saved"
    );
    Ok(file_data.header)
}

/// Read and validate the container without decoding the payload
pub fn read_array_file(file_path: &Path) -> ArrayResult<ArrayFile> {
    let bytes = std::fs::read(file_path)?;
    if !bytes.starts_with(&MAGIC) {
        return Err(ArrayError::Corrupt(format!(
            "{} is not an array file",
            file_path.display()
        )));
    }

    let file_data: ArrayFile = bincode::deserialize(&bytes)?;
    if file_data.version != FORMAT_VERSION {
        return Err(ArrayError::Corrupt(format!(
            "unsupported format version {}",
            file_data.version
        )));
    }
    Ok(file_data)
}

/// Load an array of element type `T` written by `save_binary`
pub fn load_binary<T: Element>(file_path: &Path) -> ArrayResult<ArrayD<T>> {
    let array = read_array_file(file_path)?.decode()?;
    tracing::debug!(path = %file_path.display(), shape = ?array.shape(), "array loaded");
    Ok(array)
}
