//! 规范几何归档
//!
//! 三种编码：
//! - `Json`: 便于阅读和调试
//! - `MessagePack`: 紧凑的二进制编码
//! - `Packed`: 带文件头和版本号的 MessagePack + Zstd
//!
//! `Packed` 文件头（16 字节，小端）：魔数 `GBRG`、格式版本、标志位、压缩数据长度。

use crate::error::ArchiveError;
use geobridge_core::geometry::Geometry;

/// 魔数 "GBRG"
const MAGIC: &[u8; 4] = b"GBRG";

/// 当前格式版本
const FORMAT_VERSION: u32 = 1;

const HEADER_LEN: usize = 16;

/// Zstd 压缩级别
const COMPRESSION_LEVEL: i32 = 3;

/// 归档编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFormat {
    Json,
    MessagePack,
    #[default]
    Packed,
}

/// `Packed` 文件头，魔数只在解析时校验，不保存
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PackedHeader {
    version: u32,
    flags: u32,
    payload_len: u32,
}

impl PackedHeader {
    fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..4].copy_from_slice(MAGIC);
        for (slot, value) in out[4..]
            .chunks_exact_mut(4)
            .zip([self.version, self.flags, self.payload_len])
        {
            slot.copy_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// 解析文件头，返回文件头和其后的负载
    fn parse(bytes: &[u8]) -> Result<(Self, &[u8]), ArchiveError> {
        let (head, payload) = bytes
            .split_first_chunk::<HEADER_LEN>()
            .ok_or_else(|| ArchiveError::InvalidFormat("Archive shorter than its header".to_string()))?;

        if &head[..4] != MAGIC {
            return Err(ArchiveError::InvalidFormat(
                "Invalid magic number, not a geobridge archive".to_string(),
            ));
        }

        let word = |i: usize| u32::from_le_bytes([head[i], head[i + 1], head[i + 2], head[i + 3]]);
        let header = Self {
            version: word(4),
            flags: word(8),
            payload_len: word(12),
        };
        Ok((header, payload))
    }
}

/// 编码几何
pub fn encode(geometry: &Geometry, format: ArchiveFormat) -> Result<Vec<u8>, ArchiveError> {
    let bytes = match format {
        ArchiveFormat::Json => serde_json::to_vec(geometry)?,
        ArchiveFormat::MessagePack => rmp_serde::to_vec(geometry)?,
        ArchiveFormat::Packed => pack(geometry)?,
    };

    tracing::info!(
        "Encoded {} as {:?} ({} bytes)",
        geometry.type_name(),
        format,
        bytes.len()
    );

    Ok(bytes)
}

/// 解码几何
pub fn decode(bytes: &[u8], format: ArchiveFormat) -> Result<Geometry, ArchiveError> {
    let geometry: Geometry = match format {
        ArchiveFormat::Json => serde_json::from_slice(bytes)?,
        ArchiveFormat::MessagePack => rmp_serde::from_slice(bytes)?,
        ArchiveFormat::Packed => unpack(bytes)?,
    };

    tracing::info!(
        "Decoded {} from {:?} ({} bytes)",
        geometry.type_name(),
        format,
        bytes.len()
    );

    Ok(geometry)
}

fn pack(geometry: &Geometry) -> Result<Vec<u8>, ArchiveError> {
    let msgpack_data = rmp_serde::to_vec(geometry)?;
    let compressed = zstd::encode_all(msgpack_data.as_slice(), COMPRESSION_LEVEL)?;
    let payload_len = u32::try_from(compressed.len())
        .map_err(|_| ArchiveError::InvalidFormat("Compressed payload exceeds 4 GiB".to_string()))?;

    let header = PackedHeader {
        version: FORMAT_VERSION,
        flags: 0,
        payload_len,
    };
    let mut bytes = Vec::with_capacity(HEADER_LEN + compressed.len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(&compressed);
    Ok(bytes)
}

fn unpack(bytes: &[u8]) -> Result<Geometry, ArchiveError> {
    let (header, payload) = PackedHeader::parse(bytes)?;

    if header.version > FORMAT_VERSION {
        return Err(ArchiveError::UnsupportedVersion(format!(
            "Archive version {} is newer than supported version {}",
            header.version, FORMAT_VERSION
        )));
    }

    let compressed = payload.get(..header.payload_len as usize).ok_or_else(|| {
        ArchiveError::InvalidFormat(format!(
            "Payload truncated: expected {} bytes, found {}",
            header.payload_len,
            payload.len()
        ))
    })?;

    let msgpack_data = zstd::decode_all(compressed)?;
    Ok(rmp_serde::from_slice(&msgpack_data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geobridge_core::prelude::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn sample() -> Geometry {
        Geometry::Composite(CompositeGeometry::new(vec![
            Geometry::Curve(Curve::Line(Line::new(
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 2.0, 3.0),
            ))),
            Geometry::Solid(Solid::Sphere(Sphere {
                centre: Point::new(0.5, 0.5, 0.5),
                radius: 0.25,
            })),
            Geometry::Mesh(Mesh::new(
                vec![Point::origin(), Point::new(1.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0)],
                vec![Face::triangle(0, 1, 2)],
            )),
        ]))
    }

    #[test]
    fn test_every_format_decodes_back() {
        init_tracing();
        let geometry = sample();

        for format in [ArchiveFormat::Json, ArchiveFormat::MessagePack, ArchiveFormat::Packed] {
            let bytes = encode(&geometry, format).expect("Failed to encode");
            let decoded = decode(&bytes, format).expect("Failed to decode");
            assert_eq!(decoded, geometry, "{format:?}");
        }
    }

    #[test]
    fn test_packed_header() {
        let bytes = encode(&sample(), ArchiveFormat::Packed).expect("Failed to encode");
        assert_eq!(&bytes[..4], MAGIC);

        let (header, payload) = PackedHeader::parse(&bytes).expect("Failed to parse header");
        assert_eq!(header.version, FORMAT_VERSION);
        assert_eq!(header.flags, 0);
        assert_eq!(header.payload_len as usize, payload.len());
        assert_eq!(payload.len(), bytes.len() - HEADER_LEN);
        assert_eq!(header.to_bytes(), bytes[..HEADER_LEN]);
    }

    #[test]
    fn test_invalid_magic() {
        let mut bytes = encode(&sample(), ArchiveFormat::Packed).expect("Failed to encode");
        bytes[..4].copy_from_slice(b"XXXX");

        assert!(matches!(
            decode(&bytes, ArchiveFormat::Packed),
            Err(ArchiveError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut bytes = encode(&sample(), ArchiveFormat::Packed).expect("Failed to encode");
        bytes[4..8].copy_from_slice(&(FORMAT_VERSION + 1).to_le_bytes());

        assert!(matches!(
            decode(&bytes, ArchiveFormat::Packed),
            Err(ArchiveError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_truncated_archive() {
        init_tracing();
        let bytes = encode(&sample(), ArchiveFormat::Packed).expect("Failed to encode");

        for len in [bytes.len() - 1, HEADER_LEN - 1, 0] {
            assert!(
                matches!(
                    decode(&bytes[..len], ArchiveFormat::Packed),
                    Err(ArchiveError::InvalidFormat(_))
                ),
                "length {len}"
            );
        }
    }
}
