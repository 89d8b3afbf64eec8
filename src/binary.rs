//! Binary SAC layout: a 632-byte header followed by `npts` 4-byte floats.
//!
//! The header is 70 floats, 40 integers and 192 bytes of text, all in one
//! byte order. The byte order of a file is inferred from its header version
//! word, which must be one of [`VALID_NVHDR`] when read the right way round.

use crate::header::{
    NUM_FLOATS, NUM_INTS, NUM_STRING_SLOTS, STRING_SLOT_WIDTH, SacHeader, VALID_NVHDR, const_slot,
};
use crate::types::ByteOrder;
use crate::{Result, SacError};

/// Size in bytes of the float header block.
pub const FLOAT_BLOCK_SIZE: usize = NUM_FLOATS * 4;
/// Size in bytes of the integer header block.
pub const INT_BLOCK_SIZE: usize = NUM_INTS * 4;
/// Size in bytes of the string header block.
pub const STRING_BLOCK_SIZE: usize = NUM_STRING_SLOTS * STRING_SLOT_WIDTH;
/// Size in bytes of the full binary header.
pub const HEADER_SIZE: usize = FLOAT_BLOCK_SIZE + INT_BLOCK_SIZE + STRING_BLOCK_SIZE;

const NVHDR_OFFSET: usize = FLOAT_BLOCK_SIZE + const_slot("nvhdr") * 4;

fn read_word(data: &[u8], offset: usize) -> [u8; 4] {
    [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]
}

fn read_i32(data: &[u8], offset: usize, byte_order: ByteOrder) -> i32 {
    let bytes = read_word(data, offset);
    match byte_order {
        ByteOrder::Big => i32::from_be_bytes(bytes),
        ByteOrder::Little => i32::from_le_bytes(bytes),
    }
}

fn read_f32(data: &[u8], offset: usize, byte_order: ByteOrder) -> f32 {
    let bytes = read_word(data, offset);
    match byte_order {
        ByteOrder::Big => f32::from_be_bytes(bytes),
        ByteOrder::Little => f32::from_le_bytes(bytes),
    }
}

fn check_length(data: &[u8], expected: usize) -> Result<()> {
    if data.len() < expected {
        return Err(SacError::DataTooShort {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// True when the header version word is valid under `byte_order`.
pub fn is_valid_byte_order(data: &[u8], byte_order: ByteOrder) -> bool {
    data.len() >= NVHDR_OFFSET + 4
        && VALID_NVHDR.contains(&read_i32(data, NVHDR_OFFSET, byte_order))
}

/// Infer the byte order of a binary header, trying little-endian first.
pub fn detect_byte_order(data: &[u8]) -> Result<ByteOrder> {
    check_length(data, HEADER_SIZE)?;
    for byte_order in [ByteOrder::Little, ByteOrder::Big] {
        if is_valid_byte_order(data, byte_order) {
            log::debug!("detected {} header", byte_order.describe());
            return Ok(byte_order);
        }
    }
    Err(SacError::InvalidByteOrder("either byte order"))
}

/// Decode the header record.
///
/// With `byte_order` set, the version word must validate under that order;
/// otherwise the order is detected.
pub fn decode_header(data: &[u8], byte_order: Option<ByteOrder>) -> Result<(SacHeader, ByteOrder)> {
    check_length(data, HEADER_SIZE)?;
    let byte_order = match byte_order {
        Some(bo) if is_valid_byte_order(data, bo) => bo,
        Some(bo) => return Err(SacError::InvalidByteOrder(bo.describe())),
        None => detect_byte_order(data)?,
    };

    let mut header = SacHeader::null();
    for (i, v) in header.floats.iter_mut().enumerate() {
        *v = read_f32(data, i * 4, byte_order);
    }
    for (i, v) in header.ints.iter_mut().enumerate() {
        *v = read_i32(data, FLOAT_BLOCK_SIZE + i * 4, byte_order);
    }
    let strings = &data[FLOAT_BLOCK_SIZE + INT_BLOCK_SIZE..HEADER_SIZE];
    for (slot, chunk) in header
        .strings
        .iter_mut()
        .zip(strings.chunks_exact(STRING_SLOT_WIDTH))
    {
        slot.copy_from_slice(chunk);
    }

    Ok((header, byte_order))
}

/// Encode the header record into exactly [`HEADER_SIZE`] bytes.
pub fn encode_header(header: &SacHeader, byte_order: ByteOrder) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    for &v in &header.floats {
        match byte_order {
            ByteOrder::Big => buf.extend_from_slice(&v.to_be_bytes()),
            ByteOrder::Little => buf.extend_from_slice(&v.to_le_bytes()),
        }
    }
    for &v in &header.ints {
        match byte_order {
            ByteOrder::Big => buf.extend_from_slice(&v.to_be_bytes()),
            ByteOrder::Little => buf.extend_from_slice(&v.to_le_bytes()),
        }
    }
    for slot in &header.strings {
        buf.extend_from_slice(slot);
    }
    buf
}

/// Decode `npts` samples from the bytes following the header.
pub fn decode_samples(data: &[u8], npts: usize, byte_order: ByteOrder) -> Result<Vec<f32>> {
    let needed = npts * 4;
    check_length(data, needed)?;
    let mut samples = Vec::with_capacity(npts);
    for i in 0..npts {
        samples.push(read_f32(data, i * 4, byte_order));
    }
    Ok(samples)
}

/// Encode samples as 4-byte floats.
pub fn encode_samples(samples: &[f32], byte_order: ByteOrder) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 4);
    for &val in samples {
        match byte_order {
            ByteOrder::Big => data.extend_from_slice(&val.to_be_bytes()),
            ByteOrder::Little => data.extend_from_slice(&val.to_le_bytes()),
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{FNULL, INULL};

    fn sample_header() -> SacHeader {
        let mut h = SacHeader::null();
        h.floats[0] = 0.01;
        h.floats[5] = -1.5;
        h.ints[6] = 6;
        h.ints[9] = 3;
        h.set_str_at(0, 8, Some("ANMO"));
        h.set_str_at(1, 16, Some("Tohoku"));
        h
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(HEADER_SIZE, 632);
        assert_eq!(NVHDR_OFFSET, 304);
    }

    #[test]
    fn test_header_roundtrip_both_orders() {
        let h = sample_header();
        for bo in [ByteOrder::Little, ByteOrder::Big] {
            let bytes = encode_header(&h, bo);
            assert_eq!(bytes.len(), HEADER_SIZE);
            let (decoded, detected) = decode_header(&bytes, None).unwrap();
            assert_eq!(detected, bo);
            assert_eq!(decoded, h);
        }
    }

    #[test]
    fn test_field_offsets() {
        let bytes = encode_header(&sample_header(), ByteOrder::Big);
        assert_eq!(&bytes[0..4], &0.01f32.to_be_bytes());
        assert_eq!(&bytes[4..8], &FNULL.to_be_bytes());
        assert_eq!(&bytes[304..308], &6i32.to_be_bytes());
        assert_eq!(&bytes[316..320], &3i32.to_be_bytes());
        assert_eq!(&bytes[276..280], &FNULL.to_be_bytes());
        assert_eq!(&bytes[280..284], &INULL.to_be_bytes());
        assert_eq!(&bytes[440..448], b"ANMO    ");
        assert_eq!(&bytes[448..464], b"Tohoku          ");
    }

    #[test]
    fn test_explicit_wrong_byte_order_fails() {
        let bytes = encode_header(&sample_header(), ByteOrder::Little);
        assert!(matches!(
            decode_header(&bytes, Some(ByteOrder::Big)),
            Err(SacError::InvalidByteOrder("big-endian"))
        ));
        assert!(decode_header(&bytes, Some(ByteOrder::Little)).is_ok());
    }

    #[test]
    fn test_invalid_version_fails_detection() {
        let mut h = sample_header();
        h.ints[6] = 99;
        let bytes = encode_header(&h, ByteOrder::Little);
        assert!(matches!(
            detect_byte_order(&bytes),
            Err(SacError::InvalidByteOrder("either byte order"))
        ));
    }

    #[test]
    fn test_short_header() {
        let err = decode_header(&[0u8; 100], None).unwrap_err();
        assert!(matches!(
            err,
            SacError::DataTooShort {
                expected: 632,
                actual: 100
            }
        ));
    }

    #[test]
    fn test_samples() {
        let samples = vec![1.0f32, -2.5, 3.25e-8];
        for bo in [ByteOrder::Little, ByteOrder::Big] {
            let bytes = encode_samples(&samples, bo);
            assert_eq!(bytes.len(), 12);
            assert_eq!(decode_samples(&bytes, 3, bo).unwrap(), samples);
        }
        assert!(decode_samples(&[0u8; 8], 3, ByteOrder::Little).is_err());
    }
}
