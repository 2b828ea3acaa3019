//! Variable-length integer and string encoding used by the extinfo protocol.
//!
//! Integers use the cube "compressed int" format:
//!
//! | first byte | payload                     | range               |
//! |------------|-----------------------------|---------------------|
//! | `0x80`     | 2 bytes LE, **unsigned**    | `0..=65535`         |
//! | `0x81`     | 4 bytes LE, signed          | full `i32`          |
//! | other      | the byte itself, signed     | `-126..=127`        |
//!
//! The two-byte form is not sign-extended. Servers rely on that for values
//! above `i16::MAX`, so it must stay unsigned.

use bytes::{Buf, BufMut};

use crate::cubecode;
use crate::error::ProtoError;

/// Marker for the two-byte integer form.
pub const INT_MARKER_16: u8 = 0x80;

/// Marker for the four-byte integer form.
pub const INT_MARKER_32: u8 = 0x81;

/// Read one variable-length integer.
pub fn read_int(buf: &mut impl Buf) -> Result<i32, ProtoError> {
    if !buf.has_remaining() {
        return Err(ProtoError::truncated(1, 0));
    }
    match buf.get_u8() {
        INT_MARKER_16 => {
            if buf.remaining() < 2 {
                return Err(ProtoError::truncated(2, buf.remaining()));
            }
            Ok(i32::from(buf.get_u16_le()))
        }
        INT_MARKER_32 => {
            if buf.remaining() < 4 {
                return Err(ProtoError::truncated(4, buf.remaining()));
            }
            Ok(buf.get_i32_le())
        }
        b => Ok(i32::from(b as i8)),
    }
}

/// Write one variable-length integer in the shortest form that decodes back
/// to `value`.
pub fn write_int(buf: &mut impl BufMut, value: i32) {
    if (-126..=127).contains(&value) {
        buf.put_i8(value as i8);
    } else if (0..=0xFFFF).contains(&value) {
        buf.put_u8(INT_MARKER_16);
        buf.put_u16_le(value as u16);
    } else {
        buf.put_u8(INT_MARKER_32);
        buf.put_i32_le(value);
    }
}

/// Read a null-terminated cube string and sanitize it.
///
/// Each character is sent as a variable-length integer whose low byte
/// indexes the cube charset. The terminator is consumed.
pub fn read_string(buf: &mut impl Buf) -> Result<String, ProtoError> {
    let mut raw = String::new();
    loop {
        let code = read_int(buf)?;
        if code == 0 {
            break;
        }
        raw.push(cubecode::to_char(code as u8));
    }
    Ok(cubecode::sanitize(&raw))
}

/// Write a cube string followed by its terminator.
///
/// Characters without a cube charset mapping are dropped.
pub fn write_string(buf: &mut impl BufMut, s: &str) {
    for code in s.chars().filter_map(cubecode::from_char) {
        write_int(buf, i32::from(code));
    }
    buf.put_u8(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Bytes, BytesMut};

    fn decode(bytes: &'static [u8]) -> Result<i32, ProtoError> {
        read_int(&mut Bytes::from_static(bytes))
    }

    fn encode(value: i32) -> BytesMut {
        let mut buf = BytesMut::new();
        write_int(&mut buf, value);
        buf
    }

    #[test]
    fn single_byte_is_signed() {
        assert_eq!(decode(&[0x00]).unwrap(), 0);
        assert_eq!(decode(&[0x7F]).unwrap(), 127);
        assert_eq!(decode(&[0xFF]).unwrap(), -1);
        assert_eq!(decode(&[0x82]).unwrap(), -126);
        assert_eq!(decode(&[0xF6]).unwrap(), -10);
    }

    #[test]
    fn two_byte_form_is_unsigned() {
        assert_eq!(decode(&[0x80, 0xFF, 0xFF]).unwrap(), 65535);
        assert_eq!(decode(&[0x80, 0x10, 0x0E]).unwrap(), 3600);
        assert_eq!(decode(&[0x80, 0x00, 0x80]).unwrap(), 32768);
    }

    #[test]
    fn four_byte_form_is_signed() {
        assert_eq!(decode(&[0x81, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap(), -1);
        assert_eq!(decode(&[0x81, 0x00, 0x00, 0x01, 0x00]).unwrap(), 65536);
        assert_eq!(
            decode(&[0x81, 0x00, 0x00, 0x00, 0x80]).unwrap(),
            i32::MIN
        );
    }

    #[test]
    fn truncated_forms() {
        assert_eq!(
            decode(&[]).unwrap_err(),
            ProtoError::TruncatedBuffer {
                needed: 1,
                remaining: 0
            }
        );
        assert_eq!(
            decode(&[0x80, 0x01]).unwrap_err(),
            ProtoError::TruncatedBuffer {
                needed: 2,
                remaining: 1
            }
        );
        assert!(decode(&[0x81, 0x01, 0x02, 0x03]).is_err());
    }

    #[test]
    fn encoder_picks_shortest_form() {
        assert_eq!(&encode(5)[..], &[0x05]);
        assert_eq!(&encode(-1)[..], &[0xFF]);
        assert_eq!(&encode(-126)[..], &[0x82]);
        assert_eq!(&encode(128)[..], &[0x80, 0x80, 0x00]);
        assert_eq!(&encode(65535)[..], &[0x80, 0xFF, 0xFF]);
        // -127 and -128 collide with the markers as single bytes
        assert_eq!(&encode(-127)[..], &[0x81, 0x81, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encode(-128).len(), 5);
        assert_eq!(encode(65536).len(), 5);
    }

    #[test]
    fn encoded_values_decode_back() {
        let edges = [65536, -65536, i32::MAX, i32::MIN];
        for value in (-128..=65535).chain(edges) {
            let mut buf = encode(value).freeze();
            assert_eq!(read_int(&mut buf).unwrap(), value, "value {value}");
            assert!(!buf.has_remaining(), "value {value}");
        }
    }

    #[test]
    fn two_byte_form_decodes_whole_range() {
        for value in 0..=u16::MAX {
            let [lo, hi] = value.to_le_bytes();
            let mut buf = Bytes::from(vec![INT_MARKER_16, lo, hi]);
            assert_eq!(read_int(&mut buf).unwrap(), i32::from(value));
        }
        // small values are legal in the long form too
        assert_eq!(decode(&[0x80, 0x05, 0x00]).unwrap(), 5);
    }

    #[test]
    fn string_hi() {
        let mut buf = Bytes::from_static(&[0x68, 0x69, 0x00, 0x05]);
        assert_eq!(read_string(&mut buf).unwrap(), "hi");
        // terminator consumed, next field untouched
        assert_eq!(read_int(&mut buf).unwrap(), 5);
    }

    #[test]
    fn string_strips_color_codes() {
        // "\f3hi\f7!" as codepoints
        let mut buf = Bytes::from_static(&[0x0C, b'3', b'h', b'i', 0x0C, b'7', b'!', 0x00]);
        assert_eq!(read_string(&mut buf).unwrap(), "hi!");
    }

    #[test]
    fn string_uses_cube_charset() {
        let mut buf = Bytes::from_static(&[0x01, b'b', 0x00]);
        assert_eq!(read_string(&mut buf).unwrap(), "Àb");
    }

    #[test]
    fn string_without_terminator_fails() {
        let mut buf = Bytes::from_static(b"abc");
        assert!(matches!(
            read_string(&mut buf),
            Err(ProtoError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn string_roundtrip() {
        let mut buf = BytesMut::new();
        write_string(&mut buf, "good Çé");
        assert_eq!(read_string(&mut buf.freeze()).unwrap(), "good Çé");
    }

    #[test]
    fn string_empty() {
        let mut buf = BytesMut::new();
        write_string(&mut buf, "");
        assert_eq!(&buf[..], &[0x00]);
        assert_eq!(read_string(&mut buf.freeze()).unwrap(), "");
    }
}
