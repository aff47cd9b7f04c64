//! Writer/Reader roundtrip matrix and varint edge cases for the buffers crate.

use vision_proto_buffers::varint::{
    varint_size, zigzag_decode_32, zigzag_decode_64, zigzag_encode_32, zigzag_encode_64,
};
use vision_proto_buffers::{BufferError, Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7F);
    w.u8(0xFF);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0x00));
    assert_eq!(r.u8(), Ok(0x7F));
    assert_eq!(r.u8(), Ok(0xFF));
}

#[test]
fn roundtrip_fixed32() {
    let mut w = Writer::new();
    w.u32_le(0);
    w.u32_le(0x01020304);
    w.u32_le(u32::MAX);
    w.i32_le(i32::MIN);
    w.i32_le(-123456);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.u32_le(), Ok(0));
    assert_eq!(r.u32_le(), Ok(0x01020304));
    assert_eq!(r.u32_le(), Ok(u32::MAX));
    assert_eq!(r.i32_le(), Ok(i32::MIN));
    assert_eq!(r.i32_le(), Ok(-123456));
    assert!(r.is_empty());
}

#[test]
fn roundtrip_fixed64() {
    let mut w = Writer::new();
    w.u64_le(0x0102030405060708);
    w.i64_le(-9_999_999_999);
    let data = w.flush();
    assert_eq!(&data[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
    let mut r = Reader::new(&data);
    assert_eq!(r.u64_le(), Ok(0x0102030405060708));
    assert_eq!(r.i64_le(), Ok(-9_999_999_999));
}

#[test]
fn roundtrip_floats() {
    let mut w = Writer::new();
    w.f32_le(1.5);
    w.f32_le(-0.25);
    w.f64_le(std::f64::consts::PI);
    w.f64_le(f64::INFINITY);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.f32_le(), Ok(1.5));
    assert_eq!(r.f32_le(), Ok(-0.25));
    assert_eq!(r.f64_le(), Ok(std::f64::consts::PI));
    assert_eq!(r.f64_le(), Ok(f64::INFINITY));
}

#[test]
fn roundtrip_varints() {
    let values = [
        0u64,
        1,
        127,
        128,
        300,
        16_383,
        16_384,
        u32::MAX as u64,
        (-1i64) as u64,
        u64::MAX,
    ];
    let mut w = Writer::new();
    for v in values {
        w.varint(v);
    }
    let expected_len: usize = values.iter().map(|v| varint_size(*v)).sum();
    let data = w.flush();
    assert_eq!(data.len(), expected_len);
    let mut r = Reader::new(&data);
    for v in values {
        assert_eq!(r.varint(), Ok(v));
    }
    assert!(r.is_empty());
}

#[test]
fn roundtrip_utf8_and_raw() {
    let mut w = Writer::new();
    w.utf8("héllo");
    w.buf(&[0xde, 0xad]);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.utf8("héllo".len()), Ok("héllo"));
    assert_eq!(r.buf(2), Ok(&[0xde, 0xad][..]));
}

// ---------------------------------------------------------------------------
// Bounds checking
// ---------------------------------------------------------------------------

#[test]
fn reads_past_end_fail_without_panicking() {
    let data = [0x01];
    let mut r = Reader::new(&data);
    assert_eq!(r.u64_le(), Err(BufferError::EndOfBuffer));
    assert_eq!(r.f32_le(), Err(BufferError::EndOfBuffer));
    assert_eq!(r.buf(2), Err(BufferError::EndOfBuffer));
    assert_eq!(r.peek(), Ok(0x01));
    assert_eq!(r.u8(), Ok(0x01));
    assert_eq!(r.peek(), Err(BufferError::EndOfBuffer));
}

#[test]
fn from_slice_respects_end_bound() {
    let data = [1, 2, 3, 4, 5];
    let mut r = Reader::from_slice(&data, 1, 3);
    assert_eq!(r.size(), 2);
    assert_eq!(r.u8(), Ok(2));
    assert_eq!(r.u8(), Ok(3));
    assert_eq!(r.u8(), Err(BufferError::EndOfBuffer));
}

#[test]
fn from_slice_clamps_out_of_range_bounds() {
    let data = [1, 2];
    let r = Reader::from_slice(&data, 5, 10);
    assert_eq!(r.size(), 0);
}

#[test]
fn reset_rewinds_to_new_input() {
    let a = [1, 2];
    let b = [9];
    let mut r = Reader::new(&a);
    r.skip(2).unwrap();
    r.reset(&b);
    assert_eq!(r.u8(), Ok(9));
}

// ---------------------------------------------------------------------------
// ZigZag
// ---------------------------------------------------------------------------

#[test]
fn zigzag_known_vectors() {
    let cases32 = [(0, 0u32), (-1, 1), (1, 2), (-2, 3), (2, 4), (-64, 127), (64, 128)];
    for (signed, unsigned) in cases32 {
        assert_eq!(zigzag_encode_32(signed), unsigned);
        assert_eq!(zigzag_decode_32(unsigned), signed);
    }
    let cases64 = [(0i64, 0u64), (-1, 1), (1, 2), (i64::MAX, u64::MAX - 1)];
    for (signed, unsigned) in cases64 {
        assert_eq!(zigzag_encode_64(signed), unsigned);
        assert_eq!(zigzag_decode_64(unsigned), signed);
    }
}
