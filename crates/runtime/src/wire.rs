//! Wire-level constants of the protobuf binary encoding.

use std::fmt;

/// Lowest legal field number.
pub const MIN_FIELD_NUMBER: u32 = 1;
/// Highest legal field number (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// The 3-bit suffix of a field tag naming how the value is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::LengthDelimited => "length-delimited",
            WireType::StartGroup => "start-group",
            WireType::EndGroup => "end-group",
            WireType::Fixed32 => "fixed32",
        };
        f.write_str(name)
    }
}

/// Combines a field number and wire type into a tag value.
#[inline]
pub fn make_tag(number: u32, wire_type: WireType) -> u32 {
    (number << 3) | wire_type as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(make_tag(1, WireType::Varint), 0x08);
        assert_eq!(make_tag(2, WireType::LengthDelimited), 0x12);
        assert_eq!(make_tag(5, WireType::Fixed32), 0x2d);
        assert_eq!(make_tag(MAX_FIELD_NUMBER, WireType::Fixed32), 0xffff_fffd);
    }

    #[test]
    fn wire_type_bits() {
        for bits in 0..=5u8 {
            assert_eq!(WireType::from_u8(bits).map(|w| w as u8), Some(bits));
        }
        assert_eq!(WireType::from_u8(6), None);
        assert_eq!(WireType::from_u8(7), None);
    }
}
