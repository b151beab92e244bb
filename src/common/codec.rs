use super::bitstream::BitStream;
use super::metadata::{ECLevel, Version};

// Encoded data
//------------------------------------------------------------------------------

/// Byte mode bitstream sized to a version's capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bits: BitStream,
    pub stats: EncodingStats,
}

/// Record of whatever had to be dropped to fit the stream into capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingStats {
    pub capacity: usize,
    // Header, payload & terminator bits before padding
    pub payload_len: usize,
    // Bits of the unpadded stream cut off to fit capacity
    pub truncated_bits: usize,
    // Character count didn't fit the 8 bit count field
    pub count_overflow: bool,
    // Code units wider than 8 bits
    pub lossy_units: usize,
}

impl EncodingStats {
    pub fn is_degraded(&self) -> bool {
        self.truncated_bits > 0 || self.count_overflow || self.lossy_units > 0
    }
}

// Encoder
//------------------------------------------------------------------------------

/// Encodes text in byte mode: mode indicator, 8 bit count, one byte per UTF-16
/// code unit and a terminator, then pad bytes up to capacity. The stream is
/// truncated to exactly the capacity afterwards, so overlong text loses its tail.
pub fn encode(text: &str, version: Version, ecl: ECLevel) -> Encoded {
    let capacity = version.data_bit_capacity(ecl);
    let units = text.encode_utf16().collect::<Vec<_>>();
    let char_count = units.len();

    let mut bits = BitStream::with_capacity(capacity.max(16 + (char_count << 3)));
    bits.push_bits(MODE_INDICATOR, MODE_INDICATOR_LEN);
    bits.push_bits(char_count as u8, CHAR_COUNT_LEN);

    let mut lossy_units = 0;
    for &u in &units {
        if u > 0xff {
            lossy_units += 1;
        }
        bits.push_bits(u as u8, 8);
    }
    bits.push_bits(0, TERMINATOR_LEN);

    let payload_len = bits.len();
    push_padding(&mut bits, capacity);
    bits.truncate(capacity);

    let stats = EncodingStats {
        capacity,
        payload_len,
        truncated_bits: payload_len.saturating_sub(capacity),
        count_overflow: char_count > u8::MAX as usize,
        lossy_units,
    };
    Encoded { bits, stats }
}

fn push_padding(bits: &mut BitStream, capacity: usize) {
    while bits.len() < capacity {
        let pad = if bits.len() % 16 == 0 { PADDING_CODEWORDS[0] } else { PADDING_CODEWORDS[1] };
        bits.push_bits(pad, 8);
    }
}


// Global constants
//------------------------------------------------------------------------------

static MODE_INDICATOR: u8 = 0b0100;

static MODE_INDICATOR_LEN: usize = 4;

static CHAR_COUNT_LEN: usize = 8;

static TERMINATOR_LEN: usize = 4;

static PADDING_CODEWORDS: [u8; 2] = [0b11101100, 0b00010001];
