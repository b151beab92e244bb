// Bit stream
//------------------------------------------------------------------------------

/// Growable MSB-first bit buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn push_bits(&mut self, bits: u8, size: usize) {
        debug_assert!(size <= 8, "Bit count exceeds a byte: Size {size}");
        debug_assert!(
            size >= (8 - bits.leading_zeros()) as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );

        if size == 0 {
            return;
        }

        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        let pos = self.len >> 3;

        if offset + size <= 8 {
            self.data[pos] |= bits << (8 - size - offset);
        } else {
            self.data[pos] |= bits >> (size + offset - 8);
            self.data.push(bits << (16 - size - offset));
        }

        self.len += size;
    }

    pub fn push(&mut self, bit: bool) {
        self.push_bits(bit as u8, 1);
    }

    pub fn get(&self, i: usize) -> Option<bool> {
        if i >= self.len {
            return None;
        }
        Some(self.data[i >> 3] & (0b10000000 >> (i & 7)) != 0)
    }

    /// Drops every bit past `len`. No-op if the stream is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.data.truncate((len + 7) >> 3);
        let offset = len & 7;
        if offset > 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= !(0xff >> offset);
            }
        }
        self.len = len;
    }

    pub fn iter(&self) -> BitIter<'_> {
        BitIter { stream: self, cursor: 0 }
    }

    pub fn to_bit_string(&self) -> String {
        self.iter().map(|b| if b { '1' } else { '0' }).collect()
    }
}

// Iterator over the bits of a stream
//------------------------------------------------------------------------------

pub struct BitIter<'a> {
    stream: &'a BitStream,
    cursor: usize,
}

impl Iterator for BitIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.stream.get(self.cursor)?;
        self.cursor += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.stream.len - self.cursor;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for BitIter<'_> {}

impl<'a> IntoIterator for &'a BitStream {
    type Item = bool;
    type IntoIter = BitIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
