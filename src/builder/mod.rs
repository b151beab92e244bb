mod qr;

pub use qr::{Module, QR};

use crate::common::{
    codec::encode,
    debug::debug_log,
    metadata::{select_version, ECLevel, Version},
    reserved::ReservedMask,
};

pub struct QRBuilder<'a> {
    text: &'a str,
    ec_level: ECLevel,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, ec_level: ECLevel::M }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {}, Ec level: {:?} }}",
            *select_version(self.text),
            self.ec_level
        )
    }
}

#[cfg(test)]
mod qrbuilder_util_tests {
    use super::QRBuilder;
    use crate::common::ECLevel;

    #[test]
    fn test_metadata() {
        let mut qr_builder = QRBuilder::new("Hello, world!");
        qr_builder.ec_level(ECLevel::L);
        assert_eq!(qr_builder.metadata(), "{ Version: 1, Ec level: L }");
        let long = "x".repeat(60);
        qr_builder.text(&long).ec_level(ECLevel::H);
        assert_eq!(qr_builder.metadata(), "{ Version: 4, Ec level: H }");
    }
}

/// Stamps the function patterns for `version` on an empty symbol and builds
/// the matching reserved mask.
pub fn place_fixed_patterns(version: Version, ec_level: ECLevel) -> (QR, ReservedMask) {
    let mut qr = QR::new(version, ec_level);
    qr.draw_all_function_patterns();
    (qr, ReservedMask::new(version))
}

impl QRBuilder<'_> {
    /// Lays out the symbol. Never fails: text beyond the version 5 capacity
    /// is cut off, see [`QR::stats`].
    pub fn build(&self) -> QR {
        debug_log!("Generating QR {}...", self.metadata());

        let version = select_version(self.text);

        debug_log!("Drawing functional patterns...");
        let (mut qr, mask) = place_fixed_patterns(version, self.ec_level);

        debug_log!("Encoding data...");
        let encoded = encode(self.text, version, self.ec_level);
        let stats = encoded.stats;
        if stats.truncated_bits > 0 {
            debug_log!(
                "Payload of {} bits exceeds capacity {}, dropped {} bits",
                stats.payload_len,
                stats.capacity,
                stats.truncated_bits
            );
        }
        if stats.count_overflow {
            debug_log!("Character count doesn't fit the 8 bit count field");
        }
        if stats.lossy_units > 0 {
            debug_log!("{} code units wider than 8 bits were cut to their low byte", stats.lossy_units);
        }

        debug_log!("Drawing encoding region...");
        let placed = qr.draw_encoding_region(&mask, &encoded.bits);
        debug_assert_eq!(placed, encoded.bits.len(), "Not every bit found a free module");
        qr.set_stats(stats);

        debug_log!("QR generated: {}, {} bits placed", qr.metadata(), placed);
        qr
    }
}

/// Builds the symbol for `text` and returns it as a row-major boolean grid.
pub fn build_matrix(text: &str, ec_level: ECLevel) -> Vec<Vec<bool>> {
    QRBuilder::new(text).ec_level(ec_level).build().to_matrix()
}
