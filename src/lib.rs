//! # qrsketch
//!
//! Lays out QR-style symbol matrices for short texts. The crate covers the
//! geometric half of a QR encoder: it picks a symbol version from the text
//! length, stamps the function patterns, writes a byte mode bitstream and
//! places it along the standard zigzag path.
//!
//! Error correction codewords, masking and format information are not
//! computed, so the result looks like a QR code without being decodable.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrsketch::{ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("HELLO").ec_level(ECLevel::L).build();
//! assert_eq!(qr.width(), 21);
//!
//! let matrix = qr.to_matrix(); // matrix[row][col], true is dark
//! assert!(matrix[0][0]);
//!
//! let img = qr.to_image(210)?;
//! assert_eq!(img.dimensions(), (210, 210));
//! # Ok(())
//! # }
//! ```
//!
//! ## Versions
//!
//! Versions 1 to 5 (21x21 to 37x37 modules) are chosen by text length in
//! UTF-16 code units: up to 17, 32, 53 and 78 units map to versions 1 to 4,
//! anything longer to version 5. Text that doesn't fit version 5 is cut off
//! and the cut is reported through [`QR::stats`].
//!
//! ## Error Correction Levels
//!
//! `L`, `M`, `Q` and `H` only select the data capacity of the symbol.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod render;

pub use builder::{build_matrix, place_fixed_patterns, Module, QRBuilder, QR};
pub use common::bitstream::BitStream;
pub use common::codec::{encode, Encoded, EncodingStats};
pub use common::error::{QRError, QRResult};
pub use common::iter::ZigZag;
pub use common::metadata::{select_version, Color, ECLevel, Version};
pub use common::reserved::ReservedMask;
