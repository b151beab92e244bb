use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use super::error::{QRError, QRResult};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Version
//------------------------------------------------------------------------------

/// Symbol size class. Only versions 1 through 5 are laid out.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(usize);

impl Version {
    pub fn new(v: usize) -> QRResult<Self> {
        if !(1..=5).contains(&v) {
            return Err(QRError::InvalidVersion);
        }
        Ok(Self(v))
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub const fn dark_module(self) -> (i16, i16) {
        (4 * self.0 as i16 + 9, 8)
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 - 1]
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        DATA_CODEWORDS[self.0 - 1][ecl as usize]
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Picks the version from the text length in UTF-16 code units. Texts longer
/// than the version 5 threshold still get version 5; the surplus is dropped by
/// the encoder.
pub fn select_version(text: &str) -> Version {
    let len = text.encode_utf16().count();
    let v = VERSION_THRESHOLDS.iter().position(|&t| len <= t).map_or(5, |i| i + 1);
    Version(v)
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl TryFrom<char> for ECLevel {
    type Error = QRError;

    fn try_from(c: char) -> QRResult<Self> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Self::L),
            'M' => Ok(Self::M),
            'Q' => Ok(Self::Q),
            'H' => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(QRError::InvalidECLevel),
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}


// Global constants
//------------------------------------------------------------------------------

static VERSION_THRESHOLDS: [usize; 4] = [17, 32, 53, 78];

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 5] = [&[], &[6, 18], &[6, 22], &[6, 26], &[6, 30]];

static DATA_CODEWORDS: [[usize; 4]; 5] = [
    [19, 16, 13, 9],
    [34, 28, 22, 16],
    [55, 44, 34, 26],
    [80, 64, 48, 36],
    [108, 86, 62, 46],
];
