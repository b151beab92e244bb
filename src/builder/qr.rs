use std::ops::Deref;

use crate::common::{
    bitstream::BitStream,
    codec::EncodingStats,
    iter::ZigZag,
    metadata::{Color, ECLevel, Version},
    reserved::ReservedMask,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Data(c) => c,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    stats: Option<EncodingStats>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, stats: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    /// Set once the payload has been placed.
    pub fn stats(&self) -> Option<EncodingStats> {
        self.stats
    }

    pub(crate) fn set_stats(&mut self, stats: EncodingStats) {
        self.stats = Some(stats);
    }

    pub fn metadata(&self) -> String {
        format!("{{ Version: {}, Width: {}, Ec level: {:?} }}", *self.ver, self.w, self.ecl)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    pub fn is_dark(&self, r: usize, c: usize) -> bool {
        matches!(*self.grid[r * self.w + c], Color::Dark)
    }

    /// Row-major boolean grid, `true` for dark modules.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.grid
            .chunks(self.w)
            .map(|row| row.iter().map(|m| matches!(**m, Color::Dark)).collect())
            .collect()
    }

    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        for i in -3..=3 {
            for j in -3..=3 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        qr.draw_finder_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffff.......fffffff\n\
             fFFFFFf.......fFFFFFf\n\
             fFfffFf.......fFfffFf\n\
             fFfffFf.......fFfffFf\n\
             fFfffFf.......fFfffFf\n\
             fFFFFFf.......fFFFFFf\n\
             fffffff.......fffffff\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             fffffff..............\n\
             fFFFFFf..............\n\
             fFfffFf..............\n\
             fFfffFf..............\n\
             fFfffFf..............\n\
             fFFFFFf..............\n\
             fffffff..............\n"
        );
    }
}

// Separators
//------------------------------------------------------------------------------

impl QR {
    fn draw_separators(&mut self) {
        let light = Module::Func(Color::Light);
        for i in 0..8 {
            // Top left
            self.set(7, i, light);
            self.set(i, 7, light);

            // Top right
            self.set(7, -1 - i, light);
            self.set(i, -8, light);

            // Bottom left
            self.set(-8, i, light);
            self.set(-1 - i, 7, light);
        }
    }
}

#[cfg(test)]
mod separator_tests {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_separators() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        qr.draw_finder_patterns();
        qr.draw_separators();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffF.....Ffffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }
}

// Dark module
//------------------------------------------------------------------------------

impl QR {
    fn draw_dark_module(&mut self) {
        let (r, c) = self.ver.dark_module();
        self.set(r, c, Module::Func(Color::Dark));
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        let (off, last) = (6, w - 9);
        self.draw_line(off, 8, off, last);
        self.draw_line(8, off, last, off);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                let m =
                    if j & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(r1, j, m);
            }
        } else {
            for i in r1..=r2 {
                let m =
                    if i & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(i, c1, m);
            }
        }
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_timing_pattern_1() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        qr.draw_timing_pattern();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........fFfFf........\n\
             .....................\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n"
        );
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        if (r == 6 && (c == 6 || c - w == -7)) || (r - w == -7 && c == 6) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                let (ri, cj) = (r + i, c + j);
                if !(0..w).contains(&ri) || !(0..w).contains(&cj) {
                    continue;
                }
                self.set(
                    ri,
                    cj,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod alignment_pattern_tests {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_alignment_pattern_1() {
        let mut qr = QR::new(Version::new(1).unwrap(), ECLevel::L);
        qr.draw_alignment_patterns();
        assert!(qr.grid().iter().all(|m| *m == crate::builder::Module::Empty));
    }

    #[test]
    fn test_alignment_pattern_3() {
        let mut qr = QR::new(Version::new(3).unwrap(), ECLevel::L);
        qr.draw_finder_patterns();
        qr.draw_separators();
        qr.draw_alignment_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............Ffffffff\n\
             fFFFFFfF.............FfFFFFFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFFFFFfF.............FfFFFFFf\n\
             fffffffF.............Ffffffff\n\
             FFFFFFFF.............FFFFFFFF\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             ....................fffff....\n\
             FFFFFFFF............fFFFf....\n\
             fffffffF............fFfFf....\n\
             fFFFFFfF............fFFFf....\n\
             fFfffFfF............fffff....\n\
             fFfffFfF.....................\n\
             fFfffFfF.....................\n\
             fFFFFFfF.....................\n\
             fffffffF.....................\n"
        );
    }

    #[test]
    fn test_alignment_pattern_clipped() {
        let mut qr = QR::new(Version::new(2).unwrap(), ECLevel::L);
        qr.draw_alignment_pattern_at(23, 23);
        // Only the in-bounds 4x4 corner of the 5x5 pattern is drawn
        let drawn = qr.grid().iter().filter(|m| **m != crate::builder::Module::Empty).count();
        assert_eq!(drawn, 16);
    }
}

// Version info
//------------------------------------------------------------------------------

impl QR {
    /// Version info only exists from version 7 upward, which is never selected.
    fn draw_version_info(&mut self) {
        debug_assert!(*self.ver < 7, "Version info is not laid out");
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_separators();
        self.draw_dark_module();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
        self.draw_version_info();
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Writes bits along the zigzag path into every cell outside `mask`, in
    /// order. Cells past the end of the stream keep whatever they held.
    /// Returns the number of bits placed.
    pub fn draw_encoding_region(&mut self, mask: &ReservedMask, payload: &BitStream) -> usize {
        debug_assert_eq!(mask.width(), self.w, "Mask width doesn't match symbol width");

        let mut bits = payload.iter();
        let mut placed = 0;
        for (r, c) in ZigZag::new(self.ver) {
            if mask.contains(r, c) {
                continue;
            }
            let Some(bit) = bits.next() else {
                break;
            };
            self.set(r, c, Module::Data(Color::from(bit)));
            placed += 1;
        }
        placed
    }
}
