use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks the symbol in two-column strips from the right edge, bottom-up first
/// and flipping direction every strip. Within a row the right column comes
/// first. The vertical timing column is stepped over.
#[derive(Clone)]
pub struct ZigZag {
    w: i16,
    // Right column of the current strip
    c: i16,
    // Position within the strip
    i: i16,
    upward: bool,
}

impl ZigZag {
    pub const fn new(ver: Version) -> Self {
        let w = ver.width() as i16;
        Self { w, c: w - 1, i: 0, upward: true }
    }
}

impl Iterator for ZigZag {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.c <= 0 {
            return None;
        }

        let r = if self.upward { self.w - 1 - (self.i >> 1) } else { self.i >> 1 };
        let c = self.c - (self.i & 1);

        self.i += 1;
        if self.i == self.w << 1 {
            self.i = 0;
            self.upward = !self.upward;
            self.c -= 2;
            if self.c == VERT_TIMING_COL {
                self.c -= 1;
            }
        }

        Some((r, c))
    }
}

#[cfg(test)]
mod iter_tests {
    use std::collections::HashSet;

    use super::ZigZag;
    use crate::common::metadata::Version;

    #[test]
    fn test_start_order() {
        let coords = ZigZag::new(Version::new(1).unwrap()).take(6).collect::<Vec<_>>();
        assert_eq!(coords, vec![(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]);
    }

    #[test]
    fn test_direction_flips_per_strip() {
        let coords = ZigZag::new(Version::new(1).unwrap()).skip(40).take(4).collect::<Vec<_>>();
        assert_eq!(coords, vec![(0, 20), (0, 19), (0, 18), (0, 17)]);
    }

    #[test]
    fn test_skips_timing_column() {
        let ver = Version::new(1).unwrap();
        let strips = ZigZag::new(ver)
            .step_by(42)
            .map(|(_, c)| c)
            .collect::<Vec<_>>();
        assert_eq!(strips, vec![20, 18, 16, 14, 12, 10, 8, 5, 3, 1]);

        // Strip left of the timing column runs downward, the next one upward
        let mut it = ZigZag::new(ver).skip(42 * 7);
        assert_eq!(it.next(), Some((0, 5)));
        assert_eq!(it.nth(41), Some((20, 3)));
    }

    #[test]
    fn test_covers_every_cell_but_timing_column() {
        for v in 1..=5 {
            let ver = Version::new(v).unwrap();
            let w = ver.width() as i16;
            let coords = ZigZag::new(ver).collect::<Vec<_>>();
            let unique = coords.iter().copied().collect::<HashSet<_>>();
            assert_eq!(coords.len(), (w * (w - 1)) as usize);
            assert_eq!(unique.len(), coords.len());
            assert!(coords.iter().all(|&(r, c)| (0..w).contains(&r) && c != 6 && (0..w).contains(&c)));
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

const VERT_TIMING_COL: i16 = 6;
