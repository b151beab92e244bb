use super::metadata::Version;

// Reserved mask
//------------------------------------------------------------------------------

/// Cells the data filler must leave alone. The finder corners are reserved as
/// whole bounding boxes, including the format info strips; alignment patterns
/// are not reserved at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedMask {
    grid: Vec<bool>,
    w: usize,
}

impl ReservedMask {
    pub fn new(ver: Version) -> Self {
        let w = ver.width();
        let dark_module = ver.dark_module();
        let mut grid = vec![false; w * w];
        for r in 0..w as i16 {
            for c in 0..w as i16 {
                grid[r as usize * w + c as usize] = Self::is_reserved(w as i16, dark_module, r, c);
            }
        }
        Self { grid, w }
    }

    fn is_reserved(w: i16, dark_module: (i16, i16), r: i16, c: i16) -> bool {
        // Top left finder & format info
        if r < 9 && c < 9 {
            return true;
        }

        // Top right finder & format info
        if r < 9 && c >= w - 8 {
            return true;
        }

        // Bottom left finder & format info
        if r >= w - 8 && c < 9 {
            return true;
        }

        // Timing patterns
        if r == 6 || c == 6 {
            return true;
        }

        (r, c) == dark_module
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn contains(&self, r: i16, c: i16) -> bool {
        let w = self.w as i16;
        debug_assert!(0 <= r && r < w, "Row out of bounds: {r}");
        debug_assert!(0 <= c && c < w, "Column out of bounds: {c}");

        self.grid[r as usize * self.w + c as usize]
    }

    pub fn free_count(&self) -> usize {
        self.grid.iter().filter(|&&r| !r).count()
    }

    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for row in self.grid.chunks(self.w) {
            res.extend(row.iter().map(|&r| if r { '#' } else { '.' }));
            res.push('\n');
        }
        res
    }
}
