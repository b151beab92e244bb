use image::{GrayImage, Luma};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::builder::QR;
use crate::common::{
    error::{QRError, QRResult},
    metadata::Color,
};

// Render
//------------------------------------------------------------------------------

impl QR {
    /// Rasterizes onto a square canvas of `pixel_size` pixels. Each module is
    /// `pixel_size / width` pixels wide and the symbol is centred, leftover
    /// pixels split evenly as margin.
    pub fn to_image(&self, pixel_size: u32) -> QRResult<GrayImage> {
        let w = self.width() as u32;
        let module_sz = pixel_size / w;
        if module_sz == 0 {
            return Err(QRError::CanvasTooSmall);
        }
        let margin = (pixel_size - module_sz * w) / 2;

        let mut canvas = GrayImage::from_pixel(pixel_size, pixel_size, Luma([255]));
        for r in 0..w {
            for c in 0..w {
                if !self.is_dark(r as usize, c as usize) {
                    continue;
                }
                let x = (margin + c * module_sz) as i32;
                let y = (margin + r * module_sz) as i32;
                let rect = Rect::at(x, y).of_size(module_sz, module_sz);
                draw_filled_rect_mut(&mut canvas, rect, Luma([0]));
            }
        }

        Ok(canvas)
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = self.width() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;

                let clr: Color = *self.get(r, c);
                canvas.push(clr.select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}


// Global constants
//------------------------------------------------------------------------------

const QUIET_ZONE: usize = 4;
