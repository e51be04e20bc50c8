use crate::renderer::{DrawInstruction, Shade};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 0RGB as softbuffer expects it; alpha is dropped.
    #[inline]
    pub fn pack(self) -> u32 {
        (self.b as u32) | ((self.g as u32) << 8) | ((self.r as u32) << 16)
    }
}

/// Colors used to turn draw instructions into pixels.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgba,
    pub wall: Rgba,
    pub wall_dark: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::new(0, 0, 0, 255),
            wall: Rgba::new(255, 0, 0, 255),
            wall_dark: Rgba::new(128, 0, 0, 255),
        }
    }
}

impl Palette {
    pub fn shade(&self, shade: Shade) -> Rgba {
        match shade {
            Shade::Primary => self.wall,
            Shade::Dark => self.wall_dark,
        }
    }
}

/// The drawing primitives the column renderer needs from a target.
pub trait DrawSurface {
    fn set_draw_color(&mut self, color: Rgba);
    /// Fills the whole surface with the current draw color.
    fn clear(&mut self);
    /// Paints column `x` from `y0` to `y1`, both inclusive, in the current color.
    fn draw_vertical_line(&mut self, x: usize, y0: usize, y1: usize);
}

/// CPU-side color buffer, row-major.
pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
    color: u32,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            color: 0,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

impl DrawSurface for Framebuffer {
    fn set_draw_color(&mut self, color: Rgba) {
        self.color = color.pack();
    }

    fn clear(&mut self) {
        self.pixels.fill(self.color);
    }

    fn draw_vertical_line(&mut self, x: usize, y0: usize, y1: usize) {
        if x >= self.width || self.height == 0 {
            return;
        }
        let (mut y0, mut y1) = (y0, y1);
        if y0 > y1 {
            std::mem::swap(&mut y0, &mut y1);
        }
        let y1 = y1.min(self.height - 1);

        let mut idx = y0 * self.width + x;
        for _y in y0..=y1 {
            self.pixels[idx] = self.color;
            idx += self.width;
        }
    }
}

/// Clears `surface` to the background and paints one wall slice per instruction.
pub fn draw_columns<S: DrawSurface>(
    surface: &mut S,
    columns: &[DrawInstruction],
    palette: &Palette,
) {
    surface.set_draw_color(palette.background);
    surface.clear();

    for ins in columns {
        surface.set_draw_color(palette.shade(ins.shade));
        surface.draw_vertical_line(ins.x, ins.top, ins.bottom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_line_is_inclusive_and_clipped() {
        let mut fb = Framebuffer::new(4, 6);
        fb.set_draw_color(Rgba::new(1, 2, 3, 255));
        fb.draw_vertical_line(2, 1, 3);

        let painted = 0x010203;
        for y in 0..6 {
            let expected = if (1..=3).contains(&y) { painted } else { 0 };
            assert_eq!(fb.pixel(2, y), expected, "row {y}");
        }

        fb.draw_vertical_line(0, 4, 100);
        assert_eq!(fb.pixel(0, 5), painted);
        fb.draw_vertical_line(9, 0, 5); // off-surface, ignored
    }

    #[test]
    fn columns_use_their_shade() {
        let mut fb = Framebuffer::new(2, 3);
        let palette = Palette::default();
        let columns = [
            DrawInstruction {
                x: 0,
                top: 1,
                bottom: 1,
                shade: Shade::Primary,
            },
            DrawInstruction {
                x: 1,
                top: 0,
                bottom: 2,
                shade: Shade::Dark,
            },
        ];
        draw_columns(&mut fb, &columns, &palette);

        assert_eq!(fb.pixel(0, 0), 0);
        assert_eq!(fb.pixel(0, 1), 0xFF0000);
        assert_eq!(fb.pixel(0, 2), 0);
        for y in 0..3 {
            assert_eq!(fb.pixel(1, y), 0x800000);
        }
    }
}
