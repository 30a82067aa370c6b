//! Monochrome raster canvas and its drawing primitives.

use std::ops::RangeInclusive;

/// Monochrome drawing surface.
///
/// Pixels are stored row-major with the origin at the top left. `true` is a lit
/// (white) pixel, `false` is unlit (black). Every write is bounds checked, so
/// primitives may be handed coordinates that fall partly or wholly outside the
/// canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self { width, height, pixels: vec![false; len] }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, value: bool) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = value;
        }
    }

    /// Out of bounds reads are unlit.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|idx| self.pixels[idx]).unwrap_or(false)
    }

    pub fn fill(&mut self, value: bool) {
        self.pixels.fill(value);
    }

    /// Swaps lit and unlit pixels.
    pub fn invert(&mut self) {
        for pixel in &mut self.pixels {
            *pixel = !*pixel;
        }
    }

    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // `chunks` rejects a zero size; a zero-width canvas has no rows to yield.
        let width = usize::from(self.width).max(1);
        self.pixels.chunks(width)
    }

    pub fn row(&self, y: u16) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        let width = usize::from(self.width);
        let start = usize::from(y) * width;
        Some(&self.pixels[start..start + width])
    }

    /// Copies the lit pixels of `other` with its top left corner at `(x, y)`.
    pub fn blit(&mut self, other: &Canvas, x: i32, y: i32) {
        for (row_index, row) in other.rows().enumerate() {
            for (column, &pixel) in row.iter().enumerate() {
                if pixel {
                    self.set_pixel(x + column as i32, y + row_index as i32, true);
                }
            }
        }
    }

    /// Bresenham line, inclusive of both endpoints.
    ///
    /// The minor coordinate of every step along the major axis is computed
    /// directly, so only the steps that land inside the canvas are visited.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, value: bool) {
        // Always walk in the same direction so swapped endpoints yield the same pixels.
        let (x1, y1, x2, y2) =
            if (x2, y2) < (x1, y1) { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
        let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));

        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = (x2 - x1).signum();
        let sy = (y2 - y1).signum();

        if dx >= dy {
            let Some(steps) = visible_steps(x1, sx, dx, self.width) else {
                return;
            };
            for step in steps {
                let y = y1 + sy * minor_offset(step, dy, dx);
                self.set_pixel_wide(x1 + sx * step, y, value);
            }
        } else {
            let Some(steps) = visible_steps(y1, sy, dy, self.height) else {
                return;
            };
            for step in steps {
                let x = x1 + sx * minor_offset(step, dx, dy);
                self.set_pixel_wide(x, y1 + sy * step, value);
            }
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool, value: bool) {
        if w <= 0 || h <= 0 {
            return;
        }

        let (left, top) = (i64::from(x), i64::from(y));
        let right = left + i64::from(w) - 1;
        let bottom = top + i64::from(h) - 1;

        if filled {
            for py in clip(top, bottom, self.height) {
                self.fill_span(left, right, py, value);
            }
            return;
        }

        self.fill_span(left, right, top, value);
        self.fill_span(left, right, bottom, value);
        for py in clip(top, bottom, self.height) {
            self.set_pixel_wide(left, py, value);
            self.set_pixel_wide(right, py, value);
        }
    }

    /// Midpoint circle outline.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, value: bool) {
        if r < 0 {
            return;
        }

        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
        let (width, height) = (i64::from(self.width), i64::from(self.height));
        if cx + r < 0 || cy + r < 0 || cx - r >= width || cy - r >= height {
            return;
        }

        // Once both offsets exceed the farthest canvas edge no octant point can land inside.
        let reach = [cx, width - 1 - cx, cy, height - 1 - cy]
            .into_iter()
            .map(i64::abs)
            .max()
            .unwrap_or(0);

        let mut x = r;
        let mut y = 0;
        let mut err = 1 - r;

        while x >= y && y <= reach {
            for (px, py) in [
                (cx + x, cy + y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx - y, cy - x),
                (cx + y, cy - x),
                (cx + x, cy - y),
            ] {
                self.set_pixel_wide(px, py, value);
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn set_pixel_wide(&mut self, x: i64, y: i64, value: bool) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, value);
        }
    }

    /// Sets the pixels of row `y` between `left` and `right` inclusive.
    fn fill_span(&mut self, left: i64, right: i64, y: i64, value: bool) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        for px in clip(left, right, self.width) {
            self.set_pixel_wide(px, y, value);
        }
    }
}

/// Rounded minor axis offset after `step` steps along the major axis.
fn minor_offset(step: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let numerator = 2 * i128::from(step) * i128::from(minor) + i128::from(major);
    (numerator / (2 * i128::from(major))) as i64
}

/// Steps `0..=len` for which `start + sign * step` lies in `[0, limit)`.
fn visible_steps(start: i64, sign: i64, len: i64, limit: u16) -> Option<RangeInclusive<i64>> {
    let last = i64::from(limit) - 1;
    let (first, end) = match sign {
        0 if (0..=last).contains(&start) => (0, 0),
        0 => return None,
        1 => (-start, last - start),
        _ => (start - last, start),
    };
    let first = first.max(0);
    let end = end.min(len);
    (first <= end).then_some(first..=end)
}

/// The part of `start..=end` that falls inside `[0, limit)`.
fn clip(start: i64, end: i64, limit: u16) -> RangeInclusive<i64> {
    start.max(0)..=end.min(i64::from(limit) - 1)
}
