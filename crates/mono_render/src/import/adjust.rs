use image::DynamicImage;

use crate::raster::canvas::Canvas;

/// Normalized luminance of every pixel, row-major, in `[0.0, 1.0]`.
pub fn extract_luma(image: &DynamicImage, invert: bool) -> Vec<f32> {
    let gray = image.to_luma32f();
    gray.pixels()
        .map(|pixel| {
            let lum = if invert { 1.0 - pixel.0[0] } else { pixel.0[0] };
            lum.clamp(0.0, 1.0)
        })
        .collect()
}

/// Contrast and brightness offsets, both in `[-255.0, 255.0]`.
pub fn apply_contrast_and_brightness(values: &mut [f32], contrast: f32, brightness: f32) {
    if contrast == 0.0 && brightness == 0.0 {
        return;
    }

    let contrast = contrast.clamp(-255.0, 255.0);
    let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));
    let brightness = (brightness / 255.0).clamp(-1.0, 1.0);

    for value in values {
        *value = (factor * (*value - 0.5) + 0.5 + brightness).clamp(0.0, 1.0);
    }
}

/// Lights every pixel whose intensity reaches `cutoff`.
pub fn threshold(values: &[f32], width: u16, height: u16, cutoff: f32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    let columns = usize::from(width).max(1);
    for (index, &value) in values.iter().enumerate() {
        if value >= cutoff {
            canvas.set_pixel((index % columns) as i32, (index / columns) as i32, true);
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_adjustment_is_identity() {
        let mut values = vec![0.1, 0.5, 0.9];
        apply_contrast_and_brightness(&mut values, 0.0, 0.0);
        assert_eq!(values, vec![0.1, 0.5, 0.9]);
    }

    #[test]
    fn brightness_shifts_and_clamps() {
        let mut values = vec![0.0, 0.9];
        apply_contrast_and_brightness(&mut values, 0.0, 51.0);
        assert!((values[0] - 0.2).abs() < 1e-4);
        assert_eq!(values[1], 1.0);
    }

    #[test]
    fn threshold_lights_bright_pixels() {
        let canvas = threshold(&[0.0, 0.6, 0.5, 0.2, 1.0, 0.49], 3, 2, 0.5);
        assert!(!canvas.pixel(0, 0));
        assert!(canvas.pixel(1, 0));
        assert!(canvas.pixel(2, 0));
        assert!(!canvas.pixel(0, 1));
        assert!(canvas.pixel(1, 1));
        assert!(!canvas.pixel(2, 1));
    }
}
