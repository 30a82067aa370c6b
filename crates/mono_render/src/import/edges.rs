#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeMode {
    None,
    /// Keep only Sobel gradient magnitudes at or above `threshold` (0.0 - 1.0).
    Sobel { threshold: f32 },
}

/// Magnitudes below this are rounding noise from flat regions.
const NOISE_FLOOR: f32 = 1e-5;

/// Sobel gradient magnitude per pixel, normalized to `[0.0, 1.0]`. The one
/// pixel border has no full neighbourhood and stays at zero.
pub fn sobel_map(values: &[f32], width: u16, height: u16, threshold: f32) -> Vec<f32> {
    let width = usize::from(width);
    let height = usize::from(height);
    let mut output = vec![0.0; values.len()];
    let threshold = threshold.clamp(0.0, 1.0);

    if width < 3 || height < 3 || values.len() < width * height {
        return output;
    }

    let at = |x: usize, y: usize| values[y * width + x];

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gx = at(x + 1, y - 1) + 2.0 * at(x + 1, y) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2.0 * at(x - 1, y)
                - at(x - 1, y + 1);
            let gy = at(x - 1, y + 1) + 2.0 * at(x, y + 1) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2.0 * at(x, y - 1)
                - at(x + 1, y - 1);
            let magnitude = ((gx * gx + gy * gy).sqrt() / 4.0).clamp(0.0, 1.0);
            if magnitude >= threshold && magnitude > NOISE_FLOOR {
                output[y * width + x] = magnitude;
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_has_no_edges() {
        let values = vec![0.7; 25];
        assert!(sobel_map(&values, 5, 5, 0.0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn gentle_gradient_keeps_its_magnitude() {
        // Each column 0.1 brighter than the last: gx = 0.8, magnitude 0.2.
        let values: Vec<f32> = (0..25).map(|i| (i % 5) as f32 * 0.1).collect();
        let edges = sobel_map(&values, 5, 5, 0.0);
        assert!((edges[2 * 5 + 2] - 0.2).abs() < 1e-4);
        assert_eq!(edges[0], 0.0);
    }

    #[test]
    fn vertical_step_is_detected() {
        // Left two columns dark, right three bright.
        let values: Vec<f32> = (0..25).map(|i| if i % 5 >= 2 { 1.0 } else { 0.0 }).collect();
        let edges = sobel_map(&values, 5, 5, 0.5);
        assert_eq!(edges[2 * 5 + 1], 1.0);
        assert_eq!(edges[2 * 5 + 2], 1.0);
        assert_eq!(edges[2 * 5 + 3], 0.0);
    }

    #[test]
    fn tiny_inputs_are_blank() {
        assert_eq!(sobel_map(&[1.0, 0.0], 2, 1, 0.0), vec![0.0, 0.0]);
    }
}
