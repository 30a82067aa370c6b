//! Converts ordinary images into 1-bit display canvases.

mod adjust;
mod edges;
mod loader;
mod resize;

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use log::warn;

pub use edges::EdgeMode;
pub use loader::{load_frames, SourceFrame};
pub use resize::{FitMode, Placement};

use crate::raster::canvas::Canvas;
use crate::raster::series::FrameSeries;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no frames found in {}", .0.display())]
    NoFrames(PathBuf),
    #[error("unsupported layout dimensions")]
    InvalidLayout,
}

#[derive(Clone, Debug)]
pub struct ImportOptions {
    pub invert: bool,
    /// Brightness offset in the range [-255.0, 255.0].
    pub brightness: f32,
    /// Contrast offset in the range [-255.0, 255.0].
    pub contrast: f32,
    /// Luminance at or above which a pixel is lit.
    pub threshold: f32,
    pub edge_mode: EdgeMode,
    pub fit: FitMode,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            invert: false,
            brightness: 0.0,
            contrast: 0.0,
            threshold: 0.5,
            edge_mode: EdgeMode::None,
            fit: FitMode::Contain,
        }
    }
}

/// Turns images into canvases of a fixed display size.
#[derive(Clone, Copy, Debug)]
pub struct ImageConverter {
    width: u16,
    height: u16,
}

impl ImageConverter {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn convert_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ImportOptions,
    ) -> Result<Canvas, ImportError> {
        let image = image::open(path)?;
        self.convert_image(&image, options)
    }

    pub fn convert_image(
        &self,
        image: &DynamicImage,
        options: &ImportOptions,
    ) -> Result<Canvas, ImportError> {
        let (width, height) = image.dimensions();
        let placement = options
            .fit
            .place(width, height, self.width, self.height)
            .ok_or(ImportError::InvalidLayout)?;

        let resized = image.resize_exact(
            u32::from(placement.width),
            u32::from(placement.height),
            FilterType::CatmullRom,
        );

        let mut luminance = adjust::extract_luma(&resized, options.invert);
        adjust::apply_contrast_and_brightness(
            &mut luminance,
            options.contrast,
            options.brightness,
        );

        let intensities = match options.edge_mode {
            EdgeMode::None => luminance,
            EdgeMode::Sobel { threshold } => {
                edges::sobel_map(&luminance, placement.width, placement.height, threshold)
            },
        };

        // Edge maps are zero everywhere but on edges, so any surviving magnitude lights.
        let cutoff = match options.edge_mode {
            EdgeMode::None => options.threshold,
            EdgeMode::Sobel { .. } => f32::MIN_POSITIVE,
        };
        let image_canvas =
            adjust::threshold(&intensities, placement.width, placement.height, cutoff);

        let mut canvas = Canvas::new(self.width, self.height);
        canvas.blit(&image_canvas, placement.x, placement.y);
        Ok(canvas)
    }

    /// Converts every frame found at `path` into a looping series. Frames that
    /// fail to convert are skipped.
    pub fn convert_frames<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ImportOptions,
    ) -> Result<FrameSeries, ImportError> {
        let path = path.as_ref();
        let mut series = FrameSeries::new();

        for (index, frame) in load_frames(path)?.into_iter().enumerate() {
            match self.convert_image(&frame.image, options) {
                Ok(canvas) => {
                    if series.push_frame(canvas, frame.delay).is_err() {
                        warn!("skipping frame {index} of {}: size mismatch", path.display());
                    }
                },
                Err(err) => warn!("skipping frame {index} of {}: {err}", path.display()),
            }
        }

        if series.is_empty() {
            return Err(ImportError::NoFrames(path.to_path_buf()));
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use image::{GrayImage, Luma, Rgba, RgbaImage};

    use super::*;
    use crate::raster::series::DEFAULT_FRAME_DELAY;

    fn half_white(width: u32, height: u32) -> DynamicImage {
        let image = GrayImage::from_fn(width, height, |x, _| {
            if x >= width / 2 {
                Luma([255])
            } else {
                Luma([0])
            }
        });
        DynamicImage::ImageLuma8(image)
    }

    #[test]
    fn stretch_thresholds_each_pixel() {
        let converter = ImageConverter::new(8, 4);
        let options = ImportOptions { fit: FitMode::Stretch, ..ImportOptions::default() };
        let canvas = converter.convert_image(&half_white(8, 4), &options).unwrap();
        assert!(!canvas.pixel(0, 0));
        assert!(!canvas.pixel(3, 3));
        assert!(canvas.pixel(4, 0));
        assert!(canvas.pixel(7, 3));
        assert_eq!(canvas.count_set(), 16);
    }

    #[test]
    fn invert_swaps_lit_pixels() {
        let converter = ImageConverter::new(8, 4);
        let options =
            ImportOptions { fit: FitMode::Stretch, invert: true, ..ImportOptions::default() };
        let canvas = converter.convert_image(&half_white(8, 4), &options).unwrap();
        assert!(canvas.pixel(0, 0));
        assert!(!canvas.pixel(7, 0));
    }

    #[test]
    fn contain_centres_the_image() {
        let converter = ImageConverter::new(20, 4);
        let white = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([255])));
        let canvas = converter.convert_image(&white, &ImportOptions::default()).unwrap();
        assert_eq!(canvas.count_set(), 16);
        assert!(canvas.pixel(8, 0));
        assert!(canvas.pixel(11, 3));
        assert!(!canvas.pixel(7, 0));
        assert!(!canvas.pixel(12, 0));
    }

    #[test]
    fn sobel_mode_keeps_only_edges() {
        let converter = ImageConverter::new(10, 10);
        let options = ImportOptions {
            fit: FitMode::Stretch,
            edge_mode: EdgeMode::Sobel { threshold: 0.3 },
            ..ImportOptions::default()
        };
        let canvas = converter.convert_image(&half_white(10, 10), &options).unwrap();
        assert!(canvas.pixel(5, 5));
        assert!(!canvas.pixel(8, 5));
        assert!(!canvas.pixel(1, 5));
    }

    #[test]
    fn empty_image_is_rejected() {
        let converter = ImageConverter::new(10, 10);
        let empty = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        let result = converter.convert_image(&empty, &ImportOptions::default());
        assert!(matches!(result, Err(ImportError::InvalidLayout)));
    }

    #[test]
    fn directory_of_images_becomes_a_series() {
        let dir = tempfile::tempdir().unwrap();
        for (index, shade) in [0u8, 255].into_iter().enumerate() {
            let image = RgbaImage::from_pixel(6, 3, Rgba([shade, shade, shade, 255]));
            image.save(dir.path().join(format!("frame_{index}.png"))).unwrap();
        }

        let converter = ImageConverter::new(6, 3);
        let options = ImportOptions { fit: FitMode::Stretch, ..ImportOptions::default() };
        let series = converter.convert_frames(dir.path(), &options).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.total_duration(), DEFAULT_FRAME_DELAY * 2);
        assert_eq!(series.frame(0).unwrap().count_set(), 0);
        assert_eq!(series.frame(1).unwrap().count_set(), 18);
        assert_eq!(series.frame_index_at(Duration::from_millis(130)), Some(1));
    }

    #[test]
    fn still_image_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.png");
        RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255])).save(&path).unwrap();

        let canvas = ImageConverter::new(2, 2).convert_path(&path, &ImportOptions::default());
        assert_eq!(canvas.unwrap().count_set(), 4);
    }

    #[test]
    fn empty_directory_has_no_frames() {
        let dir = tempfile::tempdir().unwrap();
        let converter = ImageConverter::new(4, 4);
        let result = converter.convert_frames(dir.path(), &ImportOptions::default());
        assert!(matches!(result, Err(ImportError::NoFrames(_))));
    }
}
