use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage};
use log::debug;
use walkdir::WalkDir;

use super::ImportError;

/// A decoded source image and how long it stays on screen. A zero delay means
/// the source carried no timing.
#[derive(Clone, Debug)]
pub struct SourceFrame {
    pub image: DynamicImage,
    pub delay: Duration,
}

/// Loads a GIF animation, every image in a directory (sorted by path), or a
/// single still image.
pub fn load_frames(path: &Path) -> Result<Vec<SourceFrame>, ImportError> {
    let frames = if path.is_dir() {
        load_directory(path)?
    } else {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if extension == "gif" {
            load_gif(path)?
        } else {
            vec![SourceFrame { image: image::open(path)?, delay: Duration::ZERO }]
        }
    };

    if frames.is_empty() {
        return Err(ImportError::NoFrames(path.to_path_buf()));
    }

    debug!("loaded {} frame(s) from {}", frames.len(), path.display());
    Ok(frames)
}

fn load_gif(path: &Path) -> Result<Vec<SourceFrame>, ImportError> {
    let file = File::open(path)
        .map_err(|source| ImportError::Io { path: path.to_path_buf(), source })?;
    let frames = GifDecoder::new(file)?.into_frames().collect_frames()?;

    Ok(frames
        .into_iter()
        .map(|frame| {
            let delay = Duration::from(frame.delay());
            SourceFrame { image: DynamicImage::ImageRgba8(frame.into_buffer()), delay }
        })
        .collect())
}

fn load_directory(path: &Path) -> Result<Vec<SourceFrame>, ImportError> {
    let mut entries: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    entries.sort();

    let mut frames = Vec::with_capacity(entries.len());
    for entry in entries {
        let image = image::open(&entry)?;
        frames.push(SourceFrame { image, delay: Duration::ZERO });
    }
    Ok(frames)
}
