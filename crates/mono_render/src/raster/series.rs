use std::time::Duration;

use super::canvas::Canvas;

/// Delay used for frames that carry no timing of their own.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(120);

#[derive(Clone, Debug)]
pub struct CanvasFrame {
    pub canvas: Canvas,
    pub delay: Duration,
}

/// Looping sequence of equally sized canvases.
#[derive(Clone, Debug, Default)]
pub struct FrameSeries {
    frames: Vec<CanvasFrame>,
    total_duration: Duration,
    dimensions: Option<(u16, u16)>,
}

impl FrameSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn dimensions(&self) -> Option<(u16, u16)> {
        self.dimensions
    }

    /// Appends a frame. Frames whose size differs from the first one are
    /// rejected and handed back.
    pub fn push_frame(&mut self, canvas: Canvas, delay: Duration) -> Result<(), Canvas> {
        let size = (canvas.width(), canvas.height());
        match self.dimensions {
            Some(expected) if expected != size => return Err(canvas),
            Some(_) => (),
            None => self.dimensions = Some(size),
        }

        let delay = if delay.is_zero() { DEFAULT_FRAME_DELAY } else { delay };
        self.total_duration += delay;
        self.frames.push(CanvasFrame { canvas, delay });
        Ok(())
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn normalize_elapsed(&self, elapsed: Duration) -> Duration {
        if self.frames.len() <= 1 || self.total_duration.is_zero() {
            return Duration::ZERO;
        }

        let remainder = elapsed.as_nanos() % self.total_duration.as_nanos();
        let secs = (remainder / 1_000_000_000) as u64;
        let nanos = (remainder % 1_000_000_000) as u32;

        Duration::new(secs, nanos)
    }

    pub fn frame_index_at(&self, elapsed: Duration) -> Option<usize> {
        match self.frames.len() {
            0 => return None,
            1 => return Some(0),
            _ => (),
        }

        let mut remaining = self.normalize_elapsed(elapsed);

        for (index, frame) in self.frames.iter().enumerate() {
            if remaining < frame.delay {
                return Some(index);
            }
            remaining -= frame.delay;
        }

        Some(self.frames.len() - 1)
    }

    pub fn frame_at(&self, elapsed: Duration) -> Option<&Canvas> {
        let index = self.frame_index_at(elapsed)?;
        self.frame(index)
    }

    pub fn frame(&self, index: usize) -> Option<&Canvas> {
        self.frames.get(index).map(|frame| &frame.canvas)
    }

    pub fn frames(&self) -> impl Iterator<Item = &CanvasFrame> + '_ {
        self.frames.iter()
    }
}
