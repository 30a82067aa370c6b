/// Where a source image lands on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FitMode {
    /// Scale to fit inside the display keeping the aspect ratio, centred.
    #[default]
    Contain,
    /// Scale each axis independently to cover the display exactly.
    Stretch,
}

impl FitMode {
    pub fn place(
        &self,
        source_width: u32,
        source_height: u32,
        display_width: u16,
        display_height: u16,
    ) -> Option<Placement> {
        if source_width == 0 || source_height == 0 || display_width == 0 || display_height == 0 {
            return None;
        }

        match *self {
            FitMode::Stretch => {
                Some(Placement { x: 0, y: 0, width: display_width, height: display_height })
            },
            FitMode::Contain => {
                let scale = (f32::from(display_width) / source_width as f32)
                    .min(f32::from(display_height) / source_height as f32);
                let width = ((source_width as f32 * scale).round() as u16).clamp(1, display_width);
                let height =
                    ((source_height as f32 * scale).round() as u16).clamp(1, display_height);
                let x = i32::from((display_width - width) / 2);
                let y = i32::from((display_height - height) / 2);
                Some(Placement { x, y, width, height })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_letterboxes_wide_display() {
        let placement = FitMode::Contain.place(200, 200, 526, 100).unwrap();
        assert_eq!(placement, Placement { x: 213, y: 0, width: 100, height: 100 });
    }

    #[test]
    fn contain_pillarboxes_tall_display() {
        let placement = FitMode::Contain.place(400, 100, 100, 100).unwrap();
        assert_eq!(placement, Placement { x: 0, y: 37, width: 100, height: 25 });
    }

    #[test]
    fn stretch_covers_display() {
        let placement = FitMode::Stretch.place(3, 7, 526, 100).unwrap();
        assert_eq!(placement, Placement { x: 0, y: 0, width: 526, height: 100 });
    }

    #[test]
    fn empty_source_has_no_placement() {
        assert_eq!(FitMode::Contain.place(0, 10, 526, 100), None);
        assert_eq!(FitMode::Stretch.place(10, 10, 0, 100), None);
    }
}
