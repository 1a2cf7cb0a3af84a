use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 80,
            height: 12,
        }
    }
}

impl Viewport {
    pub const MAX_WIDTH: u16 = 500;
    pub const MAX_HEIGHT: u16 = 200;

    /// Confetti fills the whole viewport, so terminal sizes are capped.
    pub fn clamped(self) -> Self {
        Viewport {
            width: self.width.min(Viewport::MAX_WIDTH),
            height: self.height.min(Viewport::MAX_HEIGHT),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub review_mode: bool,
    pub advance_delay: Duration,
    pub celebration_duration: Duration,
    pub viewport: Viewport,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            review_mode: true,
            advance_delay: Duration::from_millis(3000),
            celebration_duration: Duration::from_secs(30),
            viewport: Default::default(),
        }
    }
}
