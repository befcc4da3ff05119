//! Interface orientation and view transitions

/// Orientation of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::Portrait | Orientation::PortraitUpsideDown)
    }

    pub fn is_landscape(self) -> bool {
        !self.is_portrait()
    }
}

/// Animation the host plays when the current view is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Fade,
    PushFromLeft,
    PushFromRight,
}
