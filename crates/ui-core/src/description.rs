//! View descriptions

use crate::orientation::Orientation;
use std::hash::{Hash, Hasher};

/// What a screen looks like: its content controller, the bars framing it and
/// the orientations it supports.
///
/// Descriptions are compared by `name` only; two descriptions with the same
/// name describe the same screen even if their flags differ.
#[derive(Debug, Clone)]
pub struct ViewDescription {
    pub name: String,
    /// Identifier of the content controller
    pub content: String,
    /// Identifier of the state bar controller, if the screen has one
    pub state_bar: Option<String>,
    /// Identifier of the tab bar controller, if the screen has one
    pub tab_bar: Option<String>,
    pub fullscreen: bool,
    pub landscape_mode: bool,
    pub portrait_mode: bool,
    pub dark_background: bool,
}

impl ViewDescription {
    /// Portrait-only screen with no bars
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            state_bar: None,
            tab_bar: None,
            fullscreen: false,
            landscape_mode: false,
            portrait_mode: true,
            dark_background: false,
        }
    }

    pub fn with_state_bar(mut self, controller: impl Into<String>) -> Self {
        self.state_bar = Some(controller.into());
        self
    }

    pub fn with_tab_bar(mut self, controller: impl Into<String>) -> Self {
        self.tab_bar = Some(controller.into());
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_landscape(mut self, landscape: bool) -> Self {
        self.landscape_mode = landscape;
        self
    }

    pub fn with_portrait(mut self, portrait: bool) -> Self {
        self.portrait_mode = portrait;
        self
    }

    pub fn with_dark_background(mut self, dark: bool) -> Self {
        self.dark_background = dark;
        self
    }

    /// Whether the screen can be shown in `orientation`
    pub fn supports(&self, orientation: Orientation) -> bool {
        if orientation.is_portrait() {
            self.portrait_mode
        } else {
            self.landscape_mode
        }
    }

    /// Whether `identifier` is one of the controllers this screen shows
    pub fn uses_controller(&self, identifier: &str) -> bool {
        self.content == identifier
            || self.state_bar.as_deref() == Some(identifier)
            || self.tab_bar.as_deref() == Some(identifier)
    }
}

impl PartialEq for ViewDescription {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ViewDescription {}

impl Hash for ViewDescription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_name() {
        let a = ViewDescription::new("Chat", "ChatView").with_tab_bar("TabBar");
        let b = ViewDescription::new("Chat", "OtherView").with_fullscreen(true);
        let c = ViewDescription::new("History", "ChatView");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = ViewDescription::new("Call", "InCallView").with_landscape(true);
        let mut copy = original.clone();
        copy.landscape_mode = false;
        assert!(original.landscape_mode);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_supports_orientation() {
        let portrait_only = ViewDescription::new("Dialer", "DialerView");
        assert!(portrait_only.supports(Orientation::Portrait));
        assert!(portrait_only.supports(Orientation::PortraitUpsideDown));
        assert!(!portrait_only.supports(Orientation::LandscapeLeft));

        let video = ViewDescription::new("Video", "VideoView")
            .with_portrait(false)
            .with_landscape(true);
        assert!(video.supports(Orientation::LandscapeRight));
        assert!(!video.supports(Orientation::Portrait));
    }

    #[test]
    fn test_uses_controller() {
        let view = ViewDescription::new("Dialer", "DialerView")
            .with_state_bar("StateBar")
            .with_tab_bar("TabBar");
        assert!(view.uses_controller("DialerView"));
        assert!(view.uses_controller("StateBar"));
        assert!(view.uses_controller("TabBar"));
        assert!(!view.uses_controller("ChatView"));
    }
}
