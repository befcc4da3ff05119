//! The composite view: current screen, controller cache and chrome state

use crate::controller::{ControllerFactory, ViewController};
use crate::description::ViewDescription;
use crate::error::Result;
use crate::orientation::{Orientation, Transition};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Summary of a [`CompositeView::change_view`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewChange {
    /// Name of the view now current
    pub view: String,
    /// False when the requested view was already current
    pub changed: bool,
    /// Transition to play, if one was pending and the view changed
    pub transition: Option<Transition>,
    pub orientation: Orientation,
}

/// Controllers on screen for the current view
#[derive(Default)]
struct Active {
    content: Option<Arc<dyn ViewController>>,
    state_bar: Option<Arc<dyn ViewController>>,
    tab_bar: Option<Arc<dyn ViewController>>,
}

impl Active {
    fn all(&self) -> Vec<Arc<dyn ViewController>> {
        [&self.content, &self.state_bar, &self.tab_bar]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

fn contains(list: &[Arc<dyn ViewController>], controller: &Arc<dyn ViewController>) -> bool {
    list.iter().any(|c| Arc::ptr_eq(c, controller))
}

pub struct CompositeView<F: ControllerFactory> {
    factory: F,
    cache: HashMap<String, Arc<dyn ViewController>>,
    current: Option<ViewDescription>,
    active: Active,
    orientation: Orientation,
    fullscreen: bool,
    state_bar_hidden: bool,
    tab_bar_hidden: bool,
    transition: Option<Transition>,
}

impl<F: ControllerFactory> CompositeView<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            cache: HashMap::new(),
            current: None,
            active: Active::default(),
            orientation: Orientation::Portrait,
            fullscreen: false,
            state_bar_hidden: false,
            tab_bar_hidden: false,
            transition: None,
        }
    }

    /// Show `description`.
    ///
    /// When it names the view already shown only the flags (fullscreen,
    /// orientations, dark background) are refreshed; the controller
    /// identifiers of the current view are kept.
    /// Otherwise the controllers are looked up (and created on first use),
    /// the ones leaving and entering the screen get their lifecycle hooks, the
    /// bar overrides are reset and the orientation is moved to one the new
    /// view supports. A failed lookup leaves the current view in place.
    pub fn change_view(&mut self, description: &ViewDescription) -> Result<ViewChange> {
        if self.current.as_ref() == Some(description) {
            // Controllers stay as they are, so their identifiers must too
            if let Some(current) = self.current.as_mut() {
                current.fullscreen = description.fullscreen;
                current.landscape_mode = description.landscape_mode;
                current.portrait_mode = description.portrait_mode;
                current.dark_background = description.dark_background;
            }
            self.fullscreen = description.fullscreen;
            self.fit_orientation();
            debug!("View {} already current, flags refreshed", description.name);
            return Ok(ViewChange {
                view: description.name.clone(),
                changed: false,
                transition: None,
                orientation: self.orientation,
            });
        }

        let content = self.get_cached_controller(&description.content)?;
        let state_bar = match description.state_bar.as_deref() {
            Some(identifier) => Some(self.get_cached_controller(identifier)?),
            None => None,
        };
        let tab_bar = match description.tab_bar.as_deref() {
            Some(identifier) => Some(self.get_cached_controller(identifier)?),
            None => None,
        };

        let incoming = Active {
            content: Some(content),
            state_bar,
            tab_bar,
        };
        let before = self.active.all();
        let after = incoming.all();
        let leaving: Vec<_> = before.iter().filter(|c| !contains(&after, c)).cloned().collect();
        let entering: Vec<_> = after.iter().filter(|c| !contains(&before, c)).cloned().collect();

        leaving.iter().for_each(|c| c.will_disappear());
        entering.iter().for_each(|c| c.will_appear());

        let previous = self.current.replace(description.clone());
        self.active = incoming;
        self.fullscreen = description.fullscreen;
        self.state_bar_hidden = false;
        self.tab_bar_hidden = false;
        self.fit_orientation();

        leaving.iter().for_each(|c| c.did_disappear());
        entering.iter().for_each(|c| c.did_appear());

        let transition = self.transition.take();
        info!(
            "View changed from {} to {} ({:?})",
            previous.as_ref().map(|p| p.name.as_str()).unwrap_or("<none>"),
            description.name,
            transition
        );

        Ok(ViewChange {
            view: description.name.clone(),
            changed: true,
            transition,
            orientation: self.orientation,
        })
    }

    /// Move to an orientation the current view supports, portrait first
    fn fit_orientation(&mut self) {
        let Some(current) = &self.current else {
            return;
        };
        if current.supports(self.orientation) {
            return;
        }
        let fallback = if current.portrait_mode {
            Orientation::Portrait
        } else if current.landscape_mode {
            Orientation::LandscapeRight
        } else {
            return;
        };
        debug!("Rotating from {:?} to {:?} for {}", self.orientation, fallback, current.name);
        self.orientation = fallback;
    }

    /// Transition to play on the next view change
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = Some(transition);
    }

    pub fn pending_transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn set_fullscreen(&mut self, enabled: bool) {
        self.fullscreen = enabled;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_state_bar_hidden(&mut self, hidden: bool) {
        self.state_bar_hidden = hidden;
    }

    /// Hide or show the tab bar (the toolbar under the content)
    pub fn set_tab_bar_hidden(&mut self, hidden: bool) {
        self.tab_bar_hidden = hidden;
    }

    /// The state bar shows when the current view has one, the view is not
    /// fullscreen and it has not been hidden.
    pub fn is_state_bar_visible(&self) -> bool {
        self.active.state_bar.is_some() && !self.fullscreen && !self.state_bar_hidden
    }

    pub fn is_tab_bar_visible(&self) -> bool {
        self.active.tab_bar.is_some() && !self.tab_bar_hidden
    }

    pub fn current_view_supports_landscape(&self) -> bool {
        self.current.as_ref().map_or(false, |c| c.landscape_mode)
    }

    pub fn current_view(&self) -> Option<&ViewDescription> {
        self.current.as_ref()
    }

    /// Content controller of the current view
    pub fn current_view_controller(&self) -> Option<Arc<dyn ViewController>> {
        self.active.content.clone()
    }

    pub fn current_orientation(&self) -> Orientation {
        self.orientation
    }

    /// Rotate the interface. Refused when the current view does not support
    /// `orientation`; with no view shown every orientation is accepted.
    pub fn rotate(&mut self, orientation: Orientation) -> bool {
        let allowed = self.current.as_ref().map_or(true, |c| c.supports(orientation));
        if allowed {
            self.orientation = orientation;
        } else {
            debug!("Rotation to {:?} refused", orientation);
        }
        allowed
    }

    /// Controller for `identifier`, created and cached on first access
    pub fn get_cached_controller(&mut self, identifier: &str) -> Result<Arc<dyn ViewController>> {
        if let Some(controller) = self.cache.get(identifier) {
            return Ok(Arc::clone(controller));
        }
        let controller = self.factory.instantiate(identifier)?;
        debug!("Created view controller {}", identifier);
        self.cache.insert(identifier.to_string(), Arc::clone(&controller));
        Ok(controller)
    }

    pub fn is_cached(&self, identifier: &str) -> bool {
        self.cache.contains_key(identifier)
    }

    /// Identifiers currently cached, sorted
    pub fn cached_identifiers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.cache.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop every cached controller not used by one of the `exclude` views.
    ///
    /// Controllers on screen stay alive through the current view even when
    /// they are dropped from the cache; they are created anew on next lookup.
    pub fn clear_cache(&mut self, exclude: &[ViewDescription]) {
        self.cache.retain(|identifier, _| {
            let keep = exclude.iter().any(|d| d.uses_controller(identifier));
            if !keep {
                debug!("Freeing cached view controller {}", identifier);
            }
            keep
        });
    }
}

impl<F: ControllerFactory> std::fmt::Debug for CompositeView<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeView")
            .field("current", &self.current.as_ref().map(|c| &c.name))
            .field("cached", &self.cached_identifiers())
            .field("orientation", &self.orientation)
            .field("fullscreen", &self.fullscreen)
            .finish_non_exhaustive()
    }
}
