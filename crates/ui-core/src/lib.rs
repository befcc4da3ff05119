//! # UI-Core - Composite view model
//!
//! A softphone UI shell shows one screen at a time, framed by an optional
//! state bar on top and an optional tab bar at the bottom. [`CompositeView`]
//! tracks which screen is current, keeps the controllers it has created in a
//! cache keyed by identifier, and owns the chrome state: fullscreen, bar
//! visibility, orientation and the transition to play on the next change.
//! Layout and drawing belong to the host toolkit.
//!
//! ```rust
//! use std::sync::Arc;
//! use voipd_ui_core::{CompositeView, ControllerRegistry, ViewController, ViewDescription};
//!
//! struct Screen;
//! impl ViewController for Screen {}
//!
//! let mut registry = ControllerRegistry::new();
//! registry.register("DialerView", || Arc::new(Screen));
//! registry.register("TabBarView", || Arc::new(Screen));
//!
//! let mut shell = CompositeView::new(registry);
//! let dialer = ViewDescription::new("Dialer", "DialerView").with_tab_bar("TabBarView");
//! let change = shell.change_view(&dialer).unwrap();
//!
//! assert!(change.changed);
//! assert!(shell.is_tab_bar_visible());
//! assert!(!shell.is_state_bar_visible());
//! ```

pub mod composite;
pub mod controller;
pub mod description;
pub mod error;
pub mod orientation;

pub use composite::{CompositeView, ViewChange};
pub use controller::{ControllerFactory, ControllerRegistry, ViewController};
pub use description::ViewDescription;
pub use error::{Result, UiError};
pub use orientation::{Orientation, Transition};
