//! Controllers and how they are created

use crate::error::{Result, UiError};
use std::collections::HashMap;
use std::sync::Arc;

/// A screen, state bar or tab bar managed by the composite view.
///
/// The hooks are called around every view change in which the controller
/// enters or leaves the screen.
pub trait ViewController: Send + Sync {
    fn will_appear(&self) {}

    fn did_appear(&self) {}

    fn will_disappear(&self) {}

    fn did_disappear(&self) {}
}

/// Creates controllers from their identifiers
pub trait ControllerFactory {
    fn instantiate(&self, identifier: &str) -> Result<Arc<dyn ViewController>>;
}

type Constructor = Box<dyn Fn() -> Arc<dyn ViewController> + Send + Sync>;

/// Factory backed by a table of constructors
#[derive(Default)]
pub struct ControllerRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the constructor used for `identifier`
    pub fn register<F>(&mut self, identifier: impl Into<String>, constructor: F)
    where
        F: Fn() -> Arc<dyn ViewController> + Send + Sync + 'static,
    {
        self.constructors.insert(identifier.into(), Box::new(constructor));
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.constructors.contains_key(identifier)
    }
}

impl ControllerFactory for ControllerRegistry {
    fn instantiate(&self, identifier: &str) -> Result<Arc<dyn ViewController>> {
        self.constructors
            .get(identifier)
            .map(|constructor| constructor())
            .ok_or_else(|| UiError::UnknownController(identifier.to_string()))
    }
}

impl std::fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.constructors.keys().collect();
        names.sort();
        f.debug_struct("ControllerRegistry").field("identifiers", &names).finish()
    }
}
