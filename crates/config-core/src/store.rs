//! The store seam the daemon commands talk to

/// A section/key configuration store holding string values.
///
/// Reads never fail from the caller's point of view: a value that cannot be
/// read is reported the same way as an absent one.
pub trait ConfigStore: Send + Sync {
    /// Read `[section] key`
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Write `[section] key`. `None` removes the key; a section left empty
    /// is removed with it.
    fn set_string(&self, section: &str, key: &str, value: Option<&str>);

    /// Section names, sorted
    fn sections(&self) -> Vec<String>;

    /// Key names of a section, sorted. Empty for an unknown section.
    fn keys(&self, section: &str) -> Vec<String>;
}
