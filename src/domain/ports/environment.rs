use std::ffi::OsString;

/// Read-only source of named settings.
///
/// The resolver only needs point lookups, so implementations can wrap the
/// process environment, a fixed map, or anything else keyed by string.
pub trait Environment {
    /// Raw value of `key`, or `None` when the variable is unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Whether `key` is set at all (an empty value counts as set).
    fn contains(&self, key: &str) -> bool {
        self.var_os(key).is_some()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}
