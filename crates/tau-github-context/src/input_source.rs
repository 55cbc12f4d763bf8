use std::collections::{BTreeMap, HashMap};

/// Key/value lookup for action inputs and runner variables.
///
/// A key that is set to the empty string is still present; defaults apply
/// only to keys that are absent.
pub trait ContextInputSource {
    fn get(&self, key: &str) -> Option<String>;

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Reads inputs from the current process environment.
pub struct ProcessEnv;

impl ContextInputSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ContextInputSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl ContextInputSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: ContextInputSource + ?Sized> ContextInputSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
