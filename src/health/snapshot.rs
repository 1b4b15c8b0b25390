// src/health/snapshot.rs

use std::collections::HashMap;

/// A point-in-time view of the environment variables the check cares about.
///
/// The checker never reads the live process environment; it only sees a
/// snapshot, so the check itself is a pure function and tests can feed in
/// any environment shape without mutating process state.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, Option<String>>,
}

impl EnvSnapshot {
    /// Capture the named variables from the process environment.
    pub fn capture<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let vars = names
            .into_iter()
            .map(|name| (name.to_string(), std::env::var(name).ok()))
            .collect();
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(|v| v.as_deref())
    }

    /// True when the variable is set to a non-empty value.
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }
}

impl FromIterator<(String, Option<String>)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
