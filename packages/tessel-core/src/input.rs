use rustc_hash::FxHashMap;

/// The host framework's reactive input values, keyed by widget id.
///
/// Click-driven inputs hold the number of times the bound element was
/// clicked; the store knows nothing about what a widget displays.
#[derive(Debug, Default, Clone)]
pub struct InputStore {
    values: FxHashMap<String, u64>,
}

impl InputStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value pushed by the client for `key`.
    pub fn set(&mut self, key: &str, value: u64) {
        tracing::debug!("Input {} <- {}", key, value);
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
