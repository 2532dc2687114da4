//! Header fields shared by requests and responses.

/// Ordered header multimap.
///
/// Names are matched exactly; values are opaque byte sequences. Entries keep
/// append order so header assertions are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, Vec<u8>)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field set from name/value pairs, keeping their order.
    pub fn from_list<N, V>(entries: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<Vec<u8>>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Append a value for `name`. Repeated names accumulate.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.push((name.into(), value.into()));
    }

    /// All values recorded for `name`, in append order.
    pub fn get(&self, name: &str) -> Vec<Vec<u8>> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Whether at least one value is recorded for `name`.
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Every name/value pair, in append order.
    pub fn entries(&self) -> &[(String, Vec<u8>)] {
        &self.entries
    }
}
