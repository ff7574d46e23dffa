use std::fmt::Write;

/// Insertion-ordered string parameters whose values may be absent.
///
/// Used for both route parameters and query-string parameters. An absent value
/// still occupies its key (so it can shadow an older value on merge) but is
/// skipped when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`] with a present value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    /// Builder form of [`Params::insert`] with an absent value.
    pub fn without(mut self, key: impl Into<String>) -> Self {
        self.insert(key, None);
        self
    }

    /// Sets `key`, replacing an existing entry in place or appending a new one.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Present value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Overlays `other` onto `self`. Same-named keys keep their position and
    /// take the new value; unknown keys are appended.
    pub fn merge(&mut self, other: &Params) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn merged(&self, other: &Params) -> Params {
        let mut merged = self.clone();
        merged.merge(other);
        merged
    }

    /// `key=value` pairs joined by `&`, both sides percent-encoded.
    /// Absent values are left out, so the result may be empty.
    pub fn to_query_string(&self) -> String {
        let mut encoded = String::new();
        for (key, value) in self.iter() {
            let Some(value) = value else { continue };
            if !encoded.is_empty() {
                encoded.push('&');
            }
            let _ = write!(
                encoded,
                "{}={}",
                encode_query_part(key),
                encode_query_part(value)
            );
        }
        encoded
    }
}

/// Form-style encoding: spaces become `+` and `~` is escaped too.
fn encode_query_part(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%20", "+")
        .replace('~', "%7E")
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, Some(value.into()));
        }
        params
    }
}
