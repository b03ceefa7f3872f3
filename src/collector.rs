//! Insertion-ordered aggregation of validation errors.

/// An insertion-ordered multi-map from an operation kind to its accumulated
/// validation message.
///
/// Several expressions of the same kind can fail independently within one
/// migration; because entries are keyed by kind, their messages are
/// space-joined under the one key rather than overwritten. Keys keep their
/// first-seen order so the rendered block reads in sequence order.
///
/// A collector lives for exactly one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` under `key`.
    ///
    /// An existing key gets the message space-joined onto its value; a new
    /// key is inserted at the end.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        match self.entries.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => {
                entry.1.push(' ');
                entry.1.push_str(&message);
            }
            None => self.entries.push((key, message)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Render one line per key, in insertion order, using the caller's
    /// two-placeholder format. Callers always supply the format; there is
    /// no implicit default.
    pub fn render_with(&self, format: impl Fn(&str, &str) -> String) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format(key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_first_seen_order() {
        let mut errors = ValidationErrors::new();
        errors.add("CreateTable", "table name is required");
        errors.add("AddColumn", "column type is required");
        errors.add("CreateTable", "table must have at least one column");

        let keys: Vec<_> = errors.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["CreateTable", "AddColumn"]);
    }

    #[test]
    fn test_same_key_messages_are_space_joined() {
        let mut errors = ValidationErrors::new();
        errors.add("AddColumn", "E1");
        errors.add("AddColumn", "E2");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.iter().next(), Some(("AddColumn", "E1 E2")));
    }

    #[test]
    fn test_render_with_caller_format() {
        let mut errors = ValidationErrors::new();
        errors.add("CreateIndex", "index must reference at least one column");
        errors.add("ExecuteSql", "sql statement is required");

        let rendered = errors.render_with(|key, value| format!("{key}='{value}'"));
        assert_eq!(
            rendered,
            "CreateIndex='index must reference at least one column'\n\
             ExecuteSql='sql statement is required'"
        );
    }

    #[test]
    fn test_empty_collector() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.render_with(|key, value| format!("{key}: {value}")), "");
    }
}
