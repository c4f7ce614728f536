//! Ordered wire-parameter list shared by every hit type.

/// Insertion-ordered list of protocol `(name, value)` pairs.
///
/// Order is preserved into the encoded body. Nothing is deduplicated,
/// trimmed, or re-cased; the only normalization in the crate is the blank
/// filter in [`Params::push_if_present`].
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append unconditionally. Used for positionally mandatory fields;
    /// `cid` goes out as-is even when empty.
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push((name, value.into()));
    }

    /// Append only when the candidate is present and not blank.
    ///
    /// Empty and whitespace-only values omit the key entirely rather than
    /// sending `name=`. The value itself is stored untrimmed.
    pub fn push_if_present(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.trim().is_empty() {
                self.0.push((name, v.to_string()));
            }
        }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_if_present_filters_blank_values() {
        let mut params = Params::new();
        params.push_if_present("dt", None);
        params.push_if_present("dt", Some(""));
        params.push_if_present("dt", Some("   "));
        params.push_if_present("dt", Some("\t\n"));
        assert!(params.pairs().is_empty());

        params.push_if_present("dt", Some("Home"));
        assert_eq!(params.pairs(), &[("dt", "Home".to_string())]);
    }

    #[test]
    fn push_if_present_keeps_surrounding_whitespace() {
        let mut params = Params::new();
        params.push_if_present("el", Some(" padded "));
        assert_eq!(params.pairs(), &[("el", " padded ".to_string())]);
    }

    #[test]
    fn push_keeps_empty_values_and_insertion_order() {
        let mut params = Params::new();
        params.push("v", "1");
        params.push("cid", "");
        params.push("t", "event");
        assert_eq!(
            params.pairs(),
            &[
                ("v", "1".to_string()),
                ("cid", String::new()),
                ("t", "event".to_string()),
            ]
        );
    }

    #[test]
    fn duplicate_names_are_not_deduplicated() {
        let mut params = Params::new();
        params.push("cd1", "a");
        params.push("cd1", "b");
        assert_eq!(params.pairs().len(), 2);
    }
}
