// Option + selection value. Identity is structural: (label, value), never position.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: i64,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self { label: label.into(), value }
    }

    /// Same label and same value.
    pub fn same_as(&self, other: &SelectOption) -> bool {
        self.label == other.label && self.value == other.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Single,
    Multiple,
}

/// Externally owned value of a select box. The widget only ever replaces it
/// through a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<SelectOption>),
    /// Order is the order of selection (chips render in this order).
    Multiple(Vec<SelectOption>),
}

impl Selection {
    pub fn empty(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => Selection::Single(None),
            SelectMode::Multiple => Selection::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectMode {
        match self {
            Selection::Single(_) => SelectMode::Single,
            Selection::Multiple(_) => SelectMode::Multiple,
        }
    }

    /// Options currently shown in the value area, in display order.
    pub fn items(&self) -> &[SelectOption] {
        match self {
            Selection::Single(Some(op)) => std::slice::from_ref(op),
            Selection::Single(None) => &[],
            Selection::Multiple(ops) => ops,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Single: the value equals `op`. Multiple: `op` is a member.
    pub fn contains(&self, op: &SelectOption) -> bool {
        self.items().iter().any(|o| o.same_as(op))
    }

    /// Appends at the end. A single value is read as a 0/1 list.
    pub fn with_appended(&self, op: SelectOption) -> Selection {
        let mut ops = self.items().to_vec();
        ops.push(op);
        Selection::Multiple(ops)
    }

    /// Drops every entry structurally equal to `op`, keeping order.
    pub fn without(&self, op: &SelectOption) -> Selection {
        Selection::Multiple(
            self.items().iter().filter(|o| !o.same_as(op)).cloned().collect(),
        )
    }

    /// Short human form for the status bar.
    pub fn summary(&self) -> String {
        match self {
            Selection::Single(None) => "(none)".to_string(),
            Selection::Single(Some(op)) => op.label.clone(),
            Selection::Multiple(ops) if ops.is_empty() => "[]".to_string(),
            Selection::Multiple(ops) => {
                let labels: Vec<&str> = ops.iter().map(|o| o.label.as_str()).collect();
                format!("[{}]", labels.join(", "))
            }
        }
    }
}

/// Options used when the config file lists none.
pub fn default_options() -> Vec<SelectOption> {
    [
        ("First", 1),
        ("Second", 2),
        ("Third", 3),
        ("Fourth", 4),
        ("Fifth", 5),
        ("Sixth", 6),
        ("seventh", 7),
        ("eighth", 8),
        ("ninth", 9),
        ("ten", 10),
    ]
    .into_iter()
    .map(|(label, value)| SelectOption::new(label, value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(label: &str, value: i64) -> SelectOption {
        SelectOption::new(label, value)
    }

    #[test]
    fn equality_needs_both_fields() {
        assert!(op("a", 1).same_as(&op("a", 1)));
        assert!(!op("a", 1).same_as(&op("a", 2)));
        assert!(!op("a", 1).same_as(&op("b", 1)));
    }

    #[test]
    fn single_contains_is_value_equality() {
        let v = Selection::Single(Some(op("First", 1)));
        assert!(v.contains(&op("First", 1)));
        assert!(!v.contains(&op("Second", 2)));
        assert!(!Selection::Single(None).contains(&op("First", 1)));
    }

    #[test]
    fn append_preserves_order() {
        let v = Selection::Multiple(vec![op("b", 2), op("a", 1)]);
        let next = v.with_appended(op("c", 3));
        assert_eq!(next, Selection::Multiple(vec![op("b", 2), op("a", 1), op("c", 3)]));
    }

    #[test]
    fn without_matches_label_and_value() {
        // same label, different value must survive
        let v = Selection::Multiple(vec![op("a", 1), op("a", 9), op("b", 2)]);
        let next = v.without(&op("a", 1));
        assert_eq!(next, Selection::Multiple(vec![op("a", 9), op("b", 2)]));
    }

    #[test]
    fn empty_follows_mode() {
        assert_eq!(Selection::empty(SelectMode::Single), Selection::Single(None));
        assert_eq!(Selection::empty(SelectMode::Multiple), Selection::Multiple(vec![]));
        assert!(Selection::empty(SelectMode::Multiple).is_empty());
    }

    #[test]
    fn default_options_have_unique_values() {
        let ops = default_options();
        assert_eq!(ops.len(), 10);
        let mut values: Vec<i64> = ops.iter().map(|o| o.value).collect();
        values.dedup();
        assert_eq!(values.len(), 10);
    }
}
