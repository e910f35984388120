// ── Device selection ──
//
// Selection is tracked by device key, so it survives re-fetches and
// filtering. Group helpers drive the per-type header checkbox.

use std::collections::HashSet;

/// Tri-state of a group header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSelection {
    None,
    Some,
    All,
}

/// Set of selected device keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect one device.
    pub fn toggle(&mut self, key: impl Into<String>, selected: bool) {
        let key = key.into();
        if selected {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    /// Select or deselect every key in `keys`.
    pub fn set_all<I, K>(&mut self, keys: I, selected: bool)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        for key in keys {
            self.toggle(key, selected);
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Header state for a group. An empty group is never selected.
    pub fn group_state<'a, I>(&self, keys: I) -> GroupSelection
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (mut total, mut selected) = (0_usize, 0_usize);
        for key in keys {
            total += 1;
            if self.contains(key) {
                selected += 1;
            }
        }
        match selected {
            0 => GroupSelection::None,
            n if n == total => GroupSelection::All,
            _ => GroupSelection::Some,
        }
    }

    /// `"1 device selected"` or `"N devices selected"`.
    pub fn summary(&self) -> String {
        match self.len() {
            1 => "1 device selected".to_owned(),
            n => format!("{n} devices selected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = Selection::new();
        selection.toggle("d1", true);
        selection.toggle("d2", true);
        selection.toggle("d1", false);
        assert!(!selection.contains("d1"));
        assert!(selection.contains("d2"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn set_all_and_clear() {
        let mut selection = Selection::new();
        selection.set_all(["a", "b", "c"], true);
        assert_eq!(selection.len(), 3);
        selection.set_all(["a", "b"], false);
        assert_eq!(selection.len(), 1);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn group_state_is_tri_state() {
        let mut selection = Selection::new();
        let group = ["t1", "t2"];
        assert_eq!(selection.group_state(group), GroupSelection::None);
        selection.toggle("t1", true);
        assert_eq!(selection.group_state(group), GroupSelection::Some);
        selection.toggle("t2", true);
        assert_eq!(selection.group_state(group), GroupSelection::All);
        assert_eq!(selection.group_state(std::iter::empty()), GroupSelection::None);
    }

    #[test]
    fn summary_pluralizes() {
        let mut selection = Selection::new();
        assert_eq!(selection.summary(), "0 devices selected");
        selection.toggle("d1", true);
        assert_eq!(selection.summary(), "1 device selected");
        selection.toggle("d2", true);
        assert_eq!(selection.summary(), "2 devices selected");
    }
}
