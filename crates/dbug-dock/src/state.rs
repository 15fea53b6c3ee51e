use crate::error::Result;
use crate::store::StateStore;

pub const KEY_OPEN: &str = "dbug.open";
pub const KEY_HEIGHT: &str = "dbug.height";
pub const KEY_TAB: &str = "dbug.tab";

/// Tab shown when nothing usable is stored.
pub const DEFAULT_TAB: &str = "dump";

/// Persisted dock preferences. Each field is absent until first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockState {
    pub open: Option<bool>,
    /// CSS length such as `"320px"`.
    pub height: Option<String>,
    pub active_tab: Option<String>,
}

impl DockState {
    /// Read all three keys. Empty strings count as absent; any value other
    /// than `"1"` means closed.
    pub fn load(store: &impl StateStore) -> Result<Self> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        Ok(Self {
            open: store.get(KEY_OPEN)?.map(|v| v == "1"),
            height: non_empty(store.get(KEY_HEIGHT)?),
            active_tab: non_empty(store.get(KEY_TAB)?),
        })
    }

    pub fn is_open(&self) -> bool {
        self.open.unwrap_or(false)
    }

    pub fn tab(&self) -> &str {
        self.active_tab.as_deref().unwrap_or(DEFAULT_TAB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_empty_store() {
        let state = DockState::load(&MemoryStore::new()).unwrap();
        assert_eq!(state, DockState::default());
        assert!(!state.is_open());
        assert_eq!(state.tab(), "dump");
    }

    #[test]
    fn test_load_values() {
        let store = MemoryStore::new()
            .with(KEY_OPEN, "1")
            .with(KEY_HEIGHT, "412px")
            .with(KEY_TAB, "request");

        let state = DockState::load(&store).unwrap();
        assert_eq!(state.open, Some(true));
        assert_eq!(state.height.as_deref(), Some("412px"));
        assert_eq!(state.tab(), "request");
    }

    #[test]
    fn test_load_treats_empty_and_unknown_as_defaults() {
        let store = MemoryStore::new()
            .with(KEY_OPEN, "yes")
            .with(KEY_HEIGHT, "")
            .with(KEY_TAB, "");

        let state = DockState::load(&store).unwrap();
        assert_eq!(state.open, Some(false));
        assert_eq!(state.height, None);
        assert_eq!(state.tab(), "dump");
    }

    #[test]
    fn test_load_propagates_failure() {
        assert!(DockState::load(&MemoryStore::failing()).is_err());
    }
}
