use crate::page::{DockId, ToggleId};

/// The control an event landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Toggle(ToggleId),
    /// `data-dbug-tab`; empty selects the default tab.
    Tab(String),
    /// `data-dbug-action`, unparsed; unknown names are ignored.
    Action(String),
    ResizeHandle,
    Other,
}

/// Event target with its nearest dock ancestor.
///
/// Without an ancestor the first dock on the page is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub element: Element,
    pub dock: Option<DockId>,
}

impl Target {
    pub fn new(element: Element, dock: Option<DockId>) -> Self {
        Self { element, dock }
    }

    pub fn tab(dock: DockId, name: &str) -> Self {
        Self::new(Element::Tab(name.to_string()), Some(dock))
    }

    pub fn action(dock: DockId, name: &str) -> Self {
        Self::new(Element::Action(name.to_string()), Some(dock))
    }

    pub fn resize_handle(dock: DockId) -> Self {
        Self::new(Element::ResizeHandle, Some(dock))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Click(Target),
    KeyDown(Key),
    /// Mouse down or touch start.
    PointerDown(Target),
    /// Mouse move or first touch point; `y` is the client coordinate.
    PointerMove { y: f64 },
    /// Mouse up or touch end.
    PointerUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Close,
    ExpandAll,
    CollapseAll,
}

impl Action {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "close" => Some(Action::Close),
            "expandAll" => Some(Action::ExpandAll),
            "collapseAll" => Some(Action::CollapseAll),
            _ => None,
        }
    }
}

/// What dispatch did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub handled: bool,
    /// The host should suppress the browser default.
    pub prevent_default: bool,
}

impl Outcome {
    pub const IGNORED: Outcome = Outcome {
        handled: false,
        prevent_default: false,
    };

    pub const HANDLED: Outcome = Outcome {
        handled: true,
        prevent_default: false,
    };

    pub const PREVENT_DEFAULT: Outcome = Outcome {
        handled: true,
        prevent_default: true,
    };
}
