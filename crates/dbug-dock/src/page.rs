//! Page model: the docks and toggles found in a document, plus the bits of
//! window state the widget touches.

use crate::event::{Element, Target};
use crate::markup::{self, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DockId(usize);

impl DockId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in document order.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleId(usize);

impl ToggleId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A `.dbug-toggle` button, inside a dock or anywhere else on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub(crate) dock: Option<DockId>,
    pub(crate) expanded: bool,
}

impl Toggle {
    pub fn dock(&self) -> Option<DockId> {
        self.dock
    }

    /// `aria-expanded`
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// One rendered dump in the dump target: the block's own open flag and
/// those of the composites nested in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpBlock {
    pub open: bool,
    pub items: Vec<bool>,
}

impl DumpBlock {
    fn set_open_all(&mut self, open: bool) {
        self.open = open;
        self.items.iter_mut().for_each(|item| *item = open);
    }

    pub fn all_open(&self) -> bool {
        self.open && self.items.iter().all(|open| *open)
    }

    pub fn all_closed(&self) -> bool {
        !self.open && self.items.iter().all(|open| !*open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Drawer {
    pub(crate) hidden: bool,
    pub(crate) height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TabButton {
    pub(crate) name: String,
    pub(crate) active: bool,
    pub(crate) selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Panel {
    pub(crate) name: String,
    pub(crate) active: bool,
}

/// A `[data-dbug]` container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dock {
    pub(crate) open: bool,
    pub(crate) initialized: bool,
    pub(crate) drawer: Option<Drawer>,
    pub(crate) tabs: Vec<TabButton>,
    pub(crate) panels: Vec<Panel>,
    pub(crate) counter: Option<String>,
    pub(crate) dump_target: bool,
    pub(crate) dumps: Vec<DumpBlock>,
    pub(crate) recounts: usize,
}

impl Dock {
    /// `is-open` class
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn has_drawer(&self) -> bool {
        self.drawer.is_some()
    }

    /// Drawer `aria-hidden`
    pub fn drawer_hidden(&self) -> Option<bool> {
        self.drawer.as_ref().map(|d| d.hidden)
    }

    /// Inline drawer height, e.g. `"320px"`.
    pub fn drawer_height(&self) -> Option<&str> {
        self.drawer.as_ref().and_then(|d| d.height.as_deref())
    }

    pub fn tab_names(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|t| t.name.as_str())
    }

    pub fn has_tab(&self, name: &str) -> bool {
        self.tabs.iter().any(|t| t.name == name)
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.tabs
            .iter()
            .find(|t| t.active)
            .map(|t| t.name.as_str())
    }

    /// Tab `aria-selected`
    pub fn tab_selected(&self, name: &str) -> Option<bool> {
        self.tabs.iter().find(|t| t.name == name).map(|t| t.selected)
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.active)
            .map(|p| p.name.as_str())
    }

    pub fn count_text(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    pub fn has_dump_target(&self) -> bool {
        self.dump_target
    }

    pub fn dumps(&self) -> &[DumpBlock] {
        &self.dumps
    }

    pub fn dump_count(&self) -> usize {
        self.dumps.len()
    }

    /// How many times the live count was recomputed.
    pub fn recounts(&self) -> usize {
        self.recounts
    }

    pub(crate) fn set_expanded(&mut self, open: bool) {
        self.dumps.iter_mut().for_each(|d| d.set_open_all(open));
    }

    fn absorb_details(&mut self, tag: &Tag) {
        if tag.name() != "details" {
            return;
        }
        let open = tag.has_attr("open");
        if tag.has_class("dbug-block") {
            self.dumps.push(DumpBlock {
                open,
                items: Vec::new(),
            });
        } else if tag.has_class("dbug-item")
            && let Some(block) = self.dumps.last_mut()
        {
            block.items.push(open);
        }
    }
}

/// Mutation records, scoped the way observers see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mutation {
    /// Somewhere in the document outside any dump target.
    Document,
    /// Inside the dump target of a dock.
    DumpTarget(DockId),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    docks: Vec<Dock>,
    toggles: Vec<Toggle>,
    viewport_height: f64,
    drag_listeners: bool,
    user_select_disabled: bool,
    mutations: Vec<Mutation>,
}

struct Frame {
    name: String,
    dock: Option<DockId>,
    dump_target: bool,
}

impl Page {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    /// Read docks and toggles from a document.
    pub fn parse(html: &str) -> Self {
        let mut page = Self::default();
        page.absorb(html);
        page.mutations.clear();
        page
    }

    pub fn with_viewport(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    fn absorb(&mut self, html: &str) -> Vec<DockId> {
        let mut added = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

        for tag in markup::scan(html) {
            if let Tag::Close { name } = &tag {
                if let Some(at) = stack.iter().rposition(|f| &f.name == name) {
                    stack.truncate(at);
                }
                continue;
            }

            let mut frame = Frame {
                name: tag.name().to_string(),
                dock: None,
                dump_target: false,
            };

            if tag.has_attr("data-dbug") && tag.opens_element() {
                let id = DockId::new(self.docks.len());
                self.docks.push(Dock::default());
                added.push(id);
                frame.dock = Some(id);
            }

            let current = stack.iter().rev().find_map(|f| f.dock).or(frame.dock);
            let in_dump_target = stack
                .iter()
                .rev()
                .take_while(|f| f.dock.is_none())
                .any(|f| f.dump_target);

            if tag.has_class("dbug-toggle") {
                self.toggles.push(Toggle {
                    dock: current,
                    expanded: tag.attr("aria-expanded") == Some("true"),
                });
            }

            if let Some(id) = current {
                let dock = &mut self.docks[id.0];
                absorb_dock_tag(dock, &tag, in_dump_target);
                if tag.attr("data-dbug-target") == Some("dump") {
                    dock.dump_target = true;
                    frame.dump_target = true;
                }
            }

            if tag.opens_element() {
                stack.push(frame);
            }
        }

        if !added.is_empty() {
            self.mutations.push(Mutation::Document);
        }
        added
    }

    /// Insert markup late. Any docks it contains are returned in order.
    pub fn insert_html(&mut self, html: &str) -> Vec<DockId> {
        let added = self.absorb(html);
        if added.is_empty() {
            self.mutations.push(Mutation::Document);
        }
        added
    }

    /// Append rendered dumps to a dock's dump target.
    ///
    /// Returns false when the dock has no dump target.
    pub fn append_dump(&mut self, id: DockId, fragment: &str) -> bool {
        let Some(dock) = self.docks.get_mut(id.0) else {
            return false;
        };
        if !dock.dump_target {
            return false;
        }
        for tag in markup::scan(fragment) {
            dock.absorb_details(&tag);
        }
        self.mutations.push(Mutation::DumpTarget(id));
        true
    }

    /// Record a mutation unrelated to any dock.
    pub fn touch(&mut self) {
        self.mutations.push(Mutation::Document);
    }

    pub(crate) fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutations)
    }

    pub fn docks(&self) -> &[Dock] {
        &self.docks
    }

    pub fn dock_ids(&self) -> Vec<DockId> {
        (0..self.docks.len()).map(DockId::new).collect()
    }

    pub fn dock(&self, id: DockId) -> Option<&Dock> {
        self.docks.get(id.0)
    }

    pub(crate) fn dock_mut(&mut self, id: DockId) -> Option<&mut Dock> {
        self.docks.get_mut(id.0)
    }

    pub fn first_dock(&self) -> Option<DockId> {
        (!self.docks.is_empty()).then_some(DockId::new(0))
    }

    pub fn first_open_dock(&self) -> Option<DockId> {
        self.docks.iter().position(|d| d.open).map(DockId::new)
    }

    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    pub fn toggle(&self, id: ToggleId) -> Option<&Toggle> {
        self.toggles.get(id.0)
    }

    pub(crate) fn toggle_mut(&mut self, id: ToggleId) -> Option<&mut Toggle> {
        self.toggles.get_mut(id.0)
    }

    pub fn toggle_ids(&self) -> Vec<ToggleId> {
        (0..self.toggles.len()).map(ToggleId).collect()
    }

    /// First toggle inside `dock`.
    pub fn toggle_in(&self, dock: DockId) -> Option<ToggleId> {
        self.toggles
            .iter()
            .position(|t| t.dock == Some(dock))
            .map(ToggleId)
    }

    /// First toggle anywhere on the page.
    pub fn first_toggle(&self) -> Option<ToggleId> {
        (!self.toggles.is_empty()).then_some(ToggleId(0))
    }

    /// Click/press target for a toggle, carrying its dock ancestor.
    pub fn toggle_target(&self, id: ToggleId) -> Target {
        Target {
            element: Element::Toggle(id),
            dock: self.toggle(id).and_then(Toggle::dock),
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
    }

    /// Window-level move/up listeners are attached.
    pub fn has_drag_listeners(&self) -> bool {
        self.drag_listeners
    }

    pub(crate) fn set_drag_listeners(&mut self, attached: bool) {
        self.drag_listeners = attached;
    }

    /// Body text selection is suppressed.
    pub fn user_select_disabled(&self) -> bool {
        self.user_select_disabled
    }

    pub(crate) fn set_user_select_disabled(&mut self, disabled: bool) {
        self.user_select_disabled = disabled;
    }
}

fn absorb_dock_tag(dock: &mut Dock, tag: &Tag, in_dump_target: bool) {
    if in_dump_target {
        dock.absorb_details(tag);
        return;
    }

    if tag.attr("id") == Some("dbug-drawer") {
        dock.drawer = Some(Drawer {
            hidden: tag.attr("aria-hidden") == Some("true"),
            height: None,
        });
    }
    if let Some(name) = tag.attr("data-dbug-tab") {
        dock.tabs.push(TabButton {
            name: name.to_string(),
            active: tag.has_class("is-active"),
            selected: tag.attr("aria-selected") == Some("true"),
        });
    }
    if let Some(name) = tag.attr("data-dbug-panel") {
        dock.panels.push(Panel {
            name: name.to_string(),
            active: tag.has_class("is-active"),
        });
    }
    if tag.attr("data-dbug-count") == Some("dump") {
        dock.counter = Some(String::new());
    }
}
