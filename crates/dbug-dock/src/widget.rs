use crate::event::{Action, Element, Event, Key, Outcome, Target};
use crate::page::{Dock, DockId, Page, ToggleId};
use crate::page::Mutation;
use crate::resize::{self, ResizeEffect, ResizeState};
use crate::state::{DEFAULT_TAB, DockState, KEY_HEIGHT, KEY_OPEN, KEY_TAB};
use crate::store::StateStore;
use crate::watch::Watcher;
use std::collections::BTreeSet;

/// Drives every dock on a page.
///
/// One widget serves any number of docks. Events are handled the way
/// document-level delegated listeners would handle them, so docks inserted
/// after [`Widget::boot`] work without extra wiring.
#[derive(Debug)]
pub struct Widget<S> {
    store: S,
    resize: ResizeState,
    discovery: Watcher<DockId>,
    observing_document: bool,
    count_observers: BTreeSet<DockId>,
}

impl<S: StateStore> Widget<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            resize: ResizeState::default(),
            discovery: Watcher::new(),
            observing_document: false,
            count_observers: BTreeSet::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize
    }

    /// Initialize the docks already on the page and start watching for
    /// late-inserted ones.
    pub fn boot(&mut self, page: &mut Page) {
        page.take_mutations();
        for id in self.discovery.scan(page.dock_ids()) {
            self.init_dock(page, id);
        }
        self.observing_document = true;
        tracing::debug!(docks = page.docks().len(), "widget booted");
    }

    /// Deliver pending mutation records to the observers.
    ///
    /// Counts are only recomputed for docks whose dump target changed.
    pub fn observe(&mut self, page: &mut Page) {
        let records = page.take_mutations();
        if records.is_empty() {
            return;
        }

        let touched: BTreeSet<DockId> = records
            .iter()
            .filter_map(|record| match record {
                Mutation::DumpTarget(id) => Some(*id),
                Mutation::Document => None,
            })
            .filter(|id| self.count_observers.contains(id))
            .collect();
        for id in touched {
            self.update_count(page, id);
        }

        if self.observing_document {
            for id in self.discovery.scan(page.dock_ids()) {
                self.init_dock(page, id);
            }
        }
    }

    pub fn dispatch(&mut self, page: &mut Page, event: Event) -> Outcome {
        match event {
            Event::Click(target) => self.click(page, target),
            Event::KeyDown(Key::Escape) => match page.first_open_dock() {
                Some(id) => {
                    self.set_open(page, id, false, None);
                    Outcome::HANDLED
                }
                None => Outcome::IGNORED,
            },
            Event::KeyDown(Key::Other(_)) => Outcome::IGNORED,
            Event::PointerDown(target) => match target.element {
                Element::ResizeHandle => self.start_drag(page, target.dock),
                _ => Outcome::IGNORED,
            },
            Event::PointerMove { y } => self.drag_to(page, y),
            Event::PointerUp => self.end_drag(page),
        }
    }

    fn click(&mut self, page: &mut Page, target: Target) -> Outcome {
        let Some(id) = self.resolve(page, target.dock) else {
            return Outcome::IGNORED;
        };

        match target.element {
            Element::Toggle(toggle) => {
                let open = !page.dock(id).is_some_and(Dock::is_open);
                self.set_open(page, id, open, Some(toggle));
                Outcome::PREVENT_DEFAULT
            }
            Element::Tab(name) => {
                let name = if name.is_empty() {
                    DEFAULT_TAB
                } else {
                    name.as_str()
                };
                self.activate_tab(page, id, name);
                self.set_open(page, id, true, None);
                Outcome::HANDLED
            }
            Element::Action(name) => match Action::parse(&name) {
                Some(Action::Close) => {
                    self.set_open(page, id, false, None);
                    Outcome::HANDLED
                }
                Some(action) => {
                    if let Some(dock) = page.dock_mut(id) {
                        dock.set_expanded(action == Action::ExpandAll);
                    }
                    Outcome::HANDLED
                }
                None => {
                    tracing::trace!(action = %name, "unknown dock action");
                    Outcome::IGNORED
                }
            },
            Element::ResizeHandle | Element::Other => Outcome::IGNORED,
        }
    }

    fn start_drag(&mut self, page: &mut Page, dock: Option<DockId>) -> Outcome {
        let Some(id) = self.resolve(page, dock) else {
            return Outcome::IGNORED;
        };
        if !page.dock(id).is_some_and(Dock::has_drawer) {
            return Outcome::IGNORED;
        }

        if let ResizeEffect::Start(id) = self.resize.pointer_down(id) {
            self.set_open(page, id, true, None);
            page.set_drag_listeners(true);
            page.set_user_select_disabled(true);
            tracing::trace!(dock = id.index(), "resize started");
        }
        Outcome::PREVENT_DEFAULT
    }

    fn drag_to(&mut self, page: &mut Page, y: f64) -> Outcome {
        if !page.has_drag_listeners() {
            return Outcome::IGNORED;
        }
        match self.resize.pointer_move(y, page.viewport_height()) {
            ResizeEffect::Resize { dock, height } => {
                if let Some(drawer) = page.dock_mut(dock).and_then(|d| d.drawer.as_mut()) {
                    drawer.height = Some(resize::css_px(height));
                }
                Outcome::HANDLED
            }
            _ => Outcome::IGNORED,
        }
    }

    fn end_drag(&mut self, page: &mut Page) -> Outcome {
        if !page.has_drag_listeners() {
            return Outcome::IGNORED;
        }
        let ResizeEffect::Finish(id) = self.resize.pointer_up() else {
            return Outcome::IGNORED;
        };

        page.set_drag_listeners(false);
        page.set_user_select_disabled(false);

        let height = page
            .dock(id)
            .and_then(Dock::drawer_height)
            .unwrap_or_default()
            .to_string();
        tracing::trace!(dock = id.index(), height = %height, "resize finished");
        self.persist(KEY_HEIGHT, &height);
        Outcome::HANDLED
    }

    /// The target's own dock, else the first dock on the page. Either way
    /// the dock is initialized before use.
    fn resolve(&mut self, page: &mut Page, dock: Option<DockId>) -> Option<DockId> {
        let id = dock
            .filter(|id| page.dock(*id).is_some())
            .or_else(|| page.first_dock())?;
        self.init_dock(page, id);
        Some(id)
    }

    fn init_dock(&mut self, page: &mut Page, id: DockId) {
        let Some(dock) = page.dock_mut(id) else {
            return;
        };
        if dock.initialized {
            return;
        }
        dock.initialized = true;
        let observe_dumps = dock.has_dump_target();

        self.restore_state(page, id);
        self.update_count(page, id);
        if observe_dumps {
            self.count_observers.insert(id);
        }
        tracing::debug!(dock = id.index(), "dock initialized");
    }

    fn restore_state(&mut self, page: &mut Page, id: DockId) {
        if !page.dock(id).is_some_and(Dock::has_drawer) {
            return;
        }

        match DockState::load(&self.store) {
            Ok(state) => {
                if let Some(height) = &state.height
                    && let Some(drawer) = page.dock_mut(id).and_then(|d| d.drawer.as_mut())
                {
                    drawer.height = Some(height.clone());
                }
                let tab = match page.dock(id) {
                    Some(dock) if dock.has_tab(state.tab()) => state.tab(),
                    _ => DEFAULT_TAB,
                };
                self.activate_tab(page, id, tab);
                self.set_open(page, id, state.is_open(), None);
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to restore dock state, using defaults");
                self.activate_tab(page, id, DEFAULT_TAB);
                self.set_open(page, id, false, None);
            }
        }
    }

    fn set_open(&mut self, page: &mut Page, id: DockId, open: bool, toggle: Option<ToggleId>) {
        let Some(dock) = page.dock_mut(id) else {
            return;
        };
        let Some(drawer) = dock.drawer.as_mut() else {
            return;
        };
        drawer.hidden = !open;
        dock.open = open;

        let toggle = toggle
            .or_else(|| page.toggle_in(id))
            .or_else(|| page.first_toggle());
        if let Some(toggle) = toggle.and_then(|t| page.toggle_mut(t)) {
            toggle.expanded = open;
        }

        self.persist(KEY_OPEN, if open { "1" } else { "0" });
    }

    fn activate_tab(&mut self, page: &mut Page, id: DockId, name: &str) {
        let Some(dock) = page.dock_mut(id) else {
            return;
        };
        for tab in &mut dock.tabs {
            tab.active = tab.name == name;
            tab.selected = tab.active;
        }
        for panel in &mut dock.panels {
            panel.active = panel.name == name;
        }
        self.persist(KEY_TAB, name);
    }

    fn update_count(&mut self, page: &mut Page, id: DockId) {
        let Some(dock) = page.dock_mut(id) else {
            return;
        };
        if !dock.dump_target || dock.counter.is_none() {
            return;
        }
        dock.counter = Some(dock.dumps.len().to_string());
        dock.recounts += 1;
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, error = %err, "failed to persist dock state");
        }
    }
}
