use dbug_dock::{
    DockId, Element, Event, FileStore, Key, KEY_HEIGHT, KEY_OPEN, KEY_TAB, MemoryStore, Outcome,
    Page, StateStore, Target, Widget,
};
use dbug_testing::fixtures;
use dbug_testing::pages::{self, HOST_PAGE};
use dbug_types::Value;

fn first(page: &Page) -> DockId {
    page.first_dock().unwrap()
}

fn click_toggle(widget: &mut Widget<impl StateStore>, page: &mut Page, dock: DockId) -> Outcome {
    let toggle = page.toggle_in(dock).unwrap();
    let target = page.toggle_target(toggle);
    widget.dispatch(page, Event::Click(target))
}

fn two_dump_page() -> String {
    pages::page_with_dumps(vec![Value::from(1i64), Value::text("two")])
}

#[test]
fn test_dock_lifecycle_persists_every_change() {
    let (mut page, mut widget) = pages::boot(&two_dump_page(), MemoryStore::new());
    let id = first(&page);

    let dock = page.dock(id).unwrap();
    assert_eq!(dock.active_tab(), Some("dump"));
    assert!(!dock.is_open());
    assert_eq!(dock.drawer_hidden(), Some(true));

    // toggle opens
    let outcome = click_toggle(&mut widget, &mut page, id);
    assert!(outcome.prevent_default);
    let dock = page.dock(id).unwrap();
    assert!(dock.is_open());
    assert_eq!(dock.drawer_hidden(), Some(false));
    assert!(page.toggles()[0].is_expanded());
    assert_eq!(widget.store().peek(KEY_OPEN), Some("1"));

    // tab switch
    widget.dispatch(&mut page, Event::Click(Target::tab(id, "request")));
    let dock = page.dock(id).unwrap();
    assert_eq!(dock.active_tab(), Some("request"));
    assert_eq!(dock.active_panel(), Some("request"));
    assert_eq!(dock.tab_selected("request"), Some(true));
    assert_eq!(dock.tab_selected("dump"), Some(false));
    assert_eq!(widget.store().peek(KEY_TAB), Some("request"));

    // Escape closes
    let outcome = widget.dispatch(&mut page, Event::KeyDown(Key::Escape));
    assert!(outcome.handled);
    assert!(!page.dock(id).unwrap().is_open());
    assert!(!page.toggles()[0].is_expanded());
    assert_eq!(widget.store().peek(KEY_OPEN), Some("0"));

    // drag from 400px to 700px
    let outcome = widget.dispatch(&mut page, Event::PointerDown(Target::resize_handle(id)));
    assert!(outcome.prevent_default);
    assert!(page.dock(id).unwrap().is_open());
    assert!(page.has_drag_listeners());
    assert!(page.user_select_disabled());

    widget.dispatch(&mut page, Event::PointerMove { y: 600.0 });
    assert_eq!(page.dock(id).unwrap().drawer_height(), Some("400px"));
    widget.dispatch(&mut page, Event::PointerMove { y: 300.0 });
    assert_eq!(page.dock(id).unwrap().drawer_height(), Some("700px"));

    widget.dispatch(&mut page, Event::PointerUp);
    assert_eq!(widget.store().peek(KEY_HEIGHT), Some("700px"));
    assert!(!page.has_drag_listeners());
    assert!(!page.user_select_disabled());
    assert!(!widget.resize_state().is_dragging());

    // moves after release do nothing
    let outcome = widget.dispatch(&mut page, Event::PointerMove { y: 100.0 });
    assert_eq!(outcome, Outcome::IGNORED);
    assert_eq!(page.dock(id).unwrap().drawer_height(), Some("700px"));
}

#[test]
fn test_state_restored_on_next_page_load() {
    let store = MemoryStore::new()
        .with(KEY_OPEN, "1")
        .with(KEY_HEIGHT, "420px")
        .with(KEY_TAB, "info");

    let (page, _widget) = pages::boot(&two_dump_page(), store);
    let dock = page.dock(first(&page)).unwrap();
    assert!(dock.is_open());
    assert_eq!(dock.drawer_height(), Some("420px"));
    assert_eq!(dock.active_tab(), Some("info"));
    assert_eq!(dock.active_panel(), Some("info"));
}

#[test]
fn test_failing_storage_falls_back_to_defaults() {
    let store = MemoryStore::new().with(KEY_OPEN, "1").with(KEY_TAB, "info");
    let mut failing = store.clone();
    failing.set_failing(true);

    let (mut page, mut widget) = pages::boot(&two_dump_page(), failing);
    let id = first(&page);
    let dock = page.dock(id).unwrap();
    assert!(!dock.is_open());
    assert_eq!(dock.active_tab(), Some("dump"));

    // still interactive, writes are dropped
    click_toggle(&mut widget, &mut page, id);
    assert!(page.dock(id).unwrap().is_open());
    assert_eq!(widget.store().peek(KEY_OPEN), Some("1"));
    assert_eq!(widget.store().peek(KEY_TAB), Some("info"));
}

#[test]
fn test_file_store_survives_widget_restart() {
    let (_dir, store) = pages::temp_file_store().unwrap();
    let html = two_dump_page();

    let mut page = Page::parse(&html).with_viewport(pages::VIEWPORT);
    let mut widget = Widget::new(store.clone());
    widget.boot(&mut page);
    let id = first(&page);
    widget.dispatch(&mut page, Event::Click(Target::tab(id, "info")));

    let mut reloaded = Page::parse(&html);
    Widget::new(FileStore::new(store.path())).boot(&mut reloaded);
    let dock = reloaded.dock(first(&reloaded)).unwrap();
    assert!(dock.is_open());
    assert_eq!(dock.active_tab(), Some("info"));
}

#[test]
fn test_count_tracks_dump_target_only() {
    let (mut page, mut widget) = pages::boot(&two_dump_page(), MemoryStore::new());
    let id = first(&page);
    assert_eq!(page.dock(id).unwrap().count_text(), Some("2"));
    let recounts = page.dock(id).unwrap().recounts();

    page.touch();
    widget.observe(&mut page);
    assert_eq!(page.dock(id).unwrap().recounts(), recounts);

    assert!(page.append_dump(id, &pages::dump_fragment(&Value::Null)));
    assert!(page.append_dump(id, &pages::dump_fragment(&Value::Bool(true))));
    widget.observe(&mut page);
    let dock = page.dock(id).unwrap();
    assert_eq!(dock.count_text(), Some("4"));
    assert_eq!(dock.recounts(), recounts + 1);
}

#[test]
fn test_late_inserted_dock_is_initialized_once() {
    let (mut page, mut widget) = pages::boot(HOST_PAGE, MemoryStore::new().with(KEY_TAB, "info"));
    assert!(page.docks().is_empty());

    let added = page.insert_html(&pages::dock_fragment(vec![Value::from(1i64)]));
    assert_eq!(added.len(), 1);
    assert!(!page.dock(added[0]).unwrap().is_initialized());

    widget.observe(&mut page);
    let dock = page.dock(added[0]).unwrap();
    assert!(dock.is_initialized());
    assert_eq!(dock.active_tab(), Some("info"));
    assert_eq!(dock.count_text(), Some("1"));

    page.touch();
    widget.observe(&mut page);
    assert_eq!(page.dock(added[0]).unwrap().recounts(), 1);

    click_toggle(&mut widget, &mut page, added[0]);
    assert!(page.dock(added[0]).unwrap().is_open());
}

#[test]
fn test_events_before_boot_initialize_lazily() {
    let mut page = Page::parse(&two_dump_page());
    let mut widget = Widget::new(MemoryStore::new());
    let id = first(&page);

    click_toggle(&mut widget, &mut page, id);
    let dock = page.dock(id).unwrap();
    assert!(dock.is_initialized());
    assert!(dock.is_open());
    assert_eq!(dock.count_text(), Some("2"));

    widget.boot(&mut page);
    assert!(page.dock(id).unwrap().is_open());
    assert_eq!(page.dock(id).unwrap().recounts(), 1);
}

#[test]
fn test_expand_and_collapse_all() {
    let html = pages::page_with_dumps(vec![
        Value::Composite(fixtures::indirect_cycle()),
        Value::Structured(fixtures::sample_user()),
    ]);
    let (mut page, mut widget) = pages::boot(&html, MemoryStore::new());
    let id = first(&page);
    assert!(page.dock(id).unwrap().dumps().iter().any(|d| !d.all_open()));

    widget.dispatch(&mut page, Event::Click(Target::action(id, "expandAll")));
    assert!(page.dock(id).unwrap().dumps().iter().all(|d| d.all_open()));

    widget.dispatch(&mut page, Event::Click(Target::action(id, "collapseAll")));
    assert!(page.dock(id).unwrap().dumps().iter().all(|d| d.all_closed()));
}

#[test]
fn test_close_action_and_unknown_action() {
    let (mut page, mut widget) =
        pages::boot(&two_dump_page(), MemoryStore::new().with(KEY_OPEN, "1"));
    let id = first(&page);
    assert!(page.dock(id).unwrap().is_open());

    let outcome = widget.dispatch(&mut page, Event::Click(Target::action(id, "explode")));
    assert_eq!(outcome, Outcome::IGNORED);
    assert!(page.dock(id).unwrap().is_open());

    widget.dispatch(&mut page, Event::Click(Target::action(id, "close")));
    assert!(!page.dock(id).unwrap().is_open());
    assert_eq!(widget.store().peek(KEY_OPEN), Some("0"));
}

#[test]
fn test_tab_click_opens_and_empty_tab_selects_dump() {
    let (mut page, mut widget) =
        pages::boot(&two_dump_page(), MemoryStore::new().with(KEY_TAB, "info"));
    let id = first(&page);

    widget.dispatch(&mut page, Event::Click(Target::tab(id, "")));
    let dock = page.dock(id).unwrap();
    assert_eq!(dock.active_tab(), Some("dump"));
    assert!(dock.is_open());
}

#[test]
fn test_detached_toggle_drives_first_dock() {
    let html = format!(
        "<nav><button class=\"dbug-toggle\" aria-expanded=\"false\">dBug</button></nav>{}",
        pages::dock_fragment(vec![])
    );
    let (mut page, mut widget) = pages::boot(&html, MemoryStore::new());
    let detached = page.toggle_ids()[0];
    assert_eq!(page.toggle(detached).unwrap().dock(), None);

    let target = page.toggle_target(detached);
    widget.dispatch(&mut page, Event::Click(target));
    assert!(page.dock(first(&page)).unwrap().is_open());
    assert!(page.toggle(detached).unwrap().is_expanded());
}

#[test]
fn test_escape_closes_first_open_dock_only() {
    let html = format!(
        "{}{}",
        pages::dock_fragment(vec![]),
        pages::dock_fragment(vec![])
    );
    let (mut page, mut widget) = pages::boot(&html, MemoryStore::new());
    let ids = page.dock_ids();
    click_toggle(&mut widget, &mut page, ids[0]);
    click_toggle(&mut widget, &mut page, ids[1]);

    widget.dispatch(&mut page, Event::KeyDown(Key::Escape));
    assert!(!page.dock(ids[0]).unwrap().is_open());
    assert!(page.dock(ids[1]).unwrap().is_open());

    widget.dispatch(&mut page, Event::KeyDown(Key::Escape));
    assert!(!page.dock(ids[1]).unwrap().is_open());

    let outcome = widget.dispatch(&mut page, Event::KeyDown(Key::Escape));
    assert_eq!(outcome, Outcome::IGNORED);
}

#[test]
fn test_drag_is_clamped() {
    let (mut page, mut widget) = pages::boot(&two_dump_page(), MemoryStore::new());
    let id = first(&page);

    widget.dispatch(&mut page, Event::PointerDown(Target::resize_handle(id)));
    widget.dispatch(&mut page, Event::PointerMove { y: -100.0 });
    assert_eq!(page.dock(id).unwrap().drawer_height(), Some("850px"));
    widget.dispatch(&mut page, Event::PointerMove { y: 990.0 });
    assert_eq!(page.dock(id).unwrap().drawer_height(), Some("180px"));

    page.set_viewport_height(0.0);
    widget.dispatch(&mut page, Event::PointerMove { y: 400.0 });
    assert_eq!(page.dock(id).unwrap().drawer_height(), Some("400px"));
    widget.dispatch(&mut page, Event::PointerUp);
    assert_eq!(widget.store().peek(KEY_HEIGHT), Some("400px"));
}

#[test]
fn test_drag_needs_a_drawer() {
    let (mut page, mut widget) = pages::boot("<div data-dbug><p>bare</p></div>", MemoryStore::new());
    let id = first(&page);

    let outcome = widget.dispatch(&mut page, Event::PointerDown(Target::resize_handle(id)));
    assert_eq!(outcome, Outcome::IGNORED);
    assert!(!page.has_drag_listeners());

    let outcome = widget.dispatch(&mut page, Event::Click(Target::new(Element::Other, Some(id))));
    assert_eq!(outcome, Outcome::IGNORED);
}

#[test]
fn test_events_without_docks_are_ignored() {
    let (mut page, mut widget) = pages::boot(HOST_PAGE, MemoryStore::new());
    let outcome = widget.dispatch(&mut page, Event::Click(Target::new(Element::Tab("info".into()), None)));
    assert_eq!(outcome, Outcome::IGNORED);
    assert!(widget.store().peek(KEY_TAB).is_none());
}
