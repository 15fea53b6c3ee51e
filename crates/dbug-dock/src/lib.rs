//! Dock widget.
//!
//! The dock is plain markup produced by `dbug-runtime`. This crate reads that
//! markup into a [`Page`] and drives it with typed events through a single
//! [`Widget::dispatch`] entry point, the way delegated document listeners
//! would:
//!
//! - click on the toggle, a tab, or an action button
//! - Escape closes the open dock
//! - pointer down/move/up on the resize handle
//!
//! UI preferences survive page loads through a [`StateStore`].

pub mod error;
pub mod event;
pub mod markup;
pub mod page;
pub mod resize;
pub mod state;
pub mod store;
pub mod watch;
pub mod widget;

pub use error::{Error, Result};
pub use event::{Action, Element, Event, Key, Outcome, Target};
pub use page::{Dock, DockId, DumpBlock, Page, Toggle, ToggleId};
pub use resize::{ResizeEffect, ResizeState};
pub use state::{DEFAULT_TAB, DockState, KEY_HEIGHT, KEY_OPEN, KEY_TAB};
pub use store::{FileStore, MemoryStore, StateStore};
pub use watch::Watcher;
pub use widget::Widget;
