//! Testing infrastructure for dbug integration tests.
//!
//! - `fixtures`: value graphs (nested, shared, cyclic) and sample records
//! - `assertions`: structural checks over rendered markup
//! - `pages`: dock pages and stores for widget tests

pub mod assertions;
pub mod fixtures;
pub mod pages;
