//! Browser-style front-end over a mock DOM
//!
//! The DOM here is an in-memory tree, so the whole event-to-render path is
//! testable without a browser.

mod dom;
mod driver;

pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, DISPLAY_TEST_ID};
pub use driver::DomDriver;
