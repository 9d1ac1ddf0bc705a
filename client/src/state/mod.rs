//! Client-side state containers provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `measure` is the page controller's state, `intake` is per-widget local
//! state, and `notice` backs the toast stack.

pub mod intake;
pub mod measure;
pub mod notice;
