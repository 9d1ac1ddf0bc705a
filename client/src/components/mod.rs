//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the intake widgets, results, spinner and toasts. Shared
//! state comes in through props or Leptos context providers.

pub mod image_intake;
pub mod loading_spinner;
pub mod measurement_results;
pub mod toast_stack;
