//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod anchor_link;
pub mod contact_form;
pub mod image_import;
pub mod navbar;
pub mod scroll_top;
pub mod tool_card;
pub mod tool_modal;
