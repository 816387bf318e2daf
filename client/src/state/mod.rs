//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`modal`, `file_import`, `nav`, `contact`) as
//! plain structs so the page rules are testable without a browser.
//! Components hold them in signals.

pub mod contact;
pub mod file_import;
pub mod modal;
pub mod nav;
