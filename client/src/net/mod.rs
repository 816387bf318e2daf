//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `verify` is the only outbound seam: the image-verification submit.

pub mod verify;
