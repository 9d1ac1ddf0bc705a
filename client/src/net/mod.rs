//! Networking for the measurement upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` sends the multipart request; the wire model lives in the `record` crate.

pub mod api;
