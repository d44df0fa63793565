//! HTTP handlers for the portfolio backend.
//!
//! Every handler is a stateless request/response transform over the
//! external document store.

pub mod contact;
pub mod diagnostics;
pub mod projects;
pub mod root;

pub use contact::submit_contact;
pub use diagnostics::database_diagnostics;
pub use projects::list_projects;
pub use root::{hello, read_root};
