pub mod contact;
pub mod project;

pub use contact::{ContactMessage, ContactRecord};
pub use project::{seed_projects, Project};
