//! Illustration policy data and book loading

mod data;
pub mod loader;

pub use data::IllustrationPolicy;
pub use loader::{load_default_book, load_policies, load_policies_from_reader};
