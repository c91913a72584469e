pub mod accounting;
pub mod client;
#[deprecated(note = "import from `crate::api::accounting` instead")]
pub mod expenses;
pub mod types;

pub use client::*;
pub use types::*;
