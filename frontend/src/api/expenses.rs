//! Former home of the expense client, kept so existing `api::expenses` paths
//! keep resolving. Everything here is re-exported from [`super::accounting`];
//! new code should import from there directly.

pub use super::accounting::*;
