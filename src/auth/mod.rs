//! Role-based page and action policy.
//!
//! Lookup-only: the policy tells a UI which pages a role may navigate to
//! and which mutating actions it may invoke. Request-level enforcement is
//! deliberately out of scope.

pub mod policy;

pub use policy::{allowed_pages, can_perform, default_page, Action, Page, Role};
