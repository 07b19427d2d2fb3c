//! Repository implementations for database access
//!
//! Every statement is parameterized; the only dynamic piece of query
//! text is an ORDER BY identifier drawn from a static allow-list.

pub mod milestones;

pub use milestones::{DbError, MilestoneRepo};
