//! Storage layer: connection pool construction and repositories
//!
//! The pool is built by the process entry point and injected into the
//! HTTP state; handlers borrow it per query and never own it. The
//! `milestones` table itself is externally owned. Its expected shape:
//!
//! ```sql
//! CREATE TABLE milestones (
//!     id     BIGSERIAL PRIMARY KEY,
//!     sow_id BIGINT NOT NULL,
//!     name   TEXT NOT NULL,
//!     status TEXT NOT NULL
//! );
//! ```

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, MilestoneRepo};
