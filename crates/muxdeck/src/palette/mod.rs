//! Command palette engine
//!
//! Pure derivation from workspace state to visible rows (`catalog`, `query`,
//! `selection`) plus the single-flight `execution` controller. Nothing in
//! here touches the terminal.

pub mod catalog;
pub mod entry;
pub mod execution;
pub mod query;
pub mod selection;

pub use catalog::build_catalog;
pub use execution::{ExecutionContext, ExecutionController};
pub use query::{resolve, EmptyState, Resolution};
