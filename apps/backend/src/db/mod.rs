//! Database plumbing: transaction scope helper.

pub mod txn;

pub use txn::with_txn;
