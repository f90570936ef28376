//! Repository functions, generic over `ConnectionTrait` so callers can
//! run them on a pooled connection or inside a transaction.

pub mod ledger;
