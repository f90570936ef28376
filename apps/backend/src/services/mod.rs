//! Service layer: transactional ledger operations and the game session
//! runtime.

pub mod games;
pub mod ledger;
