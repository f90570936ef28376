//! SeaORM entities for the reputation ledger tables.
//!
//! One logical ledger entry per user, split across three tables sharing
//! the user id as primary key: lifetime totals (`users`), the auction
//! sub-record (`bids`), and the daily participation window
//! (`daily_points`).

pub mod bids;
pub mod daily_points;
pub mod users;
