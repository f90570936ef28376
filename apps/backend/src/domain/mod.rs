//! Domain layer: pure ledger and game-session logic.

pub mod award;
pub mod card;
pub mod day;
pub mod gallows;
pub mod rules;
pub mod session;

pub use award::{decide_award, AwardDecision, CapNote, DailyWindow};
pub use card::{SessionCard, Settlement};
pub use day::Cutover;
pub use gallows::Gallows;
pub use session::{GameSession, PointAward, Rejection, SessionState};

#[cfg(test)]
mod tests_award;
#[cfg(test)]
mod tests_day;
#[cfg(test)]
mod tests_session;
