//! Fixed rules shared by the ledger and the game session.

use time::Duration;

/// Maximum participation points a user can earn per cutover-anchored day.
pub const DAILY_CAP: i64 = 10;

/// Participation points every terminal game outcome is worth (when it
/// pays out at all).
pub const PARTICIPATION_POINTS: i64 = 2;

/// Idle duration after which a session times out.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::seconds(600);

/// A cancelled session only pays out when it ran longer than this.
pub const STOP_MIN_ELAPSED: Duration = Duration::seconds(60);

/// ...and when at least this many guesses were made.
pub const STOP_MIN_GUESSES: usize = 6;

/// The guessable alphabet.
pub fn is_valid_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}
