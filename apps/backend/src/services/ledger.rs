//! Reputation ledger service.
//!
//! `award_points` is the one write path into the ledger. Branch
//! selection and the writes it implies happen inside a single
//! transaction against a row-locked read, so concurrent awards for the
//! same user cannot both pass the daily-cap check. The notification is
//! pushed after commit and can only be logged away, never roll the
//! credit back.

use sea_orm::DatabaseConnection;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::db::with_txn;
use crate::domain::award::{decide_award, AwardDecision};
use crate::error::AppError;
use crate::notify::Notice;
use crate::repos::ledger::{self as ledger_repo, LedgerEntry};
use crate::state::AppState;

/// Read-only join across the three ledger tables. `Ok(None)` when the
/// user has never participated.
pub async fn lookup(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Option<LedgerEntry>, AppError> {
    Ok(ledger_repo::find(db, user_id).await?)
}

/// Credit a game outcome to a user's ledger, applying the daily cap and
/// bonus scaling. Returns the amount actually credited (0 when the
/// stored state is skewed into the future).
pub async fn award_points(
    state: &AppState,
    user_id: i64,
    game: &str,
    points: i64,
    bonus: i64,
) -> Result<i64, AppError> {
    if points < 0 || bonus < 0 {
        return Err(AppError::invalid(format!(
            "award amounts must be non-negative (points={points}, bonus={bonus})"
        )));
    }

    let now = OffsetDateTime::now_utc();
    let today = state.game.cutover.current_day(now);
    let claim_seed = state.game.cutover.previous_day(now);

    let decision = with_txn(&state.db, move |txn| {
        Box::pin(async move {
            let entry = ledger_repo::find_for_update(txn, user_id).await?;
            let window = entry.as_ref().map(LedgerEntry::daily_window);
            let decision = decide_award(window.as_ref(), today, points, bonus);

            match decision {
                AwardDecision::NoEntry { points, bonus } => {
                    // last_claim starts one day back so a brand-new user
                    // is immediately eligible for the daily claim.
                    ledger_repo::create_entry(txn, user_id, points, bonus, claim_seed, today)
                        .await?;
                }
                AwardDecision::NewDay { points, bonus } => {
                    ledger_repo::start_new_day(txn, user_id, today, points, bonus).await?;
                    ledger_repo::add_total_points(txn, user_id, points + bonus).await?;
                }
                AwardDecision::SameDay { points, bonus, .. } => {
                    ledger_repo::accumulate_daily(txn, user_id, points, bonus).await?;
                    ledger_repo::add_total_points(txn, user_id, points + bonus).await?;
                }
                AwardDecision::Skewed => {
                    // Inconsistent state: report, never mutate.
                }
            }
            Ok(decision)
        })
    })
    .await?;

    let text = notice_text(&decision, user_id, game, points, bonus);
    if let Err(e) = state
        .program_log
        .send(Notice::plain(&text, &state.game.display_name))
        .await
    {
        warn!(user_id, error = %e, "award notification failed");
    }

    let credited = decision.credited();
    match decision {
        AwardDecision::Skewed => {
            warn!(
                user_id,
                game, "stored participation day is in the future; award skipped"
            );
        }
        _ => info!(user_id, game, credited, "points awarded"),
    }
    Ok(credited)
}

fn notice_text(
    decision: &AwardDecision,
    user_id: i64,
    game: &str,
    requested_points: i64,
    requested_bonus: i64,
) -> String {
    match decision {
        AwardDecision::NoEntry { points, bonus } => format!(
            "[NEW PARTICIPANT] <@{user_id}> gained {} points for {game}, \
             as {points} participation and {bonus} bonus points.",
            points + bonus
        ),
        AwardDecision::NewDay { points, bonus } => format!(
            "[FIRST OF DAY] <@{user_id}> gained {} points for {game}, \
             as {points} participation and {bonus} bonus points.",
            points + bonus
        ),
        AwardDecision::SameDay {
            points,
            bonus,
            capped: Some(cap),
        } => format!(
            "[HIT CAP] <@{user_id}> gained {} points for {game}, \
             as {points} participation and {bonus} bonus points \
             out of a possible {} points as {} participation and {} bonus points.",
            points + bonus,
            cap.requested_points + cap.requested_bonus,
            cap.requested_points,
            cap.requested_bonus
        ),
        AwardDecision::SameDay {
            points,
            bonus,
            capped: None,
        } => format!(
            "<@{user_id}> gained {} points for {game}, \
             as {points} participation and {bonus} bonus points.",
            points + bonus
        ),
        AwardDecision::Skewed => format!(
            "[ERROR] <@{user_id}> gained 0 instead of {} points for {game}, \
             as {requested_points} participation and {requested_bonus} bonus points \
             because something went wrong.",
            requested_points + requested_bonus
        ),
    }
}
