//! Ledger repository.
//!
//! One logical entry per user lives split across `users`, `bids` and
//! `daily_points`. This module owns that split: reads come back as one
//! joined [`LedgerEntry`], and the write helpers keep the caller's
//! transaction the only place where the three tables meet.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QuerySelect, RelationTrait, Select, Set,
};
use time::OffsetDateTime;

use crate::domain::award::DailyWindow;
use crate::entities::{bids, daily_points, users};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// One user's ledger entry, joined from its three backing rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub user_id: i64,
    pub total_points: i64,
    pub bid_amount: i64,
    pub last_claim_day: OffsetDateTime,
    pub last_participation_day: OffsetDateTime,
    pub daily_participation: i64,
    pub daily_bonus: i64,
}

impl LedgerEntry {
    pub fn daily_window(&self) -> DailyWindow {
        DailyWindow {
            day: self.last_participation_day,
            participation: self.daily_participation,
            bonus: self.daily_bonus,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct LedgerRow {
    id: i64,
    points: i64,
    bid: i64,
    last_claim: OffsetDateTime,
    last_particip_dt: OffsetDateTime,
    particip: i64,
    won: i64,
}

impl From<LedgerRow> for LedgerEntry {
    fn from(row: LedgerRow) -> Self {
        Self {
            user_id: row.id,
            total_points: row.points,
            bid_amount: row.bid,
            last_claim_day: row.last_claim,
            last_participation_day: row.last_particip_dt,
            daily_participation: row.particip,
            daily_bonus: row.won,
        }
    }
}

fn joined(user_id: i64) -> Select<users::Entity> {
    users::Entity::find_by_id(user_id)
        .join(JoinType::InnerJoin, users::Relation::Bids.def())
        .join(JoinType::InnerJoin, users::Relation::DailyPoints.def())
        .select_only()
        .column(users::Column::Id)
        .column(users::Column::Points)
        .column_as(bids::Column::Bid, "bid")
        .column_as(daily_points::Column::LastClaim, "last_claim")
        .column_as(daily_points::Column::LastParticipDt, "last_particip_dt")
        .column_as(daily_points::Column::Particip, "particip")
        .column_as(daily_points::Column::Won, "won")
}

/// Read-only lookup. `Ok(None)` when the user never participated.
pub async fn find<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Option<LedgerEntry>, DomainError> {
    let row = joined(user_id)
        .into_model::<LedgerRow>()
        .one(conn)
        .await
        .map_err(|e| db_err("query ledger entry", e))?;
    Ok(row.map(LedgerEntry::from))
}

/// Lookup for a read-modify-write sequence. On Postgres the joined rows
/// are locked (`FOR UPDATE`) so concurrent awards for the same user
/// serialize at the read; SQLite serializes writers on its own.
pub async fn find_for_update<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Option<LedgerEntry>, DomainError> {
    let mut query = joined(user_id);
    if conn.get_database_backend() == DbBackend::Postgres {
        query = query.lock_exclusive();
    }
    let row = query
        .into_model::<LedgerRow>()
        .one(conn)
        .await
        .map_err(|e| db_err("query ledger entry for update", e))?;
    Ok(row.map(LedgerEntry::from))
}

/// Insert all three rows for a first-time participant.
pub async fn create_entry<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    points: i64,
    bonus: i64,
    last_claim: OffsetDateTime,
    participation_day: OffsetDateTime,
) -> Result<(), DomainError> {
    users::ActiveModel {
        id: Set(user_id),
        points: Set(points + bonus),
    }
    .insert(conn)
    .await
    .map_err(|e| db_err("insert users row", e))?;

    bids::ActiveModel {
        id: Set(user_id),
        bid: Set(0),
    }
    .insert(conn)
    .await
    .map_err(|e| db_err("insert bids row", e))?;

    daily_points::ActiveModel {
        id: Set(user_id),
        last_claim: Set(last_claim),
        last_particip_dt: Set(participation_day),
        particip: Set(points),
        won: Set(bonus),
    }
    .insert(conn)
    .await
    .map_err(|e| db_err("insert daily_points row", e))?;

    Ok(())
}

/// Overwrite the daily window for the first participation of a new day.
pub async fn start_new_day<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    day: OffsetDateTime,
    points: i64,
    bonus: i64,
) -> Result<(), DomainError> {
    let res = daily_points::Entity::update_many()
        .col_expr(daily_points::Column::LastParticipDt, Expr::val(day).into())
        .col_expr(daily_points::Column::Particip, Expr::val(points).into())
        .col_expr(daily_points::Column::Won, Expr::val(bonus).into())
        .filter(daily_points::Column::Id.eq(user_id))
        .exec(conn)
        .await
        .map_err(|e| db_err("reset daily window", e))?;
    require_entry(res.rows_affected, user_id)
}

/// Accumulate an already-clamped pair into today's window.
pub async fn accumulate_daily<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    points: i64,
    bonus: i64,
) -> Result<(), DomainError> {
    let res = daily_points::Entity::update_many()
        .col_expr(
            daily_points::Column::Particip,
            Expr::col(daily_points::Column::Particip).add(points),
        )
        .col_expr(
            daily_points::Column::Won,
            Expr::col(daily_points::Column::Won).add(bonus),
        )
        .filter(daily_points::Column::Id.eq(user_id))
        .exec(conn)
        .await
        .map_err(|e| db_err("accumulate daily window", e))?;
    require_entry(res.rows_affected, user_id)
}

/// Add credited points to the lifetime total.
pub async fn add_total_points<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    delta: i64,
) -> Result<(), DomainError> {
    let res = users::Entity::update_many()
        .col_expr(
            users::Column::Points,
            Expr::col(users::Column::Points).add(delta),
        )
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await
        .map_err(|e| db_err("add total points", e))?;
    require_entry(res.rows_affected, user_id)
}

/// The write helpers only run after the caller read the entry under the
/// same transaction, so zero affected rows means it vanished underneath
/// us.
fn require_entry(rows_affected: u64, user_id: i64) -> Result<(), DomainError> {
    if rows_affected == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::User,
            format!("ledger entry for user {user_id} disappeared mid-update"),
        ));
    }
    Ok(())
}

fn db_err(ctx: &str, e: DbErr) -> DomainError {
    let kind = match &e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => InfraErrorKind::DbUnavailable,
        _ => InfraErrorKind::Other("database".to_string()),
    };
    DomainError::infra(kind, format!("{ctx}: {e}"))
}
