use fairway::config::db::DbProfile;
use fairway::db::txn::TxnFuture;
use fairway::infra::state::build_state;
use fairway::state::app_state::AppState;
use fairway::AppError;
use sea_orm::{DatabaseTransaction, TransactionTrait};

/// Fresh, migrated in-memory SQLite state. Every call gets its own database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbProfile::InMemory).build().await
}

/// Run `f` in a transaction that is always committed on `Ok`, whatever the
/// binary's txn policy. For fixtures a later `with_txn` must see.
pub async fn committed<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let db = fairway::db::require_db(state)?;
    let txn = db.begin().await?;
    let out = f(&txn).await?;
    txn.commit().await?;
    Ok(out)
}
