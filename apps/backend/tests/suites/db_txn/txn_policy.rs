//! The policy is a process-wide OnceLock, set once by `common`.

use fairway::db::txn_policy::{current, set_txn_policy, TxnPolicy};

#[test]
fn common_init_installs_rollback_by_default() {
    if std::env::var("FAIRWAY_TXN_POLICY").is_err() {
        assert_eq!(current(), TxnPolicy::RollbackOnOk);
    }
}

#[test]
fn set_policy_is_first_write_wins() {
    let before = current();
    set_txn_policy(TxnPolicy::CommitOnOk);
    set_txn_policy(TxnPolicy::RollbackOnOk);
    assert_eq!(current(), before);
}
