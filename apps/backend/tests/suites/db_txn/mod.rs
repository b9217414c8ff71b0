pub mod txn_policy;
pub mod with_txn;
