//! Account store abstraction.
//!
//! Persistence is always scoped: a session is acquired, records are staged,
//! `commit` writes them, and dropping the session releases the underlying
//! resources whether or not the commit happened or succeeded.

mod sqlite;

pub use sqlite::{SqliteAccountStore, SqliteSession};

use devprint_types::Account;

use crate::error::AppResult;

/// Durable account storage keyed by phone number.
pub trait AccountStore: Send + Sync {
    /// Acquire a scoped session. Released on drop.
    fn scoped_session(&self) -> AppResult<Box<dyn StoreSession + '_>>;
}

/// A unit of work against the store.
pub trait StoreSession {
    /// Queue a record for the next commit.
    fn stage(&mut self, account: &Account);

    /// Write every staged record atomically.
    fn commit(&mut self) -> AppResult<()>;
}

/// Stage a single account and commit it in its own session.
pub fn persist_account(store: &dyn AccountStore, account: &Account) -> AppResult<()> {
    let mut session = store.scoped_session()?;
    session.stage(account);
    session.commit()
}
