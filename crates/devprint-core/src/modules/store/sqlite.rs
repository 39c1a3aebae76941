//! SQLite-backed account store.

use std::path::Path;

use chrono::{DateTime, Utc};
use devprint_types::{Account, AccountError, FingerprintConfig};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::{params, Connection, Error as SqliteError, OptionalExtension, Row};
use tracing::{debug, error, info};

use super::{AccountStore, StoreSession};
use crate::error::AppResult;
use crate::utils::paths::get_data_dir;

const SELECT_COLUMNS: &str = "phone_number, api_preset, api_id, api_hash, use_official_api,
    device_model, system_version, app_version, lang_code, system_lang_code,
    device_unique_id, fingerprint_last_rotated";

/// Account store over a single SQLite connection.
///
/// Sessions hold the connection lock for their whole scope, so at most one
/// session is live per store.
pub struct SqliteAccountStore {
    conn: Mutex<Connection>,
}

impl SqliteAccountStore {
    /// Open (or create) the database file and initialise the schema.
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "Opened account database");
        Self::from_connection(conn)
    }

    /// Open the configured database file inside the data directory.
    pub fn open_default(config: &FingerprintConfig) -> AppResult<Self> {
        let path = get_data_dir()?.join(&config.database_file);
        Self::open(&path)
    }

    /// Private in-memory database, mostly for tests and dry runs.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        init_schema(&conn)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Load a single account by phone number.
    pub fn load_account(&self, phone_number: &str) -> AppResult<Account> {
        let conn = self.conn.lock();
        let raw = conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM accounts WHERE phone_number = ?1"),
                [phone_number],
                RawAccount::from_row,
            )
            .optional()?;

        match raw {
            Some(raw) => Ok(raw.into_account()?),
            None => Err(AccountError::NotFound { phone_number: phone_number.to_string() }.into()),
        }
    }

    /// All accounts, ordered by phone number.
    pub fn list_accounts(&self) -> AppResult<Vec<Account>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare(&format!("SELECT {SELECT_COLUMNS} FROM accounts ORDER BY phone_number"))?;
        let rows = stmt.query_map([], RawAccount::from_row)?;

        let mut accounts = Vec::new();
        for raw in rows {
            accounts.push(raw?.into_account()?);
        }
        Ok(accounts)
    }
}

impl AccountStore for SqliteAccountStore {
    fn scoped_session(&self) -> AppResult<Box<dyn StoreSession + '_>> {
        Ok(Box::new(SqliteSession { conn: self.conn.lock(), staged: Vec::new() }))
    }
}

/// Scoped session holding the store's connection lock.
pub struct SqliteSession<'a> {
    conn: MutexGuard<'a, Connection>,
    staged: Vec<Account>,
}

impl StoreSession for SqliteSession<'_> {
    fn stage(&mut self, account: &Account) {
        self.staged.push(account.clone());
    }

    fn commit(&mut self) -> AppResult<()> {
        let count = self.staged.len();
        write_staged(&mut self.conn, &self.staged).map_err(|e| {
            error!(count, error = %e, "Failed to commit staged accounts");
            AccountError::StorageError { message: e.to_string() }
        })?;

        debug!(count, "Committed staged accounts");
        self.staged.clear();
        Ok(())
    }
}

/// Upsert every staged record inside one transaction.
fn write_staged(conn: &mut Connection, staged: &[Account]) -> Result<(), SqliteError> {
    let tx = conn.transaction()?;
    for account in staged {
        let _rows_affected: usize = tx.execute(
            "INSERT INTO accounts (phone_number, api_preset, api_id, api_hash, use_official_api,
                device_model, system_version, app_version, lang_code, system_lang_code,
                device_unique_id, fingerprint_last_rotated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             ON CONFLICT(phone_number) DO UPDATE SET
                api_preset = excluded.api_preset,
                api_id = excluded.api_id,
                api_hash = excluded.api_hash,
                use_official_api = excluded.use_official_api,
                device_model = excluded.device_model,
                system_version = excluded.system_version,
                app_version = excluded.app_version,
                lang_code = excluded.lang_code,
                system_lang_code = excluded.system_lang_code,
                device_unique_id = excluded.device_unique_id,
                fingerprint_last_rotated = excluded.fingerprint_last_rotated",
            params![
                account.phone_number,
                account.api_preset,
                account.api_id,
                account.api_hash,
                account.use_official_api,
                account.device_model,
                account.system_version,
                account.app_version,
                account.lang_code,
                account.system_lang_code,
                account.device_unique_id,
                account.fingerprint_last_rotated.map(|t| t.to_rfc3339()),
            ],
        )?;
    }
    tx.commit()
}

impl Drop for SqliteSession<'_> {
    fn drop(&mut self) {
        if !self.staged.is_empty() {
            debug!(count = self.staged.len(), "Discarding uncommitted accounts");
        }
    }
}

fn add_column_if_missing(conn: &Connection, statement: &str) -> Result<(), SqliteError> {
    match conn.execute(statement, []) {
        Ok(_) => Ok(()),
        Err(SqliteError::SqliteFailure(_, Some(message)))
            if message.contains("duplicate column name") =>
        {
            Ok(())
        },
        Err(err) => Err(err),
    }
}

/// Create the accounts table and bring older databases up to date.
fn init_schema(conn: &Connection) -> Result<(), SqliteError> {
    let _rows_affected: usize = conn.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            phone_number TEXT PRIMARY KEY,
            api_preset TEXT,
            api_id INTEGER,
            api_hash TEXT,
            use_official_api INTEGER NOT NULL DEFAULT 1,
            device_model TEXT,
            system_version TEXT,
            app_version TEXT,
            lang_code TEXT,
            system_lang_code TEXT
        )",
        [],
    )?;

    add_column_if_missing(conn, "ALTER TABLE accounts ADD COLUMN device_unique_id TEXT")?;
    add_column_if_missing(conn, "ALTER TABLE accounts ADD COLUMN fingerprint_last_rotated TEXT")?;

    Ok(())
}

/// Row image before timestamp decoding.
struct RawAccount {
    account: Account,
    last_rotated: Option<String>,
}

impl RawAccount {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            account: Account {
                phone_number: row.get(0)?,
                api_preset: row.get(1)?,
                api_id: row.get(2)?,
                api_hash: row.get(3)?,
                use_official_api: row.get(4)?,
                device_model: row.get(5)?,
                system_version: row.get(6)?,
                app_version: row.get(7)?,
                lang_code: row.get(8)?,
                system_lang_code: row.get(9)?,
                device_unique_id: row.get(10)?,
                fingerprint_last_rotated: None,
            },
            last_rotated: row.get(11)?,
        })
    }

    fn into_account(self) -> Result<Account, AccountError> {
        let mut account = self.account;
        if let Some(raw) = self.last_rotated {
            let parsed = DateTime::parse_from_rfc3339(&raw).map_err(|e| AccountError::Corrupted {
                phone_number: account.phone_number.clone(),
                message: format!("bad fingerprint_last_rotated {raw:?}: {e}"),
            })?;
            account.fingerprint_last_rotated = Some(parsed.with_timezone(&Utc));
        }
        Ok(account)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::modules::store::persist_account;

    fn sample_account() -> Account {
        let mut account = Account::new("+15550100").with_preset("TelegramDesktop");
        account.device_model = Some("Desktop".to_string());
        account.system_version = Some("Windows 10".to_string());
        account.app_version = Some("4.8.1 x64".to_string());
        account.lang_code = Some("en".to_string());
        account.system_lang_code = Some("en-US".to_string());
        account.api_id = Some(12345);
        account.fingerprint_last_rotated = Some(Utc::now());
        account
    }

    #[test]
    fn test_persist_and_load() {
        let store = SqliteAccountStore::open_in_memory().unwrap();
        let account = sample_account();

        persist_account(&store, &account).unwrap();

        let loaded = store.load_account("+15550100").unwrap();
        assert_eq!(loaded.device_model, account.device_model);
        assert_eq!(loaded.api_id, Some(12345));
        // RFC 3339 keeps sub-second precision
        assert_eq!(loaded.fingerprint_last_rotated, account.fingerprint_last_rotated);
    }

    #[test]
    fn test_commit_upserts() {
        let store = SqliteAccountStore::open_in_memory().unwrap();
        let mut account = sample_account();
        persist_account(&store, &account).unwrap();

        account.device_model = Some("Laptop".to_string());
        persist_account(&store, &account).unwrap();

        let all = store.list_accounts().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].device_model.as_deref(), Some("Laptop"));
    }

    #[test]
    fn test_dropped_session_discards_staged() {
        let store = SqliteAccountStore::open_in_memory().unwrap();
        {
            let mut session = store.scoped_session().unwrap();
            session.stage(&sample_account());
        }

        let err = store.load_account("+15550100").unwrap_err();
        assert!(matches!(err, AppError::Account(AccountError::NotFound { .. })));
        // lock was released on drop
        assert!(store.scoped_session().is_ok());
    }

    #[test]
    fn test_schema_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.db");

        let store = SqliteAccountStore::open(&path).unwrap();
        persist_account(&store, &sample_account()).unwrap();
        drop(store);

        let reopened = SqliteAccountStore::open(&path).unwrap();
        assert_eq!(reopened.list_accounts().unwrap().len(), 1);
    }

    /// Sets an environment variable and restores the previous value on drop.
    struct ScopedEnv {
        key: &'static str,
        previous: Option<std::ffi::OsString>,
    }

    impl ScopedEnv {
        fn set(key: &'static str, value: &std::path::Path) -> Self {
            let previous = std::env::var_os(key);
            std::env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            match self.previous.take() {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }

    #[test]
    fn test_open_default_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let key = crate::utils::paths::DATA_DIR_ENV;
        let before = std::env::var_os(key);

        {
            let _env = ScopedEnv::set(key, dir.path());
            let config = FingerprintConfig::default();
            let store = SqliteAccountStore::open_default(&config).unwrap();
            persist_account(&store, &sample_account()).unwrap();

            assert!(dir.path().join(&config.database_file).exists());
        }

        assert_eq!(std::env::var_os(key), before);
    }

    #[test]
    fn test_commit_failure_is_storage_error() {
        let store = SqliteAccountStore::open_in_memory().unwrap();
        let _ = store.conn.lock().execute("DROP TABLE accounts", []).unwrap();

        let err = persist_account(&store, &sample_account()).unwrap_err();

        assert!(matches!(err, AppError::Account(AccountError::StorageError { .. })));
        // session released despite the failure
        assert!(store.scoped_session().is_ok());
    }

    #[test]
    fn test_corrupted_timestamp_is_reported() {
        let store = SqliteAccountStore::open_in_memory().unwrap();
        persist_account(&store, &sample_account()).unwrap();
        store
            .conn
            .lock()
            .execute("UPDATE accounts SET fingerprint_last_rotated = 'yesterday'", [])
            .unwrap();

        let err = store.load_account("+15550100").unwrap_err();
        assert!(matches!(err, AppError::Account(AccountError::Corrupted { .. })));
    }
}
