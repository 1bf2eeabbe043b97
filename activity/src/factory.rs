use crate::store::KvStore;
use crate::store::file::FileKvStore;

#[cfg(feature = "sqlite")]
use crate::store::sqlite::SqliteKvStore;

/// Backend selection for activity persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    File,
    #[cfg(feature = "sqlite")]
    Sqlite,
}

/// Choose backend using env `LIFELINK_ACTIVITY_BACKEND` if present: `sqlite`
/// or `file`. Defaults to the file backend; if `sqlite` is requested but not
/// compiled in, falls back to the file backend.
pub fn choose_backend_from_env() -> Backend {
    let v = std::env::var("LIFELINK_ACTIVITY_BACKEND").unwrap_or_default();
    match v.as_str() {
        #[cfg(feature = "sqlite")]
        "sqlite" | "SQLITE" => Backend::Sqlite,
        _ => Backend::File,
    }
}

/// Build a store rooted at `<root>/.lifelink/`. Paths can be overridden via
/// env:
/// - `LIFELINK_ACTIVITY_DIR` for the file backend's base directory
/// - `LIFELINK_ACTIVITY_DB` for the SQLite file path
pub fn open_store(
    root: &std::path::Path,
    backend: Option<Backend>,
) -> anyhow::Result<Box<dyn KvStore>> {
    let base = root.join(".lifelink");
    let be = backend.unwrap_or_else(choose_backend_from_env);
    Ok(match be {
        Backend::File => {
            let dir = std::env::var("LIFELINK_ACTIVITY_DIR")
                .map(std::path::PathBuf::from)
                .unwrap_or(base);
            Box::new(FileKvStore::new(dir))
        }
        #[cfg(feature = "sqlite")]
        Backend::Sqlite => {
            let path = std::env::var("LIFELINK_ACTIVITY_DB")
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|_| base.join("activity.db"));
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            Box::new(SqliteKvStore::new(path))
        }
    })
}
