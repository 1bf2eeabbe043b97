//! One-shot migration of the activity collection between backends.

/// Copy the collection from a file-backend directory into a SQLite database
/// file. Returns the number of records migrated.
#[cfg(feature = "sqlite")]
pub fn migrate_file_to_sqlite(
    file_dir: &std::path::Path,
    sqlite_path: &std::path::Path,
) -> anyhow::Result<usize> {
    use crate::log::ACTIVITY_KEY;
    use crate::store::KvStore;
    use crate::store::file::FileKvStore;
    use crate::store::sqlite::SqliteKvStore;
    use crate::types::ActivityRecord;

    let src = FileKvStore::new(file_dir);
    let Some(doc) = src.get(ACTIVITY_KEY)? else {
        return Ok(0);
    };
    let records: Vec<ActivityRecord> = serde_json::from_str(&doc)?;
    if let Some(dir) = sqlite_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let dst = SqliteKvStore::new(sqlite_path);
    dst.set(ACTIVITY_KEY, &doc)?;
    Ok(records.len())
}

#[cfg(not(feature = "sqlite"))]
pub fn migrate_file_to_sqlite(
    _file_dir: &std::path::Path,
    _sqlite_path: &std::path::Path,
) -> anyhow::Result<usize> {
    anyhow::bail!("sqlite backend not compiled; enable with `--features lifelink-activity/sqlite`")
}
