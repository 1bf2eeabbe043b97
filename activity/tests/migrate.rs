#![cfg(feature = "sqlite")]

use lifelink_activity::filter::ActivityFilter;
use lifelink_activity::log::ActivityLog;
use lifelink_activity::migrate::migrate_file_to_sqlite;
use lifelink_activity::store::file::FileKvStore;
use lifelink_activity::store::sqlite::SqliteKvStore;

#[test]
fn migrate_copies_the_collection_into_sqlite() {
    let root = tempfile::tempdir().unwrap();
    let file_dir = root.path().join(".lifelink");

    let log = ActivityLog::new(Box::new(FileKvStore::new(&file_dir)));
    log.record_campaign_created("c1", "City Drive", None);
    log.record_campaign_joined("c1", "City Drive", Some("u1"));

    let db = root.path().join("activity.db");
    let n = migrate_file_to_sqlite(&file_dir, &db).unwrap();
    assert_eq!(n, 2);

    let migrated = ActivityLog::new(Box::new(SqliteKvStore::new(&db)));
    let records = migrated.get_activities(&ActivityFilter::default());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Campaign Joined");
    assert_eq!(records[1].title, "Campaign Created");
}

#[test]
fn migrating_a_missing_collection_is_a_no_op() {
    let root = tempfile::tempdir().unwrap();
    let db = root.path().join("activity.db");
    let n = migrate_file_to_sqlite(&root.path().join(".lifelink"), &db).unwrap();
    assert_eq!(n, 0);
}
