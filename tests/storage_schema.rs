mod common;

use common::{test_db, test_db_with_dir, ts};
use rusqlite::Connection;
use std::collections::HashSet;

fn table_names(conn: &Connection) -> HashSet<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")
        .expect("prepare table list");
    stmt.query_map([], |row| row.get(0))
        .expect("query table list")
        .collect::<std::result::Result<HashSet<String>, _>>()
        .expect("collect table list")
}

fn column_names(conn: &Connection, table: &str) -> HashSet<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?)")
        .expect("prepare table info");
    stmt.query_map([table], |row| row.get(0))
        .expect("query table info")
        .collect::<std::result::Result<HashSet<String>, _>>()
        .expect("collect table info")
}

#[test]
fn schema_table_and_columns_exist() {
    let (store, dir) = test_db_with_dir();
    let db_path = dir.path().join(".heartdb").join("heart.db");

    drop(store);
    let conn = Connection::open(db_path).expect("open db");

    assert!(table_names(&conn).contains("heartrate"));

    let columns = column_names(&conn, "heartrate");
    for column in ["id", "time", "name", "value"] {
        assert!(columns.contains(column), "missing heartrate.{column}");
    }
}

#[test]
fn create_schema_discards_all_readings() {
    let store = test_db();
    store.insert(ts("2024-05-01 08:00:00"), "Ana", 72).unwrap();
    store.insert(ts("2024-05-01 08:00:01"), "Luis", 64).unwrap();
    assert_eq!(store.count_readings().unwrap(), 2);

    store.create_schema().unwrap();
    assert_eq!(store.count_readings().unwrap(), 0);
    assert!(store.report(0, 0).unwrap().is_empty());
}

#[test]
fn create_schema_twice_leaves_empty_queryable_table() {
    let store = test_db();
    store.insert(ts("2024-05-01 08:00:00"), "Ana", 72).unwrap();

    store.create_schema().unwrap();
    store.create_schema().unwrap();

    assert_eq!(store.count_readings().unwrap(), 0);
    assert!(store.report(0, 0).unwrap().is_empty());

    // Still writable after the reset.
    store.insert(ts("2024-05-01 09:00:00"), "Luis", 64).unwrap();
    assert_eq!(store.count_readings().unwrap(), 1);
}

#[test]
fn ids_keep_increasing_within_a_schema() {
    let (store, dir) = test_db_with_dir();
    store.insert(ts("2024-05-01 08:00:00"), "Ana", 72).unwrap();
    store.insert(ts("2024-05-01 08:00:01"), "Ana", 73).unwrap();

    drop(store);
    let conn = Connection::open(dir.path().join(".heartdb").join("heart.db")).expect("open db");
    let ids: Vec<i64> = conn
        .prepare("SELECT id FROM heartrate ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<std::result::Result<_, _>>()
        .unwrap();
    assert_eq!(ids, vec![1, 2]);
}
