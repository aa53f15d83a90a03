use gymdesk_core::db::migrations::latest_version;
use gymdesk_core::db::{create_schema, open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

const TABLES: [&str; 6] = [
    "Members",
    "Membership_Plans",
    "Member_Memberships",
    "Trainers",
    "Classes",
    "Class_Bookings",
];

#[test]
fn open_db_in_memory_creates_every_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn create_schema_can_run_repeatedly() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO Trainers (First_Name, Last_Name, Specialization, Email, Phone, Hire_Date)
         VALUES ('Ada', 'Park', 'Yoga', 'ada@gym.com', '555-2000', '2024-01-01');",
        [],
    )
    .unwrap();

    create_schema(&mut conn).unwrap();
    create_schema(&mut conn).unwrap();

    let trainers: i64 = conn
        .query_row("SELECT COUNT(*) FROM Trainers;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(trainers, 1);
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn opening_same_file_twice_keeps_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gym_management.db");

    let first = open_db(&path).unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    assert_table_exists(&second, "Class_Bookings");
}

#[test]
fn legacy_database_without_version_is_upgraded_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE Members (
            Member_ID INTEGER PRIMARY KEY AUTOINCREMENT,
            First_Name TEXT NOT NULL,
            Last_Name TEXT NOT NULL,
            Email TEXT UNIQUE NOT NULL,
            Phone TEXT NOT NULL,
            Date_of_Birth DATE NOT NULL,
            Join_Date DATE NOT NULL,
            Status TEXT CHECK(Status IN ('Active', 'Inactive')) DEFAULT 'Active'
        );
        INSERT INTO Members (First_Name, Last_Name, Email, Phone, Date_of_Birth, Join_Date)
        VALUES ('Old', 'Row', 'old@email.com', '555-0000', '1980-01-01', '2020-01-01');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    for table in TABLES {
        assert_table_exists(&conn, table);
    }
    let members: i64 = conn
        .query_row("SELECT COUNT(*) FROM Members;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(members, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn foreign_keys_are_enforced_on_open() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
