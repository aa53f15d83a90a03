use gymdesk_core::db::open_db_in_memory;
use gymdesk_core::repo::record_repo::{RecordRepository, SqliteRecordRepository};
use gymdesk_core::{seed_sample_data, Table};

#[test]
fn seeding_fills_every_table_once() {
    let conn = open_db_in_memory().unwrap();

    assert!(seed_sample_data(&conn).unwrap());
    assert!(!seed_sample_data(&conn).unwrap());

    let records = SqliteRecordRepository::new(&conn);
    let counts: Vec<u64> = Table::ALL
        .iter()
        .map(|table| records.count_rows(*table).unwrap())
        .collect();
    assert_eq!(counts, vec![6, 6, 6, 6, 7, 7]);
}

#[test]
fn seeding_is_skipped_when_members_exist() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO Members (First_Name, Last_Name, Email, Phone, Date_of_Birth, Join_Date, Status)
         VALUES ('Solo', 'Member', 'solo@email.com', '555-7777', '1991-01-01', '2024-06-01', 'Active');",
        [],
    )
    .unwrap();

    assert!(!seed_sample_data(&conn).unwrap());

    let records = SqliteRecordRepository::new(&conn);
    assert_eq!(records.count_rows(Table::Members).unwrap(), 1);
    assert_eq!(records.count_rows(Table::Trainers).unwrap(), 0);
}

#[test]
fn seeded_rows_keep_literal_values() {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();

    let (name, status): (String, String) = conn
        .query_row(
            "SELECT First_Name || ' ' || Last_Name, Status FROM Members WHERE Member_ID = 6;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(name, "Sarah Brown");
    assert_eq!(status, "Inactive");

    let attendance: String = conn
        .query_row(
            "SELECT Attendance_Status FROM Class_Bookings WHERE Member_ID = 5;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(attendance, "No-Show");
}
