use chrono::{NaiveDate, NaiveTime};
use gymdesk_core::db::open_db_in_memory;
use gymdesk_core::model::booking::{BookingField, NewBooking};
use gymdesk_core::model::class::{ClassField, NewClass};
use gymdesk_core::model::status::{AttendanceStatus, ClassDay};
use gymdesk_core::model::trainer::{NewTrainer, TrainerField};
use gymdesk_core::repo::booking_repo::{BookingRepository, SqliteBookingRepository};
use gymdesk_core::repo::class_repo::{ClassRepository, SqliteClassRepository};
use gymdesk_core::repo::record_repo::{RecordRepository, SqliteRecordRepository};
use gymdesk_core::repo::trainer_repo::{SqliteTrainerRepository, TrainerRepository};
use gymdesk_core::{seed_sample_data, ClearField, ConstraintKind, RepoError, Table};
use rusqlite::Connection;

fn seeded() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    conn
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn duplicate_booking_triple_is_rejected() {
    let conn = seeded();
    let repo = SqliteBookingRepository::new(&conn);

    let err = repo
        .insert_booking(&NewBooking {
            member_id: 1,
            class_id: 1,
            booking_date: date(2024, 11, 18),
            attendance_status: AttendanceStatus::Booked,
        })
        .unwrap_err();

    match err {
        RepoError::Constraint(violation) => {
            assert!(violation.is_unique_on(Table::ClassBookings));
        }
        other => panic!("unexpected error: {other}"),
    }
    let same_triple: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM Class_Bookings
             WHERE Member_ID = 1 AND Class_ID = 1 AND Booking_Date = '2024-11-18';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(same_triple, 1);
}

#[test]
fn same_member_and_class_on_another_date_is_allowed() {
    let conn = seeded();
    let repo = SqliteBookingRepository::new(&conn);

    let id = repo
        .insert_booking(&NewBooking {
            member_id: 1,
            class_id: 1,
            booking_date: date(2024, 11, 25),
            attendance_status: AttendanceStatus::default(),
        })
        .unwrap();

    let booking = repo.get_booking(id).unwrap().unwrap();
    assert_eq!(booking.attendance_status, AttendanceStatus::Booked);
    assert_eq!(repo.list_bookings().unwrap().len(), 8);
}

#[test]
fn booking_for_unknown_member_fails_foreign_key() {
    let conn = seeded();
    let repo = SqliteBookingRepository::new(&conn);

    let err = repo
        .insert_booking(&NewBooking {
            member_id: 404,
            class_id: 1,
            booking_date: date(2024, 12, 1),
            attendance_status: AttendanceStatus::Booked,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Constraint(ref violation) if violation.kind == ConstraintKind::ForeignKey
    ));
}

#[test]
fn attendance_update_stores_hyphenated_label() {
    let conn = seeded();
    let repo = SqliteBookingRepository::new(&conn);

    repo.update_booking_field(3, &BookingField::AttendanceStatus(AttendanceStatus::NoShow))
        .unwrap();

    let stored: String = conn
        .query_row(
            "SELECT Attendance_Status FROM Class_Bookings WHERE Booking_ID = 3;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "No-Show");
}

#[test]
fn deleting_trainer_with_classes_is_restricted() {
    let conn = seeded();
    let records = SqliteRecordRepository::new(&conn);

    let err = records.delete_record(Table::Trainers, 1).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Constraint(ref violation) if violation.kind == ConstraintKind::ForeignKey
    ));
    assert_eq!(records.count_rows(Table::Trainers).unwrap(), 6);
    assert_eq!(records.count_rows(Table::Classes).unwrap(), 7);

    records.delete_record(Table::Trainers, 6).unwrap();
    assert_eq!(records.count_rows(Table::Trainers).unwrap(), 5);
}

#[test]
fn deleting_class_cascades_to_bookings() {
    let conn = seeded();
    let records = SqliteRecordRepository::new(&conn);

    records.delete_record(Table::Classes, 5).unwrap();

    assert_eq!(records.count_rows(Table::ClassBookings).unwrap(), 5);
}

#[test]
fn class_insert_and_update_respect_checks() {
    let conn = seeded();
    let classes = SqliteClassRepository::new(&conn);

    let id = classes
        .insert_class(&NewClass {
            class_name: "Lunch HIIT".to_string(),
            class_type: "HIIT".to_string(),
            trainer_id: 6,
            schedule_day: ClassDay::Wednesday,
            schedule_time: time(12, 15),
            duration_minutes: 30,
            max_capacity: 12,
        })
        .unwrap();
    let class = classes.get_class(id).unwrap().unwrap();
    assert_eq!(class.slot_label(), "Lunch HIIT - Wednesday 12:15");

    let err = classes
        .update_class_field(id, &ClassField::MaxCapacity(0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Constraint(ref violation) if violation.kind == ConstraintKind::Check
    ));
    assert_eq!(classes.get_class(id).unwrap().unwrap().max_capacity, 12);

    let duplicate = classes
        .update_class_field(id, &ClassField::ClassName("Morning Yoga".to_string()))
        .unwrap_err();
    assert!(matches!(
        duplicate,
        RepoError::Constraint(ref violation) if violation.is_unique_on(Table::Classes)
    ));
}

#[test]
fn trainer_phone_must_be_unique() {
    let conn = seeded();
    let trainers = SqliteTrainerRepository::new(&conn);

    let err = trainers
        .insert_trainer(&NewTrainer {
            first_name: "Sam".to_string(),
            last_name: "Rivera".to_string(),
            specialization: "Boxing".to_string(),
            email: "sam.rivera@gym.com".to_string(),
            phone: "555-1001".to_string(),
            hire_date: date(2024, 5, 1),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Constraint(ref violation) if violation.message.contains("Trainers.Phone")
    ));

    trainers
        .update_trainer_field(2, &TrainerField::Specialization("HIIT".to_string()))
        .unwrap();
    assert_eq!(
        trainers.get_trainer(2).unwrap().unwrap().specialization,
        "HIIT"
    );
}

#[test]
fn clear_field_writes_placeholder() {
    let conn = seeded();
    let records = SqliteRecordRepository::new(&conn);

    records.clear_field(ClearField::ClassType, 3).unwrap();
    records.clear_field(ClearField::MembershipPaymentStatus, 1).unwrap();

    let class_type: String = conn
        .query_row("SELECT Class_Type FROM Classes WHERE Class_ID = 3;", [], |row| {
            row.get(0)
        })
        .unwrap();
    let payment: String = conn
        .query_row(
            "SELECT Payment_Status FROM Member_Memberships WHERE Membership_Record_ID = 1;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(class_type, "General");
    assert_eq!(payment, "Pending");

    let err = records.clear_field(ClearField::PlanBenefits, 77).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            table: Table::MembershipPlans,
            id: 77
        }
    ));
}
