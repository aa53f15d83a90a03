use chrono::NaiveDate;
use gymdesk_core::db::open_db;
use gymdesk_core::model::booking::NewBooking;
use gymdesk_core::model::member::{NewMember, NewMemberWithPlan};
use gymdesk_core::model::plan::{NewPlan, PlanField};
use gymdesk_core::model::status::{AttendanceStatus, MemberStatus, PaymentStatus};
use gymdesk_core::{seed_sample_data, ClearField, GymDesk, ReportKind, Table};
use tempfile::TempDir;

fn seeded_desk() -> (TempDir, GymDesk) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gym_management.db");
    let conn = open_db(&path).unwrap();
    seed_sample_data(&conn).unwrap();
    drop(conn);
    (dir, GymDesk::new(path))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn member(email: &str, phone: &str) -> NewMember {
    NewMember {
        first_name: "Alan".to_string(),
        last_name: "Turing".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        date_of_birth: date(1992, 6, 23),
        join_date: date(2024, 5, 1),
        status: MemberStatus::Active,
    }
}

#[test]
fn dashboard_counts_seeded_rows() {
    let (_dir, desk) = seeded_desk();
    let counts = desk.dashboard().unwrap();

    assert_eq!(counts.members, 6);
    assert_eq!(counts.trainers, 6);
    assert_eq!(counts.classes, 7);
    assert_eq!(counts.bookings, 7);
}

#[test]
fn insert_member_reports_success_then_duplicate_error() {
    let (_dir, desk) = seeded_desk();

    let added = desk.insert_member(&member("alan@email.com", "555-4000"));
    assert!(added.ok);
    assert_eq!(added.message, "Member added successfully!");

    let duplicate = desk.insert_member(&member("alan@email.com", "555-4001"));
    assert!(!duplicate.ok);
    assert_eq!(
        duplicate.message,
        "Error: UNIQUE constraint failed: Members.Email"
    );
    assert_eq!(desk.list_members().unwrap().len(), 7);
}

#[test]
fn missing_required_field_is_reported_without_touching_database() {
    let (_dir, desk) = seeded_desk();
    let mut blank = member("blank@email.com", "555-4002");
    blank.email = String::new();

    let outcome = desk.insert_member(&blank);
    assert!(!outcome.ok);
    assert_eq!(outcome.message, "Please fill in all required fields! (email)");
}

#[test]
fn member_with_plan_reports_combined_success() {
    let (_dir, desk) = seeded_desk();

    let outcome = desk.insert_member_with_plan(&NewMemberWithPlan {
        member: member("combo@email.com", "555-4003"),
        plan_id: 3,
        payment_status: PaymentStatus::Paid,
    });
    assert_eq!(outcome.message, "Member added with initial membership!");

    let memberships = desk.list_memberships().unwrap();
    let created = memberships.last().unwrap();
    assert_eq!(created.member_id, 7);
    assert_eq!(created.end_date, date(2024, 6, 1));
}

#[test]
fn duplicate_booking_gets_friendly_message() {
    let (_dir, desk) = seeded_desk();

    let outcome = desk.insert_booking(&NewBooking {
        member_id: 2,
        class_id: 5,
        booking_date: date(2024, 11, 22),
        attendance_status: AttendanceStatus::Booked,
    });
    assert!(!outcome.ok);
    assert_eq!(
        outcome.message,
        "Error: Member already has a booking for this class on this date"
    );
    assert_eq!(desk.list_bookings().unwrap().len(), 7);
}

#[test]
fn delete_messages_cover_success_missing_and_restricted() {
    let (_dir, desk) = seeded_desk();

    assert_eq!(
        desk.delete(Table::ClassBookings, 1).message,
        "Record deleted successfully!"
    );
    assert_eq!(desk.delete(Table::ClassBookings, 1).message, "Record not found!");

    let restricted = desk.delete(Table::Trainers, 2);
    assert!(!restricted.ok);
    assert_eq!(restricted.message, "Error: FOREIGN KEY constraint failed");
}

#[test]
fn update_messages_name_the_entity() {
    let (_dir, desk) = seeded_desk();

    let updated = desk.update_plan_field(2, &PlanField::Price(520.0));
    assert_eq!(updated.message, "Membership plan updated successfully!");
    assert_eq!(desk.list_plans().unwrap()[1].price, 520.0);

    let missing = desk.update_by_name(Table::Members, 404, "status", "Inactive");
    assert_eq!(missing.message, "Member not found!");

    let unknown = desk.update_by_name(Table::Members, 1, "Member_ID", "9");
    assert!(!unknown.ok);
    assert_eq!(unknown.message, "Error: unknown field `Member_ID`");

    let blank = desk.update_by_name(Table::Trainers, 1, "email", "  ");
    assert_eq!(blank.message, "Please fill in all required fields! (email)");
}

#[test]
fn clear_field_reports_label() {
    let (_dir, desk) = seeded_desk();

    let outcome = desk.clear_field(ClearField::TrainerSpecialization, 3);
    assert!(outcome.ok);
    assert_eq!(outcome.message, "Specialization cleared.");
    assert_eq!(desk.list_trainers().unwrap()[2].specialization, "General");

    let missing = desk.clear_field(ClearField::TrainerSpecialization, 99);
    assert_eq!(missing.message, "Trainer not found!");
}

#[test]
fn reads_expose_tables_and_reports() {
    let (_dir, desk) = seeded_desk();

    let classes = desk.view_table(Table::Classes).unwrap();
    assert_eq!(classes.len(), 7);
    assert_eq!(classes.columns[0], "Class_ID");

    let workload = desk.report(ReportKind::TrainerWorkload).unwrap();
    assert_eq!(workload.columns[3], "Number_of_Classes");
    assert_eq!(workload.rows[5][3], "0");

    assert!(desk.custom_join(&[]).is_err());
    let joined = desk
        .custom_join(&[Table::Members, Table::ClassBookings])
        .unwrap();
    assert_eq!(joined.len(), 7);
}
