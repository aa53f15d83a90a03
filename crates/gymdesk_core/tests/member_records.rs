use chrono::NaiveDate;
use gymdesk_core::db::open_db_in_memory;
use gymdesk_core::model::field::FieldUpdate;
use gymdesk_core::model::member::{MemberField, NewMember, NewMemberWithPlan};
use gymdesk_core::model::membership::MembershipField;
use gymdesk_core::model::status::{MemberStatus, PaymentStatus};
use gymdesk_core::repo::member_repo::{MemberRepository, SqliteMemberRepository};
use gymdesk_core::repo::membership_repo::{MembershipRepository, SqliteMembershipRepository};
use gymdesk_core::repo::record_repo::{RecordRepository, SqliteRecordRepository};
use gymdesk_core::{seed_sample_data, ConstraintKind, RepoError, Table, ValidationError};
use rusqlite::Connection;

fn seeded() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    conn
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_member(email: &str, phone: &str) -> NewMember {
    NewMember {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        date_of_birth: date(1990, 12, 9),
        join_date: date(2024, 1, 31),
        status: MemberStatus::Active,
    }
}

#[test]
fn insert_and_get_member_roundtrip() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);

    let id = repo
        .insert_member(&new_member("  grace@email.com ", "555-3000"))
        .unwrap();
    let loaded = repo.get_member(id).unwrap().unwrap();

    assert_eq!(loaded.id, 7);
    assert_eq!(loaded.email, "grace@email.com");
    assert_eq!(loaded.full_name(), "Grace Hopper");
    assert_eq!(loaded.join_date, date(2024, 1, 31));
    assert_eq!(repo.list_members().unwrap().len(), 7);
}

#[test]
fn duplicate_email_is_rejected_and_nothing_is_written() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);

    let err = repo
        .insert_member(&new_member("john.doe@email.com", "555-3001"))
        .unwrap_err();
    match err {
        RepoError::Constraint(violation) => {
            assert_eq!(violation.kind, ConstraintKind::Unique);
            assert!(violation.is_unique_on(Table::Members));
            assert!(violation.message.contains("Members.Email"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(repo.list_members().unwrap().len(), 6);
}

#[test]
fn duplicate_phone_is_rejected() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);

    let err = repo
        .insert_member(&new_member("fresh@email.com", "555-0101"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Constraint(ref violation) if violation.message.contains("Members.Phone")
    ));
    assert_eq!(repo.list_members().unwrap().len(), 6);
}

#[test]
fn blank_required_field_fails_before_sql() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);
    let mut member = new_member("blank@email.com", "555-3002");
    member.last_name = "   ".to_string();

    let err = repo.insert_member(&member).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingField("last_name"))
    ));
}

#[test]
fn member_with_plan_creates_membership_ending_after_plan_duration() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);

    let annual = repo
        .insert_member_with_plan(&NewMemberWithPlan {
            member: new_member("annual@email.com", "555-3003"),
            plan_id: 4,
            payment_status: PaymentStatus::Paid,
        })
        .unwrap();
    let monthly = repo
        .insert_member_with_plan(&NewMemberWithPlan {
            member: new_member("monthly@email.com", "555-3004"),
            plan_id: 1,
            payment_status: PaymentStatus::Pending,
        })
        .unwrap();

    let memberships = SqliteMembershipRepository::new(&conn);
    let annual_record = memberships.get_membership(annual.membership_id).unwrap().unwrap();
    assert_eq!(annual_record.member_id, annual.member_id);
    assert_eq!(annual_record.start_date, date(2024, 1, 31));
    assert_eq!(annual_record.end_date, date(2025, 1, 31));
    assert_eq!(annual_record.payment_status, PaymentStatus::Paid);
    assert!(annual_record.is_active);

    let monthly_records = memberships
        .list_memberships_for_member(monthly.member_id)
        .unwrap();
    assert_eq!(monthly_records.len(), 1);
    assert_eq!(monthly_records[0].end_date, date(2024, 2, 29));
}

#[test]
fn member_with_missing_plan_writes_nothing() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);

    let err = repo
        .insert_member_with_plan(&NewMemberWithPlan {
            member: new_member("orphan@email.com", "555-3005"),
            plan_id: 99,
            payment_status: PaymentStatus::Pending,
        })
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::NotFound {
            table: Table::MembershipPlans,
            id: 99
        }
    ));
    assert_eq!(repo.list_members().unwrap().len(), 6);
}

#[test]
fn member_with_plan_rolls_back_member_on_duplicate_email() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);

    let err = repo
        .insert_member_with_plan(&NewMemberWithPlan {
            member: new_member("jane.smith@email.com", "555-3006"),
            plan_id: 2,
            payment_status: PaymentStatus::Paid,
        })
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
    let records = SqliteRecordRepository::new(&conn);
    assert_eq!(records.count_rows(Table::Members).unwrap(), 6);
    assert_eq!(records.count_rows(Table::MemberMemberships).unwrap(), 6);
}

#[test]
fn single_field_update_changes_only_that_column() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);
    let before = repo.get_member(2).unwrap().unwrap();
    let neighbour = repo.get_member(3).unwrap().unwrap();

    repo.update_member_field(2, &MemberField::Email("jane.s@email.com".to_string()))
        .unwrap();

    let after = repo.get_member(2).unwrap().unwrap();
    assert_eq!(after.email, "jane.s@email.com");
    assert_eq!(after.first_name, before.first_name);
    assert_eq!(after.last_name, before.last_name);
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.date_of_birth, before.date_of_birth);
    assert_eq!(after.join_date, before.join_date);
    assert_eq!(after.status, before.status);
    assert_eq!(repo.get_member(3).unwrap().unwrap(), neighbour);
}

#[test]
fn update_to_invalid_flag_is_rejected_by_parser() {
    let err = MembershipField::parse("is_active", "2").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidValue {
            field: "is_active",
            ..
        }
    ));
    assert!(matches!(
        MemberField::parse("Member_ID", "1").unwrap_err(),
        ValidationError::UnknownField(_)
    ));
}

#[test]
fn update_and_delete_missing_id_report_not_found() {
    let conn = seeded();
    let repo = SqliteMemberRepository::new(&conn);
    let records = SqliteRecordRepository::new(&conn);

    let update_err = repo
        .update_member_field(999, &MemberField::Status(MemberStatus::Inactive))
        .unwrap_err();
    assert!(matches!(
        update_err,
        RepoError::NotFound {
            table: Table::Members,
            id: 999
        }
    ));

    let delete_err = records.delete_record(Table::ClassBookings, 999).unwrap_err();
    assert_eq!(delete_err.to_string(), "Booking not found: 999");
}

#[test]
fn deleting_member_cascades_to_memberships_and_bookings() {
    let conn = seeded();
    let records = SqliteRecordRepository::new(&conn);

    records.delete_record(Table::Members, 1).unwrap();

    let memberships: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM Member_Memberships WHERE Member_ID = 1;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let bookings: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM Class_Bookings WHERE Member_ID = 1;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(memberships, 0);
    assert_eq!(bookings, 0);
    assert_eq!(records.count_rows(Table::Members).unwrap(), 5);
    assert_eq!(records.count_rows(Table::ClassBookings).unwrap(), 5);
}

#[test]
fn deleting_referenced_plan_is_restricted() {
    let conn = seeded();
    let records = SqliteRecordRepository::new(&conn);

    let err = records.delete_record(Table::MembershipPlans, 1).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Constraint(ref violation) if violation.kind == ConstraintKind::ForeignKey
    ));
    assert_eq!(records.count_rows(Table::MembershipPlans).unwrap(), 6);

    records.delete_record(Table::MembershipPlans, 6).unwrap();
    assert_eq!(records.count_rows(Table::MembershipPlans).unwrap(), 5);
}

#[test]
fn select_all_returns_columns_and_rows_in_id_order() {
    let conn = seeded();
    let view = SqliteRecordRepository::new(&conn)
        .select_all(Table::MembershipPlans)
        .unwrap();

    assert_eq!(
        view.columns,
        vec![
            "Plan_ID",
            "Plan_Name",
            "Duration_Months",
            "Price",
            "Benefits_Description"
        ]
    );
    assert_eq!(view.len(), 6);
    assert_eq!(view.rows[0], vec!["1", "Basic Monthly", "1", "50.00", "Gym access only"]);
}
