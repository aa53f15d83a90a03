use gymdesk_core::db::open_db_in_memory;
use gymdesk_core::model::status::PaymentStatus;
use gymdesk_core::report::{
    class_schedule, custom_join, member_bookings, member_memberships, trainer_workload,
};
use gymdesk_core::{seed_sample_data, RepoError, Table, TableView, ValidationError};
use rusqlite::Connection;

fn seeded() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    conn
}

#[test]
fn member_memberships_lists_each_record_with_plan() {
    let conn = seeded();
    let rows = member_memberships(&conn).unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].member_id, 1);
    assert_eq!(rows[0].member_name, "John Doe");
    assert_eq!(rows[0].plan_name, "Premium Monthly");
    assert_eq!(rows[0].price, 80.0);
    assert!(rows[0].is_active);
    assert_eq!(rows[5].payment_status, PaymentStatus::Expired);

    let view = TableView::from_rows(&rows);
    assert_eq!(view.rows[5][8], "Inactive");
    assert_eq!(view.rows[0][4], "80.00");
}

#[test]
fn class_schedule_orders_by_weekday_then_time() {
    let conn = seeded();
    conn.execute(
        "INSERT INTO Classes (Class_Name, Class_Type, Trainer_ID, Schedule_Day, Schedule_Time, Duration_Minutes, Max_Capacity)
         VALUES ('Sunrise Stretch', 'Yoga', 6, 'Monday', '06:30', 30, 10),
                ('Late Spin', 'Spinning', 4, 'Sunday', '20:00', 45, 30);",
        [],
    )
    .unwrap();

    let rows = class_schedule(&conn).unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.class_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Sunrise Stretch",
            "Morning Yoga",
            "CrossFit Extreme",
            "Pilates Core",
            "Spinning Cycle",
            "Zumba Dance",
            "Evening Yoga",
            "Weekend CrossFit",
            "Late Spin",
        ]
    );
    let days: Vec<u8> = rows.iter().map(|row| row.schedule_day.index()).collect();
    assert!(days.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(rows[0].trainer_name, "Emma Taylor");
}

#[test]
fn member_bookings_newest_date_first_then_last_name() {
    let conn = seeded();
    let rows = member_bookings(&conn).unwrap();

    let order: Vec<(String, &str)> = rows
        .iter()
        .map(|row| (row.booking_date.to_string(), row.member_name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("2024-11-22".to_string(), "Emily Davis"),
            ("2024-11-22".to_string(), "Jane Smith"),
            ("2024-11-21".to_string(), "Robert Wilson"),
            ("2024-11-20".to_string(), "Jane Smith"),
            ("2024-11-19".to_string(), "John Doe"),
            ("2024-11-18".to_string(), "John Doe"),
            ("2024-11-18".to_string(), "Michael Johnson"),
        ]
    );
    assert_eq!(rows[0].trainer_name, "Chris Lee");
}

#[test]
fn trainer_workload_includes_trainers_without_classes() {
    let conn = seeded();
    let rows = trainer_workload(&conn).unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].trainer_id, 1);
    assert_eq!(rows[0].class_count, 2);
    assert_eq!(rows[1].trainer_id, 2);
    assert_eq!(rows[1].class_count, 2);

    let idle = rows.last().unwrap();
    assert_eq!(idle.trainer_name, "Emma Taylor");
    assert_eq!(idle.class_count, 0);
    assert_eq!(idle.classes, "");
}

#[test]
fn custom_join_uses_template_for_known_table_set() {
    let conn = seeded();
    let view = custom_join(&conn, &[Table::Classes, Table::Trainers]).unwrap();

    assert_eq!(view.len(), 7);
    assert!(view.column_index("Trainer_First_Name").is_some());
    assert!(view.column_index("Class_Name").is_some());
}

#[test]
fn custom_join_falls_back_to_first_selected_table() {
    let conn = seeded();
    let view = custom_join(&conn, &[Table::Trainers, Table::MembershipPlans]).unwrap();

    assert_eq!(view.len(), 6);
    assert_eq!(view.columns[0], "Trainer_ID");
    assert!(view.column_index("Plan_Name").is_none());
}

#[test]
fn custom_join_requires_a_selection() {
    let conn = seeded();
    let err = custom_join(&conn, &[]).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptySelection)
    ));
}
