//! Sample data for a fresh gym database.
//!
//! # Responsibility
//! - Insert one fixed, literal data set so every screen has rows to show.
//!
//! # Invariants
//! - Seeding runs only while `Members` is empty.
//! - Either the whole sample set is committed or nothing is.

use crate::db::DbResult;
use log::{error, info};
use rusqlite::{params, Connection};
use std::time::Instant;

type MemberSeed = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str);
type TrainerSeed = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);
type ClassSeed = (&'static str, &'static str, i64, &'static str, &'static str, i64, i64);

const MEMBERS: &[MemberSeed] = &[
    ("John", "Doe", "john.doe@email.com", "555-0101", "1990-05-15", "2024-01-10", "Active"),
    ("Jane", "Smith", "jane.smith@email.com", "555-0102", "1988-08-22", "2024-02-15", "Active"),
    ("Michael", "Johnson", "michael.j@email.com", "555-0103", "1995-03-10", "2024-01-20", "Active"),
    ("Emily", "Davis", "emily.davis@email.com", "555-0104", "1992-11-30", "2024-03-01", "Active"),
    ("Robert", "Wilson", "robert.w@email.com", "555-0105", "1985-07-18", "2023-12-05", "Active"),
    ("Sarah", "Brown", "sarah.b@email.com", "555-0106", "1998-02-14", "2024-04-10", "Inactive"),
];

const PLANS: &[(&str, i64, f64, &str)] = &[
    ("Basic Monthly", 1, 50.0, "Gym access only"),
    ("Basic Annual", 12, 500.0, "Gym access only - 2 months free"),
    ("Premium Monthly", 1, 80.0, "Gym + unlimited classes"),
    ("Premium Annual", 12, 850.0, "Gym + unlimited classes - 2 months free"),
    ("VIP Monthly", 1, 150.0, "Gym + classes + 4 PT sessions"),
    ("VIP Annual", 12, 1600.0, "Gym + classes + 4 PT sessions/month"),
];

const MEMBERSHIPS: &[(i64, i64, &str, &str, &str, i64)] = &[
    (1, 3, "2024-01-10", "2024-02-10", "Paid", 1),
    (2, 4, "2024-02-15", "2025-02-15", "Paid", 1),
    (3, 1, "2024-01-20", "2024-02-20", "Paid", 1),
    (4, 5, "2024-03-01", "2024-04-01", "Paid", 1),
    (5, 2, "2023-12-05", "2024-12-05", "Paid", 1),
    (6, 1, "2024-04-10", "2024-05-10", "Expired", 0),
];

const TRAINERS: &[TrainerSeed] = &[
    ("Alex", "Martinez", "Yoga", "alex.martinez@gym.com", "555-1001", "2023-06-01"),
    ("Lisa", "Anderson", "CrossFit", "lisa.anderson@gym.com", "555-1002", "2023-07-15"),
    ("David", "Thompson", "Pilates", "david.thompson@gym.com", "555-1003", "2023-08-20"),
    ("Nina", "Garcia", "Spinning", "nina.garcia@gym.com", "555-1004", "2023-09-10"),
    ("Chris", "Lee", "Zumba", "chris.lee@gym.com", "555-1005", "2024-01-05"),
    ("Emma", "Taylor", "Personal Training", "emma.taylor@gym.com", "555-1006", "2022-03-15"),
];

const CLASSES: &[ClassSeed] = &[
    ("Morning Yoga", "Yoga", 1, "Monday", "08:00", 60, 20),
    ("CrossFit Extreme", "CrossFit", 2, "Tuesday", "18:00", 45, 15),
    ("Pilates Core", "Pilates", 3, "Wednesday", "10:00", 50, 25),
    ("Spinning Cycle", "Spinning", 4, "Thursday", "19:00", 45, 30),
    ("Zumba Dance", "Zumba", 5, "Friday", "17:00", 60, 35),
    ("Evening Yoga", "Yoga", 1, "Saturday", "18:00", 60, 20),
    ("Weekend CrossFit", "CrossFit", 2, "Sunday", "10:00", 45, 15),
];

const BOOKINGS: &[(i64, i64, &str, &str)] = &[
    (1, 1, "2024-11-18", "Attended"),
    (1, 2, "2024-11-19", "Attended"),
    (2, 3, "2024-11-20", "Booked"),
    (3, 1, "2024-11-18", "Attended"),
    (4, 5, "2024-11-22", "Booked"),
    (5, 4, "2024-11-21", "No-Show"),
    (2, 5, "2024-11-22", "Booked"),
];

/// Inserts the sample data set unless `Members` already has rows.
///
/// Returns `true` when rows were inserted, `false` for the no-op path.
pub fn seed_sample_data(conn: &Connection) -> DbResult<bool> {
    let started_at = Instant::now();

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM Members;", [], |row| row.get(0))?;
    if existing > 0 {
        info!(
            "event=seed module=seed status=skipped existing_members={} duration_ms={}",
            existing,
            started_at.elapsed().as_millis()
        );
        return Ok(false);
    }

    match insert_sample_rows(conn) {
        Ok(()) => {
            info!(
                "event=seed module=seed status=ok members={} plans={} memberships={} trainers={} classes={} bookings={} duration_ms={}",
                MEMBERS.len(),
                PLANS.len(),
                MEMBERSHIPS.len(),
                TRAINERS.len(),
                CLASSES.len(),
                BOOKINGS.len(),
                started_at.elapsed().as_millis()
            );
            Ok(true)
        }
        Err(err) => {
            error!(
                "event=seed module=seed status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

fn insert_sample_rows(conn: &Connection) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO Members (First_Name, Last_Name, Email, Phone, Date_of_Birth, Join_Date, Status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
        )?;
        for (first, last, email, phone, born, joined, status) in MEMBERS {
            stmt.execute(params![first, last, email, phone, born, joined, status])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO Membership_Plans (Plan_Name, Duration_Months, Price, Benefits_Description)
             VALUES (?1, ?2, ?3, ?4);",
        )?;
        for (name, months, price, benefits) in PLANS {
            stmt.execute(params![name, months, price, benefits])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO Member_Memberships (Member_ID, Plan_ID, Start_Date, End_Date, Payment_Status, Is_Active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;
        for (member_id, plan_id, start, end, payment, active) in MEMBERSHIPS {
            stmt.execute(params![member_id, plan_id, start, end, payment, active])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO Trainers (First_Name, Last_Name, Specialization, Email, Phone, Hire_Date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;
        for (first, last, specialization, email, phone, hired) in TRAINERS {
            stmt.execute(params![first, last, specialization, email, phone, hired])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO Classes (Class_Name, Class_Type, Trainer_ID, Schedule_Day, Schedule_Time, Duration_Minutes, Max_Capacity)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
        )?;
        for (name, kind, trainer_id, day, time, minutes, capacity) in CLASSES {
            stmt.execute(params![name, kind, trainer_id, day, time, minutes, capacity])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO Class_Bookings (Member_ID, Class_ID, Booking_Date, Attendance_Status)
             VALUES (?1, ?2, ?3, ?4);",
        )?;
        for (member_id, class_id, date, attendance) in BOOKINGS {
            stmt.execute(params![member_id, class_id, date, attendance])?;
        }
    }

    tx.commit()
}

#[cfg(test)]
mod tests {
    use super::{BOOKINGS, CLASSES, MEMBERS, MEMBERSHIPS, PLANS, TRAINERS};

    #[test]
    fn sample_set_sizes_are_fixed() {
        assert_eq!(MEMBERS.len(), 6);
        assert_eq!(PLANS.len(), 6);
        assert_eq!(MEMBERSHIPS.len(), 6);
        assert_eq!(TRAINERS.len(), 6);
        assert_eq!(CLASSES.len(), 7);
        assert_eq!(BOOKINGS.len(), 7);
    }

    #[test]
    fn sample_bookings_have_unique_member_class_date() {
        let mut seen = std::collections::HashSet::new();
        for (member_id, class_id, date, _) in BOOKINGS {
            assert!(seen.insert((member_id, class_id, date)));
        }
    }
}
