use crate::model::field::{format_date, format_time};
use crate::model::status::{AttendanceStatus, ClassDay, PaymentStatus};
use crate::model::RecordId;
use crate::repo::{read_date, read_flag, read_label, read_time, RepoResult};
use crate::view::{format_real, TableRow};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row};
use serde::Serialize;

const MEMBER_MEMBERSHIPS_SQL: &str = "SELECT
    m.Member_ID,
    m.First_Name || ' ' || m.Last_Name AS Member_Name,
    m.Email,
    mp.Plan_Name,
    mp.Price,
    mm.Start_Date,
    mm.End_Date,
    mm.Payment_Status,
    mm.Is_Active
FROM Members m
JOIN Member_Memberships mm ON m.Member_ID = mm.Member_ID
JOIN Membership_Plans mp ON mm.Plan_ID = mp.Plan_ID
ORDER BY m.Member_ID ASC, mm.Membership_Record_ID ASC;";

const CLASS_SCHEDULE_SQL: &str = "SELECT
    c.Class_ID,
    c.Class_Name,
    c.Class_Type,
    t.First_Name || ' ' || t.Last_Name AS Trainer_Name,
    t.Specialization,
    c.Schedule_Day,
    c.Schedule_Time,
    c.Duration_Minutes,
    c.Max_Capacity
FROM Classes c
JOIN Trainers t ON c.Trainer_ID = t.Trainer_ID
ORDER BY
    CASE c.Schedule_Day
        WHEN 'Monday' THEN 1
        WHEN 'Tuesday' THEN 2
        WHEN 'Wednesday' THEN 3
        WHEN 'Thursday' THEN 4
        WHEN 'Friday' THEN 5
        WHEN 'Saturday' THEN 6
        WHEN 'Sunday' THEN 7
    END ASC,
    c.Schedule_Time ASC,
    c.Class_ID ASC;";

const MEMBER_BOOKINGS_SQL: &str = "SELECT
    cb.Booking_ID,
    m.First_Name || ' ' || m.Last_Name AS Member_Name,
    c.Class_Name,
    c.Class_Type,
    t.First_Name || ' ' || t.Last_Name AS Trainer_Name,
    c.Schedule_Day,
    c.Schedule_Time,
    cb.Booking_Date,
    cb.Attendance_Status
FROM Class_Bookings cb
JOIN Members m ON cb.Member_ID = m.Member_ID
JOIN Classes c ON cb.Class_ID = c.Class_ID
JOIN Trainers t ON c.Trainer_ID = t.Trainer_ID
ORDER BY cb.Booking_Date DESC, m.Last_Name ASC, cb.Booking_ID ASC;";

const TRAINER_WORKLOAD_SQL: &str = "SELECT
    t.Trainer_ID,
    t.First_Name || ' ' || t.Last_Name AS Trainer_Name,
    t.Specialization,
    COUNT(c.Class_ID) AS Number_of_Classes,
    COALESCE(GROUP_CONCAT(c.Class_Name, ', '), '') AS Classes_Teaching
FROM Trainers t
LEFT JOIN Classes c ON t.Trainer_ID = c.Trainer_ID
GROUP BY t.Trainer_ID, t.First_Name, t.Last_Name, t.Specialization
ORDER BY Number_of_Classes DESC, t.Trainer_ID ASC;";

/// One membership record joined with its member and plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberMembershipRow {
    pub member_id: RecordId,
    pub member_name: String,
    pub email: String,
    pub plan_name: String,
    pub price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub is_active: bool,
}

impl TableRow for MemberMembershipRow {
    const HEADERS: &'static [&'static str] = &[
        "Member_ID",
        "Member_Name",
        "Email",
        "Plan_Name",
        "Price",
        "Start_Date",
        "End_Date",
        "Payment_Status",
        "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            self.member_name.clone(),
            self.email.clone(),
            self.plan_name.clone(),
            format_real(self.price),
            format_date(self.start_date),
            format_date(self.end_date),
            self.payment_status.as_str().to_string(),
            if self.is_active { "Active" } else { "Inactive" }.to_string(),
        ]
    }
}

/// One class with its trainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassScheduleRow {
    pub class_id: RecordId,
    pub class_name: String,
    pub class_type: String,
    pub trainer_name: String,
    pub specialization: String,
    pub schedule_day: ClassDay,
    pub schedule_time: NaiveTime,
    pub duration_minutes: i64,
    pub max_capacity: i64,
}

impl TableRow for ClassScheduleRow {
    const HEADERS: &'static [&'static str] = &[
        "Class_ID",
        "Class_Name",
        "Class_Type",
        "Trainer_Name",
        "Specialization",
        "Schedule_Day",
        "Schedule_Time",
        "Duration_Minutes",
        "Max_Capacity",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.class_id.to_string(),
            self.class_name.clone(),
            self.class_type.clone(),
            self.trainer_name.clone(),
            self.specialization.clone(),
            self.schedule_day.as_str().to_string(),
            format_time(self.schedule_time),
            self.duration_minutes.to_string(),
            self.max_capacity.to_string(),
        ]
    }
}

/// One booking with member, class and trainer details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDetailRow {
    pub booking_id: RecordId,
    pub member_name: String,
    pub class_name: String,
    pub class_type: String,
    pub trainer_name: String,
    pub schedule_day: ClassDay,
    pub schedule_time: NaiveTime,
    pub booking_date: NaiveDate,
    pub attendance_status: AttendanceStatus,
}

impl TableRow for BookingDetailRow {
    const HEADERS: &'static [&'static str] = &[
        "Booking_ID",
        "Member_Name",
        "Class_Name",
        "Class_Type",
        "Trainer_Name",
        "Schedule_Day",
        "Schedule_Time",
        "Booking_Date",
        "Attendance_Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.booking_id.to_string(),
            self.member_name.clone(),
            self.class_name.clone(),
            self.class_type.clone(),
            self.trainer_name.clone(),
            self.schedule_day.as_str().to_string(),
            format_time(self.schedule_time),
            format_date(self.booking_date),
            self.attendance_status.as_str().to_string(),
        ]
    }
}

/// Class count per trainer. Trainers without classes have `class_count = 0`
/// and an empty `classes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainerWorkloadRow {
    pub trainer_id: RecordId,
    pub trainer_name: String,
    pub specialization: String,
    pub class_count: i64,
    pub classes: String,
}

impl TableRow for TrainerWorkloadRow {
    const HEADERS: &'static [&'static str] = &[
        "Trainer_ID",
        "Trainer_Name",
        "Specialization",
        "Number_of_Classes",
        "Classes_Teaching",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.trainer_id.to_string(),
            self.trainer_name.clone(),
            self.specialization.clone(),
            self.class_count.to_string(),
            self.classes.clone(),
        ]
    }
}

/// Members joined with their membership records and plans, by member id.
pub fn member_memberships(conn: &Connection) -> RepoResult<Vec<MemberMembershipRow>> {
    collect(conn, MEMBER_MEMBERSHIPS_SQL, |row| {
        Ok(MemberMembershipRow {
            member_id: row.get("Member_ID")?,
            member_name: row.get("Member_Name")?,
            email: row.get("Email")?,
            plan_name: row.get("Plan_Name")?,
            price: row.get("Price")?,
            start_date: read_date(row, "Start_Date")?,
            end_date: read_date(row, "End_Date")?,
            payment_status: read_label(row, "Payment_Status", PaymentStatus::parse)?,
            is_active: read_flag(row, "Is_Active")?,
        })
    })
}

/// Classes with trainers, Monday first, then by time of day.
pub fn class_schedule(conn: &Connection) -> RepoResult<Vec<ClassScheduleRow>> {
    collect(conn, CLASS_SCHEDULE_SQL, |row| {
        Ok(ClassScheduleRow {
            class_id: row.get("Class_ID")?,
            class_name: row.get("Class_Name")?,
            class_type: row.get("Class_Type")?,
            trainer_name: row.get("Trainer_Name")?,
            specialization: row.get("Specialization")?,
            schedule_day: read_label(row, "Schedule_Day", ClassDay::parse)?,
            schedule_time: read_time(row, "Schedule_Time")?,
            duration_minutes: row.get("Duration_Minutes")?,
            max_capacity: row.get("Max_Capacity")?,
        })
    })
}

/// Bookings with member, class and trainer, newest booking date first.
pub fn member_bookings(conn: &Connection) -> RepoResult<Vec<BookingDetailRow>> {
    collect(conn, MEMBER_BOOKINGS_SQL, |row| {
        Ok(BookingDetailRow {
            booking_id: row.get("Booking_ID")?,
            member_name: row.get("Member_Name")?,
            class_name: row.get("Class_Name")?,
            class_type: row.get("Class_Type")?,
            trainer_name: row.get("Trainer_Name")?,
            schedule_day: read_label(row, "Schedule_Day", ClassDay::parse)?,
            schedule_time: read_time(row, "Schedule_Time")?,
            booking_date: read_date(row, "Booking_Date")?,
            attendance_status: read_label(row, "Attendance_Status", AttendanceStatus::parse)?,
        })
    })
}

/// Every trainer with the number and names of classes they teach, busiest
/// first.
pub fn trainer_workload(conn: &Connection) -> RepoResult<Vec<TrainerWorkloadRow>> {
    collect(conn, TRAINER_WORKLOAD_SQL, |row| {
        Ok(TrainerWorkloadRow {
            trainer_id: row.get("Trainer_ID")?,
            trainer_name: row.get("Trainer_Name")?,
            specialization: row.get("Specialization")?,
            class_count: row.get("Number_of_Classes")?,
            classes: row.get("Classes_Teaching")?,
        })
    })
}

fn collect<T>(
    conn: &Connection,
    sql: &str,
    parse: impl Fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut items = Vec::new();

    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }

    Ok(items)
}
