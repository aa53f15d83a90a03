//! Class booking repository.
//!
//! # Invariants
//! - At most one booking per (member, class, date), enforced by a SQL
//!   `UNIQUE` constraint.

use super::record_repo::{RecordRepository, SqliteRecordRepository};
use super::{read_date, read_label, RepoResult};
use crate::model::booking::{Booking, BookingField, NewBooking};
use crate::model::field::format_date;
use crate::model::status::AttendanceStatus;
use crate::model::RecordId;
use rusqlite::{params, Connection, Row};

const BOOKING_SELECT_SQL: &str = "SELECT
    Booking_ID,
    Member_ID,
    Class_ID,
    Booking_Date,
    Attendance_Status
FROM Class_Bookings";

pub trait BookingRepository {
    fn insert_booking(&self, booking: &NewBooking) -> RepoResult<RecordId>;
    fn get_booking(&self, id: RecordId) -> RepoResult<Option<Booking>>;
    fn list_bookings(&self) -> RepoResult<Vec<Booking>>;
    fn update_booking_field(&self, id: RecordId, field: &BookingField) -> RepoResult<()>;
}

pub struct SqliteBookingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookingRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookingRepository for SqliteBookingRepository<'_> {
    fn insert_booking(&self, booking: &NewBooking) -> RepoResult<RecordId> {
        booking.validate()?;

        self.conn.execute(
            "INSERT INTO Class_Bookings (
                Member_ID,
                Class_ID,
                Booking_Date,
                Attendance_Status
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                booking.member_id,
                booking.class_id,
                format_date(booking.booking_date),
                booking.attendance_status.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_booking(&self, id: RecordId) -> RepoResult<Option<Booking>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOKING_SELECT_SQL} WHERE Booking_ID = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_booking_row(row)?));
        }

        Ok(None)
    }

    fn list_bookings(&self) -> RepoResult<Vec<Booking>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOKING_SELECT_SQL} ORDER BY Booking_ID ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut bookings = Vec::new();

        while let Some(row) = rows.next()? {
            bookings.push(parse_booking_row(row)?);
        }

        Ok(bookings)
    }

    fn update_booking_field(&self, id: RecordId, field: &BookingField) -> RepoResult<()> {
        SqliteRecordRepository::new(self.conn).update_field(id, field)
    }
}

fn parse_booking_row(row: &Row<'_>) -> RepoResult<Booking> {
    Ok(Booking {
        id: row.get("Booking_ID")?,
        member_id: row.get("Member_ID")?,
        class_id: row.get("Class_ID")?,
        booking_date: read_date(row, "Booking_Date")?,
        attendance_status: read_label(row, "Attendance_Status", AttendanceStatus::parse)?,
    })
}
