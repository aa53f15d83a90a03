//! Class bookings.

use super::field::{
    format_date, parse_choice, parse_date, unknown_field, FieldSpec, FieldUpdate, FieldValue,
};
use super::status::AttendanceStatus;
use super::table::Table;
use super::{RecordId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted `Class_Bookings` row.
///
/// `(member_id, class_id, booking_date)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    pub member_id: RecordId,
    pub class_id: RecordId,
    pub booking_date: NaiveDate,
    pub attendance_status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub member_id: RecordId,
    pub class_id: RecordId,
    pub booking_date: NaiveDate,
    pub attendance_status: AttendanceStatus,
}

impl NewBooking {
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingField {
    BookingDate(NaiveDate),
    AttendanceStatus(AttendanceStatus),
}

impl FieldUpdate for BookingField {
    const TABLE: Table = Table::ClassBookings;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec { name: "booking_date", label: "Booking Date", hint: "YYYY-MM-DD" },
        FieldSpec {
            name: "attendance_status",
            label: "Attendance Status",
            hint: "Booked|Attended|Cancelled|No-Show",
        },
    ];

    fn parse(name: &str, raw: &str) -> Result<Self, ValidationError> {
        match name.trim() {
            "booking_date" => Ok(Self::BookingDate(parse_date("booking_date", raw)?)),
            "attendance_status" => Ok(Self::AttendanceStatus(parse_choice(
                "attendance_status",
                raw,
                AttendanceStatus::LABELS,
                AttendanceStatus::parse,
            )?)),
            other => Err(unknown_field(other)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::BookingDate(_) => "booking_date",
            Self::AttendanceStatus(_) => "attendance_status",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::BookingDate(_) => "Booking_Date",
            Self::AttendanceStatus(_) => "Attendance_Status",
        }
    }

    fn value(&self) -> FieldValue {
        match self {
            Self::BookingDate(date) => FieldValue::Text(format_date(*date)),
            Self::AttendanceStatus(status) => FieldValue::Text(status.as_str().to_string()),
        }
    }
}
