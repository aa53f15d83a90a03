//! Status enumerations mirrored by SQL `CHECK` constraints.
//!
//! # Invariants
//! - `as_str()` returns exactly the label stored in SQLite.
//! - `parse()` accepts only those labels.

use serde::{Deserialize, Serialize};

/// Member account state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl MemberStatus {
    pub const LABELS: &'static [&'static str] = &["Active", "Inactive"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Payment state of a membership record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Expired,
}

impl PaymentStatus {
    pub const LABELS: &'static [&'static str] = &["Paid", "Pending", "Expired"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Expired => "Expired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Paid" => Some(Self::Paid),
            "Pending" => Some(Self::Pending),
            "Expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

/// Weekday a class is scheduled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ClassDay {
    pub const ALL: [ClassDay; 7] = [
        ClassDay::Monday,
        ClassDay::Tuesday,
        ClassDay::Wednesday,
        ClassDay::Thursday,
        ClassDay::Friday,
        ClassDay::Saturday,
        ClassDay::Sunday,
    ];

    pub const LABELS: &'static [&'static str] = &[
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    pub fn as_str(self) -> &'static str {
        Self::LABELS[self.index() as usize - 1]
    }

    /// Monday is 1, Sunday is 7.
    pub fn index(self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.as_str() == value)
    }
}

/// Lifecycle of a single booking: Booked, then Attended/Cancelled/No-Show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Booked,
    Attended,
    Cancelled,
    #[serde(rename = "No-Show")]
    NoShow,
}

impl AttendanceStatus {
    pub const LABELS: &'static [&'static str] = &["Booked", "Attended", "Cancelled", "No-Show"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Attended => "Attended",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No-Show",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Booked" => Some(Self::Booked),
            "Attended" => Some(Self::Attended),
            "Cancelled" => Some(Self::Cancelled),
            "No-Show" => Some(Self::NoShow),
            _ => None,
        }
    }
}
