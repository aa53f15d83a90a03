//! Member records, insert inputs and updatable fields.

use super::field::{
    format_date, parse_choice, parse_date, required_text, unknown_field, FieldSpec, FieldUpdate,
    FieldValue,
};
use super::status::{MemberStatus, PaymentStatus};
use super::table::Table;
use super::{require_present, RecordId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted `Members` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    /// Globally unique.
    pub email: String,
    /// Globally unique.
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Insert input for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
}

impl NewMember {
    /// Checks that every required text field is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("first_name", &self.first_name)?;
        require_present("last_name", &self.last_name)?;
        require_present("email", &self.email)?;
        require_present("phone", &self.phone)?;
        Ok(())
    }
}

/// Combined "member + initial plan" input.
///
/// The membership record starts on `member.join_date` and lasts the plan's
/// `Duration_Months`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMemberWithPlan {
    pub member: NewMember,
    pub plan_id: RecordId,
    pub payment_status: PaymentStatus,
}

impl NewMemberWithPlan {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.member.validate()
    }
}

/// Single updatable `Members` column with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberField {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    DateOfBirth(NaiveDate),
    JoinDate(NaiveDate),
    Status(MemberStatus),
}

impl FieldUpdate for MemberField {
    const TABLE: Table = Table::Members;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec { name: "first_name", label: "First Name", hint: "text" },
        FieldSpec { name: "last_name", label: "Last Name", hint: "text" },
        FieldSpec { name: "email", label: "Email", hint: "unique" },
        FieldSpec { name: "phone", label: "Phone", hint: "unique" },
        FieldSpec { name: "date_of_birth", label: "Date of Birth", hint: "YYYY-MM-DD" },
        FieldSpec { name: "join_date", label: "Join Date", hint: "YYYY-MM-DD" },
        FieldSpec { name: "status", label: "Status", hint: "Active|Inactive" },
    ];

    fn parse(name: &str, raw: &str) -> Result<Self, ValidationError> {
        match name.trim() {
            "first_name" => Ok(Self::FirstName(required_text("first_name", raw)?)),
            "last_name" => Ok(Self::LastName(required_text("last_name", raw)?)),
            "email" => Ok(Self::Email(required_text("email", raw)?)),
            "phone" => Ok(Self::Phone(required_text("phone", raw)?)),
            "date_of_birth" => Ok(Self::DateOfBirth(parse_date("date_of_birth", raw)?)),
            "join_date" => Ok(Self::JoinDate(parse_date("join_date", raw)?)),
            "status" => Ok(Self::Status(parse_choice(
                "status",
                raw,
                MemberStatus::LABELS,
                MemberStatus::parse,
            )?)),
            other => Err(unknown_field(other)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "first_name",
            Self::LastName(_) => "last_name",
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
            Self::DateOfBirth(_) => "date_of_birth",
            Self::JoinDate(_) => "join_date",
            Self::Status(_) => "status",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "First_Name",
            Self::LastName(_) => "Last_Name",
            Self::Email(_) => "Email",
            Self::Phone(_) => "Phone",
            Self::DateOfBirth(_) => "Date_of_Birth",
            Self::JoinDate(_) => "Join_Date",
            Self::Status(_) => "Status",
        }
    }

    fn value(&self) -> FieldValue {
        match self {
            Self::FirstName(value) | Self::LastName(value) | Self::Email(value) | Self::Phone(value) => {
                FieldValue::Text(value.clone())
            }
            Self::DateOfBirth(date) | Self::JoinDate(date) => FieldValue::Text(format_date(*date)),
            Self::Status(status) => FieldValue::Text(status.as_str().to_string()),
        }
    }
}
