//! Membership records: the assignment of a plan to a member for a date range.

use super::field::{
    format_date, parse_choice, parse_date, parse_integer, unknown_field, FieldSpec, FieldUpdate,
    FieldValue,
};
use super::status::PaymentStatus;
use super::table::Table;
use super::{RecordId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted `Member_Memberships` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: RecordId,
    /// Cascades: deleting the member deletes this record.
    pub member_id: RecordId,
    /// Restricts: the plan cannot be deleted while this record exists.
    pub plan_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub is_active: bool,
}

/// Insert input for a membership record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMembership {
    pub member_id: RecordId,
    pub plan_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub is_active: bool,
}

impl NewMembership {
    /// All fields are typed; references are checked by SQLite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipField {
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    PaymentStatus(PaymentStatus),
    IsActive(bool),
}

impl FieldUpdate for MembershipField {
    const TABLE: Table = Table::MemberMemberships;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec { name: "start_date", label: "Start Date", hint: "YYYY-MM-DD" },
        FieldSpec { name: "end_date", label: "End Date", hint: "YYYY-MM-DD" },
        FieldSpec { name: "payment_status", label: "Payment Status", hint: "Paid|Pending|Expired" },
        FieldSpec { name: "is_active", label: "Active Flag", hint: "0|1" },
    ];

    fn parse(name: &str, raw: &str) -> Result<Self, ValidationError> {
        match name.trim() {
            "start_date" => Ok(Self::StartDate(parse_date("start_date", raw)?)),
            "end_date" => Ok(Self::EndDate(parse_date("end_date", raw)?)),
            "payment_status" => Ok(Self::PaymentStatus(parse_choice(
                "payment_status",
                raw,
                PaymentStatus::LABELS,
                PaymentStatus::parse,
            )?)),
            "is_active" => match parse_integer("is_active", raw)? {
                0 => Ok(Self::IsActive(false)),
                1 => Ok(Self::IsActive(true)),
                other => Err(ValidationError::InvalidValue {
                    field: "is_active",
                    reason: format!("expected 0 or 1, got `{other}`"),
                }),
            },
            other => Err(unknown_field(other)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::StartDate(_) => "start_date",
            Self::EndDate(_) => "end_date",
            Self::PaymentStatus(_) => "payment_status",
            Self::IsActive(_) => "is_active",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::StartDate(_) => "Start_Date",
            Self::EndDate(_) => "End_Date",
            Self::PaymentStatus(_) => "Payment_Status",
            Self::IsActive(_) => "Is_Active",
        }
    }

    fn value(&self) -> FieldValue {
        match self {
            Self::StartDate(date) | Self::EndDate(date) => FieldValue::Text(format_date(*date)),
            Self::PaymentStatus(status) => FieldValue::Text(status.as_str().to_string()),
            Self::IsActive(active) => FieldValue::Integer(i64::from(*active)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_active_accepts_only_zero_or_one() {
        assert_eq!(
            MembershipField::parse("is_active", "0").unwrap(),
            MembershipField::IsActive(false)
        );
        assert!(MembershipField::parse("is_active", "2").is_err());
    }
}
