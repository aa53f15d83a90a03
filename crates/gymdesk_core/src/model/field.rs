//! Single-column update contracts shared by every entity.
//!
//! # Responsibility
//! - Describe the closed set of updatable columns per table.
//! - Parse raw form text into typed values before any SQL runs.
//! - Define the narrow "clear field" placeholders.
//!
//! # Invariants
//! - Column identifiers only ever come from `&'static str` tables in this
//!   crate; user text is a value, never an identifier.
//! - Parsing checks presence and shape only. Range rules (positive capacity,
//!   non-negative price) stay in SQL constraints.

use super::table::Table;
use super::ValidationError;
use chrono::{NaiveDate, NaiveTime};

/// Value written by a single-column update.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

/// Static description of one updatable column, used to build selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable form name (`first_name`).
    pub name: &'static str,
    /// Human label (`First Name`).
    pub label: &'static str,
    /// Input format hint shown next to the value box.
    pub hint: &'static str,
}

/// A typed single-column update for one table.
pub trait FieldUpdate {
    /// Table owning the column.
    const TABLE: Table;
    /// All columns this table allows to be updated.
    const SPECS: &'static [FieldSpec];

    /// Builds an update from a form field name and raw text value.
    ///
    /// # Errors
    /// - `UnknownField` when `name` is outside [`Self::SPECS`].
    /// - `MissingField` / `InvalidValue` when `raw` is empty or malformed.
    fn parse(name: &str, raw: &str) -> Result<Self, ValidationError>
    where
        Self: Sized;

    /// Stable form name of the targeted column.
    fn name(&self) -> &'static str;

    /// SQL column name.
    fn column(&self) -> &'static str;

    /// New value to bind.
    fn value(&self) -> FieldValue;

    /// Human label of the targeted column.
    fn label(&self) -> &'static str {
        spec_label(Self::SPECS, self.name())
    }
}

/// Columns that can be "cleared" to a fixed placeholder.
///
/// Most columns are `NOT NULL` or `UNIQUE`, so clearing is limited to
/// descriptive text and the payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearField {
    PlanBenefits,
    TrainerSpecialization,
    ClassType,
    MembershipPaymentStatus,
}

impl ClearField {
    pub const ALL: [ClearField; 4] = [
        ClearField::PlanBenefits,
        ClearField::TrainerSpecialization,
        ClearField::ClassType,
        ClearField::MembershipPaymentStatus,
    ];

    pub fn table(self) -> Table {
        match self {
            Self::PlanBenefits => Table::MembershipPlans,
            Self::TrainerSpecialization => Table::Trainers,
            Self::ClassType => Table::Classes,
            Self::MembershipPaymentStatus => Table::MemberMemberships,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::PlanBenefits => "Benefits_Description",
            Self::TrainerSpecialization => "Specialization",
            Self::ClassType => "Class_Type",
            Self::MembershipPaymentStatus => "Payment_Status",
        }
    }

    /// Form name, unique across tables.
    pub fn name(self) -> &'static str {
        match self {
            Self::PlanBenefits => "benefits",
            Self::TrainerSpecialization => "specialization",
            Self::ClassType => "class_type",
            Self::MembershipPaymentStatus => "payment_status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PlanBenefits => "Benefits Description",
            Self::TrainerSpecialization => "Specialization",
            Self::ClassType => "Class Type",
            Self::MembershipPaymentStatus => "Payment Status",
        }
    }

    /// Value written in place of the cleared content.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::PlanBenefits => "No description",
            Self::TrainerSpecialization | Self::ClassType => "General",
            Self::MembershipPaymentStatus => "Pending",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Clearable fields of one table, in declaration order.
    pub fn for_table(table: Table) -> Vec<ClearField> {
        Self::ALL
            .into_iter()
            .filter(|field| field.table() == table)
            .collect()
    }
}

pub(crate) fn spec_label(specs: &[FieldSpec], name: &str) -> &'static str {
    specs
        .iter()
        .find(|spec| spec.name == name)
        .map_or("Field", |spec| spec.label)
}

pub(crate) fn unknown_field(name: &str) -> ValidationError {
    ValidationError::UnknownField(name.trim().to_string())
}

/// Trims `raw` and rejects empty input.
pub fn required_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims `raw` and maps empty input to `None`.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let text = required_text(field, raw)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| ValidationError::InvalidValue {
        field,
        reason: format!("expected YYYY-MM-DD, got `{text}`"),
    })
}

/// Parses a wall-clock time as `HH:MM` (seconds are accepted and dropped).
pub fn parse_time(field: &'static str, raw: &str) -> Result<NaiveTime, ValidationError> {
    let text = required_text(field, raw)?;
    NaiveTime::parse_from_str(&text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidValue {
            field,
            reason: format!("expected HH:MM, got `{text}`"),
        })
}

/// Parses a whole number.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let text = required_text(field, raw)?;
    text.parse::<i64>()
        .map_err(|_| ValidationError::InvalidValue {
            field,
            reason: format!("expected a whole number, got `{text}`"),
        })
}

/// Parses a decimal amount.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let text = required_text(field, raw)?;
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidValue {
            field,
            reason: format!("expected a number, got `{text}`"),
        }),
    }
}

/// Parses `raw` with an enumeration parser, naming the allowed labels on
/// failure.
pub fn parse_choice<T>(
    field: &'static str,
    raw: &str,
    allowed: &[&str],
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let text = required_text(field, raw)?;
    parse(&text).ok_or_else(|| ValidationError::InvalidValue {
        field,
        reason: format!("expected one of {}, got `{text}`", allowed.join("|")),
    })
}

/// Formats a date the way it is stored.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a time the way it is stored.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("email", "  a@b.c ").unwrap(), "a@b.c");
        assert_eq!(
            required_text("email", "   ").unwrap_err(),
            ValidationError::MissingField("email")
        );
    }

    #[test]
    fn parse_time_accepts_minutes_and_seconds() {
        let plain = parse_time("schedule_time", "08:30").unwrap();
        let with_seconds = parse_time("schedule_time", "08:30:00").unwrap();
        assert_eq!(plain, with_seconds);
        assert_eq!(format_time(plain), "08:30");
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        let err = parse_date("join_date", "10/01/2024").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidValue {
                field: "join_date",
                ..
            }
        ));
    }

    #[test]
    fn parse_decimal_rejects_non_finite() {
        assert!(parse_decimal("price", "NaN").is_err());
        assert_eq!(parse_decimal("price", "49.5").unwrap(), 49.5);
    }

    #[test]
    fn clear_fields_are_scoped_to_their_tables() {
        assert_eq!(
            ClearField::for_table(Table::Trainers),
            vec![ClearField::TrainerSpecialization]
        );
        assert!(ClearField::for_table(Table::Members).is_empty());
        assert_eq!(ClearField::parse("benefits"), Some(ClearField::PlanBenefits));
        assert_eq!(ClearField::parse("Email"), None);
    }
}
