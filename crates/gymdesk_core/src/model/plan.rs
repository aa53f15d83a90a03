//! Membership plan records.

use super::field::{
    optional_text, parse_decimal, parse_integer, required_text, unknown_field, FieldSpec,
    FieldUpdate, FieldValue,
};
use super::table::Table;
use super::{require_present, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted `Membership_Plans` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: RecordId,
    pub plan_name: String,
    pub duration_months: i64,
    /// Never negative (SQL check).
    pub price: f64,
    pub benefits: Option<String>,
}

/// Insert input for a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlan {
    pub plan_name: String,
    pub duration_months: i64,
    pub price: f64,
    pub benefits: Option<String>,
}

impl NewPlan {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("plan_name", &self.plan_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanField {
    PlanName(String),
    DurationMonths(i64),
    Price(f64),
    Benefits(Option<String>),
}

impl FieldUpdate for PlanField {
    const TABLE: Table = Table::MembershipPlans;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec { name: "plan_name", label: "Plan Name", hint: "text" },
        FieldSpec { name: "duration_months", label: "Duration (Months)", hint: "whole number > 0" },
        FieldSpec { name: "price", label: "Price", hint: "number >= 0" },
        FieldSpec { name: "benefits", label: "Benefits Description", hint: "text" },
    ];

    fn parse(name: &str, raw: &str) -> Result<Self, ValidationError> {
        match name.trim() {
            "plan_name" => Ok(Self::PlanName(required_text("plan_name", raw)?)),
            "duration_months" => Ok(Self::DurationMonths(parse_integer("duration_months", raw)?)),
            "price" => Ok(Self::Price(parse_decimal("price", raw)?)),
            "benefits" => Ok(Self::Benefits(optional_text(raw))),
            other => Err(unknown_field(other)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::PlanName(_) => "plan_name",
            Self::DurationMonths(_) => "duration_months",
            Self::Price(_) => "price",
            Self::Benefits(_) => "benefits",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::PlanName(_) => "Plan_Name",
            Self::DurationMonths(_) => "Duration_Months",
            Self::Price(_) => "Price",
            Self::Benefits(_) => "Benefits_Description",
        }
    }

    fn value(&self) -> FieldValue {
        match self {
            Self::PlanName(value) => FieldValue::Text(value.clone()),
            Self::DurationMonths(months) => FieldValue::Integer(*months),
            Self::Price(price) => FieldValue::Real(*price),
            // Empty benefits text is stored as an empty string, not NULL.
            Self::Benefits(value) => FieldValue::Text(value.clone().unwrap_or_default()),
        }
    }
}
