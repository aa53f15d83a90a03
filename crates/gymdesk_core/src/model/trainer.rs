//! Trainer records.

use super::field::{
    format_date, parse_date, required_text, unknown_field, FieldSpec, FieldUpdate, FieldValue,
};
use super::table::Table;
use super::{require_present, RecordId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Specializations offered by the insert form.
pub const SPECIALIZATIONS: &[&str] = &[
    "Yoga",
    "CrossFit",
    "Pilates",
    "Spinning",
    "Zumba",
    "Personal Training",
    "Boxing",
    "Swimming",
];

/// Persisted `Trainers` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub email: String,
    pub phone: String,
    pub hire_date: NaiveDate,
}

impl Trainer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrainer {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub email: String,
    pub phone: String,
    pub hire_date: NaiveDate,
}

impl NewTrainer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("first_name", &self.first_name)?;
        require_present("last_name", &self.last_name)?;
        require_present("specialization", &self.specialization)?;
        require_present("email", &self.email)?;
        require_present("phone", &self.phone)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainerField {
    FirstName(String),
    LastName(String),
    Specialization(String),
    Email(String),
    Phone(String),
    HireDate(NaiveDate),
}

impl FieldUpdate for TrainerField {
    const TABLE: Table = Table::Trainers;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec { name: "first_name", label: "First Name", hint: "text" },
        FieldSpec { name: "last_name", label: "Last Name", hint: "text" },
        FieldSpec { name: "specialization", label: "Specialization", hint: "text" },
        FieldSpec { name: "email", label: "Email", hint: "unique" },
        FieldSpec { name: "phone", label: "Phone", hint: "unique" },
        FieldSpec { name: "hire_date", label: "Hire Date", hint: "YYYY-MM-DD" },
    ];

    fn parse(name: &str, raw: &str) -> Result<Self, ValidationError> {
        match name.trim() {
            "first_name" => Ok(Self::FirstName(required_text("first_name", raw)?)),
            "last_name" => Ok(Self::LastName(required_text("last_name", raw)?)),
            "specialization" => Ok(Self::Specialization(required_text("specialization", raw)?)),
            "email" => Ok(Self::Email(required_text("email", raw)?)),
            "phone" => Ok(Self::Phone(required_text("phone", raw)?)),
            "hire_date" => Ok(Self::HireDate(parse_date("hire_date", raw)?)),
            other => Err(unknown_field(other)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "first_name",
            Self::LastName(_) => "last_name",
            Self::Specialization(_) => "specialization",
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
            Self::HireDate(_) => "hire_date",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "First_Name",
            Self::LastName(_) => "Last_Name",
            Self::Specialization(_) => "Specialization",
            Self::Email(_) => "Email",
            Self::Phone(_) => "Phone",
            Self::HireDate(_) => "Hire_Date",
        }
    }

    fn value(&self) -> FieldValue {
        match self {
            Self::FirstName(value)
            | Self::LastName(value)
            | Self::Specialization(value)
            | Self::Email(value)
            | Self::Phone(value) => FieldValue::Text(value.clone()),
            Self::HireDate(date) => FieldValue::Text(format_date(*date)),
        }
    }
}
