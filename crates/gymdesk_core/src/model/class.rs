//! Class offerings.

use super::field::{
    format_time, parse_choice, parse_integer, parse_time, required_text, unknown_field,
    FieldSpec, FieldUpdate, FieldValue,
};
use super::status::ClassDay;
use super::table::Table;
use super::{require_present, RecordId, ValidationError};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Class types offered by the insert form.
pub const CLASS_TYPES: &[&str] = &[
    "Yoga", "CrossFit", "Pilates", "Spinning", "Zumba", "Boxing", "Swimming", "HIIT",
];

/// Persisted `Classes` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymClass {
    pub id: RecordId,
    /// Unique across classes.
    pub class_name: String,
    pub class_type: String,
    /// Restricts: the trainer cannot be deleted while this class exists.
    pub trainer_id: RecordId,
    pub schedule_day: ClassDay,
    pub schedule_time: NaiveTime,
    pub duration_minutes: i64,
    pub max_capacity: i64,
}

impl GymClass {
    /// Dropdown label (`Morning Yoga - Monday 08:00`).
    pub fn slot_label(&self) -> String {
        format!(
            "{} - {} {}",
            self.class_name,
            self.schedule_day.as_str(),
            format_time(self.schedule_time)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClass {
    pub class_name: String,
    pub class_type: String,
    pub trainer_id: RecordId,
    pub schedule_day: ClassDay,
    pub schedule_time: NaiveTime,
    pub duration_minutes: i64,
    pub max_capacity: i64,
}

impl NewClass {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present("class_name", &self.class_name)?;
        require_present("class_type", &self.class_type)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassField {
    ClassName(String),
    ClassType(String),
    TrainerId(RecordId),
    ScheduleDay(ClassDay),
    ScheduleTime(NaiveTime),
    DurationMinutes(i64),
    MaxCapacity(i64),
}

impl FieldUpdate for ClassField {
    const TABLE: Table = Table::Classes;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec { name: "class_name", label: "Class Name", hint: "unique" },
        FieldSpec { name: "class_type", label: "Class Type", hint: "text" },
        FieldSpec { name: "trainer_id", label: "Trainer ID", hint: "existing trainer id" },
        FieldSpec { name: "schedule_day", label: "Schedule Day", hint: "Monday..Sunday" },
        FieldSpec { name: "schedule_time", label: "Schedule Time", hint: "HH:MM" },
        FieldSpec { name: "duration_minutes", label: "Duration (Minutes)", hint: "whole number > 0" },
        FieldSpec { name: "max_capacity", label: "Max Capacity", hint: "whole number > 0" },
    ];

    fn parse(name: &str, raw: &str) -> Result<Self, ValidationError> {
        match name.trim() {
            "class_name" => Ok(Self::ClassName(required_text("class_name", raw)?)),
            "class_type" => Ok(Self::ClassType(required_text("class_type", raw)?)),
            "trainer_id" => Ok(Self::TrainerId(parse_integer("trainer_id", raw)?)),
            "schedule_day" => Ok(Self::ScheduleDay(parse_choice(
                "schedule_day",
                raw,
                ClassDay::LABELS,
                ClassDay::parse,
            )?)),
            "schedule_time" => Ok(Self::ScheduleTime(parse_time("schedule_time", raw)?)),
            "duration_minutes" => Ok(Self::DurationMinutes(parse_integer("duration_minutes", raw)?)),
            "max_capacity" => Ok(Self::MaxCapacity(parse_integer("max_capacity", raw)?)),
            other => Err(unknown_field(other)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::ClassName(_) => "class_name",
            Self::ClassType(_) => "class_type",
            Self::TrainerId(_) => "trainer_id",
            Self::ScheduleDay(_) => "schedule_day",
            Self::ScheduleTime(_) => "schedule_time",
            Self::DurationMinutes(_) => "duration_minutes",
            Self::MaxCapacity(_) => "max_capacity",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::ClassName(_) => "Class_Name",
            Self::ClassType(_) => "Class_Type",
            Self::TrainerId(_) => "Trainer_ID",
            Self::ScheduleDay(_) => "Schedule_Day",
            Self::ScheduleTime(_) => "Schedule_Time",
            Self::DurationMinutes(_) => "Duration_Minutes",
            Self::MaxCapacity(_) => "Max_Capacity",
        }
    }

    fn value(&self) -> FieldValue {
        match self {
            Self::ClassName(value) | Self::ClassType(value) => FieldValue::Text(value.clone()),
            Self::TrainerId(id) => FieldValue::Integer(*id),
            Self::ScheduleDay(day) => FieldValue::Text(day.as_str().to_string()),
            Self::ScheduleTime(time) => FieldValue::Text(format_time(*time)),
            Self::DurationMinutes(value) | Self::MaxCapacity(value) => FieldValue::Integer(*value),
        }
    }
}
