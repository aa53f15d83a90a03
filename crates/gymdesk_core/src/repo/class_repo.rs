//! Class repository.

use super::record_repo::{RecordRepository, SqliteRecordRepository};
use super::{read_label, read_time, RepoResult};
use crate::model::class::{ClassField, GymClass, NewClass};
use crate::model::field::format_time;
use crate::model::status::ClassDay;
use crate::model::RecordId;
use rusqlite::{params, Connection, Row};

const CLASS_SELECT_SQL: &str = "SELECT
    Class_ID,
    Class_Name,
    Class_Type,
    Trainer_ID,
    Schedule_Day,
    Schedule_Time,
    Duration_Minutes,
    Max_Capacity
FROM Classes";

pub trait ClassRepository {
    fn insert_class(&self, class: &NewClass) -> RepoResult<RecordId>;
    fn get_class(&self, id: RecordId) -> RepoResult<Option<GymClass>>;
    fn list_classes(&self) -> RepoResult<Vec<GymClass>>;
    fn update_class_field(&self, id: RecordId, field: &ClassField) -> RepoResult<()>;
}

pub struct SqliteClassRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClassRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ClassRepository for SqliteClassRepository<'_> {
    fn insert_class(&self, class: &NewClass) -> RepoResult<RecordId> {
        class.validate()?;

        self.conn.execute(
            "INSERT INTO Classes (
                Class_Name,
                Class_Type,
                Trainer_ID,
                Schedule_Day,
                Schedule_Time,
                Duration_Minutes,
                Max_Capacity
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                class.class_name.trim(),
                class.class_type.trim(),
                class.trainer_id,
                class.schedule_day.as_str(),
                format_time(class.schedule_time),
                class.duration_minutes,
                class.max_capacity,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_class(&self, id: RecordId) -> RepoResult<Option<GymClass>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLASS_SELECT_SQL} WHERE Class_ID = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_class_row(row)?));
        }

        Ok(None)
    }

    fn list_classes(&self) -> RepoResult<Vec<GymClass>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLASS_SELECT_SQL} ORDER BY Class_ID ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut classes = Vec::new();

        while let Some(row) = rows.next()? {
            classes.push(parse_class_row(row)?);
        }

        Ok(classes)
    }

    fn update_class_field(&self, id: RecordId, field: &ClassField) -> RepoResult<()> {
        SqliteRecordRepository::new(self.conn).update_field(id, field)
    }
}

fn parse_class_row(row: &Row<'_>) -> RepoResult<GymClass> {
    Ok(GymClass {
        id: row.get("Class_ID")?,
        class_name: row.get("Class_Name")?,
        class_type: row.get("Class_Type")?,
        trainer_id: row.get("Trainer_ID")?,
        schedule_day: read_label(row, "Schedule_Day", ClassDay::parse)?,
        schedule_time: read_time(row, "Schedule_Time")?,
        duration_minutes: row.get("Duration_Minutes")?,
        max_capacity: row.get("Max_Capacity")?,
    })
}
