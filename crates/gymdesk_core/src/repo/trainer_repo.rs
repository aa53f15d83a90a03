//! Trainer repository.

use super::record_repo::{RecordRepository, SqliteRecordRepository};
use super::{read_date, RepoResult};
use crate::model::field::format_date;
use crate::model::trainer::{NewTrainer, Trainer, TrainerField};
use crate::model::RecordId;
use rusqlite::{params, Connection, Row};

const TRAINER_SELECT_SQL: &str = "SELECT
    Trainer_ID,
    First_Name,
    Last_Name,
    Specialization,
    Email,
    Phone,
    Hire_Date
FROM Trainers";

pub trait TrainerRepository {
    fn insert_trainer(&self, trainer: &NewTrainer) -> RepoResult<RecordId>;
    fn get_trainer(&self, id: RecordId) -> RepoResult<Option<Trainer>>;
    fn list_trainers(&self) -> RepoResult<Vec<Trainer>>;
    fn update_trainer_field(&self, id: RecordId, field: &TrainerField) -> RepoResult<()>;
}

pub struct SqliteTrainerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTrainerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TrainerRepository for SqliteTrainerRepository<'_> {
    fn insert_trainer(&self, trainer: &NewTrainer) -> RepoResult<RecordId> {
        trainer.validate()?;

        self.conn.execute(
            "INSERT INTO Trainers (
                First_Name,
                Last_Name,
                Specialization,
                Email,
                Phone,
                Hire_Date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                trainer.first_name.trim(),
                trainer.last_name.trim(),
                trainer.specialization.trim(),
                trainer.email.trim(),
                trainer.phone.trim(),
                format_date(trainer.hire_date),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_trainer(&self, id: RecordId) -> RepoResult<Option<Trainer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRAINER_SELECT_SQL} WHERE Trainer_ID = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_trainer_row(row)?));
        }

        Ok(None)
    }

    fn list_trainers(&self) -> RepoResult<Vec<Trainer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRAINER_SELECT_SQL} ORDER BY Trainer_ID ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut trainers = Vec::new();

        while let Some(row) = rows.next()? {
            trainers.push(parse_trainer_row(row)?);
        }

        Ok(trainers)
    }

    fn update_trainer_field(&self, id: RecordId, field: &TrainerField) -> RepoResult<()> {
        SqliteRecordRepository::new(self.conn).update_field(id, field)
    }
}

fn parse_trainer_row(row: &Row<'_>) -> RepoResult<Trainer> {
    Ok(Trainer {
        id: row.get("Trainer_ID")?,
        first_name: row.get("First_Name")?,
        last_name: row.get("Last_Name")?,
        specialization: row.get("Specialization")?,
        email: row.get("Email")?,
        phone: row.get("Phone")?,
        hire_date: read_date(row, "Hire_Date")?,
    })
}
