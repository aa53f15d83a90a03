//! Membership plan repository.

use super::record_repo::{RecordRepository, SqliteRecordRepository};
use super::RepoResult;
use crate::model::plan::{MembershipPlan, NewPlan, PlanField};
use crate::model::RecordId;
use rusqlite::{params, Connection, Row};

const PLAN_SELECT_SQL: &str = "SELECT
    Plan_ID,
    Plan_Name,
    Duration_Months,
    Price,
    Benefits_Description
FROM Membership_Plans";

pub trait PlanRepository {
    fn insert_plan(&self, plan: &NewPlan) -> RepoResult<RecordId>;
    fn get_plan(&self, id: RecordId) -> RepoResult<Option<MembershipPlan>>;
    fn list_plans(&self) -> RepoResult<Vec<MembershipPlan>>;
    fn update_plan_field(&self, id: RecordId, field: &PlanField) -> RepoResult<()>;
}

pub struct SqlitePlanRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePlanRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PlanRepository for SqlitePlanRepository<'_> {
    fn insert_plan(&self, plan: &NewPlan) -> RepoResult<RecordId> {
        plan.validate()?;

        self.conn.execute(
            "INSERT INTO Membership_Plans (
                Plan_Name,
                Duration_Months,
                Price,
                Benefits_Description
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                plan.plan_name.trim(),
                plan.duration_months,
                plan.price,
                plan.benefits.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_plan(&self, id: RecordId) -> RepoResult<Option<MembershipPlan>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLAN_SELECT_SQL} WHERE Plan_ID = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_plan_row(row)?));
        }

        Ok(None)
    }

    fn list_plans(&self) -> RepoResult<Vec<MembershipPlan>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PLAN_SELECT_SQL} ORDER BY Plan_ID ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut plans = Vec::new();

        while let Some(row) = rows.next()? {
            plans.push(parse_plan_row(row)?);
        }

        Ok(plans)
    }

    fn update_plan_field(&self, id: RecordId, field: &PlanField) -> RepoResult<()> {
        SqliteRecordRepository::new(self.conn).update_field(id, field)
    }
}

fn parse_plan_row(row: &Row<'_>) -> RepoResult<MembershipPlan> {
    Ok(MembershipPlan {
        id: row.get("Plan_ID")?,
        plan_name: row.get("Plan_Name")?,
        duration_months: row.get("Duration_Months")?,
        price: row.get("Price")?,
        benefits: row.get("Benefits_Description")?,
    })
}
