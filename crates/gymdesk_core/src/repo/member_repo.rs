//! Member repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Insert, read and single-field update of `Members` rows.
//! - Insert a member together with an initial membership record atomically.
//!
//! # Invariants
//! - Email and phone uniqueness is enforced by SQLite, not checked here.
//! - The combined member + plan insert commits both rows or neither.

use super::record_repo::{RecordRepository, SqliteRecordRepository};
use super::{read_date, read_label, RepoError, RepoResult};
use crate::model::field::format_date;
use crate::model::member::{Member, MemberField, NewMember, NewMemberWithPlan};
use crate::model::status::MemberStatus;
use crate::model::table::Table;
use crate::model::RecordId;
use chrono::Months;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const MEMBER_SELECT_SQL: &str = "SELECT
    Member_ID,
    First_Name,
    Last_Name,
    Email,
    Phone,
    Date_of_Birth,
    Join_Date,
    Status
FROM Members";

/// Ids created by [`MemberRepository::insert_member_with_plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberWithPlanIds {
    pub member_id: RecordId,
    pub membership_id: RecordId,
}

/// Repository interface for member operations.
pub trait MemberRepository {
    fn insert_member(&self, member: &NewMember) -> RepoResult<RecordId>;
    fn insert_member_with_plan(&self, input: &NewMemberWithPlan) -> RepoResult<MemberWithPlanIds>;
    fn get_member(&self, id: RecordId) -> RepoResult<Option<Member>>;
    fn list_members(&self) -> RepoResult<Vec<Member>>;
    fn update_member_field(&self, id: RecordId, field: &MemberField) -> RepoResult<()>;
}

/// SQLite-backed member repository.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn insert_member(&self, member: &NewMember) -> RepoResult<RecordId> {
        member.validate()?;
        insert_member_row(self.conn, member)
    }

    fn insert_member_with_plan(&self, input: &NewMemberWithPlan) -> RepoResult<MemberWithPlanIds> {
        input.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let duration_months: Option<i64> = tx
            .query_row(
                "SELECT Duration_Months FROM Membership_Plans WHERE Plan_ID = ?1;",
                [input.plan_id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(duration_months) = duration_months else {
            return Err(RepoError::NotFound {
                table: Table::MembershipPlans,
                id: input.plan_id,
            });
        };

        let member_id = insert_member_row(&tx, &input.member)?;

        let start_date = input.member.join_date;
        let end_date = u32::try_from(duration_months)
            .ok()
            .and_then(|months| start_date.checked_add_months(Months::new(months)))
            .ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "plan {} has unusable duration {duration_months}",
                    input.plan_id
                ))
            })?;

        tx.execute(
            "INSERT INTO Member_Memberships (
                Member_ID,
                Plan_ID,
                Start_Date,
                End_Date,
                Payment_Status,
                Is_Active
            ) VALUES (?1, ?2, ?3, ?4, ?5, 1);",
            params![
                member_id,
                input.plan_id,
                format_date(start_date),
                format_date(end_date),
                input.payment_status.as_str(),
            ],
        )?;
        let membership_id = tx.last_insert_rowid();

        tx.commit()?;

        Ok(MemberWithPlanIds {
            member_id,
            membership_id,
        })
    }

    fn get_member(&self, id: RecordId) -> RepoResult<Option<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE Member_ID = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }

        Ok(None)
    }

    fn list_members(&self) -> RepoResult<Vec<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} ORDER BY Member_ID ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();

        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        Ok(members)
    }

    fn update_member_field(&self, id: RecordId, field: &MemberField) -> RepoResult<()> {
        SqliteRecordRepository::new(self.conn).update_field(id, field)
    }
}

fn insert_member_row(conn: &Connection, member: &NewMember) -> RepoResult<RecordId> {
    conn.execute(
        "INSERT INTO Members (
            First_Name,
            Last_Name,
            Email,
            Phone,
            Date_of_Birth,
            Join_Date,
            Status
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
        params![
            member.first_name.trim(),
            member.last_name.trim(),
            member.email.trim(),
            member.phone.trim(),
            format_date(member.date_of_birth),
            format_date(member.join_date),
            member.status.as_str(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<Member> {
    Ok(Member {
        id: row.get("Member_ID")?,
        first_name: row.get("First_Name")?,
        last_name: row.get("Last_Name")?,
        email: row.get("Email")?,
        phone: row.get("Phone")?,
        date_of_birth: read_date(row, "Date_of_Birth")?,
        join_date: read_date(row, "Join_Date")?,
        status: read_label(row, "Status", MemberStatus::parse)?,
    })
}
