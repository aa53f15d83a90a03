//! Membership record repository.

use super::record_repo::{RecordRepository, SqliteRecordRepository};
use super::{bool_to_int, read_date, read_flag, read_label, RepoResult};
use crate::model::field::format_date;
use crate::model::membership::{Membership, MembershipField, NewMembership};
use crate::model::status::PaymentStatus;
use crate::model::RecordId;
use rusqlite::{params, Connection, Row};

const MEMBERSHIP_SELECT_SQL: &str = "SELECT
    Membership_Record_ID,
    Member_ID,
    Plan_ID,
    Start_Date,
    End_Date,
    Payment_Status,
    Is_Active
FROM Member_Memberships";

pub trait MembershipRepository {
    fn insert_membership(&self, membership: &NewMembership) -> RepoResult<RecordId>;
    fn get_membership(&self, id: RecordId) -> RepoResult<Option<Membership>>;
    fn list_memberships(&self) -> RepoResult<Vec<Membership>>;
    fn list_memberships_for_member(&self, member_id: RecordId) -> RepoResult<Vec<Membership>>;
    fn update_membership_field(&self, id: RecordId, field: &MembershipField) -> RepoResult<()>;
}

pub struct SqliteMembershipRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMembershipRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query(&self, sql: &str, member_id: Option<RecordId>) -> RepoResult<Vec<Membership>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = match member_id {
            Some(member_id) => stmt.query([member_id])?,
            None => stmt.query([])?,
        };
        let mut memberships = Vec::new();

        while let Some(row) = rows.next()? {
            memberships.push(parse_membership_row(row)?);
        }

        Ok(memberships)
    }
}

impl MembershipRepository for SqliteMembershipRepository<'_> {
    fn insert_membership(&self, membership: &NewMembership) -> RepoResult<RecordId> {
        membership.validate()?;

        self.conn.execute(
            "INSERT INTO Member_Memberships (
                Member_ID,
                Plan_ID,
                Start_Date,
                End_Date,
                Payment_Status,
                Is_Active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                membership.member_id,
                membership.plan_id,
                format_date(membership.start_date),
                format_date(membership.end_date),
                membership.payment_status.as_str(),
                bool_to_int(membership.is_active),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_membership(&self, id: RecordId) -> RepoResult<Option<Membership>> {
        let mut found = self.query(
            &format!("{MEMBERSHIP_SELECT_SQL} WHERE Membership_Record_ID = ?1;"),
            Some(id),
        )?;
        Ok(found.pop())
    }

    fn list_memberships(&self) -> RepoResult<Vec<Membership>> {
        self.query(
            &format!("{MEMBERSHIP_SELECT_SQL} ORDER BY Membership_Record_ID ASC;"),
            None,
        )
    }

    fn list_memberships_for_member(&self, member_id: RecordId) -> RepoResult<Vec<Membership>> {
        self.query(
            &format!(
                "{MEMBERSHIP_SELECT_SQL} WHERE Member_ID = ?1 ORDER BY Membership_Record_ID ASC;"
            ),
            Some(member_id),
        )
    }

    fn update_membership_field(&self, id: RecordId, field: &MembershipField) -> RepoResult<()> {
        SqliteRecordRepository::new(self.conn).update_field(id, field)
    }
}

fn parse_membership_row(row: &Row<'_>) -> RepoResult<Membership> {
    Ok(Membership {
        id: row.get("Membership_Record_ID")?,
        member_id: row.get("Member_ID")?,
        plan_id: row.get("Plan_ID")?,
        start_date: read_date(row, "Start_Date")?,
        end_date: read_date(row, "End_Date")?,
        payment_status: read_label(row, "Payment_Status", PaymentStatus::parse)?,
        is_active: read_flag(row, "Is_Active")?,
    })
}
