//! Front-desk actions over one gym database file.
//!
//! # Responsibility
//! - Offer one entry point per user action (insert, update, clear, delete,
//!   dashboards, table views, reports).
//! - Turn repository results into the fixed feedback messages shown to the
//!   desk operator.
//!
//! # Invariants
//! - Every call opens its own connection and drops it before returning.
//! - Input that fails local validation never reaches the database.
//! - Write actions never return `Err`; failures are reported in
//!   [`ActionOutcome`].

use crate::db::open_db;
use crate::logging::single_line;
use crate::model::booking::{Booking, BookingField, NewBooking};
use crate::model::class::{ClassField, GymClass, NewClass};
use crate::model::field::{ClearField, FieldUpdate};
use crate::model::member::{Member, MemberField, NewMember, NewMemberWithPlan};
use crate::model::membership::{Membership, MembershipField, NewMembership};
use crate::model::plan::{MembershipPlan, NewPlan, PlanField};
use crate::model::table::Table;
use crate::model::trainer::{NewTrainer, Trainer, TrainerField};
use crate::model::{RecordId, ValidationError};
use crate::repo::booking_repo::{BookingRepository, SqliteBookingRepository};
use crate::repo::class_repo::{ClassRepository, SqliteClassRepository};
use crate::repo::member_repo::{MemberRepository, SqliteMemberRepository};
use crate::repo::membership_repo::{MembershipRepository, SqliteMembershipRepository};
use crate::repo::plan_repo::{PlanRepository, SqlitePlanRepository};
use crate::repo::record_repo::{RecordRepository, SqliteRecordRepository};
use crate::repo::trainer_repo::{SqliteTrainerRepository, TrainerRepository};
use crate::repo::{RepoError, RepoResult};
use crate::report::{self, ReportKind};
use crate::view::TableView;
use log::{debug, info, warn};
use rusqlite::Connection;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DUPLICATE_BOOKING_MESSAGE: &str =
    "Error: Member already has a booking for this class on this date";
const MAX_LOGGED_ERROR_CHARS: usize = 200;

/// Result envelope of a write action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    /// Whether the action changed the database.
    pub ok: bool,
    /// Operator-facing feedback text.
    pub message: String,
}

impl ActionOutcome {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Outcome for form input rejected before any desk call.
    pub fn rejected(err: &ValidationError) -> Self {
        Self::failure(validation_message(err))
    }
}

/// Row counts shown on the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeskCounts {
    pub members: u64,
    pub plans: u64,
    pub memberships: u64,
    pub trainers: u64,
    pub classes: u64,
    pub bookings: u64,
}

/// How a failed write is phrased for the operator.
#[derive(Debug, Clone, Copy)]
enum FailureStyle {
    Insert,
    Booking,
    Delete,
    Update(Table),
}

/// Entry point for every desk action against one database file.
#[derive(Debug, Clone)]
pub struct GymDesk {
    db_path: PathBuf,
}

impl GymDesk {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn insert_member(&self, member: &NewMember) -> ActionOutcome {
        self.write("insert_member", FailureStyle::Insert, |conn| {
            SqliteMemberRepository::new(conn).insert_member(member)?;
            Ok("Member added successfully!".to_string())
        })
    }

    /// Adds a member and their first membership record in one transaction.
    pub fn insert_member_with_plan(&self, input: &NewMemberWithPlan) -> ActionOutcome {
        self.write("insert_member_with_plan", FailureStyle::Insert, |conn| {
            SqliteMemberRepository::new(conn).insert_member_with_plan(input)?;
            Ok("Member added with initial membership!".to_string())
        })
    }

    pub fn insert_plan(&self, plan: &NewPlan) -> ActionOutcome {
        self.write("insert_plan", FailureStyle::Insert, |conn| {
            SqlitePlanRepository::new(conn).insert_plan(plan)?;
            Ok("Membership plan added successfully!".to_string())
        })
    }

    pub fn insert_membership(&self, membership: &NewMembership) -> ActionOutcome {
        self.write("insert_membership", FailureStyle::Insert, |conn| {
            SqliteMembershipRepository::new(conn).insert_membership(membership)?;
            Ok("Membership assigned successfully!".to_string())
        })
    }

    pub fn insert_trainer(&self, trainer: &NewTrainer) -> ActionOutcome {
        self.write("insert_trainer", FailureStyle::Insert, |conn| {
            SqliteTrainerRepository::new(conn).insert_trainer(trainer)?;
            Ok("Trainer added successfully!".to_string())
        })
    }

    pub fn insert_class(&self, class: &NewClass) -> ActionOutcome {
        self.write("insert_class", FailureStyle::Insert, |conn| {
            SqliteClassRepository::new(conn).insert_class(class)?;
            Ok("Class added successfully!".to_string())
        })
    }

    pub fn insert_booking(&self, booking: &NewBooking) -> ActionOutcome {
        self.write("insert_booking", FailureStyle::Booking, |conn| {
            SqliteBookingRepository::new(conn).insert_booking(booking)?;
            Ok("Booking created successfully!".to_string())
        })
    }

    /// Deletes one row. Cascades and restrictions are applied by SQLite.
    pub fn delete(&self, table: Table, id: RecordId) -> ActionOutcome {
        self.write("delete_record", FailureStyle::Delete, |conn| {
            SqliteRecordRepository::new(conn).delete_record(table, id)?;
            Ok("Record deleted successfully!".to_string())
        })
    }

    pub fn update_member_field(&self, id: RecordId, field: &MemberField) -> ActionOutcome {
        self.update("update_member", field, |conn| {
            SqliteMemberRepository::new(conn).update_member_field(id, field)
        })
    }

    pub fn update_plan_field(&self, id: RecordId, field: &PlanField) -> ActionOutcome {
        self.update("update_plan", field, |conn| {
            SqlitePlanRepository::new(conn).update_plan_field(id, field)
        })
    }

    pub fn update_membership_field(&self, id: RecordId, field: &MembershipField) -> ActionOutcome {
        self.update("update_membership", field, |conn| {
            SqliteMembershipRepository::new(conn).update_membership_field(id, field)
        })
    }

    pub fn update_trainer_field(&self, id: RecordId, field: &TrainerField) -> ActionOutcome {
        self.update("update_trainer", field, |conn| {
            SqliteTrainerRepository::new(conn).update_trainer_field(id, field)
        })
    }

    pub fn update_class_field(&self, id: RecordId, field: &ClassField) -> ActionOutcome {
        self.update("update_class", field, |conn| {
            SqliteClassRepository::new(conn).update_class_field(id, field)
        })
    }

    pub fn update_booking_field(&self, id: RecordId, field: &BookingField) -> ActionOutcome {
        self.update("update_booking", field, |conn| {
            SqliteBookingRepository::new(conn).update_booking_field(id, field)
        })
    }

    /// Parses `name`/`raw` for `table` and applies the single-column update.
    pub fn update_by_name(&self, table: Table, id: RecordId, name: &str, raw: &str) -> ActionOutcome {
        let parsed = match table {
            Table::Members => MemberField::parse(name, raw).map(|f| self.update_member_field(id, &f)),
            Table::MembershipPlans => PlanField::parse(name, raw).map(|f| self.update_plan_field(id, &f)),
            Table::MemberMemberships => {
                MembershipField::parse(name, raw).map(|f| self.update_membership_field(id, &f))
            }
            Table::Trainers => TrainerField::parse(name, raw).map(|f| self.update_trainer_field(id, &f)),
            Table::Classes => ClassField::parse(name, raw).map(|f| self.update_class_field(id, &f)),
            Table::ClassBookings => {
                BookingField::parse(name, raw).map(|f| self.update_booking_field(id, &f))
            }
        };

        parsed.unwrap_or_else(|err| {
            warn!(
                "event=desk_action module=service action=update_by_name status=rejected table={} error={}",
                table.sql_name(),
                err
            );
            ActionOutcome::failure(validation_message(&err))
        })
    }

    /// Overwrites one clearable column with its placeholder text.
    pub fn clear_field(&self, field: ClearField, id: RecordId) -> ActionOutcome {
        self.write("clear_field", FailureStyle::Update(field.table()), |conn| {
            SqliteRecordRepository::new(conn).clear_field(field, id)?;
            Ok(format!("{} cleared.", field.label()))
        })
    }

    /// Row counts of every table for the home screen.
    pub fn dashboard(&self) -> RepoResult<DeskCounts> {
        self.read("dashboard", |conn| {
            let records = SqliteRecordRepository::new(conn);
            Ok(DeskCounts {
                members: records.count_rows(Table::Members)?,
                plans: records.count_rows(Table::MembershipPlans)?,
                memberships: records.count_rows(Table::MemberMemberships)?,
                trainers: records.count_rows(Table::Trainers)?,
                classes: records.count_rows(Table::Classes)?,
                bookings: records.count_rows(Table::ClassBookings)?,
            })
        })
    }

    pub fn list_members(&self) -> RepoResult<Vec<Member>> {
        self.read("list_members", |conn| {
            SqliteMemberRepository::new(conn).list_members()
        })
    }

    pub fn list_plans(&self) -> RepoResult<Vec<MembershipPlan>> {
        self.read("list_plans", |conn| SqlitePlanRepository::new(conn).list_plans())
    }

    pub fn list_memberships(&self) -> RepoResult<Vec<Membership>> {
        self.read("list_memberships", |conn| {
            SqliteMembershipRepository::new(conn).list_memberships()
        })
    }

    pub fn list_trainers(&self) -> RepoResult<Vec<Trainer>> {
        self.read("list_trainers", |conn| {
            SqliteTrainerRepository::new(conn).list_trainers()
        })
    }

    pub fn list_classes(&self) -> RepoResult<Vec<GymClass>> {
        self.read("list_classes", |conn| {
            SqliteClassRepository::new(conn).list_classes()
        })
    }

    pub fn list_bookings(&self) -> RepoResult<Vec<Booking>> {
        self.read("list_bookings", |conn| {
            SqliteBookingRepository::new(conn).list_bookings()
        })
    }

    /// Every row and column of `table`, ordered by id.
    pub fn view_table(&self, table: Table) -> RepoResult<TableView> {
        self.read("view_table", |conn| {
            SqliteRecordRepository::new(conn).select_all(table)
        })
    }

    /// Runs one of the fixed join reports.
    pub fn report(&self, kind: ReportKind) -> RepoResult<TableView> {
        self.read("report", |conn| {
            Ok(match kind {
                ReportKind::MemberMemberships => {
                    TableView::from_rows(&report::member_memberships(conn)?)
                }
                ReportKind::ClassSchedule => TableView::from_rows(&report::class_schedule(conn)?),
                ReportKind::MemberBookings => TableView::from_rows(&report::member_bookings(conn)?),
                ReportKind::TrainerWorkload => {
                    TableView::from_rows(&report::trainer_workload(conn)?)
                }
            })
        })
    }

    /// Runs the canned join for the selected tables.
    pub fn custom_join(&self, tables: &[Table]) -> RepoResult<TableView> {
        if tables.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        self.read("custom_join", |conn| report::custom_join(conn, tables))
    }

    fn update<F: FieldUpdate>(
        &self,
        action: &'static str,
        field: &F,
        apply: impl FnOnce(&Connection) -> RepoResult<()>,
    ) -> ActionOutcome {
        debug!(
            "event=field_update module=service table={} field={}",
            F::TABLE.sql_name(),
            field.name()
        );
        self.write(action, FailureStyle::Update(F::TABLE), |conn| {
            apply(conn)?;
            Ok(format!("{} updated successfully!", F::TABLE.entity()))
        })
    }

    fn write(
        &self,
        action: &'static str,
        style: FailureStyle,
        run: impl FnOnce(&Connection) -> RepoResult<String>,
    ) -> ActionOutcome {
        match self.read(action, run) {
            Ok(message) => ActionOutcome::success(message),
            Err(err) => ActionOutcome::failure(failure_message(&err, style)),
        }
    }

    fn read<T>(
        &self,
        action: &'static str,
        run: impl FnOnce(&Connection) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let started_at = Instant::now();
        let result = open_db(&self.db_path)
            .map_err(RepoError::from)
            .and_then(|conn| run(&conn));

        match &result {
            Ok(_) => info!(
                "event=desk_action module=service action={} status=ok duration_ms={}",
                action,
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=desk_action module=service action={} status=error duration_ms={} error={}",
                action,
                started_at.elapsed().as_millis(),
                single_line(&err.to_string(), MAX_LOGGED_ERROR_CHARS)
            ),
        }

        result
    }
}

fn failure_message(err: &RepoError, style: FailureStyle) -> String {
    match (err, style) {
        (RepoError::Validation(validation), _) => validation_message(validation),
        (RepoError::NotFound { .. }, FailureStyle::Delete) => "Record not found!".to_string(),
        (RepoError::NotFound { table, .. }, _) => format!("{} not found!", table.entity()),
        (RepoError::Constraint(violation), FailureStyle::Booking)
            if violation.is_unique_on(Table::ClassBookings) =>
        {
            DUPLICATE_BOOKING_MESSAGE.to_string()
        }
        (other, _) => format!("Error: {other}"),
    }
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField(field) => {
            format!("Please fill in all required fields! ({field})")
        }
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{failure_message, ActionOutcome, FailureStyle};
    use crate::model::table::Table;
    use crate::model::ValidationError;
    use crate::repo::{ConstraintKind, ConstraintViolation, RepoError};

    #[test]
    fn not_found_wording_depends_on_action() {
        let err = RepoError::NotFound {
            table: Table::Trainers,
            id: 42,
        };
        assert_eq!(failure_message(&err, FailureStyle::Delete), "Record not found!");
        assert_eq!(
            failure_message(&err, FailureStyle::Update(Table::Trainers)),
            "Trainer not found!"
        );
    }

    #[test]
    fn duplicate_booking_gets_dedicated_message() {
        let err = RepoError::Constraint(ConstraintViolation {
            kind: ConstraintKind::Unique,
            message: "UNIQUE constraint failed: Class_Bookings.Member_ID, Class_Bookings.Class_ID, Class_Bookings.Booking_Date".to_string(),
        });
        assert_eq!(
            failure_message(&err, FailureStyle::Booking),
            "Error: Member already has a booking for this class on this date"
        );
        assert!(failure_message(&err, FailureStyle::Insert).starts_with("Error: UNIQUE"));
    }

    #[test]
    fn outcome_serializes_as_envelope() {
        let outcome = ActionOutcome::success("Trainer added successfully!");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["message"], "Trainer added successfully!");
    }

    #[test]
    fn missing_field_asks_for_required_fields() {
        let err = RepoError::Validation(ValidationError::MissingField("email"));
        assert_eq!(
            failure_message(&err, FailureStyle::Insert),
            "Please fill in all required fields! (email)"
        );
    }
}
