use crate::model::table::Table;
use crate::model::ValidationError;
use crate::repo::RepoResult;
use crate::view::TableView;
use rusqlite::Connection;

/// A canned join offered for one exact set of tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomJoinTemplate {
    pub name: &'static str,
    /// Selected tables that pick this template, in `Table::ALL` order.
    pub tables: &'static [Table],
    pub sql: &'static str,
}

/// Every table set with a dedicated join. Any other selection falls back to
/// the first selected table on its own.
pub const CUSTOM_JOIN_TEMPLATES: &[CustomJoinTemplate] = &[
    CustomJoinTemplate {
        name: "Members with Memberships",
        tables: &[Table::Members, Table::MemberMemberships],
        sql: "SELECT m.*, mm.Membership_Record_ID, mm.Plan_ID, mm.Start_Date, mm.End_Date,
                     mm.Payment_Status, mm.Is_Active
              FROM Members m
              JOIN Member_Memberships mm ON m.Member_ID = mm.Member_ID
              ORDER BY m.Member_ID, mm.Membership_Record_ID;",
    },
    CustomJoinTemplate {
        name: "Members with Membership Plans",
        tables: &[Table::Members, Table::MembershipPlans, Table::MemberMemberships],
        sql: "SELECT m.Member_ID, m.First_Name, m.Last_Name, m.Email, mp.Plan_Name,
                     mp.Duration_Months, mp.Price, mm.Start_Date, mm.End_Date, mm.Payment_Status
              FROM Members m
              JOIN Member_Memberships mm ON m.Member_ID = mm.Member_ID
              JOIN Membership_Plans mp ON mm.Plan_ID = mp.Plan_ID
              ORDER BY m.Member_ID, mm.Membership_Record_ID;",
    },
    CustomJoinTemplate {
        name: "Classes with Trainers",
        tables: &[Table::Trainers, Table::Classes],
        sql: "SELECT c.*, t.First_Name AS Trainer_First_Name, t.Last_Name AS Trainer_Last_Name,
                     t.Specialization
              FROM Classes c
              JOIN Trainers t ON c.Trainer_ID = t.Trainer_ID
              ORDER BY c.Class_ID;",
    },
    CustomJoinTemplate {
        name: "Members with Bookings",
        tables: &[Table::Members, Table::ClassBookings],
        sql: "SELECT m.Member_ID, m.First_Name, m.Last_Name, cb.Booking_ID, cb.Class_ID,
                     cb.Booking_Date, cb.Attendance_Status
              FROM Members m
              JOIN Class_Bookings cb ON m.Member_ID = cb.Member_ID
              ORDER BY m.Member_ID, cb.Booking_ID;",
    },
    CustomJoinTemplate {
        name: "Members, Bookings and Classes",
        tables: &[Table::Members, Table::Classes, Table::ClassBookings],
        sql: "SELECT m.Member_ID, m.First_Name, m.Last_Name, c.Class_Name, c.Class_Type,
                     c.Schedule_Day, c.Schedule_Time, cb.Booking_Date, cb.Attendance_Status
              FROM Class_Bookings cb
              JOIN Members m ON cb.Member_ID = m.Member_ID
              JOIN Classes c ON cb.Class_ID = c.Class_ID
              ORDER BY cb.Booking_Date DESC, m.Last_Name;",
    },
    CustomJoinTemplate {
        name: "Bookings with Classes and Trainers",
        tables: &[Table::Members, Table::Trainers, Table::Classes, Table::ClassBookings],
        sql: "SELECT m.First_Name || ' ' || m.Last_Name AS Member_Name, c.Class_Name,
                     t.First_Name || ' ' || t.Last_Name AS Trainer_Name, c.Schedule_Day,
                     c.Schedule_Time, cb.Booking_Date, cb.Attendance_Status
              FROM Class_Bookings cb
              JOIN Members m ON cb.Member_ID = m.Member_ID
              JOIN Classes c ON cb.Class_ID = c.Class_ID
              JOIN Trainers t ON c.Trainer_ID = t.Trainer_ID
              ORDER BY cb.Booking_Date DESC, m.Last_Name;",
    },
];

/// Finds the template whose table set equals `selected`, ignoring order and
/// duplicates.
pub fn match_template(selected: &[Table]) -> Option<&'static CustomJoinTemplate> {
    let mut wanted = selected.to_vec();
    wanted.sort();
    wanted.dedup();

    CUSTOM_JOIN_TEMPLATES.iter().find(|template| {
        let mut tables = template.tables.to_vec();
        tables.sort();
        tables == wanted
    })
}

/// Runs the template matching `selected`, or `SELECT *` on the first
/// selected table when no template matches.
///
/// # Errors
/// - `EmptySelection` when `selected` is empty.
pub fn custom_join(conn: &Connection, selected: &[Table]) -> RepoResult<TableView> {
    let Some(first) = selected.first() else {
        return Err(ValidationError::EmptySelection.into());
    };

    let sql = match match_template(selected) {
        Some(template) => template.sql.to_string(),
        None => format!("SELECT * FROM {};", first.sql_name()),
    };

    let mut stmt = conn.prepare(&sql)?;
    Ok(TableView::from_statement(&mut stmt, [])?)
}

#[cfg(test)]
mod tests {
    use super::{match_template, CUSTOM_JOIN_TEMPLATES};
    use crate::model::table::Table;

    #[test]
    fn template_table_sets_are_distinct() {
        for (index, template) in CUSTOM_JOIN_TEMPLATES.iter().enumerate() {
            let found = match_template(template.tables).unwrap();
            assert_eq!(found.name, CUSTOM_JOIN_TEMPLATES[index].name);
        }
    }

    #[test]
    fn match_ignores_selection_order() {
        let found = match_template(&[Table::Classes, Table::Trainers]).unwrap();
        assert_eq!(found.name, "Classes with Trainers");
        assert!(match_template(&[Table::Trainers]).is_none());
    }
}
