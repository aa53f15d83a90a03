//! Closed enumeration of the six gym tables.

use serde::{Deserialize, Serialize};

/// One of the six persisted gym tables.
///
/// Every SQL identifier built at runtime comes from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Members,
    MembershipPlans,
    MemberMemberships,
    Trainers,
    Classes,
    ClassBookings,
}

impl Table {
    /// Menu order used by the UI and by the custom join selector.
    pub const ALL: [Table; 6] = [
        Table::Members,
        Table::MembershipPlans,
        Table::MemberMemberships,
        Table::Trainers,
        Table::Classes,
        Table::ClassBookings,
    ];

    pub fn sql_name(self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::MembershipPlans => "Membership_Plans",
            Self::MemberMemberships => "Member_Memberships",
            Self::Trainers => "Trainers",
            Self::Classes => "Classes",
            Self::ClassBookings => "Class_Bookings",
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            Self::Members => "Member_ID",
            Self::MembershipPlans => "Plan_ID",
            Self::MemberMemberships => "Membership_Record_ID",
            Self::Trainers => "Trainer_ID",
            Self::Classes => "Class_ID",
            Self::ClassBookings => "Booking_ID",
        }
    }

    /// Plural display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::MembershipPlans => "Membership Plans",
            Self::MemberMemberships => "Member Memberships",
            Self::Trainers => "Trainers",
            Self::Classes => "Classes",
            Self::ClassBookings => "Class Bookings",
        }
    }

    /// Singular entity name used in feedback messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Members => "Member",
            Self::MembershipPlans => "Membership plan",
            Self::MemberMemberships => "Membership",
            Self::Trainers => "Trainer",
            Self::Classes => "Class",
            Self::ClassBookings => "Booking",
        }
    }

    /// URL path segment.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::MembershipPlans => "plans",
            Self::MemberMemberships => "memberships",
            Self::Trainers => "trainers",
            Self::Classes => "classes",
            Self::ClassBookings => "bookings",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|table| table.slug() == slug)
    }
}
