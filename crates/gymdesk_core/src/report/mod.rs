//! Read-only multi-table reports.
//!
//! # Responsibility
//! - Run the four fixed joins with their documented column sets and order.
//! - Resolve a user-chosen table set to a canned join (`custom`).
//!
//! # Invariants
//! - Reports never write.
//! - Row order is part of each report's contract and is set in SQL.

mod custom;
mod joins;

pub use custom::{custom_join, match_template, CustomJoinTemplate, CUSTOM_JOIN_TEMPLATES};
pub use joins::{
    class_schedule, member_bookings, member_memberships, trainer_workload, BookingDetailRow,
    ClassScheduleRow, MemberMembershipRow, TrainerWorkloadRow,
};

use serde::{Deserialize, Serialize};

/// The fixed reports offered by the reports screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    MemberMemberships,
    ClassSchedule,
    MemberBookings,
    TrainerWorkload,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::MemberMemberships,
        ReportKind::ClassSchedule,
        ReportKind::MemberBookings,
        ReportKind::TrainerWorkload,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::MemberMemberships => "Members with Membership Plans",
            Self::ClassSchedule => "Class Schedule with Trainers",
            Self::MemberBookings => "Member Class Bookings",
            Self::TrainerWorkload => "Trainer Workload",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::MemberMemberships => "memberships",
            Self::ClassSchedule => "schedule",
            Self::MemberBookings => "bookings",
            Self::TrainerWorkload => "workload",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}
