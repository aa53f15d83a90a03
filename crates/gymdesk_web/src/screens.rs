//! Screen and tab state of the desk UI.
//!
//! # Invariants
//! - Every screen and tab is a closed enum; unknown URL segments map to
//!   `None` and are answered with 404.
//! - Each screen keeps its own tab set.

use gymdesk_core::{ReportKind, Table};

/// Sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Insert,
    Delete,
    Update,
    Reports,
    Tables,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Insert,
        Screen::Delete,
        Screen::Update,
        Screen::Reports,
        Screen::Tables,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Insert => "Insert Data",
            Self::Delete => "Delete Data",
            Self::Update => "Update Data",
            Self::Reports => "JOIN Queries",
            Self::Tables => "View Tables",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Insert => "/insert",
            Self::Delete => "/delete",
            Self::Update => "/update",
            Self::Reports => "/reports",
            Self::Tables => "/tables",
        }
    }
}

/// Insert screen tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertTab {
    Member,
    MemberWithPlan,
    Plan,
    Membership,
    Trainer,
    Class,
    Booking,
}

impl InsertTab {
    pub const ALL: [InsertTab; 7] = [
        InsertTab::Member,
        InsertTab::MemberWithPlan,
        InsertTab::Plan,
        InsertTab::Membership,
        InsertTab::Trainer,
        InsertTab::Class,
        InsertTab::Booking,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::MemberWithPlan => "member-plan",
            Self::Plan => "plan",
            Self::Membership => "membership",
            Self::Trainer => "trainer",
            Self::Class => "class",
            Self::Booking => "booking",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::MemberWithPlan => "Member + Plan",
            Self::Plan => "Membership Plan",
            Self::Membership => "Membership",
            Self::Trainer => "Trainer",
            Self::Class => "Class",
            Self::Booking => "Booking",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

/// Delete screen tab order.
pub const DELETE_TABS: [Table; 6] = [
    Table::Members,
    Table::Trainers,
    Table::Classes,
    Table::ClassBookings,
    Table::MembershipPlans,
    Table::MemberMemberships,
];

/// Reports screen tabs: the fixed joins plus the custom join builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Fixed(ReportKind),
    Custom,
}

impl ReportTab {
    pub const ALL: [ReportTab; 5] = [
        ReportTab::Fixed(ReportKind::MemberMemberships),
        ReportTab::Fixed(ReportKind::ClassSchedule),
        ReportTab::Fixed(ReportKind::MemberBookings),
        ReportTab::Fixed(ReportKind::TrainerWorkload),
        ReportTab::Custom,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Fixed(kind) => kind.slug(),
            Self::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fixed(kind) => kind.title(),
            Self::Custom => "Custom JOIN",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

/// Feature list on the home screen.
pub const FEATURES: &[&str] = &[
    "Member Management",
    "Membership Plans",
    "Trainer Management",
    "Class Scheduling",
    "Class Booking System",
    "Comprehensive Reporting",
];
