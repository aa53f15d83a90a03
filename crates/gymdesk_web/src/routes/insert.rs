//! Insert screen: one form per entity, each followed by the current rows.

use super::{today, Fields};
use crate::error::{WebError, WebResult};
use crate::render::{
    form, input, page, select, select_labels, subheading, table, text_input, textarea, Tab,
};
use crate::screens::{InsertTab, Screen};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use gymdesk_core::model::booking::NewBooking;
use gymdesk_core::model::class::{NewClass, CLASS_TYPES};
use gymdesk_core::model::field::{
    optional_text, parse_choice, parse_date, parse_decimal, parse_integer, parse_time,
    required_text,
};
use gymdesk_core::model::member::{NewMember, NewMemberWithPlan};
use gymdesk_core::model::membership::NewMembership;
use gymdesk_core::model::plan::NewPlan;
use gymdesk_core::model::status::{AttendanceStatus, ClassDay, MemberStatus, PaymentStatus};
use gymdesk_core::model::trainer::{NewTrainer, SPECIALIZATIONS};
use gymdesk_core::{ActionOutcome, GymDesk, RepoResult, Table, TableView, ValidationError};
use std::collections::HashMap;

const ACTIVE_CHOICES: &[&str] = &["1", "0"];

/// `(value, text)` dropdown options loaded from the database.
struct Choices {
    members: Vec<(String, String)>,
    plans: Vec<(String, String)>,
    trainers: Vec<(String, String)>,
    classes: Vec<(String, String)>,
}

fn load_choices(desk: &GymDesk) -> RepoResult<Choices> {
    Ok(Choices {
        members: desk
            .list_members()?
            .into_iter()
            .map(|member| (member.id.to_string(), format!("{} - {}", member.id, member.full_name())))
            .collect(),
        plans: desk
            .list_plans()?
            .into_iter()
            .map(|plan| {
                let text = format!(
                    "{} ({} months, ${:.2})",
                    plan.plan_name, plan.duration_months, plan.price
                );
                (plan.id.to_string(), text)
            })
            .collect(),
        trainers: desk
            .list_trainers()?
            .into_iter()
            .map(|trainer| {
                let text = format!("{} - {}", trainer.full_name(), trainer.specialization);
                (trainer.id.to_string(), text)
            })
            .collect(),
        classes: desk
            .list_classes()?
            .into_iter()
            .map(|class| (class.id.to_string(), class.slot_label()))
            .collect(),
    })
}

pub(super) async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> WebResult<Html<String>> {
    let tab = insert_tab(&slug)?;
    render(&state, tab, None).await
}

pub(super) async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(values): Form<HashMap<String, String>>,
) -> WebResult<Html<String>> {
    let tab = insert_tab(&slug)?;
    let fields = Fields::new(values);
    let outcome = state.run(move |desk| apply(desk, tab, &fields)).await?;
    render(&state, tab, Some(outcome)).await
}

fn insert_tab(slug: &str) -> WebResult<InsertTab> {
    InsertTab::from_slug(slug).ok_or_else(|| WebError::NotFound(slug.to_string()))
}

/// Table listed under the form of `tab`.
fn listed_table(tab: InsertTab) -> Table {
    match tab {
        InsertTab::Member | InsertTab::MemberWithPlan => Table::Members,
        InsertTab::Plan => Table::MembershipPlans,
        InsertTab::Membership => Table::MemberMemberships,
        InsertTab::Trainer => Table::Trainers,
        InsertTab::Class => Table::Classes,
        InsertTab::Booking => Table::ClassBookings,
    }
}

async fn render(
    state: &AppState,
    tab: InsertTab,
    outcome: Option<ActionOutcome>,
) -> WebResult<Html<String>> {
    let (choices, current) = state
        .run(move |desk: &GymDesk| -> RepoResult<(Choices, TableView)> {
            Ok((load_choices(desk)?, desk.view_table(listed_table(tab))?))
        })
        .await??;

    let tabs: Vec<Tab> = InsertTab::ALL
        .iter()
        .map(|entry| Tab {
            href: format!("/insert/{}", entry.slug()),
            label: entry.label(),
            active: *entry == tab,
        })
        .collect();

    let mut body = form(
        &format!("/insert/{}", tab.slug()),
        &form_fields(tab, &choices, &today()),
        submit_label(tab),
    );
    body.push_str(&subheading(&format!("Current {}", listed_table(tab).label())));
    body.push_str(&table(&current));

    let heading = format!("Add {}", tab.label());
    Ok(page(Screen::Insert, &heading, &tabs, outcome.as_ref(), &body))
}

fn submit_label(tab: InsertTab) -> &'static str {
    match tab {
        InsertTab::Member => "Add Member",
        InsertTab::MemberWithPlan => "Add Member with Plan",
        InsertTab::Plan => "Add Plan",
        InsertTab::Membership => "Assign Membership",
        InsertTab::Trainer => "Add Trainer",
        InsertTab::Class => "Add Class",
        InsertTab::Booking => "Book Class",
    }
}

fn member_inputs(today: &str) -> Vec<String> {
    vec![
        text_input("first_name", "First Name*"),
        text_input("last_name", "Last Name*"),
        input("email", "email", "Email*", ""),
        text_input("phone", "Phone*"),
        input("date", "date_of_birth", "Date of Birth*", ""),
        input("date", "join_date", "Join Date*", today),
        select_labels("status", "Status", MemberStatus::LABELS),
    ]
}

fn form_fields(tab: InsertTab, choices: &Choices, today: &str) -> Vec<String> {
    match tab {
        InsertTab::Member => member_inputs(today),
        InsertTab::MemberWithPlan => {
            let mut fields = member_inputs(today);
            fields.push(select("plan_id", "Membership Plan*", &choices.plans));
            fields.push(select_labels("payment_status", "Payment Status", PaymentStatus::LABELS));
            fields
        }
        InsertTab::Plan => vec![
            text_input("plan_name", "Plan Name*"),
            input("number", "duration_months", "Duration (Months)*", "1"),
            input("number", "price", "Price*", "0.00"),
            textarea("benefits", "Benefits Description"),
        ],
        InsertTab::Membership => vec![
            select("member_id", "Member*", &choices.members),
            select("plan_id", "Membership Plan*", &choices.plans),
            input("date", "start_date", "Start Date*", today),
            input("date", "end_date", "End Date*", today),
            select_labels("payment_status", "Payment Status", PaymentStatus::LABELS),
            select(
                "is_active",
                "Active",
                &[
                    ("1".to_string(), "Yes".to_string()),
                    ("0".to_string(), "No".to_string()),
                ],
            ),
        ],
        InsertTab::Trainer => vec![
            text_input("first_name", "First Name*"),
            text_input("last_name", "Last Name*"),
            select_labels("specialization", "Specialization*", SPECIALIZATIONS),
            input("email", "email", "Email*", ""),
            text_input("phone", "Phone*"),
            input("date", "hire_date", "Hire Date*", today),
        ],
        InsertTab::Class => vec![
            text_input("class_name", "Class Name*"),
            select_labels("class_type", "Class Type*", CLASS_TYPES),
            select("trainer_id", "Trainer*", &choices.trainers),
            select_labels("schedule_day", "Day*", ClassDay::LABELS),
            input("time", "schedule_time", "Time*", "09:00"),
            input("number", "duration_minutes", "Duration (Minutes)*", "60"),
            input("number", "max_capacity", "Max Capacity*", "20"),
        ],
        InsertTab::Booking => vec![
            select("member_id", "Member*", &choices.members),
            select("class_id", "Class*", &choices.classes),
            input("date", "booking_date", "Booking Date*", today),
            select_labels(
                "attendance_status",
                "Attendance Status",
                AttendanceStatus::LABELS,
            ),
        ],
    }
}

/// Parses the posted form for `tab` and runs the matching insert.
fn apply(desk: &GymDesk, tab: InsertTab, fields: &Fields) -> ActionOutcome {
    let outcome = match tab {
        InsertTab::Member => new_member(fields).map(|member| desk.insert_member(&member)),
        InsertTab::MemberWithPlan => {
            new_member_with_plan(fields).map(|input| desk.insert_member_with_plan(&input))
        }
        InsertTab::Plan => new_plan(fields).map(|plan| desk.insert_plan(&plan)),
        InsertTab::Membership => {
            new_membership(fields).map(|membership| desk.insert_membership(&membership))
        }
        InsertTab::Trainer => new_trainer(fields).map(|trainer| desk.insert_trainer(&trainer)),
        InsertTab::Class => new_class(fields).map(|class| desk.insert_class(&class)),
        InsertTab::Booking => new_booking(fields).map(|booking| desk.insert_booking(&booking)),
    };
    outcome.unwrap_or_else(|err| ActionOutcome::rejected(&err))
}

fn new_member(fields: &Fields) -> Result<NewMember, ValidationError> {
    Ok(NewMember {
        first_name: required_text("first_name", fields.text("first_name"))?,
        last_name: required_text("last_name", fields.text("last_name"))?,
        email: required_text("email", fields.text("email"))?,
        phone: required_text("phone", fields.text("phone"))?,
        date_of_birth: parse_date("date_of_birth", fields.text("date_of_birth"))?,
        join_date: parse_date("join_date", fields.text("join_date"))?,
        status: parse_choice(
            "status",
            fields.text("status"),
            MemberStatus::LABELS,
            MemberStatus::parse,
        )?,
    })
}

fn new_member_with_plan(fields: &Fields) -> Result<NewMemberWithPlan, ValidationError> {
    Ok(NewMemberWithPlan {
        member: new_member(fields)?,
        plan_id: parse_integer("plan_id", fields.text("plan_id"))?,
        payment_status: payment_status(fields)?,
    })
}

fn new_plan(fields: &Fields) -> Result<NewPlan, ValidationError> {
    Ok(NewPlan {
        plan_name: required_text("plan_name", fields.text("plan_name"))?,
        duration_months: parse_integer("duration_months", fields.text("duration_months"))?,
        price: parse_decimal("price", fields.text("price"))?,
        benefits: optional_text(fields.text("benefits")),
    })
}

fn new_membership(fields: &Fields) -> Result<NewMembership, ValidationError> {
    Ok(NewMembership {
        member_id: parse_integer("member_id", fields.text("member_id"))?,
        plan_id: parse_integer("plan_id", fields.text("plan_id"))?,
        start_date: parse_date("start_date", fields.text("start_date"))?,
        end_date: parse_date("end_date", fields.text("end_date"))?,
        payment_status: payment_status(fields)?,
        is_active: parse_choice("is_active", fields.text("is_active"), ACTIVE_CHOICES, |v| {
            match v {
                "1" => Some(true),
                "0" => Some(false),
                _ => None,
            }
        })?,
    })
}

fn new_trainer(fields: &Fields) -> Result<NewTrainer, ValidationError> {
    Ok(NewTrainer {
        first_name: required_text("first_name", fields.text("first_name"))?,
        last_name: required_text("last_name", fields.text("last_name"))?,
        specialization: required_text("specialization", fields.text("specialization"))?,
        email: required_text("email", fields.text("email"))?,
        phone: required_text("phone", fields.text("phone"))?,
        hire_date: parse_date("hire_date", fields.text("hire_date"))?,
    })
}

fn new_class(fields: &Fields) -> Result<NewClass, ValidationError> {
    Ok(NewClass {
        class_name: required_text("class_name", fields.text("class_name"))?,
        class_type: required_text("class_type", fields.text("class_type"))?,
        trainer_id: parse_integer("trainer_id", fields.text("trainer_id"))?,
        schedule_day: parse_choice(
            "schedule_day",
            fields.text("schedule_day"),
            ClassDay::LABELS,
            ClassDay::parse,
        )?,
        schedule_time: parse_time("schedule_time", fields.text("schedule_time"))?,
        duration_minutes: parse_integer("duration_minutes", fields.text("duration_minutes"))?,
        max_capacity: parse_integer("max_capacity", fields.text("max_capacity"))?,
    })
}

fn new_booking(fields: &Fields) -> Result<NewBooking, ValidationError> {
    Ok(NewBooking {
        member_id: parse_integer("member_id", fields.text("member_id"))?,
        class_id: parse_integer("class_id", fields.text("class_id"))?,
        booking_date: parse_date("booking_date", fields.text("booking_date"))?,
        attendance_status: parse_choice(
            "attendance_status",
            fields.text("attendance_status"),
            AttendanceStatus::LABELS,
            AttendanceStatus::parse,
        )?,
    })
}

fn payment_status(fields: &Fields) -> Result<PaymentStatus, ValidationError> {
    parse_choice(
        "payment_status",
        fields.text("payment_status"),
        PaymentStatus::LABELS,
        PaymentStatus::parse,
    )
}

#[cfg(test)]
mod tests {
    use super::{new_booking, new_member, new_membership};
    use crate::routes::Fields;
    use gymdesk_core::model::status::AttendanceStatus;
    use gymdesk_core::ValidationError;
    use std::collections::HashMap;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        Fields::new(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn member_form_reports_first_missing_field() {
        let err = new_member(&fields(&[("first_name", "Ann"), ("last_name", " ")])).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("last_name"));
    }

    #[test]
    fn booking_form_parses_hyphenated_status() {
        let booking = new_booking(&fields(&[
            ("member_id", "3"),
            ("class_id", "2"),
            ("booking_date", "2024-11-04"),
            ("attendance_status", "No-Show"),
        ]))
        .unwrap();
        assert_eq!(booking.attendance_status, AttendanceStatus::NoShow);
        assert_eq!(booking.member_id, 3);
    }

    #[test]
    fn membership_form_rejects_unknown_active_flag() {
        let err = new_membership(&fields(&[
            ("member_id", "1"),
            ("plan_id", "1"),
            ("start_date", "2024-01-01"),
            ("end_date", "2024-02-01"),
            ("payment_status", "Paid"),
            ("is_active", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidValue {
                field: "is_active",
                ..
            }
        ));
    }
}
