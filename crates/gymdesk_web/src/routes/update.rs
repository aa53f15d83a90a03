//! Update screen: single-column edits and clear-field actions per table.

use super::{table_param, table_tabs, Fields};
use crate::error::WebResult;
use crate::render::{form, input, page, select, subheading, table as grid, text_input};
use crate::screens::Screen;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use gymdesk_core::model::booking::BookingField;
use gymdesk_core::model::class::ClassField;
use gymdesk_core::model::field::parse_integer;
use gymdesk_core::model::member::MemberField;
use gymdesk_core::model::membership::MembershipField;
use gymdesk_core::model::plan::PlanField;
use gymdesk_core::model::trainer::TrainerField;
use gymdesk_core::{ActionOutcome, ClearField, FieldSpec, FieldUpdate, Table, ValidationError};
use std::collections::HashMap;

pub(super) async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> WebResult<Html<String>> {
    let table = table_param(&slug)?;
    render(&state, table, None).await
}

pub(super) async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(values): Form<HashMap<String, String>>,
) -> WebResult<Html<String>> {
    let table = table_param(&slug)?;
    let fields = Fields::new(values);
    let id = parse_integer("id", fields.text("id"));
    let outcome = match id {
        Ok(id) => {
            state
                .run(move |desk| {
                    desk.update_by_name(table, id, fields.text("field"), fields.text("value"))
                })
                .await?
        }
        Err(err) => ActionOutcome::rejected(&err),
    };
    render(&state, table, Some(outcome)).await
}

pub(super) async fn clear(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(values): Form<HashMap<String, String>>,
) -> WebResult<Html<String>> {
    let table = table_param(&slug)?;
    let fields = Fields::new(values);
    let parsed = parse_integer("id", fields.text("id"))
        .and_then(|id| clear_target(table, fields.text("field")).map(|field| (id, field)));

    let outcome = match parsed {
        Ok((id, field)) => state.run(move |desk| desk.clear_field(field, id)).await?,
        Err(err) => ActionOutcome::rejected(&err),
    };
    render(&state, table, Some(outcome)).await
}

/// Resolves a clear-field name, accepting only fields of `table`.
fn clear_target(table: Table, name: &str) -> Result<ClearField, ValidationError> {
    ClearField::parse(name.trim())
        .filter(|field| field.table() == table)
        .ok_or_else(|| ValidationError::UnknownField(name.trim().to_string()))
}

fn field_specs(table: Table) -> &'static [FieldSpec] {
    match table {
        Table::Members => MemberField::SPECS,
        Table::MembershipPlans => PlanField::SPECS,
        Table::MemberMemberships => MembershipField::SPECS,
        Table::Trainers => TrainerField::SPECS,
        Table::Classes => ClassField::SPECS,
        Table::ClassBookings => BookingField::SPECS,
    }
}

async fn render(
    state: &AppState,
    table: Table,
    outcome: Option<ActionOutcome>,
) -> WebResult<Html<String>> {
    let current = state.run(move |desk| desk.view_table(table)).await??;
    let id_label = format!("{} to update", table.id_column());

    let field_options: Vec<(String, String)> = field_specs(table)
        .iter()
        .map(|spec| (spec.name.to_string(), format!("{} ({})", spec.label, spec.hint)))
        .collect();

    let mut body = subheading(&format!("Current {}", table.label()));
    body.push_str(&grid(&current));
    body.push_str(&form(
        &format!("/update/{}", table.slug()),
        &[
            input("number", "id", &id_label, ""),
            select("field", "Field to update", &field_options),
            text_input("value", "New value"),
        ],
        &format!("Update {}", table.entity()),
    ));

    let clearable = ClearField::for_table(table);
    if !clearable.is_empty() {
        let clear_options: Vec<(String, String)> = clearable
            .iter()
            .map(|field| {
                let text = format!("{} (reset to \"{}\")", field.label(), field.placeholder());
                (field.name().to_string(), text)
            })
            .collect();
        body.push_str(&subheading("Clear a field"));
        body.push_str(&form(
            &format!("/update/{}/clear", table.slug()),
            &[
                input("number", "id", &id_label, ""),
                select("field", "Field to clear", &clear_options),
            ],
            "Clear Field",
        ));
    }

    let tabs = table_tabs("/update", &Table::ALL, table);
    let heading = format!("Update {}", table.entity());
    Ok(page(Screen::Update, &heading, &tabs, outcome.as_ref(), &body))
}
