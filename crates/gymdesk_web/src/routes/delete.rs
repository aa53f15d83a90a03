use super::{table_param, table_tabs, Fields};
use crate::error::WebResult;
use crate::render::{form, input, page, paragraph, subheading, table as grid};
use crate::screens::{Screen, DELETE_TABS};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use gymdesk_core::model::field::parse_integer;
use gymdesk_core::{ActionOutcome, Table};
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
    let outcome = match parse_integer("id", fields.text("id")) {
        Ok(id) => state.run(move |desk| desk.delete(table, id)).await?,
        Err(err) => ActionOutcome::rejected(&err),
    };
    render(&state, table, Some(outcome)).await
}

async fn render(
    state: &AppState,
    table: Table,
    outcome: Option<ActionOutcome>,
) -> WebResult<Html<String>> {
    let current = state.run(move |desk| desk.view_table(table)).await??;

    let mut body = subheading(&format!("Current {}", table.label()));
    body.push_str(&grid(&current));
    body.push_str(&paragraph(delete_note(table)));
    body.push_str(&form(
        &format!("/delete/{}", table.slug()),
        &[input("number", "id", &format!("{} to delete", table.id_column()), "")],
        &format!("Delete {}", table.entity()),
    ));

    let tabs = table_tabs("/delete", &DELETE_TABS, table);
    let heading = format!("Delete {}", table.entity());
    Ok(page(Screen::Delete, &heading, &tabs, outcome.as_ref(), &body))
}

/// What else disappears or blocks the delete.
fn delete_note(table: Table) -> &'static str {
    match table {
        Table::Members => "Deleting a member also removes their memberships and bookings.",
        Table::Trainers => "A trainer who still teaches classes cannot be deleted.",
        Table::Classes => "Deleting a class also removes its bookings.",
        Table::MembershipPlans => "A plan that is still assigned to members cannot be deleted.",
        Table::ClassBookings | Table::MemberMemberships => "This removes a single record.",
    }
}
