//! Reports screen: the fixed joins and the custom join builder.

use super::{inline_validation, Fields};
use crate::error::{WebError, WebResult};
use crate::render::{checkbox, form, page, paragraph, subheading, table, Tab};
use crate::screens::{ReportTab, Screen};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use gymdesk_core::report::match_template;
use gymdesk_core::{ActionOutcome, ReportKind, Table};
use std::collections::HashMap;

pub(super) async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> WebResult<Html<String>> {
    match report_tab(&slug)? {
        ReportTab::Fixed(kind) => {
            let view = state.run(move |desk| desk.report(kind)).await??;
            let mut body = paragraph(report_description(kind));
            body.push_str(&table(&view));
            Ok(page(
                Screen::Reports,
                kind.title(),
                &tabs(ReportTab::Fixed(kind)),
                None,
                &body,
            ))
        }
        ReportTab::Custom => Ok(custom_page(&[], None, "")),
    }
}

/// Only the custom join accepts posts.
pub(super) async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(values): Form<HashMap<String, String>>,
) -> WebResult<Html<String>> {
    if report_tab(&slug)? != ReportTab::Custom {
        return Err(WebError::NotFound(slug));
    }

    let fields = Fields::new(values);
    let selected: Vec<Table> = Table::ALL
        .into_iter()
        .filter(|table| fields.is_checked(table.slug()))
        .collect();

    let query = selected.clone();
    let result = state.run(move |desk| desk.custom_join(&query)).await?;
    match inline_validation(result)? {
        Ok(view) => {
            let mut body = paragraph(&join_summary(&selected));
            body.push_str(&table(&view));
            Ok(custom_page(&selected, None, &body))
        }
        Err(err) => Ok(custom_page(&selected, Some(&ActionOutcome::rejected(&err)), "")),
    }
}

fn report_tab(slug: &str) -> WebResult<ReportTab> {
    ReportTab::from_slug(slug).ok_or_else(|| WebError::NotFound(slug.to_string()))
}

fn tabs(active: ReportTab) -> Vec<Tab> {
    ReportTab::ALL
        .iter()
        .map(|tab| Tab {
            href: format!("/reports/{}", tab.slug()),
            label: tab.label(),
            active: *tab == active,
        })
        .collect()
}

fn report_description(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::MemberMemberships => "Every membership record with its member and plan.",
        ReportKind::ClassSchedule => "Weekly classes from Monday to Sunday with their trainers.",
        ReportKind::MemberBookings => "Bookings with member, class and trainer, newest first.",
        ReportKind::TrainerWorkload => "Classes taught per trainer, including trainers with none.",
    }
}

fn join_summary(selected: &[Table]) -> String {
    match (match_template(selected), selected.first()) {
        (Some(template), _) => format!("Join: {}", template.name),
        (None, Some(first)) => format!(
            "No predefined join for this combination. Showing all {}.",
            first.label()
        ),
        (None, None) => String::new(),
    }
}

/// Table picker followed by `results`.
fn custom_page(selected: &[Table], outcome: Option<&ActionOutcome>, results: &str) -> Html<String> {
    let boxes: Vec<String> = Table::ALL
        .iter()
        .map(|table| checkbox(table.slug(), table.label(), selected.contains(table)))
        .collect();

    let mut body = paragraph("Select the tables to join.");
    body.push_str(&form("/reports/custom", &boxes, "Execute JOIN"));
    if !results.is_empty() {
        body.push_str(&subheading("Results"));
        body.push_str(results);
    }
    page(
        Screen::Reports,
        ReportTab::Custom.label(),
        &tabs(ReportTab::Custom),
        outcome,
        &body,
    )
}
