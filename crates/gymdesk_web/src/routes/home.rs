use crate::error::WebResult;
use crate::render::{escape, metric, page, paragraph, subheading};
use crate::screens::{Screen, FEATURES};
use crate::AppState;
use axum::extract::State;
use axum::response::Html;

pub(super) async fn show(State(state): State<AppState>) -> WebResult<Html<String>> {
    let counts = state.run(|desk| desk.dashboard()).await??;

    let mut body = paragraph("Manage members, plans, trainers, classes and bookings from one desk.");
    body.push_str(&metric("Total Members", counts.members));
    body.push_str(&metric("Total Trainers", counts.trainers));
    body.push_str(&metric("Total Classes", counts.classes));
    body.push_str(&metric("Membership Plans", counts.plans));
    body.push_str(&metric("Class Bookings", counts.bookings));

    body.push_str(&subheading("Features"));
    body.push_str("<ul>");
    for feature in FEATURES {
        body.push_str(&format!("<li>{}</li>", escape(feature)));
    }
    body.push_str("</ul>");

    Ok(page(Screen::Home, "Welcome to Gym Management System", &[], None, &body))
}
