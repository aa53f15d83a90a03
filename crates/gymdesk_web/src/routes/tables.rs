use super::{table_param, table_tabs};
use crate::error::WebResult;
use crate::render::{page, table as grid};
use crate::screens::Screen;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use gymdesk_core::Table;

pub(super) async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> WebResult<Html<String>> {
    let table = table_param(&slug)?;
    let view = state.run(move |desk| desk.view_table(table)).await??;

    let tabs = table_tabs("/tables", &Table::ALL, table);
    Ok(page(Screen::Tables, table.label(), &tabs, None, &grid(&view)))
}
