//! HTML rendering for the desk screens.
//!
//! # Invariants
//! - Every piece of data or user text passes through [`escape`] before it is
//!   written into markup.

use crate::screens::Screen;
use axum::response::Html;
use gymdesk_core::{ActionOutcome, TableView};
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
nav{width:13rem;min-height:100vh;background:#1f2937;padding:1rem}\
nav a{display:block;color:#e5e7eb;padding:.4rem;text-decoration:none}\
nav a.active{background:#374151;border-radius:4px}\
main{flex:1;padding:1.5rem}\
.tabs a{margin-right:.8rem}.tabs a.active{font-weight:bold}\
.flash{padding:.6rem;border-radius:4px;margin:1rem 0}\
.ok{background:#dcfce7}.error{background:#fee2e2}\
table{border-collapse:collapse;margin:1rem 0}td,th{border:1px solid #ccc;padding:.3rem .5rem}\
label{display:block;margin:.4rem 0}.metric{display:inline-block;margin-right:2rem}";

/// One tab link.
pub struct Tab {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

/// Escapes text for element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Full page: sidebar, heading, optional tabs and banner, then `body`.
pub fn page(
    screen: Screen,
    heading: &str,
    tabs: &[Tab],
    outcome: Option<&ActionOutcome>,
    body: &str,
) -> Html<String> {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{} - Gym Management</title><style>{}</style></head><body>",
        escape(heading),
        STYLE
    );

    html.push_str("<nav>");
    for entry in Screen::ALL {
        let class = if entry == screen { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<a href=\"{}\"{}>{}</a>",
            entry.href(),
            class,
            escape(entry.label())
        );
    }
    html.push_str("</nav><main><h1>Fitness &amp; Gym Membership Management System</h1>");
    let _ = write!(html, "<h2>{}</h2>", escape(heading));

    if !tabs.is_empty() {
        html.push_str(&tab_bar(tabs));
    }
    if let Some(outcome) = outcome {
        html.push_str(&flash(outcome));
    }
    html.push_str(body);
    html.push_str("</main></body></html>");

    Html(html)
}

pub fn tab_bar(tabs: &[Tab]) -> String {
    let mut html = String::from("<div class=\"tabs\">");
    for tab in tabs {
        let class = if tab.active { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<a href=\"{}\"{}>{}</a>",
            escape(&tab.href),
            class,
            escape(tab.label)
        );
    }
    html.push_str("</div>");
    html
}

/// Success or error banner.
pub fn flash(outcome: &ActionOutcome) -> String {
    let class = if outcome.ok { "ok" } else { "error" };
    format!(
        "<div class=\"flash {}\" role=\"status\">{}</div>",
        class,
        escape(&outcome.message)
    )
}

pub fn error_banner(message: &str) -> String {
    format!("<div class=\"flash error\" role=\"status\">{}</div>", escape(message))
}

pub fn subheading(text: &str) -> String {
    format!("<h3>{}</h3>", escape(text))
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape(text))
}

/// Renders a result grid with its row count.
pub fn table(view: &TableView) -> String {
    let mut html = String::from("<table><thead><tr>");
    for column in &view.columns {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &view.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>");
    }
    let _ = write!(
        html,
        "</tbody></table><p class=\"count\">Total records: {}</p>",
        view.len()
    );
    html
}

pub fn metric(label: &str, value: u64) -> String {
    format!(
        "<div class=\"metric\"><div>{}</div><strong>{}</strong></div>",
        escape(label),
        value
    )
}

pub fn input(kind: &str, name: &str, label: &str, value: &str) -> String {
    format!(
        "<label>{} <input type=\"{}\" name=\"{}\" value=\"{}\"></label>",
        escape(label),
        kind,
        escape(name),
        escape(value)
    )
}

pub fn text_input(name: &str, label: &str) -> String {
    input("text", name, label, "")
}

pub fn textarea(name: &str, label: &str) -> String {
    format!(
        "<label>{} <textarea name=\"{}\"></textarea></label>",
        escape(label),
        escape(name)
    )
}

/// Dropdown of `(value, text)` pairs.
pub fn select(name: &str, label: &str, options: &[(String, String)]) -> String {
    let mut html = format!("<label>{} <select name=\"{}\">", escape(label), escape(name));
    for (value, text) in options {
        let _ = write!(
            html,
            "<option value=\"{}\">{}</option>",
            escape(value),
            escape(text)
        );
    }
    html.push_str("</select></label>");
    html
}

/// Dropdown whose values equal their labels.
pub fn select_labels(name: &str, label: &str, labels: &[&str]) -> String {
    let options: Vec<(String, String)> = labels
        .iter()
        .map(|value| (value.to_string(), value.to_string()))
        .collect();
    select(name, label, &options)
}

pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{}\" value=\"on\"{}> {}</label>",
        escape(name),
        if checked { " checked" } else { "" },
        escape(label)
    )
}

/// POST form wrapping pre-rendered fields.
pub fn form(action: &str, fields: &[String], submit: &str) -> String {
    let mut html = format!("<form method=\"post\" action=\"{}\">", escape(action));
    for field in fields {
        html.push_str(field);
    }
    let _ = write!(
        html,
        "<button type=\"submit\">{}</button></form>",
        escape(submit)
    );
    html
}

#[cfg(test)]
mod tests {
    use super::{escape, flash, table};
    use gymdesk_core::{ActionOutcome, TableView};

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn table_escapes_cells_and_counts_rows() {
        let view = TableView {
            columns: vec!["Name".to_string()],
            rows: vec![vec!["<script>".to_string()], vec!["Ann".to_string()]],
        };
        let html = table(&view);
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("Total records: 2"));
    }

    #[test]
    fn flash_marks_failures() {
        let outcome = ActionOutcome {
            ok: false,
            message: "Record not found!".to_string(),
        };
        assert!(flash(&outcome).contains("flash error"));
    }
}
