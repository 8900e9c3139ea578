//! History command: list stored exchanges, newest first.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use confidant_core::chat::history::HistoryService;
use confidant_infra::sqlite::exchange::SqliteExchangeRepository;
use confidant_types::exchange::ExchangeSummary;

use crate::state::open_database;

const PREVIEW_CHARS: usize = 60;

/// Print stored exchanges as a table, or as the same JSON `GET /chats/` returns.
///
/// No provider credential is needed. Opening the database creates it, with
/// the schema, when it does not exist yet.
pub async fn show_history(database_url: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let pool = open_database(database_url).await?;
    let history = HistoryService::new(SqliteExchangeRepository::new(pool));

    let mut chats = history.list_all().await?;
    if let Some(limit) = limit {
        chats.truncate(limit);
    }

    if json {
        let body = serde_json::json!({ "chats": chats });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if chats.is_empty() {
        println!();
        println!(
            "  {} No conversations yet. Start one with: {}",
            style("i").blue().bold(),
            style("confidant chat \"<message>\"").yellow()
        );
        println!();
        return Ok(());
    }

    println!();
    println!("{}", render_table(&chats));
    println!();

    Ok(())
}

fn render_table(chats: &[ExchangeSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("You").fg(Color::White),
        Cell::new("Reply").fg(Color::White),
    ]);

    for chat in chats {
        table.add_row(vec![
            Cell::new(chat.id).fg(Color::DarkGrey),
            Cell::new(preview(&chat.user_message)).fg(Color::Cyan),
            Cell::new(preview(&chat.ai_response)),
        ]);
    }

    table
}

/// Single-line preview, cut on a char boundary.
fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use confidant_types::exchange::ExchangeId;

    use super::*;

    #[test]
    fn test_preview_keeps_short_text() {
        assert_eq!(preview("hello there"), "hello there");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(100);
        let out = preview(&long);
        assert_eq!(out.chars().count(), PREVIEW_CHARS);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_render_table_lists_every_exchange() {
        let chats = vec![
            ExchangeSummary {
                id: ExchangeId(2),
                user_message: "second".to_string(),
                ai_response: "reply two".to_string(),
            },
            ExchangeSummary {
                id: ExchangeId(1),
                user_message: "first".to_string(),
                ai_response: "reply one".to_string(),
            },
        ];

        let rendered = render_table(&chats).to_string();
        assert!(rendered.contains("second"));
        assert!(rendered.contains("reply one"));
    }

    #[tokio::test]
    async fn test_show_history_on_fresh_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("h.db").display());

        show_history(&url, Some(10), true).await.unwrap();
    }
}
