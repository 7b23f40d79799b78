//! Text rendering of store state

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use kanban_board::{ActivityLog, Board, BoardState};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render one board as columns of numbered cards.
///
/// Card numbers are `column.card`, 1-based, in display order.
pub fn render_board(board: &Board) -> String {
    let mut out = format!("== {} ==\n", board.title);
    if board.columns.is_empty() {
        out.push_str("  (no columns)\n");
    }
    for (c, column) in board.columns.iter().enumerate() {
        out.push_str(&format!(
            "[{}] {} ({})\n",
            c + 1,
            column.title,
            column.cards.len()
        ));
        for (k, card) in column.cards_in_display_order().into_iter().enumerate() {
            out.push_str(&format!("  {}.{} {}", c + 1, k + 1, card.title));
            if let Some(description) = &card.description {
                out.push_str(&format!(": {}", description));
            }
            out.push('\n');
        }
    }
    out
}

/// Render the active board, or a hint when none is selected
pub fn render_active(state: &BoardState) -> String {
    match state.active_board() {
        Some(board) => render_board(board),
        None => "No board selected.\n".to_string(),
    }
}

/// Render the board list with column and card counts; `*` marks the active
/// board.
pub fn render_boards(state: &BoardState) -> String {
    if state.boards().is_empty() {
        return "No boards yet.\n".to_string();
    }

    let mut table = new_table();
    table.set_header(vec!["#", "", "Board", "Columns", "Cards"]);
    for (index, summary) in state.summaries().iter().enumerate() {
        let marker = if state.active_board_id() == Some(&summary.id) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            (index + 1).to_string(),
            marker.to_string(),
            summary.title.clone(),
            summary.column_count.to_string(),
            summary.card_count.to_string(),
        ]);
    }
    format!("{}\n", table)
}

/// Render the most recent activity entries, newest first
pub fn render_activity(log: &ActivityLog, limit: usize) -> String {
    if log.is_empty() {
        return "No activity.\n".to_string();
    }

    let mut table = new_table();
    table.set_header(vec!["Time", "Operation", "Actor", "Took (us)"]);
    for entry in log.entries().take(limit) {
        table.add_row(vec![
            entry.timestamp.format("%H:%M:%S").to_string(),
            entry.op.clone(),
            entry.actor.clone().unwrap_or_default(),
            entry.duration_us.to_string(),
        ]);
    }
    format!("{}\n", table)
}

/// Pretty JSON view of the whole state
pub fn render_json(state: &BoardState) -> kanban_board::Result<String> {
    let value = state.to_value()?;
    Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
}
