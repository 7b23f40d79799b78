//! Interactive line mode.
//!
//! Each line is `<verb> <noun> [args]`, mirroring the operation names the
//! store logs ("create card", "move card"). Boards are addressed by their
//! position in the board list, columns and cards by position on the active
//! board.

use crate::render;
use kanban_board::{Board, BoardId, BoardStore, CardId, CardPatch, Column, KanbanError, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  create board [title]             Create a board and select it
  select board <n>                 Select board n
  rename board <n> <title>         Rename board n
  delete board <n>                 Delete board n (confirm with delete!)
  create column <title>            Add a column to the active board
  rename column <c> <title>        Rename column c
  delete column <c>                Delete column c and its cards
  create card <c> <title> [| description]
                                   Add a card to column c
  rename card <c.k> <title>        Retitle card k of column c
  describe card <c.k> [text]       Set or clear a card description
  delete card <c.k>                Delete a card
  move card <c.k> <c> [position]   Move a card (default: end of column)
  show                             Print the active board
  boards                           List boards
  log                              Show recent activity
  help                             Show this help
  exit                             Quit
";

/// How many activity entries `log` prints
const ACTIVITY_ROWS: usize = 20;

/// Console behaviour switches
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    /// Run destructive commands without `!`
    pub yes: bool,
    /// Print state as JSON
    pub json: bool,
    /// Print a prompt before each line
    pub prompt: bool,
}

/// A card addressed as `column.card`, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef {
    pub column: usize,
    pub card: usize,
}

/// A store mutation with positional references still unresolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateBoard(Option<String>),
    SelectBoard(usize),
    RenameBoard(usize, String),
    DeleteBoard(usize),
    CreateColumn(String),
    RenameColumn(usize, String),
    DeleteColumn(usize),
    CreateCard {
        column: usize,
        title: String,
        description: Option<String>,
    },
    RenameCard(CardRef, String),
    DescribeCard(CardRef, Option<String>),
    DeleteCard(CardRef),
    MoveCard {
        card: CardRef,
        column: usize,
        position: Option<usize>,
    },
}

impl Action {
    /// Deletes need explicit confirmation
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Action::DeleteBoard(_) | Action::DeleteColumn(_) | Action::DeleteCard(_)
        )
    }
}

/// REPL command type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    Show,
    Boards,
    Activity,
    Action { action: Action, confirmed: bool },
}

/// Run the console until `exit` or end of input.
///
/// Command errors are reported on `out` and do not stop the loop; only I/O
/// failures end it early.
pub fn run_repl<R, W>(
    store: &mut BoardStore,
    input: R,
    out: &mut W,
    options: ReplOptions,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    show(store, out, options)?;

    let mut lines = input.lines();
    loop {
        if options.prompt {
            write!(out, "kanban> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_repl_command(line) {
            Ok(ReplCommand::Exit) => break,
            Ok(ReplCommand::Help) => write!(out, "{}", HELP)?,
            Ok(ReplCommand::Show) => show(store, out, options)?,
            Ok(ReplCommand::Boards) => write!(out, "{}", render::render_boards(store.state()))?,
            Ok(ReplCommand::Activity) => write!(
                out,
                "{}",
                render::render_activity(store.activity(), ACTIVITY_ROWS)
            )?,
            Ok(ReplCommand::Action { action, confirmed }) => {
                match execute(store, &action, confirmed || options.yes) {
                    Ok(true) => show(store, out, options)?,
                    Ok(false) => writeln!(out, "No change.")?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    Ok(())
}

fn show<W: Write>(store: &BoardStore, out: &mut W, options: ReplOptions) -> std::io::Result<()> {
    if options.json {
        match render::render_json(store.state()) {
            Ok(text) => write!(out, "{}", text),
            Err(e) => writeln!(out, "Error: {}", e),
        }
    } else {
        write!(out, "{}", render::render_active(store.state()))
    }
}

// =========================================================================
// Parsing
// =========================================================================

/// Parse a REPL command line.
///
/// A `!` on the verb (`delete! card 1.2`) confirms a destructive command.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = parts.split_first() else {
        return Err(KanbanError::parse("empty command"));
    };

    let (verb, confirmed) = match first.strip_suffix('!') {
        Some(verb) => (verb, true),
        None => (first, false),
    };

    match verb {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "show" => Ok(ReplCommand::Show),
        "boards" => Ok(ReplCommand::Boards),
        "log" | "activity" => Ok(ReplCommand::Activity),
        "create" | "select" | "rename" | "delete" | "describe" | "move" => {
            let Some((&noun, args)) = rest.split_first() else {
                return Err(KanbanError::parse(format!(
                    "{} what? Expected board, column or card",
                    verb
                )));
            };
            let action = parse_action(verb, noun, args)?;
            Ok(ReplCommand::Action { action, confirmed })
        }
        _ => Err(KanbanError::parse(format!(
            "unknown command: {}. Type 'help' for available commands.",
            verb
        ))),
    }
}

fn parse_action(verb: &str, noun: &str, args: &[&str]) -> Result<Action> {
    let usage = || KanbanError::parse(format!("usage: see `help` for `{} {}`", verb, noun));
    let arg = |i: usize| args.get(i).copied().ok_or_else(usage);

    let action = match (verb, noun) {
        ("create", "board") => {
            Action::CreateBoard((!args.is_empty()).then(|| args.join(" ")))
        }
        ("select", "board") => Action::SelectBoard(parse_position(arg(0)?, "board")?),
        ("rename", "board") => Action::RenameBoard(
            parse_position(arg(0)?, "board")?,
            parse_title(args.get(1..).unwrap_or_default())?,
        ),
        ("delete", "board") => Action::DeleteBoard(parse_position(arg(0)?, "board")?),

        ("create", "column") => Action::CreateColumn(parse_title(args)?),
        ("rename", "column") => Action::RenameColumn(
            parse_position(arg(0)?, "column")?,
            parse_title(args.get(1..).unwrap_or_default())?,
        ),
        ("delete", "column") => Action::DeleteColumn(parse_position(arg(0)?, "column")?),

        ("create", "card") => {
            let column = parse_position(arg(0)?, "column")?;
            let text = args.get(1..).unwrap_or_default().join(" ");
            let (title, description) = match text.split_once('|') {
                Some((title, description)) => (title, Some(description.trim())),
                None => (text.as_str(), None),
            };
            Action::CreateCard {
                column,
                title: parse_title(&[title])?,
                description: description.filter(|d| !d.is_empty()).map(String::from),
            }
        }
        ("rename", "card") => Action::RenameCard(
            parse_card_ref(arg(0)?)?,
            parse_title(args.get(1..).unwrap_or_default())?,
        ),
        ("describe", "card") => {
            let text = args.get(1..).unwrap_or_default().join(" ");
            Action::DescribeCard(
                parse_card_ref(arg(0)?)?,
                (!text.is_empty()).then_some(text),
            )
        }
        ("delete", "card") => Action::DeleteCard(parse_card_ref(arg(0)?)?),
        ("move", "card") => Action::MoveCard {
            card: parse_card_ref(arg(0)?)?,
            column: parse_position(arg(1)?, "column")?,
            position: args
                .get(2)
                .map(|p| parse_position(p, "position"))
                .transpose()?,
        },

        _ => {
            return Err(KanbanError::parse(format!(
                "unknown command: {} {}",
                verb, noun
            )))
        }
    };
    Ok(action)
}

/// Join words into a title, rejecting blank input
fn parse_title(words: &[&str]) -> Result<String> {
    let title = words.join(" ").trim().to_string();
    if title.is_empty() {
        return Err(KanbanError::invalid_value("title", "cannot be empty"));
    }
    Ok(title)
}

/// A 1-based position
fn parse_position(token: &str, what: &str) -> Result<usize> {
    let n: usize = token
        .parse()
        .map_err(|_| KanbanError::parse(format!("expected a {} number, got '{}'", what, token)))?;
    if n == 0 {
        return Err(KanbanError::invalid_value(what, "positions start at 1"));
    }
    Ok(n)
}

/// `column.card`, e.g. `2.3`
fn parse_card_ref(token: &str) -> Result<CardRef> {
    let (column, card) = token.split_once('.').ok_or_else(|| {
        KanbanError::parse(format!("expected column.card (e.g. 2.3), got '{}'", token))
    })?;
    Ok(CardRef {
        column: parse_position(column, "column")?,
        card: parse_position(card, "card")?,
    })
}

// =========================================================================
// Execution
// =========================================================================

/// Resolve positions against the store and apply the action.
///
/// Returns whether the store changed.
pub fn execute(store: &mut BoardStore, action: &Action, confirmed: bool) -> Result<bool> {
    if action.is_destructive() && !confirmed {
        return Err(KanbanError::invalid_value(
            "confirm",
            "deletes cannot be undone; repeat as `delete! ...` or start with --yes",
        ));
    }

    let changed = match action {
        Action::CreateBoard(title) => {
            let title = title.clone().unwrap_or_else(|| store.next_board_title());
            store.create_board(title);
            true
        }
        Action::SelectBoard(n) => {
            let id = board_at(store, *n)?;
            store.select_board(id)
        }
        Action::RenameBoard(n, title) => {
            let id = board_at(store, *n)?;
            store.rename_board(id, title.as_str())
        }
        Action::DeleteBoard(n) => {
            let id = board_at(store, *n)?;
            store.delete_board(id)
        }

        Action::CreateColumn(title) => {
            let board = active(store)?.id.clone();
            store.create_column(board, title.as_str()).is_some()
        }
        Action::RenameColumn(n, title) => {
            let id = column_at(active(store)?, *n)?.id.clone();
            store.rename_column(id, title.as_str())
        }
        Action::DeleteColumn(n) => {
            let id = column_at(active(store)?, *n)?.id.clone();
            store.delete_column(id)
        }

        Action::CreateCard {
            column,
            title,
            description,
        } => {
            let id = column_at(active(store)?, *column)?.id.clone();
            store
                .create_card(id, title.as_str(), description.clone())
                .is_some()
        }
        Action::RenameCard(card, title) => {
            let id = card_at(active(store)?, *card)?;
            store.update_card(id, CardPatch::new().with_title(title.as_str()))
        }
        Action::DescribeCard(card, description) => {
            let id = card_at(active(store)?, *card)?;
            let patch = match description {
                Some(text) => CardPatch::new().with_description(text.as_str()),
                None => CardPatch::new().clear_description(),
            };
            store.update_card(id, patch)
        }
        Action::DeleteCard(card) => {
            let id = card_at(active(store)?, *card)?;
            store.delete_card(id)
        }
        Action::MoveCard {
            card,
            column,
            position,
        } => {
            let board = active(store)?;
            let id = card_at(board, *card)?;
            let source = column_at(board, card.column)?.id.clone();
            let destination = column_at(board, *column)?.id.clone();
            let order = position.map_or(usize::MAX, |p| p.saturating_sub(1));
            store.move_card(id, source, destination, order)
        }
    };
    Ok(changed)
}

fn active(store: &BoardStore) -> Result<&Board> {
    store.active_board().ok_or_else(|| {
        KanbanError::invalid_value(
            "board",
            "no board selected; use `select board <n>` or `create board`",
        )
    })
}

fn out_of_range(what: &str, n: usize, len: usize) -> KanbanError {
    KanbanError::invalid_value(what, format!("no {} at position {} (have {})", what, n, len))
}

fn board_at(store: &BoardStore, n: usize) -> Result<BoardId> {
    let boards = store.boards();
    n.checked_sub(1)
        .and_then(|i| boards.get(i))
        .map(|board| board.id.clone())
        .ok_or_else(|| out_of_range("board", n, boards.len()))
}

fn column_at(board: &Board, n: usize) -> Result<&Column> {
    n.checked_sub(1)
        .and_then(|i| board.columns.get(i))
        .ok_or_else(|| out_of_range("column", n, board.columns.len()))
}

fn card_at(board: &Board, card: CardRef) -> Result<CardId> {
    let column = column_at(board, card.column)?;
    let cards = column.cards_in_display_order();
    card.card
        .checked_sub(1)
        .and_then(|i| cards.get(i))
        .map(|c| c.id.clone())
        .ok_or_else(|| out_of_range("card", card.card, cards.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(store: &mut BoardStore, script: &str, options: ReplOptions) -> String {
        let mut out = Vec::new();
        run_repl(store, Cursor::new(script), &mut out, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_meta_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("q").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("log").unwrap(), ReplCommand::Activity);
        assert!(parse_repl_command("dance").is_err());
    }

    #[test]
    fn test_parse_create_board_title_is_optional() {
        assert_eq!(
            parse_repl_command("create board").unwrap(),
            ReplCommand::Action {
                action: Action::CreateBoard(None),
                confirmed: false
            }
        );
        assert_eq!(
            parse_repl_command("create board Q3   Roadmap").unwrap(),
            ReplCommand::Action {
                action: Action::CreateBoard(Some("Q3 Roadmap".into())),
                confirmed: false
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_titles() {
        assert!(matches!(
            parse_repl_command("rename board 1"),
            Err(KanbanError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_repl_command("create column"),
            Err(KanbanError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_repl_command("create card 1 | only a description"),
            Err(KanbanError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_card_with_description() {
        let cmd = parse_repl_command("create card 2 Write docs | outline first").unwrap();
        assert_eq!(
            cmd,
            ReplCommand::Action {
                action: Action::CreateCard {
                    column: 2,
                    title: "Write docs".into(),
                    description: Some("outline first".into()),
                },
                confirmed: false
            }
        );
    }

    #[test]
    fn test_parse_card_refs_and_positions() {
        let cmd = parse_repl_command("move card 2.3 1 4").unwrap();
        assert_eq!(
            cmd,
            ReplCommand::Action {
                action: Action::MoveCard {
                    card: CardRef { column: 2, card: 3 },
                    column: 1,
                    position: Some(4),
                },
                confirmed: false
            }
        );
        assert!(parse_repl_command("move card 2 1").is_err());
        assert!(parse_repl_command("delete card 0.1").is_err());
        assert!(parse_repl_command("select board x").is_err());
    }

    #[test]
    fn test_parse_confirmation_suffix() {
        assert_eq!(
            parse_repl_command("delete! column 2").unwrap(),
            ReplCommand::Action {
                action: Action::DeleteColumn(2),
                confirmed: true
            }
        );
    }

    #[test]
    fn test_execute_requires_confirmation_for_deletes() {
        let mut store = BoardStore::with_sample_data();
        let result = execute(&mut store, &Action::DeleteBoard(1), false);
        assert!(result.is_err());
        assert_eq!(store.boards().len(), 1);

        assert!(execute(&mut store, &Action::DeleteBoard(1), true).unwrap());
        assert!(store.boards().is_empty());
    }

    #[test]
    fn test_execute_out_of_range_positions() {
        let mut store = BoardStore::with_sample_data();
        assert!(execute(&mut store, &Action::SelectBoard(2), false).is_err());
        assert!(execute(&mut store, &Action::RenameColumn(4, "X".into()), false).is_err());
        let card = CardRef { column: 1, card: 2 };
        assert!(execute(&mut store, &Action::RenameCard(card, "X".into()), false).is_err());
    }

    #[test]
    fn test_execute_create_board_uses_default_title() {
        let mut store = BoardStore::with_sample_data();
        execute(&mut store, &Action::CreateBoard(None), false).unwrap();
        assert_eq!(store.active_board().unwrap().title, "New Board 2");
    }

    #[test_log::test]
    fn test_scripted_session() {
        let mut store = BoardStore::new();
        let script = "\
create board Roadmap
create card 1 Write docs | outline first
create card 1 Ship
move card 1.2 3
delete card 1.1
delete! card 1.1
rename column 3 Shipped
boards
";
        let output = run_script(&mut store, script, ReplOptions::default());

        assert!(output.starts_with("No board selected.\n"));
        assert!(output.contains("  1.1 Write docs: outline first\n"));
        assert!(output.contains("Error: invalid value for confirm"));
        assert!(output.contains("[3] Shipped (1)\n  3.1 Ship\n"));
        assert!(output.contains("Roadmap"));

        let board = store.active_board().unwrap();
        assert_eq!(board.title, "Roadmap");
        assert!(board.columns[0].cards.is_empty());
        assert_eq!(board.columns[2].cards[0].title, "Ship");
    }

    #[test]
    fn test_scripted_session_stops_at_exit() {
        let mut store = BoardStore::new();
        let options = ReplOptions {
            yes: true,
            ..Default::default()
        };
        run_script(&mut store, "create board A\nexit\ncreate board B\n", options);
        assert_eq!(store.boards().len(), 1);
    }

    #[test]
    fn test_noop_reports_no_change() {
        let mut store = BoardStore::with_sample_data();
        let output = run_script(&mut store, "rename board 1 My First Board\n", ReplOptions::default());
        assert!(output.ends_with("No change.\n"));
        assert!(store.activity().is_empty());
    }
}
