//! Line-driven search session.
//!
//! Plain lines replace the query text; lines starting with `:` are events.

use citysuggest_core::{CommitSource, Direction, Panel, RecentStore, SearchSession};
use std::io::{self, BufRead, Write};

pub const HELP: &str = "\
:down / :up      move the highlight
:enter           pick the highlighted city, or the typed text
:submit          pick the typed text as-is
:pick <label>    pick a label directly
:esc             hide suggestions
:focus           show suggestions again (or recent picks)
:clear-recent    forget recent picks
:quit            leave";

/// Feed `input` lines into `session`, writing the dropdown after each one.
pub fn run<S, R, W>(session: &mut SearchSession<'_, S>, input: R, out: &mut W) -> io::Result<()>
where
    S: RecentStore,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let Some(command) = line.strip_prefix(':') else {
            session.on_query_change(&line);
            render(session, out)?;
            continue;
        };

        let (name, arg) = command
            .split_once(' ')
            .map_or((command, ""), |(n, a)| (n, a.trim()));
        let selection = match name {
            "down" => {
                session.on_navigate(Direction::Down);
                None
            }
            "up" => {
                session.on_navigate(Direction::Up);
                None
            }
            "enter" => session.on_commit(CommitSource::Enter),
            "submit" => session.on_commit(CommitSource::RawText),
            "pick" => session.on_commit(CommitSource::Explicit(arg.to_string())),
            "esc" => {
                session.on_dismiss();
                None
            }
            "focus" => {
                session.on_focus();
                None
            }
            "clear-recent" => {
                session.clear_recent();
                None
            }
            "help" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            "quit" | "q" => break,
            other => {
                writeln!(out, "unknown command :{other} (try :help)")?;
                continue;
            }
        };

        if let Some(selection) = selection {
            writeln!(out, "selected: {}", selection.display_name)?;
        }
        render(session, out)?;
    }
    Ok(())
}

/// Print the current dropdown.
pub fn render<S: RecentStore, W: Write>(session: &SearchSession<'_, S>, out: &mut W) -> io::Result<()> {
    match session.panel() {
        Panel::Hidden => writeln!(out, "  (closed)"),
        Panel::Suggestions(items) => {
            for (i, label) in items.iter().enumerate() {
                let marker = if session.highlighted() == Some(i) { '>' } else { ' ' };
                writeln!(out, "{marker} {label}")?;
            }
            Ok(())
        }
        Panel::Recent(items) => {
            writeln!(out, "  recent:")?;
            for label in items {
                writeln!(out, "    {label}")?;
            }
            Ok(())
        }
        Panel::NoMatches { query } => writeln!(
            out,
            "  no cities match \"{query}\"; :enter searches for it anyway"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citysuggest_core::MemoryStore;
    use std::io::Cursor;

    fn drive(script: &str) -> (String, SearchSession<'static, MemoryStore>) {
        let mut session = SearchSession::builtin(MemoryStore::new());
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn typing_and_picking() {
        let (out, session) = drive("mad\n:down\n:enter\n");
        assert!(out.contains("> Madrid, España"));
        assert!(out.contains("selected: Madrid"));
        assert_eq!(session.recent().as_slice(), ["Madrid, España"]);
    }

    #[test]
    fn no_match_then_submit() {
        let (out, session) = drive("Atlantis\n:submit\n");
        assert!(out.contains("no cities match \"Atlantis\""));
        assert!(out.contains("selected: Atlantis"));
        assert_eq!(session.recent().as_slice(), ["Atlantis"]);
    }

    #[test]
    fn focus_shows_recent_when_blank() {
        let (out, _) = drive(":pick Lima, Perú\n:focus\n");
        assert!(out.contains("selected: Lima"));
        assert!(out.contains("recent:\n    Lima, Perú"));
    }

    #[test]
    fn quit_stops_reading() {
        let (_, session) = drive(":quit\n:pick Lima, Perú\n");
        assert!(session.recent().is_empty());
    }

    #[test]
    fn unknown_command_is_reported() {
        let (out, _) = drive(":fly\n");
        assert!(out.contains("unknown command :fly"));
    }
}
