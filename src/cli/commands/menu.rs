//! Interactive menu: pick build or prune, then wait for Enter.

use super::{run_build, run_prune};
use crate::cli::console::Console;
use anyhow::Result;
use dltidy_core::builder::ErrorPolicy;
use dltidy_core::layout::FolderLayout;
use dltidy_core::prune::PruneMode;
use std::io::{BufRead, Write};
use std::path::Path;

const PROMPT: &str = "Choose an option:\n1. Create folder structure\n2. Delete empty folders\nEnter your choice (1 or 2): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Build,
    Prune,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => MenuChoice::Build,
            "2" => MenuChoice::Prune,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Show the prompt and read one line. End of input and bytes that are not
/// UTF-8 both count as an invalid choice.
pub fn read_choice<R: BufRead, O: Write>(input: &mut R, out: &mut O) -> Result<MenuChoice> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(MenuChoice::parse(&String::from_utf8_lossy(&line)))
}

fn wait_for_enter<R: BufRead, O: Write>(input: &mut R, out: &mut O) -> Result<()> {
    write!(out, "Press Enter to exit...")?;
    out.flush()?;
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(())
}

pub fn run_menu<R: BufRead, O: Write, E: Write>(
    input: &mut R,
    console: &mut Console<O, E>,
    base: &Path,
    layout: &FolderLayout,
    policy: ErrorPolicy,
    pause: bool,
) -> Result<MenuChoice> {
    let choice = read_choice(input, &mut console.out)?;
    tracing::debug!(?choice, "menu selection");
    match &choice {
        MenuChoice::Build => {
            run_build(console, base, layout, policy)?;
        }
        MenuChoice::Prune => {
            run_prune(console, base, PruneMode::Delete)?;
        }
        MenuChoice::Invalid(_) => writeln!(
            console.out,
            "Invalid option. Please run the program again and choose 1 or 2."
        )?,
    }
    if pause {
        wait_for_enter(input, &mut console.out)?;
    }
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_accepts_only_one_and_two() {
        assert_eq!(MenuChoice::parse("1\n"), MenuChoice::Build);
        assert_eq!(MenuChoice::parse(" 2 \r\n"), MenuChoice::Prune);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Invalid("3".into()));
        assert_eq!(MenuChoice::parse("12"), MenuChoice::Invalid("12".into()));
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn read_choice_prints_prompt() {
        let mut input = Cursor::new("2\n");
        let mut out = Vec::new();
        let choice = read_choice(&mut input, &mut out).unwrap();
        assert_eq!(choice, MenuChoice::Prune);
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn choice_one_builds_layout() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = Cursor::new("1\n\n");
        let mut console = Console::buffered();
        let layout = FolderLayout::standard();
        let choice = run_menu(
            &mut input,
            &mut console,
            dir.path(),
            &layout,
            ErrorPolicy::Continue,
            true,
        )
        .unwrap();

        assert_eq!(choice, MenuChoice::Build);
        assert!(dir.path().join("Hello").join("World").is_dir());
        assert!(console.out_str().ends_with("Press Enter to exit..."));
    }

    #[test]
    fn choice_two_prunes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("A")).unwrap();
        let mut input = Cursor::new("2\n");
        let mut console = Console::buffered();
        run_menu(
            &mut input,
            &mut console,
            dir.path(),
            &FolderLayout::standard(),
            ErrorPolicy::Continue,
            false,
        )
        .unwrap();

        assert!(!dir.path().join("A").exists());
        assert!(console.out_str().contains("Empty folder removal completed."));
    }

    #[test]
    fn invalid_choice_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("A")).unwrap();
        let mut input = Cursor::new("x\n");
        let mut console = Console::buffered();
        let choice = run_menu(
            &mut input,
            &mut console,
            dir.path(),
            &FolderLayout::standard(),
            ErrorPolicy::Continue,
            false,
        )
        .unwrap();

        assert_eq!(choice, MenuChoice::Invalid("x".into()));
        assert!(dir.path().join("A").is_dir());
        assert!(!dir.path().join("Hello").exists());
        assert!(console
            .out_str()
            .contains("Invalid option. Please run the program again and choose 1 or 2."));
    }

    #[test]
    fn end_of_input_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = Cursor::new("");
        let mut console = Console::buffered();
        let choice = run_menu(
            &mut input,
            &mut console,
            dir.path(),
            &FolderLayout::standard(),
            ErrorPolicy::Continue,
            true,
        )
        .unwrap();
        assert_eq!(choice, MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn non_utf8_input_is_an_invalid_choice() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = Cursor::new(vec![0xff, b'\n', 0xfe, b'\n']);
        let mut console = Console::buffered();
        let choice = run_menu(
            &mut input,
            &mut console,
            dir.path(),
            &FolderLayout::standard(),
            ErrorPolicy::Continue,
            true,
        )
        .unwrap();

        assert!(matches!(choice, MenuChoice::Invalid(_)));
        assert!(console
            .out_str()
            .contains("Invalid option. Please run the program again and choose 1 or 2."));
        assert!(!dir.path().join("Hello").exists());
    }
}
