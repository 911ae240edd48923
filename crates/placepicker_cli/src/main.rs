//! Interactive terminal host for the place picker.
//!
//! # Responsibility
//! - Resolve configuration from flags and `PLACEPICKER_*` variables.
//! - Forward line commands to the core controller and redraw after each.

mod text_surface;

use clap::Parser;
use log::error;
use placepicker_core::{
    init_logging, Catalog, DialogResponse, FixedPosition, GeolocationProvider, NoGeolocation,
    PickerConfig, PlacePicker, Position, SqliteStorage,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use text_surface::TextSurface;

/// Pick places to visit, nearest first.
#[derive(Debug, Parser)]
#[command(name = "placepicker", version)]
struct Cli {
    /// SQLite file holding the selection (overrides PLACEPICKER_DB_PATH).
    #[arg(long)]
    db: Option<PathBuf>,
    /// JSON catalog replacing the bundled places (overrides PLACEPICKER_CATALOG).
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Current latitude in degrees.
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Current longitude in degrees.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// trace|debug|info|warn|error (overrides PLACEPICKER_LOG_LEVEL).
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling logs (overrides PLACEPICKER_LOG_DIR).
    #[arg(long)]
    log_dir: Option<String>,
}

const HELP: &str = "commands: list | pick <id> | remove <id> | yes | no | esc | help | quit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Pick(String),
    Remove(String),
    Answer(DialogResponse),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?;
    let arg = parts.next().map(str::to_string);
    if parts.next().is_some() {
        return None;
    }
    match (verb.to_ascii_lowercase().as_str(), arg) {
        ("list" | "ls", None) => Some(Command::List),
        ("pick" | "select", Some(id)) => Some(Command::Pick(id)),
        ("remove" | "rm", Some(id)) => Some(Command::Remove(id)),
        ("yes" | "y", None) => Some(Command::Answer(DialogResponse::Confirm)),
        ("no" | "n", None) => Some(Command::Answer(DialogResponse::Cancel)),
        ("esc", None) => Some(Command::Answer(DialogResponse::Dismiss)),
        ("help" | "?", None) => Some(Command::Help),
        ("quit" | "exit" | "q", None) => Some(Command::Quit),
        _ => None,
    }
}

fn resolve_config(cli: &Cli) -> PickerConfig {
    let mut config = PickerConfig::from_env();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    config
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    if let Some(dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let catalog = match &config.catalog_path {
        Some(path) => match Catalog::from_json_file(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("failed to load catalog `{}`: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::builtin(),
    };

    let storage = match SqliteStorage::open(&config.db_path) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("failed to open `{}`: {err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut picker = PlacePicker::new(catalog, storage);
    let mut geolocation: Box<dyn GeolocationProvider> = match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => Box::new(FixedPosition(Position::new(lat, lon))),
        _ => Box::new(NoGeolocation),
    };
    picker.mount(geolocation.as_mut());

    match run(&mut picker, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={}", err);
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    picker: &mut PlacePicker<SqliteStorage>,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut surface = TextSurface::new();
    picker.render(&mut surface);
    write!(output, "{}\n{HELP}\n> ", surface.take())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        let result = match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) | None => {
                writeln!(output, "{HELP}")?;
                Ok(())
            }
            Some(Command::List) => Ok(()),
            Some(Command::Pick(_) | Command::Remove(_)) if picker.dialog_state().is_open() => {
                writeln!(output, "answer the open dialog first (yes | no | esc)")?;
                Ok(())
            }
            Some(Command::Pick(id)) => picker.select_place(&id),
            Some(Command::Remove(id)) => {
                if picker.picked_view().activate(&id, |_| {}) {
                    picker.start_remove(&id);
                } else {
                    writeln!(output, "`{id}` is not in your list")?;
                }
                Ok(())
            }
            Some(Command::Answer(response)) => picker.respond(response),
        };
        if let Err(err) = result {
            writeln!(output, "storage error: {err}")?;
        }

        picker.render(&mut surface);
        write!(output, "{}\n> ", surface.take())?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run, Command};
    use placepicker_core::{Catalog, DialogResponse, PlacePicker, SqliteStorage};

    #[test]
    fn parses_commands_with_aliases() {
        assert_eq!(parse_command("pick p3"), Some(Command::Pick("p3".to_string())));
        assert_eq!(parse_command("RM p3"), Some(Command::Remove("p3".to_string())));
        assert_eq!(
            parse_command("esc"),
            Some(Command::Answer(DialogResponse::Dismiss))
        );
        assert_eq!(parse_command("pick"), None);
        assert_eq!(parse_command("yes please"), None);
        assert_eq!(parse_command("pick p3 extra"), None);
        assert_eq!(parse_command("remove p3 now"), None);
    }

    #[test]
    fn yes_without_open_dialog_keeps_place() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let mut picker = PlacePicker::new(Catalog::builtin(), storage);
        let mut out = Vec::new();

        let script = "pick p2\nremove p2\nno\nyes\n";
        run(&mut picker, script.as_bytes(), &mut out).unwrap();

        assert_eq!(picker.picked_places()[0].id, "p2");
        assert!(!picker.dialog_state().is_open());
    }

    #[test]
    fn open_dialog_blocks_pick_and_remove() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let mut picker = PlacePicker::new(Catalog::builtin(), storage);
        let mut out = Vec::new();

        let script = "pick p2\nremove p2\npick p3\nremove p1\n";
        run(&mut picker, script.as_bytes(), &mut out).unwrap();

        let ids: Vec<_> = picker
            .picked_places()
            .iter()
            .map(|place| place.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p2"]);
        assert_eq!(picker.pending_removal(), Some("p2"));
        assert!(String::from_utf8(out).unwrap().contains("answer the open dialog first"));
    }

    #[test]
    fn session_picks_and_removes_with_confirmation() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let mut picker = PlacePicker::new(Catalog::builtin(), storage);
        let script = "pick p2\npick p7\nremove p2\nno\nremove p2\nyes\nquit\n";
        let mut out = Vec::new();

        run(&mut picker, script.as_bytes(), &mut out).unwrap();

        let ids: Vec<_> = picker
            .picked_places()
            .iter()
            .map(|place| place.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p7"]);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Are you sure?"));
    }

    #[test]
    fn removing_unpicked_place_does_not_open_dialog() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        let mut picker = PlacePicker::new(Catalog::builtin(), storage);
        let mut out = Vec::new();

        run(&mut picker, "remove p1\n".as_bytes(), &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("`p1` is not in your list"));
        assert!(!picker.dialog_state().is_open());
    }
}
