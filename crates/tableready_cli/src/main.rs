//! CLI entry point for the Table-Ready core.
//!
//! # Responsibility
//! - Exercise the core crate against a state database from the command line.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage:
//!   tableready_cli <state.db>                  seed if missing, print summary
//!   tableready_cli <state.db> export <file>    write pretty JSON export
//!   tableready_cli <state.db> import <file>    replace state from a JSON file
//!   tableready_cli <state.db> print            dump the rendered print queue

use std::process::ExitCode;
use tableready_core::store::state_store::StateStore;
use tableready_core::{
    core_version, db, export_to_file, render_queue, SqliteStateStore, StateService,
};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(db_path) = args.first() else {
        return Err(format!(
            "usage: tableready_cli <state.db> [export <file> | import <file> | print] (v{})",
            core_version()
        ));
    };

    let conn = db::open_db(db_path).map_err(|err| err.to_string())?;
    let store = SqliteStateStore::try_new(&conn).map_err(|err| err.to_string())?;

    match args.get(1).map(String::as_str) {
        None => {
            let service = StateService::open(store).map_err(|err| err.to_string())?;
            print_summary(service.current());
            Ok(())
        }
        Some("export") => {
            let path = args
                .get(2)
                .ok_or_else(|| "export requires a target file".to_string())?;
            let state = store.initialize_if_missing().map_err(|err| err.to_string())?;
            export_to_file(&state, path).map_err(|err| err.to_string())?;
            println!("exported state to {path}");
            Ok(())
        }
        Some("import") => {
            let path = args
                .get(2)
                .ok_or_else(|| "import requires a source file".to_string())?;
            let contents = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
            let state = store.import_json(&contents).map_err(|err| err.to_string())?;
            print_summary(&state);
            Ok(())
        }
        Some("print") => {
            let state = store.initialize_if_missing().map_err(|err| err.to_string())?;
            print!("{}", render_queue(&state));
            Ok(())
        }
        Some(other) => Err(format!("unknown command `{other}`")),
    }
}

fn print_summary(state: &tableready_core::AppState) {
    println!(
        "{}: {} campaign(s), {} session(s), {} creature(s), {} item(s), {} queued card(s)",
        state.settings.app_name,
        state.campaigns.len(),
        state.sessions.len(),
        state.creatures.len(),
        state.items.len(),
        state.print_queue.len()
    );
}
