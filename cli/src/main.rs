use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::debug;
use thiserror::Error;

use db::models::Reference;
use db::{Composer, DbError, SqliteComposer, Store, StoreConfig, DEFAULT_DATABASE_PATH};

/// CLI for looking up Bible verses
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the Bible database (defaults to $BIBLES_DB_PATH, then bibles.db)
    #[arg(long)]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available translations
    Translations,

    /// List the books of the Bible
    Books {
        /// Only books of this testament (OT or NT)
        #[arg(long)]
        testament: Option<String>,
    },

    /// Print a passage, e.g. `read KJV "John 3:16-18"`
    Read {
        /// Translation abbreviation
        translation: String,
        /// The Bible reference to look up
        reference: String,
    },

    /// Search verse text
    Search {
        /// Text to look for (at least three characters)
        query: String,
        #[arg(long)]
        translation: Option<String>,
        #[arg(long)]
        testament: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Db(#[from] DbError),

    #[error("Could not write the output: {0}")]
    Output(#[from] io::Error),
}

/// Runs `command` against `store`, writing plain text to `out`.
///
/// The connection is released before anything is written.
fn run(command: Command, store: &Store, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Translations => {
            let translations = store.with_connection(SqliteComposer::translations)?;
            for t in translations {
                writeln!(out, "{:<6} {} ({})", t.abbreviation, t.name, t.language)?;
            }
        }
        Command::Books { testament } => {
            let books =
                store.with_connection(|conn| SqliteComposer::books(testament.as_deref(), conn))?;
            for b in books {
                writeln!(out, "{:>3} {} [{}]", b.id, b.name, b.testament)?;
            }
        }
        Command::Read {
            translation,
            reference,
        } => {
            let reference: Reference = reference.parse()?;
            let verses = store.with_connection(|conn| {
                SqliteComposer::verses(
                    &translation,
                    &reference.book,
                    reference.chapter,
                    reference.range,
                    conn,
                )
            })?;
            writeln!(out, "{} ({})", reference, translation.to_uppercase())?;
            for v in verses {
                writeln!(out, "{} {}", v.verse, v.text)?;
            }
        }
        Command::Search {
            query,
            translation,
            testament,
            limit,
        } => {
            let verses = store.with_connection(|conn| {
                SqliteComposer::search(
                    &query,
                    translation.as_deref(),
                    testament.as_deref(),
                    limit,
                    conn,
                )
            })?;
            for v in verses {
                writeln!(
                    out,
                    "{} {}:{} ({}) {}",
                    v.book_name, v.chapter, v.verse, v.translation_abbreviation, v.text
                )?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let path = args
        .db
        .or_else(|| env::var("BIBLES_DB_PATH").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
    debug!("Reading from {}", path);
    let store = Store::new(StoreConfig::new(path));

    match run(args.command, &store, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
