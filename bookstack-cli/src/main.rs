//! Bookstack console application.
//!
//! Members log in to borrow and return books; administrators manage the
//! catalog and the membership. Both registries are loaded best-effort at
//! startup and saved when the user exits.
//!
//! Usage:
//!   bookstack --format yaml
//!   bookstack --format json --books-file books.json --members-file persons.json

use anyhow::Result;
use bookstack_cli::menu::App;
use bookstack_persist::{JsonFile, Store, YamlFile};
use bookstack_registry::{BookRecord, BookRegistry, MemberRegistry};
use bookstack_types::Person;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bookstack")]
#[command(about = "Personal library management console")]
struct Args {
    /// Snapshot encoding for both registries
    #[arg(long, value_enum, default_value = "yaml")]
    format: Format,

    /// Path to the book catalog snapshot
    #[arg(long, default_value = "books.yaml")]
    books_file: PathBuf,

    /// Path to the member registry snapshot
    #[arg(long, default_value = "persons.yaml")]
    members_file: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Block-structured, human-readable snapshots
    Yaml,
    /// Tree-structured snapshots
    Json,
}

impl Format {
    fn book_store(self, path: &Path) -> Box<dyn Store<BookRecord>> {
        match self {
            Self::Yaml => Box::new(YamlFile::new(path)),
            Self::Json => Box::new(JsonFile::new(path)),
        }
    }

    fn person_store(self, path: &Path) -> Box<dyn Store<Person>> {
        match self {
            Self::Yaml => Box::new(YamlFile::new(path)),
            Self::Json => Box::new(JsonFile::new(path)),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!(
        format = ?args.format,
        books = %args.books_file.display(),
        members = %args.members_file.display(),
        "Bookstack starting"
    );

    let books = BookRegistry::open(args.format.book_store(&args.books_file));
    let members = MemberRegistry::open(args.format.person_store(&args.members_file));

    let mut app = App::new(books, members);
    app.load();
    app.run()
}
