//! shelfdb CLI
//!
//! Command-line interface for the catalog. One operation per
//! invocation: the catalog is loaded, the command runs, and mutating
//! commands persist before exiting.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use shelfdb::{Config, Library, Record, RecordPatch, SearchField};

/// shelfdb CLI
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(about = "Single-user book catalog manager")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./shelfdb_data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book
    Add {
        /// ISBN (unique key, up to 13 characters)
        isbn: String,

        /// Title
        title: String,

        /// Author
        author: String,

        /// Publication year
        year: i32,
    },

    /// List all books in title order
    List,

    /// Search the catalog
    Search {
        /// Search term (substring for title/author, exact for isbn)
        term: String,

        /// Field to search
        #[arg(short, long, value_enum, default_value_t = Field::Title)]
        field: Field,
    },

    /// Edit a book's fields (ISBN is immutable)
    Edit {
        /// ISBN of the book to edit
        isbn: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New publication year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Delete a book by ISBN
    Delete {
        /// ISBN of the book to delete
        isbn: String,
    },

    /// Export the catalog to CSV
    Export {
        /// Destination file (defaults to catalog.csv in the data dir)
        path: Option<PathBuf>,
    },

    /// Show catalog statistics
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Field {
    Isbn,
    Title,
    Author,
}

impl From<Field> for SearchField {
    fn from(field: Field) -> Self {
        match field {
            Field::Isbn => SearchField::Isbn,
            Field::Title => SearchField::Title,
            Field::Author => SearchField::Author,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shelfdb=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> shelfdb::Result<()> {
    let config = Config::builder().data_dir(&args.data_dir).build();
    let mut library = Library::open(config)?;

    match args.command {
        Commands::Add {
            isbn,
            title,
            author,
            year,
        } => {
            let idx = library.add(Record::new(isbn, title, author, year)?)?;
            println!("added at position {}", idx);
            library.close()?;
        }

        Commands::List => {
            if library.is_empty() {
                println!("catalog is empty");
            }
            for (idx, record) in library.list().iter().enumerate() {
                print_record(idx, record);
            }
        }

        Commands::Search { term, field } => {
            let matches = library.search(&term, field.into());
            if matches.is_empty() {
                println!("no matches");
            }
            for (idx, record) in matches.iter().enumerate() {
                print_record(idx, record);
            }
        }

        Commands::Edit {
            isbn,
            title,
            author,
            year,
        } => {
            let patch = RecordPatch {
                title,
                author,
                year,
            };
            library.edit(&isbn, patch)?;
            println!("updated {}", isbn);
            library.close()?;
        }

        Commands::Delete { isbn } => {
            library.delete(&isbn)?;
            println!("deleted {}", isbn);
            library.close()?;
        }

        Commands::Export { path } => {
            let written = library.export_csv(path.as_deref())?;
            println!("exported {} records to {}", library.len(), written.display());
        }

        Commands::Stats => {
            println!("total records: {}", library.len());
            let top = library.top_authors();
            if !top.is_empty() {
                println!("most frequent authors:");
                for entry in top {
                    println!(
                        "  - {} ({} book{})",
                        entry.author,
                        entry.count,
                        if entry.count == 1 { "" } else { "s" }
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_record(idx: usize, record: &Record) {
    println!(
        "[{:03}] ISBN:{} | '{}' - {} ({})",
        idx, record.isbn, record.title, record.author, record.year
    );
}
