//! Command-line interface for atomkit.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::document::{entry_to_string, parse, parse_entry, parse_unsafe, to_string};
use crate::error::{AtomError, Result};
use crate::types::{Entry, Feed};
use crate::xml::{parse_document, Element};

/// Atomkit - strict Atom (RFC 4287) parsing, validation and serialization.
#[derive(Parser)]
#[command(name = "atomkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strictly parse a feed or entry document and report the result.
    Validate {
        /// Atom document to read
        file: PathBuf,
    },

    /// Print the dispatched facts without validating them.
    Facts {
        /// Atom document to read
        file: PathBuf,
    },

    /// Parse a document and write it back in normalized form.
    Normalize {
        /// Atom document to read
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a document and dump the model as YAML.
    Dump {
        /// Atom document to read
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// A parsed feed or standalone entry document.
#[derive(Debug)]
enum Document {
    Feed(Feed),
    Entry(Entry),
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => validate_command(&file),
        Commands::Facts { file } => facts_command(&file),
        Commands::Normalize { file, output } => normalize_command(&file, output.as_deref()),
        Commands::Dump { file, output } => dump_command(&file, output.as_deref()),
    }
}

fn read_root(file: &Path) -> Result<Element> {
    let xml = fs::read_to_string(file)?;
    parse_document(&xml)
}

/// Strictly parse a file, as an entry document when its root is `atom:entry`.
fn read_document(file: &Path) -> Result<Document> {
    let root = read_root(file)?;
    if root.is_atom("entry") {
        Ok(Document::Entry(parse_entry(&root)?))
    } else {
        Ok(Document::Feed(parse(&root)?))
    }
}

fn validate_command(file: &Path) -> Result<()> {
    match read_document(file)? {
        Document::Feed(feed) => {
            println!("{} {}", style("Valid feed:").green().bold(), file.display());
            println!("  Id: {}", feed.id);
            println!("  Title: {}", style(feed.title.plain_text()).green());
            println!("  Authors: {}", feed.authors.len());
            println!("  Entries: {}", feed.entries.len());
        }
        Document::Entry(entry) => {
            println!("{} {}", style("Valid entry:").green().bold(), file.display());
            println!("  Id: {}", entry.id);
            println!("  Title: {}", style(entry.title.plain_text()).green());
            println!("  Authors: {}", entry.authors.len());
        }
    }
    Ok(())
}

fn facts_command(file: &Path) -> Result<()> {
    let facts = parse_unsafe(&read_root(file)?)?;
    println!("{facts:#?}");
    Ok(())
}

fn normalize_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let xml = match read_document(file)? {
        Document::Feed(feed) => to_string(&feed)?,
        Document::Entry(entry) => entry_to_string(&entry)?,
    };
    emit(&xml, output)
}

fn dump_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let yaml = match read_document(file)? {
        Document::Feed(feed) => serde_yaml_ng::to_string(&feed)?,
        Document::Entry(entry) => serde_yaml_ng::to_string(&entry)?,
    };
    emit(&yaml, output)
}

/// Print `content`, or write it to `output`.
fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_file(content, path)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// Write through a temporary sibling file, then rename over the target.
fn write_file(content: &str, path: &Path) -> Result<()> {
    let Some(file_name) = path.file_name() else {
        return Err(AtomError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path does not name a file: {}", path.display()),
        )));
    };
    if path.is_dir() {
        return Err(AtomError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is a directory: {}", path.display()),
        )));
    }

    let parent = path.parent().unwrap_or(Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    if !parent.is_dir() {
        return Err(AtomError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }

    let temp_file = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}
