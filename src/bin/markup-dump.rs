use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use mdox::{Block, Blocks};

/// Dump the translated block structure of a markup file for debugging
#[derive(Parser, Debug)]
#[command(name = "markup-dump")]
#[command(
    about = "Dumps the block structure a markup file translates to, without writing a document"
)]
struct Args {
    /// Markup file to dump
    file: String,

    /// Emit the structure as JSON
    #[arg(short, long)]
    json: bool,
}

/// Owned block representation for reporting.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum DumpBlock {
    Heading { level: u8, text: String },
    Rule,
    Bullet { text: String },
    Numbered { text: String },
    Paragraph { text: String },
    Table { rows: Vec<Vec<String>> },
}

impl From<Block<'_>> for DumpBlock {
    fn from(block: Block<'_>) -> Self {
        match block {
            Block::Heading { level, text } => DumpBlock::Heading {
                level,
                text: text.to_string(),
            },
            Block::Rule => DumpBlock::Rule,
            Block::Bullet(text) => DumpBlock::Bullet {
                text: text.to_string(),
            },
            Block::Numbered(text) => DumpBlock::Numbered {
                text: text.to_string(),
            },
            Block::Paragraph(text) => DumpBlock::Paragraph {
                text: text.to_string(),
            },
            Block::Table(rows) => DumpBlock::Table {
                rows: rows
                    .into_iter()
                    .map(|row| row.into_iter().map(str::to_string).collect())
                    .collect(),
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let bytes = match fs::read(&args.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {}: {e}", args.file);
            return ExitCode::FAILURE;
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let blocks: Vec<DumpBlock> = Blocks::new(&text).map(DumpBlock::from).collect();

    if args.json {
        match serde_json::to_string_pretty(&blocks) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for block in &blocks {
            print_block(block);
        }
        println!();
        println!("Total blocks: {}", blocks.len());
    }

    ExitCode::SUCCESS
}

fn print_block(block: &DumpBlock) {
    match block {
        DumpBlock::Heading { level, text } => println!("heading[{level}]  {text}"),
        DumpBlock::Rule => println!("rule"),
        DumpBlock::Bullet { text } => println!("bullet      {text}"),
        DumpBlock::Numbered { text } => println!("numbered    {text}"),
        DumpBlock::Paragraph { text } => println!("paragraph   {text}"),
        DumpBlock::Table { rows } => {
            println!(
                "table       {} cols x {} rows",
                rows.first().map_or(0, Vec::len),
                rows.len()
            );
            for row in rows {
                println!("  | {} |", row.join(" | "));
            }
        }
    }
}
