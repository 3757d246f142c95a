//! Tokenpath CLI for inspecting token streams and resolving dotted paths.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use tokenpath::{JsonReader, TokenKind};

#[derive(Debug, Parser)]
#[command(name = "tokenpath")]
#[command(about = "Dotted-path navigation over tokenized JSON", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tokenize a document and dump the token table
    Tokens(TokensArgs),
    /// Resolve a dotted key path and print the value
    Get(GetArgs),
}

#[derive(Debug, Parser)]
struct TokensArgs {
    /// Input file (defaults to stdin)
    file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct GetArgs {
    /// Dotted key path, e.g. "sub.title"
    path: String,

    /// Input file (defaults to stdin)
    file: Option<PathBuf>,

    /// How to decode the resolved value
    #[arg(short = 't', long = "type", default_value = "str")]
    decode: DecodeArg,

    /// Token index of the object to start from (0 = document root)
    #[arg(short, long, default_value = "0")]
    start: usize,
}

#[derive(Debug, Clone, ValueEnum)]
enum DecodeArg {
    /// Raw value bytes (no type validation)
    Str,
    /// Lenient integer decode
    I64,
    /// Lenient double decode
    F64,
    /// Strict true/false decode
    Bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Tokens(args) => dump_tokens(args),
        Command::Get(args) => get_value(args),
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn dump_tokens(args: TokensArgs) -> Result<()> {
    let text = read_input(args.file.as_ref())?;
    let reader = JsonReader::new(&text)
        .map_err(|e| anyhow::anyhow!("tokenize failed: {e}"))?;

    println!("{:>5} {:>9} {:>7} {:>7} {:>5}  value", "index", "kind", "start", "end", "size");
    for (i, token) in reader.tokens().iter().enumerate() {
        let kind = match token.kind {
            TokenKind::Undefined => "undef",
            TokenKind::Object => "object",
            TokenKind::Array => "array",
            TokenKind::String => "string",
            TokenKind::Primitive => "primitive",
        };
        let value = reader.str_at(i).unwrap_or("");
        let shown: String = value.chars().take(40).collect();
        println!(
            "{i:>5} {kind:>9} {:>7} {:>7} {:>5}  {shown}",
            token.start, token.end, token.size
        );
    }
    Ok(())
}

fn get_value(args: GetArgs) -> Result<()> {
    let text = read_input(args.file.as_ref())?;
    let reader = JsonReader::new(&text)
        .map_err(|e| anyhow::anyhow!("tokenize failed: {e}"))?;

    match args.decode {
        DecodeArg::Str => {
            let value = reader
                .str_value_from(args.start, &args.path)
                .map_err(|e| anyhow::anyhow!("{}: {e}", args.path))?;
            println!("{value}");
        }
        DecodeArg::I64 => {
            let value = reader
                .i64_value_from(args.start, &args.path)
                .map_err(|e| anyhow::anyhow!("{}: {e}", args.path))?;
            println!("{value}");
        }
        DecodeArg::F64 => {
            let value = reader
                .f64_value_from(args.start, &args.path)
                .map_err(|e| anyhow::anyhow!("{}: {e}", args.path))?;
            println!("{value}");
        }
        DecodeArg::Bool => {
            let value = reader
                .bool_value_from(args.start, &args.path)
                .map_err(|e| anyhow::anyhow!("{}: {e}", args.path))?;
            println!("{value}");
        }
    }
    Ok(())
}
