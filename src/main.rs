/*!
Main binary for json-astify.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{debug, info};
use std::io::stdout;
use std::io::{self};
use std::{
    fs::{self},
    io::{IsTerminal, Read},
    path::PathBuf,
};

use json_astify::{tokenizer, utils};

/// Parse a JSON document into an AST and display it.
#[derive(Parser)]
#[command(name = "astify", version, about, long_about = None)]
struct Args {
    #[arg(value_name = "FILE")]
    /// Optional path to JSON file. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Display the token stream instead of the AST
    #[arg(long, action = ArgAction::SetTrue)]
    tokens: bool,
    /// Display depth of the parsed document
    #[arg(long, action = ArgAction::SetTrue)]
    depth: bool,
    /// Disable colored output
    #[arg(long, action = ArgAction::SetTrue)]
    no_color: bool,
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

/// Entry point for main binary.
///
/// Reads the document from the given file, or from STDIN when it is piped in,
/// parses it and prints the resulting tree to STDOUT.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    if args.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let input_content = if let Some(path) = args.input {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file {}", path.display()))?
    } else {
        if io::stdin().is_terminal() {
            // No piped input and no file specified
            let mut cmd = Args::command();
            return Ok(cmd.print_help()?);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };
    debug!("read {} byte(s) of input", input_content.len());

    if args.tokens {
        let tokens = tokenizer::tokenize(&input_content);
        return utils::write_tokens(&mut stdout().lock(), &tokens);
    }

    let Some(ast) = json_astify::parse_str(&input_content)
        .with_context(|| "Failed to parse JSON")?
    else {
        info!("document produced no value");
        return Ok(());
    };
    info!("ast - {ast:?}");

    if args.depth {
        println!("Depth: {}", ast.depth());
    }

    utils::write_tree(&mut stdout().lock(), &ast)
}
