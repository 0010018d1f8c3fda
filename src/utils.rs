//! Miscellaneous utility functions.

use anyhow::Context as _;
use colored::Colorize;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::ast::Node;
use crate::tokenizer::Token;

/// Write an indented, colorized dump of `node` to `writer`, one node per
/// line. Object members are listed in key order so the output is stable.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_tree<W: Write>(writer: &mut W, node: &Node) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        write_node(writer, node, 0)?;
        writeln!(writer)?;
        Ok(())
    })();
    ignore_broken_pipe(result).context("write AST dump")
}

/// Write one token per line as `<kind> "<text>"`.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_tokens<W: Write>(
    writer: &mut W,
    tokens: &[Token],
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        for token in tokens {
            writeln!(
                writer,
                "{} {}",
                token.kind.to_string().blue(),
                format!("{:?}", token.text).green()
            )?;
        }
        Ok(())
    })();
    ignore_broken_pipe(result).context("write token stream")
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Write a container slot, marking slots that produced no node.
fn write_slot<W: Write>(
    writer: &mut W,
    slot: Option<&Node>,
    indent: usize,
) -> io::Result<()> {
    match slot {
        Some(node) => write_node(writer, node, indent),
        None => write!(writer, "{}", "empty".red().dimmed()),
    }
}

/// Recursively write a node with syntax highlighting.
fn write_node<W: Write>(
    writer: &mut W,
    node: &Node,
    indent: usize,
) -> io::Result<()> {
    let next_indent = indent + 2;

    match node {
        Node::String(s) => {
            write!(writer, "{} {}", "string".dimmed(), format!("{s:?}").green())
        }
        Node::Integer(i) => {
            write!(writer, "{} {}", "integer".dimmed(), i.to_string().yellow())
        }
        Node::Boolean(b) => write!(
            writer,
            "{} {}",
            "boolean".dimmed(),
            b.to_string().yellow().bold()
        ),
        Node::Array(elements) => {
            write!(writer, "{} [{}]", "array".dimmed(), elements.len())?;
            for (i, element) in elements.iter().enumerate() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = next_indent)?;
                write!(writer, "{} ", format!("[{i}]").magenta())?;
                write_slot(writer, element.as_ref(), next_indent)?;
            }
            Ok(())
        }
        Node::Object(properties) => {
            write!(writer, "{} {{{}}}", "object".dimmed(), properties.len())?;
            let mut entries: Vec<_> = properties.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in entries {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = next_indent)?;
                write!(writer, "{}: ", format!("{key:?}").cyan())?;
                write_slot(writer, value.as_ref(), next_indent)?;
            }
            Ok(())
        }
    }
}
