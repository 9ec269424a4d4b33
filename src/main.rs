//! cbox - format text into a fixed-width banner comment block
//!
//! Usage: cbox [options] [FILE]
//!
//! Reads FILE (or stdin) to EOF, then writes the decorated block to stdout.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use comment_box::{assemble, expand_tabs, StyleId, DEFAULT_TAB_WIDTH, DEFAULT_WIDTH};

struct CliArgs {
    style: StyleId,
    width: usize,
    centered: bool,
    tab_width: usize,
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let mut text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    let text = expand_tabs(&text, args.tab_width);

    let block = assemble(&args.style.style(), &text, args.width, args.centered)?;

    let stdout = std::io::stdout();
    stdout
        .lock()
        .write_all(block.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn parse_args() -> Result<CliArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut style = StyleId::default();
    let mut width = DEFAULT_WIDTH;
    let mut centered = true;
    let mut tab_width = DEFAULT_TAB_WIDTH;
    let mut input: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("Usage: cbox [options] [FILE]");
                println!();
                println!("Options:");
                println!("  --style <name>    Comment style: block, hash, dash, percent (default block)");
                println!("  --width <n>       Total block width (default {DEFAULT_WIDTH})");
                println!("  --left            Left-justify body text instead of centering");
                println!("  --tab-width <n>   Tab stop interval for input (default {DEFAULT_TAB_WIDTH})");
                println!();
                println!("If no FILE is provided, reads from stdin until EOF.");
                std::process::exit(0);
            }
            "--style" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--style requires a name");
                }
                style = args[i].parse()?;
            }
            "--width" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--width requires a number");
                }
                width = args[i]
                    .parse()
                    .with_context(|| format!("Invalid width: {}", args[i]))?;
                if width == 0 {
                    anyhow::bail!("--width must be positive");
                }
            }
            "--left" => {
                centered = false;
            }
            "--tab-width" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--tab-width requires a number");
                }
                tab_width = args[i]
                    .parse()
                    .with_context(|| format!("Invalid tab width: {}", args[i]))?;
            }
            arg if arg.starts_with('-') => {
                anyhow::bail!("Unknown option: {arg}");
            }
            arg => {
                if input.is_none() {
                    input = Some(PathBuf::from(arg));
                } else {
                    anyhow::bail!("Unexpected argument: {arg}");
                }
            }
        }
        i += 1;
    }

    Ok(CliArgs {
        style,
        width,
        centered,
        tab_width,
        input,
    })
}
