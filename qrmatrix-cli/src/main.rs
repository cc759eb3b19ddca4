use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use qrmatrix::{Matrix, ScanDirection};

/// Inspect and overlay QR module matrices stored as TOML
#[derive(Parser)]
#[command(name = "qrmatrix", version)]
struct Cli {
    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write an all-Init matrix
    New {
        #[arg(long)]
        width: usize,
        #[arg(long)]
        height: usize,
        /// Output TOML file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print a matrix as a grid of state codes
    Print {
        /// Matrix TOML file
        #[arg(long)]
        file: String,
    },
    /// List every cell in traversal order
    Scan {
        /// Matrix TOML file
        #[arg(long)]
        file: String,
        /// Traversal order: row or column
        #[arg(long, default_value = "row")]
        direction: ScanDirection,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// XOR two equally sized matrices cell by cell
    Xor {
        /// Data layer TOML file
        #[arg(long)]
        a: String,
        /// Mask layer TOML file
        #[arg(long)]
        b: String,
        /// Output TOML file (grid printed to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Serialize)]
struct OutputScan {
    file: String,
    width: usize,
    height: usize,
    direction: ScanDirection,
    cells: Vec<OutputCell>,
}

#[derive(Serialize)]
struct OutputCell {
    w: usize,
    h: usize,
    state: qrmatrix::State,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    match cli.command {
        Command::New {
            width,
            height,
            output,
        } => cmd_new(width, height, output.as_deref(), quiet),
        Command::Print { file } => cmd_print(&file, quiet),
        Command::Scan {
            file,
            direction,
            json,
            pretty,
        } => cmd_scan(&file, direction, json, pretty, quiet),
        Command::Xor { a, b, output } => cmd_xor(&a, &b, output.as_deref(), quiet),
    }
}

fn load_matrix(path: &str) -> Result<Matrix> {
    let toml_str =
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    Matrix::from_toml(&toml_str).with_context(|| format!("parsing matrix from {path}"))
}

fn write_matrix(m: &Matrix, path: Option<&str>, quiet: bool) -> Result<()> {
    let text = m.to_toml().context("serializing matrix")?;
    match path {
        Some(path) => {
            std::fs::write(Path::new(path), text).with_context(|| format!("writing {path}"))?;
            if !quiet {
                eprintln!("wrote {path} ({}x{})", m.width(), m.height());
            }
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_new(width: usize, height: usize, output: Option<&str>, quiet: bool) -> Result<()> {
    write_matrix(&Matrix::new(width, height), output, quiet)
}

fn cmd_print(file: &str, quiet: bool) -> Result<()> {
    let m = load_matrix(file)?;
    if !quiet {
        eprintln!("{file}: {}x{}", m.width(), m.height());
    }
    m.print();
    Ok(())
}

fn cmd_scan(
    file: &str,
    direction: ScanDirection,
    json: bool,
    pretty: bool,
    quiet: bool,
) -> Result<()> {
    let m = load_matrix(file)?;
    if !quiet {
        eprintln!("scanning {file} ({}x{}) {direction}-first", m.width(), m.height());
    }

    if json {
        let out = OutputScan {
            file: file.to_string(),
            width: m.width(),
            height: m.height(),
            direction,
            cells: m
                .cells(direction)
                .map(|(w, h, state)| OutputCell { w, h, state })
                .collect(),
        };
        let text = if pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{text}");
    } else {
        println!("{:>5} {:>5}  {}", "w", "h", "state");
        m.iterate(direction, |w, h, s| println!("{w:>5} {h:>5}  {s} ({s:?})"));
    }
    Ok(())
}

fn cmd_xor(a: &str, b: &str, output: Option<&str>, quiet: bool) -> Result<()> {
    let data = load_matrix(a)?;
    let mask = load_matrix(b)?;
    let combined = data
        .xor(&mask)
        .with_context(|| format!("overlaying {a} with {b}"))?;

    if output.is_some() {
        return write_matrix(&combined, output, quiet);
    }
    combined.print();
    Ok(())
}
