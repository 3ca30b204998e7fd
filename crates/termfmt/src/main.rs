use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use terminal_format::{Severity, Stream, Terminal, clear_colour, strip_markup};

use cli::{Cli, Command};

mod cli;
mod logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::setup_logger(cli.log_level());

    let terminal = Terminal::new(cli.timezone.as_str());
    debug!("using time zone {}", terminal.timezone());

    run(
        &cli,
        &terminal,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

fn run(
    cli: &Cli,
    terminal: &Terminal,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match &cli.command {
        Command::Info { text } => {
            write_line(terminal, cli.plain, Severity::Info, text, None, out, err)
        }
        Command::Error { text, debug } => write_line(
            terminal,
            cli.plain,
            Severity::Error,
            text,
            debug.as_deref(),
            out,
            err,
        ),
        Command::Warning { text } => {
            write_line(terminal, cli.plain, Severity::Warning, text, None, out, err)
        }
        Command::Render { text } => {
            let rendered = if cli.plain {
                strip_markup(text)
            } else {
                terminal.parse_colors(text)
            };
            writeln!(out, "{}", rendered).context("failed to write to stdout")
        }
        Command::Strip { text: Some(text) } => {
            writeln!(out, "{}", clear_colour(text)).context("failed to write to stdout")
        }
        Command::Strip { text: None } => strip_lines(input, out),
    }
}

fn write_line(
    terminal: &Terminal,
    plain: bool,
    severity: Severity,
    text: &str,
    debug: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let line = if plain {
        terminal.line_plain(severity, text, debug)
    } else {
        terminal.line(severity, text, debug)
    }
    .with_context(|| format!("failed to format {} line", severity))?;

    match severity.stream() {
        Stream::Stdout => writeln!(out, "{}", line).context("failed to write to stdout"),
        Stream::Stderr => writeln!(err, "{}", line).context("failed to write to stderr"),
    }
}

fn strip_lines(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        writeln!(out, "{}", clear_colour(&line)).context("failed to write to stdout")?;
    }

    Ok(())
}
