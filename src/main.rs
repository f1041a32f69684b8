mod catalog;
mod cli;
mod palette;
mod table;
mod variations;

use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            if err.kind() == ErrorKind::UnknownArgument {
                eprintln!("Invalid option");
            }
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let theme = cli.theme.as_deref().and_then(palette::load);

    if cli.debug {
        eprintln!("debug: {cli:?}");
        if let Some(theme) = &theme {
            eprintln!(
                "debug: palette supplied {} colors (title: {})",
                theme.color_count(),
                theme.display_name.as_deref().unwrap_or("<none>")
            );
        }
    }

    let order = catalog::display_order(theme.as_ref());

    let mut out = String::new();
    let term = env::var("TERM").unwrap_or_else(|_| String::from("unknown"));
    out.push_str(&format!("Terminal: {term}\n"));
    if let Some(name) = theme.as_ref().and_then(|theme| theme.display_name.as_deref()) {
        out.push_str(&format!("Theme: {name}\n"));
    }
    out.push('\n');
    out.push_str(&table::main_table(&order, theme.as_ref()));

    if cli.variations {
        out.push('\n');
        out.push_str("\x1b[3mBackground variations\x1b[0m\n");
        out.push_str(&variations::background_table());
        out.push('\n');
        out.push_str("\x1b[3mText variations\x1b[0m\n");
        out.push_str(&variations::text_table());
    }

    io::stdout()
        .write_all(out.as_bytes())
        .context("writing report")?;
    Ok(())
}
