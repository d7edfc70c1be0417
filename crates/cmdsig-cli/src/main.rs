mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmdsig_core::{classify_signature, load_flag_set, FlagSet, Rule};
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "cmdsig", version, about = "Privacy-safe command signatures for CLI telemetry")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the command signature for an argument vector
    Classify {
        /// Print a JSON object instead of the bare signature
        #[arg(long)]
        json: bool,
        /// Ignore config files and use only the built-in flags
        #[arg(long)]
        no_config: bool,
        /// Arguments of the classified program (program name excluded), after `--`
        #[arg(last = true, value_name = "ARGS")]
        args: Vec<String>,
    },
    /// Show the effective global flag registry
    Flags {
        /// Ignore config files and use only the built-in flags
        #[arg(long)]
        no_config: bool,
    },
    /// Show every known root command and the words it may report
    Commands,
}

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Classify { json, no_config, args } => cmd_classify(&args, json, no_config)?,
        Command::Flags { no_config } => cmd_flags(no_config)?,
        Command::Commands => cmd_commands(),
    }
    Ok(())
}

fn registry(no_config: bool) -> Result<FlagSet> {
    if no_config {
        Ok(FlagSet::builtin())
    } else {
        load_flag_set()
    }
}

fn cmd_classify(args: &[String], json: bool, no_config: bool) -> Result<()> {
    let flags = registry(no_config)?;
    let signature = classify_signature(args, &flags);

    if json {
        let report = serde_json::json!({
            "command": signature.to_string(),
            "words": signature,
            "reported": !signature.is_empty(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", signature);
    }
    Ok(())
}

fn cmd_flags(no_config: bool) -> Result<()> {
    let flags = registry(no_config)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Flag", "Short", "Kind"]);
    for spec in flags.iter() {
        table.add_row(vec![
            spec.long_spelling(),
            spec.short_spelling().unwrap_or_default(),
            spec.kind().as_str().to_string(),
        ]);
    }

    println!("{} {}", "▸".bright_cyan(), "Global flags".bright_cyan().bold());
    println!("{table}");
    println!("{} flag(s)", flags.len());
    Ok(())
}

fn cmd_commands() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Command", "Rule", "Reported words"]);
    for (root, rule) in Rule::roots() {
        table.add_row(vec![
            root.to_string(),
            rule.kind().to_string(),
            rule.structural_words().join(", "),
        ]);
    }

    println!("{} {}", "▸".bright_cyan(), "Known commands".bright_cyan().bold());
    println!("{table}");
}
