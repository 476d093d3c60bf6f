use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use domattr::{ClassSet, Event, EventAttrs, merge};

mod description;

#[derive(ClapParser)]
#[command(name = "domattr")]
#[command(about = "Inspect the host object produced by an attribute list")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a JSON attribute list and print the host object
    Merge {
        /// Path to a JSON array of attribute descriptions, or `-` for stdin
        file: PathBuf,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Validate class names and print the resulting `class` attribute value
    Classes {
        /// Class names
        names: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(error) = run(cli.command) {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Merge { file, compact } => merge_file(&file, compact),
        Commands::Classes { names } => {
            let set = ClassSet::from_list(names)?;
            println!("{set}");
            Ok(())
        }
    }
}

fn merge_file(file: &Path, compact: bool) -> Result<()> {
    let json = read_input(file)?;
    let descriptions = description::parse(&json)
        .with_context(|| format!("invalid attribute list in {}", file.display()))?;
    log::debug!("read {} attribute descriptions", descriptions.len());

    // Nothing fires events here; the dispatcher only matters if a handler is invoked.
    let events = EventAttrs::new(|event: Event<String>| {
        for action in event.into_actions() {
            log::info!("event: {action}");
        }
    });
    let attributes = descriptions
        .into_iter()
        .map(|description| description.build(&events))
        .collect::<Result<Vec<_>, _>>()?;

    let host = merge(attributes);
    let output = if compact {
        serde_json::to_string(&host)?
    } else {
        serde_json::to_string_pretty(&host)?
    };
    println!("{output}");
    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("failed to read stdin")?;
        return Ok(json);
    }
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_input_from_a_plain_path() {
        let path = std::env::temp_dir().join(format!("domattr-read-{}.json", std::process::id()));
        fs::write(&path, r#"[{"kind": "attribute", "name": "id", "value": "x"}]"#).unwrap();
        let json = read_input(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(description::parse(&json).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = read_input(Path::new("/nonexistent/domattr.json")).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/domattr.json"));
    }
}
