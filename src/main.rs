// Thu Aug 06 2026 - Alex

use clap::Parser;
use colored::Colorize;
use goto::{
    config::{ConfigError, ConfigStore, Persistence},
    editor::{self, EditorError},
    store::{AliasStore, StoreError},
    ui::{self, InputError, PromptInput, TerminalPrompt},
};
use std::env;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "goto")]
#[command(about = "Register directory aliases and jump back to them", long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    alias: Option<String>,

    #[arg(short, long, value_name = "ALIAS")]
    add: Option<String>,

    #[arg(short, long, value_name = "ALIAS")]
    delete: Option<String>,

    #[arg(short, long)]
    show: bool,

    #[arg(short, long)]
    edit: bool,

    #[arg(short = 'v', long)]
    version: bool,

    #[arg(long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("{0}")]
    Editor(#[from] EditorError),
    #[error("{0}")]
    Io(#[from] io::Error),
}

fn main() {
    let args = Args::parse();

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stderr) {
        colored::control::set_override(false);
    }
    ui::logging::init(args.verbose);

    std::process::exit(run(args));
}

// Flag precedence: version, show, edit, add, delete, then the positional
// lookup. An empty string given to -a/-d counts as the flag being unset.
fn run(args: Args) -> i32 {
    if args.version {
        println!("version: {}", goto::VERSION);
        return 0;
    }

    if args.show {
        return report(cmd_show());
    }

    if args.edit {
        return report(cmd_edit());
    }

    if let Some(alias) = args.add.as_deref().filter(|a| !a.is_empty()) {
        return report(cmd_add(alias));
    }

    if let Some(alias) = args.delete.as_deref().filter(|a| !a.is_empty()) {
        return report(cmd_delete(alias));
    }

    match args.alias.as_deref() {
        Some(alias) => report(cmd_goto(alias)),
        None => {
            println!("Please specify alias.");
            0
        }
    }
}

fn report(result: Result<(), CliError>) -> i32 {
    if let Err(err) = result {
        let program = env::args().next().unwrap_or_else(|| "goto".to_string());
        eprintln!("{}: {}", program, err);
        return 1;
    }

    0
}

fn open_store() -> Result<AliasStore, CliError> {
    let backend = ConfigStore::new();
    log::debug!("using config at {}", backend.path().display());

    Ok(AliasStore::open(Box::new(backend))?)
}

fn cmd_goto(alias: &str) -> Result<(), CliError> {
    let store = open_store()?;
    let directory = store.resolve(alias)?;

    // No trailing newline so that `cd $(goto work)` gets a bare path.
    print!("{}", directory);
    io::stdout().flush()?;

    Ok(())
}

fn cmd_add(alias: &str) -> Result<(), CliError> {
    let mut store = open_store()?;

    let mut prompt = TerminalPrompt::new();
    let mut directory = prompt.prompt_line("Directory: ")?;

    if directory.is_empty() {
        directory = env::current_dir()?.display().to_string();
    }

    store.add(alias, &directory)?;
    Ok(())
}

fn cmd_delete(alias: &str) -> Result<(), CliError> {
    let mut store = open_store()?;
    store.remove(alias)?;
    Ok(())
}

fn cmd_show() -> Result<(), CliError> {
    let store = open_store()?;

    for (alias, directory) in store.entries() {
        println!("{}: {}", alias.cyan(), directory);
    }

    Ok(())
}

fn cmd_edit() -> Result<(), CliError> {
    let config = ConfigStore::new();

    // Seed an empty file so the editor has something to open on first run.
    let aliases = config.load()?;
    if !config.path().exists() {
        config.save(&aliases)?;
    }

    editor::edit_file(config.path())?;
    Ok(())
}
