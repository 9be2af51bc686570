use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use translit_core::{Config, Transliterator};

#[derive(Parser, Debug)]
#[command(name = "translit")]
#[command(about = "Transliterate English text to Shavian and back")]
struct Args {
    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON dictionary source, overriding the configuration
    #[arg(long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Compiled snapshot, rebuilt from the dictionary when missing
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Convert Shavian back to English
    #[arg(long)]
    reverse: bool,

    /// Wrap untranslated punctuated tokens so they survive a round trip
    #[arg(long)]
    escape: bool,

    /// Text to convert. Without it, lines are read from stdin.
    text: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dictionary) = args.dictionary.clone() {
        config.dictionary = dictionary;
    }
    if args.snapshot.is_some() {
        config.snapshot = args.snapshot.clone();
    }
    if args.escape {
        config.options.escape_unresolved = true;
    }

    let mut engine = Transliterator::from_config(&config)?;
    let mut direction = if args.reverse { Direction::Reverse } else { Direction::Forward };

    if !args.text.is_empty() {
        println!("{}", convert(&engine, direction, &args.text.join(" ")));
        return Ok(());
    }

    if !stdin().is_tty() {
        let stdout = stdout();
        let mut out = stdout.lock();
        for line in stdin().lock().lines() {
            writeln!(out, "{}", convert(&engine, direction, &line?))?;
        }
        return Ok(());
    }

    print_banner();
    loop {
        print_prompt(direction)?;
        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\n', '\r']);

        match line.trim() {
            "exit" | ":q" => break,
            "" => continue,
            ":reverse" => direction = Direction::Reverse,
            ":forward" => direction = Direction::Forward,
            ":save" => match &config.snapshot {
                Some(path) => match engine.save_snapshot(path) {
                    Ok(()) => println!("{}", format!("Snapshot saved to '{}'", path.display()).green()),
                    Err(e) => eprintln!("{} {e}", "[ERROR]".red().bold()),
                },
                None => eprintln!("{} no snapshot path configured", "[ERROR]".red().bold()),
            },
            cmd if cmd.starts_with(":add ") => {
                let mut parts = cmd[":add ".len()..].split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(word), Some(form)) if engine.add_entry(word, form) => {
                        println!("{}", format!("Added '{word}' -> {form}").green());
                    }
                    _ => eprintln!("{} usage: :add <word> <form>", "[ERROR]".red().bold()),
                }
            }
            _ => println!("{}", convert(&engine, direction, line).bold()),
        }
    }
    Ok(())
}

fn convert(engine: &Transliterator, direction: Direction, text: &str) -> String {
    match direction {
        Direction::Forward => engine.transliterate(text),
        Direction::Reverse => engine.reverse_transliterate(text),
    }
}

fn print_banner() {
    println!("{}", "Shavian Transliterator".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Type a line to convert it. ':reverse' and ':forward' switch direction,");
    println!("':add <word> <form>' adds a word, ':save' writes the snapshot, 'exit' quits.\n");
}

fn print_prompt(direction: Direction) -> std::io::Result<()> {
    let label = match direction {
        Direction::Forward => "en → 𐑖𐑱𐑝𐑾𐑯",
        Direction::Reverse => "𐑖𐑱𐑝𐑾𐑯 → en",
    };
    print!("{} ", format!("[{label}] >").dark_grey());
    stdout().flush()
}
