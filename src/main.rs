use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tokeniser::{tokenise, Line, ReaderSource, Status, StrSource, Tokenizer, TokenizerConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Split lines into shell-style tokens and print them.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tokenise the first line of this file instead of prompting
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Treat a NUL byte as the end of the line
    #[arg(long)]
    nul_terminates: bool,

    /// Reject tokens longer than this many bytes
    #[arg(long, value_name = "N")]
    max_token_len: Option<usize>,

    /// Log every token and state transition
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> TokenizerConfig {
        let config = TokenizerConfig::new().with_nul_terminates(self.nul_terminates);
        match self.max_token_len {
            Some(limit) => config.with_max_token_len(limit),
            None => config,
        }
    }
}

fn print_line(line: &Line) {
    for (index, token) in line.tokens.iter().enumerate() {
        match token.quote() {
            Some(quote) => println!(
                "token {}: {} [{}..{}, {}]",
                index,
                token,
                token.start(),
                token.end(),
                quote
            ),
            None => println!("token {}: {} [{}..{}]", index, token, token.start(), token.end()),
        }
    }

    match line.status {
        Status::Ok | Status::Continue => {}
        Status::IncompleteToken => eprintln!("tokeniser: incomplete token"),
        Status::AlreadyDone => eprintln!("tokeniser: line was already complete"),
        Status::Error => eprintln!("tokeniser: token buffer could not grow"),
    }
}

fn run_file(tokenizer: &mut Tokenizer, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut source = ReaderSource::new(BufReader::new(file));
    let line = tokenise(tokenizer, &mut source)?;
    print_line(&line);
    Ok(())
}

fn run_prompt(tokenizer: &mut Tokenizer) -> anyhow::Result<()> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        // wait for a line
        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let line = tokenise(tokenizer, &mut StrSource::new(&buffer))?;
        if line.tokens.get(0).map(|t| t.as_bytes()) == Some(&b"exit"[..]) {
            break;
        }
        print_line(&line);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "trace" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let mut tokenizer = Tokenizer::with_config(cli.config());

    let result = match &cli.file {
        Some(path) => run_file(&mut tokenizer, path),
        None => run_prompt(&mut tokenizer),
    };

    if let Err(e) = result {
        eprintln!("tokeniser: {:#}", e);
        std::process::exit(1);
    }
}
