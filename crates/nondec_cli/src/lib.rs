use std::{
    io::{Read, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context;

use clap::{Parser, ValueEnum};
use nondec::{Limits, ModInt};

/// Offline range queries over a bounded-alphabet sequence
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input file, stdin when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "problem")]
    pub input: Option<PathBuf>,

    /// Output file, stdout when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath, conflicts_with = "problem")]
    pub output: Option<PathBuf>,

    /// Read `<PROBLEM>.in` and write `<PROBLEM>.out` in the working directory
    #[arg(long)]
    pub problem: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    #[arg(long, default_value_t = Limits::default().max_n)]
    pub max_n: usize,

    #[arg(long, default_value_t = Limits::default().max_k)]
    pub max_k: usize,

    #[arg(long, default_value_t = Limits::default().max_q)]
    pub max_q: usize,
}

impl Default for Args {
    fn default() -> Self {
        let limits = Limits::default();
        Args {
            input: None,
            output: None,
            problem: None,
            format: Format::Plain,
            max_n: limits.max_n,
            max_k: limits.max_k,
            max_q: limits.max_q,
        }
    }
}

impl Args {
    pub fn limits(&self) -> Limits {
        Limits {
            max_n: self.max_n,
            max_k: self.max_k,
            max_q: self.max_q,
        }
    }

    fn input_path(&self) -> Option<PathBuf> {
        match &self.problem {
            Some(problem) => Some(PathBuf::from(format!("{problem}.in"))),
            None => self.input.clone(),
        }
    }

    fn output_path(&self) -> Option<PathBuf> {
        match &self.problem {
            Some(problem) => Some(PathBuf::from(format!("{problem}.out"))),
            None => self.output.clone(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One result per line
    #[default]
    Plain,
    /// A single JSON array
    Json,
}

pub fn render(results: &[ModInt], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Plain => Ok(results.iter().map(|x| format!("{x}\n")).collect()),
        Format::Json => {
            let values: Vec<u32> = results.iter().map(|x| x.val()).collect();
            Ok(serde_json::to_string(&values)? + "\n")
        }
    }
}

/// Answers the batch in `src` and renders it the way `args` asks for.
pub fn run(src: &str, args: &Args) -> anyhow::Result<String> {
    let limits = args.limits();
    let start = Instant::now();
    let results = nondec::solve_str(src, &limits).context("Failed to answer query batch")?;
    log::info!(
        "answered {} queries in {:.3?}",
        results.len(),
        start.elapsed()
    );
    render(&results, args.format)
}

pub fn cli(args: Args) -> anyhow::Result<()> {
    let src = match args.input_path() {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut src = String::new();
            std::io::stdin()
                .read_to_string(&mut src)
                .context("Failed to read stdin")?;
            src
        }
    };

    let out = run(&src, &args)?;

    match args.output_path() {
        Some(path) => {
            let mut f = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            f.write_all(out.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub fn parse_cli() -> anyhow::Result<()> {
    let args = Args::parse();
    log::debug!("{args:?}");
    cli(args)
}
