use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use jgrep::{Config, Input, JsonGrep, Matcher, Mode, OutputFormat, Term, Token};
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "jgrep", about = "Grep for JSON — print keys or values selected by pattern")]
struct Cli {
    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,

    /// Output format. Defaults to `[output] format` from the config file.
    #[arg(long, value_enum, global = true)]
    format: Option<Format>,

    /// Config file to use instead of ~/.config/jgrep/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the keys whose value matches any term.
    Keys(Search),
    /// Print the values whose key matches any term.
    Values(Search),
}

#[derive(clap::Args)]
struct Search {
    /// JSON text, a path to a JSON file, or `-` to read stdin.
    input: String,

    /// Literal terms, matched exactly.
    terms: Vec<String>,

    /// Regular-expression terms, used as-is. May be repeated.
    #[arg(short = 'e', long = "regex", value_name = "REGEX")]
    patterns: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Lines,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Lines => OutputFormat::Lines,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::debug!("jgrep debug logging enabled");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config: falling back to defaults");
            Config::defaults()
        }),
    };
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);

    let (mode, search) = match cli.command {
        Command::Keys(search) => (Mode::Keys, search),
        Command::Values(search) => (Mode::Values, search),
    };

    let input = if search.input == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        Input::from(buf)
    } else {
        Input::from(search.input)
    };

    let terms: Vec<Term> = search
        .terms
        .into_iter()
        .map(Term::from)
        .chain(search.patterns.into_iter().map(Term::Pattern))
        .collect();

    let tokens = JsonGrep::load(input)
        .await
        .with_matcher(Matcher::from_config(&config.scan))
        .search(&terms, mode)?;

    print!("{}", render(&tokens, format)?);
    Ok(())
}

/// Format `tokens` for stdout. `Lines` output ends with a newline unless empty.
fn render(tokens: &[Token], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Lines => tokens.iter().map(|t| format!("{t}\n")).collect(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string(tokens)?),
    })
}
