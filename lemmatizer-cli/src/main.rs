//! Linha de comando do lematizador de entidades.
//!
//! Lê o fluxo anotado (stdin ou `--input`) e escreve em stdout uma linha por
//! entidade: `início,fim<TAB>texto normalizado<TAB>tag`.
//!
//! ```text
//! lemmatize-matches Enamex < anotado.tsv
//! lemmatize-matches --format json --input anotado.tsv NumexMsrCur
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lemmatizer_core::{Lemmatizer, LemmatizerConfig, OutputFormat, PositionMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Tsv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tsv => OutputFormat::Tsv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Lista as entidades marcadas de uma categoria na forma base, na ordem do texto.
#[derive(Debug, Parser)]
#[command(name = "lemmatize-matches", version, about)]
struct Cli {
    /// Prefixo do marcador a extrair (ex: Enamex, EnamexLoc, Numex). Vazio aceita todos.
    #[arg(default_value = "", env = "LEMMATIZE_TAG")]
    tag: String,

    /// Arquivo de entrada; sem ele, lê de stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Formato de saída.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Tsv)]
    format: FormatArg,

    /// Posições pelo índice da linha no arquivo inteiro (a partir de 0, linhas em
    /// branco incluídas), em vez do índice do token no segmento (também a partir de 0).
    #[arg(long)]
    document_lines: bool,

    /// Registra cada segmento e span em stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> LemmatizerConfig {
        LemmatizerConfig {
            tag_prefix: self.tag.clone(),
            positions: if self.document_lines {
                PositionMode::Document
            } else {
                PositionMode::Segment
            },
            format: self.format.into(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // stdout fica reservado para as entidades
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let lemmatizer = Lemmatizer::new(cli.config());
    let stdout = io::stdout();
    let output = io::BufWriter::new(stdout.lock());

    let stats = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            lemmatizer.run(BufReader::new(file), output)?
        }
        None => lemmatizer.run(io::stdin().lock(), output)?,
    };

    info!(
        segments = stats.segments,
        tokens = stats.tokens,
        entities = stats.entities,
        warnings = stats.warnings,
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
