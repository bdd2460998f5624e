use std::{fs, path::PathBuf, time::Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tfidf_matrix::{
    most_similar, vectorizer::token::split_sentences, CommandTokenizer, MatrixBuilder, Matrix, Report,
    Tokenizer, UnicodeWordTokenizer, VectorizerConfig, WhitespaceTokenizer,
};

const SAMPLE_DOCS: [&str; 3] = [
    "A carteira colocou a carteira na carteira.",
    "O carteiro não tem carteira.",
    "O carteiro comprou uma carteira nova.",
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TokenizerKind {
    Unicode,
    Whitespace,
    Command,
}

/// Bag-of-Words / TF-IDF matrices and cosine document distance
#[derive(Debug, Parser)]
#[command(name = "tfidf-matrix", version)]
struct Cli {
    /// Document files; each non-empty line is one document.
    /// Without files the built-in sample corpus is used.
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Treat each file as a single document
    #[arg(long, conflicts_with = "sentences")]
    whole: bool,

    /// Split file text into sentences, one document per sentence
    #[arg(long)]
    sentences: bool,

    #[arg(long, value_enum, default_value = "unicode")]
    tokenizer: TokenizerKind,

    /// External tokenizer command, for `--tokenizer command`
    #[arg(long, env = "TFIDF_TOKENIZER_CMD")]
    command: Option<String>,

    /// Rows printed per matrix
    #[arg(long, default_value_t = 5)]
    head: usize,

    /// List the documents closest to this one (1-based)
    #[arg(long)]
    nearest: Option<usize>,

    /// Write the full report as CBOR
    #[arg(long)]
    save: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "tfidf_matrix=debug" } else { "tfidf_matrix=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => VectorizerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => VectorizerConfig::default().with_env_overrides(),
    };

    let documents = load_documents(&cli)?;
    if documents.is_empty() {
        bail!("no documents to vectorize");
    }
    info!(documents = documents.len(), "documents loaded");

    match cli.tokenizer {
        TokenizerKind::Unicode => run(&cli, &config, &documents, &UnicodeWordTokenizer),
        TokenizerKind::Whitespace => run(&cli, &config, &documents, &WhitespaceTokenizer),
        TokenizerKind::Command => {
            let Some(cmd) = cli.command.as_deref() else {
                bail!("--tokenizer command needs --command or TFIDF_TOKENIZER_CMD");
            };
            run(&cli, &config, &documents, &CommandTokenizer::new(cmd))
        }
    }
}

fn load_documents(cli: &Cli) -> Result<Vec<String>> {
    if cli.files.is_empty() {
        return Ok(SAMPLE_DOCS.iter().map(|s| s.to_string()).collect());
    }
    let mut documents = Vec::new();
    for path in &cli.files {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let before = documents.len();
        if cli.whole {
            documents.push(text);
        } else if cli.sentences {
            documents.extend(split_sentences(&text));
        } else {
            documents.extend(text.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string));
        }
        if documents.len() == before {
            warn!(path = %path.display(), "no documents in file");
        }
    }
    Ok(documents)
}

fn run<Tk>(cli: &Cli, config: &VectorizerConfig, documents: &[String], tokenizer: &Tk) -> Result<()>
where
    Tk: Tokenizer + Sync,
{
    let start = Instant::now();
    let builder: MatrixBuilder<String, Tk> = MatrixBuilder::new(documents, tokenizer).config(config.clone());
    info!(terms = builder.vocabulary().size(), "vocabulary built");

    let report = builder.report()?;
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "matrices built");

    let prec = config.display_precision;
    print_matrix("Document-term matrix", &report.document_term, cli.head, prec);
    print_matrix("Term Frequency matrix", &report.tf, cli.head, prec);
    print_matrix("Inverse Document Frequency matrix", &report.idf, cli.head, prec);
    print_matrix("Term Frequency-Inverse Document Frequency matrix", &report.tf_idf, cli.head, prec);
    print_matrix("Cosine Similarity", &report.similarity, cli.head, prec);

    if let Some(i) = cli.nearest {
        print_nearest(&report, i, prec);
    }

    if let Some(path) = &cli.save {
        report.save(path).with_context(|| format!("saving report to {}", path.display()))?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

fn print_matrix<N>(title: &str, matrix: &Matrix<N>, head: usize, prec: usize)
where
    N: num::Num + Copy + std::fmt::Display,
{
    println!("{:-^80}", format!("[{title}]"));
    println!("{:.*}", prec, matrix.head(head));
    println!();
}

fn print_nearest(report: &Report, i: usize, prec: usize) {
    let hits = most_similar(&report.similarity, i);
    if hits.is_empty() {
        warn!(document = i, documents = report.doc_num(), "no such document");
        return;
    }
    println!("{:-^80}", format!("[Closest to document {i}]"));
    for (j, score) in hits {
        println!("{j}\t{score:.prec$}");
    }
}
