use clap::Parser;
use std::io::{self, Write};
use std::path::Path;

use lexis::{
    build_index, build_index_from_path, evaluate, open_corpus, parse_query, print_banner,
    verify_all, BuildOutcome, Shell,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::display::{self, match_count, section_bot, section_top, status_badge, term_label};
use cli::{Cli, CliError, Commands, InspectReport, SearchReport, TermFrequency};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let result = match cli.command {
        Commands::Shell { corpus } => run_shell(&corpus),
        Commands::Search {
            corpus,
            query,
            json,
        } => run_search(&corpus, &query, json),
        Commands::Inspect { corpus, top, json } => run_inspect(&corpus, top, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries results only.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Interactive mode: an unreadable corpus is reported and the shell runs on
/// an empty index.
fn run_shell(corpus: &Path) -> Result<(), CliError> {
    let outcome = build_index_from_path(corpus);

    let stdout = io::stdout();
    print_banner(&outcome, &mut stdout.lock())?;

    let stdin = io::stdin();
    Shell::new(&outcome.index).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// One-shot modes fail loudly on a corpus that cannot be read in full.
fn load_strict(corpus: &Path) -> Result<BuildOutcome, CliError> {
    let mut reader = open_corpus(corpus)?;
    let outcome = build_index(reader.by_ref());
    if let Some(e) = reader.take_error() {
        return Err(e.into());
    }
    tracing::info!(
        pages = outcome.pages_processed,
        terms = outcome.unique_terms(),
        "indexed corpus"
    );
    Ok(outcome)
}

fn run_search(corpus: &Path, query: &str, json: bool) -> Result<(), CliError> {
    let outcome = load_strict(corpus)?;
    let terms = parse_query(query);
    let results = evaluate(&outcome.index, &terms);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let report = SearchReport {
            query,
            count: results.len(),
            matches: results.iter().map(String::as_str).collect(),
            terms,
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let labels: Vec<String> = terms
        .iter()
        .map(|t| term_label(t.modifier, &t.text))
        .collect();
    eprintln!("Query: {}", labels.join(" "));

    writeln!(out, "{}", match_count(results.len()))?;
    for id in &results {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}

fn run_inspect(corpus: &Path, top: usize, json: bool) -> Result<(), CliError> {
    let outcome = load_strict(corpus)?;
    let index = &outcome.index;
    let report = verify_all(index);

    let mut frequencies: Vec<TermFrequency<'_>> = index
        .iter()
        .map(|(term, ids)| TermFrequency {
            term,
            pages: ids.len(),
        })
        .collect();
    frequencies.sort_by(|a, b| b.pages.cmp(&a.pages).then_with(|| a.term.cmp(b.term)));
    frequencies.truncate(top);

    if json {
        let inspect = InspectReport {
            pages: outcome.pages_processed,
            unique_terms: index.term_count(),
            postings: index.posting_count(),
            top_terms: frequencies,
            verification: &report,
        };
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &inspect)?;
        writeln!(out)?;
    } else {
        section_top("INDEX");
        display::row(&format!(" pages         {:>10}", outcome.pages_processed));
        display::row(&format!(" unique terms  {:>10}", index.term_count()));
        display::row(&format!(" postings      {:>10}", index.posting_count()));
        section_bot();

        section_top("TOP TERMS");
        for f in &frequencies {
            display::row(&format!(" {:<32} {:>8} pages", f.term, f.pages));
        }
        section_bot();

        section_top("INVARIANTS");
        display::row(&format!(
            " {} {} terms, {} postings checked",
            status_badge(report.is_valid()),
            report.terms_checked,
            report.postings_checked
        ));
        for v in &report.violations {
            display::row(&format!("   {}", v));
        }
        section_bot();
    }

    if !report.is_valid() {
        return Err(CliError::Verification(report.violations));
    }
    Ok(())
}
