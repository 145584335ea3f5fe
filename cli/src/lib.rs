use anyhow::{Context, Result};
use clap::Parser;
use search_core::{DocId, RankedResult, SearchServer};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[derive(Parser, Debug, Default)]
#[command(name = "search-server")]
#[command(about = "Rank a small corpus against a query with TF-IDF", long_about = None)]
pub struct Cli {
    /// Read the corpus from this file instead of stdin
    #[arg(long)]
    pub input: Option<String>,
    /// Rank with this query instead of the one read from the corpus
    #[arg(long)]
    pub query: Option<String>,
    /// Output format for ranked results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print the inverted index as JSON instead of searching
    #[arg(long, default_value_t = false)]
    pub dump_index: bool,
}

/// Open `--input` if given, otherwise stdin.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Load the corpus, index it with its own query and render either the ranked
/// results or the index dump.
pub fn run<R: BufRead>(cli: &Cli, reader: R) -> Result<String> {
    let corpus = Corpus::read_from(reader)?;
    let server = corpus.build_server();

    if cli.dump_index {
        return Ok(serde_json::to_string_pretty(server.index())? + "\n");
    }
    let query = cli.query.as_deref().unwrap_or(&corpus.query);
    let results = server.find_top_documents(query);
    tracing::info!(query, hits = results.len(), "search complete");
    render_results(&results, cli.format)
}

/// Everything read from the console input: stop words, the document count,
/// the documents themselves and the query used to weight them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub stop_words: String,
    pub document_count: u32,
    pub documents: Vec<String>,
    pub query: String,
}

impl Corpus {
    /// Read the line-oriented corpus format. Reading documents stops at end of
    /// input, a missing query line reads as empty, and a malformed document
    /// count is an error. The count is kept as given either way.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let mut next_line = || -> Result<Option<String>> {
            match lines.next() {
                Some(line) => Ok(Some(line.context("failed to read input line")?.trim_end_matches('\r').to_string())),
                None => Ok(None),
            }
        };

        let stop_words = next_line()?.unwrap_or_default();
        let count_line = next_line()?.unwrap_or_default();
        let document_count: u32 = count_line
            .trim()
            .parse()
            .with_context(|| format!("invalid document count: {count_line:?}"))?;

        let mut documents = Vec::new();
        while documents.len() < document_count as usize {
            match next_line()? {
                Some(text) => documents.push(text),
                None => {
                    tracing::warn!(document_count, read = documents.len(), "input ended before all documents were read");
                    break;
                }
            }
        }
        let query = next_line()?.unwrap_or_default();

        tracing::info!(document_count, stop_words = stop_words.len(), "read corpus");
        Ok(Self { stop_words, document_count, documents, query })
    }

    /// Configure a server and index every document, weighted by `self.query`.
    pub fn build_server(&self) -> SearchServer {
        let mut server = SearchServer::new();
        server.set_stop_words(&self.stop_words);
        server.set_document_count(self.document_count);
        let scoring_query = server.parse_query(&self.query);
        for (doc_id, text) in self.documents.iter().enumerate() {
            server.add_document(doc_id as DocId, text, &scoring_query);
        }
        tracing::info!(num_docs = self.documents.len(), num_terms = server.index().num_terms(), "index build complete");
        server
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render_results(results: &[RankedResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results.iter().map(|r| format_result(r) + "\n").collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)? + "\n"),
    }
}

pub fn format_result(result: &RankedResult) -> String {
    format!("{{ document_id = {}, relevance = {} }}", result.id, format_relevance(result.relevance))
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Render like a default-configured C++ stream: six significant digits,
/// trailing zeros dropped, scientific notation for very small or large values.
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value == 0.0 { "0".to_string() } else { value.to_string() };
    }
    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= SIGNIFICANT_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs());
    }
    let decimals = (SIGNIFICANT_DIGITS - 1 - exp).max(0) as usize;
    trim_zeros(&format!("{value:.decimals$}")).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}
