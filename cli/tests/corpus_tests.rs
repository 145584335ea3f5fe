use search_cli::{open_input, render_results, run, Cli, Corpus, OutputFormat};
use std::fs;
use std::io::{BufReader, Cursor};
use tempfile::tempdir;

const INPUT: &str = "the a in\n2\ncat sat\ndog ran in the house\ncat dog\n";

#[test]
fn reads_console_format() {
    let corpus = Corpus::read_from(Cursor::new(INPUT)).unwrap();
    assert_eq!(corpus.stop_words, "the a in");
    assert_eq!(corpus.document_count, 2);
    assert_eq!(corpus.documents, vec!["cat sat", "dog ran in the house"]);
    assert_eq!(corpus.query, "cat dog");
}

#[test]
fn end_to_end_text_output() {
    let server = Corpus::read_from(Cursor::new(INPUT)).unwrap().build_server();
    let results = server.find_top_documents("cat dog");
    let out = render_results(&results, OutputFormat::Text).unwrap();
    assert_eq!(
        out,
        "{ document_id = 0, relevance = 0.693147 }\n{ document_id = 1, relevance = 0.173287 }\n"
    );
}

#[test]
fn json_output() {
    let server = Corpus::read_from(Cursor::new(INPUT)).unwrap().build_server();
    let out = render_results(&server.find_top_documents("cat -dog"), OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["document_id"].as_u64(), Some(0));
}

#[test]
fn short_input_stops_at_end_of_input() {
    let corpus = Corpus::read_from(Cursor::new("\n3\nonly one\n")).unwrap();
    assert_eq!(corpus.document_count, 3);
    assert_eq!(corpus.documents, vec!["only one"]);
    assert_eq!(corpus.query, "");
    assert!(corpus.build_server().find_top_documents("only").iter().all(|r| r.relevance == 0.0));
}

#[test]
fn crlf_line_endings() {
    let corpus = Corpus::read_from(Cursor::new("a\r\n1\r\ncat a\r\ncat\r\n")).unwrap();
    assert_eq!(corpus.documents, vec!["cat a"]);
    assert_eq!(corpus.query, "cat");
}

#[test]
fn bad_document_count_is_an_error() {
    let err = Corpus::read_from(Cursor::new("the\nmany\n")).unwrap_err();
    assert!(err.to_string().contains("invalid document count"));
}

#[test]
fn reads_corpus_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(&path, INPUT).unwrap();
    let corpus = Corpus::read_from(BufReader::new(fs::File::open(&path).unwrap())).unwrap();
    let results = corpus.build_server().find_top_documents(&corpus.query);
    assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn huge_document_count_without_documents() {
    let corpus = Corpus::read_from(Cursor::new("the\n4000000000\n")).unwrap();
    assert_eq!(corpus.document_count, 4_000_000_000);
    assert!(corpus.documents.is_empty());
    assert_eq!(corpus.query, "");
    assert!(corpus.build_server().find_top_documents("cat").is_empty());
}

#[test]
fn run_uses_corpus_query_by_default() {
    let out = run(&Cli::default(), Cursor::new(INPUT)).unwrap();
    assert_eq!(
        out,
        "{ document_id = 0, relevance = 0.693147 }\n{ document_id = 1, relevance = 0.173287 }\n"
    );
}

#[test]
fn query_override_keeps_corpus_query_weights() {
    // "dog" was weighted while indexing, so it keeps its tf of 0.25
    let cli = Cli { query: Some("dog".into()), ..Cli::default() };
    let out = run(&cli, Cursor::new(INPUT)).unwrap();
    assert_eq!(out, "{ document_id = 1, relevance = 0.173287 }\n");

    // "sat" was not in the corpus query, so it was indexed with a tf of 0
    let cli = Cli { query: Some("sat".into()), ..Cli::default() };
    let out = run(&cli, Cursor::new(INPUT)).unwrap();
    assert_eq!(out, "{ document_id = 0, relevance = 0 }\n");
}

#[test]
fn run_json_format() {
    let cli = Cli { format: OutputFormat::Json, ..Cli::default() };
    let out = run(&cli, Cursor::new(INPUT)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn dump_index_prints_term_frequencies() {
    let cli = Cli { dump_index: true, ..Cli::default() };
    let out = run(&cli, Cursor::new(INPUT)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["cat"]["0"].as_f64(), Some(1.0));
    assert_eq!(json["dog"]["1"].as_f64(), Some(0.25));
    assert_eq!(json["house"]["1"].as_f64(), Some(0.0));
    assert!(json.get("the").is_none());
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = open_input(Some(path.to_str().unwrap())).err().unwrap();
    assert!(err.to_string().contains("failed to open"));
}

#[test]
fn runs_from_input_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(&path, INPUT).unwrap();
    let cli = Cli { input: Some(path.to_string_lossy().into_owned()), query: Some("cat".into()), ..Cli::default() };
    let out = run(&cli, open_input(cli.input.as_deref()).unwrap()).unwrap();
    assert_eq!(out, "{ document_id = 0, relevance = 0.693147 }\n");
}
