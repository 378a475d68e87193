//! Integration tests - documents and call logs on the real disk

mod common;

use chrono::NaiveDateTime;
use common::{split_line, Workspace};
use docprobe::{CallArgs, DocError, Operation, OperationLogs, TIMESTAMP_FORMAT};
use std::sync::Arc;
use std::thread;

const SAMPLE: &str = "Это тестовый документ.\nОн содержит несколько слов.";

#[test]
fn test_sample_document_end_to_end() {
    let ws = Workspace::new();
    ws.write("sample.txt", SAMPLE);
    let mut doc = ws.document("sample.txt", "document_processor.log");

    assert!(doc.load_file().unwrap());
    assert_eq!(doc.word_count().unwrap(), 7);
    assert!(doc.search_word("документ").unwrap());
    assert!(!doc.search_word("Python").unwrap());
    assert!(doc.search_word("тестовый").unwrap());

    doc.add_text("Добавленный текст для примера.").unwrap();
    assert_eq!(doc.word_count().unwrap(), 11);

    let lines = ws.lines("document_processor.log");
    let names: Vec<&str> = lines
        .iter()
        .map(|l| {
            let rest = split_line(l).1;
            rest.trim_start_matches("Function: ").split(" - ").next().unwrap()
        })
        .collect();
    assert_eq!(
        names,
        ["new", "load_file", "word_count", "search_word", "search_word", "search_word", "add_text", "word_count"]
    );
    assert!(lines[3].ends_with("Arguments: args=(\"документ\",), kwargs={} - Result: true"));
    assert!(lines[7].ends_with("Result: 11"));

    // the document file itself is never written back
    assert_eq!(std::fs::read_to_string(ws.path("sample.txt")).unwrap(), SAMPLE);
}

#[test]
fn test_every_call_adds_one_line() {
    let ws = Workspace::new();
    ws.write("notes.txt", "one two three");
    let mut doc = ws.document("notes.txt", "calls.log");
    doc.load_file().unwrap();

    for _ in 0..25 {
        doc.word_count().unwrap();
    }

    // new + load_file + 25 word_count
    assert_eq!(ws.lines("calls.log").len(), 27);
}

#[test]
fn test_log_is_appended_across_documents() {
    let ws = Workspace::new();
    ws.write("a.txt", "a");
    ws.write("b.txt", "b b");

    ws.document("a.txt", "calls.log").load_file().unwrap();
    ws.document("b.txt", "calls.log").load_file().unwrap();

    assert_eq!(ws.lines("calls.log").len(), 4);
}

#[test]
fn test_timestamps_parse() {
    let ws = Workspace::new();
    ws.write("notes.txt", "x");
    let mut doc = ws.document("notes.txt", "calls.log");
    doc.load_file().unwrap();

    for line in ws.lines("calls.log") {
        let (timestamp, rest) = split_line(&line);
        assert_eq!(timestamp.len(), 19, "bad timestamp in {:?}", line);
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert!(rest.starts_with("Function: "));
    }
}

#[test]
fn test_missing_file_scenario() {
    let ws = Workspace::new();
    let mut doc = ws.document("ghost.txt", "calls.log");

    assert!(!doc.load_file().unwrap());
    assert_eq!(doc.content(), Some(""));
    assert_eq!(doc.word_count().unwrap(), 0);
    assert!(!doc.search_word("anything").unwrap());

    let lines = ws.lines("calls.log");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with("Function: load_file - Arguments: args=(), kwargs={} - Result: false"));
    assert!(!ws.path("ghost.txt").exists());
}

#[test]
fn test_invalid_utf8_is_an_error_and_not_logged() {
    let ws = Workspace::new();
    std::fs::write(ws.path("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();
    let mut doc = ws.document("bin.dat", "calls.log");

    let err = doc.load_file().unwrap_err();
    assert!(matches!(err, DocError::Encoding { .. }));
    assert_eq!(doc.content(), None);
    // only the constructor was recorded
    assert_eq!(ws.lines("calls.log").len(), 1);
}

#[test]
fn test_unwritable_log_fails_the_call() {
    let ws = Workspace::new();
    ws.write("notes.txt", "x");
    // a directory cannot be opened for append
    std::fs::create_dir(ws.path("calls.log")).unwrap();

    let err = docprobe::Document::builder(ws.path("notes.txt"))
        .fs(Arc::clone(&ws.fs))
        .logs(OperationLogs::shared(ws.log("calls.log")))
        .build()
        .unwrap_err();
    assert_eq!(err.path, ws.path("calls.log"));
}

#[test]
fn test_split_routes_on_disk() {
    let ws = Workspace::new();
    ws.write("notes.txt", "alpha beta");
    let logs = OperationLogs::shared(ws.log("main.log"))
        .route(Operation::SearchWord, ws.log("search.log"));
    let doc = docprobe::Document::builder(ws.path("notes.txt"))
        .fs(Arc::clone(&ws.fs))
        .logs(logs)
        .build()
        .unwrap();

    doc.search_word("beta").unwrap();
    doc.word_count().unwrap();

    assert_eq!(ws.lines("main.log").len(), 2);
    assert_eq!(ws.lines("search.log").len(), 1);
}

#[test]
fn test_concurrent_wrapped_calls_do_not_interleave() {
    let ws = Workspace::new();
    let log = ws.log("shared.log");

    let handles: Vec<_> = (0..6)
        .map(|t| {
            let log = log.clone();
            thread::spawn(move || {
                let echo = log.wrap("echo", |s: String| s.len());
                for i in 0..40 {
                    let payload = format!("{}-{}-{}", t, i, "y".repeat(300));
                    echo.call(payload).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let lines = ws.lines("shared.log");
    assert_eq!(lines.len(), 240);
    for line in &lines {
        assert!(line.contains(" - Function: echo - Arguments: args="), "corrupt line {:?}", line);
        let len: usize = line.rsplit("Result: ").next().unwrap().parse().unwrap();
        assert!(len == 304 || len == 305, "unexpected result in {:?}", line);
    }
}

#[test]
fn test_wrapped_function_with_keywords() {
    let ws = Workspace::new();
    let log = ws.log("kw.log");

    let result = log
        .record(
            "scale",
            CallArgs::new(&(3,)).kwarg("factor", &2).kwarg("label", "x"),
            || 6,
        )
        .unwrap();
    assert_eq!(result, 6);

    let lines = ws.lines("kw.log");
    assert!(lines[0].ends_with("Function: scale - Arguments: args=(3,), kwargs={factor: 2, label: \"x\"} - Result: 6"));
}
