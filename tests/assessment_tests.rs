use keygauge::assessment::Assessment;
use keygauge::config::AssessConfig;
use keygauge::layouts::{ortho_split_spec, KnownLayout};
use std::io::Cursor;
use std::io::Write;

fn assess(corpus: &str) -> Assessment {
    let mut assessment = Assessment::from_layout(KnownLayout::Qwerty.layout().unwrap());
    assessment.run_on(Cursor::new(corpus.to_string())).unwrap();
    assessment
}

#[test]
fn test_reports_in_declaration_order() {
    let assessment = assess("hello world");
    let names: Vec<&str> = assessment.results().iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "Hand Balance",
            "Row percentage",
            "Cumulative Key Ease",
            "Repeated Fingers",
            "Hand Alternation",
        ]
    );
}

#[test]
fn test_flat_views_stay_aligned() {
    let assessment = assess("hello world");
    let keys = assessment.flat_keys();
    let values = assessment.flat_values();

    assert_eq!(
        keys,
        vec!["ratio", "home", "top", "bottom", "score", "repeats", "switches"]
    );
    assert_eq!(keys.len(), values.len());
}

#[test]
fn test_newlines_are_skipped() {
    // Newlines reach the trackers as literal characters but have no
    // coordinate, so both corpora must agree.
    let with_newlines = assess("ab\ncd\n");
    let without = assess("abcd");
    assert_eq!(with_newlines.flat_values(), without.flat_values());
}

#[test]
fn test_runs_are_reproducible() {
    let mut assessment = Assessment::from_layout(KnownLayout::Dvorak.layout().unwrap());
    let corpus = "the quick brown fox jumps over the lazy dog";

    assessment.run_on(Cursor::new(corpus)).unwrap();
    let first = assessment.flat_values();
    assessment.run_on(Cursor::new(corpus)).unwrap();
    let second = assessment.flat_values();

    assert_eq!(first, second, "fresh trackers per run");
}

#[test]
fn test_spaces_only_corpus_yields_sentinels() {
    let assessment = assess("     ");
    let values = assessment.flat_values();

    // ratio, home, top, bottom are undefined with nothing observed.
    assert!(values[0].is_nan());
    assert!(values[1].is_nan());
    assert!(values[2].is_nan());
    assert!(values[3].is_nan());
    // score, repeats, switches stay at zero.
    assert_eq!(&values[4..], &[0.0, 0.0, 0.0]);
}

#[test]
fn test_run_on_path_matches_in_memory_run() {
    let corpus = "assessments read files and cursors alike\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(corpus.as_bytes()).unwrap();
    file.flush().unwrap();

    let mut from_path = Assessment::from_layout(KnownLayout::Qwerty.layout().unwrap());
    from_path.run_on_path(file.path()).unwrap();

    assert_eq!(from_path.flat_values(), assess(corpus).flat_values());
}

#[test]
fn test_missing_corpus_file_errors() {
    let mut assessment = Assessment::from_layout(KnownLayout::Qwerty.layout().unwrap());
    assert!(assessment.run_on_path("/definitely/not/here.txt").is_err());
}

#[test]
fn test_full_report_renders_all_trackers() {
    let assessment = assess("hello world");
    let rendered = assessment.full_report();

    assert!(rendered.contains("| Hand Balance "));
    assert!(rendered.contains("ratio:"));
    assert!(rendered.contains("switches:"));
}

#[test]
fn test_reports_serialize_to_json() {
    let assessment = assess("hello");
    let json = serde_json::to_string(assessment.results()).unwrap();

    assert!(json.contains("\"name\":\"Hand Balance\""));
    assert!(json.contains("\"entries\""));
}

#[test]
fn test_custom_config_home_row() {
    // Measuring from the top row reclassifies nothing in the trackers but
    // must flow into the context-derived distances; the assessment itself
    // still runs cleanly.
    let config = AssessConfig {
        home_row: 0,
        ..Default::default()
    };
    let mut assessment = Assessment::from_layout(KnownLayout::Qwerty.layout().unwrap())
        .with_config(config);
    assessment.run_on(Cursor::new("abc")).unwrap();
    assert_eq!(assessment.results().len(), 5);
}

#[test]
fn test_assessment_new_builds_layout() {
    let mut assessment =
        Assessment::new(&ortho_split_spec(), KnownLayout::Colemak.placement()).unwrap();
    assessment.run_on(Cursor::new("arst")).unwrap();
    assert_eq!(assessment.results().len(), 5);
}

#[test]
fn test_ease_mismatched_shape_fails_run() {
    // A custom grid whose shape the default ease table cannot cover.
    let spec = vec![keygauge::geometry::RowSpec::Split { left: 1, right: 1 }];
    let mut assessment = Assessment::new(&spec, "a b").unwrap();
    assert!(assessment.run_on(Cursor::new("ab")).is_err());
}
