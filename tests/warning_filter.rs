//! Not-found export warning suppression, driven by the warning corpus.

mod fixtures;

use fixtures::{default_host, WarningCorpus};
use serde_json::json;
use tsb_bundler::BuildWarning;

fn corpus_warnings(corpus: &WarningCorpus) -> Vec<BuildWarning> {
    corpus
        .cases
        .iter()
        .map(|case| BuildWarning::new(&case.name, &case.message))
        .collect()
}

#[test]
fn test_corpus_with_filter() {
    let corpus = WarningCorpus::load().expect("Failed to load corpus");
    let mut host = default_host(Some(json!({"ignoreNotFoundWarnings": true})));
    host.setup().unwrap();

    for case in &corpus.cases {
        let warning = BuildWarning::new(&case.name, &case.message);
        assert_eq!(
            host.settings().is_warning_ignored(&warning),
            case.suppressed,
            "case {}",
            case.id
        );
    }

    let report = host.filter_warnings(corpus_warnings(&corpus));
    let expected = corpus.cases.iter().filter(|c| c.suppressed).count();
    assert_eq!(report.suppressed.len(), expected);
    assert_eq!(report.reported.len(), corpus.cases.len() - expected);
}

#[test]
fn test_corpus_without_filter() {
    let corpus = WarningCorpus::load().expect("Failed to load corpus");
    let mut host = default_host(None);
    host.setup().unwrap();

    let report = host.filter_warnings(corpus_warnings(&corpus));
    assert!(report.suppressed.is_empty());
    assert_eq!(report.reported.len(), corpus.cases.len());
}

#[test]
fn test_truthy_option_installs_filter() {
    let mut host = default_host(Some(json!({"ignoreNotFoundWarnings": 1})));
    host.setup().unwrap();
    assert_eq!(host.settings().build.warning_ignore_filters.len(), 1);

    let mut host = default_host(Some(json!({"ignoreNotFoundWarnings": ""})));
    host.setup().unwrap();
    assert!(host.settings().build.warning_ignore_filters.is_empty());
}
