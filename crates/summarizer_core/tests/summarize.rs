use std::sync::{Arc, Once};

use pretty_assertions::assert_eq;
use summarizer_core::{
    RuleSegmenter, SegmentError, Sentence, SentenceSegmenter, StopWordSet, SummarizeError,
    Summarizer, SummarizerSettings, TRUNCATION_MARKER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(service_logging::initialize_for_tests);
}

fn summarizer_with(stop_words: &[&str]) -> Summarizer {
    init_logging();
    Summarizer::new(
        Arc::new(RuleSegmenter::new()),
        Arc::new(StopWordSet::from_list(stop_words)),
    )
}

fn long_text(sentences: usize) -> String {
    (0..sentences)
        .map(|i| {
            format!(
                "Sentence number {i} talks about topic{i} and shares a longer explanation of details here."
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn picks_highest_scoring_sentences_in_document_order() {
    let summarizer = summarizer_with(&["to"]);
    let text = "Rust programs compile to fast native code. \
                Rust ownership rules prevent data races. \
                Cats sleep often. \
                Rust tooling makes Rust programs pleasant.";

    let summary = summarizer.summarize(text, Some(300)).unwrap();

    assert_eq!(summary.selected, vec![1, 3]);
    assert_eq!(
        summary.summary,
        "Rust ownership rules prevent data races. Rust tooling makes Rust programs pleasant."
    );
    assert_eq!(summary.original_length, text.chars().count());
    assert_eq!(summary.summary_length, summary.summary.chars().count());
    assert!(!summary.truncated);
}

#[test]
fn equal_scores_prefer_earlier_sentences() {
    let summarizer = summarizer_with(&[]);
    let summary = summarizer
        .summarize("Alpha beta. Gamma delta. Epsilon zeta. Eta theta.", None)
        .unwrap();
    assert_eq!(summary.selected, vec![0, 1]);
    assert_eq!(summary.summary, "Alpha beta. Gamma delta.");
}

#[test]
fn only_stop_words_scores_everything_zero() {
    let summarizer = summarizer_with(&["the", "a", "it", "is", "was"]);
    let summary = summarizer
        .summarize("It is. It was. The a. A the. It is the.", None)
        .unwrap();
    assert_eq!(summary.selected, vec![0, 1]);
    assert_eq!(summary.summary, "It is. It was.");
}

#[test]
fn short_text_is_returned_verbatim() {
    let summarizer = summarizer_with(&[]);

    let single = summarizer.summarize("  Just one sentence here.  ", Some(300)).unwrap();
    assert_eq!(single.summary, "Just one sentence here.");
    assert_eq!(single.summary_length, single.original_length);

    // The length limit does not apply to the bypass.
    let text = "First sentence is rather long. Second one too. Third closes it.";
    let three = summarizer.summarize(text, Some(5)).unwrap();
    assert_eq!(three.summary, text);
    assert_eq!(three.summary_length, text.chars().count());
    assert_eq!(three.selected, vec![0, 1, 2]);
    assert!(!three.truncated);
}

#[test]
fn empty_input_is_rejected() {
    let summarizer = summarizer_with(&[]);
    for text in ["", "   ", "\n\t  \r\n"] {
        assert_eq!(
            summarizer.summarize(text, Some(300)),
            Err(SummarizeError::InvalidInput("Content is empty".into()))
        );
    }
}

#[test]
fn long_summary_is_truncated_with_marker() {
    let summarizer = summarizer_with(&["and", "of", "about", "a", "here"]);
    let text = long_text(12);
    assert!(text.chars().count() > 1000);

    let summary = summarizer.summarize(&text, Some(300)).unwrap();

    assert_eq!(summary.selected.len(), 5);
    assert!(summary.truncated);
    assert_eq!(summary.summary_length, 300 + TRUNCATION_MARKER.len());
    assert_eq!(summary.summary.chars().count(), summary.summary_length);
    assert!(summary.summary.ends_with(TRUNCATION_MARKER));
    assert_eq!(summary.original_length, text.chars().count());
}

#[test]
fn zero_or_missing_limit_keeps_full_summary() {
    let summarizer = summarizer_with(&[]);
    let text = long_text(12);

    let unlimited = summarizer.summarize(&text, None).unwrap();
    let zero = summarizer.summarize(&text, Some(0)).unwrap();

    assert_eq!(unlimited, zero);
    assert!(!unlimited.truncated);
    assert!(unlimited.summary_length > 300);
}

#[test]
fn output_sentence_count_follows_input_size() {
    let summarizer = summarizer_with(&[]);
    for (n, expected) in [(4, 2), (6, 3), (9, 4), (11, 4), (12, 5), (30, 5)] {
        let summary = summarizer.summarize(&long_text(n), None).unwrap();
        assert_eq!(summary.selected.len(), expected, "for {n} sentences");
    }
}

#[test]
fn summary_sentences_keep_original_order() {
    let summarizer = summarizer_with(&["the", "a", "of", "is"]);
    let text = "Zebras run. The river of the valley is wide. Lions hunt zebras at night. \
                A bird sings. Zebras drink from the river. Night falls on the valley. \
                Lions sleep. The end of the day is quiet. Zebras and lions rest.";

    let summary = summarizer.summarize(text, None).unwrap();

    assert!(summary.selected.windows(2).all(|w| w[0] < w[1]));
    let sentences = RuleSegmenter::new().segment(text.trim()).unwrap();
    let expected = summary
        .selected
        .iter()
        .map(|&i| sentences[i].text)
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(summary.summary, expected);
}

#[test]
fn multibyte_text_truncates_on_characters() {
    let summarizer = summarizer_with(&[]);
    let text = "Ünïcödé façade naïve résumé. Ça va très bien. Über öffentliche Straßen. \
                Crème brûlée für alle. Smørrebrød på bordet.";

    let summary = summarizer.summarize(text, Some(10)).unwrap();

    assert!(summary.truncated);
    assert_eq!(summary.summary_length, 13);
    assert_eq!(summary.summary.chars().count(), 13);
}

#[test]
fn settings_change_bypass_and_output_size() {
    let summarizer = summarizer_with(&[]).with_settings(SummarizerSettings {
        short_text_sentences: 1,
        sentences_per_output: 10,
        max_output_sentences: 1,
    });
    let summary = summarizer
        .summarize("Apples grow. Apples apples fall.", None)
        .unwrap();
    assert_eq!(summary.selected, vec![1]);
    assert_eq!(summary.summary, "Apples apples fall.");
}

struct FailingSegmenter;

impl SentenceSegmenter for FailingSegmenter {
    fn segment<'a>(&self, _text: &'a str) -> Result<Vec<Sentence<'a>>, SegmentError> {
        Err(SegmentError::BadBoundary { offset: 3 })
    }
}

struct SilentSegmenter;

impl SentenceSegmenter for SilentSegmenter {
    fn segment<'a>(&self, _text: &'a str) -> Result<Vec<Sentence<'a>>, SegmentError> {
        Ok(Vec::new())
    }
}

#[test]
fn segmentation_failures_surface_as_internal_errors() {
    init_logging();
    let stop_words = Arc::new(StopWordSet::empty());

    let failing = Summarizer::new(Arc::new(FailingSegmenter), stop_words.clone());
    match failing.summarize("Some text.", None) {
        Err(SummarizeError::Internal(message)) => assert!(message.contains("byte 3")),
        other => panic!("expected internal error, got {other:?}"),
    }

    let silent = Summarizer::new(Arc::new(SilentSegmenter), stop_words);
    assert!(matches!(
        silent.summarize("Some text.", None),
        Err(SummarizeError::Internal(_))
    ));
}
