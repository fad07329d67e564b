//! End-to-end tests running whole lines through a session

use ngc_core::{
    AnalysisSession, Config, Conversions, DiscardClass, Discards, PartialPolicy, SummaryCategory,
    WindowMode,
};

fn session(config: Config) -> AnalysisSession {
    AnalysisSession::new(config)
}

#[test]
fn test_banana_bigrams() {
    let mut session = session(Config::builder().length(2).build().unwrap());
    session.process_line("banana");

    let report = session.report();
    let rows: Vec<_> = report
        .ngrams
        .iter()
        .map(|row| (row.ngram.as_str(), row.count))
        .collect();
    assert_eq!(rows, vec![("an", 2), ("na", 2), ("a", 1), ("ba", 1)]);
    assert_eq!(report.total_ngrams, 6);
}

#[test]
fn test_fixed_block_pairs() {
    let config = Config::builder()
        .length(2)
        .window(WindowMode::FixedBlock)
        .build()
        .unwrap();
    let mut session = session(config);
    session.process_line("AAAA");

    let report = session.report();
    assert_eq!(report.ngrams.len(), 1);
    assert_eq!(report.ngrams[0].ngram, "AA");
    assert_eq!(report.ngrams[0].count, 2);
    assert_eq!(report.ngrams[0].percentage, 100.0);
}

#[test]
fn test_discard_then_squeeze() {
    let config = Config::builder()
        .discards(Discards::from_codes("dp").unwrap())
        .conversions(Conversions::from_codes("s").unwrap())
        .build()
        .unwrap();
    let mut session = session(config);
    assert_eq!(session.process_line("Room 101, now!"), "Room now");

    let config = Config::builder()
        .discards(Discards::from_codes("dp").unwrap())
        .build()
        .unwrap();
    let mut session = self::session(config);
    assert_eq!(session.process_line("Room 101, now!"), "Room  now");
}

#[test]
fn test_single_ngram_metric_is_undefined() {
    let config = Config::builder().length(5).summary(true).build().unwrap();
    let mut session = session(config);
    session.process_line("hello");

    let report = session.report();
    assert_eq!(report.total_ngrams, 1);
    assert_eq!(report.kappa_plaintext, None);
    assert_eq!(report.coincidence_index, None);
}

#[test]
fn test_letter_frequencies_with_summary() {
    let config = Config::builder()
        .conversions(Conversions::from_codes("al").unwrap())
        .discard(DiscardClass::Punctuation)
        .summary(true)
        .build()
        .unwrap();
    let mut session = session(config);
    session.process_line("Élan, élan!");

    let report = session.report();
    // "elan elan": e2 l2 a2 n2 space1
    assert_eq!(report.total_ngrams, 9);
    assert_eq!(report.summary_count("Lower case letters"), Some(8));
    assert_eq!(report.summary_count("Spaces"), Some(1));
    assert_eq!(report.summary_count("All unicode characters"), Some(0));
    assert_eq!(report.summary_count("All characters"), Some(9));

    // 4·(2·1) / (9·8), over an alphabet of 26 lower case letters + 1 space
    let kappa = report.kappa_plaintext.unwrap();
    assert!((kappa - 8.0 / 72.0).abs() < 1e-12);
    assert!((report.coincidence_index.unwrap() - kappa * 27.0).abs() < 1e-12);
}

#[test]
fn test_unicode_separator_zeroes_the_index() {
    let config = Config::builder().summary(true).build().unwrap();
    let mut session = session(config);
    session.process_line("aa\u{2003}aa");

    let report = session.report();
    assert_eq!(report.summary_count("Unicode separators"), Some(1));
    assert!(report.kappa_plaintext.unwrap() > 0.0);
    assert_eq!(report.coincidence_index, Some(0.0));
}

#[test]
fn test_word_mode_trigrams_with_justify() {
    let config = Config::builder()
        .length(3)
        .word_boundary(true)
        .partial(PartialPolicy::Justify)
        .window(WindowMode::FixedBlock)
        .build()
        .unwrap();
    let mut session = session(config);
    session.process_line("the cat sat upon it");

    let tally = session.tally();
    assert_eq!(tally.occurrences.count("the"), 1);
    assert_eq!(tally.occurrences.count("upo"), 1);
    assert_eq!(tally.occurrences.count("n  "), 1);
    assert_eq!(tally.occurrences.count("it "), 1);
    assert_eq!(tally.occurrences.total(), 6);
    assert_eq!(tally.summary.all_characters(), 15);
}

#[test]
fn test_summary_categories_partition_characters() {
    let config = Config::builder().summary(true).build().unwrap();
    let mut session = session(config);
    session.process_line("Mixed: 12 'quoted' [x]\t\u{7}ü€½\u{301}");

    let summary = &session.tally().summary;
    let leaf_total: u64 = summary.iter().map(|(_, count)| count).sum();
    assert_eq!(leaf_total, summary.all_characters());

    let unicode_total: u64 = summary
        .iter()
        .filter(|(category, _)| category.is_unicode())
        .map(|(_, count)| count)
        .sum();
    assert_eq!(unicode_total, summary.all_unicode());
    assert_eq!(summary.count(SummaryCategory::Control), 1);
    assert_eq!(summary.count(SummaryCategory::OtherSpaces), 1);
}

#[test]
fn test_zero_length_still_counts_characters() {
    let config = Config::builder().length(0).summary(true).build().unwrap();
    let mut session = session(config);
    session.process_line("abc");

    let report = session.report();
    assert!(report.ngrams.is_empty());
    assert_eq!(report.summary_count("All characters"), Some(3));
    assert_eq!(report.kappa_plaintext, None);
}
