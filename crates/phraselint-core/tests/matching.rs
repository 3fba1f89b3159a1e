//! End-to-end behavior of the phrase dictionary and matcher.

use phraselint_core::checker::check_phrases;
use phraselint_core::phrase::{Phrase, PhraseKind};
use phraselint_core::word::Word;
use phraselint_core::PhraseCollection;

fn words(text: &str) -> Vec<Word> {
    text.split_whitespace().map(Word::new).collect()
}

fn dictionary(buffer: &str) -> PhraseCollection {
    let mut collection = PhraseCollection::new();
    collection.load_str(buffer, true, false);
    collection
}

#[test]
fn phrase_order_is_a_strict_total_order() {
    // Transitivity over a mixed bag of lengths and prefixes.
    let mut phrases: Vec<Phrase> = [
        "in order to",
        "in order",
        "a",
        "zebra crossing",
        "in",
        "a b c d",
        "in other words",
        "a b",
    ]
    .iter()
    .map(|t| Phrase::parse(t).unwrap())
    .collect();
    phrases.sort();

    for window in phrases.windows(3) {
        let (a, b, c) = (&window[0], &window[1], &window[2]);
        assert!(a <= b && b <= c && a <= c);
    }
    // Irreflexivity of the strict order.
    for p in &phrases {
        assert_eq!(p.cmp(p), std::cmp::Ordering::Equal);
    }
}

#[test]
fn strict_prefix_sorts_before_extension() {
    let short = Phrase::parse("in order").unwrap();
    let long = Phrase::parse("in order to").unwrap();
    assert!(short < long);
    assert!(long > short);
}

#[test]
fn equality_ignores_classification_and_exceptions() {
    let a = Phrase::parse("very unique").unwrap();
    let b = Phrase::parse("very unique")
        .unwrap()
        .with_kind(PhraseKind::Redundant)
        .with_preceding_exceptions(words("not"))
        .with_trailing_exceptions(words("situation"));
    assert_eq!(a, b);
}

#[test]
fn longest_match_wins_within_a_cluster() {
    let collection = dictionary("in order\t\nin order to\tto\n");
    let text = words("in order to succeed");
    let index = collection.find_best_match(&text, 0, 4, false).unwrap();
    assert_eq!(
        collection.get(index).unwrap().phrase().to_text(),
        "in order to"
    );
}

#[test]
fn preceding_exception_vetoes_only_mid_sentence() {
    let collection = dictionary("i are\ti am\t3\tand\n");

    let vetoed = words("and i are going");
    assert!(collection.find_best_match(&vetoed, 1, 3, false).is_none());

    let start = words("i are going");
    assert!(collection.find_best_match(&start, 0, 3, false).is_some());

    let unrelated = words("when i are going");
    assert!(collection.find_best_match(&unrelated, 1, 3, false).is_some());
}

#[test]
fn trailing_exception_vetoes_only_the_excepted_word() {
    let collection = dictionary("could of\tcould have\t3\t\tcourse\n");

    let vetoed = words("could of course");
    assert!(collection.find_best_match(&vetoed, 0, 3, false).is_none());

    let error = words("could of going");
    assert!(collection.find_best_match(&error, 0, 3, false).is_some());
}

#[test]
fn phrases_longer_than_remaining_text_never_match() {
    let collection = dictionary("in order to\tto\n");
    let text = words("we met in order");
    // Two words remain at "in"; the three-word phrase cannot match.
    assert!(collection.find_best_match(&text, 2, 2, false).is_none());
}

#[test]
fn deduplication_is_idempotent() {
    let mut collection = dictionary(
        "in order to\tto\nin order to\tso as to\nvery unique\tunique\t1\nin order to\t\t2\n",
    );
    collection.remove_duplicates();
    let once: Vec<String> = collection
        .entries()
        .iter()
        .map(|e| format!("{}|{}", e.phrase().to_text(), e.suggestion()))
        .collect();

    collection.remove_duplicates();
    let twice: Vec<String> = collection
        .entries()
        .iter()
        .map(|e| format!("{}|{}", e.phrase().to_text(), e.suggestion()))
        .collect();

    assert_eq!(once, twice);
    assert_eq!(collection.len(), 2);
}

#[test]
fn serialization_round_trips_to_equal_entries() {
    let mut original = dictionary(
        "could of\tcould have\t3\t\tcourse\n\
         for the purpose of\tto\t0\n\
         i are\ti am\t3\tand;or\n\
         very unique\tunique\t1\n",
    );
    original.remove_duplicates();

    let serialized = original.to_tab_delimited();
    let mut reloaded = PhraseCollection::new();
    reloaded.load_str(&serialized, true, false);

    assert_eq!(original.len(), reloaded.len());
    for (a, b) in original.entries().iter().zip(reloaded.entries()) {
        assert_eq!(a.phrase(), b.phrase());
        assert_eq!(a.phrase().kind(), b.phrase().kind());
        assert_eq!(a.suggestion(), b.suggestion());
        assert_eq!(
            a.phrase().preceding_exceptions(),
            b.phrase().preceding_exceptions()
        );
        assert_eq!(
            a.phrase().trailing_exceptions(),
            b.phrase().trailing_exceptions()
        );
    }
}

#[test]
fn end_to_end_scenario() {
    let collection = dictionary(
        "for the purpose of\tto\t0\n\
         in spite of the fact that\talthough\t0\n\
         very unique\tunique\t1\n",
    );
    let sentence = words("he wrote it for the purpose of clarity");

    // At "for" (index 3) the four-word phrase must be found.
    let index = collection
        .find_best_match(&sentence, 3, sentence.len() - 3, false)
        .unwrap();
    let entry = collection.get(index).unwrap();
    assert_eq!(entry.phrase().to_text(), "for the purpose of");
    assert_eq!(entry.suggestion(), "to");
    assert_eq!(entry.phrase().kind(), PhraseKind::Wordy);

    // At "wrote" (index 1) nothing matches.
    assert!(collection
        .find_best_match(&sentence, 1, sentence.len() - 1, false)
        .is_none());
}

#[test]
fn checker_reports_against_the_same_dictionary() {
    let collection = dictionary(
        "for the purpose of\tto\t0\n\
         in spite of the fact that\talthough\t0\n\
         very unique\tunique\t1\n",
    );
    let report = check_phrases(
        "He wrote it for the purpose of clarity. The design is very unique.",
        &collection,
        false,
    )
    .unwrap();

    assert_eq!(report.total_issues, 2);
    assert_eq!(report.wordy_count, 1);
    assert_eq!(report.redundant_count, 1);
    assert_eq!(report.issues[0].sentence_num, 1);
    assert_eq!(report.issues[1].sentence_num, 2);
}
