//! Built-in phrase dictionaries.
//!
//! Curated starter lists of wordy phrases, redundancies, clichés, and
//! grammar errors, shipped in the same tab-delimited format the loader
//! consumes so user-supplied files and built-ins travel the same path.

use crate::collection::PhraseCollection;

/// Wordy expressions and their tighter replacements.
pub const WORDY_PHRASES: &str = concat!(
    "a large number of\tmany\t0\n",
    "as a matter of fact\tin fact\t0\n",
    "at all times\talways\t0\n",
    "at the present time\tnow\t0\n",
    "at this point in time\tnow\t0\n",
    "despite the fact that\talthough\t0\n",
    "due to the fact that\tbecause\t0\n",
    "for the purpose of\tto\t0\n",
    "for the reason that\tbecause\t0\n",
    "give consideration to\tconsider\t0\n",
    "has the ability to\tcan\t0\n",
    "in a timely manner\tpromptly\t0\n",
    "in close proximity to\tnear\t0\n",
    "in order to\tto\t0\n",
    "in reference to\tabout\t0\n",
    "in spite of the fact that\talthough\t0\n",
    "in the absence of\twithout\t0\n",
    "in the event that\tif\t0\n",
    "in the near future\tsoon\t0\n",
    "make a decision\tdecide\t0\n",
    "on a daily basis\tdaily\t0\n",
    "prior to\tbefore\t0\n",
    "subsequent to\tafter\t0\n",
    "take into consideration\tconsider\t0\n",
    "the majority of\tmost\t0\n",
    "with regard to\tabout\t0\n",
    "with the exception of\texcept\t0\n",
);

/// Redundant pairings.
pub const REDUNDANT_PHRASES: &str = concat!(
    "absolutely essential\tessential\t1\n",
    "advance planning\tplanning\t1\n",
    "basic fundamentals\tfundamentals\t1\n",
    "close proximity\tproximity\t1\n",
    "completely eliminate\teliminate\t1\n",
    "each and every\teach\t1\n",
    "end result\tresult\t1\n",
    "final outcome\toutcome\t1\n",
    "first and foremost\tfirst\t1\n",
    "free gift\tgift\t1\n",
    "future plans\tplans\t1\n",
    "joint collaboration\tcollaboration\t1\n",
    "new innovation\tinnovation\t1\n",
    "past history\thistory\t1\n",
    "personal opinion\topinion\t1\n",
    "revert back\trevert\t1\n",
    "sum total\ttotal\t1\n",
    "true fact\tfact\t1\n",
    "unexpected surprise\tsurprise\t1\n",
    "very unique\tunique\t1\n",
);

/// Worn-out stock phrases. No replacement to suggest; rewrite instead.
pub const CLICHE_PHRASES: &str = concat!(
    "at the end of the day\t\t2\n",
    "avoid it like the plague\t\t2\n",
    "beat around the bush\t\t2\n",
    "bite the bullet\t\t2\n",
    "break the ice\t\t2\n",
    "cut to the chase\t\t2\n",
    "easy as pie\t\t2\n",
    "hit the nail on the head\t\t2\n",
    "in the nick of time\t\t2\n",
    "let the cat out of the bag\t\t2\n",
    "low-hanging fruit\t\t2\n",
    "move the needle\t\t2\n",
    "par for the course\t\t2\n",
    "piece of cake\t\t2\n",
    "the best of both worlds\t\t2\n",
    "think outside the box\t\t2\n",
    "throw in the towel\t\t2\n",
    "tip of the iceberg\t\t2\n",
    "under the weather\t\t2\n",
    "when push comes to shove\t\t2\n",
);

/// Grammar errors. The modal-"of" rows carry a trailing exception so that
/// "could of course" style constructions are not flagged.
pub const GRAMMAR_ERROR_PHRASES: &str = concat!(
    "alot\ta lot\t3\n",
    "could of\tcould have\t3\t\tcourse\n",
    "for all intensive purposes\tfor all intents and purposes\t3\n",
    "he don't\the doesn't\t3\n",
    "i are\ti am\t3\tand;or\n",
    "irregardless\tregardless\t3\n",
    "might of\tmight have\t3\t\tcourse\n",
    "must of\tmust have\t3\t\tcourse\n",
    "on accident\tby accident\t3\n",
    "should have went\tshould have gone\t3\n",
    "should of\tshould have\t3\t\tcourse\n",
    "supposably\tsupposedly\t3\n",
    "they was\tthey were\t3\n",
    "would of\twould have\t3\t\tcourse\n",
);

/// Load every built-in list into a deduplicated, sorted collection.
pub fn builtin_collection() -> PhraseCollection {
    let mut collection = PhraseCollection::new();
    for list in [
        WORDY_PHRASES,
        REDUNDANT_PHRASES,
        CLICHE_PHRASES,
        GRAMMAR_ERROR_PHRASES,
    ] {
        collection.load_str(list, false, true);
    }
    collection.remove_duplicates();
    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::PhraseKind;
    use crate::word::Word;

    #[test]
    fn builtin_collection_loads_everything() {
        let collection = builtin_collection();
        assert!(collection.len() > 70);
    }

    #[test]
    fn builtin_collection_is_queryable() {
        let collection = builtin_collection();
        let sentence: Vec<Word> = "we met in order to talk"
            .split_whitespace()
            .map(Word::new)
            .collect();
        let index = collection.find_best_match(&sentence, 2, 4, false).unwrap();
        let entry = collection.get(index).unwrap();
        assert_eq!(entry.phrase().to_text(), "in order to");
        assert_eq!(entry.suggestion(), "to");
        assert_eq!(entry.phrase().kind(), PhraseKind::Wordy);
    }

    #[test]
    fn modal_of_rows_carry_the_course_exception() {
        let collection = builtin_collection();
        let vetoed: Vec<Word> = "you could of course stay"
            .split_whitespace()
            .map(Word::new)
            .collect();
        assert!(collection.find_best_match(&vetoed, 1, 4, false).is_none());
    }
}
