use colmap_map::{ColumnMatcher, DomainHintTable, HINT_BOOST, lexical, statistical};
use colmap_model::round_confidence;
use proptest::prelude::*;

const NAME: &str = "[a-zA-Z][a-zA-Z0-9_]{0,15}";
const WORDY_NAME: &str = "[a-z]{2,8}(_[a-z]{2,8}){0,2}";

proptest! {
    #[test]
    fn lexical_is_bounded(a in NAME, b in NAME) {
        let score = lexical::similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn lexical_self_similarity_is_one(a in ".{0,20}") {
        prop_assert_eq!(lexical::similarity(&a, &a), 1.0);
    }

    #[test]
    fn statistical_is_bounded_and_symmetric(a in NAME, b in NAME) {
        let forward = statistical::similarity(&a, &b);
        let backward = statistical::similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn statistical_self_similarity_is_one(a in WORDY_NAME) {
        prop_assert_eq!(statistical::similarity(&a, &a), 1.0);
    }

    #[test]
    fn boost_is_a_non_negative_multiple(a in NAME, b in NAME) {
        let boost = DomainHintTable::builtin().boost(&a, &b);
        prop_assert!(boost >= 0.0);
        let steps = (boost / HINT_BOOST).round();
        prop_assert!((steps * HINT_BOOST - boost).abs() < 1e-9);
    }

    #[test]
    fn boost_grows_with_more_entries(a in WORDY_NAME, b in WORDY_NAME) {
        let builtin = DomainHintTable::builtin();
        let mut previous = 0.0;
        for len in 0..=builtin.len() {
            let table = DomainHintTable::new(builtin.entries()[..len].to_vec());
            let boost = table.boost(&a, &b);
            prop_assert!(boost >= previous);
            previous = boost;
        }
    }

    #[test]
    fn one_record_per_source(
        sources in prop::collection::vec(NAME, 0..8),
        targets in prop::collection::vec(NAME, 0..8),
    ) {
        let result = ColumnMatcher::default().match_columns(&sources, &targets).unwrap();
        prop_assert_eq!(result.len(), sources.len());
        for (mapping, source) in result.iter().zip(&sources) {
            prop_assert_eq!(mapping.source_column.as_str(), source.as_str());
            prop_assert_eq!(mapping.target_column.is_some(), !targets.is_empty());
            prop_assert!(mapping.confidence >= 0.0);
        }
    }

    #[test]
    fn identical_pair_confidence(name in WORDY_NAME) {
        let matcher = ColumnMatcher::default();
        let result = matcher.match_columns(&[name.as_str()], &[name.as_str()]).unwrap();
        let expected = round_confidence(1.0 + matcher.hints().boost(&name, &name));
        prop_assert_eq!(result.mappings[0].confidence, expected);
    }

    #[test]
    fn selected_target_has_the_maximum_score(
        source in NAME,
        targets in prop::collection::vec(NAME, 1..6),
    ) {
        let matcher = ColumnMatcher::default();
        let result = matcher.match_columns(&[source.as_str()], &targets).unwrap();
        let chosen = result.mappings[0].target_column.as_ref().unwrap().as_str();
        let scores: Vec<f64> = targets
            .iter()
            .map(|t| matcher.score_pair(&source, t).composite())
            .collect();
        let max = scores.iter().copied().fold(f64::MIN, f64::max);
        let first_max = targets
            .iter()
            .zip(&scores)
            .find(|(_, s)| **s == max)
            .map(|(t, _)| t.as_str())
            .unwrap();
        prop_assert_eq!(chosen, first_max);
    }
}
