use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::test_utils::test_helpers::{bank_with, sample_bank};
use proptest::prelude::*;

fn ids(questions: &[Question]) -> Vec<&str> {
    questions.iter().map(|q| q.id.as_str()).collect()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn test_mode_parse() {
    assert_eq!(QuizMode::parse("random_100"), QuizMode::Random100);
    assert_eq!(QuizMode::parse("random_20"), QuizMode::Random20);
    assert_eq!(QuizMode::parse("random_10"), QuizMode::Random10);
    assert_eq!(QuizMode::parse("all"), QuizMode::All);
    assert_eq!(
        QuizMode::parse("everything"),
        QuizMode::Unrecognized("everything".to_string())
    );
}

#[test]
fn test_mode_as_str_matches_parse() {
    for mode in ["random_100", "random_20", "random_10", "all", "custom"] {
        assert_eq!(QuizMode::parse(mode).as_str(), mode);
    }
}

#[test]
fn test_mode_sample_sizes() {
    assert_eq!(QuizMode::Random100.sample_size(), Some(100));
    assert_eq!(QuizMode::Random20.sample_size(), Some(20));
    assert_eq!(QuizMode::Random10.sample_size(), Some(10));
    assert_eq!(QuizMode::All.sample_size(), None);
    assert_eq!(QuizMode::parse("x").sample_size(), Some(10));
}

#[test]
fn test_only_random_100_and_20_are_global() {
    assert!(QuizMode::Random100.is_global());
    assert!(QuizMode::Random20.is_global());
    assert!(!QuizMode::Random10.is_global());
    assert!(!QuizMode::All.is_global());
}

#[test]
fn test_all_returns_subject_in_bank_order() {
    let bank = sample_bank();
    let selected = select(&bank, &QuizMode::All, Some("A"), None, &mut rng());
    assert_eq!(ids(&selected), vec!["1", "3", "5"]);
}

#[test]
fn test_all_for_unknown_subject_is_empty() {
    let bank = sample_bank();
    let selected = select(&bank, &QuizMode::All, Some("Z"), None, &mut rng());
    assert!(selected.is_empty());
}

#[test]
fn test_random_10_with_small_subject_returns_every_question_once() {
    let bank = sample_bank();
    let selected = select(&bank, &QuizMode::Random10, Some("B"), None, &mut rng());

    let mut got = ids(&selected);
    got.sort();
    assert_eq!(got, vec!["2", "4"]);
}

#[test]
fn test_random_20_draws_from_whole_bank() {
    let bank = bank_with(50, &["A", "B", "C"]);
    let selected = select(&bank, &QuizMode::Random20, None, None, &mut rng());
    assert_eq!(selected.len(), 20);

    let topics: HashSet<&str> = selected.iter().map(|q| q.topic.as_str()).collect();
    assert!(topics.len() > 1, "sample should span topics: {:?}", topics);
}

#[test]
fn test_random_100_capped_by_bank_size() {
    let bank = bank_with(42, &["A"]);
    let selected = select(&bank, &QuizMode::Random100, None, None, &mut rng());
    assert_eq!(selected.len(), 42);
}

#[test]
fn test_global_mode_honors_subject() {
    let bank = bank_with(30, &["A", "B"]);
    let selected = select(&bank, &QuizMode::Random20, Some("B"), None, &mut rng());
    assert_eq!(selected.len(), 15);
    assert!(selected.iter().all(|q| q.topic == "B"));
}

#[test]
fn test_size_narrows_global_mode() {
    let bank = bank_with(50, &["A"]);
    let selected = select(&bank, &QuizMode::Random20, None, Some(5), &mut rng());
    assert_eq!(selected.len(), 5);
}

#[test]
fn test_size_never_exceeds_mode_size() {
    let bank = bank_with(50, &["A"]);
    let selected = select(&bank, &QuizMode::Random20, None, Some(45), &mut rng());
    assert_eq!(selected.len(), 20);
}

#[test]
fn test_size_ignored_for_subject_modes() {
    let bank = bank_with(30, &["A"]);
    let selected = select(&bank, &QuizMode::Random10, Some("A"), Some(2), &mut rng());
    assert_eq!(selected.len(), 10);
}

#[test]
fn test_unrecognized_mode_falls_back_to_ten() {
    let bank = bank_with(30, &["A"]);
    let mode = QuizMode::parse("marathon");
    let selected = select(&bank, &mode, None, None, &mut rng());
    assert_eq!(selected.len(), FALLBACK_SAMPLE_SIZE);
}

#[test]
fn test_all_without_subject_falls_back_to_ten() {
    let bank = bank_with(30, &["A", "B"]);
    let selected = select(&bank, &QuizMode::All, None, None, &mut rng());
    assert_eq!(selected.len(), FALLBACK_SAMPLE_SIZE);
}

#[test]
fn test_null_subject_draws_from_whole_bank() {
    let bank = bank_with(30, &["A", "B"]);
    let selected = select(&bank, &QuizMode::Random20, Some("null"), None, &mut rng());
    assert_eq!(selected.len(), 20);
}

#[test]
fn test_all_with_null_subject_returns_whole_bank_in_order() {
    let bank = bank_with(30, &["A", "B"]);
    let selected = select(&bank, &QuizMode::All, Some("null"), None, &mut rng());
    assert_eq!(selected, bank.questions().to_vec());
}

#[test]
fn test_random_ten_with_null_subject_samples_whole_bank() {
    let bank = bank_with(30, &["A", "B"]);
    let selected = select(&bank, &QuizMode::Random10, Some("null"), None, &mut rng());

    assert_eq!(selected.len(), 10);
    let topics: HashSet<&str> = selected.iter().map(|q| q.topic.as_str()).collect();
    assert!(topics.iter().all(|t| *t == "A" || *t == "B"));
    let unique: HashSet<&str> = ids(&selected).into_iter().collect();
    assert_eq!(unique.len(), 10);
}

#[test]
fn test_empty_subject_treated_as_absent() {
    let bank = bank_with(30, &["A", "B"]);
    let selected = select(&bank, &QuizMode::All, Some(""), None, &mut rng());
    assert_eq!(selected.len(), FALLBACK_SAMPLE_SIZE);
}

#[test]
fn test_same_seed_same_selection() {
    let bank = bank_with(40, &["A", "B"]);
    let first = select(&bank, &QuizMode::Random20, None, None, &mut StdRng::seed_from_u64(3));
    let second = select(&bank, &QuizMode::Random20, None, None, &mut StdRng::seed_from_u64(3));
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `all` returns exactly the subject's questions in their original order
    #[test]
    fn prop_all_is_ordered_topic_filter(
        topics in prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), 1..40),
        subject in prop::sample::select(vec!["A", "B", "C"]),
        seed: u64,
    ) {
        let questions = topics
            .iter()
            .enumerate()
            .map(|(i, t)| crate::test_utils::test_helpers::question(i, t, 0))
            .collect();
        let bank = QuestionBank::new(questions).unwrap();

        let selected = select(&bank, &QuizMode::All, Some(subject), None, &mut StdRng::seed_from_u64(seed));
        let expected: Vec<Question> = bank.by_topic(subject).into_iter().cloned().collect();
        prop_assert_eq!(selected, expected);
    }

    /// Random modes return min(N, |candidates|) distinct candidates
    #[test]
    fn prop_random_selection_is_distinct_subset(
        count in 1usize..150,
        mode in prop::sample::select(vec!["random_100", "random_20", "random_10", "bogus"]),
        with_subject: bool,
        seed: u64,
    ) {
        let bank = bank_with(count, &["A", "B"]);
        let mode = QuizMode::parse(mode);
        let subject = if with_subject { Some("A") } else { None };

        let selected = select(&bank, &mode, subject, None, &mut StdRng::seed_from_u64(seed));

        let candidates: Vec<&Question> = match subject {
            Some(t) => bank.by_topic(t),
            None => bank.questions().iter().collect(),
        };
        let requested = mode.sample_size().unwrap();
        prop_assert_eq!(selected.len(), requested.min(candidates.len()));

        let unique: HashSet<&str> = selected.iter().map(|q| q.id.as_str()).collect();
        prop_assert_eq!(unique.len(), selected.len());
        for q in &selected {
            prop_assert!(candidates.contains(&q));
        }
    }
}
