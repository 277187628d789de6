use quizr::bank::loader::{BankLoader, load_bank_sync};
use quizr::bank::{BankSource, QuestionBank};
use quizr::session::{AnswerOutcome, FeedbackTier};
use quizr::{QuizConfig, QuizError, QuizMode, Session, SessionState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_bank() -> QuestionBank {
    load_bank_sync(
        &BankSource::File(fixture_path("questions.json")),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn ids(session: &Session) -> Vec<String> {
    session.questions().iter().map(|q| q.id.clone()).collect()
}

#[test]
fn test_background_load_from_fixture() {
    let mut loader = BankLoader::spawn_load(
        BankSource::parse(&fixture_path("questions.json").display().to_string()),
        Duration::from_secs(5),
    );

    let mut result = None;
    for _ in 0..200 {
        result = loader.poll();
        if result.is_some() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    let bank = result.expect("load finished").unwrap();
    assert_eq!(bank.len(), 5);
    assert!(loader.poll().is_none());
}

#[test]
fn test_missing_file_reports_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_bank_sync(
        &BankSource::File(temp_dir.path().join("missing.json")),
        Duration::from_secs(1),
    );

    let err = result.unwrap_err();
    assert!(matches!(err, QuizError::Load(_)));
    assert_eq!(err.title(), "Failed to Load Questions Data");
}

#[test]
fn test_bad_answer_index_reports_data_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bank.json");
    fs::write(
        &path,
        r#"[{"id": 1, "topic": "A", "question": "Q?", "options": ["a"], "answerIndex": 3}]"#,
    )
    .unwrap();

    let err = load_bank_sync(&BankSource::File(path), Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, QuizError::DataFormat(_)));
}

#[test]
fn test_fixture_bank_topics() {
    let bank = fixture_bank();
    assert_eq!(bank.unique_topics(), vec!["A", "B"]);
    assert_eq!(
        bank.topic_counts(),
        vec![("A".to_string(), 3), ("B".to_string(), 2)]
    );
}

/// Three questions in "A", two in "B": select, answer, advance, score
#[test]
fn test_end_to_end_subject_quiz() {
    let bank = fixture_bank();
    let mut rng = StdRng::seed_from_u64(7);

    let all_a: QuizConfig = "quiz?mode=all&subject=A".parse().unwrap();
    let mut session = Session::new(all_a.select_questions(&bank, &mut rng)).unwrap();
    assert_eq!(ids(&session), vec!["1", "3", "5"]);

    let random_b: QuizConfig = "quiz?mode=random_10&subject=B".parse().unwrap();
    let random_session = Session::new(random_b.select_questions(&bank, &mut rng)).unwrap();
    let mut b_ids = ids(&random_session);
    b_ids.sort();
    assert_eq!(b_ids, vec!["2", "4"]);

    // Answers are 1, 2, 1: get two of three right
    assert_eq!(session.submit_answer(1), AnswerOutcome::Correct);
    assert!(session.advance());
    assert_eq!(session.submit_answer(0), AnswerOutcome::Incorrect);
    assert_eq!(session.submit_answer(2), AnswerOutcome::Ignored);
    assert!(session.advance());
    assert_eq!(session.submit_answer(1), AnswerOutcome::Correct);
    assert!(session.advance());

    assert_eq!(
        session.state(),
        SessionState::Complete {
            final_score: 2,
            total: 3
        }
    );
    let result = session.result().unwrap();
    assert_eq!(result.percentage(), 66.7);
    assert_eq!(result.tier(), FeedbackTier::Solid);
}

#[test]
fn test_landing_descriptor_round_trip() {
    let bank = fixture_bank();
    let config = QuizConfig::for_bank(QuizMode::Random100, None, bank.len());
    assert_eq!(config.to_url(), "quiz?mode=random_100&size=5");

    let parsed: QuizConfig = config.to_url().parse().unwrap();
    assert_eq!(parsed, config);

    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(parsed.select_questions(&bank, &mut rng).len(), 5);
}

#[test]
fn test_unknown_subject_gives_empty_selection() {
    let bank = fixture_bank();
    let mut rng = StdRng::seed_from_u64(1);
    let config: QuizConfig = "quiz?mode=all&subject=Zoology".parse().unwrap();

    let err = Session::new(config.select_questions(&bank, &mut rng)).unwrap_err();
    assert_eq!(err, QuizError::EmptySelection);
}
