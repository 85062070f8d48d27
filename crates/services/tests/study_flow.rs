use objection_core::model::{CategoryFilter, ObjectionId};
use objection_core::time::fixed_clock;
use objection_core::{ChallengePhase, ScoreBand, SubmitOutcome};
use services::{ChallengeView, StudyConfig, StudyMode, StudySession};

fn session() -> StudySession {
    StudySession::from_config(&StudyConfig::default(), fixed_clock()).unwrap()
}

fn correct_answer(session: &StudySession) -> String {
    session
        .challenge()
        .current_scenario()
        .correct_objection()
        .to_string()
}

/// Plays a full challenge, answering the first `correct` scenarios right.
fn play(session: &mut StudySession, correct: usize) {
    session.select_mode(StudyMode::Challenge);
    for index in 0..session.challenge().scenario_count() {
        let answer = if index < correct {
            correct_answer(session)
        } else {
            "Objection, your honor".to_string()
        };
        session.submit_answer(&answer);
        session.advance();
    }
}

#[test]
fn learn_mode_reaches_full_mastery() {
    let mut session = session();
    let ids: Vec<ObjectionId> = session
        .catalog()
        .objections()
        .iter()
        .map(|objection| objection.id())
        .collect();

    let mut last = 0;
    for id in ids {
        session.expand(id);
        let mastery = session.mastery_percentage();
        assert!(mastery >= last);
        last = mastery;
    }
    assert_eq!(session.mastery_percentage(), 100);

    session.select_category_id("procedure").unwrap();
    let view = session.learn_view();
    assert_eq!(view.objections.len(), 1);
    assert!(view.objections.iter().all(|item| item.seen));
}

#[test]
fn first_scenario_correct_answer() {
    let mut session = session();
    session.select_mode(StudyMode::Challenge);
    let answer = correct_answer(&session);

    let SubmitOutcome::Graded(graded) = session.submit_answer(&answer) else {
        panic!("first submission must be graded");
    };
    assert!(graded.is_correct);
    assert_eq!(session.challenge().score(), 1);
    assert_eq!(session.challenge().total_attempts(), 1);
    assert_eq!(session.challenge().phase(), ChallengePhase::AnswerRevealed);
    assert!(session.celebration().is_some());
}

#[test]
fn double_submission_changes_nothing() {
    let mut session = session();
    session.select_mode(StudyMode::Challenge);
    session.submit_answer("Hearsay");
    let before = session.challenge().snapshot().clone();

    for _ in 0..5 {
        let answer = correct_answer(&session);
        assert!(matches!(
            session.submit_answer(&answer),
            SubmitOutcome::Ignored(ChallengePhase::AnswerRevealed)
        ));
    }
    assert_eq!(session.challenge().snapshot(), &before);
}

#[test]
fn bands_for_reference_catalog() {
    for (correct, band) in [
        (12, ScoreBand::Perfect),
        (9, ScoreBand::Pass),
        (5, ScoreBand::Practice),
    ] {
        let mut session = session();
        play(&mut session, correct);

        let ChallengeView::Complete(view) = session.challenge_view() else {
            panic!("challenge should be complete");
        };
        assert_eq!(view.band, band);
        assert_eq!(view.score, correct);
        assert_eq!(view.history.len(), 12);
        assert_eq!(session.challenge().total_attempts(), 12);
    }
}

#[test]
fn reset_after_completion_starts_over() {
    let mut session = session();
    play(&mut session, 12);
    assert!(session.challenge().is_complete());

    session.reset();
    let challenge = session.challenge();
    assert_eq!(challenge.current_index(), 0);
    assert_eq!(challenge.score(), 0);
    assert_eq!(challenge.total_attempts(), 0);
    assert!(challenge.history().is_empty());
    assert_eq!(challenge.phase(), ChallengePhase::AwaitingAnswer);
    assert!(matches!(session.challenge_view(), ChallengeView::InProgress(_)));
}

#[test]
fn learn_state_survives_a_challenge_run() {
    let mut session = session();
    session.select_category(CategoryFilter::All);
    session.expand(ObjectionId::new(1));
    play(&mut session, 4);
    session.select_mode(StudyMode::Learn);

    assert!(session.is_seen(ObjectionId::new(1)));
    assert_eq!(session.mastery_percentage(), 8);
}
