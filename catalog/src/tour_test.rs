use super::*;

fn step_index(onboarding: &Onboarding) -> Option<usize> {
    onboarding.current().map(|(index, _)| index)
}

// =============================================================
// Intro
// =============================================================

#[test]
fn first_visit_shows_intro() {
    let onboarding = Onboarding::from_completed(false);
    assert!(onboarding.shows_intro());
    assert_eq!(step_index(&onboarding), None);
}

#[test]
fn returning_visit_skips_intro() {
    let onboarding = Onboarding::from_completed(true);
    assert!(!onboarding.shows_intro());
}

#[test]
fn dismiss_intro_does_not_start_tour() {
    let mut onboarding = Onboarding::from_completed(false);
    onboarding.dismiss_intro();
    assert!(!onboarding.shows_intro());
    assert_eq!(step_index(&onboarding), None);
}

// =============================================================
// Tour navigation
// =============================================================

#[test]
fn start_shows_first_step() {
    let mut onboarding = Onboarding::from_completed(false);
    onboarding.start();
    assert!(!onboarding.shows_intro());
    let (index, step) = onboarding.current().unwrap();
    assert_eq!(index, 0);
    assert_eq!(step.target, "search-bar");
    assert_eq!(onboarding.total_steps(), 4);
}

#[test]
fn next_walks_steps_then_ends() {
    let mut onboarding = Onboarding::default();
    onboarding.start();
    onboarding.next();
    onboarding.next();
    onboarding.next();
    assert_eq!(onboarding.current().map(|(_, s)| s.target), Some("request-access"));
    onboarding.next();
    assert_eq!(step_index(&onboarding), None);
}

#[test]
fn previous_from_first_step_ends_tour() {
    let mut onboarding = Onboarding::default();
    onboarding.start();
    onboarding.next();
    onboarding.previous();
    assert_eq!(step_index(&onboarding), Some(0));
    onboarding.previous();
    assert_eq!(step_index(&onboarding), None);
}

#[test]
fn next_without_tour_stays_hidden() {
    let mut onboarding = Onboarding::default();
    onboarding.next();
    onboarding.previous();
    assert_eq!(step_index(&onboarding), None);
}

// =============================================================
// Completion
// =============================================================

#[test]
fn complete_during_tour_requests_persist() {
    let mut onboarding = Onboarding::from_completed(false);
    onboarding.start();
    onboarding.next();
    assert!(onboarding.complete());
    assert_eq!(step_index(&onboarding), None);
}

#[test]
fn complete_without_tour_does_not_persist() {
    let mut onboarding = Onboarding::from_completed(false);
    assert!(!onboarding.complete());
    assert!(!onboarding.shows_intro());
}
