//! First-visit onboarding: intro dialog followed by a coach-mark tour.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host persists one boolean ("has completed onboarding"). It is read
//! once to build [`Onboarding`] and written when [`Onboarding::complete`]
//! reports that the tour finished.

#[cfg(test)]
#[path = "tour_test.rs"]
mod tour_test;

/// One highlighted region of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoachStep {
    /// Value of the `data-coach` attribute on the highlighted element.
    pub target: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static COACH_STEPS: [CoachStep; 4] = [
    CoachStep {
        target: "search-bar",
        title: "Search for Assets",
        description: "Quickly find what you need by searching through our entire library of assets.",
    },
    CoachStep {
        target: "navigation-tabs",
        title: "Browse Categories",
        description: "Navigate through different types of assets using these category tabs.",
    },
    CoachStep {
        target: "stats-section",
        title: "Library Overview",
        description: "See at a glance how many assets are available in each category.",
    },
    CoachStep {
        target: "request-access",
        title: "Request Access",
        description: "Need access to restricted content? Click here to submit a request.",
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Onboarding {
    show_intro: bool,
    step: Option<usize>,
}

impl Onboarding {
    /// Build from the persisted completion flag.
    #[must_use]
    pub fn from_completed(completed: bool) -> Self {
        Self { show_intro: !completed, step: None }
    }

    #[must_use]
    pub fn shows_intro(&self) -> bool {
        self.show_intro
    }

    /// Close the intro without starting the tour. Nothing is persisted, so
    /// the intro returns on the next visit.
    pub fn dismiss_intro(&mut self) {
        self.show_intro = false;
    }

    /// Close the intro and show the first coach mark.
    pub fn start(&mut self) {
        self.show_intro = false;
        self.step = Some(0);
    }

    /// Zero-based index and content of the active coach mark.
    #[must_use]
    pub fn current(&self) -> Option<(usize, &'static CoachStep)> {
        let index = self.step?;
        COACH_STEPS.get(index).map(|step| (index, step))
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        COACH_STEPS.len()
    }

    /// Advance; stepping past the last mark hides the tour.
    pub fn next(&mut self) {
        self.step = match self.step {
            Some(index) if index + 1 < COACH_STEPS.len() => Some(index + 1),
            _ => None,
        };
    }

    /// Go back; stepping before the first mark hides the tour.
    pub fn previous(&mut self) {
        self.step = match self.step {
            Some(index) if index > 0 => Some(index - 1),
            _ => None,
        };
    }

    /// Close the tour. Returns `true` when the completion flag should be
    /// persisted.
    pub fn complete(&mut self) -> bool {
        self.show_intro = false;
        self.step.take().is_some()
    }
}
