//! Step Wizard
//!
//! State machine for a fixed three-step creation dialog.
//! Components keep a `Wizard<D>` in a signal and call the transition
//! methods from event handlers; the async submission is split into
//! `begin_submit` / `submit_succeeded` / `submit_failed` so that at most
//! one request is in flight per dialog.

/// Position within the three-step flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Required name/title field
    #[default]
    Name,
    /// Optional details (description, link, ...)
    Details,
    /// Final option plus the submit button
    Confirm,
}

impl Step {
    /// 1-based ordinal, for "Step 2 of 3" labels
    pub fn ordinal(self) -> u8 {
        match self {
            Step::Name => 1,
            Step::Details => 2,
            Step::Confirm => 3,
        }
    }

    fn next(self) -> Self {
        match self {
            Step::Name => Step::Details,
            Step::Details | Step::Confirm => Step::Confirm,
        }
    }

    fn back(self) -> Self {
        match self {
            Step::Name | Step::Details => Step::Name,
            Step::Confirm => Step::Details,
        }
    }
}

/// Draft carried by a wizard flow.
///
/// `Default` supplies the empty draft a freshly opened dialog starts from;
/// `validate` checks only the fields captured by the given step and returns
/// the message to show inline on failure.
pub trait StepDraft: Default + Clone {
    fn validate(&self, step: Step) -> Result<(), String>;
}

/// Dialog state for one wizard instance.
///
/// The default value is the closed dialog. All transitions are no-ops while
/// a submission is in flight, so a pending request can never race with
/// navigation or a second submit.
#[derive(Clone, Debug, Default)]
pub struct Wizard<D> {
    visible: bool,
    step: Step,
    draft: D,
    error: Option<String>,
    submitting: bool,
}

impl<D: StepDraft> Wizard<D> {
    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutable access for input bindings. Inputs are disabled while
    /// `is_submitting`, so the in-flight snapshot can't be edited under us.
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Show the dialog with a fresh draft at step 1. Ignored while
    /// submitting, so a pending commit always settles against the dialog
    /// state it started from.
    pub fn open(&mut self) {
        if self.submitting {
            return;
        }
        *self = Self {
            visible: true,
            ..Self::default()
        };
    }

    /// Advance if the current step validates; otherwise surface the error
    /// and stay put. Capped at the confirm step.
    pub fn go_next(&mut self) {
        if self.submitting {
            return;
        }
        match self.draft.validate(self.step) {
            Ok(()) => {
                self.error = None;
                self.step = self.step.next();
            }
            Err(msg) => self.error = Some(msg),
        }
    }

    /// Step back, capped at step 1. Always clears the error.
    pub fn go_back(&mut self) {
        if self.submitting {
            return;
        }
        self.error = None;
        self.step = self.step.back();
    }

    /// Hide the dialog and discard the draft. Ignored while submitting.
    pub fn close(&mut self) {
        if self.submitting {
            return;
        }
        *self = Self::default();
    }

    /// Start a submission: re-checks the step-1 requirement (the draft may
    /// have been edited after passing it) and returns a snapshot of the
    /// draft to submit. Returns `None` if validation fails or a submission
    /// is already running. On a failed re-check the dialog jumps back to
    /// step 1 so the offending field is on screen.
    pub fn begin_submit(&mut self) -> Option<D> {
        if self.submitting {
            return None;
        }
        if let Err(msg) = self.draft.validate(Step::Name) {
            self.error = Some(msg);
            self.step = Step::Name;
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// The request succeeded: reset to the closed default.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// The request failed: keep the dialog open where it was so the user
    /// can retry, and show the message.
    pub fn submit_failed(&mut self, msg: impl Into<String>) {
        self.submitting = false;
        self.error = Some(msg.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default)]
    struct NameDraft {
        name: String,
    }

    impl StepDraft for NameDraft {
        fn validate(&self, step: Step) -> Result<(), String> {
            match step {
                Step::Name if self.name.trim().is_empty() => {
                    Err("Please enter a name.".to_string())
                }
                _ => Ok(()),
            }
        }
    }

    fn open_wizard() -> Wizard<NameDraft> {
        let mut w = Wizard::default();
        w.open();
        w
    }

    fn open_at_confirm() -> Wizard<NameDraft> {
        let mut w = open_wizard();
        w.draft_mut().name = "Birthday".to_string();
        w.go_next();
        w.go_next();
        assert_eq!(w.step(), Step::Confirm);
        w
    }

    #[test]
    fn starts_closed() {
        let w: Wizard<NameDraft> = Wizard::default();
        assert!(!w.is_open());
        assert_eq!(w.step(), Step::Name);
    }

    #[test]
    fn ordinals_are_one_based() {
        assert_eq!(Step::Name.ordinal(), 1);
        assert_eq!(Step::Details.ordinal(), 2);
        assert_eq!(Step::Confirm.ordinal(), 3);
    }

    #[test]
    fn open_resets_previous_draft() {
        let mut w = open_wizard();
        w.draft_mut().name = "Old".to_string();
        w.go_next();
        w.open();
        assert!(w.is_open());
        assert_eq!(w.step(), Step::Name);
        assert_eq!(w.draft().name, "");
        assert_eq!(w.error(), None);
    }

    #[test]
    fn empty_name_never_advances() {
        let mut w = open_wizard();
        w.go_next();
        assert_eq!(w.step(), Step::Name);
        assert!(w.error().is_some());
        w.go_next();
        assert_eq!(w.step(), Step::Name);
        assert!(w.error().is_some());
    }

    #[test]
    fn whitespace_name_never_advances() {
        let mut w = open_wizard();
        w.draft_mut().name = "   ".to_string();
        w.go_next();
        assert_eq!(w.step(), Step::Name);
        assert!(w.error().is_some());
    }

    #[test]
    fn valid_name_advances_and_clears_error() {
        let mut w = open_wizard();
        w.go_next();
        assert!(w.error().is_some());
        w.draft_mut().name = "Birthday".to_string();
        w.go_next();
        assert_eq!(w.step(), Step::Details);
        assert_eq!(w.error(), None);
        w.go_next();
        assert_eq!(w.step(), Step::Confirm);
        w.go_next();
        assert_eq!(w.step(), Step::Confirm, "capped at the final step");
    }

    #[test]
    fn back_at_step_one_is_noop_and_clears_error() {
        let mut w = open_wizard();
        w.go_next();
        assert!(w.error().is_some());
        w.go_back();
        assert_eq!(w.step(), Step::Name);
        assert_eq!(w.error(), None);
    }

    #[test]
    fn back_walks_down_from_confirm() {
        let mut w = open_at_confirm();
        w.go_back();
        assert_eq!(w.step(), Step::Details);
        w.go_back();
        assert_eq!(w.step(), Step::Name);
    }

    #[test]
    fn close_discards_draft() {
        let mut w = open_at_confirm();
        w.close();
        assert!(!w.is_open());
        assert_eq!(w.draft().name, "");
        assert_eq!(w.step(), Step::Name);
    }

    #[test]
    fn close_is_ignored_while_submitting() {
        let mut w = open_at_confirm();
        assert!(w.begin_submit().is_some());
        w.close();
        assert!(w.is_open());
        assert!(w.is_submitting());
    }

    #[test]
    fn open_is_ignored_while_submitting() {
        let mut w = open_at_confirm();
        assert!(w.begin_submit().is_some());
        w.open();
        assert_eq!(w.step(), Step::Confirm);
        assert!(w.is_submitting());
        assert_eq!(w.draft().name, "Birthday");
        w.submit_failed("late failure");
        assert_eq!(w.error(), Some("late failure"));
        assert_eq!(w.step(), Step::Confirm, "settles against the same dialog");
    }

    #[test]
    fn navigation_is_ignored_while_submitting() {
        let mut w = open_at_confirm();
        assert!(w.begin_submit().is_some());
        w.go_back();
        assert_eq!(w.step(), Step::Confirm);
        w.go_next();
        assert_eq!(w.step(), Step::Confirm);
    }

    #[test]
    fn begin_submit_returns_draft_snapshot() {
        let mut w = open_at_confirm();
        let snapshot = w.begin_submit().expect("valid draft should submit");
        assert_eq!(snapshot.name, "Birthday");
        assert!(w.is_submitting());
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut w = open_at_confirm();
        assert!(w.begin_submit().is_some());
        assert!(w.begin_submit().is_none());
    }

    #[test]
    fn begin_submit_recheck_fails_back_to_step_one() {
        let mut w = open_at_confirm();
        w.draft_mut().name = "  ".to_string();
        assert!(w.begin_submit().is_none());
        assert_eq!(w.step(), Step::Name);
        assert!(w.error().is_some());
        assert!(!w.is_submitting());
    }

    #[test]
    fn submit_succeeded_closes_and_resets() {
        let mut w = open_at_confirm();
        w.begin_submit();
        w.submit_succeeded();
        assert!(!w.is_open());
        assert!(!w.is_submitting());
        assert_eq!(w.draft().name, "");
        assert_eq!(w.step(), Step::Name);
        assert_eq!(w.error(), None);
    }

    #[test]
    fn submit_failed_keeps_dialog_open_for_retry() {
        let mut w = open_at_confirm();
        w.begin_submit();
        w.submit_failed("Something went wrong. Please try again.");
        assert!(w.is_open());
        assert_eq!(w.step(), Step::Confirm);
        assert!(!w.is_submitting());
        assert_eq!(w.error(), Some("Something went wrong. Please try again."));
        assert_eq!(w.draft().name, "Birthday", "draft kept for retry");
    }
}
