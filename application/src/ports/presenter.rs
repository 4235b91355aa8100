//! Turn presenter port
//!
//! The use cases hand every turn to a [`TurnPresenter`] as soon as it is
//! produced. How it is rendered (boxes, colors, plain text) is up to the
//! presentation layer.

use council_domain::{CouncilMember, Phase, PresentationTag, SessionMode, Topic, Turn};

pub trait TurnPresenter: Send + Sync {
    /// A mode invocation is starting on `topic`
    fn announce_session(&self, mode: SessionMode, topic: &Topic);

    /// A multi-member phase is starting
    fn announce_phase(&self, phase: Phase);

    /// Render one turn under its speaker label
    fn present_turn(&self, label: &str, text: &str, tag: PresentationTag);

    /// List the members the user can pick from (Ask-One)
    fn present_member_choice(&self, members: &[CouncilMember]);

    /// Remind the user what the follow-up loop is about
    fn show_current_topic(&self, topic: &Topic);

    /// Short informational message
    fn notice(&self, message: &str);

    /// Convenience wrapper around [`present_turn`](Self::present_turn)
    fn present(&self, turn: &Turn, tag: PresentationTag) {
        self.present_turn(&turn.label(), turn.text(), tag);
    }
}

/// Presenter that discards everything (tests, quiet embedding)
pub struct NoPresenter;

impl TurnPresenter for NoPresenter {
    fn announce_session(&self, _mode: SessionMode, _topic: &Topic) {}
    fn announce_phase(&self, _phase: Phase) {}
    fn present_turn(&self, _label: &str, _text: &str, _tag: PresentationTag) {}
    fn present_member_choice(&self, _members: &[CouncilMember]) {}
    fn show_current_topic(&self, _topic: &Topic) {}
    fn notice(&self, _message: &str) {}
}
