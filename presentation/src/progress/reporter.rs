//! Progress reporting while council members work

use colored::Colorize;
use council_application::ProgressNotifier;
use council_domain::{CouncilMember, Phase};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a single member's request is in flight
///
/// Calls are sequential, so there is at most one spinner at a time.
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// What the spinner says while `member` works in `phase`
    pub fn activity(phase: &Phase, member: &CouncilMember) -> String {
        match phase {
            Phase::Review => format!("{} is reviewing others...", member.display_name()),
            Phase::Initial | Phase::Synthesis => {
                format!("{} is thinking...", member.display_name())
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}

    fn on_member_start(&self, phase: &Phase, member: &CouncilMember) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::activity(phase, member));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_member_complete(&self, _phase: &Phase, member: &CouncilMember, success: bool) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            pb.finish_and_clear();
        }
        if !success {
            eprintln!("  {} {} failed", "x".red(), member.display_name());
        }
    }
}

/// Plain-text progress (no spinner), used when output is not a terminal
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}

    fn on_member_start(&self, phase: &Phase, member: &CouncilMember) {
        println!("{}", ProgressReporter::activity(phase, member).dimmed());
    }

    fn on_member_complete(&self, _phase: &Phase, member: &CouncilMember, success: bool) {
        if !success {
            println!("  {} {} failed", "x".red(), member.display_name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Model;

    #[test]
    fn test_activity_messages() {
        let member = CouncilMember::new("deepseek", "DeepSeek", Model::DeepSeekR1);
        assert_eq!(
            ProgressReporter::activity(&Phase::Initial, &member),
            "DeepSeek is thinking..."
        );
        assert_eq!(
            ProgressReporter::activity(&Phase::Review, &member),
            "DeepSeek is reviewing others..."
        );
    }

    #[test]
    fn test_spinner_is_cleared_on_completion() {
        let reporter = ProgressReporter::new();
        let member = CouncilMember::new("a", "A", Model::Qwen3Vl);

        reporter.on_member_start(&Phase::Initial, &member);
        assert!(reporter.current.lock().unwrap().is_some());
        reporter.on_member_complete(&Phase::Initial, &member, true);
        assert!(reporter.current.lock().unwrap().is_none());
    }
}
