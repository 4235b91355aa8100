//! Console output for council sessions
//!
//! Each turn is drawn in a box titled with its speaker label. Padding is
//! computed on visible width, so bold spans and colors never skew borders.

use crate::config::OutputConfig;
use crate::output::markdown;
use colored::{Color, Colorize};
use council_application::{ConnectionReport, TurnPresenter};
use council_domain::{CouncilMember, Model, Phase, PresentationTag, SessionMode, Topic};

/// Pure formatting helpers
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn color_of(tag: PresentationTag) -> Color {
        match tag {
            PresentationTag::Blue => Color::Blue,
            PresentationTag::Red => Color::Red,
            PresentationTag::Green => Color::Green,
            PresentationTag::Yellow => Color::Yellow,
            PresentationTag::Magenta => Color::Magenta,
            PresentationTag::Cyan => Color::Cyan,
            PresentationTag::White => Color::White,
        }
    }

    /// Render `text` in a box `width` columns wide, borders included
    pub fn render_box(
        label: &str,
        text: &str,
        tag: PresentationTag,
        width: usize,
        color: bool,
    ) -> String {
        let width = width.max(OutputConfig::MIN_BOX_WIDTH);
        let inner = width - 4;
        let horizontal = "─".repeat(width - 2);
        let paint = |s: &str| -> String {
            if color {
                s.color(Self::color_of(tag)).to_string()
            } else {
                s.to_string()
            }
        };
        let row = |content: &str| -> String {
            let pad = inner.saturating_sub(console::measure_text_width(content));
            format!("{} {}{} {}\n", paint("│"), content, " ".repeat(pad), paint("│"))
        };

        let mut out = String::new();
        out.push_str(&paint(&format!("┌{}┐", horizontal)));
        out.push('\n');
        for line in textwrap::wrap(label, inner) {
            if color {
                out.push_str(&row(&line.as_ref().bold().to_string()));
            } else {
                out.push_str(&row(&line));
            }
        }
        out.push_str(&paint(&format!("├{}┤", horizontal)));
        out.push('\n');

        for paragraph in text.lines() {
            let styled = markdown::to_terminal(paragraph, color);
            let wrapped = textwrap::wrap(&styled, inner);
            if wrapped.is_empty() {
                out.push_str(&row(""));
            }
            for line in wrapped {
                out.push_str(&row(&line));
            }
        }

        out.push_str(&paint(&format!("└{}┘", horizontal)));
        out.push('\n');
        out
    }

    pub fn session_header(mode: SessionMode, topic: &Topic) -> String {
        let title = match mode {
            SessionMode::Debate => "Debate",
            SessionMode::Teach => "Teach",
            SessionMode::AskOne => "Ask One",
        };
        format!("\n{} {}\n", format!("{}:", title).cyan().bold(), topic)
    }

    pub fn phase_header(phase: Phase) -> String {
        let name = phase.display_name();
        format!(
            "\n{}\n{}\n",
            name.cyan().bold(),
            "-".repeat(name.len())
        )
    }

    pub fn member_choice(members: &[CouncilMember]) -> String {
        let mut out = format!("\n{}\n", "Who to ask?".bold());
        for (i, member) in members.iter().enumerate() {
            out.push_str(&format!(
                "   {}. {}\n",
                i + 1,
                member
                    .display_name()
                    .color(Self::color_of(member.presentation_tag()))
            ));
        }
        out
    }

    pub fn connection_report(report: &ConnectionReport) -> String {
        let mut out = format!("{}\n", "Inference server connected!".green().bold());
        out.push_str(&format!(
            "Loaded models: {}\n",
            Self::model_list(&report.loaded)
        ));
        if !report.is_complete() {
            out.push_str(&format!(
                "{} {}\n",
                "Not loaded:".yellow().bold(),
                Self::model_list(&report.missing)
            ));
        }
        out
    }

    fn model_list(models: &[Model]) -> String {
        if models.is_empty() {
            return "(none)".to_string();
        }
        models
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Prints turns and session chrome to stdout
pub struct ConsoleTurnPresenter {
    config: OutputConfig,
}

impl ConsoleTurnPresenter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }
}

impl TurnPresenter for ConsoleTurnPresenter {
    fn announce_session(&self, mode: SessionMode, topic: &Topic) {
        println!("{}", ConsoleFormatter::session_header(mode, topic));
    }

    fn announce_phase(&self, phase: Phase) {
        print!("{}", ConsoleFormatter::phase_header(phase));
    }

    fn present_turn(&self, label: &str, text: &str, tag: PresentationTag) {
        println!();
        print!(
            "{}",
            ConsoleFormatter::render_box(label, text, tag, self.config.box_width, self.config.color)
        );
    }

    fn present_member_choice(&self, members: &[CouncilMember]) {
        print!("{}", ConsoleFormatter::member_choice(members));
    }

    fn show_current_topic(&self, topic: &Topic) {
        println!("\n{} {}", "Current topic:".bold(), topic);
    }

    fn notice(&self, message: &str) {
        println!("{}", message.yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_box(text: &str, width: usize) -> Vec<String> {
        ConsoleFormatter::render_box("Thinker", text, PresentationTag::Blue, width, false)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_every_row_has_box_width() {
        let lines = plain_box(
            "A fairly long paragraph that will certainly need to wrap inside a narrow box.\n\n- short",
            30,
        );
        for line in &lines {
            assert_eq!(console::measure_text_width(line), 30, "row: {:?}", line);
        }
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Thinker"));
        assert!(lines[2].starts_with('├'));
        assert!(lines.last().unwrap().starts_with('└'));
    }

    #[test]
    fn test_blank_paragraph_keeps_a_row() {
        let lines = plain_box("one\n\ntwo", 40);
        // top, title, separator, one, blank, two, bottom
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[4].trim_matches(|c| c == '│' || c == ' '), "");
    }

    #[test]
    fn test_markdown_is_flattened_without_color() {
        let lines = plain_box("**Key point**: borrow, don't clone", 60);
        assert!(lines[3].contains("Key point: borrow"));
        assert!(!lines[3].contains("**"));
    }

    #[test]
    fn test_colored_rows_pad_on_visible_width() {
        let rendered = ConsoleFormatter::render_box(
            "DeepSeek Reviews",
            "**bold** text",
            PresentationTag::Red,
            40,
            true,
        );
        for line in rendered.lines() {
            assert_eq!(console::measure_text_width(line), 40);
        }
    }

    #[test]
    fn test_long_title_wraps_inside_borders() {
        let label = "Final Conclusion (An Unusually Long Council Member Name)";
        for color in [false, true] {
            let rendered =
                ConsoleFormatter::render_box(label, "ok", PresentationTag::Yellow, 24, color);
            let lines: Vec<_> = rendered.lines().collect();
            for line in &lines {
                assert_eq!(console::measure_text_width(line), 24, "row: {:?}", line);
            }
            let separator = lines.iter().position(|l| l.contains('├')).unwrap();
            assert!(separator > 2);
        }
    }

    #[test]
    fn test_member_choice_is_numbered_from_one() {
        let members = vec![
            CouncilMember::new("a", "Alpha", Model::Qwen3Thinking),
            CouncilMember::new("b", "Beta", Model::DeepSeekR1),
        ];
        colored::control::set_override(false);
        let out = ConsoleFormatter::member_choice(&members);
        colored::control::unset_override();
        assert!(out.contains("1. Alpha"));
        assert!(out.contains("2. Beta"));
    }

    #[test]
    fn test_connection_report_lists_missing_models() {
        let report = ConnectionReport {
            loaded: vec![Model::Qwen3Thinking],
            missing: vec![Model::Qwen3Vl],
        };
        let out = ConsoleFormatter::connection_report(&report);
        assert!(out.contains("qwen/qwen3-4b-thinking-2507"));
        assert!(out.contains("qwen/qwen3-vl-4b"));
    }
}
