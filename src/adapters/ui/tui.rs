//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> feedback entry -> spinner while the model runs -> rendered result.

use super::{progress, render};
use crate::domain::{DomainError, FeedbackInput};
use crate::ports::InputPort;
use crate::usecases::AnalysisService;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, InquireError, Select, Text};
use std::fmt;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AnalyzeInEditor,
    AnalyzeInline,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 3] = [Self::AnalyzeInEditor, Self::AnalyzeInline, Self::Quit];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AnalyzeInEditor => "Analyze feedback (multi-line editor)",
            Self::AnalyzeInline => "Analyze feedback (single line)",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Neon theme for all inquire prompts, matching the banner palette.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(Color::LightCyan))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<AnalysisService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<AnalysisService>) -> Self {
        Self { service }
    }

    /// Read feedback text. `Ok(None)` when the user backs out of the prompt.
    fn read_feedback(&self, action: MenuAction) -> Result<Option<String>, DomainError> {
        let answer = match action {
            MenuAction::AnalyzeInEditor => Editor::new("Enter Employee Feedback:")
                .with_file_extension(".txt")
                .with_help_message("Opens $VISUAL/$EDITOR; save and close to submit")
                .prompt(),
            _ => Text::new("Enter Employee Feedback:").prompt(),
        };
        match answer {
            Ok(text) => Ok(Some(text)),
            Err(e) if is_cancel(&e) => Ok(None),
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }

    async fn analyze(&self, feedback: &FeedbackInput) {
        let pb = progress::spinner("Analyzing feedback...");
        let outcome = self.service.run(feedback).await;
        pb.finish_and_clear();

        let colored = std::io::stdout().is_terminal();
        println!();
        print!("{}", render::render_outcome(&outcome, colored));
        println!();
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        println!("Model: {}", self.service.model_label());
        println!("{}\n", render::IDLE_MESSAGE);

        loop {
            let action = match Select::new("What would you like to do?", MenuAction::ALL.to_vec())
                .prompt()
            {
                Ok(action) => action,
                Err(e) if is_cancel(&e) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };
            if action == MenuAction::Quit {
                break;
            }

            let Some(text) = self.read_feedback(action)? else {
                continue;
            };

            match FeedbackInput::new(text) {
                Ok(feedback) => self.analyze(&feedback).await,
                Err(DomainError::EmptyFeedback) => {
                    debug!("blank feedback submitted");
                    println!("{}\n", render::IDLE_MESSAGE);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = MenuAction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels[0].starts_with("Analyze feedback"));
        assert_eq!(labels[2], "Quit");
    }

    #[test]
    fn test_cancel_detection() {
        assert!(is_cancel(&InquireError::OperationCanceled));
        assert!(is_cancel(&InquireError::OperationInterrupted));
        assert!(!is_cancel(&InquireError::NotTTY));
    }
}
