//! Text rendering of an analysis outcome.
//!
//! Pure string building so the output layout can be tested without a terminal.
//! `colored = true` adds ANSI styling via crossterm.

use crate::domain::{AnalysisOutcome, AnalysisResult, AttritionRisk, ModelResponse};
use crossterm::style::Stylize;

/// Shown before the first analysis and whenever the feedback is blank.
pub const IDLE_MESSAGE: &str = "Please enter employee feedback and choose Analyze.";

/// Shown next to the raw output when no JSON object could be recovered.
pub const PARSE_ERROR_NOTICE: &str =
    "Failed to parse JSON from the model response. Showing raw output above.";

const RAW_HEADING: &str = "Analysis Result (Raw Output)";
const PARSED_HEADING: &str = "Parsed Result";

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
/// `"very HIGH"` becomes `"Very High"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

fn heading(text: &str, colored: bool) -> String {
    if colored {
        text.bold().underlined().to_string()
    } else {
        text.to_string()
    }
}

fn label(text: &str, colored: bool) -> String {
    if colored {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn risk_text(result: &AnalysisResult, colored: bool) -> String {
    let text = title_case(&result.attrition_risk());
    if !colored {
        return text;
    }
    match result.risk_level() {
        AttritionRisk::No | AttritionRisk::Low => text.green().bold().to_string(),
        AttritionRisk::Medium => text.yellow().bold().to_string(),
        AttritionRisk::High => text.red().bold().to_string(),
        AttritionRisk::Unknown => text.bold().to_string(),
    }
}

/// Raw response as a preformatted block. Failures are shown the same way.
pub fn render_raw(raw: &ModelResponse, colored: bool) -> String {
    let mut out = heading(RAW_HEADING, colored);
    out.push('\n');
    for line in raw.as_text().lines() {
        out.push_str("  │ ");
        out.push_str(line);
        out.push('\n');
    }
    if raw.as_text().is_empty() {
        out.push_str("  │\n");
    }
    out
}

/// Risk (title-cased), explanation and numbered strategies.
pub fn render_parsed(result: &AnalysisResult, colored: bool) -> String {
    let mut out = heading(PARSED_HEADING, colored);
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        label("Attrition Risk:", colored),
        risk_text(result, colored)
    ));
    out.push_str(&format!(
        "{} {}\n",
        label("Explanation:", colored),
        result.explanation()
    ));
    out.push_str(&label("Engagement Strategies:", colored));
    out.push('\n');
    for (i, strategy) in result.engagement_strategies().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, strategy));
    }
    out
}

/// Parse failure notice.
pub fn render_parse_error(colored: bool) -> String {
    if colored {
        format!("{}\n", PARSE_ERROR_NOTICE.red())
    } else {
        format!("{}\n", PARSE_ERROR_NOTICE)
    }
}

/// Full output area for one analysis.
pub fn render_outcome(outcome: &AnalysisOutcome, colored: bool) -> String {
    let mut out = render_raw(&outcome.raw, colored);
    out.push('\n');
    match &outcome.parsed {
        Some(result) => out.push_str(&render_parsed(result, colored)),
        None => out.push_str(&render_parse_error(colored)),
    }
    out
}
