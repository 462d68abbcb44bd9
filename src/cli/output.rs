use crate::cli::Attempt;
use crate::report::{describe, display_text, percent, AccuracyBand, SessionSummary};
use crate::{AlignedToken, ComparisonResult, Language, TokenStatus};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub colored: bool,
    pub show_reference: bool,
}

#[derive(Debug, Serialize)]
struct JsonAttempt<'a> {
    source: &'a str,
    band: AccuracyBand,
    result: &'a ComparisonResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    language: Language,
    reference: &'a str,
    attempts: Vec<JsonAttempt<'a>>,
    summary: SessionSummary,
}

pub fn print_report(
    reference_source: &str,
    attempts: &[Attempt],
    language: Language,
    format: OutputFormat,
    style: TextStyle,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(attempts, style).context("Failed to render report")?),
        OutputFormat::Json => println!("{}", render_json(reference_source, attempts, language)?),
    }
    Ok(())
}

pub fn render_json(reference_source: &str, attempts: &[Attempt], language: Language) -> Result<String> {
    let results: Vec<ComparisonResult> = attempts.iter().map(|a| a.result.clone()).collect();

    let output = JsonOutput {
        language,
        reference: reference_source,
        attempts: attempts
            .iter()
            .map(|a| JsonAttempt {
                source: &a.source,
                band: AccuracyBand::from_accuracy(a.result.accuracy),
                result: &a.result,
            })
            .collect(),
        summary: SessionSummary::from_results(&results),
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize report")
}

pub fn render_text(attempts: &[Attempt], style: TextStyle) -> Result<String, fmt::Error> {
    let mut out = String::new();

    for attempt in attempts {
        render_attempt(&mut out, attempt, style)?;
    }

    if attempts.len() > 1 {
        let results: Vec<ComparisonResult> = attempts.iter().map(|a| a.result.clone()).collect();
        let summary = SessionSummary::from_results(&results);
        let line = format!(
            "Sessions: {}  Average: {}%  Best: {}%",
            summary.total_sessions,
            percent(summary.average_accuracy),
            percent(summary.best_accuracy)
        );
        if style.colored {
            writeln!(out, "\n{}", line.bold())?;
        } else {
            writeln!(out, "\n{}", line)?;
        }
    }

    if !attempts.is_empty() {
        writeln!(out, "\n{}", legend(style.colored))?;
    }

    Ok(out)
}

fn render_attempt(out: &mut String, attempt: &Attempt, style: TextStyle) -> fmt::Result {
    let result = &attempt.result;

    if style.colored {
        writeln!(out, "\n{}", attempt.source.bold().underline())?;
    } else {
        writeln!(out, "\n{}", attempt.source)?;
    }

    let line = result
        .aligned_tokens
        .iter()
        .map(|token| paint(display_text(token, style.show_reference), token.status, style.colored))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "  {}", line)?;

    let pct = format!("{}%", percent(result.accuracy));
    let band = AccuracyBand::from_accuracy(result.accuracy);
    if style.colored {
        let pct = match band {
            AccuracyBand::Mastered => pct.green().bold(),
            AccuracyBand::Practicing => pct.yellow().bold(),
            AccuracyBand::NeedsWork => pct.red().bold(),
        };
        writeln!(out, "  Accuracy: {} {}", pct, format!("({})", band).dimmed())?;
    } else {
        writeln!(out, "  Accuracy: {} ({})", pct, band)?;
    }

    let stats = &result.statistics;
    writeln!(
        out,
        "  Words: {}  Correct: {}  Errors: {}  Near misses: {}",
        stats.total_words, stats.correct_words, stats.error_count, stats.near_miss_count
    )?;

    let mistakes: Vec<&AlignedToken> = result
        .aligned_tokens
        .iter()
        .filter(|token| token.status != TokenStatus::Correct)
        .collect();

    for (index, (token, error)) in mistakes.iter().zip(&result.errors).enumerate() {
        let detail = format!("({}, {})", error.kind, error.severity);
        if style.colored {
            writeln!(out, "    {}. {} {}", index + 1, describe(token), detail.dimmed())?;
        } else {
            writeln!(out, "    {}. {} {}", index + 1, describe(token), detail)?;
        }
    }

    Ok(())
}

/// Highlight a word by status. Without colors a one-character marker is used.
fn paint(word: &str, status: TokenStatus, colored: bool) -> String {
    if colored {
        let painted = match status {
            TokenStatus::Correct => word.green(),
            TokenStatus::NearMiss => word.yellow(),
            TokenStatus::Error => word.red().bold(),
            TokenStatus::Missing => word.dimmed().strikethrough(),
            TokenStatus::Extra => word.blue().bold(),
        };
        painted.to_string()
    } else {
        match marker(status) {
            Some(mark) => format!("{}{}", mark, word),
            None => word.to_string(),
        }
    }
}

fn marker(status: TokenStatus) -> Option<char> {
    match status {
        TokenStatus::Correct => None,
        TokenStatus::NearMiss => Some('~'),
        TokenStatus::Error => Some('!'),
        TokenStatus::Missing => Some('-'),
        TokenStatus::Extra => Some('+'),
    }
}

fn legend(colored: bool) -> String {
    let entries = [
        TokenStatus::Correct,
        TokenStatus::NearMiss,
        TokenStatus::Error,
        TokenStatus::Missing,
        TokenStatus::Extra,
    ]
    .iter()
    .map(|&status| {
        if colored {
            paint(status.label(), status, true)
        } else {
            match marker(status) {
                Some(mark) => format!("{}{}", mark, status.label()),
                None => status.label().to_string(),
            }
        }
    })
    .collect::<Vec<_>>()
    .join("  ");

    format!("Legend: {}", entries)
}

pub fn print_threshold_summary(failing: usize, total: usize, min_accuracy: f64, colored: bool) {
    let threshold = format!("{}%", percent(min_accuracy));
    println!();
    if failing == 0 {
        let line = format!("✓ All attempts reached {}", threshold);
        if colored {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    } else {
        let attempt_word = if failing == 1 { "attempt" } else { "attempts" };
        if colored {
            println!(
                "{} {} of {} {} below {}",
                "✗".red().bold(),
                failing.to_string().red().bold(),
                total,
                attempt_word,
                threshold
            );
        } else {
            println!("✗ {} of {} {} below {}", failing, total, attempt_word, threshold);
        }
    }
}
