//! Renders a quiz submission as a Telegram Markdown message.

use std::fmt::Write;

use crate::core::coercion::{display_field, numeric_field};
use crate::core::models::{Answer, Submission};

pub const TOP_TIER_THRESHOLD: f64 = 80.0;
pub const MIDDLE_TIER_THRESHOLD: f64 = 60.0;

/// Comment shown on the performance line for a given percentage score.
///
/// `NaN` (an absent or non-numeric score) falls into the lowest tier.
#[must_use]
pub fn performance_comment(score: f64) -> &'static str {
    if score >= TOP_TIER_THRESHOLD {
        "Excellent! 🎉"
    } else if score >= MIDDLE_TIER_THRESHOLD {
        "Good! 👍"
    } else {
        "Needs improvement! 📚"
    }
}

/// Format a single numbered result line (without trailing newline).
///
/// `number` is 1-based.
#[must_use]
pub fn format_answer_line(number: usize, answer: &Answer) -> String {
    let selected = display_field(answer.selected.as_ref());
    if answer.is_correct {
        format!("Q{number}: ✅ - Your answer: \"{selected}\"")
    } else {
        format!(
            "Q{number}: ❌ - Your answer: \"{selected}\" (Correct: \"{}\")",
            display_field(answer.correct.as_ref())
        )
    }
}

/// Build the full results message.
///
/// The output is a pure function of its inputs; `completed_at` is rendered
/// verbatim on the last line.
///
/// # Examples
///
/// ```
/// use quiz_notifier::core::models::Submission;
/// use quiz_notifier::telegram::format_results_message;
///
/// let submission: Submission = serde_json::from_value(serde_json::json!({
///     "name": "Ada",
///     "surname": "Lee",
///     "correctAnswers": 1,
///     "totalQuestions": 1,
///     "score": 100,
///     "answers": [{ "selected": "taller", "correct": "taller", "isCorrect": true }]
/// }))
/// .unwrap();
///
/// let message = format_results_message(&submission, "1/2/2026, 9:00:00 AM");
/// assert!(message.contains("👤 *Student:* Ada Lee"));
/// assert!(message.contains("Q1: ✅ - Your answer: \"taller\""));
/// ```
#[must_use]
pub fn format_results_message(submission: &Submission, completed_at: &str) -> String {
    let mut message = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(message, "🎯 *Adjectives & Degrees Test Results*");
    let _ = writeln!(
        message,
        "👤 *Student:* {} {}",
        display_field(submission.name.as_ref()),
        display_field(submission.surname.as_ref())
    );
    let _ = writeln!(
        message,
        "📊 *Score:* {}/{} ({}%)",
        display_field(submission.correct_answers.as_ref()),
        display_field(submission.total_questions.as_ref()),
        display_field(submission.score.as_ref())
    );
    let _ = writeln!(message, "📝 *Test:* Comparative and Superlative Degrees\n");
    let _ = writeln!(message, "*Detailed Results:*");

    for (index, answer) in submission.answers.iter().enumerate() {
        let _ = writeln!(message, "{}", format_answer_line(index + 1, answer));
    }

    let _ = writeln!(
        message,
        "\n🏆 *Performance:* {}",
        performance_comment(numeric_field(submission.score.as_ref()))
    );
    let _ = write!(message, "⏰ *Test completed at:* {completed_at}");

    message
}
