//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::Colorize;

/// A color's name printed in its own display color
#[must_use]
pub fn paint_color(color: Color) -> String {
    let (r, g, b) = color.rgb();
    color.name().truecolor(r, g, b).bold().to_string()
}

/// A code as space-separated painted color names
#[must_use]
pub fn paint_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| paint_color(c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback as colored key pegs
#[must_use]
pub fn render_pegs(feedback: Feedback, num_slots: usize) -> String {
    feedback
        .to_pegs(num_slots)
        .chars()
        .map(|peg| match peg {
            '●' => peg.to_string().green().bold().to_string(),
            '○' => peg.to_string().yellow().to_string(),
            _ => peg.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Information gain as a bar scaled to the most a probe could gain
///
/// A probe can never gain more than `log₂` of the number of distinct feedback
/// values, nor more than `log₂` of the candidate count.
#[must_use]
pub fn gain_bar(gain: f64, num_slots: usize, candidates: usize, width: usize) -> String {
    // (exact, partial) pairs with exact + partial ≤ n, minus (n-1, 1)
    let outcomes = (num_slots + 1) * (num_slots + 2) / 2 - 1;
    let max_bits = (outcomes.min(candidates.max(1)) as f64).log2();
    create_progress_bar(gain, max_bits, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_keep_counts() {
        let pegs = render_pegs(Feedback::new(2, 1), 5);
        assert_eq!(pegs.matches('●').count(), 2);
        assert_eq!(pegs.matches('○').count(), 1);
        assert_eq!(pegs.matches('·').count(), 2);
    }

    #[test]
    fn painted_code_mentions_every_color() {
        let code: Code = "red lime red".parse().unwrap();
        let painted = paint_code(&code);
        assert_eq!(painted.matches("red").count(), 2);
        assert!(painted.contains("lime"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn gain_bar_full_for_perfect_split() {
        // Two candidates told apart exactly: one bit out of one
        assert_eq!(gain_bar(1.0, 4, 2, 8), "████████");
    }
}
