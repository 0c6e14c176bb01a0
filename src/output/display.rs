//! Display functions for command results

use super::formatters::{gain_bar, paint_code, render_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the trace of a solved (or failed) game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let num_slots = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", paint_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            paint_code(&step.guess),
            render_pegs(step.feedback, num_slots)
        );

        if verbose {
            println!(
                "  Candidates:  {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Expected:    [{}] {:.3} bits",
                gain_bar(step.information_gain, num_slots, step.candidates_before, 20).green(),
                step.information_gain
            );

            // Actual reduction in uncertainty
            if step.candidates_after > 0 && step.candidates_before > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.max_attempts)
                .red()
                .bold()
        );
    }
}

/// Print the analysis of a probe
pub fn print_analysis_result(result: &AnalysisResult) {
    let num_slots = result.probe.len();
    let metrics = &result.metrics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PROBE ANALYSIS:".bright_cyan().bold(),
        paint_code(&result.probe)
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} of {} possible codes:",
        result.total_candidates, result.universe_size
    );
    println!(
        "   Info gain:   [{}] {}",
        gain_bar(
            metrics.information_gain,
            num_slots,
            result.total_candidates,
            30
        )
        .green(),
        format!("{:.3} bits", metrics.information_gain).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        metrics.max_partition
    );
    println!("   Outcomes:    {}", metrics.partitions);

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    for (feedback, count) in &result.partitions {
        let pct = *count as f64 / result.total_candidates.max(1) as f64 * 100.0;
        println!(
            "   {}  {count:6} ({pct:5.1}%)",
            render_pegs(*feedback, num_slots)
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🎲 {} colors, {} slots, {} attempts",
        result.config.num_colors(),
        result.config.num_slots(),
        result.config.max_attempts()
    );

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst win:        {}",
        format!("{}", result.max_attempts).yellow()
    );
    if stats.games_lost() > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", stats.games_lost()).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if stats.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=result.config.max_attempts() {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / stats.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {attempts:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
    if stats.games_lost() > 0 {
        let pct = (stats.games_lost() as f64 / stats.total_games as f64) * 100.0;
        println!(
            "    ✗: {} {:4} ({pct:5.1}%)",
            "░".repeat(40).red(),
            stats.games_lost()
        );
    }
}
