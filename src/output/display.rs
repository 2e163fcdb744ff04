//! Display functions for command results

use super::formatters::{count_noun, create_progress_bar, length_badge};
use crate::commands::{SolutionsResult, SurveyStatistics};
use colored::Colorize;

/// Print every word that can be scored from a root word
pub fn print_solutions(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words can be spelled from this root.".red());
        return;
    }

    println!(
        "\n🏆 Maximum score: {}",
        result.max_score().to_string().bright_yellow().bold()
    );

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let most = result.by_length().values().copied().max().unwrap_or(0);
    for (len, count) in result.by_length() {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {len:2}: {} {count:4}", bar.green());
    }

    println!("\n📜 {}", "Words:".bright_cyan().bold());
    for word in &result.words {
        println!("   {} {}", length_badge(word).bright_black(), word);
    }
}

/// Print the result of surveying root words
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:     {}", stats.total_roots);
    println!("   Total solutions:    {}", stats.total_solutions);
    println!(
        "   Average per root:   {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:         {:.2}s", stats.total_time.as_secs_f64());

    if !stats.richest.is_empty() {
        println!("\n🌟 {}", "Richest roots:".bright_cyan().bold());
        for summary in &stats.richest {
            println!(
                "   {:<10} {}",
                summary.root.green(),
                count_noun(summary.solutions, "word", "words")
            );
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n🥀 {}", "Poorest roots:".bright_cyan().bold());
        for summary in &stats.poorest {
            println!(
                "   {:<10} {}",
                summary.root.yellow(),
                count_noun(summary.solutions, "word", "words")
            );
        }
    }

    if stats.unplayable.is_empty() {
        println!("\n{}", "✅ Every root word has at least one solution".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "❌ {} with no solutions:",
                count_noun(stats.unplayable.len(), "root", "roots")
            )
            .red()
            .bold()
        );
        for root in &stats.unplayable {
            println!("   • {root}");
        }
    }
}
