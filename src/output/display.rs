//! Display functions for command results

use super::formatters::{format_count, percentage, ratio_bar};
use crate::commands::{InspectResult, ProcessSummary};
use colored::Colorize;

/// Print the summary of a completed run
pub fn print_process_summary(summary: &ProcessSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "UNIQUE SEQUENCES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 {}", "Input:".bright_cyan().bold());
    println!("   Word list:        {}", summary.input_path.display());
    println!("   Lines read:       {}", format_count(summary.words_read));
    println!(
        "   Sequences found:  {} ({} occurrences)",
        format_count(summary.distinct_sequences),
        format_count(summary.occurrences)
    );

    let pct = percentage(summary.unique_sequences, summary.distinct_sequences);
    println!("\n📊 {}", "Unique:".bright_cyan().bold());
    println!(
        "   [{}] {} {}",
        ratio_bar(summary.unique_sequences, summary.distinct_sequences, 30).green(),
        format_count(summary.unique_sequences).bright_yellow().bold(),
        format!("({pct:.1}%)").bright_black()
    );

    println!("\n💾 {}", "Output:".bright_cyan().bold());
    println!("   Sequences:        {}", summary.sequences_path.display());
    println!("   Source words:     {}", summary.words_path.display());
    println!(
        "   Time taken:       {:.2}s",
        summary.duration.as_secs_f64()
    );
}

/// Print the sequences of an inspected word
pub fn print_inspect_result(result: &InspectResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Word: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.sequences.is_empty() {
        println!("  {}", "No sequences".bright_black());
        return;
    }

    for report in &result.sequences {
        let status = if report.is_unique() {
            "unique".green().bold()
        } else if report.sources == 0 {
            "not in word list".bright_black()
        } else {
            format!("shared by {}", format_count(report.sources)).yellow()
        };

        match &report.first_source {
            Some(source) if report.sources > 1 => {
                println!("  {}  {status} (first: {source})", report.sequence);
            }
            _ => println!("  {}  {status}", report.sequence),
        }
    }

    println!(
        "\n{} of {} sequences unique",
        result.unique_count(),
        result.sequences.len()
    );
}
