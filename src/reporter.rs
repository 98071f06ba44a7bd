use crate::models::{AnalysisResult, Opportunity, Priority};
use colored::*;

pub struct Reporter;

impl Reporter {
    pub fn print_text_report(report: &AnalysisResult) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "SERPLens - Competitor Analysis".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "Keyword".bright_white().bold(), report.keyword);
        println!(
            "{}: {}",
            "Timestamp".bright_white().bold(),
            report.analysis_date
        );
        println!();

        // Overview
        println!("{}", "Overview".bright_yellow().bold().underline());
        println!(
            "  Competitors Analyzed: {}",
            report.total_competitors.to_string().bright_green()
        );
        println!(
            "  Average Position:     {}",
            format!("{:.1}", report.average_position).bright_green()
        );
        println!(
            "  Top Performer:        {} (#{})",
            report.top_performer.domain.bright_white(),
            report.top_performer.position
        );
        if !report.top_3_domains.is_empty() {
            println!("  Top 3 Domains:        {}", report.top_3_domains.join(", "));
        }
        println!(
            "  Distribution:         top 3: {}, 4-6: {}, 7-10: {}",
            report.position_distribution.top_3,
            report.position_distribution.positions_4_6,
            report.position_distribution.positions_7_10
        );
        println!();

        // Domains
        let domains = &report.domain_analysis;
        println!("{}", "Domains".bright_yellow().bold().underline());
        println!("  Unique:     {}", domains.unique_domains);
        println!("  Subdomains: {}", domains.subdomains);
        println!("  With www:   {}", domains.with_www);
        if !domains.types.is_empty() {
            let types: Vec<String> = domains
                .types
                .iter()
                .map(|t| format!("{} ({})", t.tld, t.count))
                .collect();
            println!("  Types:      {}", types.join(", "));
        }
        println!();

        let titles = &report.title_analysis;
        if titles.analyzed_count > 0 {
            println!("{}", "Titles".bright_yellow().bold().underline());
            println!(
                "  Average Length:   {:.1} characters",
                titles.average_length
            );
            println!(
                "  Length Range:     {}-{}",
                titles.min_length, titles.max_length
            );
            println!(
                "  Keyword Presence: {}",
                Self::presence(titles.keyword_matches, titles.analyzed_count)
            );
            if !titles.common_words.is_empty() {
                println!("  Common Words:     {}", titles.common_words.join(", "));
            }
            for pattern in &titles.patterns {
                println!(
                    "  Pattern:          {} - {} ({:.1}%)",
                    pattern.pattern, pattern.count, pattern.percentage
                );
            }
            println!();
        }

        let metas = &report.meta_analysis;
        if metas.analyzed_count > 0 {
            println!("{}", "Meta Descriptions".bright_yellow().bold().underline());
            println!(
                "  Average Length:   {:.1} characters",
                metas.average_length
            );
            println!(
                "  Length Range:     {}-{}",
                metas.min_length, metas.max_length
            );
            println!(
                "  Keyword Presence: {}",
                Self::presence(metas.keyword_matches, metas.analyzed_count)
            );
            println!();
        }

        if !report.ranking_gaps.is_empty() || !report.quick_wins.is_empty() {
            println!("{}", "Opportunities".bright_yellow().bold().underline());
            for gap in &report.ranking_gaps {
                println!(
                    "  [{}] Gap between #{} and #{} ({} open position(s))",
                    Self::opportunity_label(gap.opportunity),
                    gap.start,
                    gap.end,
                    gap.size
                );
            }
            for win in &report.quick_wins {
                println!(
                    "  [{}] #{} {}",
                    Self::opportunity_label(win.opportunity),
                    win.position,
                    win.domain.bright_white()
                );
                for issue in &win.issues {
                    println!("        - {}", issue);
                }
            }
            println!();
        }

        if !report.recommendations.is_empty() {
            println!("{}", "Recommendations".bright_yellow().bold().underline());
            for rec in &report.recommendations {
                let priority = match rec.priority {
                    Priority::High => "HIGH".bright_red(),
                    Priority::Medium => "MED ".yellow(),
                    Priority::Low => "LOW ".bright_cyan(),
                };
                println!("  [{}] {}: {}", priority, rec.category.bold(), rec.recommendation);
                println!("         {}", rec.impact.dimmed());
            }
            println!();
        }

        for insight in &report.content_insights {
            println!("  {} {}", format!("{}:", insight.title).dimmed(), insight.value);
        }

        println!();
        println!("{}", "Competitors".bright_yellow().bold().underline());
        for comp in &report.competitors {
            println!("  {}. {}", comp.position, comp.domain.bright_white());
            if !comp.title.is_empty() {
                println!("     Title: {}", Self::truncate(&comp.title, 80));
            }
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    /// `matches/total (pct%)`, matching the keyword presence summary line.
    pub fn presence(matches: usize, total: usize) -> String {
        let pct = if total > 0 {
            matches as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        format!("{}/{} ({:.1}%)", matches, total, pct)
    }

    fn opportunity_label(opportunity: Opportunity) -> ColoredString {
        match opportunity {
            Opportunity::High => "HIGH".bright_green(),
            Opportunity::Medium => "MED ".yellow(),
            Opportunity::Low => "LOW ".dimmed(),
        }
    }

    fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() > max_chars {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        }
    }
}
