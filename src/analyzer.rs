//! Competitor statistics and recommendation engine.
//!
//! Everything here is a pure function of the competitor list and the keyword.
//! Keyword matching is case-insensitive throughout.

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{
    AnalysisResult, CompetitorRecord, ContentInsight, DomainAnalysis, DomainTypeCount,
    InsightKind, MetaAnalysis, Opportunity, PositionDistribution, Priority, QuickWin,
    RankingGap, Recommendation, TitleAnalysis, TitlePattern,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

pub const MAX_QUICK_WINS: usize = 5;
pub const MAX_RECOMMENDATIONS: usize = 6;
pub const MAX_COMMON_WORDS: usize = 5;
pub const MIN_WORD_LENGTH: usize = 3;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
    "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
];

/// Suffixes checked in order; a domain lands in the first one it ends with.
const DOMAIN_TYPES: &[&str] = &[
    ".com", ".org", ".edu", ".gov", ".net", ".co.uk", ".io", ".ai",
];
const OTHER_DOMAIN_TYPE: &str = "other";

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word regex should be valid"));
// ASCII digits only; `\d` would also match other scripts' numerals
static DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("digit regex should be valid"));
static BRACKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\[\(]").expect("bracket regex should be valid"));
static PIPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|").expect("pipe regex should be valid"));
static COLON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(":").expect("colon regex should be valid"));
static QUESTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?").expect("question regex should be valid"));
static BRAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[|\-]").expect("brand separator regex should be valid"));

// Detection order matters: the first entry is the "top pattern" for recommendations.
static TITLE_PATTERNS: [(&str, &Lazy<Regex>); 6] = [
    ("with numbers", &DIGIT_RE),
    ("with brackets", &BRACKET_RE),
    ("with pipes", &PIPE_RE),
    ("with colons", &COLON_RE),
    ("question format", &QUESTION_RE),
    ("with brand", &BRAND_RE),
];

/// Run the full analysis, stamping the result with the current time.
pub fn compute_analysis(
    competitors: &[CompetitorRecord],
    keyword: &str,
) -> AnalyzerResult<AnalysisResult> {
    compute_analysis_at(competitors, keyword, Utc::now())
}

/// Same as [`compute_analysis`] with an explicit analysis timestamp.
pub fn compute_analysis_at(
    competitors: &[CompetitorRecord],
    keyword: &str,
    analyzed_at: DateTime<Utc>,
) -> AnalyzerResult<AnalysisResult> {
    if competitors.is_empty() {
        return Err(AnalyzerError::EmptyInput);
    }

    tracing::info!(
        keyword = %keyword,
        competitors = competitors.len(),
        "Running competitor analysis"
    );

    let positions: Vec<usize> = competitors.iter().map(|c| c.position).collect();
    let titles: Vec<&str> = competitors
        .iter()
        .filter(|c| !c.title.is_empty())
        .map(|c| c.title.as_str())
        .collect();
    let metas: Vec<&str> = competitors
        .iter()
        .filter(|c| !c.meta_description.is_empty())
        .map(|c| c.meta_description.as_str())
        .collect();

    let average_position = positions.iter().sum::<usize>() as f64 / positions.len() as f64;

    // min_by_key keeps the first of equal elements
    let top_performer = competitors
        .iter()
        .min_by_key(|c| c.position)
        .cloned()
        .ok_or(AnalyzerError::EmptyInput)?;

    let mut sorted_competitors = competitors.to_vec();
    sorted_competitors.sort_by_key(|c| c.position);

    let top_3_domains = sorted_competitors
        .iter()
        .filter(|c| c.position <= 3)
        .map(|c| c.domain.clone())
        .collect();

    let title_analysis = analyze_titles(&titles, keyword);
    let meta_analysis = analyze_meta_descriptions(&metas, keyword);
    let domains: Vec<&str> = competitors.iter().map(|c| c.domain.as_str()).collect();
    let domain_analysis = analyze_domains(&domains);

    let ranking_gaps = find_ranking_gaps(&positions);
    let quick_wins = identify_quick_wins(competitors, keyword);
    let content_insights = content_insights(&titles, keyword);
    let recommendations = generate_recommendations(&title_analysis, &meta_analysis, &ranking_gaps);

    tracing::debug!(
        gaps = ranking_gaps.len(),
        quick_wins = quick_wins.len(),
        recommendations = recommendations.len(),
        "Analysis complete"
    );

    Ok(AnalysisResult {
        keyword: keyword.to_string(),
        analysis_date: analyzed_at.to_rfc3339(),
        total_competitors: competitors.len(),
        average_position,
        top_performer,
        top_3_domains,
        position_distribution: position_distribution(&positions),
        title_analysis,
        meta_analysis,
        domain_analysis,
        ranking_gaps,
        quick_wins,
        content_insights,
        recommendations,
        competitors: sorted_competitors,
    })
}

pub fn position_distribution(positions: &[usize]) -> PositionDistribution {
    PositionDistribution {
        top_3: positions.iter().filter(|&&p| (1..=3).contains(&p)).count(),
        positions_4_6: positions.iter().filter(|&&p| (4..=6).contains(&p)).count(),
        positions_7_10: positions.iter().filter(|&&p| (7..=10).contains(&p)).count(),
    }
}

struct LengthStats {
    average: f64,
    min: usize,
    max: usize,
    matches: usize,
    ratio: f64,
}

fn length_stats(texts: &[&str], keyword: &str) -> LengthStats {
    if texts.is_empty() {
        return LengthStats {
            average: 0.0,
            min: 0,
            max: 0,
            matches: 0,
            ratio: 0.0,
        };
    }

    let lengths: Vec<usize> = texts.iter().map(|t| t.chars().count()).collect();
    let matches = texts
        .iter()
        .filter(|t| contains_keyword(t, keyword))
        .count();

    LengthStats {
        average: lengths.iter().sum::<usize>() as f64 / lengths.len() as f64,
        min: lengths.iter().copied().min().unwrap_or(0),
        max: lengths.iter().copied().max().unwrap_or(0),
        matches,
        ratio: matches as f64 / texts.len() as f64,
    }
}

pub fn analyze_titles(titles: &[&str], keyword: &str) -> TitleAnalysis {
    let stats = length_stats(titles, keyword);

    TitleAnalysis {
        average_length: stats.average,
        min_length: stats.min,
        max_length: stats.max,
        keyword_presence: stats.ratio,
        keyword_matches: stats.matches,
        analyzed_count: titles.len(),
        common_words: common_words(titles),
        patterns: title_patterns(titles),
    }
}

pub fn analyze_meta_descriptions(metas: &[&str], keyword: &str) -> MetaAnalysis {
    let stats = length_stats(metas, keyword);

    MetaAnalysis {
        average_length: stats.average,
        min_length: stats.min,
        max_length: stats.max,
        keyword_presence: stats.ratio,
        keyword_matches: stats.matches,
        analyzed_count: metas.len(),
    }
}

pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Most frequent non-stop-words across `texts`, formatted as `"word (count)"`.
pub fn common_words(texts: &[&str]) -> Vec<String> {
    let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();

    // Vec keeps first-encountered order for ties
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for text in texts {
        let cleaned = NON_WORD_RE.replace_all(&text.to_lowercase(), " ").into_owned();
        for word in cleaned.split_whitespace() {
            if word.chars().count() < MIN_WORD_LENGTH || stop_words.contains(word) {
                continue;
            }
            match index.get(word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word.to_string(), counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_COMMON_WORDS)
        .map(|(word, count)| format!("{} ({})", word, count))
        .collect()
}

pub fn title_patterns(titles: &[&str]) -> Vec<TitlePattern> {
    if titles.is_empty() {
        return Vec::new();
    }

    TITLE_PATTERNS
        .iter()
        .filter_map(|(name, re)| {
            let count = titles.iter().filter(|t| re.is_match(t)).count();
            (count > 0).then(|| TitlePattern {
                pattern: name.to_string(),
                count,
                percentage: round_one_decimal(count as f64 / titles.len() as f64 * 100.0),
            })
        })
        .collect()
}

pub fn analyze_domains(domains: &[&str]) -> DomainAnalysis {
    let unique: HashSet<&str> = domains.iter().copied().collect();

    DomainAnalysis {
        unique_domains: unique.len(),
        subdomains: domains.iter().filter(|d| d.split('.').count() > 2).count(),
        with_www: domains.iter().filter(|d| d.starts_with("www.")).count(),
        types: categorize_domains(domains),
    }
}

/// Classify a single domain by the first matching suffix.
pub fn domain_type(domain: &str) -> &'static str {
    let clean = domain.strip_prefix("www.").unwrap_or(domain).to_lowercase();
    DOMAIN_TYPES
        .iter()
        .find(|tld| clean.ends_with(*tld))
        .copied()
        .unwrap_or(OTHER_DOMAIN_TYPE)
}

pub fn categorize_domains(domains: &[&str]) -> Vec<DomainTypeCount> {
    let mut counts: Vec<DomainTypeCount> = DOMAIN_TYPES
        .iter()
        .chain(std::iter::once(&OTHER_DOMAIN_TYPE))
        .map(|tld| DomainTypeCount {
            tld: tld.to_string(),
            count: 0,
        })
        .collect();

    for domain in domains {
        let tld = domain_type(domain);
        if let Some(entry) = counts.iter_mut().find(|c| c.tld == tld) {
            entry.count += 1;
        }
    }

    counts.retain(|c| c.count > 0);
    // stable sort keeps the fixed suffix order for ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn find_ranking_gaps(positions: &[usize]) -> Vec<RankingGap> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    sorted
        .windows(2)
        .filter_map(|pair| {
            let gap = pair[1] - pair[0];
            (gap > 1).then(|| RankingGap {
                start: pair[0],
                end: pair[1],
                size: gap - 1,
                opportunity: if gap > 2 {
                    Opportunity::High
                } else {
                    Opportunity::Medium
                },
            })
        })
        .collect()
}

pub fn identify_quick_wins(competitors: &[CompetitorRecord], keyword: &str) -> Vec<QuickWin> {
    let mut sorted: Vec<&CompetitorRecord> = competitors.iter().collect();
    sorted.sort_by_key(|c| c.position);

    sorted
        .into_iter()
        .filter_map(|comp| {
            let mut issues = Vec::new();

            if !comp.title.is_empty() && !contains_keyword(&comp.title, keyword) {
                issues.push("Missing target keyword in title".to_string());
            }

            if !comp.title.is_empty() && !(30..=65).contains(&comp.title_length) {
                issues.push(format!("Title length ({}) not optimized", comp.title_length));
            }

            if !comp.meta_description.is_empty() && comp.meta_length < 120 {
                issues.push("Meta description too short".to_string());
            }

            if issues.is_empty() {
                return None;
            }

            let opportunity = match comp.position {
                0..=5 => Opportunity::High,
                6..=8 => Opportunity::Medium,
                _ => Opportunity::Low,
            };

            Some(QuickWin {
                position: comp.position,
                domain: comp.domain.clone(),
                issues,
                opportunity,
            })
        })
        .take(MAX_QUICK_WINS)
        .collect()
}

pub fn content_insights(titles: &[&str], keyword: &str) -> Vec<ContentInsight> {
    let mut insights = Vec::new();

    let usage = if titles.is_empty() {
        "0".to_string()
    } else {
        let matches = titles.iter().filter(|t| contains_keyword(t, keyword)).count();
        format!("{:.1}", matches as f64 / titles.len() as f64 * 100.0)
    };

    insights.push(ContentInsight {
        kind: InsightKind::KeywordUsage,
        title: "Keyword Usage in Titles".to_string(),
        value: format!("{}% of competitors use target keyword", usage),
    });

    if !titles.is_empty() {
        let total: usize = titles.iter().map(|t| t.chars().count()).sum();
        let average = total as f64 / titles.len() as f64;
        insights.push(ContentInsight {
            kind: InsightKind::TitleLength,
            title: "Title Length Optimization".to_string(),
            // round() takes .5 up, unlike `{:.0}` which rounds ties to even
            value: format!("Average: {} characters", average.round()),
        });
    }

    insights
}

/// Build the recommendation list in fixed priority order, keeping the first six.
pub fn generate_recommendations(
    titles: &TitleAnalysis,
    metas: &MetaAnalysis,
    gaps: &[RankingGap],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // No titles means there is no ratio to judge
    if titles.analyzed_count > 0 && titles.keyword_presence < 0.7 {
        recommendations.push(Recommendation {
            category: "Title Optimization".to_string(),
            priority: Priority::High,
            recommendation: format!(
                "Include your target keyword in the title - only {:.1}% of competitors do this",
                titles.keyword_presence * 100.0
            ),
            impact: "High - Better relevance and click-through rates".to_string(),
        });
    }

    if titles.average_length < 45.0 {
        recommendations.push(Recommendation {
            category: "Title Length".to_string(),
            priority: Priority::Medium,
            recommendation:
                "Consider longer titles (50-60 characters) to include more descriptive keywords"
                    .to_string(),
            impact: "Medium - Better keyword coverage and user clarity".to_string(),
        });
    } else if titles.average_length > 65.0 {
        recommendations.push(Recommendation {
            category: "Title Length".to_string(),
            priority: Priority::Medium,
            recommendation:
                "Shorten titles to under 60 characters to avoid truncation in search results"
                    .to_string(),
            impact: "Medium - Improved visibility and click-through rates".to_string(),
        });
    }

    if metas.average_length < 140.0 {
        recommendations.push(Recommendation {
            category: "Meta Description".to_string(),
            priority: Priority::Medium,
            recommendation:
                "Write longer meta descriptions (150-160 characters) to maximize SERP real estate"
                    .to_string(),
            impact: "Medium - Better CTR through more compelling descriptions".to_string(),
        });
    }

    if let Some(gap) = gaps.first() {
        recommendations.push(Recommendation {
            category: "Ranking Opportunities".to_string(),
            priority: Priority::High,
            recommendation: format!(
                "Target positions {}-{} - weak competition detected",
                gap.start + 1,
                gap.end - 1
            ),
            impact: "High - Quick ranking improvements possible".to_string(),
        });
    }

    if let Some(top) = titles.patterns.first()
        && top.percentage > 40.0
    {
        recommendations.push(Recommendation {
            category: "Content Pattern".to_string(),
            priority: Priority::Low,
            recommendation: format!(
                "Consider using {} in titles - {:.1}% of competitors use this pattern",
                top.pattern, top.percentage
            ),
            impact: "Low - Alignment with successful competitor strategies".to_string(),
        });
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
