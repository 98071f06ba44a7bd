use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub domain: String,
    pub url: String,
    pub position: usize,
    pub title: String,
    pub meta_description: String,
    pub title_length: usize,
    pub meta_length: usize,
}

impl CompetitorRecord {
    pub fn new(
        domain: &str,
        url: &str,
        position: usize,
        title: &str,
        meta_description: &str,
    ) -> Self {
        Self {
            domain: domain.to_string(),
            url: url.to_string(),
            position,
            title: title.to_string(),
            meta_description: meta_description.to_string(),
            title_length: title.chars().count(),
            meta_length: meta_description.chars().count(),
        }
    }
}

/// Raw competitor data as typed by a user or read from an input file,
/// before validation and position assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitorEntry {
    pub domain: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "meta")]
    pub meta_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opportunity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDistribution {
    pub top_3: usize,
    pub positions_4_6: usize,
    pub positions_7_10: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitlePattern {
    pub pattern: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAnalysis {
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub keyword_presence: f64,
    pub keyword_matches: usize,
    pub analyzed_count: usize,
    pub common_words: Vec<String>,
    pub patterns: Vec<TitlePattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaAnalysis {
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub keyword_presence: f64,
    pub keyword_matches: usize,
    pub analyzed_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTypeCount {
    pub tld: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAnalysis {
    pub unique_domains: usize,
    pub subdomains: usize,
    pub with_www: usize,
    pub types: Vec<DomainTypeCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingGap {
    pub start: usize,
    pub end: usize,
    pub size: usize,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    pub position: usize,
    pub domain: String,
    pub issues: Vec<String>,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    KeywordUsage,
    TitleLength,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInsight {
    pub kind: InsightKind,
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub recommendation: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub keyword: String,
    pub analysis_date: String,
    pub total_competitors: usize,
    pub average_position: f64,
    pub top_performer: CompetitorRecord,
    pub top_3_domains: Vec<String>,
    pub position_distribution: PositionDistribution,
    pub title_analysis: TitleAnalysis,
    pub meta_analysis: MetaAnalysis,
    pub domain_analysis: DomainAnalysis,
    pub ranking_gaps: Vec<RankingGap>,
    pub quick_wins: Vec<QuickWin>,
    pub content_insights: Vec<ContentInsight>,
    pub recommendations: Vec<Recommendation>,
    pub competitors: Vec<CompetitorRecord>,
}
