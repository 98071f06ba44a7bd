use crate::analyzer::compute_analysis;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{AnalysisResult, CompetitorEntry, CompetitorRecord};
use url::Url;

/// Ordered list of competitors whose positions always form `1..=N`.
#[derive(Debug, Clone, Default)]
pub struct CompetitorRegistry {
    competitors: Vec<CompetitorRecord>,
}

impl CompetitorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a competitor at the next position.
    pub fn add(
        &mut self,
        domain: &str,
        url: &str,
        title: &str,
        meta_description: &str,
    ) -> AnalyzerResult<CompetitorRecord> {
        let domain = domain.trim();
        let url = url.trim();

        if domain.is_empty() {
            return Err(AnalyzerError::Validation("Domain is required".to_string()));
        }

        if url.is_empty() {
            return Err(AnalyzerError::Validation("URL is required".to_string()));
        }

        if let Err(e) = Url::parse(url) {
            tracing::debug!(url = %url, error = %e, "Rejected competitor URL");
            return Err(AnalyzerError::Validation(format!(
                "Please enter a valid URL ({})",
                url
            )));
        }

        let record = CompetitorRecord::new(
            domain,
            url,
            self.competitors.len() + 1,
            title.trim(),
            meta_description.trim(),
        );
        self.competitors.push(record.clone());

        tracing::debug!(
            position = record.position,
            domain = %record.domain,
            "Competitor added"
        );

        Ok(record)
    }

    pub fn add_entry(&mut self, entry: &CompetitorEntry) -> AnalyzerResult<CompetitorRecord> {
        self.add(
            &entry.domain,
            &entry.url,
            &entry.title,
            &entry.meta_description,
        )
    }

    /// Remove the competitor at `index` and renumber the rest.
    pub fn remove(&mut self, index: usize) -> AnalyzerResult<CompetitorRecord> {
        if index >= self.competitors.len() {
            return Err(AnalyzerError::Index {
                index,
                len: self.competitors.len(),
            });
        }

        let removed = self.competitors.remove(index);
        for (i, competitor) in self.competitors.iter_mut().enumerate() {
            competitor.position = i + 1;
        }

        Ok(removed)
    }

    pub fn count(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    pub fn competitors(&self) -> &[CompetitorRecord] {
        &self.competitors
    }

    /// Position the next added competitor will receive.
    pub fn next_position(&self) -> usize {
        self.competitors.len() + 1
    }

    pub fn clear(&mut self) {
        self.competitors.clear();
    }

    pub fn analyze(&self, keyword: &str) -> AnalyzerResult<AnalysisResult> {
        compute_analysis(&self.competitors, keyword)
    }
}
