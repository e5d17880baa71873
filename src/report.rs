use std::fmt;

/// Per-file result of a patch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// File content changed and was written back
    Updated,
    /// Target blocks found, already in canonical form
    AlreadyCompliant,
    /// No block matched the structural pattern
    NoMatch,
    /// Candidate path does not exist
    NotFound,
}

impl Outcome {
    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::AlreadyCompliant | Outcome::NoMatch)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Updated => "updated",
            Outcome::AlreadyCompliant => "already compliant",
            Outcome::NoMatch => "no match",
            Outcome::NotFound => "not found",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub outcome: Outcome,
}

/// Outcomes of one run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: impl Into<String>, outcome: Outcome) -> &Entry {
        self.entries.push(Entry {
            label: label.into(),
            outcome,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn updated(&self) -> usize {
        self.count(Outcome::Updated)
    }

    /// Skips of both kinds: already compliant and no match
    pub fn skipped(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_skip()).count()
    }

    pub fn not_found(&self) -> usize {
        self.count(Outcome::NotFound)
    }

    pub fn processed(&self) -> usize {
        self.entries.len() - self.not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = Report::new();
        report.record("a", Outcome::Updated);
        report.record("b", Outcome::NoMatch);
        report.record("c", Outcome::AlreadyCompliant);
        let last = report.record("d", Outcome::NotFound);
        assert_eq!(last.label, "d");

        assert_eq!(report.updated(), 1);
        assert_eq!(report.skipped(), 2);
        assert_eq!(report.not_found(), 1);
        assert_eq!(report.processed(), 3);
        assert_eq!(report.entries()[1].outcome.to_string(), "no match");
    }
}
