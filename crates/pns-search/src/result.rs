// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::stats::SearchStatistics;

/// Why a search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search space was exhausted (or fully dominated); the retained
    /// solutions are exactly the n best.
    Completed,
    /// A monitor requested termination (time limit, interrupt). The string
    /// carries the reason. The retained solutions are a valid but possibly
    /// incomplete n-best approximation; this is not an error condition.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "Completed"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The summary of a finished search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl SearchOutcome {
    #[inline]
    pub fn new(reason: TerminationReason, statistics: SearchStatistics) -> Self {
        Self { reason, statistics }
    }

    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self.reason, TerminationReason::Completed)
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SearchOutcome({})", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_predicates() {
        let completed = SearchOutcome::new(TerminationReason::Completed, Default::default());
        assert!(completed.is_completed());
        assert!(!completed.is_aborted());

        let aborted = SearchOutcome::new(
            TerminationReason::Aborted("time limit reached".to_string()),
            Default::default(),
        );
        assert!(aborted.is_aborted());
        assert!(!aborted.is_completed());
    }

    #[test]
    fn test_display_includes_reason() {
        let aborted = TerminationReason::Aborted("time limit reached".to_string());
        assert_eq!(format!("{}", aborted), "Aborted: time limit reached");
        assert_eq!(format!("{}", TerminationReason::Completed), "Completed");
    }
}
