//! Survey root words - how playable is the word source?
//!
//! Counts the solutions for every root word and summarizes the spread.

use super::solutions::find_solutions;
use crate::core::RootWord;
use crate::dictionary::WordListDictionary;
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Number of solutions for one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub solutions: usize,
}

/// Statistics across surveyed root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub total_solutions: usize,
    pub average_solutions: f64,
    /// Up to five roots with the most solutions, richest first
    pub richest: Vec<RootSummary>,
    /// Up to five roots with the fewest solutions, poorest first
    pub poorest: Vec<RootSummary>,
    /// Roots no word can be scored from
    pub unplayable: Vec<String>,
    pub total_time: Duration,
}

const HIGHLIGHTS: usize = 5;

/// Count solutions for each root word in `source` (or the first `limit` of them)
#[must_use]
pub fn run_survey(
    source: &WordSource,
    dictionary: &WordListDictionary,
    language: &str,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = source
        .words()
        .iter()
        .take(limit.unwrap_or(source.len()))
        .collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut summaries = Vec::with_capacity(roots.len());

    for root in roots {
        let result = find_solutions(&RootWord::new(root), dictionary, language);
        pb.set_message(root.clone());
        pb.inc(1);

        summaries.push(RootSummary {
            root: result.root,
            solutions: result.words.len(),
        });
    }

    pb.finish_with_message("Complete!");

    summarize(summaries, start.elapsed())
}

fn summarize(mut summaries: Vec<RootSummary>, total_time: Duration) -> SurveyStatistics {
    let total_roots = summaries.len();
    let total_solutions: usize = summaries.iter().map(|s| s.solutions).sum();
    let average_solutions = if total_roots > 0 {
        total_solutions as f64 / total_roots as f64
    } else {
        0.0
    };

    let unplayable = summaries
        .iter()
        .filter(|s| s.solutions == 0)
        .map(|s| s.root.clone())
        .collect();

    // Ties broken alphabetically so output is stable
    summaries.sort_by(|a, b| b.solutions.cmp(&a.solutions).then_with(|| a.root.cmp(&b.root)));
    let richest = summaries.iter().take(HIGHLIGHTS).cloned().collect();

    summaries.sort_by(|a, b| a.solutions.cmp(&b.solutions).then_with(|| a.root.cmp(&b.root)));
    let poorest = summaries.iter().take(HIGHLIGHTS).cloned().collect();

    SurveyStatistics {
        total_roots,
        total_solutions,
        average_solutions,
        richest,
        poorest,
        unplayable,
        total_time,
    }
}
