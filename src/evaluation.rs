//! Summary evaluation by sentence-set overlap
//!
//! A machine summary is compared with a reference summary by exact match of
//! their segmented sentences. Precision, recall and F1 are computed per
//! pair and averaged over all pairs that had sentences on both sides.

use crate::errors::TextRankError;
use crate::nlp::segmenter::Segmenter;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::path::Path;

/// Scores for one reference/machine pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    /// Identifier of the pair (article number)
    pub id: usize,
    /// Sentences present in both summaries
    pub matches: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Scores for every evaluated pair plus their mean F1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub scores: Vec<PairScore>,
    /// Mean F1 over `scores`, `None` when nothing was scored
    pub average_f1: Option<f64>,
}

/// A reference summary and the machine summary to compare against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePair {
    pub id: usize,
    pub reference: String,
    pub machine: String,
}

/// Pairs read from disk, plus the articles whose files could not be read
#[derive(Debug, Default)]
pub struct LoadedArticles {
    pub pairs: Vec<ArticlePair>,
    /// Article id and read error for each pair skipped because a file
    /// existed but was unreadable
    pub unreadable: Vec<(usize, TextRankError)>,
}

impl LoadedArticles {
    /// Ids of the unreadable articles
    pub fn unreadable_ids(&self) -> Vec<usize> {
        self.unreadable.iter().map(|(id, _)| *id).collect()
    }
}

/// Distinct sentences of `text`
pub fn sentence_set(segmenter: &Segmenter, text: &str) -> FxHashSet<String> {
    segmenter
        .segment(text)
        .into_iter()
        .map(|s| s.text)
        .collect()
}

/// Score a machine summary against a reference summary
///
/// Returns `None` when either summary has no sentences.
pub fn score_pair(
    segmenter: &Segmenter,
    id: usize,
    reference: &str,
    machine: &str,
) -> Option<PairScore> {
    let reference = sentence_set(segmenter, reference);
    let machine = sentence_set(segmenter, machine);
    if reference.is_empty() || machine.is_empty() {
        return None;
    }

    let matches = reference.intersection(&machine).count();
    let precision = matches as f64 / machine.len() as f64;
    let recall = matches as f64 / reference.len() as f64;
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    Some(PairScore {
        id,
        matches,
        precision,
        recall,
        f1,
    })
}

/// Score every pair and average their F1
///
/// Both sides are split with `segmenter`, which should match the one the
/// machine summaries were produced with.
pub fn evaluate<'a>(
    segmenter: &Segmenter,
    pairs: impl IntoIterator<Item = &'a ArticlePair>,
) -> EvaluationReport {
    let scores: Vec<PairScore> = pairs
        .into_iter()
        .filter_map(|pair| {
            let score = score_pair(segmenter, pair.id, &pair.reference, &pair.machine);
            #[cfg(feature = "tracing")]
            if score.is_none() {
                tracing::warn!(id = pair.id, "empty summary, pair skipped");
            }
            score
        })
        .collect();

    let average_f1 = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().map(|s| s.f1).sum::<f64>() / scores.len() as f64)
    };

    EvaluationReport { scores, average_f1 }
}

/// Read `article{i}_reference1.txt` and `article{i}_system1.txt` for
/// `i` in `1..=count`
///
/// Pairs with a missing file are skipped. Pairs with a file that cannot be
/// read (including invalid UTF-8) are skipped too and listed in
/// [`LoadedArticles::unreadable`], so one bad article never hides the rest.
pub fn load_article_pairs(
    reference_dir: &Path,
    machine_dir: &Path,
    count: usize,
) -> LoadedArticles {
    let mut loaded = LoadedArticles::default();

    for id in 1..=count {
        let reference_path = reference_dir.join(format!("article{id}_reference1.txt"));
        let machine_path = machine_dir.join(format!("article{id}_system1.txt"));

        let reference = match read_optional(&reference_path) {
            Ok(Some(text)) => text,
            Ok(None) => continue,
            Err(err) => {
                loaded.unreadable.push((id, err));
                continue;
            }
        };
        let machine = match read_optional(&machine_path) {
            Ok(Some(text)) => text,
            Ok(None) => continue,
            Err(err) => {
                loaded.unreadable.push((id, err));
                continue;
            }
        };

        loaded.pairs.push(ArticlePair {
            id,
            reference,
            machine,
        });
    }

    loaded
}

fn read_optional(path: &Path) -> Result<Option<String>, TextRankError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), "file not found, pair skipped");
            Ok(None)
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %path.display(), error = %err, "unreadable file, pair skipped");
            Err(TextRankError::io(path, err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DANDA;

    fn pair(id: usize, reference: &str, machine: &str) -> ArticlePair {
        ArticlePair {
            id,
            reference: reference.to_string(),
            machine: machine.to_string(),
        }
    }

    #[test]
    fn test_perfect_match() {
        let score = score_pair(&Segmenter::default(), 1, "अ। ब।", "ब। अ।").unwrap();

        assert_eq!(score.matches, 2);
        assert_eq!(score.precision, 1.0);
        assert_eq!(score.recall, 1.0);
        assert_eq!(score.f1, 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // Reference has 4 sentences, machine has 2, one shared
        let score = score_pair(&Segmenter::default(), 2, "अ। ब। स। द।", "अ। क।").unwrap();

        assert_eq!(score.matches, 1);
        assert_eq!(score.precision, 0.5);
        assert_eq!(score.recall, 0.25);
        assert!((score.f1 - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_overlap() {
        let score = score_pair(&Segmenter::default(), 3, "अ।", "ब।").unwrap();
        assert_eq!(score.f1, 0.0);
    }

    #[test]
    fn test_empty_side_is_skipped() {
        assert!(score_pair(&Segmenter::default(), 4, "", "अ।").is_none());
        assert!(score_pair(&Segmenter::default(), 4, "अ।", " । ").is_none());
    }

    #[test]
    fn test_exact_match_only() {
        // No partial credit for near-identical sentences
        let score = score_pair(&Segmenter::default(), 5, "राम घर गया।", "राम घर गए।").unwrap();
        assert_eq!(score.matches, 0);
    }

    #[test]
    fn test_lines_are_joined_before_splitting() {
        let score = score_pair(&Segmenter::default(), 6, "राम घर\nगया।", "राम घर गया।").unwrap();
        assert_eq!(score.matches, 1);
    }

    #[test]
    fn test_evaluate_averages_f1() {
        let pairs = vec![
            pair(1, "अ। ब।", "अ। ब।"),
            pair(2, "अ।", "ब।"),
            pair(3, "", "ब।"),
        ];

        let report = evaluate(&Segmenter::default(), &pairs);

        assert_eq!(report.scores.len(), 2);
        assert_eq!(report.scores[0].id, 1);
        assert_eq!(report.scores[1].id, 2);
        assert_eq!(report.average_f1, Some(0.5));
    }

    #[test]
    fn test_evaluate_nothing() {
        let report = evaluate(&Segmenter::default(), &Vec::<ArticlePair>::new());
        assert!(report.scores.is_empty());
        assert_eq!(report.average_f1, None);
    }

    #[test]
    fn test_segmenter_delimiter_is_used() {
        // With '.' as the delimiter, "अ. ब." is two sentences, not one
        let segmenter = Segmenter::new('.', '!');
        let score = score_pair(&segmenter, 7, "अ. ब.", "ब.").unwrap();

        assert_eq!(score.matches, 1);
        assert_eq!(score.recall, 0.5);

        // The default danda segmenter sees a single unmatched sentence
        let score = score_pair(&Segmenter::new(DANDA, '?'), 7, "अ. ब.", "ब.").unwrap();
        assert_eq!(score.matches, 0);
    }
}
