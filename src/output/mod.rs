//! Report output
//!
//! - **text**: human-readable console report
//! - **json**: machine-readable report via serde_json

pub mod json;
pub mod text;

use crate::column::ColumnModel;
use crate::distribution::DistributionSummary;
use serde::Serialize;

/// Everything reported for one synthesized column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub column: String,
    pub rows: usize,
    pub prop_missing: f64,
    pub selected: DistributionSummary,
    pub scores: Vec<ScoreEntry>,
    pub synthetic: Vec<Option<i64>>,
}

/// One candidate's criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub name: String,
    /// `None` when the model cannot produce the column at all
    pub criterion: Option<f64>,
    pub selected: bool,
}

impl ColumnReport {
    pub fn new(model: &ColumnModel, synthetic: Vec<Option<i64>>) -> Self {
        let scores = model
            .scores
            .iter()
            .enumerate()
            .map(|(i, score)| ScoreEntry {
                name: score.name.clone(),
                criterion: score.criterion.is_finite().then_some(score.criterion),
                selected: model.selected == Some(i),
            })
            .collect();

        Self {
            column: model.name.clone(),
            rows: model.n_rows,
            prop_missing: model.prop_missing,
            selected: model.summary(),
            scores,
            synthetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{fit_column, ColumnSpec};
    use crate::selection::Registry;

    #[test]
    fn test_report_marks_selected_and_impossible() {
        let values = vec![Some(1), Some(1), Some(2), None];
        let model =
            fit_column("score", &values, &ColumnSpec::default(), &Registry::discrete()).unwrap();
        let report = ColumnReport::new(&model, vec![Some(2), None]);

        assert_eq!(report.column, "score");
        assert_eq!(report.rows, 4);
        assert_eq!(report.selected.name, "DiscreteUniformDistribution");
        assert_eq!(report.scores.len(), 2);

        let uniform = &report.scores[0];
        assert!(uniform.selected);
        assert!(uniform.criterion.is_some());

        let key = &report.scores[1];
        assert!(!key.selected);
        assert_eq!(key.criterion, None);
    }
}
