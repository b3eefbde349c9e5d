use crate::{catalog::LabelCatalog, error::InferenceError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub predicted_class: String,
    /// Top score as a percentage in `[0, 100]`, two decimals.
    pub confidence: f64,
    pub classes: LabelCatalog,
}

/// Index and value of the highest score. Ties keep the first occurrence.
pub fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    let mut iter = scores.iter().copied().enumerate();
    let (mut best_idx, mut best_score) = iter.next()?;
    for (i, v) in iter {
        if v > best_score {
            best_idx = i;
            best_score = v;
        }
    }
    Some((best_idx, best_score))
}

/// `score * 100` rounded half away from zero to two decimals, clamped to `[0, 100]`.
pub fn confidence_percent(score: f32) -> f64 {
    let percent = ((score as f64) * 100.0 * 100.0).round() / 100.0;
    percent.clamp(0.0, 100.0)
}

pub fn format(scores: &[f32], catalog: &LabelCatalog) -> Result<Classification, InferenceError> {
    if scores.len() != catalog.len() {
        return Err(InferenceError::ScoreCount {
            expected: catalog.len(),
            actual: scores.len(),
        });
    }

    let (idx, score) = argmax(scores).ok_or(InferenceError::ScoreCount {
        expected: catalog.len(),
        actual: 0,
    })?;
    let predicted_class = catalog
        .get(idx)
        .ok_or(InferenceError::ScoreCount {
            expected: catalog.len(),
            actual: scores.len(),
        })?
        .to_string();

    Ok(Classification {
        predicted_class,
        confidence: confidence_percent(score),
        classes: catalog.clone(),
    })
}
