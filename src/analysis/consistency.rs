use serde::Serialize;

/// Spread of a numeric per-match metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSpread {
    pub metric: String,
    pub mean: f64,
    pub std_dev: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consistency {
    /// Population variance of the 1/0 match outcome
    pub outcome_variance: f64,
    /// `1 / (1 + variance)`, in (0.8, 1] for non-empty input; 0 when there are no matches
    pub score: f64,
    /// Spread of the game's primary metric, absent when no match has it
    pub primary_metric: Option<MetricSpread>,
}

impl Consistency {
    pub fn from_outcomes(outcomes: &[bool], primary_metric: Option<MetricSpread>) -> Self {
        if outcomes.is_empty() {
            return Self {
                outcome_variance: 0.0,
                score: 0.0,
                primary_metric,
            };
        }
        let values: Vec<f64> = outcomes.iter().map(|&w| if w { 1.0 } else { 0.0 }).collect();
        let outcome_variance = population_variance(&values);
        Self {
            outcome_variance,
            score: 1.0 / (1.0 + outcome_variance),
            primary_metric,
        }
    }
}

impl MetricSpread {
    pub fn from_values(metric: impl Into<String>, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            metric: metric.into(),
            mean: mean(values),
            std_dev: population_variance(values).sqrt(),
            samples: values.len(),
        })
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}
