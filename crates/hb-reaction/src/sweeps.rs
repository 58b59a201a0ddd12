//! Parametric sweeps of an operating point over temperature or pressure.
//!
//! Used to tabulate rates and balance terms across a range of conditions.

use crate::operating_point::{OperatingPoint, ReactorTerms, evaluate_batch};
use hb_core::{Tolerances, ensure_finite, nearly_equal};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Operating point field varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepParameter {
    Temperature,
    Pressure,
}

/// Error in sweep configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepDefinition {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    /// Number of points to generate
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        let tol = Tolerances {
            abs: 1e-12,
            rel: 0.0,
        };
        if nearly_equal(start, end, tol) {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(Self {
            parameter,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Pressure => write!(f, "pressure"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.parameter, self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// Result of sweeping an operating point.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub parameter: SweepParameter,
    /// Values of the swept parameter
    pub values: Vec<f64>,
    /// Terms per point; `None` where the evaluation failed
    pub terms: Vec<Option<ReactorTerms>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    /// Swept values of the successful points.
    pub fn successful_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .zip(&self.terms)
            .filter_map(|(v, terms)| terms.as_ref().map(|_| *v))
            .collect()
    }

    /// Ammonia rates of the successful points.
    pub fn rates(&self) -> Vec<f64> {
        self.terms.iter().flatten().map(|t| t.rate).collect()
    }
}

/// Evaluate `base` at every point of `sweep`.
///
/// Points whose evaluation fails or whose rate is not finite are recorded as
/// `None` and counted in `num_failed`.
pub fn execute_sweep(base: &OperatingPoint, sweep: &SweepDefinition) -> SweepResult {
    debug!(%sweep, "executing sweep");

    let values = sweep.generate_points();
    let points: Vec<OperatingPoint> = values
        .iter()
        .map(|&v| match sweep.parameter {
            SweepParameter::Temperature => base.with_temperature(v),
            SweepParameter::Pressure => base.with_pressure(v),
        })
        .collect();

    let mut num_failed = 0;
    let terms: Vec<Option<ReactorTerms>> = evaluate_batch(&points)
        .into_iter()
        .zip(&values)
        .map(|(result, value)| {
            let checked = result
                .map_err(hb_core::HbError::from)
                .and_then(|t| ensure_finite(t.rate, "ammonia rate").map(|_| t));
            match checked {
                Ok(t) => Some(t),
                Err(err) => {
                    warn!(parameter = %sweep.parameter, value, %err, "sweep point failed");
                    num_failed += 1;
                    None
                }
            }
        })
        .collect();

    SweepResult {
        parameter: sweep.parameter,
        values,
        num_successful: terms.len() - num_failed,
        terms,
        num_failed,
    }
}
