//! Ridge-regularised least squares
//!
//! Solves `(XᵀX + λP)β = Xᵀy` where `P` is the identity with the leading
//! `unpenalized` diagonal entries zeroed, so intercept terms are not shrunk.
//! Optional per-column weights scale the penalty of individual coefficients.

use crate::{MathError, Result};

/// Linear model fitted by ridge regression over a dense design matrix
#[derive(Debug, Clone)]
pub struct RidgeRegression {
    lambda: f64,
    unpenalized: usize,
    weights: Option<Vec<f64>>,
    coefficients: Option<Vec<f64>>,
}

impl RidgeRegression {
    /// Create a new ridge regression with the given penalty strength
    pub fn new(lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(MathError::InvalidInput(
                "Ridge penalty must be a non-negative finite number".to_string(),
            ));
        }

        Ok(Self {
            lambda,
            unpenalized: 1,
            weights: None,
            coefficients: None,
        })
    }

    /// Leave the first `columns` coefficients out of the penalty
    pub fn with_unpenalized(mut self, columns: usize) -> Self {
        self.unpenalized = columns;
        self
    }

    /// Scale the penalty of each column by `weights[i]`
    ///
    /// Columns inside the unpenalized prefix stay unpenalized whatever their
    /// weight.
    pub fn with_penalty_weights(mut self, weights: Vec<f64>) -> Result<Self> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MathError::InvalidInput(
                "Penalty weights must be non-negative finite numbers".to_string(),
            ));
        }
        self.weights = Some(weights);
        Ok(self)
    }

    /// Fit the coefficients to the design rows and targets
    pub fn fit(&mut self, rows: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        if rows.is_empty() {
            return Err(MathError::InsufficientData(
                "Need at least one observation to fit a regression".to_string(),
            ));
        }
        if rows.len() != targets.len() {
            return Err(MathError::InvalidInput(format!(
                "Design has {} rows but {} targets",
                rows.len(),
                targets.len()
            )));
        }

        let width = rows[0].len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(MathError::InvalidInput(
                "Design rows must be non-empty and of equal width".to_string(),
            ));
        }

        if let Some(weights) = &self.weights {
            if weights.len() != width {
                return Err(MathError::InvalidInput(format!(
                    "Expected {} penalty weights, got {}",
                    width,
                    weights.len()
                )));
            }
        }

        let mut gram = vec![vec![0.0; width]; width];
        let mut moment = vec![0.0; width];

        for (row, &y) in rows.iter().zip(targets) {
            for i in 0..width {
                moment[i] += row[i] * y;
                for j in i..width {
                    gram[i][j] += row[i] * row[j];
                }
            }
        }

        for i in 0..width {
            for j in 0..i {
                gram[i][j] = gram[j][i];
            }
            if i >= self.unpenalized {
                let weight = self.weights.as_ref().map_or(1.0, |w| w[i]);
                gram[i][i] += self.lambda * weight;
            }
        }

        self.coefficients = Some(solve_linear_system(gram, moment)?);
        Ok(())
    }

    /// Evaluate the fitted model on a design row
    pub fn predict(&self, row: &[f64]) -> Result<f64> {
        let coefficients = self.coefficients()?;
        if row.len() != coefficients.len() {
            return Err(MathError::InvalidInput(format!(
                "Expected {} features, got {}",
                coefficients.len(),
                row.len()
            )));
        }

        Ok(row.iter().zip(coefficients).map(|(x, b)| x * b).sum())
    }

    /// Fitted coefficients, in design column order
    pub fn coefficients(&self) -> Result<&[f64]> {
        self.coefficients.as_deref().ok_or_else(|| {
            MathError::CalculationError("Regression has not been fitted".to_string())
        })
    }

    /// Penalty strength
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

/// Gaussian elimination with partial pivoting
pub fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(MathError::InvalidInput(
            "Linear system must be square".to_string(),
        ));
    }

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&x, &y| a[x][col].abs().total_cmp(&a[y][col].abs()))
            .unwrap_or(col);

        if a[pivot][col].abs() < 1e-12 {
            return Err(MathError::CalculationError(
                "Linear system is singular".to_string(),
            ));
        }

        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }

    Ok(x)
}
