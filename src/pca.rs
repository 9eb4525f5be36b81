//! Principal component analysis and its relation to the SVD.
//!
//! For a data matrix $X\in\mathbb{R}^{n\times d}$ with one sample per row, PCA diagonalizes
//! the sample covariance $C = \frac{1}{n-1}\bar{X}^T\bar{X}$ of the mean removed data
//! $\bar{X}$. The eigenvectors of $C$ are the right singular vectors of $\bar{X}$ and the
//! eigenvalues are $\sigma_i^2 / (n - 1)$.

use crate::svd::{SVDTraits, SVD};
use crate::types::{Result, SvdCompressionError};
use itertools::Itertools;
use ndarray::{s, Array1, Array2, ArrayView2, Axis};
use ndarray_linalg::{Eigh, UPLO};
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct PCA {
    /// Column means of the data
    pub mean: Array1<f64>,
    /// All covariance eigenvalues in descending order
    pub eigenvalues: Array1<f64>,
    /// The leading eigenvectors as columns, `features x n_components`
    pub components: Array2<f64>,
    /// The data projected onto `components`, `samples x n_components`
    pub projected: Array2<f64>,
}

impl PCA {
    pub fn n_components(&self) -> usize {
        self.components.ncols()
    }

    /// Fraction of the total variance carried by each kept component.
    pub fn explained_variance_ratio(&self) -> Array1<f64> {
        let total = self.eigenvalues.sum();
        let kept = self.eigenvalues.slice(s![0..self.n_components()]);
        if total > 0.0 {
            kept.mapv(|item| item / total)
        } else {
            Array1::zeros(kept.len())
        }
    }
}

fn check_data(data: ArrayView2<f64>) -> Result<()> {
    if data.nrows() < 2 || data.ncols() == 0 {
        return Err(SvdCompressionError::InvalidDimension(format!(
            "PCA needs at least two samples and one feature, got a {}x{} matrix",
            data.nrows(),
            data.ncols()
        )));
    }
    if data.iter().any(|item| !item.is_finite()) {
        return Err(SvdCompressionError::NumericalError(
            "data contains non-finite values".to_string(),
        ));
    }
    Ok(())
}

fn remove_mean(data: ArrayView2<f64>) -> Result<(Array1<f64>, Array2<f64>)> {
    let mean = data.mean_axis(Axis(0)).ok_or_else(|| {
        SvdCompressionError::InvalidDimension("cannot take the mean of an empty matrix".to_string())
    })?;
    let centered = &data - &mean;
    Ok((mean, centered))
}

/// Project `data` onto its `n_components` leading principal directions.
///
/// The covariance is always computed from mean removed data. `center` only decides
/// whether the mean removed or the raw data is projected. Requests for more components
/// than features are clamped to the number of features.
#[tracing::instrument(name = "Performing PCA", level = "info", skip(data))]
pub fn pca(data: ArrayView2<f64>, center: bool, n_components: usize) -> Result<PCA> {
    check_data(data)?;
    if n_components == 0 {
        return Err(SvdCompressionError::InvalidDimension(
            "PCA needs at least one component".to_string(),
        ));
    }

    let (mean, centered) = remove_mean(data)?;
    tracing::debug!(?mean, "column means");

    let cov = centered.t().dot(&centered) / (data.nrows() - 1) as f64;
    let (values, vectors) = cov.eigh(UPLO::Lower).map_err(|err| {
        SvdCompressionError::NumericalError(format!("eigendecomposition failed: {}", err))
    })?;
    tracing::debug!(?values, "covariance eigenvalues");

    let order = (0..values.len())
        .sorted_by(|&first, &second| {
            values[second]
                .partial_cmp(&values[first])
                .unwrap_or(Ordering::Equal)
        })
        .collect::<Vec<usize>>();

    let eigenvalues = order.iter().map(|&index| values[index]).collect::<Array1<f64>>();
    let kept = std::cmp::min(n_components, data.ncols());
    let components = vectors.select(Axis(1), &order[0..kept]);
    tracing::debug!(?components, "leading eigenvectors");

    let projected = if center {
        centered.dot(&components)
    } else {
        data.dot(&components)
    };
    tracing::debug!(?projected, "projected data");

    Ok(PCA {
        mean,
        eigenvalues,
        components,
        projected,
    })
}

/// Full SVD of the data, optionally after removing the column means.
#[tracing::instrument(level = "info", skip(data))]
pub fn centered_svd(data: ArrayView2<f64>, center: bool) -> Result<SVD<f64>> {
    check_data(data)?;

    let svd = if center {
        let (mean, centered) = remove_mean(data)?;
        tracing::debug!(?mean, "column means");
        SVD::<f64>::compute_from(centered.view())?
    } else {
        SVD::<f64>::compute_from(data)?
    };
    tracing::debug!(u = ?svd.u, s = ?svd.s, vt = ?svd.vt, "decomposition");

    Ok(svd)
}
