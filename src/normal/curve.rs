use crate::normal::normal_dist::NormalDist;
use itertools::{Itertools, MinMaxResult};

/// Sampling grid for a density curve: `points` values spanning
/// mean ± `sigma_span` standard deviations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGrid {
    pub points: usize,
    pub sigma_span: f64,
}

impl Default for CurveGrid {
    fn default() -> Self {
        CurveGrid {
            points: 1000,
            sigma_span: 4.0,
        }
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub xs: Vec<f64>,
    pub densities: Vec<f64>,
}

impl DensityCurve {
    pub fn around(dist: &NormalDist, grid: CurveGrid) -> DensityCurve {
        let half_width = grid.sigma_span * dist.std_dev();
        let xs = linspace(
            dist.mean() - half_width,
            dist.mean() + half_width,
            grid.points,
        );
        let densities = xs.iter().map(|&x| dist.pdf(x)).collect();
        DensityCurve { xs, densities }
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.densities.iter().copied())
    }

    /// Points with both coordinates finite; the ones a chart can draw.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Largest finite density on the grid.
    pub fn peak(&self) -> Option<f64> {
        self.densities
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }

    /// Smallest and largest finite grid value.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match self.xs.iter().copied().filter(|x| x.is_finite()).minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(x) => Some((x, x)),
            MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
        }
    }
}
