//! Index-aligned position/velocity sequences.

use num_complex::Complex64;
use shm_core::{Real, RealPart, ShmError, ShmResult};

/// Positions and velocities sampled on a [`TimeGrid`](crate::TimeGrid).
///
/// Both sequences always have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<T = Real> {
    positions: Vec<T>,
    velocities: Vec<T>,
}

impl<T: RealPart> Trajectory<T> {
    pub fn from_parts(positions: Vec<T>, velocities: Vec<T>) -> ShmResult<Self> {
        if positions.len() != velocities.len() {
            return Err(ShmError::LengthMismatch {
                what: "trajectory positions vs velocities",
                left: positions.len(),
                right: velocities.len(),
            });
        }
        Ok(Self {
            positions,
            velocities,
        })
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            positions: Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
        }
    }

    /// Append one sample, rejecting non-finite values.
    pub(crate) fn push(&mut self, x: T, v: T, what: &'static str) -> ShmResult<()> {
        let index = self.positions.len();
        if !x.is_finite() || !v.is_finite() {
            return Err(ShmError::NumericOverflow { what, index });
        }
        self.positions.push(x);
        self.velocities.push(v);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[T] {
        &self.positions
    }

    pub fn velocities(&self) -> &[T] {
        &self.velocities
    }

    /// `(x_n, v_n)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.velocities.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.positions, self.velocities)
    }

    /// Last sample.
    pub fn last(&self) -> Option<(T, T)> {
        Some((*self.positions.last()?, *self.velocities.last()?))
    }
}

impl Trajectory<Complex64> {
    /// The physical (real) signal.
    pub fn real(&self) -> Trajectory<Real> {
        Trajectory {
            positions: self.positions.iter().map(|z| z.re).collect(),
            velocities: self.velocities.iter().map(|z| z.re).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_checks_alignment() {
        let err = Trajectory::from_parts(vec![1.0, 2.0], vec![0.0]).unwrap_err();
        assert_eq!(
            err,
            ShmError::LengthMismatch {
                what: "trajectory positions vs velocities",
                left: 2,
                right: 1,
            }
        );
        let traj = Trajectory::from_parts(vec![1.0, 2.0], vec![0.0, 0.5]).unwrap();
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.last(), Some((2.0, 0.5)));
    }

    #[test]
    fn push_rejects_non_finite() {
        let mut traj = Trajectory::with_capacity(2);
        traj.push(1.0, 0.0, "test").unwrap();
        let err = traj.push(f64::INFINITY, 0.0, "test").unwrap_err();
        assert_eq!(
            err,
            ShmError::NumericOverflow {
                what: "test",
                index: 1
            }
        );
        assert_eq!(traj.len(), 1);
    }

    #[test]
    fn real_part_of_complex_trajectory() {
        let traj = Trajectory::from_parts(
            vec![Complex64::new(1.0, 2.0), Complex64::new(-1.0, 0.5)],
            vec![Complex64::new(0.0, 1.0), Complex64::new(3.0, -1.0)],
        )
        .unwrap();
        let real = traj.real();
        assert_eq!(real.positions(), &[1.0, -1.0]);
        assert_eq!(real.velocities(), &[0.0, 3.0]);
    }

    #[test]
    fn iter_pairs_samples() {
        let traj = Trajectory::from_parts(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        let pairs: Vec<_> = traj.iter().collect();
        assert_eq!(pairs, vec![(1.0, 3.0), (2.0, 4.0)]);
        let (x, v) = traj.into_parts();
        assert_eq!(x, vec![1.0, 2.0]);
        assert_eq!(v, vec![3.0, 4.0]);
    }
}
