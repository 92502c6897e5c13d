//! Integration method selection.

use std::fmt;
use std::str::FromStr;

use shm_core::ShmResult;
use thiserror::Error;

use crate::forcing::ForcingSpec;
use crate::grid::TimeGrid;
use crate::integrator::{
    Analytic, CorrectedEuler, ExplicitEuler, Integrator, PositionRecurrence, SemiImplicit,
};
use crate::params::{InitialState, OscillatorParameters};
use crate::trajectory::Trajectory;

/// Integration scheme selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Method {
    /// Closed-form solution (reference).
    Analytic,
    /// Forward Euler (1st-order).
    ExplicitEuler,
    /// Euler with a (h²/2)·a position term.
    CorrectedEuler,
    /// Two-step position recurrence (Verlet).
    PositionRecurrence,
    /// Euler-Cromer.
    SemiImplicit,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Analytic,
        Method::ExplicitEuler,
        Method::CorrectedEuler,
        Method::PositionRecurrence,
        Method::SemiImplicit,
    ];

    /// Stable kebab-case name, as used in scenario files and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Method::Analytic => "analytic",
            Method::ExplicitEuler => "explicit-euler",
            Method::CorrectedEuler => "corrected-euler",
            Method::PositionRecurrence => "position-recurrence",
            Method::SemiImplicit => "semi-implicit",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Method::Analytic => "Exact Solution",
            Method::ExplicitEuler => "Euler's Method",
            Method::CorrectedEuler => "Improved Euler's Method",
            Method::PositionRecurrence => "Verlet's Method",
            Method::SemiImplicit => "Euler-Cromer Method",
        }
    }

    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            Method::Analytic => &Analytic,
            Method::ExplicitEuler => &ExplicitEuler,
            Method::CorrectedEuler => &CorrectedEuler,
            Method::PositionRecurrence => &PositionRecurrence,
            Method::SemiImplicit => &SemiImplicit,
        }
    }

    /// Whether the scheme honours a [`ForcingSpec`].
    pub fn supports_forcing(self) -> bool {
        !matches!(self, Method::Analytic)
    }

    /// Run this method; the analytic branch yields its real part.
    pub fn run(
        self,
        params: &OscillatorParameters,
        state: &InitialState,
        grid: &TimeGrid,
        forcing: Option<&ForcingSpec>,
    ) -> ShmResult<Trajectory> {
        self.integrator().integrate(params, state, grid, forcing)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration method '{0}' (expected one of: analytic, explicit-euler, corrected-euler, position-recurrence, semi-implicit)")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        let found = match wanted.as_str() {
            "exact" => Some(Method::Analytic),
            "euler" => Some(Method::ExplicitEuler),
            "improved-euler" => Some(Method::CorrectedEuler),
            "verlet" => Some(Method::PositionRecurrence),
            "euler-cromer" => Some(Method::SemiImplicit),
            other => Method::ALL.into_iter().find(|m| m.name() == other),
        };
        found.ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
            assert_eq!(method.to_string(), method.name());
            assert_eq!(method.integrator().method(), method);
        }
    }

    #[test]
    fn aliases_parse() {
        assert_eq!("Verlet".parse::<Method>().unwrap(), Method::PositionRecurrence);
        assert_eq!("euler_cromer".parse::<Method>().unwrap(), Method::SemiImplicit);
        assert_eq!("improved-euler".parse::<Method>().unwrap(), Method::CorrectedEuler);
        assert_eq!("exact".parse::<Method>().unwrap(), Method::Analytic);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "rk4".parse::<Method>().unwrap_err();
        assert_eq!(err, ParseMethodError("rk4".to_string()));
        assert!(err.to_string().contains("rk4"));
    }

    #[test]
    fn only_analytic_ignores_forcing() {
        let unforced: Vec<_> = Method::ALL
            .into_iter()
            .filter(|m| !m.supports_forcing())
            .collect();
        assert_eq!(unforced, vec![Method::Analytic]);
    }

    #[test]
    fn run_dispatches_to_integrator() {
        let p = OscillatorParameters::new(0.1, 1.0, 2.0).unwrap();
        let s = InitialState::new(1.0, 0.0).unwrap();
        let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();
        let direct = SemiImplicit.integrate(&p, &s, &grid, None).unwrap();
        let dispatched = Method::SemiImplicit.run(&p, &s, &grid, None).unwrap();
        assert_eq!(direct, dispatched);
    }
}
