// shm-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Mass as UomMass, MassRate as UomMassRate,
    Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Mass = UomMass;
/// Viscous damping coefficient `b` (N·s/m == kg/s).
pub type Damping = UomMassRate;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kgps(v: f64) -> Damping {
    use uom::si::mass_rate::kilogram_per_second;
    Damping::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Strip quantities back to the bare SI values the engine works in.
pub mod si {
    use super::*;

    #[inline]
    pub fn kg(v: Mass) -> f64 {
        v.get::<uom::si::mass::kilogram>()
    }

    #[inline]
    pub fn kgps(v: Damping) -> f64 {
        v.get::<uom::si::mass_rate::kilogram_per_second>()
    }

    #[inline]
    pub fn m(v: Length) -> f64 {
        v.get::<uom::si::length::meter>()
    }

    #[inline]
    pub fn mps(v: Velocity) -> f64 {
        v.get::<uom::si::velocity::meter_per_second>()
    }

    #[inline]
    pub fn s(v: Time) -> f64 {
        v.get::<uom::si::time::second>()
    }
}
