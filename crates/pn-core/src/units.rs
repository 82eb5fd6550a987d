// pn-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, MassDensity as UomMassDensity, MassRate as UomMassRate,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

pub const MM_PER_INCH: f64 = 25.4;
pub const M_PER_FOOT: f64 = 0.3048;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const PA_PER_BAR: f64 = 100_000.0;
pub const KPA_PER_BAR: f64 = 100.0;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

/// Mass flow from kg/h, the unit used on data sheets and relief scenarios.
#[inline]
pub fn kgph(v: f64) -> MassRate {
    kgps(v / SECONDS_PER_HOUR)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn centipoise(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::centipoise;
    DynVisc::new::<centipoise>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Millimetres to inches (`mm / 25.4`), the basis of every rule-table lookup.
#[inline]
pub fn mm_to_inches(v: f64) -> f64 {
    v / MM_PER_INCH
}

#[inline]
pub fn inches_to_mm(v: f64) -> f64 {
    v * MM_PER_INCH
}

/// Unit a length value was entered in.
///
/// Public helper for callers that build pipes from feet or inch figures.
/// Pipes store typed `Length`, so normalizing here is the only unit step; the
/// importer reads SI sheet units and does not need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LengthUnit {
    #[default]
    Meter,
    Millimeter,
    Foot,
    Inch,
}

impl LengthUnit {
    pub fn quantity(self, value: f64) -> Length {
        match self {
            LengthUnit::Meter => m(value),
            LengthUnit::Millimeter => mm(value),
            LengthUnit::Foot => m(value * M_PER_FOOT),
            LengthUnit::Inch => mm(inches_to_mm(value)),
        }
    }
}

pub mod get {
    //! Plain-number accessors in the units the screening formulas are written in.

    use super::*;

    #[inline]
    pub fn meters(v: Length) -> f64 {
        v.get::<uom::si::length::meter>()
    }

    #[inline]
    pub fn millimeters(v: Length) -> f64 {
        v.get::<uom::si::length::millimeter>()
    }

    #[inline]
    pub fn pascals(v: Pressure) -> f64 {
        v.get::<uom::si::pressure::pascal>()
    }

    #[inline]
    pub fn kilopascals(v: Pressure) -> f64 {
        v.get::<uom::si::pressure::kilopascal>()
    }

    #[inline]
    pub fn kg_per_m3(v: Density) -> f64 {
        v.get::<uom::si::mass_density::kilogram_per_cubic_meter>()
    }

    #[inline]
    pub fn pa_s(v: DynVisc) -> f64 {
        v.get::<uom::si::dynamic_viscosity::pascal_second>()
    }

    #[inline]
    pub fn kgps(v: MassRate) -> f64 {
        v.get::<uom::si::mass_rate::kilogram_per_second>()
    }

    #[inline]
    pub fn kgph(v: MassRate) -> f64 {
        kgps(v) * SECONDS_PER_HOUR
    }

    #[inline]
    pub fn mps(v: Velocity) -> f64 {
        v.get::<uom::si::velocity::meter_per_second>()
    }

    #[inline]
    pub fn celsius(v: Temperature) -> f64 {
        v.get::<uom::si::thermodynamic_temperature::degree_celsius>()
    }
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mm_inch_round_trip(d in 0.1_f64..5_000.0_f64) {
            let back = inches_to_mm(mm_to_inches(d));
            let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
            prop_assert!(nearly_equal(back, d, tol));
        }

        #[test]
        fn inch_quantity_matches_divide(d in 0.1_f64..5_000.0_f64) {
            let via_uom = mm_to_inches(get::millimeters(mm(d)));
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(via_uom, d / MM_PER_INCH, tol));
        }
    }
}
