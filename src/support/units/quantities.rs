use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, Z0},
};

/// Volumetric heat capacity (`ρ·c`), J/m³·K in SI.
pub type VolumetricHeatCapacity = Quantity<ISQ<N1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;
