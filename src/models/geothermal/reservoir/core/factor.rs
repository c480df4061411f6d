use std::fmt;

/// One of the seven reservoir inputs, in parameter-vector order.
///
/// The discriminant is the factor's position in a
/// [`ParameterVector`](super::ParameterVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Factor {
    /// Reservoir plan area, km².
    Area = 0,
    /// Reservoir thickness, km.
    Thickness = 1,
    /// Reservoir temperature, °C.
    ReservoirTemp = 2,
    /// Rock density, kg/m³.
    RockDensity = 3,
    /// Porosity as a volume fraction, 0 to 1.
    Porosity = 4,
    /// Heat recovery factor, percent.
    RecoveryFactor = 5,
    /// Plant capacity factor, percent.
    CapacityFactor = 6,
}

impl Factor {
    /// Number of factors in a parameter vector.
    pub const COUNT: usize = 7;

    /// All factors in parameter-vector order.
    pub const ALL: [Factor; Self::COUNT] = [
        Factor::Area,
        Factor::Thickness,
        Factor::ReservoirTemp,
        Factor::RockDensity,
        Factor::Porosity,
        Factor::RecoveryFactor,
        Factor::CapacityFactor,
    ];

    /// Position of this factor in a parameter vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label used in reports and chart categories.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Factor::Area => "Area",
            Factor::Thickness => "Thickness",
            Factor::ReservoirTemp => "ReservoirTemp",
            Factor::RockDensity => "RockDensity",
            Factor::Porosity => "Porosity",
            Factor::RecoveryFactor => "RecoveryFactor",
            Factor::CapacityFactor => "CapacityFactor",
        }
    }

    /// Unit the raw value is expressed in.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Factor::Area => "km²",
            Factor::Thickness => "km",
            Factor::ReservoirTemp => "°C",
            Factor::RockDensity => "kg/m³",
            Factor::Porosity => "-",
            Factor::RecoveryFactor | Factor::CapacityFactor => "%",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
