//! Core types for filter descriptions and results.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FilterError;

/// Classical low-pass response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterFamily {
    /// Maximally flat amplitude
    Butterworth,
    /// Equiripple passband, steeper skirt
    Chebyshev,
    /// Maximally flat group delay
    Bessel,
}

impl FilterFamily {
    pub const ALL: [FilterFamily; 3] = [
        FilterFamily::Butterworth,
        FilterFamily::Chebyshev,
        FilterFamily::Bessel,
    ];

    /// Orders this family can be designed for.
    pub fn order_range(&self) -> RangeInclusive<usize> {
        match self {
            FilterFamily::Butterworth => 2..=9,
            FilterFamily::Chebyshev => 2..=11,
            FilterFamily::Bessel => 2..=9,
        }
    }

    /// Whether the ripple parameter affects this family.
    pub fn uses_ripple(&self) -> bool {
        matches!(self, FilterFamily::Chebyshev)
    }

    /// Lowercase identifier used on the command line and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterFamily::Butterworth => "butterworth",
            FilterFamily::Chebyshev => "chebyshev",
            FilterFamily::Bessel => "bessel",
        }
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterFamily::Butterworth => "Butterworth",
            FilterFamily::Chebyshev => "Chebyshev",
            FilterFamily::Bessel => "Bessel",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FilterFamily {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "butterworth" | "bw" => Ok(FilterFamily::Butterworth),
            "chebyshev" | "ch" => Ok(FilterFamily::Chebyshev),
            "bessel" | "bs" => Ok(FilterFamily::Bessel),
            _ => Err(FilterError::InvalidFilterFamily {
                name: s.to_string(),
            }),
        }
    }
}

/// Input descriptor for one filter design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub family: FilterFamily,
    /// Number of reactive elements
    pub order: usize,
    pub cutoff_hz: f64,
    pub impedance_ohms: f64,
    /// Passband ripple, only read for Chebyshev
    pub ripple_db: f64,
}

impl FilterSpec {
    /// Create a spec using the default ripple.
    pub fn new(family: FilterFamily, order: usize, cutoff_hz: f64, impedance_ohms: f64) -> Self {
        Self {
            family,
            order,
            cutoff_hz,
            impedance_ohms,
            ripple_db: crate::DEFAULT_RIPPLE_DB,
        }
    }

    /// Set the passband ripple (Chebyshev only).
    pub fn with_ripple(mut self, ripple_db: f64) -> Self {
        self.ripple_db = ripple_db;
        self
    }

    /// Ripple if the family uses it.
    pub fn effective_ripple(&self) -> Option<f64> {
        self.family.uses_ripple().then_some(self.ripple_db)
    }

    /// Cutoff as angular frequency (rad/s).
    pub fn omega(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.cutoff_hz
    }
}

/// Element type at a ladder position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Shunt element to ground
    Capacitor,
    /// Series element in the signal path
    Inductor,
}

impl ComponentKind {
    /// Pi ladders start with a shunt capacitor and alternate.
    pub fn at(index: usize) -> Self {
        if index % 2 == 1 {
            ComponentKind::Capacitor
        } else {
            ComponentKind::Inductor
        }
    }

    /// Designator prefix.
    pub fn prefix(&self) -> char {
        match self {
            ComponentKind::Capacitor => 'C',
            ComponentKind::Inductor => 'L',
        }
    }

    /// SI unit symbol of the value.
    pub fn unit(&self) -> &'static str {
        match self {
            ComponentKind::Capacitor => "F",
            ComponentKind::Inductor => "H",
        }
    }
}

/// One physical ladder element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// 1-based ladder position
    pub index: usize,
    pub kind: ComponentKind,
    /// Farads or Henries
    pub value: f64,
}

impl Component {
    /// Per-kind ordinal: the ladder C1 L1 C2 L2 C3 numbers each kind separately.
    pub fn ordinal(&self) -> usize {
        match self.kind {
            ComponentKind::Capacitor => (self.index + 1) / 2,
            ComponentKind::Inductor => self.index / 2,
        }
    }

    /// Schematic designator such as `C2` or `L1`.
    pub fn designator(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.ordinal())
    }

    /// Map the physical value back to its normalized g-value.
    pub fn normalized(&self, cutoff_hz: f64, impedance_ohms: f64) -> f64 {
        let omega = 2.0 * std::f64::consts::PI * cutoff_hz;
        match self.kind {
            ComponentKind::Capacitor => self.value * omega * impedance_ohms,
            ComponentKind::Inductor => self.value * omega / impedance_ohms,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6e} {}", self.designator(), self.value, self.kind.unit())
    }
}

/// Components of a designed filter together with the spec that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub spec: FilterSpec,
    /// Ladder order, index 1..n
    pub components: Vec<Component>,
}

impl FilterResult {
    pub fn capacitors(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| c.kind == ComponentKind::Capacitor)
    }

    pub fn inductors(&self) -> impl Iterator<Item = &Component> {
        self.components
            .iter()
            .filter(|c| c.kind == ComponentKind::Inductor)
    }
}
