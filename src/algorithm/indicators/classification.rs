//! HDI bands and health coverage classes

use serde::Serialize;

/// One of the five fixed HDI bands
///
/// Bands are left-inclusive: `[0.5, 0.6)` is `Low`. Anything at or above 0.8
/// is `VeryHigh` and anything below 0.5 is `VeryLow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IdhmBand {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl IdhmBand {
    /// All bands, lowest first
    pub const ALL: [Self; 5] = [
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    /// Band containing `idhm`
    #[must_use]
    pub fn from_value(idhm: f64) -> Self {
        if idhm >= 0.8 {
            Self::VeryHigh
        } else if idhm >= 0.7 {
            Self::High
        } else if idhm >= 0.6 {
            Self::Medium
        } else if idhm >= 0.5 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// Short classification label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Muito Baixo",
            Self::Low => "Baixo",
            Self::Medium => "Médio",
            Self::High => "Alto",
            Self::VeryHigh => "Muito Alto",
        }
    }

    /// Label including the value range, as shown in distributions
    #[must_use]
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::VeryLow => "Muito Baixo (0.0-0.5)",
            Self::Low => "Baixo (0.5-0.6)",
            Self::Medium => "Médio (0.6-0.7)",
            Self::High => "Alto (0.7-0.8)",
            Self::VeryHigh => "Muito Alto (0.8-1.0)",
        }
    }
}

/// Health staff coverage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverageClass {
    Adequate,
    Intermediate,
    Insufficient,
}

impl CoverageClass {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adequate => "Adequada",
            Self::Intermediate => "Intermediária",
            Self::Insufficient => "Insuficiente",
        }
    }
}

/// Classify an HDI value
#[must_use]
pub fn classify_idhm(idhm: f64) -> IdhmBand {
    IdhmBand::from_value(idhm)
}

/// Classify coverage in staff per 1,000 inhabitants
#[must_use]
pub fn classify_coverage(coverage: f64) -> CoverageClass {
    if coverage >= 5.0 {
        CoverageClass::Adequate
    } else if coverage >= 3.0 {
        CoverageClass::Intermediate
    } else {
        CoverageClass::Insufficient
    }
}
