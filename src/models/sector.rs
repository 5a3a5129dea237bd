//! Economic sectors tracked per municipality
//!
//! Every row carries business counts and active employment links for the same
//! seven sectors. `SectorTable` stores the per-row figures and `SectorCounts`
//! the accumulated totals.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// One of the seven fixed economic sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Agronegocio,
    Comercio,
    Construcao,
    Educacao,
    Industria,
    Saude,
    Turismo,
}

impl Sector {
    /// Number of sectors
    pub const COUNT: usize = 7;

    /// All sectors in storage order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Agronegocio,
        Self::Comercio,
        Self::Construcao,
        Self::Educacao,
        Self::Industria,
        Self::Saude,
        Self::Turismo,
    ];

    /// Order in which sectors are listed before ranking by business count
    pub const DISPLAY_ORDER: [Self; Self::COUNT] = [
        Self::Comercio,
        Self::Industria,
        Self::Agronegocio,
        Self::Turismo,
        Self::Educacao,
        Self::Saude,
        Self::Construcao,
    ];

    /// Position of the sector in `ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suffix used by the raw field names
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Agronegocio => "agronegocio",
            Self::Comercio => "comercio",
            Self::Construcao => "construcao",
            Self::Educacao => "educacao",
            Self::Industria => "industria",
            Self::Saude => "saude",
            Self::Turismo => "turismo",
        }
    }

    /// Human readable (Portuguese) label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Agronegocio => "Agronegócio",
            Self::Comercio => "Comércio",
            Self::Construcao => "Construção",
            Self::Educacao => "Educação",
            Self::Industria => "Indústria",
            Self::Saude => "Saúde",
            Self::Turismo => "Turismo",
        }
    }

    /// Raw key holding the number of businesses in this sector
    #[must_use]
    pub fn businesses_key(self) -> String {
        format!("numero_de_empresas_{}", self.key())
    }

    /// Raw key holding the number of active employment links in this sector
    #[must_use]
    pub fn active_links_key(self) -> String {
        format!("quantidade_vinculos_ativos_{}", self.key())
    }
}

/// Per-row figures for a single sector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorFigures {
    /// Number of businesses
    pub businesses: Option<f64>,
    /// Number of active employment links
    pub active_links: Option<f64>,
    /// Payroll mass; not present in the current dataset
    pub payroll: Option<f64>,
}

/// Sector figures of one row, indexed by `Sector`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SectorTable([SectorFigures; Sector::COUNT]);

impl SectorTable {
    #[must_use]
    pub const fn get(&self, sector: Sector) -> &SectorFigures {
        &self.0[sector.index()]
    }

    pub const fn get_mut(&mut self, sector: Sector) -> &mut SectorFigures {
        &mut self.0[sector.index()]
    }

    /// Iterate over sectors and their figures in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Sector, &SectorFigures)> {
        Sector::ALL.iter().copied().zip(self.0.iter())
    }
}

/// Accumulated numeric value per sector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SectorCounts([f64; Sector::COUNT]);

impl SectorCounts {
    #[must_use]
    pub const fn get(&self, sector: Sector) -> f64 {
        self.0[sector.index()]
    }

    /// Add `value` to the running count of `sector`
    pub fn record(&mut self, sector: Sector, value: f64) {
        self.0[sector.index()] += value;
    }

    /// Sum over all sectors
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sector, f64)> + '_ {
        Sector::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

impl AddAssign for SectorCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl Add for SectorCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
