//! Generic access to row fields
//!
//! `RowField` names a scalar column of `MunicipioRow`; `FieldValue` is the value
//! read from it. Both are used for distinct-value listings and grouping.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::MunicipalDataError;
use crate::models::sector::Sector;

/// A scalar column of `MunicipioRow`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowField {
    Year,
    StateCode,
    StateName,
    MunicipalityId,
    Municipality,
    City,
    Population,
    Idhm,
    IdhmIncome,
    IdhmEducation,
    IdhmLongevity,
    TotalTeachers,
    TotalStudents,
    Ideb,
    Nurses,
    Doctors,
    HealthSpend,
    Businesses(Sector),
    ActiveLinks(Sector),
}

impl RowField {
    /// Whether the field holds a number that can be summed
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(
            self,
            Self::Year
                | Self::StateCode
                | Self::StateName
                | Self::MunicipalityId
                | Self::Municipality
                | Self::City
        )
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => f.write_str("ano"),
            Self::StateCode => f.write_str("siglaUf"),
            Self::StateName => f.write_str("siglaUfNome"),
            Self::MunicipalityId => f.write_str("idMunicipio"),
            Self::Municipality => f.write_str("municipio"),
            Self::City => f.write_str("cidade"),
            Self::Population => f.write_str("pop"),
            Self::Idhm => f.write_str("idhm"),
            Self::IdhmIncome => f.write_str("idhmRenda"),
            Self::IdhmEducation => f.write_str("idhmEducacao"),
            Self::IdhmLongevity => f.write_str("idhmLongevidade"),
            Self::TotalTeachers => f.write_str("totalDocentes"),
            Self::TotalStudents => f.write_str("totalAlunos"),
            Self::Ideb => f.write_str("ideb"),
            Self::Nurses => f.write_str("quantidadeProfissionaisEnfermeiro"),
            Self::Doctors => f.write_str("quantidadeProfissionaisMedico"),
            Self::HealthSpend => f.write_str("valorTotalAtoProfissional"),
            Self::Businesses(sector) => write!(f, "numeroDeEmpresas:{}", sector.key()),
            Self::ActiveLinks(sector) => write!(f, "quantidadeVinculosAtivos:{}", sector.key()),
        }
    }
}

// Serialized by name so fields can key JSON maps
impl Serialize for RowField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for RowField {
    type Err = MunicipalDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "ano" => Self::Year,
            "siglaUf" => Self::StateCode,
            "siglaUfNome" => Self::StateName,
            "idMunicipio" => Self::MunicipalityId,
            "municipio" => Self::Municipality,
            "cidade" => Self::City,
            "pop" => Self::Population,
            "idhm" => Self::Idhm,
            "idhmRenda" => Self::IdhmIncome,
            "idhmEducacao" => Self::IdhmEducation,
            "idhmLongevidade" => Self::IdhmLongevity,
            "totalDocentes" => Self::TotalTeachers,
            "totalAlunos" => Self::TotalStudents,
            "ideb" => Self::Ideb,
            "quantidadeProfissionaisEnfermeiro" => Self::Nurses,
            "quantidadeProfissionaisMedico" => Self::Doctors,
            "valorTotalAtoProfissional" => Self::HealthSpend,
            other => {
                let sector_field = other.split_once(':').and_then(|(prefix, key)| {
                    let sector = Sector::ALL.into_iter().find(|s| s.key() == key)?;
                    match prefix {
                        "numeroDeEmpresas" => Some(Self::Businesses(sector)),
                        "quantidadeVinculosAtivos" => Some(Self::ActiveLinks(sector)),
                        _ => None,
                    }
                });
                return sector_field.ok_or_else(|| MunicipalDataError::InvalidFilter {
                    field: "field",
                    value: other.to_string(),
                });
            }
        };
        Ok(field)
    }
}

/// A value read from a row field
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl FieldValue {
    const fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}
