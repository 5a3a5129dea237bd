//! Normalized municipality-year row
//!
//! `MunicipioRow` is the typed view of one raw record. Rows are built once by
//! the loader and never mutated afterwards.

use serde::Serialize;

use crate::models::field::{FieldValue, RowField};
use crate::models::raw::{MunicipioRawData, keys};
use crate::models::sector::{Sector, SectorTable};

/// One normalized record per (municipality, year)
///
/// Every numeric field is either a finite number or `None`. The pair
/// (`municipality_id`, `year`) identifies a row conceptually but duplicates are
/// not removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipioRow {
    // Identity
    pub year: Option<i32>,
    pub state_code: Option<String>,
    pub state_name: Option<String>,
    pub municipality_id: Option<i64>,
    pub municipality: Option<String>,
    pub city: Option<String>,

    // Demographic
    pub population: Option<f64>,

    // Human development
    pub idhm: Option<f64>,
    pub idhm_income: Option<f64>,
    pub idhm_education: Option<f64>,
    pub idhm_longevity: Option<f64>,
    pub idhm_women: Option<f64>,
    pub idhm_men: Option<f64>,
    pub idhm_black: Option<f64>,
    pub idhm_white: Option<f64>,

    // Education
    pub total_teachers: Option<f64>,
    pub total_students: Option<f64>,
    pub approval_rate: Option<f64>,
    pub performance_indicator: Option<f64>,
    pub ideb: Option<f64>,

    // Health staffing and spend
    pub nurses: Option<f64>,
    pub doctors: Option<f64>,
    pub health_spend: Option<f64>,

    /// Business and employment figures per sector
    pub sectors: SectorTable,
}

impl MunicipioRow {
    /// Normalize a raw record
    ///
    /// Unknown keys are ignored and missing ones become `None`. Gender and race
    /// split HDI, approval rate, performance indicator, IDEB and sector payroll
    /// are not part of the dataset and are always `None`.
    #[must_use]
    pub fn from_raw(raw: &MunicipioRawData) -> Self {
        let mut sectors = SectorTable::default();
        for sector in Sector::ALL {
            let figures = sectors.get_mut(sector);
            figures.businesses = raw.number(&sector.businesses_key());
            figures.active_links = raw.number(&sector.active_links_key());
        }

        Self {
            year: raw
                .integer(keys::ANO)
                .and_then(|y| i32::try_from(y).ok()),
            state_code: raw.text(keys::SIGLA_UF),
            state_name: raw.text(keys::SIGLA_UF_NOME),
            municipality_id: raw.integer(keys::ID_MUNICIPIO),
            municipality: raw.text(keys::MUNICIPIO),
            city: raw.text(keys::CIDADE),
            population: raw.number(keys::POP),
            idhm: raw.number(keys::IDHM),
            idhm_income: raw.number(keys::IDHM_RENDA),
            idhm_education: raw.number(keys::IDHM_EDUCACAO),
            idhm_longevity: raw.number(keys::IDHM_LONGEVIDADE),
            total_teachers: raw.number(keys::TOTAL_DOCENTES),
            total_students: raw.number(keys::TOTAL_ALUNOS),
            nurses: raw.number(keys::PROFISSIONAIS_ENFERMEIRO),
            doctors: raw.number(keys::PROFISSIONAIS_MEDICO),
            health_spend: raw.number(keys::VALOR_TOTAL_ATO_PROFISSIONAL),
            sectors,
            ..Self::default()
        }
    }

    /// Number of businesses in `sector`, if recorded
    #[must_use]
    pub const fn businesses(&self, sector: Sector) -> Option<f64> {
        self.sectors.get(sector).businesses
    }

    /// Active employment links in `sector`, if recorded
    #[must_use]
    pub const fn active_links(&self, sector: Sector) -> Option<f64> {
        self.sectors.get(sector).active_links
    }

    /// Businesses over all sectors, absent counts as zero
    #[must_use]
    pub fn total_businesses(&self) -> f64 {
        self.sectors
            .iter()
            .map(|(_, figures)| figures.businesses.unwrap_or(0.0))
            .sum()
    }

    /// Population if strictly positive
    #[must_use]
    pub fn positive_population(&self) -> Option<f64> {
        self.population.filter(|p| *p > 0.0)
    }

    /// Doctors plus nurses per 1,000 inhabitants
    ///
    /// `None` unless the population is positive.
    #[must_use]
    pub fn coverage_per_1000(&self) -> Option<f64> {
        let population = self.positive_population()?;
        let staff = self.doctors.unwrap_or(0.0) + self.nurses.unwrap_or(0.0);
        Some(staff / population * 1000.0)
    }

    /// Municipality name or `"N/A"`
    #[must_use]
    pub fn municipality_or_na(&self) -> String {
        self.municipality.clone().unwrap_or_else(|| "N/A".to_string())
    }

    /// State code or `"N/A"`
    #[must_use]
    pub fn state_code_or_na(&self) -> String {
        self.state_code.clone().unwrap_or_else(|| "N/A".to_string())
    }

    /// Read a field generically
    #[must_use]
    pub fn field_value(&self, field: RowField) -> Option<FieldValue> {
        match field {
            RowField::Year => self.year.map(|y| FieldValue::Integer(i64::from(y))),
            RowField::StateCode => self.state_code.clone().map(FieldValue::Text),
            RowField::StateName => self.state_name.clone().map(FieldValue::Text),
            RowField::MunicipalityId => self.municipality_id.map(FieldValue::Integer),
            RowField::Municipality => self.municipality.clone().map(FieldValue::Text),
            RowField::City => self.city.clone().map(FieldValue::Text),
            _ => self.numeric_value(field).map(FieldValue::Number),
        }
    }

    /// Read a numeric field; identity fields return `None`
    #[must_use]
    pub const fn numeric_value(&self, field: RowField) -> Option<f64> {
        match field {
            RowField::Population => self.population,
            RowField::Idhm => self.idhm,
            RowField::IdhmIncome => self.idhm_income,
            RowField::IdhmEducation => self.idhm_education,
            RowField::IdhmLongevity => self.idhm_longevity,
            RowField::TotalTeachers => self.total_teachers,
            RowField::TotalStudents => self.total_students,
            RowField::Ideb => self.ideb,
            RowField::Nurses => self.nurses,
            RowField::Doctors => self.doctors,
            RowField::HealthSpend => self.health_spend,
            RowField::Businesses(sector) => self.businesses(sector),
            RowField::ActiveLinks(sector) => self.active_links(sector),
            RowField::Year
            | RowField::StateCode
            | RowField::StateName
            | RowField::MunicipalityId
            | RowField::Municipality
            | RowField::City => None,
        }
    }
}

impl From<&MunicipioRawData> for MunicipioRow {
    fn from(raw: &MunicipioRawData) -> Self {
        Self::from_raw(raw)
    }
}
