//! Summed indicators over a set of rows

use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::models::{MunicipioRow, Sector, SectorCounts};

/// Totals over a set of rows; absent values count as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedMetrics {
    pub population: f64,
    pub teachers: f64,
    pub students: f64,
    pub nurses: f64,
    pub doctors: f64,
    pub health_spend: f64,
    pub total_businesses: f64,
    pub businesses_by_sector: SectorCounts,
    pub links_by_sector: SectorCounts,
}

impl AggregatedMetrics {
    /// Add one row to the running totals
    pub fn accumulate(&mut self, row: &MunicipioRow) {
        self.population += row.population.unwrap_or(0.0);
        self.teachers += row.total_teachers.unwrap_or(0.0);
        self.students += row.total_students.unwrap_or(0.0);
        self.nurses += row.nurses.unwrap_or(0.0);
        self.doctors += row.doctors.unwrap_or(0.0);
        self.health_spend += row.health_spend.unwrap_or(0.0);

        for sector in Sector::ALL {
            let businesses = row.businesses(sector).unwrap_or(0.0);
            self.total_businesses += businesses;
            self.businesses_by_sector.record(sector, businesses);
            self.links_by_sector
                .record(sector, row.active_links(sector).unwrap_or(0.0));
        }
    }
}

impl AddAssign for AggregatedMetrics {
    fn add_assign(&mut self, rhs: Self) {
        self.population += rhs.population;
        self.teachers += rhs.teachers;
        self.students += rhs.students;
        self.nurses += rhs.nurses;
        self.doctors += rhs.doctors;
        self.health_spend += rhs.health_spend;
        self.total_businesses += rhs.total_businesses;
        self.businesses_by_sector += rhs.businesses_by_sector;
        self.links_by_sector += rhs.links_by_sector;
    }
}

impl Add for AggregatedMetrics {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Sum population, staff, spend and sector figures over `rows`
#[must_use]
pub fn calculate_totals(rows: &[MunicipioRow]) -> AggregatedMetrics {
    rows.iter().fold(AggregatedMetrics::default(), |mut acc, row| {
        acc.accumulate(row);
        acc
    })
}
