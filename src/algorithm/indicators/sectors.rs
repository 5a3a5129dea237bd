//! Business breakdown by economic sector

use serde::Serialize;
use smallvec::SmallVec;

use crate::models::{MunicipioRow, Sector};

use super::totals::calculate_totals;

/// Businesses and employment links of one sector
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    pub sector: Sector,
    pub label: &'static str,
    pub businesses: f64,
    pub active_links: f64,
}

/// At most one entry per sector
pub type SectorBreakdown = SmallVec<[SectorSummary; Sector::COUNT]>;

/// Sectors with at least one business, most businesses first
///
/// Sectors start in `Sector::DISPLAY_ORDER` and the sort is stable, so ties
/// keep that order.
#[must_use]
pub fn businesses_by_sector(rows: &[MunicipioRow]) -> SectorBreakdown {
    let totals = calculate_totals(rows);

    let mut breakdown: SectorBreakdown = Sector::DISPLAY_ORDER
        .into_iter()
        .map(|sector| SectorSummary {
            sector,
            label: sector.label(),
            businesses: totals.businesses_by_sector.get(sector),
            active_links: totals.links_by_sector.get(sector),
        })
        .filter(|summary| summary.businesses > 0.0)
        .collect();

    breakdown.sort_by(|a, b| b.businesses.total_cmp(&a.businesses));
    breakdown
}
