//! HDI band distribution

use serde::Serialize;

use crate::models::MunicipioRow;

use super::classification::IdhmBand;

/// Number of rows in one HDI band
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandCount {
    pub band: IdhmBand,
    pub label: &'static str,
    pub count: usize,
}

/// Count rows per HDI band
///
/// Always returns the five bands in fixed order, lowest first, including empty
/// ones. Rows without HDI are not counted.
#[must_use]
pub fn idhm_distribution(rows: &[MunicipioRow]) -> Vec<BandCount> {
    let mut counts = [0usize; IdhmBand::ALL.len()];
    for idhm in rows.iter().filter_map(|row| row.idhm) {
        counts[IdhmBand::from_value(idhm) as usize] += 1;
    }

    IdhmBand::ALL
        .into_iter()
        .zip(counts)
        .map(|(band, count)| BandCount {
            band,
            label: band.range_label(),
            count,
        })
        .collect()
}
