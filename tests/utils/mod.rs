use std::future::Future;
use std::ops::Range;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use muni_analytics::{DataSource, MunicipioRow, Result, Sector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by the randomized tests
pub const TEST_SEED: u64 = 0x5eed_2010;

pub const ACRE: (&str, &str) = ("AC", "Acre");
pub const AMAZONAS: (&str, &str) = ("AM", "Amazonas");

/// A line-delimited payload with two municipalities in Acre and one in Amazonas
pub const SAMPLE_LINES: &str = r#"{"ano": 2010, "sigla_uf": "AC", "sigla_uf_nome": "Acre", "id_municipio": 1200013, "municipio": "Acrelândia", "pop": 12538, "IDHM": 0.604, "total_docentes": 220, "total_alunos": 4100, "numero_de_empresas_comercio": 90}
{"ano": 2010, "sigla_uf": "AC", "sigla_uf_nome": "Acre", "id_municipio": 1200401, "municipio": "Rio Branco", "pop": 336038, "IDHM": 0.727, "numero_de_empresas_comercio": 4000, "numero_de_empresas_saude": 300}
{"ano": 2010, "sigla_uf": "AM", "sigla_uf_nome": "Amazonas", "id_municipio": 1302603, "municipio": "Manaus", "pop": 1802014, "IDHM": 0.737}
"#;

/// Build a row with the fields most tests care about
#[must_use]
pub fn row(
    municipality: &str,
    state: Option<(&str, &str)>,
    pop: Option<f64>,
    idhm: Option<f64>,
) -> MunicipioRow {
    MunicipioRow {
        municipality: Some(municipality.to_string()),
        state_code: state.map(|(code, _)| code.to_string()),
        state_name: state.map(|(_, name)| name.to_string()),
        population: pop,
        idhm,
        ..Default::default()
    }
}

/// Generate `count` rows with random populations, health staff and businesses
#[must_use]
pub fn random_rows(rng: &mut StdRng, count: usize) -> Vec<MunicipioRow> {
    (0..count)
        .map(|i| {
            let mut r = row(
                &format!("M{i}"),
                Some(ACRE),
                maybe_count(rng, 0.9, 1..500_000),
                rng.random_bool(0.8).then(|| rng.random_range(0.3..0.95)),
            );
            r.doctors = maybe_count(rng, 0.7, 0..400);
            r.nurses = maybe_count(rng, 0.7, 0..900);
            for sector in Sector::ALL {
                r.sectors.get_mut(sector).businesses = maybe_count(rng, 0.5, 0..2_000);
            }
            r
        })
        .collect()
}

/// A whole number drawn from `range` with probability `p`, else absent
pub fn maybe_count(rng: &mut StdRng, p: f64, range: Range<i32>) -> Option<f64> {
    if rng.random_bool(p) {
        Some(f64::from(rng.random_range(range)))
    } else {
        None
    }
}

#[must_use]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}

/// Serves fixed text and counts how often it was read
#[derive(Debug)]
pub struct CountingSource {
    content: String,
    delay: Duration,
    reads: AtomicUsize,
}

impl CountingSource {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            delay: Duration::ZERO,
            reads: AtomicUsize::new(0),
        }
    }

    /// Sleep for `delay` before answering each read
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DataSource for CountingSource {
    fn read<'a>(
        &'a self,
        _name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.content.clone())
        })
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
