//! Raw municipal records as they appear in the dataset
//!
//! Records are JSON objects keyed by Portuguese field names, some of them
//! accented (`"IDHM Educação"`). No schema is enforced: any key may be
//! missing, null, or hold a value of an unexpected type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw field names recognized by the row transform
pub mod keys {
    pub const ANO: &str = "ano";
    pub const SIGLA_UF: &str = "sigla_uf";
    pub const SIGLA_UF_NOME: &str = "sigla_uf_nome";
    pub const ID_MUNICIPIO: &str = "id_municipio";
    pub const MUNICIPIO: &str = "municipio";
    pub const CIDADE: &str = "cidade";
    pub const POP: &str = "pop";
    pub const IDHM: &str = "IDHM";
    pub const IDHM_RENDA: &str = "IDHM Renda";
    pub const IDHM_EDUCACAO: &str = "IDHM Educação";
    pub const IDHM_LONGEVIDADE: &str = "IDHM Longevidade";
    pub const TOTAL_DOCENTES: &str = "total_docentes";
    pub const TOTAL_ALUNOS: &str = "total_alunos";
    pub const PROFISSIONAIS_ENFERMEIRO: &str = "quantidade_profissionais_enfermeiro";
    pub const PROFISSIONAIS_MEDICO: &str = "quantidade_profissionais_medico";
    pub const VALOR_TOTAL_ATO_PROFISSIONAL: &str = "valor_total_ato_profissional";
}

/// One raw record, before normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MunicipioRawData(Map<String, Value>);

impl MunicipioRawData {
    /// Wrap a JSON value, returning `None` unless it is an object
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a raw field
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a finite number
    ///
    /// Numeric strings are accepted. Null, booleans, empty or non-numeric
    /// strings and non-finite values read as absent. Zero is kept.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        let value = match self.0.get(key)? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Read an integral number
    ///
    /// Floats are accepted when they carry no fractional part.
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            _ => None,
        }
    }

    /// Read a non-empty string
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for MunicipioRawData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
