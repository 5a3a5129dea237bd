//! Built-in example record
//!
//! Substituted for the dataset when it cannot be read or parsed so that the
//! dashboards still have something to show.

use serde_json::json;

use crate::models::municipio::MunicipioRow;
use crate::models::raw::MunicipioRawData;

/// The single example record (Acrelândia, AC, 2010)
#[must_use]
pub fn example_record() -> MunicipioRawData {
    let value = json!({
        "ano": 2010,
        "sigla_uf": "AC",
        "sigla_uf_nome": "Acre",
        "id_municipio": 1200013,
        "municipio": "Acrelândia",
        "cidade": "Acrelândia",
        "pop": 12707,
        "IDHM": 0.604,
        "IDHM Renda": 0.584,
        "IDHM Educação": 0.466,
        "IDHM Longevidade": 0.808,
        "total_docentes": 151,
        "total_alunos": 4170,
        "quantidade_profissionais_enfermeiro": 665,
        "quantidade_profissionais_medico": 85,
        "valor_total_ato_profissional": 96201.42,
        "numero_de_empresas_agronegocio": 34,
        "quantidade_vinculos_ativos_agronegocio": 72,
        "numero_de_empresas_comercio": 98,
        "quantidade_vinculos_ativos_comercio": 154,
        "numero_de_empresas_construcao": 4,
        "quantidade_vinculos_ativos_construcao": 13,
        "numero_de_empresas_educacao": 10,
        "quantidade_vinculos_ativos_educacao": 2,
        "numero_de_empresas_industria": 30,
        "quantidade_vinculos_ativos_industria": 162,
        "numero_de_empresas_saude": 1,
        "quantidade_vinculos_ativos_saude": 0,
        "numero_de_empresas_turismo": 9,
        "quantidade_vinculos_ativos_turismo": 3
    });

    MunicipioRawData::from_value(value).unwrap_or_default()
}

/// The example record, normalized
#[must_use]
pub fn fallback_rows() -> Vec<MunicipioRow> {
    vec![MunicipioRow::from_raw(&example_record())]
}
