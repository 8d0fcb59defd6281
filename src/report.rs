//! Shaping upstream wave data into the public contract.
//!
//! The CPTEC bulletin arrives with Portuguese wire names and no guidance;
//! this module renames every field into the public schema and derives two
//! kinds of advice from it: a per-condition `recommendation` string and, when
//! the caller asked about a specific beach, a single `beach_conditions`
//! summary built from the midday sample.

use crate::cptec::{WaveBulletin, WaveDay, WaveSample};
use serde::Serialize;
use serde_json::{json, Value};

/// One shaped condition sample of the public contract.
#[derive(Debug, Clone, Serialize)]
pub struct ShapedCondition {
    pub time: String,
    pub wind_speed_kmh: f64,
    pub wind_direction: String,
    pub wind_direction_description: String,
    pub wave_height_m: f64,
    pub wave_direction: String,
    pub wave_direction_description: String,
    pub sea_state: String,
    pub recommendation: &'static str,
}

/// One shaped forecast day.
#[derive(Debug, Clone, Serialize)]
pub struct ShapedDay {
    pub date: Option<String>,
    pub conditions: Vec<ShapedCondition>,
}

/// Derive bathing/surf guidance from a condition sample.
///
/// Ordered rules, first match wins; the sea-state text is checked before the
/// numeric bands, so a "Fraco" bulletin reads as calm whatever the numbers
/// say.
pub fn recommendation(sea_state: &str, wave_height_m: f64, wind_kmh: f64) -> &'static str {
    let state = sea_state.to_lowercase();

    if state.contains("fraco") || (wave_height_m < 0.5 && wind_kmh < 15.0) {
        "Excelente para banho e atividades aquáticas leves"
    } else if state.contains("moderado") || (wave_height_m < 1.5 && wind_kmh < 25.0) {
        "Bom para natação experiente e surfe intermediário"
    } else if state.contains("forte") || wave_height_m >= 1.5 {
        "Ideal para surfe avançado. Cuidado ao nadar"
    } else {
        "Verifique condições locais antes de entrar no mar"
    }
}

/// Rename every forecast day into the public schema, attaching a
/// recommendation per condition.
pub fn shape_waves(bulletin: &WaveBulletin) -> Vec<ShapedDay> {
    bulletin.ondas.iter().map(shape_day).collect()
}

fn shape_day(day: &WaveDay) -> ShapedDay {
    ShapedDay {
        date: day.data.clone(),
        conditions: day.dados_ondas.iter().map(shape_condition).collect(),
    }
}

fn shape_condition(sample: &WaveSample) -> ShapedCondition {
    ShapedCondition {
        time: sample.hora.clone(),
        wind_speed_kmh: sample.vento,
        wind_direction: sample.direcao_vento.clone(),
        wind_direction_description: sample.direcao_vento_desc.clone(),
        wave_height_m: sample.altura_onda,
        wave_direction: sample.direcao_onda.clone(),
        wave_direction_description: sample.direcao_onda_desc.clone(),
        sea_state: sample.agitacao.clone(),
        recommendation: recommendation(&sample.agitacao, sample.altura_onda, sample.vento),
    }
}

/// Build the single-beach summary from the first forecast day.
///
/// Prefers the midday `12Z` sample, else the day's first sample; with no
/// samples at all the summary degrades to a status note.
pub fn beach_conditions(bulletin: &WaveBulletin, beach: &str) -> Value {
    let sample = bulletin
        .ondas
        .first()
        .and_then(|today| {
            today
                .dados_ondas
                .iter()
                .find(|c| c.hora == "12Z")
                .or_else(|| today.dados_ondas.first())
                .map(|sample| (today, sample))
        });

    let Some((today, midday)) = sample else {
        return json!({ "status": "Dados não disponíveis" });
    };

    json!({
        "beach": beach,
        "date": today.data,
        "summary": {
            "sea_state": midday.agitacao,
            "wave_height": format!("{}m", midday.altura_onda),
            "wind": format!("{} km/h {}", midday.vento, midday.direcao_vento_desc),
            "recommendation": recommendation(&midday.agitacao, midday.altura_onda, midday.vento),
        }
    })
}
