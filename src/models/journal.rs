use serde::{Deserialize, Deserializer, Serialize};

/// One general journal (jurnal umum) entry with its posting lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lines: Vec<JournalLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    #[serde(default)]
    pub account_code: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub debit: f64,
    #[serde(default, deserialize_with = "amount")]
    pub credit: f64,
}

/// Amounts arrive either as JSON numbers or as decimal strings ("150000.00").
fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
        Null(Option<()>),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) if s.trim().is_empty() => Ok(0.0),
        Raw::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount '{s}'"))),
        Raw::Null(_) => Ok(0.0),
    }
}
