use csv::StringRecord;
use std::collections::HashMap;

/// Expected columns of a funding table.
pub struct FundingSchema;

/// Column positions resolved from a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub date: usize,
    pub startup: usize,
    pub investors: usize,
    pub vertical: usize,
    pub city: usize,
    pub round: usize,
    pub amount: usize,
}

impl FundingSchema {
    pub const REQUIRED_COLUMNS: [&'static str; 7] = [
        "date",
        "startup",
        "investors",
        "vertical",
        "city",
        "round",
        "amount",
    ];

    /// Resolve required column positions from a header row.
    ///
    /// Header names are compared after trimming, stripping a UTF-8 BOM and
    /// lowercasing. Extra columns are ignored.
    pub fn resolve(headers: &StringRecord) -> Result<ColumnIndex, SchemaError> {
        let map = header_map(headers);
        let find = |name: &str| {
            map.get(name)
                .copied()
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndex {
            date: find("date")?,
            startup: find("startup")?,
            investors: find("investors")?,
            vertical: find("vertical")?,
            city: find("city")?,
            round: find("round")?,
            amount: find("amount")?,
        })
    }
}

fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        // First occurrence wins on duplicate headers.
        map.entry(normalize_header_name(name)).or_insert(idx);
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
