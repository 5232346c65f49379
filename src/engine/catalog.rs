use crate::engine::collectable::{Collectable, CollectableKind, Month};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

lazy_static! {
    static ref MONTH_COLUMNS: HashMap<&'static str, Month> = {
        let mut m = HashMap::new();
        for month in Month::ALL {
            m.insert(month.key(), month);
        }
        m
    };
}

/// Reads the catalog CSVs and hands out typed records. Each kind is read at
/// most once per session; the parsed result is cached, so filter changes
/// never re-touch the assets. A kind whose asset is missing or malformed
/// stays an empty catalog until the next session.
pub struct CatalogService {
    assets_dir: PathBuf,
    cache: Mutex<HashMap<CollectableKind, Vec<Collectable>>>,
}

impl CatalogService {
    pub fn new<P: AsRef<Path>>(assets_dir: P) -> Self {
        Self {
            assets_dir: assets_dir.as_ref().to_path_buf(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Load the catalog for one kind, degrading to empty on any failure.
    pub async fn load(&self, kind: CollectableKind) -> Vec<Collectable> {
        let mut cache = self.cache.lock().await;
        if let Some(hit) = cache.get(&kind) {
            return hit.clone();
        }

        let records = match self.fetch(kind).await {
            Ok(records) => {
                info!("Loaded {} {} from catalog", records.len(), kind.noun());
                records
            }
            Err(e) => {
                warn!("Failed to load {} catalog: {:#}", kind.name(), e);
                Vec::new()
            }
        };

        cache.insert(kind, records.clone());
        records
    }

    async fn fetch(&self, kind: CollectableKind) -> Result<Vec<Collectable>> {
        let path = self.assets_dir.join(kind.asset_file());
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        parse_rows(&text, kind).with_context(|| format!("parsing {}", path.display()))
    }
}

pub fn parse_rows(text: &str, kind: CollectableKind) -> Result<Vec<Collectable>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.context("malformed row")?;
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        records.push(row_to_collectable(&headers, &row, kind));
    }
    Ok(records)
}

// Column presence is never required: a missing column falls back to the
// field default, a non-numeric cell to 0.
fn row_to_collectable(
    headers: &csv::StringRecord,
    row: &csv::StringRecord,
    kind: CollectableKind,
) -> Collectable {
    let cell = |name: &str| -> String {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| row.get(i))
            .unwrap_or("")
            .to_string()
    };
    let number = |name: &str| -> u32 { cell(name).parse().unwrap_or(0) };
    let optional_number = |name: &str| -> Option<u32> { cell(name).parse().ok() };

    // Month columns hold an "x" (any case) when the critter is in season
    let mut months_northern = Vec::new();
    for (i, header) in headers.iter().enumerate() {
        if let Some(month) = MONTH_COLUMNS.get(header) {
            let marked = row
                .get(i)
                .map(|v| v.eq_ignore_ascii_case("x"))
                .unwrap_or(false);
            if marked {
                months_northern.push(*month);
            }
        }
    }

    Collectable {
        kind,
        name: cell("Name"),
        sell_price: number("Sell Price"),
        location: cell("Location"),
        weather: cell("Weather"),
        shadow_size: cell("Shadow Size"),
        time_start: number("Start Time"),
        time_end: number("End Time"),
        second_time_start: optional_number("Second Start Time"),
        second_time_end: optional_number("Second End Time"),
        months_northern,
        notes: cell("Notes"),
        months: String::new(),
        is_last_month: false,
    }
}
