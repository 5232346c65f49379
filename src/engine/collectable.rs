use serde::{Deserialize, Serialize};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectableKind {
    Bug,
    Fish,
    SeaCreature,
}

impl CollectableKind {
    pub const ALL: [CollectableKind; 3] = [
        CollectableKind::Bug,
        CollectableKind::Fish,
        CollectableKind::SeaCreature,
    ];

    /// Human-readable name for display
    pub fn name(&self) -> &str {
        match self {
            CollectableKind::Bug => "Bugs",
            CollectableKind::Fish => "Fish",
            CollectableKind::SeaCreature => "Sea Creatures",
        }
    }

    /// Lowercase noun used in summary sentences
    pub fn noun(&self) -> &str {
        match self {
            CollectableKind::Bug => "bugs",
            CollectableKind::Fish => "fish",
            CollectableKind::SeaCreature => "sea creatures",
        }
    }

    /// CSV asset file name for this kind
    pub fn asset_file(&self) -> &str {
        match self {
            CollectableKind::Bug => "Bugs.csv",
            CollectableKind::Fish => "Fish.csv",
            CollectableKind::SeaCreature => "SeaCreatures.csv",
        }
    }

    /// Key the collected set is persisted under
    pub fn storage_key(&self) -> &str {
        match self {
            CollectableKind::Bug => "selectedBugs",
            CollectableKind::Fish => "selectedFish",
            CollectableKind::SeaCreature => "selectedSeaCreatures",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// 1-based calendar number (Jan = 1)
    pub fn number(&self) -> u32 {
        Month::ALL.iter().position(|m| m == self).unwrap_or(0) as u32 + 1
    }

    pub fn from_number(n: u32) -> Option<Month> {
        if (1..=12).contains(&n) {
            Some(Month::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Column header in the catalog CSVs
    pub fn key(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Display label; July and Sept are spelled out longer than the rest
    pub fn label(&self) -> &'static str {
        match self {
            Month::Jul => "July",
            Month::Sep => "Sept",
            other => other.key(),
        }
    }

    /// Following calendar month, December wraps to January
    pub fn next(&self) -> Month {
        match self {
            Month::Dec => Month::Jan,
            other => Month::ALL[other.number() as usize],
        }
    }
}

// --- Records ---

/// One catalog entry: a bug, fish, or sea creature with its availability
/// metadata. `months` and `is_last_month` are derived per availability pass;
/// the loader leaves them at their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collectable {
    pub kind: CollectableKind,
    pub name: String,
    pub sell_price: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub shadow_size: String,
    /// Hour of day in [0,24). Both 0 means available all day;
    /// start > end is an overnight span wrapping midnight.
    pub time_start: u32,
    pub time_end: u32,
    #[serde(default)]
    pub second_time_start: Option<u32>,
    #[serde(default)]
    pub second_time_end: Option<u32>,
    pub months_northern: Vec<Month>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub months: String,
    #[serde(default)]
    pub is_last_month: bool,
}

impl Collectable {
    /// Active-hours cell for tables and reports, e.g. "All day" or "19:00 - 4:00"
    pub fn time_label(&self) -> String {
        if self.time_start == 0 && self.time_end == 0 {
            "All day".to_string()
        } else {
            format!("{}:00 - {}:00", self.time_start, self.time_end)
        }
    }
}
