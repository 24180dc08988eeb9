use std::fmt;

use super::ids::{ChampionId, MatchId};

/// Matchmaking category a game was played in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QueueCategory {
    RankedSolo,
    RankedFlex,
    Normal,
    Aram,
    Arena,
    Other,
    /// The game carried no queue identifier at all.
    #[default]
    Unknown,
}

impl QueueCategory {
    pub fn label(&self) -> &'static str {
        match self {
            QueueCategory::RankedSolo => "Ranked Solo/Duo",
            QueueCategory::RankedFlex => "Ranked Flex",
            QueueCategory::Normal => "Normal",
            QueueCategory::Aram => "ARAM",
            QueueCategory::Arena => "Arena",
            QueueCategory::Other => "Other",
            QueueCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for QueueCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQueue {
    pub category: QueueCategory,
    pub label: String,
    /// Textual queue id as reported by the client. Not filled by the match history decoder yet.
    pub raw_id: String,
}

impl MatchQueue {
    pub fn new(category: QueueCategory) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            raw_id: String::new(),
        }
    }
}

impl Default for MatchQueue {
    fn default() -> Self {
        MatchQueue::new(QueueCategory::Unknown)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    Win,
    Loss,
    /// Reserved, no decoder produces it yet.
    Remake,
    #[default]
    Unknown,
}

impl MatchOutcome {
    pub fn from_win(win: bool) -> Self {
        if win {
            MatchOutcome::Win
        } else {
            MatchOutcome::Loss
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "Win",
            MatchOutcome::Loss => "Loss",
            MatchOutcome::Remake => "Remake",
            MatchOutcome::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChampionRef {
    pub display_name: String,
    pub internal_key: String,
    pub icon_path: String,
}

impl From<ChampionId> for ChampionRef {
    // Without a champion dictionary both names fall back to the numeric id
    fn from(id: ChampionId) -> Self {
        Self {
            display_name: id.0.clone(),
            internal_key: id.0,
            icon_path: String::new(),
        }
    }
}

/// One row of the match history, as shown in list views.
///
/// Every field has a zero/empty/unknown default, so a partially filled game
/// object from the client still yields a valid summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub queue: MatchQueue,
    pub champion: ChampionRef,
    pub lane: String,
    pub start_time_millis: i64,
    pub formatted_start_time: String,
    pub duration_seconds: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub cs: u32,
    pub cs_per_minute: f64,
    pub gold: u32,
    pub damage: u32,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemBuild {
    pub item_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuneInfo {
    pub primary_tree_id: i64,
    pub secondary_tree_id: i64,
    pub selected_rune_ids: Vec<i64>,
}

/// Summary extended with build and rune data for detail views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchDetail {
    pub summary: MatchSummary,
    pub items: ItemBuild,
    pub runes: RuneInfo,
}

impl From<MatchSummary> for MatchDetail {
    fn from(summary: MatchSummary) -> Self {
        Self {
            summary,
            items: ItemBuild::default(),
            runes: RuneInfo::default(),
        }
    }
}
