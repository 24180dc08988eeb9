use crate::model::game::QueueCategory;

/// Maps a queue id to its category, ids outside the table are `Other`.
/// Games without any queue id are classified as `Unknown` by the caller.
pub fn queue_category(queue_id: i64) -> QueueCategory {
    match queue_id {
        420 => QueueCategory::RankedSolo,
        440 => QueueCategory::RankedFlex,
        400 | 430 => QueueCategory::Normal,
        450 => QueueCategory::Aram,
        1700 => QueueCategory::Arena,
        _ => QueueCategory::Other,
    }
}
