use crossterm::style::Stylize;
use json::JsonValue;

use crate::model::game::{MatchOutcome, MatchSummary};

pub mod async_data;

pub fn format_duration(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// One plain table row, without styling.
pub fn format_summary(summary: &MatchSummary) -> String {
    format!(
        "{:<16} {:<16} {:<16} {:>2}/{:>2}/{:>2}  {:>6}  {}",
        summary.formatted_start_time,
        summary.queue.label,
        summary.champion.display_name,
        summary.kills,
        summary.deaths,
        summary.assists,
        format_duration(summary.duration_seconds),
        summary.match_id,
    )
}

pub fn print_match_history(summaries: &[MatchSummary]) {
    if summaries.is_empty() {
        println!("{}", "No games found.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<7} {:<16} {:<16} {:<16} {:>8}  {:>6}  {}",
            "Result", "Started", "Queue", "Champion", "K/D/A", "Time", "Game"
        )
        .cyan()
    );
    for summary in summaries {
        let outcome = format!("{:<7}", summary.outcome.label());
        let outcome = match summary.outcome {
            MatchOutcome::Win => outcome.green(),
            MatchOutcome::Loss => outcome.red(),
            MatchOutcome::Remake | MatchOutcome::Unknown => outcome.dark_grey(),
        };
        println!("{} {}", outcome, format_summary(summary));
    }
}

pub fn summary_json(summary: &MatchSummary) -> JsonValue {
    let mut queue = JsonValue::new_object();
    queue["category"] = format!("{:?}", summary.queue.category).into();
    queue["label"] = summary.queue.label.as_str().into();
    queue["rawId"] = summary.queue.raw_id.as_str().into();

    let mut champion = JsonValue::new_object();
    champion["displayName"] = summary.champion.display_name.as_str().into();
    champion["internalKey"] = summary.champion.internal_key.as_str().into();
    champion["iconPath"] = summary.champion.icon_path.as_str().into();

    let mut obj = JsonValue::new_object();
    obj["matchId"] = summary.match_id.as_str().into();
    obj["queue"] = queue;
    obj["champion"] = champion;
    obj["lane"] = summary.lane.as_str().into();
    obj["startTimeMillis"] = summary.start_time_millis.into();
    obj["formattedStartTime"] = summary.formatted_start_time.as_str().into();
    obj["durationSeconds"] = summary.duration_seconds.into();
    obj["kills"] = summary.kills.into();
    obj["deaths"] = summary.deaths.into();
    obj["assists"] = summary.assists.into();
    obj["cs"] = summary.cs.into();
    obj["csPerMinute"] = summary.cs_per_minute.into();
    obj["gold"] = summary.gold.into();
    obj["damage"] = summary.damage.into();
    obj["outcome"] = summary.outcome.label().into();
    obj
}

pub fn match_history_json(summaries: &[MatchSummary]) -> JsonValue {
    JsonValue::Array(summaries.iter().map(summary_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        game::{ChampionRef, MatchQueue, QueueCategory},
        ids::{ChampionId, MatchId},
    };

    fn summary() -> MatchSummary {
        MatchSummary {
            match_id: MatchId::from("555".to_string()),
            queue: MatchQueue::new(QueueCategory::RankedSolo),
            champion: ChampionRef::from(ChampionId::from(103)),
            duration_seconds: 1805,
            kills: 5,
            deaths: 2,
            assists: 7,
            outcome: MatchOutcome::Win,
            ..Default::default()
        }
    }

    #[test]
    fn formats_duration_as_minutes() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(1805), "30:05");
        assert_eq!(format_duration(-3), "0:00");
    }

    #[test]
    fn summary_row_contains_key_fields() {
        let row = format_summary(&summary());

        assert!(row.contains("Ranked Solo/Duo"));
        assert!(row.contains(" 5/ 2/ 7"));
        assert!(row.contains("30:05"));
        assert!(row.ends_with("555"));
    }

    #[test]
    fn json_output_uses_camel_case_fields() {
        let json = match_history_json(&[summary(), MatchSummary::default()]);

        assert_eq!(json.len(), 2);
        assert_eq!(json[0]["matchId"], "555");
        assert_eq!(json[0]["queue"]["category"], "RankedSolo");
        assert_eq!(json[0]["queue"]["label"], "Ranked Solo/Duo");
        assert_eq!(json[0]["champion"]["internalKey"], "103");
        assert_eq!(json[0]["kills"], 5);
        assert_eq!(json[0]["outcome"], "Win");
        assert_eq!(json[1]["queue"]["category"], "Unknown");
        assert_eq!(json[1]["outcome"], "Unknown");
    }
}
