use chrono::{Local, TimeZone};
use json::{object::Object, JsonValue};

use crate::{
    model::{
        game::{ChampionRef, MatchOutcome, MatchQueue, MatchSummary, QueueCategory},
        ids::{ChampionId, MatchId},
    },
    service::gameapi::error::LcuError,
};

use super::queues::queue_category;

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Decodes a match history response into summaries, keeping the order of the response.
///
/// Only a body that is not a JSON object fails. Missing fields fall back to
/// their defaults and never drop a game.
pub fn parse_match_history(data: &[u8]) -> Result<Vec<MatchSummary>, LcuError> {
    let text = std::str::from_utf8(data).map_err(|err| LcuError::Parse(err.to_string()))?;
    let json = json::parse(text)?;

    let root = match &json {
        JsonValue::Object(obj) => obj,
        _ => return Err(LcuError::Parse("root is not an object".into())),
    };

    let mut games = Vec::new();
    if let JsonValue::Array(game_array) = &root["games"]["games"] {
        for (index, game_entry) in game_array.iter().enumerate() {
            match game_entry {
                JsonValue::Object(game_obj) => games.push(parse_game_obj(game_obj)),
                _ => tracing::warn!(index, "skipping match history entry that is not an object"),
            }
        }
    }

    Ok(games)
}

fn parse_game_obj(obj: &Object) -> MatchSummary {
    let start_time_millis = int_of(&obj["gameCreationDate"]).unwrap_or(0);

    let queue = match int_of(&obj["queueId"]) {
        Some(queue_id) => MatchQueue::new(queue_category(queue_id)),
        None => MatchQueue::new(QueueCategory::Unknown),
    };

    let mut summary = MatchSummary {
        match_id: MatchId::from(text_of(&obj["gameId"])),
        queue,
        start_time_millis,
        formatted_start_time: format_start_time(start_time_millis),
        duration_seconds: i32_of(&obj["gameDuration"]),
        ..Default::default()
    };

    // First participant is always the current summoner
    if let JsonValue::Object(player) = &obj["participants"][0] {
        if let Some(champ_id) = int_of(&player["championId"]) {
            summary.champion = ChampionRef::from(ChampionId::from(champ_id));
        }

        let stats = &player["stats"];
        summary.kills = i32_of(&stats["kills"]);
        summary.deaths = i32_of(&stats["deaths"]);
        summary.assists = i32_of(&stats["assists"]);
        summary.outcome = stats["win"]
            .as_bool()
            .map(MatchOutcome::from_win)
            .unwrap_or(MatchOutcome::Unknown);
    }

    summary
}

/// Integer value of a present field, `None` only when the field is absent or null.
///
/// Integral floats such as `420.0` count as integers. Anything else that is
/// present (strings, fractions, objects, out of range numbers) reads as 0.
fn int_of(value: &JsonValue) -> Option<i64> {
    if value.is_null() {
        return None;
    }

    let number = match value.as_f64() {
        Some(number) if number.fract() == 0.0 && number >= i64::MIN as f64 && number < i64::MAX as f64 => {
            value.as_i64().unwrap_or(number as i64)
        }
        _ => 0,
    };
    Some(number)
}

fn i32_of(value: &JsonValue) -> i32 {
    int_of(value).and_then(|number| i32::try_from(number).ok()).unwrap_or(0)
}

fn text_of(value: &JsonValue) -> String {
    match value {
        JsonValue::Short(_) | JsonValue::String(_) => value.as_str().unwrap_or_default().to_string(),
        JsonValue::Number(_) => value.dump(),
        _ => String::new(),
    }
}

pub fn format_start_time(millis: i64) -> String {
    if millis <= 0 {
        return String::new();
    }

    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|time| time.format(START_TIME_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::gameapi::error::ErrorKind;

    fn parse(body: &str) -> Vec<MatchSummary> {
        parse_match_history(body.as_bytes()).unwrap()
    }

    #[test]
    fn decodes_ranked_game() {
        let games = parse(
            r#"{"games":{"games":[{"gameId":555,"queueId":420,"gameDuration":1800,
            "participants":[{"championId":103,"stats":{"kills":5,"deaths":2,"assists":7,"win":true}}]}]}}"#,
        );

        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert_eq!(game.match_id.as_str(), "555");
        assert_eq!(game.queue.category, QueueCategory::RankedSolo);
        assert_eq!(game.queue.label, "Ranked Solo/Duo");
        assert_eq!(game.duration_seconds, 1800);
        assert_eq!((game.kills, game.deaths, game.assists), (5, 2, 7));
        assert_eq!(game.outcome, MatchOutcome::Win);
        assert_eq!(game.champion.display_name, "103");
        assert_eq!(game.champion.internal_key, "103");
    }

    #[test]
    fn non_object_root_is_parse_error() {
        for body in ["[1, 2, 3]", "42", "\"games\"", "null"] {
            let err = parse_match_history(body.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseError, "body {}", body);
        }
    }

    #[test]
    fn invalid_document_is_parse_error() {
        let bodies: [&[u8]; 3] = [b"{\"games\": ", b"", b"\xff\xfe"];
        for body in bodies {
            let err = parse_match_history(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseError);
        }
    }

    #[test]
    fn missing_games_list_is_empty() {
        assert!(parse("{}").is_empty());
        assert!(parse(r#"{"games":{}}"#).is_empty());
        assert!(parse(r#"{"games":{"games":{"gameId":1}}}"#).is_empty());
        assert!(parse(r#"{"games":[]}"#).is_empty());
    }

    #[test]
    fn game_without_participants_keeps_defaults() {
        let games = parse(r#"{"games":{"games":[{"gameId":7,"queueId":450}]}}"#);

        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert_eq!(game.match_id.as_str(), "7");
        assert_eq!(game.queue.category, QueueCategory::Aram);
        assert_eq!((game.kills, game.deaths, game.assists), (0, 0, 0));
        assert_eq!(game.outcome, MatchOutcome::Unknown);
        assert_eq!(game.champion, ChampionRef::default());
    }

    #[test]
    fn empty_participants_keep_defaults() {
        let games = parse(r#"{"games":{"games":[{"gameId":8,"participants":[]}]}}"#);

        assert_eq!(games[0].outcome, MatchOutcome::Unknown);
        assert_eq!(games[0].kills, 0);
    }

    #[test]
    fn empty_game_object_is_fully_defaulted() {
        let games = parse(r#"{"games":{"games":[{}]}}"#);

        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert_eq!(game.match_id.as_str(), "");
        assert_eq!(game.start_time_millis, 0);
        assert_eq!(game.formatted_start_time, "");
        assert_eq!(game.duration_seconds, 0);
        assert_eq!(game.queue.category, QueueCategory::Unknown);
        assert_eq!(game.queue.raw_id, "");
    }

    #[test]
    fn missing_win_flag_is_unknown_outcome() {
        let games = parse(
            r#"{"games":{"games":[
                {"participants":[{"championId":1,"stats":{"kills":1,"win":false}}]},
                {"participants":[{"championId":2,"stats":{"kills":2}}]}
            ]}}"#,
        );

        assert_eq!(games[0].outcome, MatchOutcome::Loss);
        assert_eq!(games[1].outcome, MatchOutcome::Unknown);
        assert_eq!(games[1].kills, 2);
        assert_eq!(games[1].deaths, 0);
    }

    #[test]
    fn malformed_game_does_not_abort_batch() {
        let games = parse(
            r#"{"games":{"games":[
                {"gameId":1,"queueId":"ranked","participants":"none"},
                17,
                {"gameId":2,"queueId":900,"participants":[{"championId":"x","stats":[]}]},
                {"gameId":3,"queueId":440}
            ]}}"#,
        );

        let ids = games.iter().map(|g| g.match_id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(games[0].queue.category, QueueCategory::Other);
        assert_eq!(games[1].queue.category, QueueCategory::Other);
        assert_eq!(games[1].queue.label, "Other");
        assert_eq!(games[1].champion.internal_key, "0");
        assert_eq!(games[2].queue.category, QueueCategory::RankedFlex);
    }

    #[test]
    fn present_queue_id_is_never_unknown() {
        let games = parse(
            r#"{"games":{"games":[
                {"queueId":"420"},
                {"queueId":420.0},
                {"queueId":440.5},
                {"queueId":null},
                {}
            ]}}"#,
        );

        let categories = games.iter().map(|g| g.queue.category).collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                QueueCategory::Other,
                QueueCategory::RankedSolo,
                QueueCategory::Other,
                QueueCategory::Unknown,
                QueueCategory::Unknown,
            ]
        );
    }

    #[test]
    fn integral_float_champion_id_is_kept() {
        let games = parse(r#"{"games":{"games":[{"participants":[{"championId":103.0,"stats":{}}]}]}}"#);

        assert_eq!(games[0].champion.display_name, "103");
        assert_eq!(games[0].champion.internal_key, "103");
    }

    #[test]
    fn signed_stats_are_kept() {
        let games = parse(
            r#"{"games":{"games":[{"gameDuration":-3,
            "participants":[{"championId":1,"stats":{"kills":-1,"deaths":4.0,"assists":"2"}}]}]}}"#,
        );

        let game = &games[0];
        assert_eq!(game.duration_seconds, -3);
        assert_eq!((game.kills, game.deaths, game.assists), (-1, 4, 0));
    }

    #[test]
    fn keeps_source_order() {
        let games = parse(r#"{"games":{"games":[{"gameId":30},{"gameId":10},{"gameId":20}]}}"#);

        let ids = games.iter().map(|g| g.match_id.to_string()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    #[test]
    fn string_game_id_is_kept() {
        let games = parse(r#"{"games":{"games":[{"gameId":"EUW1_123"}]}}"#);
        assert_eq!(games[0].match_id.as_str(), "EUW1_123");
    }

    #[test]
    fn large_game_id_keeps_all_digits() {
        let games = parse(r#"{"games":{"games":[{"gameId":7012345678}]}}"#);
        assert_eq!(games[0].match_id.as_str(), "7012345678");
    }

    #[test]
    fn formats_start_time_in_local_time() {
        let millis = 1_700_000_000_000;
        let games = parse(&format!(r#"{{"games":{{"games":[{{"gameCreationDate":{}}}]}}}}"#, millis));

        let expected = Local
            .timestamp_millis_opt(millis)
            .unwrap()
            .format(START_TIME_FORMAT)
            .to_string();
        assert_eq!(games[0].start_time_millis, millis);
        assert_eq!(games[0].formatted_start_time, expected);
        assert_eq!(expected.len(), 16);
    }

    #[test]
    fn zero_start_time_is_not_formatted() {
        assert_eq!(format_start_time(0), "");
        assert_eq!(format_start_time(-5), "");
    }
}
