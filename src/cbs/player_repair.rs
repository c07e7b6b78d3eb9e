//! CBS renders the player cell as a short and a long label run together,
//! e.g. `"M. Trout OF LAA Mike Trout OF LAA"`.
//! Only the second half is kept: its last two tokens are the position and the
//! team, and the first half of it is the name.

use std::borrow::Cow;

use itertools::Itertools;
use log::trace;
use serde_json::Value;

use crate::{
    error::{Result, ScrapeError},
    record::{replace_field, Record},
};

pub const PLAYER_FIELD: &str = "Player";

pub fn repair_player(record: Record) -> Result<Record> {
    replace_field(record, PLAYER_FIELD, split_name_pos_team)
}

pub fn split_name_pos_team(value: &Value) -> Result<Record> {
    let text = match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Null => return Err(schema_error("the cell is empty".to_owned())),
        other => Cow::Owned(other.to_string()),
    };
    let tokens = text.split_whitespace().collect_vec();
    let half = &tokens[tokens.len() / 2..];
    let [.., pos, team] = half else {
        return Err(schema_error(format!(
            "{text:?} does not end with a position and a team"
        )));
    };
    // First half of `half`; names over two tokens are truncated.
    let name = half[..half.len() / 2].join(" ");
    trace!("{text:?} -> name={name:?}, pos={pos:?}, team={team:?}");
    Ok(Record::from_iter([
        ("name".to_owned(), name.into()),
        ("pos".to_owned(), (*pos).into()),
        ("team".to_owned(), (*team).into()),
    ]))
}

fn schema_error(reason: String) -> ScrapeError {
    ScrapeError::Schema {
        field: PLAYER_FIELD.to_owned(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::{error::ScrapeError, record::Record};

    use super::{repair_player, split_name_pos_team};

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_repair_player() {
        let repaired =
            repair_player(record(json!({"Player": "Mike Trout OF LAA Mike Trout OF LAA", "HR": 40})))
                .unwrap();
        assert_eq!(
            repaired,
            record(json!({"HR": 40, "name": "Mike Trout", "pos": "OF", "team": "LAA"}))
        );
        assert!(!repaired.contains_key("Player"));
        assert_eq!(
            repaired.keys().collect::<Vec<_>>(),
            ["HR", "name", "pos", "team"]
        );
    }

    #[test]
    fn test_short_and_long_labels() {
        let fields = split_name_pos_team(&json!("R. Acuna Jr. OF ATL Ronald Acuna Jr. OF ATL")).unwrap();
        assert_eq!(fields["name"], json!("Ronald Acuna"));
        assert_eq!(fields["pos"], json!("OF"));
        assert_eq!(fields["team"], json!("ATL"));
    }

    #[test]
    fn test_three_token_name_keeps_first_half() {
        let fields =
            split_name_pos_team(&json!("Jung Hoo Lee CF SF Jung Hoo Lee CF SF")).unwrap();
        assert_eq!(fields["name"], json!("Jung Hoo"));
        assert_eq!(fields["pos"], json!("CF"));
        assert_eq!(fields["team"], json!("SF"));
    }

    #[test]
    fn test_odd_token_count_takes_longer_half() {
        // 7 tokens: the second half starts at index 3.
        let fields = split_name_pos_team(&json!("J. Soto OF Juan Soto OF SD")).unwrap();
        assert_eq!(fields["name"], json!("Juan Soto"));
        assert_eq!(fields["team"], json!("SD"));
    }

    #[test]
    fn test_malformed_player() {
        for value in [json!("Ohtani"), json!(""), Value::Null] {
            let err = split_name_pos_team(&value).unwrap_err();
            assert!(matches!(err, ScrapeError::Schema { .. }), "{value:?}");
        }
        let err = repair_player(record(json!({"Name": "Aaron Judge"}))).unwrap_err();
        assert!(matches!(err, ScrapeError::Schema { field, .. } if field == "Player"));
    }
}
