//! Material id extraction.
//!
//! Validates the raw input and selection, scans the inventory for the animals
//! a reward needs, and builds the result in the reward's declared order.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ExtractionError, Shortfall};
use crate::json;
use crate::registry::{Registry, Requirement, RewardConfig, CAMPAIGN_ID};

/// What the user picked on the form. Blank values count as not selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub reward_key: Option<String>,
    pub animal: Option<String>,
}

impl Selection {
    pub fn new(reward_key: Option<&str>, animal: Option<&str>) -> Self {
        Self {
            reward_key: reward_key.map(str::to_string),
            animal: animal.map(str::to_string),
        }
    }

    pub fn reward_key(&self) -> Option<&str> {
        non_blank(self.reward_key.as_deref())
    }

    pub fn animal(&self) -> Option<&str> {
        non_blank(self.animal.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub reward_type: String,
    pub material_ids: Vec<String>,
    pub campaign_id: String,
}

impl ExtractionResult {
    /// Two-space indented JSON, fields in declaration order.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Run the whole pipeline: validation, parsing, scanning, completeness check.
pub fn extract(
    registry: &Registry,
    input: &str,
    selection: &Selection,
) -> Result<ExtractionResult, ExtractionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExtractionError::MissingInput);
    }

    let key = selection.reward_key().ok_or(ExtractionError::MissingRewardType)?;
    let config = registry
        .get(key)
        .ok_or_else(|| ExtractionError::UnknownRewardType(key.to_string()))?;

    let scan = match config.requirement {
        Requirement::Fixed(animals) => Scan::Fixed(animals),
        Requirement::ChooseAnimal { count } => {
            let animal = selection
                .animal()
                .ok_or_else(|| ExtractionError::MissingAnimal(config.key.to_string()))?;
            Scan::Triple { animal, count }
        }
    };

    let items = json::parse_items(input)?;
    debug!("{}: scanning {} items", config.key, items.len());

    let material_ids = match scan {
        Scan::Triple { animal, count } => scan_triple(&items, animal, count)?,
        Scan::Fixed(animals) => scan_fixed(&items, animals)?,
    };

    debug!("{}: matched {:?}", config.key, material_ids);
    Ok(build_result(config, material_ids))
}

/// Required set resolved from the reward config and the selection.
enum Scan<'a> {
    Triple { animal: &'a str, count: usize },
    Fixed(&'static [&'static str]),
}

fn build_result(config: &RewardConfig, material_ids: Vec<String>) -> ExtractionResult {
    ExtractionResult {
        reward_type: config.reward_type.to_string(),
        material_ids,
        campaign_id: CAMPAIGN_ID.to_string(),
    }
}

/// Collect the first `count` items keyed `animal`, in scan order. Every
/// matching item contributes once even if ids repeat.
fn scan_triple(
    items: &[Value],
    animal: &str,
    count: usize,
) -> Result<Vec<String>, ExtractionError> {
    let ids: Vec<String> = json::usable_items(items)
        .filter(|item| item.item_key == animal)
        .take(count)
        .map(|item| item.id.to_string())
        .collect();

    if ids.len() < count {
        return Err(ExtractionError::IncompleteMatch(Shortfall::Triple {
            found: ids.len(),
            required: count,
            animal: animal.to_string(),
        }));
    }
    Ok(ids)
}

/// Record the first id seen for each required animal, then emit them in the
/// declared order.
fn scan_fixed(items: &[Value], animals: &[&str]) -> Result<Vec<String>, ExtractionError> {
    let mut found: HashMap<&str, &str> = HashMap::with_capacity(animals.len());

    for item in json::usable_items(items) {
        if animals.contains(&item.item_key) && !found.contains_key(item.item_key) {
            found.insert(item.item_key, item.id);
            if found.len() == animals.len() {
                break;
            }
        }
    }

    let ids: Vec<String> = animals
        .iter()
        .filter_map(|animal| found.get(animal).map(|id| id.to_string()))
        .collect();

    if ids.len() < animals.len() {
        let missing = animals
            .iter()
            .filter(|animal| !found.contains_key(*animal))
            .map(|animal| animal.to_string())
            .collect();
        return Err(ExtractionError::IncompleteMatch(Shortfall::Missing(missing)));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        input: &str,
        key: &str,
        animal: Option<&str>,
    ) -> Result<ExtractionResult, ExtractionError> {
        extract(Registry::builtin(), input, &Selection::new(Some(key), animal))
    }

    #[test]
    fn test_fixed_set_follows_declared_order() {
        let input = r#"{"items": [
            {"itemKey": "DRAGON", "id": "C"},
            {"itemKey": "MONKEY", "id": "A"},
            {"itemKey": "MOUSE", "id": "B"}
        ]}"#;
        let result = run(input, "UPOINT_200K", None).unwrap();
        assert_eq!(result.material_ids, vec!["A", "B", "C"]);
        assert_eq!(result.reward_type, "UPOINT_200K");
        assert_eq!(result.campaign_id, "TCB_ZODIAC");
    }

    #[test]
    fn test_fixed_set_first_occurrence_wins() {
        let input = r#"{"items": [
            {"itemKey": "OX", "id": "ox-1"},
            {"itemKey": "OX", "id": "ox-2"},
            {"itemKey": "MOUSE", "id": "mouse-1"}
        ]}"#;
        let result = run(input, "UPOINT_100K_1", None).unwrap();
        assert_eq!(result.material_ids, vec!["mouse-1", "ox-1"]);
        assert_eq!(result.reward_type, "UPOINT_100K");
    }

    #[test]
    fn test_fixed_set_names_missing_animal() {
        let input = r#"{"items": [{"itemKey": "DRAGON", "id": "d"}]}"#;
        let err = run(input, "UPOINT_100K_3", None).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::IncompleteMatch(Shortfall::Missing(vec!["ROOSTER".to_string()]))
        );
    }

    #[test]
    fn test_triple_takes_first_three_in_scan_order() {
        let input = r#"{"items": [
            {"itemKey": "TIGER", "id": "t1"},
            {"itemKey": "TIGER", "id": "t2"},
            {"itemKey": "OX", "id": "o1"},
            {"itemKey": "TIGER", "id": "t2"},
            {"itemKey": "TIGER", "id": "t4"}
        ]}"#;
        let result = run(input, "UPOINT_68686", Some("TIGER")).unwrap();
        assert_eq!(result.material_ids, vec!["t1", "t2", "t2"]);
        assert_eq!(result.reward_type, "UPOINT_68686");
    }

    #[test]
    fn test_triple_reports_found_count() {
        let input = r#"{"items": [{"itemKey": "PIG", "id": "p1"}, {"itemKey": "PIG"}]}"#;
        let err = run(input, "UPOINT_68686", Some("PIG")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find all required items. Only found 1 out of 3 PIG items"
        );
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(run("  ", "", None), Err(ExtractionError::MissingInput));
        assert_eq!(run("{", " ", None), Err(ExtractionError::MissingRewardType));
        assert_eq!(
            run("{", "UPOINT_68686", Some("")),
            Err(ExtractionError::MissingAnimal("UPOINT_68686".to_string()))
        );
        assert_eq!(
            run("{", "UPOINT_5", None),
            Err(ExtractionError::UnknownRewardType("UPOINT_5".to_string()))
        );
        assert!(matches!(
            run("{", "UPOINT_200K", None),
            Err(ExtractionError::MalformedJson(_))
        ));
        assert_eq!(run("{}", "UPOINT_200K", None), Err(ExtractionError::InvalidShape));
    }

    #[test]
    fn test_animal_ignored_for_fixed_rewards() {
        let input = r#"{"items": [{"itemKey": "SNAKE", "id": "s"}, {"itemKey": "MONKEY", "id": "m"}]}"#;
        let result = run(input, "UPOINT_100K_2", Some("OX")).unwrap();
        assert_eq!(result.material_ids, vec!["s", "m"]);
    }

    #[test]
    fn test_pretty_json_layout() {
        let input = r#"{"items": [
            {"itemKey": "MONKEY", "id": "A"},
            {"itemKey": "MOUSE", "id": "B"},
            {"itemKey": "DRAGON", "id": "C"}
        ]}"#;
        let text = run(input, "UPOINT_200K", None).unwrap().to_pretty_json().unwrap();
        let expected = "{\n  \"rewardType\": \"UPOINT_200K\",\n  \"materialIds\": [\n    \"A\",\n    \"B\",\n    \"C\"\n  ],\n  \"campaignId\": \"TCB_ZODIAC\"\n}";
        assert_eq!(text, expected);
    }
}
