//! Scenario aggregator: runs the fixed ordered list of per-field
//! extraction modules against one raw tree and assembles the normalized
//! root aggregate field by field.
//!
//! Each module owns a disjoint set of output keys ([`MODULE_KEYS`]); the
//! test suite asserts the disjointness so no module can silently shadow
//! another. Field- and entity-level failures follow the drop policy; only
//! the two structural failures in [`ScenarioError`] abort a parse.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::condition::{parse_condition_list, Condition};
use crate::enums::{Category, DisasterType, Environment, Season, TechType};
use crate::error::ScenarioError;
use crate::event::{parse_event, Event};
use crate::raw::RawNode;
use crate::validate::{
    format_bool, format_coord, format_f64, non_empty, parse_bool, parse_coord, parse_f64_in,
    parse_u32_in, snake_case, Coord,
};

/// Minimum and maximum cardinality of the disaster collection. Fewer valid
/// entries omits the collection; excess valid entries are dropped in
/// document order.
pub const MIN_DISASTERS: usize = 1;
pub const MAX_DISASTERS: usize = 4;

/// A starting map slot. All four required fields must independently
/// validate or the whole Location is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    /// Nine-digit zero-padded map seed.
    pub seed: u32,
    pub environment: Environment,
    pub map_location: Coord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub river: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lakes: Option<u32>,
}

/// Identifier plus an implicitly-conjunctive condition list. The list may
/// be empty; only a bad identifier discards the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disaster {
    pub disaster_type: DisasterType,
    pub period: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartingConditions {
    pub season_id: Season,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_setup: Option<String>,
}

/// The normalized root aggregate. Absent settings stay absent here; the
/// two legacy missing-value policies live in [`Scenario::to_sparse_value`]
/// and [`Scenario::to_form_value`] at the UI boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardcore_mode_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomad_mode_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_completion_icon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_scenario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_milestones: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub starting_techs: Vec<TechType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_conditions: Option<StartingConditions>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub loading_screens: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub custom_settlement_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub disasters: Vec<Disaster>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub locations: Vec<Location>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub milestones: Vec<Milestone>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub goals: Vec<Goal>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub events: Vec<Event>,
}

/// The fixed module order and the normalized keys each module owns.
/// Modules are independent; their key sets must stay pairwise disjoint.
pub const MODULE_KEYS: &[(&str, &[&str])] = &[
    ("size", &["size"]),
    ("category", &["category"]),
    ("group_id", &["groupId"]),
    ("hardcore_mode_allowed", &["hardcoreModeAllowed"]),
    ("nomad_mode_allowed", &["nomadModeAllowed"]),
    ("show_completion_icon", &["showCompletionIcon"]),
    ("required_scenario", &["requiredScenario"]),
    ("required_milestones", &["requiredMilestones"]),
    ("starting_techs", &["startingTechs"]),
    ("starting_conditions", &["startingConditions"]),
    ("loading_screens", &["loadingScreens"]),
    ("custom_settlement_names", &["customSettlementNames"]),
    ("disasters", &["disasters"]),
    ("locations", &["locations"]),
    ("milestones", &["milestones"]),
    ("goals", &["goals"]),
    ("events", &["events"]),
];

/// Parse a raw document root into the normalized aggregate.
///
/// Structural failures only: a non-`scenario` root and an entirely empty
/// result abort; everything else degrades per the drop policy.
pub fn parse_scenario(root: &RawNode) -> Result<Scenario, ScenarioError> {
    if root.name != "scenario" {
        return Err(ScenarioError::MissingRoot {
            found: root.name.clone(),
        });
    }

    let scenario = Scenario {
        size: extract_size(root),
        category: extract_category(root),
        group_id: extract_group_id(root),
        hardcore_mode_allowed: extract_flag(root, "hardcore_mode_allowed"),
        nomad_mode_allowed: extract_flag(root, "nomad_mode_allowed"),
        show_completion_icon: extract_flag(root, "show_completion_icon"),
        required_scenario: extract_required_scenario(root),
        required_milestones: extract_required_milestones(root),
        starting_techs: extract_starting_techs(root),
        starting_conditions: extract_starting_conditions(root),
        loading_screens: extract_id_list(root, "loading_screens"),
        custom_settlement_names: extract_id_list(root, "custom_settlement_names"),
        disasters: extract_disasters(root),
        locations: extract_locations(root),
        milestones: extract_milestones(root),
        goals: extract_goals(root),
        events: extract_events(root),
    };

    if scenario == Scenario::default() {
        return Err(ScenarioError::NoScenarioData);
    }
    Ok(scenario)
}

// ── Per-field extraction modules ────────────────────────────────────

fn extract_size(root: &RawNode) -> Option<u32> {
    root.scalar("size").and_then(|raw| parse_u32_in(raw, 1, 8))
}

fn extract_category(root: &RawNode) -> Option<Category> {
    root.scalar("category").and_then(Category::parse)
}

fn extract_group_id(root: &RawNode) -> Option<String> {
    root.scalar("group_id").and_then(snake_case)
}

fn extract_flag(root: &RawNode, name: &str) -> Option<bool> {
    root.scalar(name).and_then(parse_bool)
}

fn extract_required_scenario(root: &RawNode) -> Option<String> {
    root.scalar("required_scenario").and_then(snake_case)
}

fn extract_required_milestones(root: &RawNode) -> Option<u32> {
    root.scalar("required_milestones")
        .and_then(|raw| parse_u32_in(raw, 0, 10))
}

fn extract_starting_techs(root: &RawNode) -> Vec<TechType> {
    root.child("starting_techs")
        .and_then(|n| n.attr("values"))
        .map(|raw| crate::validate::word_list(raw, TechType::parse))
        .unwrap_or_default()
}

fn extract_starting_conditions(root: &RawNode) -> Option<StartingConditions> {
    let node = root.child("starting_conditions")?;
    let season_id = Season::parse(node.attr("season_id")?)?;
    let visual_setup = node.attr("visual_setup").and_then(snake_case);
    Some(StartingConditions {
        season_id,
        visual_setup,
    })
}

/// Free-identifier list attribute: split, normalize, dedup.
fn extract_id_list(root: &RawNode, name: &str) -> Vec<String> {
    let raw = match root.child(name).and_then(|n| n.attr("values")) {
        Some(raw) => raw,
        None => return Vec::new(),
    };
    let mut out: Vec<String> = Vec::new();
    for word in raw.split_whitespace() {
        if let Some(id) = snake_case(word) {
            if !out.contains(&id) {
                out.push(id);
            }
        }
    }
    out
}

fn extract_disasters(root: &RawNode) -> Vec<Disaster> {
    let mut out: Vec<Disaster> = root
        .list("disasters", "disaster")
        .into_iter()
        .filter_map(parse_disaster)
        .collect();
    if out.len() < MIN_DISASTERS {
        return Vec::new();
    }
    out.truncate(MAX_DISASTERS);
    out
}

fn parse_disaster(node: &RawNode) -> Option<Disaster> {
    let disaster_type = DisasterType::parse(node.attr("disaster_type")?)?;
    let period = parse_f64_in(node.attr("period")?, 0.0, 100.0, 1)?;
    let variance = parse_f64_in(node.attr("variance")?, 0.0, 100.0, 1)?;
    Some(Disaster {
        disaster_type,
        period,
        variance,
    })
}

fn extract_locations(root: &RawNode) -> Vec<Location> {
    root.list("locations", "location")
        .into_iter()
        .filter_map(parse_location)
        .collect()
}

/// All four required fields must independently validate or the whole
/// Location is discarded.
fn parse_location(node: &RawNode) -> Option<Location> {
    let id = snake_case(node.attr("id")?)?;
    let seed = parse_seed(node.attr("seed")?)?;
    let environment = Environment::parse(node.attr("environment")?)?;
    let map_location = parse_coord(node.attr("map_location")?)?;

    let scale = node
        .attr("scale")
        .and_then(|raw| parse_f64_in(raw, 0.0, 10.0, 2));
    let river = node.attr("river").and_then(parse_bool);
    let lakes = node.attr("lakes").and_then(|raw| parse_u32_in(raw, 0, 10));

    Some(Location {
        id,
        seed,
        environment,
        map_location,
        scale,
        river,
        lakes,
    })
}

/// Numeric seed with at most nine digits; re-emitted zero-padded.
fn parse_seed(raw: &str) -> Option<u32> {
    let trimmed = non_empty(raw)?;
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: u32 = trimmed.parse().ok()?;
    (value <= 999_999_999).then_some(value)
}

fn extract_milestones(root: &RawNode) -> Vec<Milestone> {
    root.list("milestones", "milestone")
        .into_iter()
        .filter_map(|node| {
            let id = snake_case(node.attr("id")?)?;
            Some(Milestone {
                id,
                conditions: parse_condition_list(node),
            })
        })
        .collect()
}

fn extract_goals(root: &RawNode) -> Vec<Goal> {
    root.list("goals", "goal")
        .into_iter()
        .filter_map(|node| {
            let id = snake_case(node.attr("id")?)?;
            Some(Goal {
                id,
                conditions: parse_condition_list(node),
            })
        })
        .collect()
}

fn extract_events(root: &RawNode) -> Vec<Event> {
    root.list("events", "event")
        .into_iter()
        .filter_map(parse_event)
        .collect()
}

// ── Serialization ───────────────────────────────────────────────────

impl Scenario {
    /// Serializer inverse of [`parse_scenario`]: scalar settings become
    /// single-element leaves, collections become wrapped containers, and
    /// absent fields are never emitted.
    pub fn to_raw(&self) -> RawNode {
        let mut root = RawNode::new("scenario");

        if let Some(size) = self.size {
            root.children.push(scalar_leaf("size", size.to_string()));
        }
        if let Some(category) = self.category {
            root.children
                .push(scalar_leaf("category", category.as_str().to_owned()));
        }
        if let Some(group_id) = &self.group_id {
            root.children.push(scalar_leaf("group_id", group_id.clone()));
        }
        if let Some(v) = self.hardcore_mode_allowed {
            root.children
                .push(scalar_leaf("hardcore_mode_allowed", format_bool(v)));
        }
        if let Some(v) = self.nomad_mode_allowed {
            root.children
                .push(scalar_leaf("nomad_mode_allowed", format_bool(v)));
        }
        if let Some(v) = self.show_completion_icon {
            root.children
                .push(scalar_leaf("show_completion_icon", format_bool(v)));
        }
        if let Some(required) = &self.required_scenario {
            root.children
                .push(scalar_leaf("required_scenario", required.clone()));
        }
        if let Some(v) = self.required_milestones {
            root.children
                .push(scalar_leaf("required_milestones", v.to_string()));
        }
        if !self.starting_techs.is_empty() {
            let joined = self
                .starting_techs
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            root.children
                .push(RawNode::new("starting_techs").with_attr("values", joined));
        }
        if let Some(sc) = &self.starting_conditions {
            root.children.push(
                RawNode::new("starting_conditions")
                    .with_attr("season_id", sc.season_id.as_str())
                    .with_opt_attr("visual_setup", sc.visual_setup.clone()),
            );
        }
        if !self.loading_screens.is_empty() {
            root.children.push(
                RawNode::new("loading_screens")
                    .with_attr("values", self.loading_screens.join(" ")),
            );
        }
        if !self.custom_settlement_names.is_empty() {
            root.children.push(
                RawNode::new("custom_settlement_names")
                    .with_attr("values", self.custom_settlement_names.join(" ")),
            );
        }
        if !self.disasters.is_empty() {
            let mut wrapper = RawNode::new("disasters");
            for d in &self.disasters {
                wrapper.children.push(
                    RawNode::new("disaster")
                        .with_attr("disaster_type", d.disaster_type.as_str())
                        .with_attr("period", format_f64(d.period, 1))
                        .with_attr("variance", format_f64(d.variance, 1)),
                );
            }
            root.children.push(wrapper);
        }
        if !self.locations.is_empty() {
            let mut wrapper = RawNode::new("locations");
            for loc in &self.locations {
                wrapper.children.push(emit_location(loc));
            }
            root.children.push(wrapper);
        }
        if !self.milestones.is_empty() {
            let mut wrapper = RawNode::new("milestones");
            for m in &self.milestones {
                wrapper
                    .children
                    .push(emit_condition_entity("milestone", &m.id, &m.conditions));
            }
            root.children.push(wrapper);
        }
        if !self.goals.is_empty() {
            let mut wrapper = RawNode::new("goals");
            for g in &self.goals {
                wrapper
                    .children
                    .push(emit_condition_entity("goal", &g.id, &g.conditions));
            }
            root.children.push(wrapper);
        }
        if !self.events.is_empty() {
            let mut wrapper = RawNode::new("events");
            for e in &self.events {
                wrapper.children.push(e.to_raw());
            }
            root.children.push(wrapper);
        }

        root
    }

    /// Drop-the-key missing-value policy: a JSON projection with every
    /// absent field omitted.
    pub fn to_sparse_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Fill-with-defaults missing-value policy: the projection the form
    /// editor binds to, with every scalar present.
    pub fn to_form_value(&self) -> Value {
        let mut m = Map::new();
        m.insert("size".to_owned(), self.size.unwrap_or(1).into());
        m.insert(
            "category".to_owned(),
            self.category.unwrap_or(Category::Freeplay).as_str().into(),
        );
        m.insert(
            "groupId".to_owned(),
            self.group_id.clone().unwrap_or_default().into(),
        );
        m.insert(
            "hardcoreModeAllowed".to_owned(),
            self.hardcore_mode_allowed.unwrap_or(false).into(),
        );
        m.insert(
            "nomadModeAllowed".to_owned(),
            self.nomad_mode_allowed.unwrap_or(false).into(),
        );
        m.insert(
            "showCompletionIcon".to_owned(),
            self.show_completion_icon.unwrap_or(false).into(),
        );
        m.insert(
            "requiredScenario".to_owned(),
            self.required_scenario.clone().unwrap_or_default().into(),
        );
        m.insert(
            "requiredMilestones".to_owned(),
            self.required_milestones.unwrap_or(0).into(),
        );
        m.insert(
            "startingTechs".to_owned(),
            json_or_empty_list(&self.starting_techs),
        );
        m.insert(
            "startingConditions".to_owned(),
            self.starting_conditions
                .as_ref()
                .and_then(|sc| serde_json::to_value(sc).ok())
                .unwrap_or_else(|| serde_json::json!({ "seasonId": "spring" })),
        );
        m.insert(
            "loadingScreens".to_owned(),
            json_or_empty_list(&self.loading_screens),
        );
        m.insert(
            "customSettlementNames".to_owned(),
            json_or_empty_list(&self.custom_settlement_names),
        );
        m.insert("disasters".to_owned(), json_or_empty_list(&self.disasters));
        m.insert("locations".to_owned(), json_or_empty_list(&self.locations));
        m.insert("milestones".to_owned(), json_or_empty_list(&self.milestones));
        m.insert("goals".to_owned(), json_or_empty_list(&self.goals));
        m.insert("events".to_owned(), json_or_empty_list(&self.events));
        Value::Object(m)
    }
}

fn json_or_empty_list<T: Serialize>(items: &[T]) -> Value {
    serde_json::to_value(items).unwrap_or_else(|_| Value::Array(Vec::new()))
}

fn scalar_leaf(name: &str, value: String) -> RawNode {
    RawNode::new(name).with_attr("value", value)
}

fn emit_location(loc: &Location) -> RawNode {
    RawNode::new("location")
        .with_attr("id", loc.id.clone())
        .with_attr("seed", format!("{:09}", loc.seed))
        .with_attr("environment", loc.environment.as_str())
        .with_attr("map_location", format_coord(loc.map_location))
        .with_opt_attr("scale", loc.scale.map(|v| format_f64(v, 2)))
        .with_opt_attr("river", loc.river.map(format_bool))
        .with_opt_attr("lakes", loc.lakes.map(|v| v.to_string()))
}

fn emit_condition_entity(name: &str, id: &str, conditions: &[Condition]) -> RawNode {
    let node = RawNode::new(name).with_attr("id", id);
    if conditions.is_empty() {
        return node;
    }
    let mut wrapper = RawNode::new("conditions");
    for c in conditions {
        wrapper.children.push(c.to_raw());
    }
    node.with_child(wrapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn scenario_with(child: RawNode) -> RawNode {
        RawNode::new("scenario").with_child(child)
    }

    #[test]
    fn non_scenario_root_is_a_structural_error() {
        let err = parse_scenario(&RawNode::new("settings")).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::MissingRoot {
                found: "settings".to_owned()
            }
        );
    }

    #[test]
    fn entirely_empty_result_is_a_structural_error() {
        let bare = RawNode::new("scenario");
        assert_eq!(parse_scenario(&bare), Err(ScenarioError::NoScenarioData));

        let all_invalid = scenario_with(RawNode::new("size").with_attr("value", "99"));
        assert_eq!(
            parse_scenario(&all_invalid),
            Err(ScenarioError::NoScenarioData)
        );
    }

    #[test]
    fn scalar_modules_validate_independently() {
        let root = RawNode::new("scenario")
            .with_child(RawNode::new("size").with_attr("value", "3"))
            .with_child(RawNode::new("category").with_attr("value", "bogus"))
            .with_child(RawNode::new("hardcore_mode_allowed").with_attr("value", "true"))
            .with_child(RawNode::new("required_milestones").with_attr("value", "99"));
        let s = parse_scenario(&root).unwrap();
        assert_eq!(s.size, Some(3));
        assert_eq!(s.category, None);
        assert_eq!(s.hardcore_mode_allowed, Some(true));
        assert_eq!(s.required_milestones, None);
    }

    #[test]
    fn location_requires_all_four_required_fields() {
        let good = RawNode::new("location")
            .with_attr("id", "River Camp")
            .with_attr("seed", "000123456")
            .with_attr("environment", "eurasia")
            .with_attr("map_location", "0.35 0.62")
            .with_attr("lakes", "2");
        let bad_seed = good.clone().with_attr("seed", "12ab");
        let root = RawNode::new("scenario")
            .with_child(RawNode::new("locations").with_child(good).with_child(bad_seed));

        let s = parse_scenario(&root).unwrap();
        assert_eq!(s.locations.len(), 1);
        let loc = &s.locations[0];
        assert_eq!(loc.id, "river_camp");
        assert_eq!(loc.seed, 123_456);
        assert_eq!(loc.lakes, Some(2));
        assert_eq!(loc.scale, None);
    }

    #[test]
    fn milestone_with_zero_valid_conditions_is_kept() {
        let milestone = RawNode::new("milestone")
            .with_attr("id", "first_winter")
            .with_child(RawNode::new("condition").with_attr("type", "Bogus"));
        let unnamed = RawNode::new("milestone");
        let root = scenario_with(
            RawNode::new("milestones")
                .with_child(milestone)
                .with_child(unnamed),
        );
        let s = parse_scenario(&root).unwrap();
        assert_eq!(s.milestones.len(), 1);
        assert_eq!(s.milestones[0].id, "first_winter");
        assert!(s.milestones[0].conditions.is_empty());
    }

    #[test]
    fn disaster_collection_enforces_cardinality() {
        let disaster = |ty: &str| {
            RawNode::new("disaster")
                .with_attr("disaster_type", ty)
                .with_attr("period", "3.5")
                .with_attr("variance", "1.5")
        };

        // below minimum: only invalid entries, collection omitted
        let root = scenario_with(RawNode::new("disasters").with_child(disaster("earthquake")))
            .with_child(RawNode::new("size").with_attr("value", "3"));
        let s = parse_scenario(&root).unwrap();
        assert!(s.disasters.is_empty());

        // above maximum: truncated in document order
        let mut wrapper = RawNode::new("disasters");
        for _ in 0..6 {
            wrapper.children.push(disaster("storm"));
        }
        let s = parse_scenario(&scenario_with(wrapper)).unwrap();
        assert_eq!(s.disasters.len(), MAX_DISASTERS);
    }

    #[test]
    fn module_keys_are_pairwise_disjoint_and_cover_the_output() {
        let mut seen: HashSet<&str> = HashSet::new();
        for (module, keys) in MODULE_KEYS {
            for key in *keys {
                assert!(
                    seen.insert(key),
                    "key '{}' owned by more than one module (second: '{}')",
                    key,
                    module
                );
            }
        }

        // every key the form projection emits is owned by exactly one module
        let form = Scenario::default().to_form_value();
        for key in form.as_object().unwrap().keys() {
            assert!(
                seen.contains(key.as_str()),
                "projection key '{}' not owned by any module",
                key
            );
        }
    }

    #[test]
    fn sparse_and_form_projections_express_the_two_policies() {
        let s = Scenario {
            size: Some(3),
            ..Scenario::default()
        };
        let sparse = s.to_sparse_value();
        let sparse_keys: Vec<&String> = sparse.as_object().unwrap().keys().collect();
        assert_eq!(sparse_keys.len(), 1);
        assert_eq!(sparse["size"], 3);

        let form = s.to_form_value();
        assert_eq!(form["size"], 3);
        assert_eq!(form["hardcoreModeAllowed"], false);
        assert_eq!(form["groupId"], "");
        assert_eq!(form["events"], serde_json::json!([]));
    }

    #[test]
    fn round_trips_through_serializer() {
        let root = RawNode::new("scenario")
            .with_child(RawNode::new("size").with_attr("value", "3"))
            .with_child(RawNode::new("group_id").with_attr("value", "my_scenarios"))
            .with_child(RawNode::new("starting_conditions").with_attr("season_id", "spring"))
            .with_child(
                RawNode::new("locations").with_child(
                    RawNode::new("location")
                        .with_attr("id", "river_camp")
                        .with_attr("seed", "000123456")
                        .with_attr("environment", "eurasia")
                        .with_attr("map_location", "0.35 0.62")
                        .with_attr("river", "true"),
                ),
            );
        let first = parse_scenario(&root).unwrap();
        let second = parse_scenario(&first.to_raw()).unwrap();
        assert_eq!(first, second);
    }
}
