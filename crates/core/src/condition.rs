//! Condition engine: recursive parser/serializer for the condition union.
//!
//! General variants are leaves with their own required-field gates; the
//! logical variants (`And`/`Or`/`Not`) recurse over sub-conditions and
//! collapse to "no condition" when no child survives parsing. Unknown
//! discriminators yield `None`, never an error.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::raw::RawNode;
use crate::validate::{
    format_bool, format_f64, non_empty, parse_bool, parse_f64_in, parse_u32_in, snake_case,
    word_list,
};

/// A boolean-valued predicate node. Immutable value tree: no identity, no
/// back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Condition {
    #[serde(rename_all = "camelCase")]
    AnyTasksActive {
        task_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        min_instances: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    AnyWorkAreasActive { work_area_id: String },
    #[serde(rename_all = "camelCase")]
    EntityCountComparison {
        #[serde(skip_serializing_if = "Option::is_none")]
        counter: Option<CounterType>,
        entity_type: EntityType,
        value: u32,
        comparison: Comparison,
    },
    #[serde(rename_all = "camelCase")]
    EntityCountReached {
        #[serde(skip_serializing_if = "Option::is_none")]
        counter: Option<CounterType>,
        entity_type: EntityType,
        value: u32,
    },
    #[serde(rename_all = "camelCase")]
    EntityNearMarker {
        entity_type: EntityType,
        marker: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        distance: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    EraUnlocked { era: Era },
    #[serde(rename_all = "camelCase")]
    InitTimeExpired { value: f64 },
    #[serde(rename_all = "camelCase")]
    IsAlive { name: String },
    IsGameInteractionPending,
    #[serde(rename_all = "camelCase")]
    NewGame {
        #[serde(skip_serializing_if = "Option::is_none")]
        started_from_menu: Option<bool>,
    },
    #[serde(rename_all = "camelCase")]
    ScenarioCompleted {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<ScenarioStatus>,
    },
    #[serde(rename_all = "camelCase")]
    TechUnlocked { techs: Vec<TechType> },
    #[serde(rename_all = "camelCase")]
    TimeElapsed { timer: TimerType, value: f64 },
    #[serde(rename_all = "camelCase")]
    ValueEquals { id: String, value: String },
    #[serde(rename_all = "camelCase")]
    ValueReached { id: String, value: u32 },
    #[serde(rename_all = "camelCase")]
    And { sub_conditions: Vec<Condition> },
    #[serde(rename_all = "camelCase")]
    Or { sub_conditions: Vec<Condition> },
    #[serde(rename_all = "camelCase")]
    Not { sub_conditions: Vec<Condition> },
}

impl Condition {
    /// Dispatch on the `type` discriminator. Unknown kinds are `None`.
    pub fn parse(node: &RawNode) -> Option<Condition> {
        match node.attr("type")? {
            "AnyTasksActive" => parse_any_tasks_active(node),
            "AnyWorkAreasActive" => parse_any_work_areas_active(node),
            "EntityCountComparison" => parse_entity_count_comparison(node),
            "EntityCountReached" => parse_entity_count_reached(node),
            "EntityNearMarker" => parse_entity_near_marker(node),
            "EraUnlocked" => parse_era_unlocked(node),
            "InitTimeExpired" => parse_init_time_expired(node),
            "IsAlive" => parse_is_alive(node),
            "IsGameInteractionPending" => Some(Condition::IsGameInteractionPending),
            "NewGame" => parse_new_game(node),
            "ScenarioCompleted" => parse_scenario_completed(node),
            "TechUnlocked" => parse_tech_unlocked(node),
            "TimeElapsed" => parse_time_elapsed(node),
            "ValueEquals" => parse_value_equals(node),
            "ValueReached" => parse_value_reached(node),
            "And" => parse_logical(node, |sub_conditions| Condition::And { sub_conditions }),
            "Or" => parse_logical(node, |sub_conditions| Condition::Or { sub_conditions }),
            "Not" => parse_logical(node, |sub_conditions| Condition::Not { sub_conditions }),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Condition::AnyTasksActive { .. } => "AnyTasksActive",
            Condition::AnyWorkAreasActive { .. } => "AnyWorkAreasActive",
            Condition::EntityCountComparison { .. } => "EntityCountComparison",
            Condition::EntityCountReached { .. } => "EntityCountReached",
            Condition::EntityNearMarker { .. } => "EntityNearMarker",
            Condition::EraUnlocked { .. } => "EraUnlocked",
            Condition::InitTimeExpired { .. } => "InitTimeExpired",
            Condition::IsAlive { .. } => "IsAlive",
            Condition::IsGameInteractionPending => "IsGameInteractionPending",
            Condition::NewGame { .. } => "NewGame",
            Condition::ScenarioCompleted { .. } => "ScenarioCompleted",
            Condition::TechUnlocked { .. } => "TechUnlocked",
            Condition::TimeElapsed { .. } => "TimeElapsed",
            Condition::ValueEquals { .. } => "ValueEquals",
            Condition::ValueReached { .. } => "ValueReached",
            Condition::And { .. } => "And",
            Condition::Or { .. } => "Or",
            Condition::Not { .. } => "Not",
        }
    }

    /// Serializer inverse of [`Condition::parse`]. Absent optional fields
    /// are never emitted.
    pub fn to_raw(&self) -> RawNode {
        let node = RawNode::new("condition").with_attr("type", self.kind());
        match self {
            Condition::AnyTasksActive {
                task_type,
                min_instances,
            } => node
                .with_attr("task_type", task_type.clone())
                .with_opt_attr("min_instances", min_instances.map(|v| v.to_string())),
            Condition::AnyWorkAreasActive { work_area_id } => {
                node.with_attr("work_area_id", work_area_id.clone())
            }
            Condition::EntityCountComparison {
                counter,
                entity_type,
                value,
                comparison,
            } => node
                .with_opt_attr("counter", counter.map(|c| c.as_str().to_owned()))
                .with_attr("entity_type", entity_type.as_str())
                .with_attr("value", value.to_string())
                .with_attr("comparison", comparison.as_str()),
            Condition::EntityCountReached {
                counter,
                entity_type,
                value,
            } => node
                .with_opt_attr("counter", counter.map(|c| c.as_str().to_owned()))
                .with_attr("entity_type", entity_type.as_str())
                .with_attr("value", value.to_string()),
            Condition::EntityNearMarker {
                entity_type,
                marker,
                distance,
            } => node
                .with_attr("entity_type", entity_type.as_str())
                .with_attr("marker", marker.clone())
                .with_opt_attr("distance", distance.map(|d| format_f64(d, 1))),
            Condition::EraUnlocked { era } => node.with_attr("era", era.as_str()),
            Condition::InitTimeExpired { value } => node.with_attr("value", format_f64(*value, 1)),
            Condition::IsAlive { name } => node.with_attr("name", name.clone()),
            Condition::IsGameInteractionPending => node,
            Condition::NewGame { started_from_menu } => {
                node.with_opt_attr("started_from_menu", started_from_menu.map(format_bool))
            }
            Condition::ScenarioCompleted { id, status } => node
                .with_attr("id", id.clone())
                .with_opt_attr("status", status.map(|s| s.as_str().to_owned())),
            Condition::TechUnlocked { techs } => emit_techs(node, techs),
            Condition::TimeElapsed { timer, value } => node
                .with_attr("timer", timer.as_str())
                .with_attr("value", format_f64(*value, 1)),
            Condition::ValueEquals { id, value } => node
                .with_attr("id", id.clone())
                .with_attr("value", value.clone()),
            Condition::ValueReached { id, value } => node
                .with_attr("id", id.clone())
                .with_attr("value", value.to_string()),
            Condition::And { sub_conditions }
            | Condition::Or { sub_conditions }
            | Condition::Not { sub_conditions } => {
                let mut wrapper = RawNode::new("sub_conditions");
                for sub in sub_conditions {
                    wrapper.children.push(sub.to_raw());
                }
                node.with_child(wrapper)
            }
        }
    }
}

/// Implicit-AND condition list used by Milestone and Goal. Children that
/// fail to parse are dropped; the list may legitimately end up empty.
pub fn parse_condition_list(node: &RawNode) -> Vec<Condition> {
    node.list("conditions", "condition")
        .into_iter()
        .filter_map(Condition::parse)
        .collect()
}

// ── Per-variant parsers ─────────────────────────────────────────────

/// Logical composite: recursively parse children via the general dispatch,
/// drop failures, and collapse the node entirely when nothing survives.
/// `And` with zero valid sub-conditions is the same as no condition.
fn parse_logical(
    node: &RawNode,
    build: impl FnOnce(Vec<Condition>) -> Condition,
) -> Option<Condition> {
    let subs: Vec<Condition> = node
        .list("sub_conditions", "condition")
        .into_iter()
        .filter_map(Condition::parse)
        .collect();
    if subs.is_empty() {
        return None;
    }
    Some(build(subs))
}

fn parse_any_tasks_active(node: &RawNode) -> Option<Condition> {
    let task_type = snake_case(node.attr("task_type")?)?;
    let min_instances = node
        .attr("min_instances")
        .and_then(|raw| parse_u32_in(raw, 1, 100));
    Some(Condition::AnyTasksActive {
        task_type,
        min_instances,
    })
}

fn parse_any_work_areas_active(node: &RawNode) -> Option<Condition> {
    let work_area_id = snake_case(node.attr("work_area_id")?)?;
    Some(Condition::AnyWorkAreasActive { work_area_id })
}

fn parse_entity_count_comparison(node: &RawNode) -> Option<Condition> {
    let entity_type = EntityType::parse(node.attr("entity_type")?)?;
    let value = parse_u32_in(node.attr("value")?, 0, 10_000)?;
    let comparison = Comparison::parse(node.attr("comparison")?)?;
    let counter = node.attr("counter").and_then(CounterType::parse);
    Some(Condition::EntityCountComparison {
        counter,
        entity_type,
        value,
        comparison,
    })
}

fn parse_entity_count_reached(node: &RawNode) -> Option<Condition> {
    let entity_type = EntityType::parse(node.attr("entity_type")?)?;
    let value = parse_u32_in(node.attr("value")?, 0, 10_000)?;
    let counter = node.attr("counter").and_then(CounterType::parse);
    Some(Condition::EntityCountReached {
        counter,
        entity_type,
        value,
    })
}

fn parse_entity_near_marker(node: &RawNode) -> Option<Condition> {
    let entity_type = EntityType::parse(node.attr("entity_type")?)?;
    let marker = snake_case(node.attr("marker")?)?;
    let distance = node
        .attr("distance")
        .and_then(|raw| parse_f64_in(raw, 0.0, 1000.0, 1));
    Some(Condition::EntityNearMarker {
        entity_type,
        marker,
        distance,
    })
}

fn parse_era_unlocked(node: &RawNode) -> Option<Condition> {
    let era = Era::parse(node.attr("era")?)?;
    Some(Condition::EraUnlocked { era })
}

fn parse_init_time_expired(node: &RawNode) -> Option<Condition> {
    let value = parse_f64_in(node.attr("value")?, 0.0, 1000.0, 1)?;
    Some(Condition::InitTimeExpired { value })
}

fn parse_is_alive(node: &RawNode) -> Option<Condition> {
    let name = snake_case(node.attr("name")?)?;
    Some(Condition::IsAlive { name })
}

fn parse_new_game(node: &RawNode) -> Option<Condition> {
    let started_from_menu = node.attr("started_from_menu").and_then(parse_bool);
    Some(Condition::NewGame { started_from_menu })
}

fn parse_scenario_completed(node: &RawNode) -> Option<Condition> {
    let id = snake_case(node.attr("id")?)?;
    let status = node.attr("status").and_then(ScenarioStatus::parse);
    Some(Condition::ScenarioCompleted { id, status })
}

/// Accepts either a single `tech` or a space-delimited `techs` list. When
/// both are present the single-value form takes precedence.
fn parse_tech_unlocked(node: &RawNode) -> Option<Condition> {
    let techs = match node.attr("tech") {
        Some(raw) => TechType::parse(raw).map(|t| vec![t])?,
        None => word_list(node.attr("techs")?, TechType::parse),
    };
    if techs.is_empty() {
        return None;
    }
    Some(Condition::TechUnlocked { techs })
}

fn parse_time_elapsed(node: &RawNode) -> Option<Condition> {
    let timer = TimerType::parse(node.attr("timer")?)?;
    let value = parse_f64_in(node.attr("value")?, 0.0, 10_000.0, 1)?;
    Some(Condition::TimeElapsed { timer, value })
}

fn parse_value_equals(node: &RawNode) -> Option<Condition> {
    let id = snake_case(node.attr("id")?)?;
    let value = non_empty(node.attr("value")?)?.to_owned();
    Some(Condition::ValueEquals { id, value })
}

fn parse_value_reached(node: &RawNode) -> Option<Condition> {
    let id = snake_case(node.attr("id")?)?;
    let value = parse_u32_in(node.attr("value")?, 0, 1_000_000)?;
    Some(Condition::ValueReached { id, value })
}

/// One-element tech lists re-emit the single-value form.
fn emit_techs(node: RawNode, techs: &[TechType]) -> RawNode {
    if let [single] = techs {
        return node.with_attr("tech", single.as_str());
    }
    let joined = techs
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    node.with_attr("techs", joined)
}
