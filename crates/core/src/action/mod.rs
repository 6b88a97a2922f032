//! Action engine: dispatch-table parser/serializer for the action union.
//!
//! One parse/emit pair per variant, grouped by concern into submodules.
//! Every variant re-validates every field it consumes; a failed required
//! field drops the whole action, a failed optional field is omitted.

mod params;
mod population;
mod raider;
mod spawn;
mod ui;
mod world;

pub use raider::Wave;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::raw::RawNode;
use crate::validate::{format_bool, format_f64, Coord};

/// A single imperative effect triggered when an event's condition holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    ClearGoals,
    ClearLocationMarkers,
    #[serde(rename_all = "camelCase")]
    ClearTrees {
        radius: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<Coord>,
    },
    ClearUiMarkers,
    #[serde(rename_all = "camelCase")]
    FocusCamera {
        location: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        distance: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        rotation: Option<f64>,
    },
    HideUi,
    #[serde(rename_all = "camelCase")]
    ModifyLocation {
        modification: LocationModification,
        position: Coord,
    },
    #[serde(rename_all = "camelCase")]
    QuitGame {
        #[serde(skip_serializing_if = "Option::is_none")]
        success: Option<bool>,
    },
    #[serde(rename_all = "camelCase")]
    SetAnimalPopulation {
        animal_types: Vec<AnimalType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        era_factors: Vec<f64>,
    },
    #[serde(rename_all = "camelCase")]
    SetBirthParameters {
        #[serde(skip_serializing_if = "Option::is_none")]
        decrease_start_population: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        decrease_halfing_population: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    SetDiseaseParameters {
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        variance: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        individual_disease_chance: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    SetFeatureEnabled { feature: Feature, value: bool },
    #[serde(rename_all = "camelCase")]
    SetGameplayFlags { flags: Vec<GameplayFlag> },
    #[serde(rename_all = "camelCase")]
    SetGoal { id: String },
    #[serde(rename_all = "camelCase")]
    SetGoalsHint { value: String },
    #[serde(rename_all = "camelCase")]
    SetKnowledgeParameters { tech_cost_multiplier: f64 },
    #[serde(rename_all = "camelCase")]
    SetLocationMarker {
        marker_type: MarkerType,
        position: Coord,
        #[serde(skip_serializing_if = "Option::is_none")]
        entity_type: Option<EntityType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        required_goal: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        excluded_goal: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scale: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    SetMigrationParameters {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        decrease_start_population: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        decrease_halfing_population: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    SetRaider {
        entity_types: Vec<EntityType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        era: Option<Era>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        variance: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        grace_period: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        extra_raider_per_population: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        override_attack_target: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        waves: Vec<Wave>,
    },
    #[serde(rename_all = "camelCase")]
    SetTimeOfYear { value: f64 },
    #[serde(rename_all = "camelCase")]
    SetTimeScale { index: u32 },
    #[serde(rename_all = "camelCase")]
    SetTraderPeriod { value: f64 },
    #[serde(rename_all = "camelCase")]
    SetUiLocked { value: bool },
    #[serde(rename_all = "camelCase")]
    SetUiMarker {
        marker_type: MarkerType,
        entity_type: EntityType,
        #[serde(skip_serializing_if = "Option::is_none")]
        required_goal: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        excluded_goal: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_number: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    SetWeather { value: WeatherType },
    #[serde(rename_all = "camelCase")]
    ShowMessage { title: String, text: String },
    #[serde(rename_all = "camelCase")]
    Spawn {
        entity_type: EntityType,
        amount: u32,
        placement: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        angle: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        years_old: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        gender: Option<Gender>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        behaviour: Option<SpawnBehaviour>,
    },
    #[serde(rename_all = "camelCase")]
    TriggerDisaster { disaster_type: DisasterType },
    #[serde(rename_all = "camelCase")]
    TriggerRaiderAttack {
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Unlock { era: Era, tech_type: TechType },
}

impl Action {
    /// Dispatch on the `type` discriminator. Unknown kinds are `None`.
    pub fn parse(node: &RawNode) -> Option<Action> {
        match node.attr("type")? {
            "ClearGoals" => Some(Action::ClearGoals),
            "ClearLocationMarkers" => Some(Action::ClearLocationMarkers),
            "ClearTrees" => world::parse_clear_trees(node),
            "ClearUiMarkers" => Some(Action::ClearUiMarkers),
            "FocusCamera" => ui::parse_focus_camera(node),
            "HideUi" => Some(Action::HideUi),
            "ModifyLocation" => world::parse_modify_location(node),
            "QuitGame" => ui::parse_quit_game(node),
            "SetAnimalPopulation" => population::parse_set_animal_population(node),
            "SetBirthParameters" => population::parse_set_birth_parameters(node),
            "SetDiseaseParameters" => population::parse_set_disease_parameters(node),
            "SetFeatureEnabled" => params::parse_set_feature_enabled(node),
            "SetGameplayFlags" => params::parse_set_gameplay_flags(node),
            "SetGoal" => ui::parse_set_goal(node),
            "SetGoalsHint" => ui::parse_set_goals_hint(node),
            "SetKnowledgeParameters" => params::parse_set_knowledge_parameters(node),
            "SetLocationMarker" => world::parse_set_location_marker(node),
            "SetMigrationParameters" => population::parse_set_migration_parameters(node),
            "SetRaider" => raider::parse_set_raider(node),
            "SetTimeOfYear" => params::parse_set_time_of_year(node),
            "SetTimeScale" => params::parse_set_time_scale(node),
            "SetTraderPeriod" => params::parse_set_trader_period(node),
            "SetUiLocked" => ui::parse_set_ui_locked(node),
            "SetUiMarker" => ui::parse_set_ui_marker(node),
            "SetWeather" => world::parse_set_weather(node),
            "ShowMessage" => ui::parse_show_message(node),
            "Spawn" => spawn::parse_spawn(node),
            "TriggerDisaster" => world::parse_trigger_disaster(node),
            "TriggerRaiderAttack" => raider::parse_trigger_raider_attack(node),
            "Unlock" => params::parse_unlock(node),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Action::ClearGoals => "ClearGoals",
            Action::ClearLocationMarkers => "ClearLocationMarkers",
            Action::ClearTrees { .. } => "ClearTrees",
            Action::ClearUiMarkers => "ClearUiMarkers",
            Action::FocusCamera { .. } => "FocusCamera",
            Action::HideUi => "HideUi",
            Action::ModifyLocation { .. } => "ModifyLocation",
            Action::QuitGame { .. } => "QuitGame",
            Action::SetAnimalPopulation { .. } => "SetAnimalPopulation",
            Action::SetBirthParameters { .. } => "SetBirthParameters",
            Action::SetDiseaseParameters { .. } => "SetDiseaseParameters",
            Action::SetFeatureEnabled { .. } => "SetFeatureEnabled",
            Action::SetGameplayFlags { .. } => "SetGameplayFlags",
            Action::SetGoal { .. } => "SetGoal",
            Action::SetGoalsHint { .. } => "SetGoalsHint",
            Action::SetKnowledgeParameters { .. } => "SetKnowledgeParameters",
            Action::SetLocationMarker { .. } => "SetLocationMarker",
            Action::SetMigrationParameters { .. } => "SetMigrationParameters",
            Action::SetRaider { .. } => "SetRaider",
            Action::SetTimeOfYear { .. } => "SetTimeOfYear",
            Action::SetTimeScale { .. } => "SetTimeScale",
            Action::SetTraderPeriod { .. } => "SetTraderPeriod",
            Action::SetUiLocked { .. } => "SetUiLocked",
            Action::SetUiMarker { .. } => "SetUiMarker",
            Action::SetWeather { .. } => "SetWeather",
            Action::ShowMessage { .. } => "ShowMessage",
            Action::Spawn { .. } => "Spawn",
            Action::TriggerDisaster { .. } => "TriggerDisaster",
            Action::TriggerRaiderAttack { .. } => "TriggerRaiderAttack",
            Action::Unlock { .. } => "Unlock",
        }
    }

    /// Serializer inverse of [`Action::parse`]. Absent optional fields are
    /// never emitted.
    pub fn to_raw(&self) -> RawNode {
        let node = RawNode::new("action").with_attr("type", self.kind());
        match self {
            Action::ClearGoals
            | Action::ClearLocationMarkers
            | Action::ClearUiMarkers
            | Action::HideUi => node,
            Action::ClearTrees { radius, position } => {
                world::emit_clear_trees(node, *radius, *position)
            }
            Action::ModifyLocation {
                modification,
                position,
            } => world::emit_modify_location(node, *modification, *position),
            Action::SetLocationMarker {
                marker_type,
                position,
                entity_type,
                required_goal,
                excluded_goal,
                scale,
            } => world::emit_set_location_marker(
                node,
                *marker_type,
                *position,
                *entity_type,
                required_goal.as_deref(),
                excluded_goal.as_deref(),
                *scale,
            ),
            Action::SetWeather { value } => node.with_attr("value", value.as_str()),
            Action::TriggerDisaster { disaster_type } => {
                node.with_attr("disaster_type", disaster_type.as_str())
            }
            Action::FocusCamera {
                location,
                distance,
                rotation,
            } => ui::emit_focus_camera(node, location, *distance, *rotation),
            Action::QuitGame { success } => ui::emit_quit_game(node, *success),
            Action::SetGoal { id } => node.with_attr("id", id.clone()),
            Action::SetGoalsHint { value } => node.with_attr("value", value.clone()),
            Action::SetUiLocked { value } => node.with_attr("value", format_bool(*value)),
            Action::SetUiMarker {
                marker_type,
                entity_type,
                required_goal,
                excluded_goal,
                max_number,
            } => ui::emit_set_ui_marker(
                node,
                *marker_type,
                *entity_type,
                required_goal.as_deref(),
                excluded_goal.as_deref(),
                *max_number,
            ),
            Action::ShowMessage { title, text } => node
                .with_attr("title", title.clone())
                .with_attr("text", text.clone()),
            Action::SetAnimalPopulation {
                animal_types,
                min,
                max,
                era_factors,
            } => population::emit_set_animal_population(node, animal_types, *min, *max, era_factors),
            Action::SetBirthParameters {
                decrease_start_population,
                decrease_halfing_population,
            } => population::emit_set_birth_parameters(
                node,
                *decrease_start_population,
                *decrease_halfing_population,
            ),
            Action::SetDiseaseParameters {
                period,
                variance,
                individual_disease_chance,
            } => population::emit_set_disease_parameters(
                node,
                *period,
                *variance,
                *individual_disease_chance,
            ),
            Action::SetMigrationParameters {
                min,
                max,
                period,
                decrease_start_population,
                decrease_halfing_population,
            } => population::emit_set_migration_parameters(
                node,
                *min,
                *max,
                *period,
                *decrease_start_population,
                *decrease_halfing_population,
            ),
            Action::SetFeatureEnabled { feature, value } => node
                .with_attr("feature", feature.as_str())
                .with_attr("value", format_bool(*value)),
            Action::SetGameplayFlags { flags } => params::emit_set_gameplay_flags(node, flags),
            Action::SetKnowledgeParameters {
                tech_cost_multiplier,
            } => node.with_attr("tech_cost_multiplier", format_f64(*tech_cost_multiplier, 2)),
            Action::SetTimeOfYear { value } => node.with_attr("value", format_f64(*value, 2)),
            Action::SetTimeScale { index } => node.with_attr("index", index.to_string()),
            Action::SetTraderPeriod { value } => node.with_attr("value", format_f64(*value, 1)),
            Action::Unlock { era, tech_type } => node
                .with_attr("era", era.as_str())
                .with_attr("tech_type", tech_type.as_str()),
            Action::SetRaider {
                entity_types,
                era,
                min,
                max,
                period,
                variance,
                grace_period,
                extra_raider_per_population,
                override_attack_target,
                waves,
            } => raider::emit_set_raider(
                node,
                entity_types,
                *era,
                *min,
                *max,
                *period,
                *variance,
                *grace_period,
                *extra_raider_per_population,
                override_attack_target.as_deref(),
                waves,
            ),
            Action::TriggerRaiderAttack { amount } => {
                node.with_opt_attr("amount", amount.map(|v| v.to_string()))
            }
            Action::Spawn {
                entity_type,
                amount,
                placement,
                angle,
                radius,
                years_old,
                gender,
                name,
                behaviour,
            } => spawn::emit_spawn(
                node,
                *entity_type,
                *amount,
                placement,
                *angle,
                *radius,
                *years_old,
                *gender,
                name.as_deref(),
                *behaviour,
            ),
        }
    }
}

/// Parse a `<actions>` list (wrapped or bare), keeping only the actions
/// that survive their own validation.
pub fn parse_action_list(node: &RawNode) -> Vec<Action> {
    node.list("actions", "action")
        .into_iter()
        .filter_map(Action::parse)
        .collect()
}
