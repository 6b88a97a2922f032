//! Player-facing actions: camera, messages, goals, UI markers and locks.

use super::Action;
use crate::enums::{EntityType, MarkerType};
use crate::raw::RawNode;
use crate::validate::{format_bool, format_f64, non_empty, parse_bool, parse_f64_in, parse_u32_in, snake_case};

pub(super) fn parse_focus_camera(node: &RawNode) -> Option<Action> {
    let location = snake_case(node.attr("location")?)?;
    let distance = node
        .attr("distance")
        .and_then(|raw| parse_f64_in(raw, 0.0, 500.0, 1));
    let rotation = node
        .attr("rotation")
        .and_then(|raw| parse_f64_in(raw, 0.0, 360.0, 1));
    Some(Action::FocusCamera {
        location,
        distance,
        rotation,
    })
}

pub(super) fn parse_quit_game(node: &RawNode) -> Option<Action> {
    let success = node.attr("success").and_then(parse_bool);
    Some(Action::QuitGame { success })
}

pub(super) fn parse_set_goal(node: &RawNode) -> Option<Action> {
    let id = snake_case(node.attr("id")?)?;
    Some(Action::SetGoal { id })
}

pub(super) fn parse_set_goals_hint(node: &RawNode) -> Option<Action> {
    let value = non_empty(node.attr("value")?)?.to_owned();
    Some(Action::SetGoalsHint { value })
}

/// The gate and the written field are the same attribute here; the source
/// program keyed them apart, which DESIGN.md records as not imitated.
pub(super) fn parse_set_ui_locked(node: &RawNode) -> Option<Action> {
    let value = parse_bool(node.attr("value")?)?;
    Some(Action::SetUiLocked { value })
}

pub(super) fn parse_set_ui_marker(node: &RawNode) -> Option<Action> {
    let marker_type = MarkerType::parse(node.attr("marker_type")?)?;
    let entity_type = EntityType::parse(node.attr("entity_type")?)?;
    let required_goal = node.attr("required_goal").and_then(snake_case);
    let excluded_goal = node.attr("excluded_goal").and_then(snake_case);
    let max_number = node
        .attr("max_number")
        .and_then(|raw| parse_u32_in(raw, 1, 100));
    Some(Action::SetUiMarker {
        marker_type,
        entity_type,
        required_goal,
        excluded_goal,
        max_number,
    })
}

pub(super) fn parse_show_message(node: &RawNode) -> Option<Action> {
    let title = non_empty(node.attr("title")?)?.to_owned();
    let text = non_empty(node.attr("text")?)?.to_owned();
    Some(Action::ShowMessage { title, text })
}

pub(super) fn emit_focus_camera(
    node: RawNode,
    location: &str,
    distance: Option<f64>,
    rotation: Option<f64>,
) -> RawNode {
    node.with_attr("location", location)
        .with_opt_attr("distance", distance.map(|v| format_f64(v, 1)))
        .with_opt_attr("rotation", rotation.map(|v| format_f64(v, 1)))
}

pub(super) fn emit_quit_game(node: RawNode, success: Option<bool>) -> RawNode {
    node.with_opt_attr("success", success.map(format_bool))
}

pub(super) fn emit_set_ui_marker(
    node: RawNode,
    marker_type: MarkerType,
    entity_type: EntityType,
    required_goal: Option<&str>,
    excluded_goal: Option<&str>,
    max_number: Option<u32>,
) -> RawNode {
    node.with_attr("marker_type", marker_type.as_str())
        .with_attr("entity_type", entity_type.as_str())
        .with_opt_attr("required_goal", required_goal.map(str::to_owned))
        .with_opt_attr("excluded_goal", excluded_goal.map(str::to_owned))
        .with_opt_attr("max_number", max_number.map(|v| v.to_string()))
}
