//! Terrain and world-state actions.

use super::Action;
use crate::enums::{DisasterType, EntityType, LocationModification, MarkerType, WeatherType};
use crate::raw::RawNode;
use crate::validate::{
    format_coord, format_f64, parse_coord, parse_f64_in, snake_case, Coord,
};

pub(super) fn parse_clear_trees(node: &RawNode) -> Option<Action> {
    let radius = parse_f64_in(node.attr("radius")?, 0.0, 1000.0, 1)?;
    let position = node.attr("position").and_then(parse_coord);
    Some(Action::ClearTrees { radius, position })
}

pub(super) fn parse_modify_location(node: &RawNode) -> Option<Action> {
    let modification = LocationModification::parse(node.attr("modification")?)?;
    let position = parse_coord(node.attr("position")?)?;
    Some(Action::ModifyLocation {
        modification,
        position,
    })
}

pub(super) fn parse_set_location_marker(node: &RawNode) -> Option<Action> {
    let marker_type = MarkerType::parse(node.attr("marker_type")?)?;
    let position = parse_coord(node.attr("position")?)?;
    let entity_type = node.attr("entity_type").and_then(EntityType::parse);
    let required_goal = node.attr("required_goal").and_then(snake_case);
    let excluded_goal = node.attr("excluded_goal").and_then(snake_case);
    let scale = node
        .attr("scale")
        .and_then(|raw| parse_f64_in(raw, 0.0, 10.0, 2));
    Some(Action::SetLocationMarker {
        marker_type,
        position,
        entity_type,
        required_goal,
        excluded_goal,
        scale,
    })
}

pub(super) fn parse_set_weather(node: &RawNode) -> Option<Action> {
    let value = WeatherType::parse(node.attr("value")?)?;
    Some(Action::SetWeather { value })
}

pub(super) fn parse_trigger_disaster(node: &RawNode) -> Option<Action> {
    let disaster_type = DisasterType::parse(node.attr("disaster_type")?)?;
    Some(Action::TriggerDisaster { disaster_type })
}

pub(super) fn emit_clear_trees(node: RawNode, radius: f64, position: Option<Coord>) -> RawNode {
    node.with_attr("radius", format_f64(radius, 1))
        .with_opt_attr("position", position.map(format_coord))
}

pub(super) fn emit_modify_location(
    node: RawNode,
    modification: LocationModification,
    position: Coord,
) -> RawNode {
    node.with_attr("modification", modification.as_str())
        .with_attr("position", format_coord(position))
}

pub(super) fn emit_set_location_marker(
    node: RawNode,
    marker_type: MarkerType,
    position: Coord,
    entity_type: Option<EntityType>,
    required_goal: Option<&str>,
    excluded_goal: Option<&str>,
    scale: Option<f64>,
) -> RawNode {
    node.with_attr("marker_type", marker_type.as_str())
        .with_attr("position", format_coord(position))
        .with_opt_attr("entity_type", entity_type.map(|e| e.as_str().to_owned()))
        .with_opt_attr("required_goal", required_goal.map(str::to_owned))
        .with_opt_attr("excluded_goal", excluded_goal.map(str::to_owned))
        .with_opt_attr("scale", scale.map(|v| format_f64(v, 2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(kind: &str) -> RawNode {
        RawNode::new("action").with_attr("type", kind)
    }

    #[test]
    fn modify_location_requires_both_fields() {
        assert_eq!(
            Action::parse(&action("ModifyLocation").with_attr("modification", "burn")),
            None
        );
        assert_eq!(
            Action::parse(
                &action("ModifyLocation")
                    .with_attr("modification", "melt")
                    .with_attr("position", "0.5 0.5")
            ),
            None
        );
        assert_eq!(
            Action::parse(
                &action("ModifyLocation")
                    .with_attr("modification", "burn")
                    .with_attr("position", "0.5 0.5")
            ),
            Some(Action::ModifyLocation {
                modification: LocationModification::Burn,
                position: Coord { x: 0.5, y: 0.5 },
            })
        );
    }

    #[test]
    fn location_marker_optionals_drop_independently() {
        let node = action("SetLocationMarker")
            .with_attr("marker_type", "area")
            .with_attr("position", "0.1 0.9")
            .with_attr("entity_type", "chimera")
            .with_attr("required_goal", "First Winter")
            .with_attr("scale", "11");
        match Action::parse(&node).unwrap() {
            Action::SetLocationMarker {
                entity_type,
                required_goal,
                scale,
                ..
            } => {
                assert_eq!(entity_type, None);
                assert_eq!(required_goal, Some("first_winter".to_owned()));
                assert_eq!(scale, None);
            }
            other => panic!("expected SetLocationMarker, got {:?}", other),
        }
    }

    #[test]
    fn weather_is_enum_closed() {
        assert_eq!(Action::parse(&action("SetWeather").with_attr("value", "Rain")), None);
        assert_eq!(
            Action::parse(&action("SetWeather").with_attr("value", "rain")),
            Some(Action::SetWeather {
                value: WeatherType::Rain
            })
        );
    }

    #[test]
    fn clear_trees_round_trips() {
        let with_pos = Action::ClearTrees {
            radius: 25.0,
            position: Some(Coord { x: 0.25, y: 0.75 }),
        };
        assert_eq!(Action::parse(&with_pos.to_raw()), Some(with_pos));

        let bare = Action::ClearTrees {
            radius: 5.5,
            position: None,
        };
        let raw = bare.to_raw();
        assert_eq!(raw.attr("position"), None);
        assert_eq!(Action::parse(&raw), Some(bare));
    }
}
