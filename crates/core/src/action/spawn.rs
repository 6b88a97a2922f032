//! Spawn action: place living entities at a named position.

use super::Action;
use crate::enums::{EntityType, Gender, SpawnBehaviour};
use crate::raw::RawNode;
use crate::validate::{format_f64, parse_f64_in, parse_u32_in, snake_case};

/// Requires a whitelisted entity type, a validated count, and a non-empty
/// case-normalized placement id. Everything else is optional and validated
/// independently.
pub(super) fn parse_spawn(node: &RawNode) -> Option<Action> {
    let entity_type = EntityType::parse(node.attr("entity_type")?)?;
    let amount = parse_u32_in(node.attr("amount")?, 1, 500)?;
    let placement = snake_case(node.attr("placement")?)?;

    let angle = node
        .attr("angle")
        .and_then(|raw| parse_f64_in(raw, 0.0, 360.0, 1));
    let radius = node
        .attr("radius")
        .and_then(|raw| parse_f64_in(raw, 0.0, 100.0, 1));
    let years_old = node
        .attr("years_old")
        .and_then(|raw| parse_u32_in(raw, 0, 100));
    let gender = node.attr("gender").and_then(Gender::parse);
    let name = node.attr("name").and_then(snake_case);
    let behaviour = node.attr("behaviour").and_then(SpawnBehaviour::parse);

    Some(Action::Spawn {
        entity_type,
        amount,
        placement,
        angle,
        radius,
        years_old,
        gender,
        name,
        behaviour,
    })
}

#[allow(clippy::too_many_arguments)]
pub(super) fn emit_spawn(
    node: RawNode,
    entity_type: EntityType,
    amount: u32,
    placement: &str,
    angle: Option<f64>,
    radius: Option<f64>,
    years_old: Option<u32>,
    gender: Option<Gender>,
    name: Option<&str>,
    behaviour: Option<SpawnBehaviour>,
) -> RawNode {
    node.with_attr("entity_type", entity_type.as_str())
        .with_attr("amount", amount.to_string())
        .with_attr("placement", placement)
        .with_opt_attr("angle", angle.map(|v| format_f64(v, 1)))
        .with_opt_attr("radius", radius.map(|v| format_f64(v, 1)))
        .with_opt_attr("years_old", years_old.map(|v| v.to_string()))
        .with_opt_attr("gender", gender.map(|g| g.as_str().to_owned()))
        .with_opt_attr("name", name.map(str::to_owned))
        .with_opt_attr("behaviour", behaviour.map(|b| b.as_str().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RawNode {
        RawNode::new("action")
            .with_attr("type", "Spawn")
            .with_attr("entity_type", "wolf")
            .with_attr("amount", "3")
            .with_attr("placement", "North Ridge")
    }

    #[test]
    fn required_gate_drops_the_action() {
        let missing_amount = RawNode::new("action")
            .with_attr("type", "Spawn")
            .with_attr("entity_type", "wolf")
            .with_attr("placement", "camp");
        assert_eq!(Action::parse(&missing_amount), None);

        let bad_entity = base().with_attr("entity_type", "gryphon");
        assert_eq!(Action::parse(&bad_entity), None);

        let zero_amount = base().with_attr("amount", "0");
        assert_eq!(Action::parse(&zero_amount), None);

        let blank_placement = base().with_attr("placement", "   ");
        assert_eq!(Action::parse(&blank_placement), None);
    }

    #[test]
    fn placement_is_case_normalized() {
        match Action::parse(&base()).unwrap() {
            Action::Spawn { placement, .. } => assert_eq!(placement, "north_ridge"),
            other => panic!("expected Spawn, got {:?}", other),
        }
    }

    #[test]
    fn optional_fields_drop_independently() {
        let node = base()
            .with_attr("angle", "450")
            .with_attr("radius", "12.34")
            .with_attr("gender", "female")
            .with_attr("behaviour", "berserk");
        match Action::parse(&node).unwrap() {
            Action::Spawn {
                angle,
                radius,
                gender,
                behaviour,
                ..
            } => {
                assert_eq!(angle, None);
                assert_eq!(radius, Some(12.3));
                assert_eq!(gender, Some(Gender::Female));
                assert_eq!(behaviour, None);
            }
            other => panic!("expected Spawn, got {:?}", other),
        }
    }

    #[test]
    fn round_trips_through_serializer() {
        let full = Action::Spawn {
            entity_type: EntityType::AncientHuman,
            amount: 5,
            placement: "south_gate".to_owned(),
            angle: Some(90.0),
            radius: Some(10.5),
            years_old: Some(30),
            gender: Some(Gender::Male),
            name: Some("chief".to_owned()),
            behaviour: Some(SpawnBehaviour::Aggressive),
        };
        assert_eq!(Action::parse(&full.to_raw()), Some(full));

        let minimal = Action::Spawn {
            entity_type: EntityType::Deer,
            amount: 12,
            placement: "meadow".to_owned(),
            angle: None,
            radius: None,
            years_old: None,
            gender: None,
            name: None,
            behaviour: None,
        };
        let raw = minimal.to_raw();
        assert_eq!(raw.attr("angle"), None);
        assert_eq!(raw.attr("gender"), None);
        assert_eq!(Action::parse(&raw), Some(minimal));
    }
}
