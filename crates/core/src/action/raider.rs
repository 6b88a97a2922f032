//! Raider actions: periodic raid configuration and one-shot attacks.

use serde::{Deserialize, Serialize};

use super::Action;
use crate::enums::{EntityType, Era, TechType};
use crate::raw::RawNode;
use crate::validate::{format_f64, order_bounds, parse_f64_in, parse_u32_in, snake_case, word_list};

/// One raid wave. All fields are independently optional; a wave that ends
/// up with no surviving field at all is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wave {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub disabled_techs: Vec<TechType>,
}

/// Requires at least one valid entity type in the living-entity list; every
/// other field is optional and dropped independently on failure.
pub(super) fn parse_set_raider(node: &RawNode) -> Option<Action> {
    let entity_types = word_list(node.attr("entity_types")?, EntityType::parse);
    if entity_types.is_empty() {
        return None;
    }

    let era = node.attr("era").and_then(Era::parse);
    let min = node.attr("min").and_then(|raw| parse_u32_in(raw, 0, 100));
    let max = node.attr("max").and_then(|raw| parse_u32_in(raw, 0, 100));
    let (min, max) = order_bounds(min, max);
    let period = node
        .attr("period")
        .and_then(|raw| parse_f64_in(raw, 0.0, 100.0, 1));
    let variance = node
        .attr("variance")
        .and_then(|raw| parse_f64_in(raw, 0.0, 100.0, 1));
    let grace_period = node
        .attr("grace_period")
        .and_then(|raw| parse_f64_in(raw, 0.0, 100.0, 1));
    let extra_raider_per_population = node
        .attr("extra_raider_per_population")
        .and_then(|raw| parse_u32_in(raw, 0, 50));
    let override_attack_target = node.attr("override_attack_target").and_then(snake_case);

    let waves = node
        .list("waves", "wave")
        .into_iter()
        .filter_map(parse_wave)
        .collect();

    Some(Action::SetRaider {
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
    })
}

fn parse_wave(node: &RawNode) -> Option<Wave> {
    let shield_ratio = node
        .attr("shield_ratio")
        .and_then(|raw| parse_f64_in(raw, 0.0, 1.0, 2));
    let armor_ratio = node
        .attr("armor_ratio")
        .and_then(|raw| parse_f64_in(raw, 0.0, 1.0, 2));
    let disabled_techs = node
        .attr("disabled_techs")
        .map(|raw| word_list(raw, TechType::parse))
        .unwrap_or_default();

    if shield_ratio.is_none() && armor_ratio.is_none() && disabled_techs.is_empty() {
        return None;
    }
    Some(Wave {
        shield_ratio,
        armor_ratio,
        disabled_techs,
    })
}

pub(super) fn parse_trigger_raider_attack(node: &RawNode) -> Option<Action> {
    let amount = node.attr("amount").and_then(|raw| parse_u32_in(raw, 1, 100));
    Some(Action::TriggerRaiderAttack { amount })
}

#[allow(clippy::too_many_arguments)]
pub(super) fn emit_set_raider(
    node: RawNode,
    entity_types: &[EntityType],
    era: Option<Era>,
    min: Option<u32>,
    max: Option<u32>,
    period: Option<f64>,
    variance: Option<f64>,
    grace_period: Option<f64>,
    extra_raider_per_population: Option<u32>,
    override_attack_target: Option<&str>,
    waves: &[Wave],
) -> RawNode {
    let joined = entity_types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let mut node = node
        .with_attr("entity_types", joined)
        .with_opt_attr("era", era.map(|e| e.as_str().to_owned()))
        .with_opt_attr("min", min.map(|v| v.to_string()))
        .with_opt_attr("max", max.map(|v| v.to_string()))
        .with_opt_attr("period", period.map(|v| format_f64(v, 1)))
        .with_opt_attr("variance", variance.map(|v| format_f64(v, 1)))
        .with_opt_attr("grace_period", grace_period.map(|v| format_f64(v, 1)))
        .with_opt_attr(
            "extra_raider_per_population",
            extra_raider_per_population.map(|v| v.to_string()),
        )
        .with_opt_attr(
            "override_attack_target",
            override_attack_target.map(str::to_owned),
        );
    if !waves.is_empty() {
        let mut wrapper = RawNode::new("waves");
        for wave in waves {
            wrapper.children.push(emit_wave(wave));
        }
        node = node.with_child(wrapper);
    }
    node
}

fn emit_wave(wave: &Wave) -> RawNode {
    let node = RawNode::new("wave")
        .with_opt_attr("shield_ratio", wave.shield_ratio.map(|v| format_f64(v, 2)))
        .with_opt_attr("armor_ratio", wave.armor_ratio.map(|v| format_f64(v, 2)));
    if wave.disabled_techs.is_empty() {
        return node;
    }
    let joined = wave
        .disabled_techs
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    node.with_attr("disabled_techs", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RawNode {
        RawNode::new("action")
            .with_attr("type", "SetRaider")
            .with_attr("entity_types", "ancient_human horse")
    }

    #[test]
    fn requires_at_least_one_valid_entity_type() {
        let none = RawNode::new("action").with_attr("type", "SetRaider");
        assert_eq!(Action::parse(&none), None);

        let all_invalid = base().with_attr("entity_types", "dragon wyvern");
        assert_eq!(Action::parse(&all_invalid), None);

        let mixed = base().with_attr("entity_types", "dragon horse");
        match Action::parse(&mixed).unwrap() {
            Action::SetRaider { entity_types, .. } => {
                assert_eq!(entity_types, vec![EntityType::Horse]);
            }
            other => panic!("expected SetRaider, got {:?}", other),
        }
    }

    #[test]
    fn min_max_are_order_corrected() {
        let node = base().with_attr("min", "50").with_attr("max", "10");
        match Action::parse(&node).unwrap() {
            Action::SetRaider { min, max, .. } => {
                assert_eq!(min, Some(10));
                assert_eq!(max, Some(10));
            }
            other => panic!("expected SetRaider, got {:?}", other),
        }
    }

    #[test]
    fn waves_validate_independently() {
        let node = base().with_child(
            RawNode::new("waves")
                .with_child(
                    RawNode::new("wave")
                        .with_attr("shield_ratio", "0.5")
                        .with_attr("armor_ratio", "1.5"),
                )
                .with_child(RawNode::new("wave"))
                .with_child(RawNode::new("wave").with_attr("disabled_techs", "metal_shields")),
        );
        match Action::parse(&node).unwrap() {
            Action::SetRaider { waves, .. } => {
                assert_eq!(waves.len(), 2);
                assert_eq!(waves[0].shield_ratio, Some(0.5));
                assert_eq!(waves[0].armor_ratio, None);
                assert_eq!(waves[1].disabled_techs, vec![TechType::MetalShields]);
            }
            other => panic!("expected SetRaider, got {:?}", other),
        }
    }

    #[test]
    fn trigger_raider_attack_keeps_only_valid_amount() {
        let node = RawNode::new("action")
            .with_attr("type", "TriggerRaiderAttack")
            .with_attr("amount", "0");
        assert_eq!(
            Action::parse(&node),
            Some(Action::TriggerRaiderAttack { amount: None })
        );
    }

    #[test]
    fn round_trips_through_serializer() {
        let action = Action::SetRaider {
            entity_types: vec![EntityType::AncientHuman, EntityType::Horse],
            era: Some(Era::BronzeAge),
            min: Some(1),
            max: Some(5),
            period: Some(2.5),
            variance: Some(0.5),
            grace_period: None,
            extra_raider_per_population: Some(2),
            override_attack_target: Some("storage_pit".to_owned()),
            waves: vec![Wave {
                shield_ratio: Some(0.5),
                armor_ratio: Some(0.2),
                disabled_techs: vec![TechType::MetalShields],
            }],
        };
        assert_eq!(Action::parse(&action.to_raw()), Some(action));
    }
}
