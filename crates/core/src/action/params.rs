//! Game-parameter actions: feature toggles, gameplay flags, pacing knobs,
//! and tech unlocks.

use super::Action;
use crate::enums::{Era, Feature, GameplayFlag, TechType};
use crate::raw::RawNode;
use crate::validate::{parse_bool, parse_f64_in, parse_u32_in, word_list};

pub(super) fn parse_set_feature_enabled(node: &RawNode) -> Option<Action> {
    let feature = Feature::parse(node.attr("feature")?)?;
    let value = parse_bool(node.attr("value")?)?;
    Some(Action::SetFeatureEnabled { feature, value })
}

pub(super) fn parse_set_gameplay_flags(node: &RawNode) -> Option<Action> {
    let flags = word_list(node.attr("flags")?, GameplayFlag::parse);
    if flags.is_empty() {
        return None;
    }
    Some(Action::SetGameplayFlags { flags })
}

pub(super) fn parse_set_knowledge_parameters(node: &RawNode) -> Option<Action> {
    let tech_cost_multiplier = parse_f64_in(node.attr("tech_cost_multiplier")?, 0.0, 100.0, 2)?;
    Some(Action::SetKnowledgeParameters {
        tech_cost_multiplier,
    })
}

pub(super) fn parse_set_time_of_year(node: &RawNode) -> Option<Action> {
    let value = parse_f64_in(node.attr("value")?, 0.0, 1.0, 2)?;
    Some(Action::SetTimeOfYear { value })
}

pub(super) fn parse_set_time_scale(node: &RawNode) -> Option<Action> {
    let index = parse_u32_in(node.attr("index")?, 0, 8)?;
    Some(Action::SetTimeScale { index })
}

pub(super) fn parse_set_trader_period(node: &RawNode) -> Option<Action> {
    let value = parse_f64_in(node.attr("value")?, 0.0, 100.0, 1)?;
    Some(Action::SetTraderPeriod { value })
}

/// Meaningless with only one half: both era and tech type must validate or
/// the whole action is dropped.
pub(super) fn parse_unlock(node: &RawNode) -> Option<Action> {
    let era = Era::parse(node.attr("era")?)?;
    let tech_type = TechType::parse(node.attr("tech_type")?)?;
    Some(Action::Unlock { era, tech_type })
}

pub(super) fn emit_set_gameplay_flags(node: RawNode, flags: &[GameplayFlag]) -> RawNode {
    let joined = flags
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    node.with_attr("flags", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(kind: &str) -> RawNode {
        RawNode::new("action").with_attr("type", kind)
    }

    #[test]
    fn unlock_requires_both_halves() {
        let era_only = action("Unlock").with_attr("era", "neolithic");
        assert_eq!(Action::parse(&era_only), None);

        let tech_only = action("Unlock").with_attr("tech_type", "pottery");
        assert_eq!(Action::parse(&tech_only), None);

        let both = action("Unlock")
            .with_attr("era", "neolithic")
            .with_attr("tech_type", "pottery");
        assert_eq!(
            Action::parse(&both),
            Some(Action::Unlock {
                era: Era::Neolithic,
                tech_type: TechType::Pottery,
            })
        );
    }

    #[test]
    fn gameplay_flags_are_deduped_and_whitelisted() {
        let node = action("SetGameplayFlags")
            .with_attr("flags", "permadeath bogus migrations permadeath");
        assert_eq!(
            Action::parse(&node),
            Some(Action::SetGameplayFlags {
                flags: vec![GameplayFlag::Permadeath, GameplayFlag::Migrations],
            })
        );

        let empty = action("SetGameplayFlags").with_attr("flags", "bogus");
        assert_eq!(Action::parse(&empty), None);
    }

    #[test]
    fn numeric_gates_hold() {
        assert_eq!(Action::parse(&action("SetTimeOfYear").with_attr("value", "1.2")), None);
        assert_eq!(Action::parse(&action("SetTimeScale").with_attr("index", "9")), None);
        assert_eq!(
            Action::parse(&action("SetTimeScale").with_attr("index", "3")),
            Some(Action::SetTimeScale { index: 3 })
        );
        assert_eq!(
            Action::parse(&action("SetTraderPeriod").with_attr("value", "2.25")),
            Some(Action::SetTraderPeriod { value: 2.3 })
        );
    }
}
