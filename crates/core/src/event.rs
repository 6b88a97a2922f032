//! Event assembler: one condition plus one-or-more actions, with the
//! drop-if-invalid policy applied at each level.

use serde::{Deserialize, Serialize};

use crate::action::{parse_action_list, Action};
use crate::condition::Condition;
use crate::enums::EventFlag;
use crate::raw::RawNode;
use crate::validate::{snake_case, word_list};

/// A condition/action(s) pair evaluated by the host game at runtime.
/// Invariant: `actions` is never empty — an event that would end up with
/// zero valid actions is not constructed at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub flags: Vec<EventFlag>,
    pub condition: Condition,
    pub actions: Vec<Action>,
}

/// Per-event pipeline: reject early when neither a condition sub-tree nor
/// any action is present; discard when the condition fails to parse;
/// discard when no action survives, even under a valid condition.
pub fn parse_event(node: &RawNode) -> Option<Event> {
    let condition_node = node.child("condition");
    let action_nodes = node.list("actions", "action");
    if condition_node.is_none() && action_nodes.is_empty() {
        return None;
    }

    let id = node.attr("id").and_then(snake_case);
    let flags = node
        .attr("flags")
        .map(|raw| word_list(raw, EventFlag::parse))
        .unwrap_or_default();

    let condition = Condition::parse(condition_node?)?;

    let actions = parse_action_list(node);
    if actions.is_empty() {
        return None;
    }

    Some(Event {
        id,
        flags,
        condition,
        actions,
    })
}

impl Event {
    /// Serializer inverse of [`parse_event`].
    pub fn to_raw(&self) -> RawNode {
        let mut node = RawNode::new("event").with_opt_attr("id", self.id.clone());
        if !self.flags.is_empty() {
            let joined = self
                .flags
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            node = node.with_attr("flags", joined);
        }
        node = node.with_child(self.condition.to_raw());
        let mut actions = RawNode::new("actions");
        for action in &self.actions {
            actions.children.push(action.to_raw());
        }
        node.with_child(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Era, TimerType, WeatherType};

    fn valid_condition() -> RawNode {
        RawNode::new("condition")
            .with_attr("type", "TimeElapsed")
            .with_attr("timer", "real_time")
            .with_attr("value", "30")
    }

    fn valid_action() -> RawNode {
        RawNode::new("action")
            .with_attr("type", "SetWeather")
            .with_attr("value", "rain")
    }

    #[test]
    fn empty_raw_event_is_rejected_early() {
        assert_eq!(parse_event(&RawNode::new("event")), None);
    }

    #[test]
    fn invalid_condition_discards_event_regardless_of_actions() {
        let node = RawNode::new("event")
            .with_child(RawNode::new("condition").with_attr("type", "Bogus"))
            .with_child(RawNode::new("actions").with_child(valid_action()));
        assert_eq!(parse_event(&node), None);
    }

    #[test]
    fn zero_valid_actions_discards_event_with_valid_condition() {
        let node = RawNode::new("event")
            .with_child(valid_condition())
            .with_child(
                RawNode::new("actions")
                    .with_child(RawNode::new("action").with_attr("type", "Bogus")),
            );
        assert_eq!(parse_event(&node), None);
    }

    #[test]
    fn invalid_actions_are_dropped_valid_ones_kept() {
        let node = RawNode::new("event")
            .with_attr("id", "First Raid")
            .with_attr("flags", "clear_ui bogus_flag clear_ui")
            .with_child(valid_condition())
            .with_child(
                RawNode::new("actions")
                    .with_child(RawNode::new("action").with_attr("type", "Bogus"))
                    .with_child(valid_action()),
            );
        let event = parse_event(&node).unwrap();
        assert_eq!(event.id, Some("first_raid".to_owned()));
        assert_eq!(event.flags, vec![EventFlag::ClearUi]);
        assert_eq!(event.actions.len(), 1);
    }

    #[test]
    fn id_and_flags_are_optional() {
        let node = RawNode::new("event")
            .with_child(valid_condition())
            .with_child(RawNode::new("actions").with_child(valid_action()));
        let event = parse_event(&node).unwrap();
        assert_eq!(event.id, None);
        assert!(event.flags.is_empty());
    }

    #[test]
    fn round_trips_through_serializer() {
        let event = Event {
            id: Some("era_dawn".to_owned()),
            flags: vec![EventFlag::MultipleExecutions],
            condition: Condition::And {
                sub_conditions: vec![
                    Condition::EraUnlocked {
                        era: Era::Neolithic,
                    },
                    Condition::TimeElapsed {
                        timer: TimerType::GameTime,
                        value: 12.0,
                    },
                ],
            },
            actions: vec![
                Action::SetWeather {
                    value: WeatherType::Clear,
                },
                Action::HideUi,
            ],
        };
        assert_eq!(parse_event(&event.to_raw()), Some(event));
    }
}
