//! Template entry points: typed values to raw trees, with an explicit
//! disabled flag that suppresses emission entirely.
//!
//! Callers that stamp out documents from stored fragments go through
//! these instead of calling `to_raw` directly, so a fragment toggled off
//! in the editor leaves no trace in the output.

use crate::action::Action;
use crate::condition::Condition;
use crate::event::Event;
use crate::raw::RawNode;
use crate::scenario::Scenario;

pub fn render_condition(condition: &Condition, disabled: bool) -> Option<RawNode> {
    (!disabled).then(|| condition.to_raw())
}

pub fn render_action(action: &Action, disabled: bool) -> Option<RawNode> {
    (!disabled).then(|| action.to_raw())
}

pub fn render_event(event: &Event, disabled: bool) -> Option<RawNode> {
    (!disabled).then(|| event.to_raw())
}

pub fn render_scenario(scenario: &Scenario, disabled: bool) -> Option<RawNode> {
    (!disabled).then(|| scenario.to_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::WeatherType;

    #[test]
    fn disabled_fragments_emit_nothing() {
        let action = Action::SetWeather {
            value: WeatherType::Rain,
        };
        assert_eq!(render_action(&action, true), None);

        let rendered = render_action(&action, false).unwrap();
        assert_eq!(rendered.attr("type"), Some("SetWeather"));
        assert_eq!(rendered.attr("value"), Some("rain"));
    }

    #[test]
    fn disabled_scenario_emits_nothing() {
        let scenario = Scenario {
            size: Some(2),
            ..Scenario::default()
        };
        assert_eq!(render_scenario(&scenario, true), None);
        assert!(render_scenario(&scenario, false).is_some());
    }
}
