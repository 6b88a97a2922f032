//! Population-curve actions: animal stocking, births, disease, migration.

use super::Action;
use crate::enums::AnimalType;
use crate::raw::RawNode;
use crate::validate::{format_f64, order_bounds, parse_f64_in, parse_u32_in, word_list};

/// Accepts either a single `animal_type` or a space-delimited
/// `animal_types` list; when both are present the single-value form takes
/// precedence. Population bounds are order-corrected.
pub(super) fn parse_set_animal_population(node: &RawNode) -> Option<Action> {
    let animal_types = match node.attr("animal_type") {
        Some(raw) => AnimalType::parse(raw).map(|a| vec![a])?,
        None => word_list(node.attr("animal_types")?, AnimalType::parse),
    };
    if animal_types.is_empty() {
        return None;
    }

    let min = node.attr("min").and_then(|raw| parse_u32_in(raw, 0, 500));
    let max = node.attr("max").and_then(|raw| parse_u32_in(raw, 0, 500));
    let (min, max) = order_bounds(min, max);
    let era_factors = node
        .attr("era_factors")
        .and_then(parse_era_factors)
        .unwrap_or_default();

    Some(Action::SetAnimalPopulation {
        animal_types,
        min,
        max,
        era_factors,
    })
}

/// One multiplier per word, each in [0, 10] at two places. A single bad
/// entry invalidates the whole list.
fn parse_era_factors(raw: &str) -> Option<Vec<f64>> {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    words
        .into_iter()
        .map(|w| parse_f64_in(w, 0.0, 10.0, 2))
        .collect()
}

pub(super) fn parse_set_birth_parameters(node: &RawNode) -> Option<Action> {
    let decrease_start_population = node
        .attr("decrease_start_population")
        .and_then(|raw| parse_u32_in(raw, 1, 1000));
    let decrease_halfing_population = node
        .attr("decrease_halfing_population")
        .and_then(|raw| parse_u32_in(raw, 1, 1000));
    Some(Action::SetBirthParameters {
        decrease_start_population,
        decrease_halfing_population,
    })
}

pub(super) fn parse_set_disease_parameters(node: &RawNode) -> Option<Action> {
    let period = node
        .attr("period")
        .and_then(|raw| parse_f64_in(raw, 0.0, 100.0, 1));
    let variance = node
        .attr("variance")
        .and_then(|raw| parse_f64_in(raw, 0.0, 100.0, 1));
    let individual_disease_chance = node
        .attr("individual_disease_chance")
        .and_then(|raw| parse_f64_in(raw, 0.0, 1.0, 2));
    Some(Action::SetDiseaseParameters {
        period,
        variance,
        individual_disease_chance,
    })
}

pub(super) fn parse_set_migration_parameters(node: &RawNode) -> Option<Action> {
    let min = node.attr("min").and_then(|raw| parse_u32_in(raw, 0, 100));
    let max = node.attr("max").and_then(|raw| parse_u32_in(raw, 0, 100));
    let (min, max) = order_bounds(min, max);
    let period = node
        .attr("period")
        .and_then(|raw| parse_f64_in(raw, 0.0, 100.0, 1));
    let decrease_start_population = node
        .attr("decrease_start_population")
        .and_then(|raw| parse_u32_in(raw, 1, 1000));
    let decrease_halfing_population = node
        .attr("decrease_halfing_population")
        .and_then(|raw| parse_u32_in(raw, 1, 1000));
    Some(Action::SetMigrationParameters {
        min,
        max,
        period,
        decrease_start_population,
        decrease_halfing_population,
    })
}

pub(super) fn emit_set_animal_population(
    node: RawNode,
    animal_types: &[AnimalType],
    min: Option<u32>,
    max: Option<u32>,
    era_factors: &[f64],
) -> RawNode {
    // One-element lists re-emit the single-value form.
    let node = if let [single] = animal_types {
        node.with_attr("animal_type", single.as_str())
    } else {
        let joined = animal_types
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        node.with_attr("animal_types", joined)
    };
    let node = node
        .with_opt_attr("min", min.map(|v| v.to_string()))
        .with_opt_attr("max", max.map(|v| v.to_string()));
    if era_factors.is_empty() {
        return node;
    }
    let joined = era_factors
        .iter()
        .map(|f| format_f64(*f, 2))
        .collect::<Vec<_>>()
        .join(" ");
    node.with_attr("era_factors", joined)
}

pub(super) fn emit_set_birth_parameters(
    node: RawNode,
    decrease_start_population: Option<u32>,
    decrease_halfing_population: Option<u32>,
) -> RawNode {
    node.with_opt_attr(
        "decrease_start_population",
        decrease_start_population.map(|v| v.to_string()),
    )
    .with_opt_attr(
        "decrease_halfing_population",
        decrease_halfing_population.map(|v| v.to_string()),
    )
}

pub(super) fn emit_set_disease_parameters(
    node: RawNode,
    period: Option<f64>,
    variance: Option<f64>,
    individual_disease_chance: Option<f64>,
) -> RawNode {
    node.with_opt_attr("period", period.map(|v| format_f64(v, 1)))
        .with_opt_attr("variance", variance.map(|v| format_f64(v, 1)))
        .with_opt_attr(
            "individual_disease_chance",
            individual_disease_chance.map(|v| format_f64(v, 2)),
        )
}

pub(super) fn emit_set_migration_parameters(
    node: RawNode,
    min: Option<u32>,
    max: Option<u32>,
    period: Option<f64>,
    decrease_start_population: Option<u32>,
    decrease_halfing_population: Option<u32>,
) -> RawNode {
    node.with_opt_attr("min", min.map(|v| v.to_string()))
        .with_opt_attr("max", max.map(|v| v.to_string()))
        .with_opt_attr("period", period.map(|v| format_f64(v, 1)))
        .with_opt_attr(
            "decrease_start_population",
            decrease_start_population.map(|v| v.to_string()),
        )
        .with_opt_attr(
            "decrease_halfing_population",
            decrease_halfing_population.map(|v| v.to_string()),
        )
}
