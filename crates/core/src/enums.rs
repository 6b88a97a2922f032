//! Closed enumerations baked into the engine.
//!
//! Every set here is exact and case-sensitive: a value outside the set is
//! invalid input (dropped by the caller), never an error and never coerced.
//! Each enum carries its external wire text; the camel-case side of the
//! naming boundary is handled by the serde rename on the type itself.

use serde::{Deserialize, Serialize};

macro_rules! closed_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Exact membership test over the closed set.
            pub fn parse(raw: &str) -> Option<Self> {
                match raw {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }
    };
}

closed_enum! {
    /// Technology eras, oldest first.
    Era {
        Paleolithic => "paleolithic",
        Mesolithic => "mesolithic",
        Neolithic => "neolithic",
        CopperAge => "copper_age",
        BronzeAge => "bronze_age",
        IronAge => "iron_age",
    }
}

closed_enum! {
    /// Living entities that can be spawned, counted, or raid the settlement.
    EntityType {
        PrimitiveHuman => "primitive_human",
        AncientHuman => "ancient_human",
        Bear => "bear",
        Boar => "boar",
        CaveBear => "cave_bear",
        CaveHyena => "cave_hyena",
        CaveLion => "cave_lion",
        Deer => "deer",
        Horse => "horse",
        Ibex => "ibex",
        Mammoth => "mammoth",
        Mouflon => "mouflon",
        Reindeer => "reindeer",
        WildHorse => "wild_horse",
        Wolf => "wolf",
        WoollyRhinoceros => "woolly_rhinoceros",
    }
}

closed_enum! {
    /// Huntable/domesticable animals, the subset valid for population control.
    AnimalType {
        Bear => "bear",
        Boar => "boar",
        CaveBear => "cave_bear",
        CaveHyena => "cave_hyena",
        CaveLion => "cave_lion",
        Deer => "deer",
        Horse => "horse",
        Ibex => "ibex",
        Mammoth => "mammoth",
        Mouflon => "mouflon",
        Reindeer => "reindeer",
        WildHorse => "wild_horse",
        Wolf => "wolf",
        WoollyRhinoceros => "woolly_rhinoceros",
    }
}

closed_enum! {
    /// Unlockable technologies.
    TechType {
        Archery => "archery",
        Basketry => "basketry",
        BronzeCasting => "bronze_casting",
        CompositeTools => "composite_tools",
        CopperSmelting => "copper_smelting",
        DogTraining => "dog_training",
        Domestication => "domestication",
        FoodPreservation => "food_preservation",
        IronSmelting => "iron_smelting",
        Leatherworking => "leatherworking",
        Megalithism => "megalithism",
        MetalShields => "metal_shields",
        Mining => "mining",
        Pottery => "pottery",
        Sickles => "sickles",
        Spinning => "spinning",
        StoneTools => "stone_tools",
        Wheel => "wheel",
    }
}

closed_enum! {
    DisasterType {
        Storm => "storm",
        Blizzard => "blizzard",
    }
}

closed_enum! {
    /// Location/UI marker shapes.
    MarkerType {
        Anchor => "anchor",
        Area => "area",
        Entity => "entity",
    }
}

closed_enum! {
    WeatherType {
        Clear => "clear",
        Overcast => "overcast",
        Rain => "rain",
        Snow => "snow",
        Storm => "storm",
        Blizzard => "blizzard",
    }
}

closed_enum! {
    /// Per-event execution flags.
    EventFlag {
        ClearUi => "clear_ui",
        MultipleExecutions => "multiple_executions",
        RequiresPrevious => "requires_previous",
    }
}

closed_enum! {
    Comparison {
        Less => "less",
        LessOrEquals => "less_or_equals",
        Equals => "equals",
        NotEquals => "not_equals",
        GreaterOrEquals => "greater_or_equals",
        Greater => "greater",
    }
}

closed_enum! {
    /// Counters an entity-count condition can read.
    CounterType {
        PopulationCount => "population_count",
        DeadEntitiesCount => "dead_entities_count",
        ProducedResourcesCount => "produced_resources_count",
        CarriedResourcesCount => "carried_resources_count",
        BuiltStructuresCount => "built_structures_count",
    }
}

closed_enum! {
    /// Clocks a time-elapsed condition can read.
    TimerType {
        RealTime => "real_time",
        GameTime => "game_time",
        EraRealTime => "era_real_time",
        InitTime => "init_time",
    }
}

closed_enum! {
    Season {
        Spring => "spring",
        Summer => "summer",
        Autumn => "autumn",
        Winter => "winter",
    }
}

closed_enum! {
    /// Map environment presets a Location can reference.
    Environment {
        Eurasia => "eurasia",
        EurasiaNorth => "eurasia_north",
        EurasiaWarm => "eurasia_warm",
        EurasiaCold => "eurasia_cold",
        EurasiaFlatlands => "eurasia_flatlands",
        EurasiaGlacial => "eurasia_glacial",
    }
}

closed_enum! {
    Gender {
        Male => "male",
        Female => "female",
    }
}

closed_enum! {
    /// Initial behaviour of a spawned entity.
    SpawnBehaviour {
        Wander => "wander",
        Flee => "flee",
        Aggressive => "aggressive",
        Stationary => "stationary",
    }
}

closed_enum! {
    /// Togglable game features.
    Feature {
        Hints => "hints",
        KnowledgeCollection => "knowledge_collection",
        TechTree => "tech_tree",
        Warnings => "warnings",
        TimeOfYearOverlay => "time_of_year_overlay",
    }
}

closed_enum! {
    GameplayFlag {
        WeatherEffects => "weather_effects",
        Permadeath => "permadeath",
        Migrations => "migrations",
        RaiderAttacks => "raider_attacks",
    }
}

closed_enum! {
    /// Terrain rewrites a ModifyLocation action can apply.
    LocationModification {
        Burn => "burn",
        Flood => "flood",
        ClearTrees => "clear_trees",
        Restore => "restore",
    }
}

closed_enum! {
    ScenarioStatus {
        Victory => "victory",
        Defeat => "defeat",
    }
}

closed_enum! {
    Category {
        Freeplay => "freeplay",
        Challenge => "challenge",
        Tutorial => "tutorial",
        Community => "community",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact_and_case_sensitive() {
        assert_eq!(Era::parse("copper_age"), Some(Era::CopperAge));
        assert_eq!(Era::parse("Copper_Age"), None);
        assert_eq!(Era::parse("copper age"), None);
        assert_eq!(EntityType::parse("ancient_human"), Some(EntityType::AncientHuman));
        assert_eq!(EntityType::parse("dragon"), None);
        assert_eq!(EventFlag::parse("clear_ui"), Some(EventFlag::ClearUi));
        assert_eq!(EventFlag::parse("CLEAR_UI"), None);
    }

    #[test]
    fn wire_text_round_trips_for_every_member() {
        for e in Era::ALL {
            assert_eq!(Era::parse(e.as_str()), Some(*e));
        }
        for t in TechType::ALL {
            assert_eq!(TechType::parse(t.as_str()), Some(*t));
        }
        for c in Comparison::ALL {
            assert_eq!(Comparison::parse(c.as_str()), Some(*c));
        }
    }

    #[test]
    fn animal_set_is_contained_in_entity_set() {
        for a in AnimalType::ALL {
            assert!(EntityType::parse(a.as_str()).is_some());
        }
    }
}
