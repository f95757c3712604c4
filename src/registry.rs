//! Reward configurations.
//!
//! Each selection key maps to the reward label reported in the output and the
//! animals that must be found in the pasted inventory.

/// How many items of the chosen animal the choose-animal reward needs.
pub const TRIPLE_COUNT: usize = 3;

/// Campaign identifier stamped on every result.
pub const CAMPAIGN_ID: &str = "TCB_ZODIAC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// One item for each listed animal, reported in this order.
    Fixed(&'static [&'static str]),
    /// `count` items of a single animal picked by the user.
    ChooseAnimal { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardConfig {
    pub key: &'static str,
    pub reward_type: &'static str,
    pub requirement: Requirement,
}

impl RewardConfig {
    pub fn needs_animal(&self) -> bool {
        matches!(self.requirement, Requirement::ChooseAnimal { .. })
    }

    /// Human-readable requirement, e.g. "MONKEY, MOUSE, DRAGON".
    pub fn describe_requirement(&self) -> String {
        match self.requirement {
            Requirement::Fixed(animals) => animals.join(", "),
            Requirement::ChooseAnimal { count } => format!("{} x chosen animal", count),
        }
    }
}

const BUILTIN: &[RewardConfig] = &[
    RewardConfig {
        key: "UPOINT_200K",
        reward_type: "UPOINT_200K",
        requirement: Requirement::Fixed(&["MONKEY", "MOUSE", "DRAGON"]),
    },
    RewardConfig {
        key: "UPOINT_100K_1",
        reward_type: "UPOINT_100K",
        requirement: Requirement::Fixed(&["MOUSE", "OX"]),
    },
    RewardConfig {
        key: "UPOINT_100K_2",
        reward_type: "UPOINT_100K",
        requirement: Requirement::Fixed(&["SNAKE", "MONKEY"]),
    },
    RewardConfig {
        key: "UPOINT_100K_3",
        reward_type: "UPOINT_100K",
        requirement: Requirement::Fixed(&["DRAGON", "ROOSTER"]),
    },
    RewardConfig {
        key: "UPOINT_68686",
        reward_type: "UPOINT_68686",
        requirement: Requirement::ChooseAnimal { count: TRIPLE_COUNT },
    },
];

static BUILTIN_REGISTRY: Registry = Registry { configs: BUILTIN };

/// Immutable lookup table of reward configurations.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    configs: &'static [RewardConfig],
}

impl Registry {
    pub fn builtin() -> &'static Registry {
        &BUILTIN_REGISTRY
    }

    pub fn get(&self, key: &str) -> Option<&RewardConfig> {
        self.configs.iter().find(|c| c.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RewardConfig> {
        self.configs.iter()
    }
}
