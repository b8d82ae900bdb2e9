//! Static presentation configuration: palette, tabs, filters, summary cards.

use crate::model::concept::Tier;
use crate::store::ConceptFilter;

pub const COLOR_PRIMARY: &str = "#2A363B";
pub const COLOR_ACCENT: &str = "#D95B43";
pub const COLOR_SECONDARY: &str = "#F38630";
pub const COLOR_TERTIARY: &str = "#E0E4CC";
pub const COLOR_SAFETY: &str = "#c9184a";
pub const COLOR_COMBUSTION: &str = "#0077b6";
pub const COLOR_NEUTRAL: &str = "#696969";
pub const COLOR_BACKGROUND: &str = "#FDFBF8";

pub fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Fuel => COLOR_ACCENT,
        Tier::Combustion => COLOR_COMBUSTION,
        Tier::Law => COLOR_SECONDARY,
        Tier::Measurement => COLOR_PRIMARY,
        Tier::Safety => COLOR_SAFETY,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: ConceptFilter,
    pub label: &'static str,
}

pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption {
        filter: ConceptFilter::All,
        label: "All Concepts",
    },
    FilterOption {
        filter: ConceptFilter::Tier(Tier::Fuel),
        label: "Fuel Types",
    },
    FilterOption {
        filter: ConceptFilter::Tier(Tier::Combustion),
        label: "Combustion",
    },
    FilterOption {
        filter: ConceptFilter::Tier(Tier::Law),
        label: "Gas Laws",
    },
    FilterOption {
        filter: ConceptFilter::Tier(Tier::Measurement),
        label: "Measurements",
    },
    FilterOption {
        filter: ConceptFilter::Tier(Tier::Safety),
        label: "Safety",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub id: &'static str,
    pub label: &'static str,
}

/// The tab shown first.
pub const DEFAULT_TAB: &str = "explorer";

pub const NAV_TABS: &[NavTab] = &[
    NavTab {
        id: "explorer",
        label: "Concept Explorer",
    },
    NavTab {
        id: "fuel-table",
        label: "Fuel Properties",
    },
    NavTab {
        id: "strategy",
        label: "Considerations",
    },
    NavTab {
        id: "action-plan",
        label: "Action Plan",
    },
    NavTab {
        id: "furnace-diagram",
        label: "Furnace Diagram",
    },
];

pub fn is_known_tab(id: &str) -> bool {
    NAV_TABS.iter().any(|tab| tab.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const FUEL_SUMMARY_CARDS: &[SummaryCard] = &[
    SummaryCard {
        title: "Primary Fuel",
        name: "Natural Gas",
        description: "Methane-based (CH₄), S.G. ~0.60",
        color: COLOR_ACCENT,
    },
    SummaryCard {
        title: "Secondary Fuel",
        name: "Propane (LPG)",
        description: "C₃H₈, S.G. ~1.52 (Heavier than air)",
        color: COLOR_SECONDARY,
    },
    SummaryCard {
        title: "Tertiary Fuel",
        name: "Butane",
        description: "C₄H₁₀, S.G. ~2.00 (Portable fuel)",
        color: COLOR_PRIMARY,
    },
];

/// Typical natural gas composition, in percent.
pub const COMPOSITION_LABELS: &[&str] = &[
    "Methane (CH₄)",
    "Other Hydrocarbons (C₂H₆+)",
    "Non-Combustible (N₂, CO₂)",
];
pub const COMPOSITION_DATA: &[u8] = &[90, 7, 3];
pub const COMPOSITION_COLORS: &[&str] = &[COLOR_ACCENT, COLOR_SECONDARY, COLOR_NEUTRAL];

#[cfg(test)]
mod tests {
    use super::{is_known_tab, tier_color, COMPOSITION_DATA, FILTER_OPTIONS, NAV_TABS};
    use crate::model::concept::Tier;

    #[test]
    fn every_tier_has_a_filter_and_a_color() {
        for tier in Tier::ALL {
            assert!(FILTER_OPTIONS
                .iter()
                .any(|option| option.filter.as_str() == tier.as_str()));
            assert!(tier_color(tier).starts_with('#'));
        }
    }

    #[test]
    fn composition_sums_to_one_hundred() {
        let total: u32 = COMPOSITION_DATA.iter().map(|value| u32::from(*value)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn explorer_is_the_first_tab() {
        assert_eq!(NAV_TABS[0].id, "explorer");
        assert!(is_known_tab("furnace-diagram"));
        assert!(!is_known_tab("settings"));
    }
}
