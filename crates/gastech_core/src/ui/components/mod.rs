//! Dashboard section renderers.

pub mod action_plan;
pub mod concept_details;
pub mod concept_grid;
pub mod fuel_table;
pub mod furnace;
pub mod navigation;
pub mod overview;
pub mod strategy;

pub use action_plan::ActionPlan;
pub use concept_details::ConceptDetails;
pub use concept_grid::ConceptGrid;
pub use fuel_table::FuelTable;
pub use furnace::FurnaceDiagram;
pub use navigation::NavigationTabs;
pub use overview::OverviewSection;
pub use strategy::StrategySection;
