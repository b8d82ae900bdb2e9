//! Dashboard orchestrator: owns the page, the components, and the UI state.
//!
//! # Responsibility
//! - Render every section in a fixed order, each behind its own error boundary.
//! - Route attached listeners to card, filter, tab, and close handlers.
//! - Bind and release the composition chart.
//!
//! # Invariants
//! - One failing section never prevents the remaining sections from rendering.
//! - Exactly one tab is active and exactly one filter is current.

use crate::diagnostics::Diagnostics;
use crate::error_handler::ErrorHandler;
use crate::store::{ConceptFilter, ConceptStore};
use crate::ui::chart::{ChartHandle, ChartService, COMPOSITION_CANVAS_ID};
use crate::ui::components::{
    ActionPlan, ConceptDetails, ConceptGrid, FuelTable, FurnaceDiagram, NavigationTabs,
    OverviewSection, StrategySection,
};
use crate::ui::document::{
    render_document, ACTION_PLAN_ID, CONCEPT_GRID_ID, DETAILS_CONTENT_ID, DETAILS_DISPLAY_ID,
    FILTERS_ID, FUEL_TABLE_ID, FURNACE_DIAGRAM_ID, NAV_TABS_ID, OVERVIEW_ID, STRATEGY_ID,
};
use crate::ui::target::{Page, UiAction};
use crate::ui::{RenderError, RenderResult};

pub struct Dashboard {
    store: ConceptStore,
    page: Page,
    handler: ErrorHandler,
    overview: OverviewSection,
    navigation: NavigationTabs,
    grid: ConceptGrid,
    details: ConceptDetails,
    fuel_table: FuelTable,
    strategy: StrategySection,
    action_plan: ActionPlan,
    furnace: FurnaceDiagram,
    chart: Option<ChartHandle>,
}

impl Dashboard {
    pub fn new(store: ConceptStore, page: Page, diagnostics: Diagnostics) -> Self {
        Self {
            store,
            page,
            handler: ErrorHandler::new(diagnostics),
            overview: OverviewSection::new(OVERVIEW_ID),
            navigation: NavigationTabs::new(NAV_TABS_ID),
            grid: ConceptGrid::new(CONCEPT_GRID_ID, FILTERS_ID),
            details: ConceptDetails::new(DETAILS_DISPLAY_ID, DETAILS_CONTENT_ID),
            fuel_table: FuelTable::new(FUEL_TABLE_ID),
            strategy: StrategySection::new(STRATEGY_ID),
            action_plan: ActionPlan::new(ACTION_PLAN_ID),
            furnace: FurnaceDiagram::new(FURNACE_DIAGRAM_ID),
            chart: None,
        }
    }

    /// Renders every section, then binds the composition chart.
    ///
    /// Returns how many sections failed; each failure is already logged.
    pub fn render_all(&mut self) -> usize {
        let filter = self.grid.current_filter();
        let outcomes = [
            self.handler
                .run("OverviewSection.render", || self.overview.render(&mut self.page)),
            self.handler
                .run("NavigationTabs.render", || self.navigation.render(&mut self.page)),
            self.handler
                .run("ConceptGrid.renderFilters", || self.grid.render_filters(&mut self.page)),
            self.handler.run("ConceptGrid.render", || {
                self.grid.render(&mut self.page, &self.store, filter)
            }),
            self.handler
                .run("FuelTable.render", || self.fuel_table.render(&mut self.page)),
            self.handler
                .run("StrategySection.render", || self.strategy.render(&mut self.page)),
            self.handler
                .run("ActionPlan.render", || self.action_plan.render(&mut self.page)),
            self.handler
                .run("FurnaceDiagram.render", || self.furnace.render(&mut self.page)),
        ];
        let failed = outcomes.iter().filter(|outcome| outcome.is_none()).count();

        self.bind_chart();
        failed
    }

    pub fn handle_card_click(&mut self, concept_id: &str) {
        self.handler.run("ConceptDetails.show", || {
            self.details.show(&mut self.page, &self.store, concept_id)
        });
    }

    /// Re-renders the grid for `value` and hides the details panel.
    pub fn handle_filter_change(&mut self, value: &str) {
        self.handler.run("ConceptGrid.render", || -> RenderResult<()> {
            let filter = ConceptFilter::parse(value)
                .ok_or_else(|| RenderError::UnknownFilter(value.to_string()))?;
            self.grid.render(&mut self.page, &self.store, filter)?;
            self.grid.render_filters(&mut self.page)?;
            self.details.hide(&mut self.page);
            Ok(())
        });
    }

    pub fn handle_tab_change(&mut self, tab_id: &str) {
        let switched = self.handler.run("NavigationTabs.switchTab", || {
            self.navigation.switch_tab(&mut self.page, tab_id)
        });
        if switched.is_some() {
            self.handler
                .diagnostics()
                .debug(&format!("Switched to tab: {tab_id}"));
        }
    }

    pub fn handle_close_details(&mut self) {
        self.details.hide(&mut self.page);
    }

    /// Runs the action attached under `key` on target `target_id`.
    ///
    /// Returns `false` when no such listener is attached.
    pub fn dispatch(&mut self, target_id: &str, key: &str) -> bool {
        let action = self
            .page
            .get(target_id)
            .and_then(|target| target.listener(key))
            .cloned();
        let Some(action) = action else {
            self.handler.diagnostics().warn(&format!(
                "No listener '{key}' attached to '{target_id}'"
            ));
            return false;
        };

        match action {
            UiAction::SelectTab(tab_id) => self.handle_tab_change(&tab_id),
            UiAction::SelectFilter(filter) => self.handle_filter_change(filter.as_str()),
            UiAction::ShowConcept(concept_id) => self.handle_card_click(&concept_id),
            UiAction::CloseDetails => self.handle_close_details(),
        }
        true
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn store(&self) -> &ConceptStore {
        &self.store
    }

    pub fn active_tab(&self) -> &str {
        self.navigation.active_tab()
    }

    pub fn current_filter(&self) -> ConceptFilter {
        self.grid.current_filter()
    }

    pub fn details_visible(&self) -> bool {
        self.details.is_visible()
    }

    pub fn chart(&self) -> Option<&ChartHandle> {
        self.chart.as_ref()
    }

    /// Releases the chart binding; safe to call more than once.
    pub fn destroy(&mut self) {
        ChartService::destroy(self.chart.take(), self.handler.diagnostics());
    }

    /// Full HTML document for the current page state.
    pub fn to_html(&self) -> String {
        render_document(&self.page, self.chart.as_ref())
    }

    fn bind_chart(&mut self) {
        ChartService::destroy(self.chart.take(), self.handler.diagnostics());
        self.chart = self
            .handler
            .run("ChartService.bind", || {
                ChartService::bind(
                    &self.page,
                    COMPOSITION_CANVAS_ID,
                    self.handler.diagnostics(),
                )
            })
            .flatten();
    }
}
