//! Page layout: element ids, the standard target set, and the HTML shell.

use crate::sanitize::sanitize_text;
use crate::ui::chart::ChartHandle;
use crate::ui::target::{MemoryTarget, Page};
use crate::ui::theme::{COLOR_BACKGROUND, DEFAULT_TAB, NAV_TABS};

pub const OVERVIEW_ID: &str = "overview";
pub const NAV_TABS_ID: &str = "nav-tabs";
pub const FILTERS_ID: &str = "filters";
pub const CONCEPT_GRID_ID: &str = "concept-grid";
pub const DETAILS_DISPLAY_ID: &str = "details-display";
pub const DETAILS_CONTENT_ID: &str = "details-content";
pub const EXPLORER_ID: &str = "explorer";
pub const FUEL_TABLE_ID: &str = "fuel-table";
pub const STRATEGY_ID: &str = "strategy";
pub const ACTION_PLAN_ID: &str = "action-plan";
pub const FURNACE_DIAGRAM_ID: &str = "furnace-diagram";

const PAGE_TITLE: &str = "Gas Technician Dashboard";

/// Page with every dashboard target; only the default tab panel is visible.
pub fn standard_page() -> Page {
    let mut page = Page::with_targets([
        OVERVIEW_ID,
        NAV_TABS_ID,
        FILTERS_ID,
        CONCEPT_GRID_ID,
        DETAILS_CONTENT_ID,
    ]);
    page.insert(MemoryTarget::hidden(DETAILS_DISPLAY_ID));
    for tab in NAV_TABS {
        if tab.id == DEFAULT_TAB {
            page.insert(MemoryTarget::new(tab.id));
        } else {
            page.insert(MemoryTarget::hidden(tab.id));
        }
    }
    page
}

/// Assembles the full HTML document from rendered targets.
pub fn render_document(page: &Page, chart: Option<&ChartHandle>) -> String {
    let panels = NAV_TABS
        .iter()
        .map(|tab| {
            let body = if tab.id == EXPLORER_ID {
                explorer_markup(page)
            } else {
                page.content_of(tab.id).to_string()
            };
            format!(
                r#"<section id="{id}" class="tab-content{active}">{body}</section>"#,
                id = tab.id,
                active = active_class(page, tab.id),
            )
        })
        .collect::<String>();

    let chart_config = chart
        .map(|handle| {
            format!(
                r#"<script type="application/json" id="{}-config">{}</script>"#,
                sanitize_text(&handle.canvas_id),
                handle.config_json.replace("</", "<\\/")
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{PAGE_TITLE}</title></head><body style="background-color: {COLOR_BACKGROUND}"><header class="text-center py-8"><h1 class="text-4xl font-bold">{PAGE_TITLE}</h1></header><section id="{OVERVIEW_ID}">{overview}</section><nav id="{NAV_TABS_ID}" class="flex justify-center space-x-4">{nav}</nav><main>{panels}</main>{chart_config}</body></html>"#,
        overview = page.content_of(OVERVIEW_ID),
        nav = page.content_of(NAV_TABS_ID),
    )
}

fn explorer_markup(page: &Page) -> String {
    format!(
        r#"<div id="{FILTERS_ID}" class="flex flex-wrap justify-center gap-2 mb-6">{filters}</div><div id="{DETAILS_DISPLAY_ID}" class="details{show}"><div id="{DETAILS_CONTENT_ID}">{details}</div></div><div id="{CONCEPT_GRID_ID}" class="grid grid-cols-1 md:grid-cols-3 gap-4">{grid}</div>"#,
        filters = page.content_of(FILTERS_ID),
        show = if is_visible(page, DETAILS_DISPLAY_ID) {
            " show"
        } else {
            ""
        },
        details = page.content_of(DETAILS_CONTENT_ID),
        grid = page.content_of(CONCEPT_GRID_ID),
    )
}

fn is_visible(page: &Page, id: &str) -> bool {
    page.get(id).is_some_and(|target| target.is_visible())
}

fn active_class(page: &Page, id: &str) -> &'static str {
    if is_visible(page, id) {
        " active"
    } else {
        ""
    }
}
