//! Concept explorer: filter buttons and the filtered card grid.

use crate::format::{escape_html, render_field};
use crate::model::concept::ConceptRecord;
use crate::store::{ConceptFilter, ConceptStore};
use crate::ui::target::{Page, UiAction};
use crate::ui::theme::{tier_color, FILTER_OPTIONS};
use crate::ui::RenderResult;

pub struct ConceptGrid {
    grid_id: String,
    filters_id: String,
    current_filter: ConceptFilter,
}

impl ConceptGrid {
    pub fn new(grid_id: impl Into<String>, filters_id: impl Into<String>) -> Self {
        Self {
            grid_id: grid_id.into(),
            filters_id: filters_id.into(),
            current_filter: ConceptFilter::All,
        }
    }

    pub fn current_filter(&self) -> ConceptFilter {
        self.current_filter
    }

    /// Renders the cards matching `filter`, one click listener per card.
    pub fn render(
        &mut self,
        page: &mut Page,
        store: &ConceptStore,
        filter: ConceptFilter,
    ) -> RenderResult<()> {
        let Some(target) = page.get_mut(&self.grid_id) else {
            return Ok(());
        };
        self.current_filter = filter;

        let records = store.filtered(filter);
        target.set_content(records.iter().map(|record| card_markup(record)).collect());
        for record in records {
            target.attach_listener(&record.id, UiAction::ShowConcept(record.id.clone()));
        }
        Ok(())
    }

    /// Renders the filter buttons with the current filter highlighted.
    pub fn render_filters(&self, page: &mut Page) -> RenderResult<()> {
        let Some(target) = page.get_mut(&self.filters_id) else {
            return Ok(());
        };
        let markup = FILTER_OPTIONS
            .iter()
            .map(|option| {
                let active = if option.filter == self.current_filter {
                    " active bg-[#2A363B] text-white"
                } else {
                    ""
                };
                format!(
                    r#"<button class="filter-btn{active} px-4 py-2 text-sm font-semibold rounded-full hover:bg-gray-200" data-filter="{filter}">{label}</button>"#,
                    filter = option.filter.as_str(),
                    label = escape_html(option.label),
                )
            })
            .collect();
        target.set_content(markup);
        for option in FILTER_OPTIONS {
            target.attach_listener(option.filter.as_str(), UiAction::SelectFilter(option.filter));
        }
        Ok(())
    }
}

fn card_markup(record: &ConceptRecord) -> String {
    let color = tier_color(record.tier);
    format!(
        r#"<div class="concept-card bg-white rounded-lg shadow-sm p-4 cursor-pointer border-l-4" style="border-color: {color}" data-id="{id}"><h3 class="font-bold text-lg text-[#2A363B]">{name}</h3><p class="text-sm text-gray-600">{kind}</p><div class="mt-2 flex justify-between items-center"><span class="text-xs font-semibold px-2 py-1 rounded-full bg-gray-100">{focus}</span><span class="text-xs font-bold" style="color: {color}">{tier}</span></div></div>"#,
        id = escape_html(&record.id),
        name = render_field(&record.name),
        kind = render_field(&record.kind),
        focus = render_field(&record.focus),
        tier = record.tier,
    )
}
