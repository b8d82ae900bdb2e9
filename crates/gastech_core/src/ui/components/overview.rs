//! Overview: fuel summary cards and the composition chart container.

use crate::format::format_formulas;
use crate::sanitize::sanitize;
use crate::ui::chart::COMPOSITION_CANVAS_ID;
use crate::ui::target::Page;
use crate::ui::theme::{SummaryCard, FUEL_SUMMARY_CARDS};
use crate::ui::RenderResult;

pub struct OverviewSection {
    target_id: String,
}

impl OverviewSection {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }

    pub fn render(&self, page: &mut Page) -> RenderResult<()> {
        let Some(target) = page.get_mut(&self.target_id) else {
            return Ok(());
        };
        target.set_content(format!(
            "{}{}",
            summary_cards_markup(FUEL_SUMMARY_CARDS),
            chart_section_markup()
        ));
        Ok(())
    }
}

fn summary_cards_markup(cards: &[SummaryCard]) -> String {
    let cards = cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="bg-white rounded-lg shadow-sm p-6 border-t-4" style="border-color: {color}"><h3 class="text-sm font-semibold text-gray-500 uppercase mb-2">{title}</h3><p class="text-3xl font-bold text-[#2A363B]">{name}</p><p class="text-sm text-gray-600 mt-2">{description}</p></div>"#,
                color = card.color,
                title = sanitize(card.title),
                name = sanitize(&format_formulas(card.name)),
                description = sanitize(&format_formulas(card.description)),
            )
        })
        .collect::<String>();
    format!(r#"<div class="grid grid-cols-1 md:grid-cols-3 gap-6">{cards}</div>"#)
}

fn chart_section_markup() -> String {
    format!(
        r#"<div class="mt-6 bg-white rounded-lg shadow-sm p-6"><h3 class="text-xl font-bold text-center mb-4">Typical Natural Gas Composition</h3><div class="chart-container h-[250px] sm:h-[300px]"><canvas id="{COMPOSITION_CANVAS_ID}"></canvas></div></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::OverviewSection;
    use crate::ui::target::Page;

    #[test]
    fn renders_cards_with_formula_markup_and_canvas() {
        let mut page = Page::with_targets(["overview"]);
        OverviewSection::new("overview")
            .render(&mut page)
            .expect("overview renders");
        let html = page.content_of("overview");
        assert!(html.contains("Propane (LPG)"));
        assert!(html.contains("C<sub>3</sub>H<sub>8</sub>"));
        assert!(html.contains(r#"<canvas id="compositionChart">"#));
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut page = Page::new();
        assert!(OverviewSection::new("overview").render(&mut page).is_ok());
    }
}
