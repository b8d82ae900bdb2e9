//! Details panel for one selected concept.

use crate::format::render_field;
use crate::model::concept::ConceptRecord;
use crate::store::ConceptStore;
use crate::ui::target::{Page, UiAction};
use crate::ui::theme::tier_color;
use crate::ui::RenderResult;

/// Listener key of the close button.
pub const CLOSE_KEY: &str = "close-details";

pub struct ConceptDetails {
    display_id: String,
    content_id: String,
    visible: bool,
}

impl ConceptDetails {
    pub fn new(display_id: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            display_id: display_id.into(),
            content_id: content_id.into(),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the record with `concept_id`.
    ///
    /// An unknown id is a no-op: the store logs the miss and the panel is
    /// left as it was.
    pub fn show(
        &mut self,
        page: &mut Page,
        store: &ConceptStore,
        concept_id: &str,
    ) -> RenderResult<()> {
        let Ok(record) = store.find(concept_id) else {
            return Ok(());
        };
        self.render(page, record);
        if let Some(display) = page.get_mut(&self.display_id) {
            display.set_visible(true);
        }
        self.visible = true;
        Ok(())
    }

    pub fn hide(&mut self, page: &mut Page) {
        if let Some(display) = page.get_mut(&self.display_id) {
            display.set_visible(false);
        }
        self.visible = false;
    }

    fn render(&self, page: &mut Page, record: &ConceptRecord) {
        let Some(target) = page.get_mut(&self.content_id) else {
            return;
        };
        target.set_content(details_markup(record));
        target.attach_listener(CLOSE_KEY, UiAction::CloseDetails);
    }
}

/// Markup of the details panel body for `record`.
pub fn details_markup(record: &ConceptRecord) -> String {
    let color = tier_color(record.tier);
    format!(
        r#"<div class="flex justify-between items-start"><div><h2 class="text-3xl font-bold text-[#2A363B]">{name}</h2><p class="text-md text-gray-500" style="color: {color}">{tier} Concept</p></div><button id="{CLOSE_KEY}" class="text-2xl text-gray-500 hover:text-gray-800">&times;</button></div><div class="border-t my-4"></div><div class="grid grid-cols-1 md:grid-cols-3 gap-4 text-center md:text-left"><div><p class="text-sm font-semibold text-gray-500 uppercase">Category</p><p class="font-medium">{kind}</p></div><div><p class="text-sm font-semibold text-gray-500 uppercase">Primary Focus</p><p class="font-medium">{focus}</p></div><div><p class="text-sm font-semibold text-gray-500 uppercase">Value</p><p class="font-medium">{benefit}</p></div></div><div class="mt-6"><p class="text-sm font-semibold text-gray-500 uppercase">Description</p><p class="mt-1">{description}</p></div>"#,
        name = render_field(&record.name),
        tier = record.tier,
        kind = render_field(&record.kind),
        focus = render_field(&record.focus),
        benefit = render_field(&record.benefit),
        description = render_field(&record.description),
    )
}

#[cfg(test)]
mod tests {
    use super::{ConceptDetails, CLOSE_KEY};
    use crate::diagnostics::{Diagnostics, Severity};
    use crate::error_handler::ErrorHandler;
    use crate::store::ConceptStore;
    use crate::ui::target::{MemoryTarget, Page, RenderTarget, UiAction};

    fn page() -> Page {
        let mut page = Page::with_targets(["details-content"]);
        page.insert(MemoryTarget::hidden("details-display"));
        page
    }

    #[test]
    fn show_renders_record_and_becomes_visible() {
        let (diagnostics, _sink) = Diagnostics::recording(Severity::Debug);
        let store = ConceptStore::builtin(&ErrorHandler::new(diagnostics));
        let mut page = page();
        let mut details = ConceptDetails::new("details-display", "details-content");

        details.show(&mut page, &store, "boyles").expect("known id");

        assert!(details.is_visible());
        assert!(page.get("details-display").expect("display").is_visible());
        let content = page.get("details-content").expect("content");
        assert!(content
            .content()
            .contains("P<sub>1</sub>V<sub>1</sub> = P<sub>2</sub>V<sub>2</sub>"));
        assert!(content.content().contains("Boyle&#39;s Law"));
        assert_eq!(content.listener(CLOSE_KEY), Some(&UiAction::CloseDetails));

        details.hide(&mut page);
        assert!(!details.is_visible());
        assert!(!page.get("details-display").expect("display").is_visible());
    }

    #[test]
    fn unknown_id_leaves_panel_untouched() {
        let (diagnostics, sink) = Diagnostics::recording(Severity::Debug);
        let store = ConceptStore::builtin(&ErrorHandler::new(diagnostics));
        let mut page = page();
        let mut details = ConceptDetails::new("details-display", "details-content");

        details
            .show(&mut page, &store, "nitrogen")
            .expect("unknown id is a no-op");
        assert!(!details.is_visible());
        assert_eq!(page.content_of("details-content"), "");
        let errors = sink.entries_at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Concept with id 'nitrogen' not found");
    }
}
