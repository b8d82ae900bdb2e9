//! Navigation tabs and the single active-tab state.

use crate::format::escape_html;
use crate::ui::target::{Page, UiAction};
use crate::ui::theme::{is_known_tab, DEFAULT_TAB, NAV_TABS};
use crate::ui::{RenderError, RenderResult};

pub struct NavigationTabs {
    target_id: String,
    active_tab: String,
}

impl NavigationTabs {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            active_tab: DEFAULT_TAB.to_string(),
        }
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn render(&self, page: &mut Page) -> RenderResult<()> {
        let Some(target) = page.get_mut(&self.target_id) else {
            return Ok(());
        };
        target.set_content(self.tabs_markup());
        for tab in NAV_TABS {
            target.attach_listener(tab.id, UiAction::SelectTab(tab.id.to_string()));
        }
        Ok(())
    }

    /// Activates `tab_id`: re-renders the links and shows only its panel.
    ///
    /// # Errors
    /// Returns `UnknownTab` when `tab_id` is not a navigation tab; state is
    /// left unchanged.
    pub fn switch_tab(&mut self, page: &mut Page, tab_id: &str) -> RenderResult<()> {
        if !is_known_tab(tab_id) {
            return Err(RenderError::UnknownTab(tab_id.to_string()));
        }
        self.active_tab = tab_id.to_string();
        self.render(page)?;

        for tab in NAV_TABS {
            if let Some(panel) = page.get_mut(tab.id) {
                panel.set_visible(tab.id == tab_id);
            }
        }
        Ok(())
    }

    fn tabs_markup(&self) -> String {
        NAV_TABS
            .iter()
            .map(|tab| {
                let active = if tab.id == self.active_tab { " active" } else { "" };
                format!(
                    r#"<a data-tab="{id}" class="nav-link{active} text-sm sm:text-lg font-semibold text-gray-600 hover:text-[#D95B43] border-b-2 border-transparent pb-1 px-2">{label}</a>"#,
                    id = tab.id,
                    label = escape_html(tab.label),
                )
            })
            .collect()
    }
}
