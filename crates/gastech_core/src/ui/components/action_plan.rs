//! Key safety and service takeaways.

use crate::format::render_field;
use crate::ui::target::Page;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_NEUTRAL, COLOR_PRIMARY, COLOR_SECONDARY, COLOR_TERTIARY,
};
use crate::ui::RenderResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Takeaway {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Ordered by field importance; rendered with 1-based numbering.
pub const TAKEAWAYS: &[Takeaway] = &[
    Takeaway {
        title: "Specific Gravity is Critical",
        description: "Natural Gas (S.G. ~0.60) rises. Propane (S.G. ~1.52) sinks and pools in low areas.",
        color: COLOR_ACCENT,
    },
    Takeaway {
        title: "Know Your Pressures: PSIG vs. W.C.",
        description: "PSIG for high pressure. W.C. for appliances. Key: 1 PSI ≈ 27.7\" W.C.",
        color: COLOR_SECONDARY,
    },
    Takeaway {
        title: "CO is the Silent Killer",
        description: "Legal max 400 ppm (air-free), but >100 ppm is unsafe.",
        color: COLOR_TERTIARY,
    },
    Takeaway {
        title: "Trust Your Nose (Mercaptan)",
        description: "The \"rotten egg\" smell indicates a leak. Never ignore it.",
        color: COLOR_NEUTRAL,
    },
    Takeaway {
        title: "Gases Behave Predictably (Gas Laws)",
        description: "Boyle's Law: P₁V₁ = P₂V₂. Doubling pressure halves volume.",
        color: COLOR_PRIMARY,
    },
];

pub struct ActionPlan {
    target_id: String,
}

impl ActionPlan {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }

    pub fn render(&self, page: &mut Page) -> RenderResult<()> {
        let Some(target) = page.get_mut(&self.target_id) else {
            return Ok(());
        };
        let items = TAKEAWAYS
            .iter()
            .enumerate()
            .map(|(index, takeaway)| {
                format!(
                    r#"<div class="p-4 rounded-md border-l-4 bg-gray-50" style="border-color: {color}"><h3 class="font-bold text-lg">{number}. {title}</h3><p class="text-gray-700">{description}</p></div>"#,
                    color = takeaway.color,
                    number = index + 1,
                    title = render_field(takeaway.title),
                    description = render_field(takeaway.description),
                )
            })
            .collect::<String>();
        target.set_content(format!(
            r#"<h2 class="text-3xl font-bold text-center mb-2">Key Safety &amp; Service Takeaways</h2><p class="text-center text-gray-600 mb-8">The top 5 most critical concepts for field application.</p><div class="max-w-4xl mx-auto bg-white rounded-lg shadow-sm p-6 space-y-4">{items}</div>"#
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionPlan, TAKEAWAYS};
    use crate::ui::target::Page;

    #[test]
    fn numbers_takeaways_from_one() {
        let mut page = Page::with_targets(["action-plan"]);
        ActionPlan::new("action-plan")
            .render(&mut page)
            .expect("action plan renders");
        let html = page.content_of("action-plan");

        assert!(html.contains("1. Specific Gravity is Critical"));
        assert!(html.contains(&format!("{}. Gases Behave Predictably", TAKEAWAYS.len())));
        assert!(html.contains("&gt;100 ppm"));
        assert!(html.contains("P<sub>1</sub>V<sub>1</sub>"));
    }
}
