//! Considerations: pressure regulation chain and combustion quality levels.

use crate::format::escape_html;
use crate::ui::target::Page;
use crate::ui::theme::{COLOR_ACCENT, COLOR_COMBUSTION, COLOR_SECONDARY};
use crate::ui::RenderResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityLevel {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const QUALITY_LEVELS: &[QualityLevel] = &[
    QualityLevel {
        title: "IDEAL",
        kind: "Complete",
        description: "Blue flame, max efficiency",
        color: COLOR_COMBUSTION,
    },
    QualityLevel {
        title: "POOR",
        kind: "Incomplete",
        description: "Yellow flame, produces CO",
        color: COLOR_SECONDARY,
    },
    QualityLevel {
        title: "DANGER",
        kind: "High CO",
        description: "Immediate shutdown",
        color: COLOR_ACCENT,
    },
];

/// Pressure at each regulation stage, upstream first.
pub const PRESSURE_STAGES: &[(&str, &str)] = &[
    ("Street Main", "~60 PSIG"),
    ("Meter Regulator", "~7\" W.C."),
    ("Appliance", "3.5\" W.C."),
];

pub struct StrategySection {
    target_id: String,
}

impl StrategySection {
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
            r#"<h2 class="text-3xl font-bold text-center mb-2">Considerations</h2><p class="text-center text-gray-600 mb-8">Pressure and Combustion.</p><div class="grid grid-cols-1 lg:grid-cols-2 gap-8">{}{}</div>"#,
            pressure_markup(),
            quality_markup()
        ));
        Ok(())
    }
}

fn pressure_markup() -> String {
    let stages = PRESSURE_STAGES
        .iter()
        .map(|(stage, pressure)| {
            format!(
                r#"<div class="text-center p-3 bg-gray-100 rounded-lg"><p class="font-semibold">{}</p><p class="text-xl font-bold">{}</p></div>"#,
                escape_html(stage),
                escape_html(pressure)
            )
        })
        .collect::<Vec<_>>()
        .join(r#"<div class="text-4xl font-thin text-gray-400">→</div>"#);
    format!(
        r#"<div class="bg-white p-6 rounded-lg shadow-sm"><h3 class="text-xl font-bold mb-4 text-center">Pressure Regulation</h3><div class="flex flex-col md:flex-row justify-center items-center">{stages}</div></div>"#
    )
}

fn quality_markup() -> String {
    let levels = QUALITY_LEVELS
        .iter()
        .map(|level| {
            format!(
                r#"<div class="flex-1 p-3 border-t-4 bg-gray-50 rounded-b-lg" style="border-color: {color}"><h4 class="font-bold">{title}</h4><p class="font-semibold text-sm" style="color: {color}">{kind}</p><p class="text-xs text-gray-600 mt-1">{description}</p></div>"#,
                color = level.color,
                title = level.title,
                kind = level.kind,
                description = escape_html(level.description),
            )
        })
        .collect::<String>();
    format!(
        r#"<div class="bg-white p-6 rounded-lg shadow-sm"><h3 class="text-xl font-bold mb-4 text-center">Combustion Quality</h3><div class="flex flex-col md:flex-row justify-around items-stretch text-center">{levels}</div></div>"#
    )
}
