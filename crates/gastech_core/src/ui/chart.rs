//! Chart delegate: builds the configuration an external chart library consumes.
//!
//! Rendering itself happens outside this crate. The delegate only checks that
//! the canvas is mounted and hands out a serialized configuration.

use crate::diagnostics::Diagnostics;
use crate::ui::target::Page;
use crate::ui::theme::{
    COLOR_BACKGROUND, COMPOSITION_COLORS, COMPOSITION_DATA, COMPOSITION_LABELS,
};
use crate::ui::RenderResult;
use serde::Serialize;

/// Canvas element the composition chart binds to.
pub const COMPOSITION_CANVAS_ID: &str = "compositionChart";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub data: Vec<u8>,
    pub background_color: Vec<&'static str>,
    pub border_color: &'static str,
    pub border_width: u8,
    pub hover_offset: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub cutout: &'static str,
    pub plugins: ChartPlugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlugins {
    pub legend: ChartLegend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLegend {
    pub position: &'static str,
    pub labels: ChartLegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLegendLabels {
    pub padding: u8,
    pub font: ChartFont,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFont {
    pub size: u8,
}

/// A chart bound to a mounted canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub canvas_id: String,
    /// Serialized `ChartConfig`.
    pub config_json: String,
}

pub struct ChartService;

impl ChartService {
    /// Doughnut chart of typical natural gas composition.
    pub fn composition_config() -> ChartConfig {
        ChartConfig {
            kind: "doughnut",
            data: ChartData {
                labels: COMPOSITION_LABELS.to_vec(),
                datasets: vec![ChartDataset {
                    data: COMPOSITION_DATA.to_vec(),
                    background_color: COMPOSITION_COLORS.to_vec(),
                    border_color: COLOR_BACKGROUND,
                    border_width: 4,
                    hover_offset: 8,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                cutout: "60%",
                plugins: ChartPlugins {
                    legend: ChartLegend {
                        position: "bottom",
                        labels: ChartLegendLabels {
                            padding: 20,
                            font: ChartFont { size: 14 },
                        },
                    },
                },
            },
        }
    }

    /// Binds the composition chart to `canvas_id`.
    ///
    /// Returns `Ok(None)` and logs an error when the canvas is not mounted.
    pub fn bind(
        page: &Page,
        canvas_id: &str,
        diagnostics: &Diagnostics,
    ) -> RenderResult<Option<ChartHandle>> {
        if !page.contains_element(canvas_id) {
            diagnostics.error(&format!("Canvas element with id '{canvas_id}' not found"));
            return Ok(None);
        }
        let config_json = serde_json::to_string(&Self::composition_config())?;
        Ok(Some(ChartHandle {
            canvas_id: canvas_id.to_string(),
            config_json,
        }))
    }

    /// Releases a binding; calling it with `None` is a no-op.
    pub fn destroy(handle: Option<ChartHandle>, diagnostics: &Diagnostics) {
        if let Some(handle) = handle {
            diagnostics.debug(&format!("Chart on '{}' destroyed", handle.canvas_id));
        }
    }
}
