//! Fuel property comparison table.

use crate::format::{escape_html, render_field};
use crate::ui::target::Page;
use crate::ui::RenderResult;

const HEADERS: &[&str] = &["Property", "Natural Gas", "Propane", "Butane"];

/// One compared property across the three fuels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelRow {
    pub property: &'static str,
    pub natural_gas: &'static str,
    pub propane: &'static str,
    pub butane: &'static str,
}

pub const FUEL_ROWS: &[FuelRow] = &[
    FuelRow {
        property: "Chemical Formula",
        natural_gas: "CH₄",
        propane: "C₃H₈",
        butane: "C₄H₁₀",
    },
    FuelRow {
        property: "Specific Gravity (Air = 1.0)",
        natural_gas: "0.6",
        propane: "1.52",
        butane: "2.0",
    },
    FuelRow {
        property: "Boiling Point",
        natural_gas: "-260°F (-162°C)",
        propane: "-44°F (-42°C)",
        butane: "32°F (0°C)",
    },
    FuelRow {
        property: "Heat Content (BTU/ft³)",
        natural_gas: "1,000",
        propane: "2,520",
        butane: "3,260",
    },
    FuelRow {
        property: "Ignition Temperature",
        natural_gas: "1300°F (700°C)",
        propane: "920°F (490°C)",
        butane: "900°F (480°C)",
    },
    FuelRow {
        property: "Limits of Flammability",
        natural_gas: "4-15%",
        propane: "2.1-9.5%",
        butane: "1.9-8.5%",
    },
];

pub struct FuelTable {
    target_id: String,
}

impl FuelTable {
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
            r#"<h2 class="text-3xl font-bold text-center mb-2">Fuel Properties Comparison</h2><p class="text-center text-gray-600 mb-8">Detailed comparison of Natural Gas, Propane, and Butane.</p><div class="bg-white rounded-lg shadow-sm overflow-hidden border-t-4 border-[#D95B43]" role="region" aria-label="Fuel properties table"><div class="overflow-x-auto">{}</div></div>"#,
            table_markup(FUEL_ROWS)
        ));
        Ok(())
    }
}

fn table_markup(rows: &[FuelRow]) -> String {
    let header = HEADERS
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let color = if index == 0 { "" } else { " text-[#D95B43]" };
            format!(
                r#"<th scope="col" class="px-6 py-4 font-bold uppercase tracking-wider{color}">{}</th>"#,
                escape_html(header)
            )
        })
        .collect::<String>();

    let body = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let striping = if index % 2 == 0 {
                "hover:bg-gray-50"
            } else {
                "bg-gray-50/50 hover:bg-gray-50"
            };
            format!(
                r#"<tr class="{striping}"><th scope="row" class="px-6 py-3 font-medium">{}</th><td class="px-6 py-3">{}</td><td class="px-6 py-3">{}</td><td class="px-6 py-3">{}</td></tr>"#,
                escape_html(row.property),
                render_field(row.natural_gas),
                render_field(row.propane),
                render_field(row.butane),
            )
        })
        .collect::<String>();

    format!(
        r#"<table class="min-w-full text-sm text-left"><thead class="bg-gray-100 text-[#2A363B]"><tr>{header}</tr></thead><tbody class="divide-y divide-gray-200">{body}</tbody></table>"#
    )
}

#[cfg(test)]
mod tests {
    use super::{FuelTable, FUEL_ROWS};
    use crate::ui::target::Page;

    #[test]
    fn renders_header_and_one_row_per_property() {
        let mut page = Page::with_targets(["fuel-table"]);
        FuelTable::new("fuel-table")
            .render(&mut page)
            .expect("table renders");
        let html = page.content_of("fuel-table");

        assert_eq!(html.matches("<tr class=").count(), FUEL_ROWS.len());
        assert!(html.contains("C<sub>4</sub>H<sub>10</sub>"));
        assert!(html.contains(r#"aria-label="Fuel properties table""#));
    }
}
