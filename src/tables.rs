use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};
use ordered_float::OrderedFloat;

use crate::{
    comparison::RunningCostRow,
    projection::{UsageAssumptions, VehicleProjection},
};

/// Yearly summary: cumulative fuel usage and spend per vehicle, plus the
/// total distance driven.
pub fn build_yearly_summary_table(
    usage: &UsageAssumptions,
    projections: &[VehicleProjection],
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();

    let mut header = vec!["Year".to_string(), "Total driven".to_string()];
    for projection in projections {
        let profile = &projection.profile;
        header.push(format!("{} fuel used ({})", profile.label, profile.fuel_type.unit()));
        header.push(format!("{} fuel cost", profile.label));
    }
    table.set_header(header);

    for year in 0..=usage.horizon_years {
        let mut row = vec![
            Cell::new(year),
            Cell::new(usage.annual_distance * f64::from(year)).set_alignment(CellAlignment::Right),
        ];
        for projection in projections {
            let point = projection.series[year as usize];
            row.push(Cell::new(point.fuel_used).set_alignment(CellAlignment::Right));
            row.push(Cell::new(point.fuel_cost).set_alignment(CellAlignment::Right));
        }
        table.add_row(row);
    }
    table
}

/// Per-km running cost, cheapest row in green and priciest in red.
pub fn build_running_cost_table(rows: &[RunningCostRow]) -> Table {
    let cheapest = rows.iter().map(|row| OrderedFloat(row.running_cost.0)).min();
    let priciest = rows.iter().map(|row| OrderedFloat(row.running_cost.0)).max();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Vehicle", "Fuel type", "Mileage", "Unit price", "Running cost"]);

    for row in rows {
        let color = if Some(OrderedFloat(row.running_cost.0)) == cheapest {
            Color::Green
        } else if Some(OrderedFloat(row.running_cost.0)) == priciest {
            Color::Red
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(row.fuel_type),
            Cell::new(format!("{} km/{}", row.mileage, row.fuel_type.unit()))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{}/{}", row.unit_price, row.fuel_type.unit()))
                .set_alignment(CellAlignment::Right),
            Cell::new(row.running_cost).set_alignment(CellAlignment::Right).fg(color),
        ]);
    }
    table
}
