// Copyright 2025 the CrossViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders every cross-tab variant over one sample dataset and writes one SVG per variant.

mod svg;

use crossviz_charts::{ChartConfig, ChartKind, ChartOptions, CrossChart};
use crossviz_data::{ColumnMapping, Table, Value};

/// Sales by region, quarter and channel.
fn sample_table() -> Table {
    let regions = ["north", "south", "east", "west"];
    let quarters = ["Q1", "Q2", "Q3"];
    let channels = ["retail", "online"];

    let mut table = Table::new(["region", "quarter", "channel", "sales"]);
    for (r, region) in regions.iter().enumerate() {
        for (q, quarter) in quarters.iter().enumerate() {
            for (c, channel) in channels.iter().enumerate() {
                // Deterministic but uneven spread.
                let sales = ((r * 7 + q * 5 + c * 11) % 13 + 1) as f64 * 10.0;
                table.push(vec![
                    Value::from(*region),
                    Value::from(*quarter),
                    Value::from(*channel),
                    Value::from(sales),
                ]);
            }
        }
    }
    table
}

fn render(
    chart: &mut CrossChart,
    options: Option<&ChartOptions>,
    file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Size the surface from the config the render will persist.
    let config = match options {
        Some(options) => chart.config().merged(options),
        None => chart.config().clone(),
    };
    let mut surface = svg::SvgSurface::new(config.canvas_size(), config.plot_origin());
    chart.render(&mut surface, options)?;
    std::fs::write(file, surface.to_svg_string())?;
    println!("wrote {file}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mapping = ColumnMapping::new()
        .with_x("region")
        .with_y("quarter")
        .with_z("channel")
        .with_value("sales");
    let config = ChartConfig::default()
        .with_size(480.0, 360.0)
        .with_grid(60.0, 48.0)
        .with_summary(true)
        .with_summary_label("Total");

    for kind in ChartKind::ALL {
        let mut chart = CrossChart::new(kind, config.clone());
        chart.set_source(sample_table(), &mapping)?;
        render(&mut chart, None, &format!("crossviz_{kind}.svg"))?;

        if kind == ChartKind::Bar {
            let stretched = ChartOptions {
                stretched: Some(true),
                ..ChartOptions::default()
            };
            render(&mut chart, Some(&stretched), "crossviz_bar_stretched.svg")?;
        }
    }
    Ok(())
}
