//! Chart Component
//!
//! Mood intensity line chart drawn on an HTML5 Canvas from a
//! [`ChartConfig`].

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use mindi::render::ChartSlot;
use mindi::ChartConfig;

use crate::state::DashboardState;

const BACKGROUND: &str = "#ffffff";
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#6b7280";

/// Canvas hosting the chart for one slot
#[component]
pub fn ChartCanvas(slot: ChartSlot) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="chart-container">
            <canvas id=slot.canvas_id() width="800" height="400" class="chart-canvas" />
            {move || {
                (!state.has_chart(slot)).then(|| view! {
                    <p class="chart-empty">"No mood data yet"</p>
                })
            }}
        </div>
    }
}

/// Replace whatever the slot's canvas shows with `config`
pub fn draw(slot: ChartSlot, config: &ChartConfig) {
    if let Some((canvas, ctx)) = context_for(slot) {
        draw_chart(&canvas, &ctx, config);
    }
}

/// Blank the slot's canvas
pub fn clear(slot: ChartSlot) {
    if let Some((canvas, ctx)) = context_for(slot) {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
}

fn context_for(slot: ChartSlot) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = web_sys::window()?
        .document()?
        .get_element_by_id(slot.canvas_id())?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    Some((canvas, ctx))
}

fn draw_chart(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, config: &ChartConfig) {
    let Some(series) = config.series() else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let y_axis = &config.options.scales.y;
    let y_max = f64::from(y_axis.max.max(1));
    let step = y_axis.step_size.max(1);

    let y_of = |value: f64| margin_top + (1.0 - value / y_max) * chart_height;

    // Horizontal grid lines at every step
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for value in (0..=y_axis.max).step_by(step as usize) {
        let y = y_of(f64::from(value));
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&value.to_string(), 10.0, y + 4.0);
    }

    let count = series.data.len();
    if count == 0 {
        return;
    }
    let x_of = |i: usize| {
        if count == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (count - 1) as f64) * chart_width
        }
    };
    let points: Vec<(f64, f64)> = series
        .data
        .iter()
        .enumerate()
        .map(|(i, v)| (x_of(i), y_of(f64::from(*v))))
        .collect();

    // Area under the line
    if series.fill {
        ctx.set_fill_style(&series.background_color.into());
        ctx.begin_path();
        ctx.move_to(points[0].0, y_of(0.0));
        for (x, y) in &points {
            ctx.line_to(*x, *y);
        }
        ctx.line_to(points[count - 1].0, y_of(0.0));
        ctx.close_path();
        ctx.fill();
    }

    // Line
    ctx.set_stroke_style(&series.border_color.into());
    ctx.set_line_width(series.border_width);
    ctx.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    // Points, colored by mood
    ctx.set_stroke_style(&series.point_border_color.into());
    ctx.set_line_width(series.point_border_width);
    for (i, (x, y)) in points.iter().enumerate() {
        let color = series
            .point_background_color
            .get(i)
            .copied()
            .unwrap_or(series.border_color);
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, series.point_radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        ctx.stroke();
    }

    // X-axis labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in config.labels().iter().enumerate().take(count) {
        let _ = ctx.fill_text(label, x_of(i) - 12.0, height - 12.0);
    }
}
