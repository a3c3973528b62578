//! Bar Chart Component
//!
//! Categorical bar chart using HTML5 Canvas. Every redraw starts from a
//! blank canvas: the previous drawing is wiped and the chart is rebuilt from
//! the data it is handed, never patched incrementally.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Bar chart over (label, count) pairs.
#[component]
pub fn BarChart(
    /// Bar fill color
    color: &'static str,
    /// (label, count) pairs in display order
    #[prop(into)]
    data: Signal<Vec<(String, u32)>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the data changes
    create_effect(move |_| {
        let pairs = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &pairs, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="600"
            height="300"
            class="w-full h-48 md:h-64 rounded-lg"
        />
    }
}

/// Draw the bars on canvas
fn draw_bars(canvas: &HtmlCanvasElement, pairs: &[(String, u32)], color: &'static str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
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

    // Clear canvas: the full-wipe here is what makes repeated redraws safe
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let max_count = pairs.iter().map(|(_, n)| *n).max().unwrap_or(0);
    // Keep a usable axis even when every count is zero
    let y_max = max_count.max(1) as f64;

    // Horizontal grid lines (5 divisions)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    if pairs.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No responses yet", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    // Bars
    let slot_width = chart_width / pairs.len() as f64;
    let bar_width = slot_width * 0.6;

    for (idx, (label, count)) in pairs.iter().enumerate() {
        let bar_height = (*count as f64 / y_max) * chart_height;
        let x = margin_left + idx as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Count above the bar
        if *count > 0 {
            ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
            ctx.set_font("12px sans-serif");
            let _ = ctx.fill_text(&count.to_string(), x + bar_width / 2.0 - 4.0, y - 6.0);
        }

        // X-axis label, centered under the bar. Measured rather than
        // estimated: region labels are respondent-typed and not ASCII-only.
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let text_width = ctx
            .measure_text(label)
            .map(|m| m.width())
            .unwrap_or_default();
        let _ = ctx.fill_text(
            label,
            x + bar_width / 2.0 - text_width / 2.0,
            height - 10.0,
        );
    }
}
