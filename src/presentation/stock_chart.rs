use leptos::*;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::domain::chart::{
    AxisTick, CandleGlyph, ChartDimensions, ChartRenderingService, ChartScene, Line, TooltipState,
};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Series;

/// 📈 Candlestick + volume chart painted as SVG from a [`ChartScene`]
#[component]
pub fn StockChart(#[prop(into)] series: Signal<Series>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let service = ChartRenderingService::new(ChartDimensions::default(), config.month_grouping);
    let dims = service.dimensions;

    // An empty series keeps whatever scene was there before
    let scene = create_memo(move |previous: Option<&Option<Rc<ChartScene>>>| {
        match series.with(|s| service.build_scene(s)) {
            Some(scene) => Some(Rc::new(scene)),
            None => {
                crate::log_debug!(LogComponent::Presentation("StockChart"), "empty series, nothing drawn");
                previous.cloned().flatten()
            }
        }
    });

    let tooltip = create_rw_signal(TooltipState::default());

    view! {
        <div class="stock-chart">
            <svg width=dims.width height=dims.height>
                <rect width="100%" height="100%" fill="white"></rect>
                {move || scene.get().map(|scene| render_scene(&scene, tooltip))}
            </svg>
            <ChartTooltip state=tooltip />
        </div>
    }
}

fn render_scene(scene: &ChartScene, tooltip: RwSignal<TooltipState>) -> impl IntoView + use<> {
    let margin = scene.dimensions.margin;
    let width = scene.dimensions.inner_width();
    let height = scene.dimensions.inner_height();
    let midpoint = scene.dimensions.midpoint_x();

    let horizontal_grid = scene.horizontal_grid.iter().map(render_line).collect_view();
    let vertical_grid = scene.vertical_grid.iter().map(render_line).collect_view();
    let x_axis = render_x_axis(&scene.x_ticks, width, height);
    let y_axis = render_y_axis(&scene.y_ticks, height);
    let candles = scene
        .candles
        .iter()
        .map(|glyph| render_candle(glyph, scene, midpoint, tooltip))
        .collect_view();
    let volumes = scene
        .volumes
        .iter()
        .map(|volume| {
            view! {
                <rect
                    class="volume-bar"
                    x=volume.rect.x
                    y=volume.rect.y
                    width=volume.rect.width
                    height=volume.rect.height
                    fill=volume.fill.to_css()
                    fill-opacity=volume.opacity
                ></rect>
            }
        })
        .collect_view();
    let months = scene
        .month_labels
        .iter()
        .map(|label| {
            view! {
                <g class="month-group" transform=format!("translate({},{})", label.x, label.y)>
                    <text
                        fill="black"
                        text-anchor="middle"
                        style="text-transform: uppercase; font-size: 14px; font-weight: 600; font-family: Roboto, sans-serif"
                    >
                        {label.text.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <g transform=format!("translate({},{})", margin.left, margin.top)>
            <g class="grid">{horizontal_grid}</g>
            {vertical_grid}
            {x_axis}
            {y_axis}
            {volumes}
            {candles}
            {months}
        </g>
    }
}

fn render_line(line: &Line) -> impl IntoView + use<> {
    view! {
        <line
            x1=line.x1
            y1=line.y1
            x2=line.x2
            y2=line.y2
            stroke=line.stroke.to_css()
            stroke-opacity=line.opacity
        ></line>
    }
}

/// Stem, body and a transparent hover area; the group owns the pointer handlers
fn render_candle(
    glyph: &CandleGlyph,
    scene: &ChartScene,
    midpoint: f64,
    tooltip: RwSignal<TooltipState>,
) -> impl IntoView + use<> {
    let bar = glyph.bar;
    let rect = scene.glyph_rect(glyph.index).unwrap_or(glyph.body);
    view! {
        <g
            class=format!("candlestick {}", glyph.tone.as_ref())
            on:mouseenter=move |_| tooltip.update(|t| t.show(&bar, rect, midpoint))
            on:mouseleave=move |_| tooltip.update(|t| t.hide())
        >
            {render_line(&glyph.stem)}
            <rect
                x=glyph.body.x
                y=glyph.body.y
                width=glyph.body.width
                height=glyph.body.height
                fill=glyph.fill.to_css()
            ></rect>
            <rect
                class="hit-area"
                x=glyph.hit.x
                y=glyph.hit.y
                width=glyph.hit.width
                height=glyph.hit.height
                fill="transparent"
                pointer-events="all"
            ></rect>
        </g>
    }
}

fn render_x_axis(ticks: &[AxisTick], width: f64, height: f64) -> impl IntoView + use<> {
    let ticks = ticks
        .iter()
        .map(|tick| {
            view! {
                <g class="tick" transform=format!("translate({},0)", tick.position)>
                    <line y2=6 stroke="black"></line>
                    <text y=9 dy="0.71em" text-anchor="middle" fill="black">{tick.label.clone()}</text>
                </g>
            }
        })
        .collect_view();
    view! {
        <g class="x-axis" transform=format!("translate(0,{})", height) font-size="10">
            <line x1=0 x2=width stroke="black"></line>
            {ticks}
        </g>
    }
}

fn render_y_axis(ticks: &[AxisTick], height: f64) -> impl IntoView + use<> {
    let ticks = ticks
        .iter()
        .map(|tick| {
            view! {
                <g class="tick" transform=format!("translate(0,{})", tick.position)>
                    <line x2=-6 stroke="black"></line>
                    <text x=-9 dy="0.32em" text-anchor="end" fill="black">{tick.label.clone()}</text>
                </g>
            }
        })
        .collect_view();
    view! {
        <g class="y-axis" font-size="10">
            <line y1=0 y2=height stroke="black"></line>
            {ticks}
        </g>
    }
}

/// 🎯 The one tooltip of a chart, reused for every candle
#[component]
fn ChartTooltip(state: RwSignal<TooltipState>) -> impl IntoView {
    let left = move || state.with(|t| t.placement.map(|p| format!("{}px", p.left)).unwrap_or_default());
    let top = move || state.with(|t| t.placement.map(|p| format!("{}px", p.top)).unwrap_or_default());

    view! {
        <div
            class="tooltip"
            style:opacity=move || state.with(|t| t.opacity().to_string())
            style:left=left
            style:top=top
        >
            {move || {
                state.with(|t| {
                    t.content.as_ref().map(|content| {
                        content
                            .rows()
                            .into_iter()
                            .map(|(name, value)| {
                                view! {
                                    <div class="tooltip-row">
                                        <span class="tooltip-key">{name}": "</span>
                                        {value.to_string()}
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                })
            }}
        </div>
    }
}
