//! SVG pie chart with legend.

use leptos::prelude::*;

use crate::util::pie::{PIE_CENTER, PieSlice, percent_label};

#[component]
pub fn PieChart(title: &'static str, #[prop(into)] slices: Signal<Vec<PieSlice>>) -> impl IntoView {
    let view_size = PIE_CENTER * 2.0;

    view! {
        <figure class="pie-chart">
            <figcaption class="pie-chart__title">{title}</figcaption>
            <Show
                when=move || slices.with(|s| !s.is_empty())
                fallback=|| view! { <p class="pie-chart__empty">"No data"</p> }
            >
                <svg class="pie-chart__svg" viewBox=format!("0 0 {view_size} {view_size}") role="img">
                    {move || {
                        slices
                            .get()
                            .into_iter()
                            .map(|s| view! { <path d=s.path fill=s.color stroke="#fff" stroke-width="1"></path> })
                            .collect::<Vec<_>>()
                    }}
                </svg>
            </Show>
            <ul class="pie-chart__legend">
                {move || {
                    slices
                        .get()
                        .into_iter()
                        .map(|s| {
                            view! {
                                <li class="pie-chart__legend-item">
                                    <span class="pie-chart__swatch" style=format!("background:{}", s.color)></span>
                                    {format!("{} · {} ({})", s.label, s.value, percent_label(s.fraction))}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </figure>
    }
}
