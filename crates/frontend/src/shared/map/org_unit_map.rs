//! SVG map of an org unit and its children. Layers are switched by the
//! legend; the viewport is fitted to the union of the visible layers.

use super::map_legend::MapLegend;
use super::projection::Projection;
use contracts::domain::org_unit::OrgUnit;
use contracts::shared::geo::Shapes;
use contracts::shared::legend::{
    active_bounds, color_for, is_active, toggle_legend, visible_children, LegendOption, MapEntity,
    FOCAL_COLOR, FOCAL_LEGEND_VALUE,
};
use leptos::prelude::*;

const MAP_WIDTH: f64 = 800.0;
const MAP_HEIGHT: f64 = 480.0;
const MAP_PADDING: f64 = 24.0;
const POINT_RADIUS: f64 = 5.0;
const FALLBACK_COLOR: &str = "#9E9E9E";

#[derive(Clone)]
struct Feature {
    org_unit: OrgUnit,
    color: String,
    paths: Vec<String>,
    points: Vec<(f64, f64)>,
    focal: bool,
}

/// Polygons when present, otherwise the point location.
fn drawable_shapes(org_unit: &OrgUnit) -> Shapes {
    let mut shapes = org_unit.shapes().unwrap_or_else(|e| {
        log::warn!("Skipping geometry of org unit {}: {:#}", org_unit.id, e);
        Shapes::default()
    });
    if shapes.polygons.is_empty() {
        shapes.points = org_unit.location().ok().flatten().into_iter().collect();
    }
    shapes
}

fn to_feature(org_unit: &OrgUnit, color: String, projection: &Projection, focal: bool) -> Feature {
    let shapes = drawable_shapes(org_unit);
    Feature {
        org_unit: org_unit.clone(),
        color,
        paths: shapes
            .polygons
            .iter()
            .map(|rings| projection.polygon_path(rings))
            .filter(|p| !p.is_empty())
            .collect(),
        points: shapes.points.iter().map(|p| projection.project(*p)).collect(),
        focal,
    }
}

#[component]
pub fn OrgUnitMap(
    #[prop(into)] focal: Signal<OrgUnit>,
    #[prop(into)] children: Signal<Vec<OrgUnit>>,
    legend: RwSignal<Vec<LegendOption>>,
    /// Click on a child feature
    #[prop(optional)]
    on_select: Option<Callback<OrgUnit>>,
) -> impl IntoView {
    let projection = Memo::new(move |_| {
        legend.with(|options| {
            focal.with(|f| children.with(|c| active_bounds(options, f, c)))
        })
        .map(|bounds| Projection::fit(&bounds, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING))
    });

    let features = move || -> Vec<Feature> {
        let Some(projection) = projection.get() else {
            return Vec::new();
        };
        let options = legend.get();
        let children = children.get();
        let mut features: Vec<Feature> = visible_children(&options, &children)
            .into_iter()
            .map(|child| {
                let color = color_for(&options, &child.legend_value())
                    .unwrap_or_else(|| FALLBACK_COLOR.to_string());
                to_feature(child, color, &projection, false)
            })
            .collect();
        if is_active(&options, FOCAL_LEGEND_VALUE) {
            // drawn last so it stays on top
            features.push(to_feature(&focal.get(), FOCAL_COLOR.to_string(), &projection, true));
        }
        features
    };

    let on_toggle = Callback::new(move |value: String| {
        legend.update(|options| *options = toggle_legend(options, &value));
    });

    view! {
        <div class="org-unit-map">
            <Show
                when=move || projection.with(|p| p.is_some())
                fallback=|| view! { <div class="org-unit-map__empty">"No geographic data"</div> }
            >
                <svg
                    class="org-unit-map__canvas"
                    viewBox=format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)
                    preserveAspectRatio="xMidYMid meet"
                >
                    {move || {
                        features()
                            .into_iter()
                            .map(|feature| render_feature(feature, on_select))
                            .collect_view()
                    }}
                </svg>
            </Show>
            <MapLegend options=legend on_toggle=on_toggle />
        </div>
    }
}

fn render_feature(feature: Feature, on_select: Option<Callback<OrgUnit>>) -> impl IntoView {
    let Feature {
        org_unit,
        color,
        paths,
        points,
        focal,
    } = feature;
    let title = org_unit.name.clone();
    let class = if focal {
        "org-unit-map__feature org-unit-map__feature--focal"
    } else {
        "org-unit-map__feature"
    };
    let fill_opacity = if focal { "0.15" } else { "0.35" };

    let paths = paths
        .into_iter()
        .map(|d| {
            view! {
                <path
                    d=d
                    fill=color.clone()
                    fill-opacity=fill_opacity
                    fill-rule="evenodd"
                    stroke=color.clone()
                    stroke-width="1.5"
                />
            }
        })
        .collect_view();
    let points = points
        .into_iter()
        .map(|(x, y)| {
            view! {
                <circle
                    cx=format!("{:.1}", x)
                    cy=format!("{:.1}", y)
                    r=POINT_RADIUS.to_string()
                    fill=color.clone()
                    stroke="#ffffff"
                    stroke-width="1"
                />
            }
        })
        .collect_view();

    view! {
        <g
            class=class
            on:click=move |_| {
                if focal {
                    return;
                }
                if let Some(on_select) = on_select {
                    on_select.run(org_unit.clone());
                }
            }
        >
            <title>{title}</title>
            {paths}
            {points}
        </g>
    }
}
