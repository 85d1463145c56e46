pub mod children;

use self::children::OrgUnitChildren;
use crate::domain::org_units::api;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::{org_unit_detail_key, ORG_UNIT_ENTITY_LABEL};
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::ui::ValidationBadge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::map::OrgUnitMap;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::org_unit::{child_legend_types, OrgUnit, OrgUnitId};
use contracts::shared::legend::{build_legend_options, LegendOption};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn coordinate(value: Option<f64>) -> String {
    value.map(|v| format!("{:.6}", v)).unwrap_or_default()
}

#[component]
pub fn OrgUnitDetail(id: OrgUnitId, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_global_context();
    let (org_unit, set_org_unit) = signal(None::<OrgUnit>);
    let (map_children, set_map_children) = signal(Vec::<OrgUnit>::new());
    let legend = RwSignal::new(Vec::<LegendOption>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (map_error, set_map_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_org_unit(id).await {
                Ok(data) => {
                    ctx.update_tab_title(
                        &org_unit_detail_key(id),
                        &detail_tab_label(ORG_UNIT_ENTITY_LABEL, &data.name),
                    );
                    legend.set(build_legend_options(&data.name, &[]));
                    set_org_unit.set(Some(data));
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                    return;
                }
            }
            set_loading.set(false);

            let types = match api::fetch_org_unit_types().await {
                Ok(types) => types,
                Err(e) => {
                    log!("Org unit types unavailable, legend falls back to ids: {}", e);
                    Vec::new()
                }
            };
            match api::fetch_map_children(id).await {
                Ok(children) => {
                    let focal_name = org_unit.with_untracked(|ou| {
                        ou.as_ref().map(|ou| ou.name.clone()).unwrap_or_default()
                    });
                    let mut child_types = child_legend_types(&types, &children);
                    // types the endpoint did not list still get a layer
                    for child in &children {
                        if let Some(type_id) = child.org_unit_type_id {
                            let value = type_id.to_string();
                            if !child_types.iter().any(|(v, _)| *v == value) {
                                child_types.push((value, child.type_label()));
                            }
                        }
                    }
                    legend.set(build_legend_options(&focal_name, &child_types));
                    set_map_children.set(children);
                }
                Err(e) => set_map_error.set(Some(e)),
            }
        });
    });

    let open_org_unit = Callback::new(move |ou: OrgUnit| {
        ctx.open_tab(&org_unit_detail_key(ou.id), &ou.name);
    });

    view! {
        <PageFrame page_id="org_units--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || org_unit.with(|ou| {
                            ou.as_ref()
                                .map(|ou| ou.name.clone())
                                .unwrap_or_else(|| format!("Org unit {}", id))
                        })}
                    </h1>
                    {move || org_unit.with(|ou| ou.as_ref().map(|ou| view! {
                        <ValidationBadge status=ou.validation_status />
                    }))}
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items:center;justify-content:center;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <div class="alert alert--error">{err}</div> }.into_any();
                    }
                    let Some(ou) = org_unit.get() else {
                        return view! { <></> }.into_any();
                    };
                    let parent = ou.parent_id.map(|parent_id| {
                        let name = ou.parent_name.clone().unwrap_or_else(|| parent_id.to_string());
                        let label = name.clone();
                        view! {
                            <a
                                href="#"
                                class="link"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.open_tab(&org_unit_detail_key(parent_id), &name);
                                }
                            >
                                {label}
                            </a>
                        }
                    });
                    view! {
                        <div class="detail-grid">
                            <div class="detail-grid__label">"Id"</div>
                            <div class="detail-grid__value">{ou.id.to_string()}</div>
                            <div class="detail-grid__label">"Type"</div>
                            <div class="detail-grid__value">{ou.type_label()}</div>
                            <div class="detail-grid__label">"Parent"</div>
                            <div class="detail-grid__value">{parent}</div>
                            <div class="detail-grid__label">"Source"</div>
                            <div class="detail-grid__value">{ou.source.clone().unwrap_or_default()}</div>
                            <div class="detail-grid__label">"Source ref"</div>
                            <div class="detail-grid__value">{ou.source_ref.clone().unwrap_or_default()}</div>
                            <div class="detail-grid__label">"Latitude"</div>
                            <div class="detail-grid__value">{coordinate(ou.latitude)}</div>
                            <div class="detail-grid__label">"Longitude"</div>
                            <div class="detail-grid__value">{coordinate(ou.longitude)}</div>
                            <div class="detail-grid__label">"Altitude"</div>
                            <div class="detail-grid__value">{ou.altitude.map(|a| format!("{:.0} m", a)).unwrap_or_default()}</div>
                            <div class="detail-grid__label">"Created"</div>
                            <div class="detail-grid__value">{format_timestamp(ou.created_at)}</div>
                            <div class="detail-grid__label">"Updated"</div>
                            <div class="detail-grid__value">{format_timestamp(ou.updated_at)}</div>
                        </div>
                    }.into_any()
                }}

                <div class="org-unit-detail__map">
                    <h2 class="section__title">{icon("map")}" Map"</h2>
                    {move || map_error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })}
                    {move || org_unit.get().map(|focal| view! {
                        <OrgUnitMap
                            focal=focal
                            children=map_children
                            legend=legend
                            on_select=open_org_unit
                        />
                    })}
                </div>

                <OrgUnitChildren parent=id />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_format() {
        assert_eq!(coordinate(Some(-4.325)), "-4.325000");
        assert_eq!(coordinate(None), "");
    }
}
