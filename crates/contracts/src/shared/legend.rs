//! Map legend: one toggle per layer. The first entry is always the focal
//! entity, the following ones are the child types shown around it.

use super::geo::{merge_all_bounds, merge_bounds, Bounds};
use serde::{Deserialize, Serialize};

/// Legend value reserved for the focal entity.
pub const FOCAL_LEGEND_VALUE: &str = "0";

/// Colour of the focal entity layer.
pub const FOCAL_COLOR: &str = "#FF5722";

/// Colours assigned to child layers in order, then reused.
pub const LEGEND_PALETTE: [&str; 8] = [
    "#3F51B5", "#4CAF50", "#9C27B0", "#FFC107", "#00BCD4", "#795548", "#E91E63", "#607D8B",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOption {
    pub value: String,
    pub label: String,
    pub color: String,
    pub active: bool,
}

/// Something drawn on a map under one legend entry.
pub trait MapEntity {
    /// Legend value of the layer this entity belongs to.
    fn legend_value(&self) -> String;

    fn map_bounds(&self) -> Option<Bounds>;
}

/// Focal entry first, then one active entry per `(value, label)` child type.
pub fn build_legend_options(focal_label: &str, child_types: &[(String, String)]) -> Vec<LegendOption> {
    let mut options = Vec::with_capacity(child_types.len() + 1);
    options.push(LegendOption {
        value: FOCAL_LEGEND_VALUE.to_string(),
        label: focal_label.to_string(),
        color: FOCAL_COLOR.to_string(),
        active: true,
    });
    options.extend(child_types.iter().enumerate().map(|(i, (value, label))| LegendOption {
        value: value.clone(),
        label: label.clone(),
        color: LEGEND_PALETTE[i % LEGEND_PALETTE.len()].to_string(),
        active: true,
    }));
    options
}

/// Flips the `active` flag of the entry with `value`; other entries are kept.
pub fn toggle_legend(options: &[LegendOption], value: &str) -> Vec<LegendOption> {
    options
        .iter()
        .map(|option| {
            if option.value == value {
                LegendOption {
                    active: !option.active,
                    ..option.clone()
                }
            } else {
                option.clone()
            }
        })
        .collect()
}

/// Unknown values are treated as inactive.
pub fn is_active(options: &[LegendOption], value: &str) -> bool {
    options
        .iter()
        .any(|option| option.value == value && option.active)
}

pub fn color_for(options: &[LegendOption], value: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.color.clone())
}

/// Children whose layer is switched on.
pub fn visible_children<'a, T: MapEntity>(options: &[LegendOption], children: &'a [T]) -> Vec<&'a T> {
    children
        .iter()
        .filter(|child| is_active(options, &child.legend_value()))
        .collect()
}

/// Union of the bounds of everything currently rendered.
pub fn active_bounds<T: MapEntity>(options: &[LegendOption], focal: &T, children: &[T]) -> Option<Bounds> {
    let focal_bounds = if is_active(options, FOCAL_LEGEND_VALUE) {
        focal.map_bounds()
    } else {
        None
    };
    let children_bounds = merge_all_bounds(
        visible_children(options, children)
            .into_iter()
            .map(|child| child.map_bounds()),
    );
    merge_bounds(focal_bounds, children_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::geo::LatLng;

    struct Marker {
        layer: &'static str,
        lat: f64,
        lng: f64,
    }

    impl MapEntity for Marker {
        fn legend_value(&self) -> String {
            self.layer.to_string()
        }

        fn map_bounds(&self) -> Option<Bounds> {
            LatLng::new(self.lat, self.lng).ok().map(Bounds::from_point)
        }
    }

    fn child_types() -> Vec<(String, String)> {
        vec![
            ("5".to_string(), "Health facility".to_string()),
            ("7".to_string(), "Village".to_string()),
        ]
    }

    #[test]
    fn test_build_legend_options() {
        let options = build_legend_options("Kinshasa", &child_types());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, FOCAL_LEGEND_VALUE);
        assert_eq!(options[0].color, FOCAL_COLOR);
        assert_eq!(options[1].color, LEGEND_PALETTE[0]);
        assert!(options.iter().all(|o| o.active));
    }

    #[test]
    fn test_toggle_is_independent() {
        let options = build_legend_options("Kinshasa", &child_types());
        let toggled = toggle_legend(&options, "5");
        assert!(!is_active(&toggled, "5"));
        assert!(is_active(&toggled, "7"));
        assert!(is_active(&toggled, FOCAL_LEGEND_VALUE));

        let toggled = toggle_legend(&toggled, FOCAL_LEGEND_VALUE);
        assert!(!is_active(&toggled, FOCAL_LEGEND_VALUE));
        assert!(is_active(&toggled, "7"));

        let restored = toggle_legend(&toggle_legend(&toggled, "5"), FOCAL_LEGEND_VALUE);
        assert_eq!(restored, options);
    }

    #[test]
    fn test_visible_children_and_bounds() {
        let options = build_legend_options("Kinshasa", &child_types());
        let focal = Marker { layer: FOCAL_LEGEND_VALUE, lat: 0.0, lng: 0.0 };
        let children = vec![
            Marker { layer: "5", lat: 2.0, lng: 3.0 },
            Marker { layer: "7", lat: -4.0, lng: -1.0 },
        ];

        let all = active_bounds(&options, &focal, &children).unwrap();
        assert_eq!(all.south_west, LatLng { lat: -4.0, lng: -1.0 });
        assert_eq!(all.north_east, LatLng { lat: 2.0, lng: 3.0 });

        let options = toggle_legend(&options, "7");
        assert_eq!(visible_children(&options, &children).len(), 1);
        let without_villages = active_bounds(&options, &focal, &children).unwrap();
        assert_eq!(without_villages.south_west, LatLng { lat: 0.0, lng: 0.0 });

        let options = toggle_legend(&toggle_legend(&options, "5"), FOCAL_LEGEND_VALUE);
        assert_eq!(active_bounds(&options, &focal, &children), None);
    }
}
