pub mod map_legend;
pub mod org_unit_map;
pub mod projection;

pub use map_legend::MapLegend;
pub use org_unit_map::OrgUnitMap;
pub use projection::Projection;
