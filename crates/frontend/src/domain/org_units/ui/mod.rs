pub mod details;
pub mod list;

pub use details::OrgUnitDetail;
pub use list::OrgUnitList;
