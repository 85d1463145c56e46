pub mod org_unit;
pub mod project;
