pub mod org_units;
pub mod projects;
