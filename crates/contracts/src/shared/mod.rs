pub mod geo;
pub mod legend;
pub mod locale;
pub mod paginated;
pub mod selection;
pub mod table_params;
