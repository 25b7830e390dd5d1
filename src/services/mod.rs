pub mod recommendations;

pub use recommendations::get_recommendations;
