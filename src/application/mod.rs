pub mod controller;
pub mod render_plan;
