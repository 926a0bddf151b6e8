pub mod figure;
pub mod models;
pub mod utils;

// Models and figure types are consumed by both the engine (which builds them)
// and the gui (which serves them), so they live here with serde derives.
