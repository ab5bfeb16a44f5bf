pub mod location;
pub mod observation;
pub mod raw_series;
pub mod thresholds;
pub mod variable;
pub mod window;
