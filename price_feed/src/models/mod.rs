pub mod sample;
pub mod series;
