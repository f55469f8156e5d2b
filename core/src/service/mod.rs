pub mod aggregator;
pub mod dto;
pub mod generator;
pub mod heatmap;
