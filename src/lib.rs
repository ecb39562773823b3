pub mod ant;
pub mod arguments;
pub mod city;
pub mod colony;
pub mod config;
pub mod distance_matrix;
pub mod error;
pub mod index;
pub mod matrix;
pub mod pheromone_matrix;
pub mod tour;
