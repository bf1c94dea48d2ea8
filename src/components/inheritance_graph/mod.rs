mod component;
mod data;
mod render;
mod state;
mod stats;
mod surface;
mod types;

pub use component::InheritanceGraph;
pub use data::inheritance_network;
