pub mod header;
pub mod inheritance_graph;
