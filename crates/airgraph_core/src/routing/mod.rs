pub mod dijkstra;
pub mod shortest_path_algorithm;
