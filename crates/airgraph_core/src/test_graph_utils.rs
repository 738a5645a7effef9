#[cfg(test)]
pub mod test_graph {

    use crate::{
        distance_mode::DistanceMode,
        graph::{Graph, NodeId},
    };

    #[derive(Copy, Clone, Debug)]
    pub enum RomaniaCity {
        Arad = 1,
        Bucharest = 2,
        Craiova = 3,
        Dobreta = 4,
        Eforie = 5,
        Fagaras = 6,
        Giurgiu = 7,
        Hirsova = 8,
        Iasi = 9,
        Lugoj = 10,
        Mehadia = 11,
        Neamt = 12,
        Oradea = 13,
        Pitesti = 14,
        RimnicuVilcea = 15,
        Sibiu = 16,
        Timisoara = 17,
        Urziceni = 18,
        Vaslui = 19,
        Zerind = 20,
    }

    impl From<RomaniaCity> for NodeId {
        fn from(value: RomaniaCity) -> Self {
            value as NodeId
        }
    }

    fn romania_cities() -> Vec<(RomaniaCity, &'static str, f64, f64)> {
        vec![
            (RomaniaCity::Arad, "Arad", 46.1866, 21.3123),
            (RomaniaCity::Bucharest, "Bucharest", 44.4268, 26.1025),
            (RomaniaCity::Craiova, "Craiova", 44.3302, 23.7949),
            (RomaniaCity::Dobreta, "Dobreta", 44.6369, 22.6597),
            (RomaniaCity::Eforie, "Eforie", 44.0494, 28.6524),
            (RomaniaCity::Fagaras, "Fagaras", 45.8416, 24.9731),
            (RomaniaCity::Giurgiu, "Giurgiu", 43.9037, 25.9699),
            (RomaniaCity::Hirsova, "Hirsova", 44.6893, 27.9457),
            (RomaniaCity::Iasi, "Iasi", 47.1585, 27.6014),
            (RomaniaCity::Lugoj, "Lugoj", 45.6886, 21.9031),
            (RomaniaCity::Mehadia, "Mehadia", 44.9041, 22.3644),
            (RomaniaCity::Neamt, "Neamt", 46.9275, 26.3710),
            (RomaniaCity::Oradea, "Oradea", 47.0465, 21.9189),
            (RomaniaCity::Pitesti, "Pitesti", 44.8565, 24.8692),
            (RomaniaCity::RimnicuVilcea, "Rimnicu Vilcea", 45.0997, 24.3693),
            (RomaniaCity::Sibiu, "Sibiu", 45.7983, 24.1256),
            (RomaniaCity::Timisoara, "Timisoara", 45.7489, 21.2087),
            (RomaniaCity::Urziceni, "Urziceni", 44.7181, 26.6453),
            (RomaniaCity::Vaslui, "Vaslui", 46.6407, 27.7276),
            (RomaniaCity::Zerind, "Zerind", 46.6247, 21.5170),
        ]
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn romania_roads() -> Vec<(RomaniaCity, RomaniaCity)> {
        vec![
            (RomaniaCity::Oradea, RomaniaCity::Zerind),
            (RomaniaCity::Oradea, RomaniaCity::Sibiu),
            (RomaniaCity::Zerind, RomaniaCity::Arad),
            (RomaniaCity::Arad, RomaniaCity::Sibiu),
            (RomaniaCity::Arad, RomaniaCity::Timisoara),
            (RomaniaCity::Timisoara, RomaniaCity::Lugoj),
            (RomaniaCity::Lugoj, RomaniaCity::Mehadia),
            (RomaniaCity::Mehadia, RomaniaCity::Dobreta),
            (RomaniaCity::Dobreta, RomaniaCity::Craiova),
            (RomaniaCity::Craiova, RomaniaCity::RimnicuVilcea),
            (RomaniaCity::Craiova, RomaniaCity::Pitesti),
            (RomaniaCity::RimnicuVilcea, RomaniaCity::Pitesti),
            (RomaniaCity::RimnicuVilcea, RomaniaCity::Sibiu),
            (RomaniaCity::Sibiu, RomaniaCity::Fagaras),
            (RomaniaCity::Fagaras, RomaniaCity::Bucharest),
            (RomaniaCity::Pitesti, RomaniaCity::Bucharest),
            (RomaniaCity::Bucharest, RomaniaCity::Giurgiu),
            (RomaniaCity::Bucharest, RomaniaCity::Urziceni),
            (RomaniaCity::Urziceni, RomaniaCity::Hirsova),
            (RomaniaCity::Hirsova, RomaniaCity::Eforie),
            (RomaniaCity::Urziceni, RomaniaCity::Vaslui),
            (RomaniaCity::Vaslui, RomaniaCity::Iasi),
            (RomaniaCity::Iasi, RomaniaCity::Neamt),
        ]
    }

    /// Romanian cities with their real coordinates, every road is two-way.
    pub fn create_romania_graph() -> Graph {
        let mut graph = Graph::new(DistanceMode::Spherical);

        for (city, name, lat, lng) in romania_cities() {
            graph.add_node(city.into(), name, lat, lng);
        }

        for (from, to) in romania_roads() {
            graph.connect(from.into(), to.into()).unwrap();
            graph.connect(to.into(), from.into()).unwrap();
        }

        graph
    }

    /// Builds a graph from `(id, lat, lng)` airports and one-way routes.
    pub fn create_graph(
        mode: DistanceMode,
        airports: &[(NodeId, f64, f64)],
        routes: &[(NodeId, NodeId)],
    ) -> Graph {
        let mut graph = Graph::new(mode);

        for &(id, lat, lng) in airports {
            graph.add_node(id, format!("air{id}"), lat, lng);
        }

        for &(from, to) in routes {
            graph.connect(from, to).unwrap();
        }

        graph
    }

    /// Airports laid out on the equator at longitude `id`, e.g. for
    /// `|1| <--> |3| <--> |2| --> |4|`.
    pub fn create_equator_graph(ids: &[NodeId], routes: &[(NodeId, NodeId)]) -> Graph {
        let airports: Vec<(NodeId, f64, f64)> =
            ids.iter().map(|&id| (id, 0.0, id as f64)).collect();

        create_graph(DistanceMode::Spherical, &airports, routes)
    }

    /// `|1| <--> |2| <--> |3|` with `|4| <--> |2|`, planar.
    pub fn line_graph_with_branch() -> Graph {
        create_graph(
            DistanceMode::Planar,
            &[(1, 0.0, 1.0), (2, 0.0, 2.0), (3, 0.0, 3.0), (4, 1.0, 2.0)],
            &[(1, 2), (2, 1), (2, 3), (3, 2), (4, 2), (2, 4)],
        )
    }
}
