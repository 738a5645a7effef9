pub mod betweenness;
