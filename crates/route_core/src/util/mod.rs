pub mod math;
pub mod test_graphs;
