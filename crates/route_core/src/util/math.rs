use crate::{constants::Weight, graph::Node};

/// Straight-line distance between two node positions, computed directly on
/// the raw (lat, lng) coordinates. Estimates the remaining cost for A*; it
/// is only admissible when edge weights scale with coordinate distance.
pub fn euclidean(src: &Node, dst: &Node) -> Weight {
    let d_lat = src.lat - dst.lat;
    let d_lng = src.lng - dst.lng;
    (d_lat * d_lat + d_lng * d_lng).sqrt()
}
