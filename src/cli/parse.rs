use graphlab_core::algos::Strategy;
use graphlab_core::graph::{parse_weight, Direction, EdgeId};

/// Parse traversal direction from string
pub fn parse_direction(s: &str) -> std::result::Result<Direction, String> {
    s.parse::<Direction>()
}

/// Parse traversal strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>()
}

/// Parse edge id (`e3` or `3`)
pub fn parse_edge_id(s: &str) -> std::result::Result<EdgeId, String> {
    s.parse::<EdgeId>().map_err(|e| e.to_string())
}

/// Parse a finite edge weight
pub fn parse_weight_arg(s: &str) -> std::result::Result<f64, String> {
    match parse_weight(s) {
        Ok(Some(weight)) => Ok(weight),
        Ok(None) => Err("weight must not be empty".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
