//! Route reference data type definitions

use serde::{Deserialize, Serialize};

/// Road distance between two cities.
///
/// The city pair is unordered: (city1, city2) and (city2, city1) name the same route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub city1: String,
    pub city2: String,
    pub distance_km: f64,
}

impl Route {
    /// True if this route joins `a` and `b`, in either order
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.city1 == a && self.city2 == b) || (self.city1 == b && self.city2 == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_is_order_independent() {
        let route = Route {
            city1: "Delhi".to_string(),
            city2: "Jaipur".to_string(),
            distance_km: 281.0,
        };
        assert!(route.connects("Delhi", "Jaipur"));
        assert!(route.connects("Jaipur", "Delhi"));
        assert!(!route.connects("Delhi", "Delhi"));
        assert!(!route.connects("Delhi", "Agra"));
    }
}
