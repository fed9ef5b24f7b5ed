use serde::Deserialize;

/// A route query as received from the boundary: node labels and an algorithm name, all
/// still unvalidated.
#[derive(Clone, Debug, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: String,
    #[serde(default)]
    pub blocked: Vec<String>,
}

impl RouteRequest {
    pub fn new(start: &str, goal: &str, algorithm: &str) -> Self {
        RouteRequest {
            start: start.to_owned(),
            goal: goal.to_owned(),
            algorithm: algorithm.to_owned(),
            blocked: Vec::new(),
        }
    }

    pub fn with_blocked<I, S>(mut self, blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked = blocked.into_iter().map(Into::into).collect();
        self
    }
}
