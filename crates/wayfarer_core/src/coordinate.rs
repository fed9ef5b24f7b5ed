use geo::{Distance, Euclidean};

/// Planar position of a node, only used to estimate the remaining distance to a goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    point: geo::Point,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: geo::Point::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn euclidean_distance(&self, to: &Coordinate) -> f64 {
        let euclidean = Euclidean;
        euclidean.distance(&self.point, &to.point)
    }
}
