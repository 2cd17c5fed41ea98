//! Potential field cost for 2-D robot path planning
//!
//! The cost combines a repulsive term around a circular obstacle with an
//! attractive term toward the goal:
//!
//! `f(p) = K1 / |obstacle - p| + K2 * |goal - p|`, with `K1 = 1 / radius`.
//!
//! The repulsive term diverges at the obstacle center. That is the intended
//! collision cost, not an error: callers comparing costs with `<` never accept
//! an infinite or NaN value.

use serde::{Deserialize, Serialize};

use crate::error::ObjectiveError;
use crate::point::{Point, distance};

/// Default attraction weight toward the goal
pub const DEFAULT_GOAL_WEIGHT: f64 = 1e-4;

/// Obstacle and goal description for the potential field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialField {
    /// Obstacle center
    pub obstacle: Point,
    /// Obstacle radius, sets the repulsion weight `K1 = 1 / radius`
    pub obstacle_radius: f64,
    /// Goal position
    pub goal: Point,
    /// Attraction weight `K2`
    #[serde(default = "default_goal_weight")]
    pub goal_weight: f64,
}

fn default_goal_weight() -> f64 {
    DEFAULT_GOAL_WEIGHT
}

impl Default for PotentialField {
    fn default() -> Self {
        Self {
            obstacle: Point::new(25.0, 25.0),
            obstacle_radius: 3.0,
            goal: Point::new(45.0, 45.0),
            goal_weight: DEFAULT_GOAL_WEIGHT,
        }
    }
}

impl PotentialField {
    pub fn new(obstacle: Point, obstacle_radius: f64, goal: Point) -> Self {
        Self { obstacle, obstacle_radius, goal, goal_weight: DEFAULT_GOAL_WEIGHT }
    }

    pub fn with_goal_weight(mut self, goal_weight: f64) -> Self {
        self.goal_weight = goal_weight;
        self
    }

    /// Repulsion weight K1
    pub fn repulsion_weight(&self) -> f64 {
        1.0 / self.obstacle_radius
    }

    /// Cost of standing at `p`
    pub fn cost(&self, p: &Point) -> f64 {
        self.repulsion_weight() / distance(&self.obstacle, p) + self.goal_weight * distance(&self.goal, p)
    }

    /// Check that the scene gives a repulsive obstacle and an attractive goal
    pub fn validate(&self) -> Result<(), ObjectiveError> {
        let invalid = |name, value| Err(ObjectiveError::InvalidParameter { name, value });
        if !(self.obstacle_radius.is_finite() && self.obstacle_radius > 0.0) {
            return invalid("obstacle_radius", self.obstacle_radius);
        }
        if !(self.goal_weight.is_finite() && self.goal_weight >= 0.0) {
            return invalid("goal_weight", self.goal_weight);
        }
        for (name, c) in [
            ("obstacle.x", self.obstacle.x),
            ("obstacle.y", self.obstacle.y),
            ("goal.x", self.goal.x),
            ("goal.y", self.goal.y),
        ] {
            if !c.is_finite() {
                return invalid(name, c);
            }
        }
        Ok(())
    }

    /// True when `p` lies strictly inside the obstacle disk
    pub fn is_inside_obstacle(&self, p: &Point) -> bool {
        distance(&self.obstacle, p) < self.obstacle_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_matches_formula() {
        let field = PotentialField::new(Point::new(25.0, 25.0), 5.0, Point::new(45.0, 45.0));
        let p = Point::new(28.0, 29.0);
        // distance to obstacle is 5, distance to goal is sqrt(17^2 + 16^2)
        let expected = (1.0 / 5.0) / 5.0 + 1e-4 * (17.0f64 * 17.0 + 16.0 * 16.0).sqrt();
        assert!((field.cost(&p) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_cost_is_infinite_at_obstacle_center() {
        let field = PotentialField::default();
        let cost = field.cost(&field.obstacle);
        assert!(cost.is_infinite() && cost > 0.0);
    }

    #[test]
    fn test_cost_prefers_far_from_obstacle_near_goal() {
        let field = PotentialField::default();
        let near_obstacle = field.cost(&Point::new(26.0, 26.0));
        let near_goal = field.cost(&Point::new(44.0, 44.0));
        assert!(near_goal < near_obstacle);
    }

    #[test]
    fn test_validate_rejects_degenerate_scenes() {
        assert!(PotentialField::default().validate().is_ok());
        assert!(PotentialField::default().with_goal_weight(0.0).validate().is_ok());

        let scene = |r: f64| PotentialField::new(Point::new(25.0, 25.0), r, Point::new(45.0, 45.0));
        assert_eq!(
            scene(0.0).validate(),
            Err(ObjectiveError::InvalidParameter { name: "obstacle_radius", value: 0.0 })
        );
        assert!(scene(-2.0).validate().is_err());
        assert!(scene(f64::NAN).validate().is_err());
        assert!(scene(f64::INFINITY).validate().is_err());
        assert_eq!(
            scene(5.0).with_goal_weight(-1e-4).validate(),
            Err(ObjectiveError::InvalidParameter { name: "goal_weight", value: -1e-4 })
        );

        let mut off_grid = scene(5.0);
        off_grid.goal.y = f64::INFINITY;
        assert!(off_grid.validate().is_err());
    }

    #[test]
    fn test_inside_obstacle() {
        let field = PotentialField::new(Point::new(25.0, 25.0), 5.0, Point::new(45.0, 45.0));
        assert!(field.is_inside_obstacle(&Point::new(27.0, 27.0)));
        assert!(!field.is_inside_obstacle(&Point::new(30.0, 25.0)));
        assert!(!field.is_inside_obstacle(&Point::new(40.0, 40.0)));
    }
}
