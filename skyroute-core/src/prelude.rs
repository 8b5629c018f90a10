//! This module reimports commonly used types.

pub use crate::models::Point;
pub use crate::models::PointSet;
pub use crate::models::Position;
pub use crate::models::ResourceLimits;
pub use crate::models::RouteSummary;
pub use crate::models::Scenario;
pub use crate::models::Stop;

pub use crate::simulation::RouteSimulator;

pub use crate::evolution::GeneticOptimizer;
pub use crate::evolution::Individual;
pub use crate::evolution::OptimizerConfig;
pub use crate::evolution::OptimizerSolution;
pub use crate::evolution::RouteObjective;
pub use crate::evolution::SelectionStrategy;
pub use crate::evolution::TelemetryMode;

pub use crate::split::RouteSplitter;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::Timer;
