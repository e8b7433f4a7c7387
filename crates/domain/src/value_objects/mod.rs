pub mod distribution;
pub mod equilibrium;
pub mod price_pair;
pub mod report;

pub use distribution::NpvDistribution;
pub use equilibrium::{EquilibriumSet, PriceGridPoint};
pub use price_pair::PricePair;
pub use report::{PriceRecommendation, RunArtifacts, SimulationReport};
