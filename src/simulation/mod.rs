pub mod states;
pub mod params;
pub mod forces;
pub mod energy;
pub mod integrator;
pub mod scenario;
