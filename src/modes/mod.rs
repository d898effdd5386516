pub mod arcade;
pub mod cadence;

pub use arcade::{FrameOutcome, GameLoop};
pub use cadence::CadenceGate;
