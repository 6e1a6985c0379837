mod delta_hedge;
pub mod error;

pub use delta_hedge::{
    reference_schedule, DeltaHedgeSimulator, HedgeRunResult, HedgeSetup, HedgeSnapshot,
    InitialValuation, RebalanceRecord,
};
