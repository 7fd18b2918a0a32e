pub mod landscape;
pub mod session;
pub mod sweeps;

pub use landscape::DebtLandscape;
pub use session::{Mode, ParamKind, Params, Regime, Session, Summary};
