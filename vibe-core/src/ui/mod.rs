pub mod cards;
pub mod session;
pub mod state;
