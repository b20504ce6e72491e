pub mod notify;
pub mod state;
