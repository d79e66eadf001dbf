pub mod classify;
pub mod score;
pub mod session;
