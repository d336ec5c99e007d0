//! Route modules, merged in `server::build_router`

pub mod customers;
pub mod health;
