//! Web form front end for photokey.

pub mod api;
pub mod state;
