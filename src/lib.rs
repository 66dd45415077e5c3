//! Rules engine for Scotland Yard: a hidden-movement pursuit game in which the
//! detectives hunt Mr X across a transport map.

pub mod error;
pub mod game;
