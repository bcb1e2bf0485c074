//! Domain entities exposed by the browse service layer.

pub mod filter;
pub mod skill;
