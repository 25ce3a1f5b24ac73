//! Reusable page components.

pub mod brain_network;
pub mod site;
