//! Animated "brain network" illustration.
//!
//! Draws a fixed layered diagram into an SVG and animates it with four
//! independent decorative effects:
//! - Particle travel along edges (off unless enabled in the config)
//! - Wave highlights over a random layer's outgoing edges
//! - Flashing weight labels
//! - Ripple rings pulsing out from nodes, staggered layer by layer
//!
//! Setup is one-directional: [`layout`] places the nodes, [`connections`]
//! joins adjacent layers and draws everything, and the [`scheduler`] then
//! mutates only transient presentation state.
//!
//! # Example
//!
//! ```ignore
//! use neural_portfolio::components::brain_network::{BrainNetwork, NetworkConfig};
//!
//! let mut config = NetworkConfig::default();
//! config.effects.particles_enabled = true;
//!
//! view! { <BrainNetwork config=config /> }
//! ```

mod component;
pub mod config;
pub mod connections;
pub mod easing;
pub mod effects;
pub mod layout;
pub mod random;
pub mod scene;
pub mod scheduler;
#[cfg(test)]
mod testing;
pub mod theme;
mod types;

pub use component::BrainNetwork;
pub use config::{EffectConfig, LayerCompression, LayoutConfig, NetworkConfig};
pub use random::{JsRandom, RandomSource, SequenceRandom};
pub use scene::{Scene, SceneLayer, SvgScene};
pub use scheduler::EffectScheduler;
pub use types::{Edge, HighlightCategory, Node, NodeRole, format_weight};
