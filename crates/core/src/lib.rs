//! Loading, grouping and rendering for face-cluster inspection.
//!
//! Data flows artifact → grouping → rendering; `pipeline` wires the steps
//! together for a presentation layer that owns a [`pipeline::view_state::ViewState`].

pub mod artifact;
pub mod grouping;
pub mod pipeline;
pub mod rendering;
pub mod shared;
pub mod thumbnail;
