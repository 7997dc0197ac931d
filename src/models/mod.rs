//! Hand authored meshes
mod propeller;

pub use propeller::{mesh_vertices, PropellerRenderer, COLORS, INDICES, POSITIONS};
