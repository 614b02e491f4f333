//! Deterministic 2D rectangle packing of sheet-material parts.
//!
//! Pieces are packed onto identical rectangular sheets with a uniform kerf between them,
//! using one of three interchangeable strategies ([`Algorithm::MaxRects`],
//! [`Algorithm::Guillotine`], [`Algorithm::Skyline`]).
//! New sheets are opened on overflow, pieces that can never fit are reported as unplaced.

/// Entities of a packing run: pieces, sheets, placements and their configuration
pub mod entities;

/// Domain errors of the packing engine
pub mod error;

/// Per-sheet bookkeeping of the regions still available for placement
pub mod free_space;

/// Geometric primitives
pub mod geometry;

/// Importing jobs into and exporting layouts out of this library
pub mod io;

/// Stable ordering of the pieces before packing
pub mod ordering;

/// The three packing strategies behind one contract
pub mod packers;

/// Sheet allocation, layout assembly and (parallel) packing of thickness groups
pub mod packing;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use entities::{Algorithm, PackConfig};
#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use packing::{GroupLayout, LayoutResult, pack_group, pack_groups, pack_pieces};
