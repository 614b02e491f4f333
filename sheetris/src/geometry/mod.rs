/// Enums describing the geometric relation between primitives
pub mod geo_enums;

/// Traits shared by the geometric primitives
pub mod geo_traits;

/// Point and axis-aligned rectangle
pub mod primitives;
