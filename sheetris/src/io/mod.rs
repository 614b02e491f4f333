/// External (serializable) representations of jobs and layouts
pub mod ext_repr;

/// Conversion of external jobs into thickness groups
pub mod import;

/// Conversion of layouts into their external representation
pub mod export;
