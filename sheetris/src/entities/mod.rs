mod config;
mod group;
mod piece;
mod placement;
mod sheet;

#[doc(inline)]
pub use config::Algorithm;

#[doc(inline)]
pub use config::PackConfig;

#[doc(inline)]
pub use group::ThicknessGroup;

#[doc(inline)]
pub use piece::Piece;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use sheet::SheetKey;
