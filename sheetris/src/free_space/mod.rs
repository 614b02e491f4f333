mod free_rects;
mod skyline;

#[doc(inline)]
pub use free_rects::FreeRects;

#[doc(inline)]
pub use skyline::Skyline;

#[doc(inline)]
pub use skyline::SkylineFit;

#[doc(inline)]
pub use skyline::SkylineSegment;
