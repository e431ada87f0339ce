pub mod roles;
pub mod segmenter;
pub mod session;
pub mod structured;

pub use roles::Role;
pub use segmenter::{segment, FixedMarkers, MarkerSet, SegmentOptions, SegmentSource, SegmentStrategy};
pub use session::{word_count, ParsedSession, Turn};
