//! Testing utilities for Chatkit layouts
//!
//! In-memory collaborators for driving a `MessagesLayout` in tests, plus
//! tolerance-based geometry assertions.

pub mod assertions;
pub mod fixtures;
pub mod measurer;

pub use fixtures::*;
pub use measurer::CountingMeasurer;

pub mod prelude {
    pub use crate::assertions;
    pub use crate::assertions::{assert_approx_eq, assert_frames_within, assert_rect_approx_eq};
    pub use crate::fixtures::{
        FixedFontDisplayDelegate, MessageFactory, RecordingLayoutDelegate, TestDataSource,
    };
    pub use crate::measurer::CountingMeasurer;
}
