//! Video inserter: puts the demo recordings on their slides.
//!
//! Each [`VideoSlot`] names the slide a recording belongs on. Recordings
//! found in the videos directory are embedded; missing or unusable ones are
//! replaced by a placeholder describing how to add them by hand. The input
//! deck is never modified; the result is saved as `<stem>_con_videos.<ext>`.

pub mod inserter;
pub mod mapping;
pub mod placeholder;

pub use inserter::{
    DEFAULT_INPUT, DEFAULT_SUFFIX, DEFAULT_VIDEOS_DIR, InsertConfig, InsertReport, SlotOutcome,
    SlotReport, VideoInserter, derive_output_path,
};
pub use mapping::{VIDEO_SLOTS, VideoSlot};
