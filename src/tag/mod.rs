pub mod error;
pub mod identity;
pub mod invariants;
pub mod types;

pub use error::{TagError, TagErrorKind};
pub use identity::{Clock, FixedClock, IdSource, SequentialIdSource, SystemClock, UuidIdSource};
pub use invariants::{TagRule, Violation, check_draft};
pub use types::{
    CognitiveTag, DEFAULT_GOVERNING_RULE, DEFAULT_MEMORY_LINK, DEFAULT_THOUGHT_STREAM, EmotionTone,
    EntityId, MentalState, ResonanceMap, TagDraft, TemporalContext, TemporalHorizon,
    UnknownLiteral,
};
