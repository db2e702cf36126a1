use serde::{Deserialize, Serialize};

use crate::tag::{
    error::{TagError, rejected},
    identity::{Clock, IdSource},
    types::{
        CognitiveTag, DEFAULT_CONSCIOUSNESS_LEVEL, DEFAULT_INTROSPECTIVE_DEPTH,
        MAX_COGNITIVE_LOAD, MIN_COGNITIVE_LOAD, MentalState, ResonanceMap, TagDraft,
    },
};

pub const CALM_MAX_LOAD: i64 = 7;
pub const CONFUSED_MIN_LOAD: i64 = 3;
pub const UNCERTAIN_MAX_CERTAINTY: f64 = 0.6;
pub const DECISIVE_MIN_CERTAINTY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagRule {
    LoadRange,
    CertaintyRange,
    ThoughtStreamPresent,
    MemoryLinkPresent,
    GoverningRulePresent,
    CalmLoadCeiling,
    ConfusedLoadFloor,
    UncertainCertaintyCeiling,
    DecisiveCertaintyFloor,
    /// A candidate value of the wrong type or an unknown literal. Raised while
    /// converting a candidate, before the rule list runs.
    FieldType,
}

impl TagRule {
    /// Rules relating two fields to each other, as opposed to single-field
    /// range and presence checks.
    pub fn is_cross_field(self) -> bool {
        matches!(
            self,
            Self::CalmLoadCeiling
                | Self::ConfusedLoadFloor
                | Self::UncertainCertaintyCeiling
                | Self::DecisiveCertaintyFloor
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: TagRule,
    pub fields: Vec<String>,
    pub message: String,
}

impl Violation {
    pub fn new(rule: TagRule, fields: &[&str], message: impl Into<String>) -> Self {
        Self {
            rule,
            fields: fields.iter().map(|field| field.to_string()).collect(),
            message: message.into(),
        }
    }
}

type RuleCheck = fn(&TagDraft) -> Option<Violation>;

/// Evaluated in order; every failing rule is reported.
const RULES: [RuleCheck; 9] = [
    check_load_range,
    check_certainty_range,
    check_thought_stream,
    check_memory_link,
    check_governing_rule,
    check_calm_load,
    check_confused_load,
    check_uncertain_certainty,
    check_decisive_certainty,
];

pub fn check_draft(draft: &TagDraft) -> Vec<Violation> {
    RULES.iter().filter_map(|rule| rule(draft)).collect()
}

fn check_load_range(draft: &TagDraft) -> Option<Violation> {
    (!(MIN_COGNITIVE_LOAD..=MAX_COGNITIVE_LOAD).contains(&draft.cognitive_load)).then(|| {
        Violation::new(
            TagRule::LoadRange,
            &["cognitive_load"],
            format!(
                "cognitive_load {} outside [{MIN_COGNITIVE_LOAD}, {MAX_COGNITIVE_LOAD}]",
                draft.cognitive_load
            ),
        )
    })
}

fn check_certainty_range(draft: &TagDraft) -> Option<Violation> {
    let certainty = draft.certainty_level;
    (!certainty.is_finite() || !(0.0..=1.0).contains(&certainty)).then(|| {
        Violation::new(
            TagRule::CertaintyRange,
            &["certainty_level"],
            format!("certainty_level {certainty} outside [0, 1]"),
        )
    })
}

fn check_present(rule: TagRule, field: &str, value: &str) -> Option<Violation> {
    value
        .trim()
        .is_empty()
        .then(|| Violation::new(rule, &[field], format!("{field} cannot be empty")))
}

fn check_thought_stream(draft: &TagDraft) -> Option<Violation> {
    check_present(
        TagRule::ThoughtStreamPresent,
        "thought_stream",
        &draft.thought_stream,
    )
}

fn check_memory_link(draft: &TagDraft) -> Option<Violation> {
    check_present(TagRule::MemoryLinkPresent, "memory_link", &draft.memory_link)
}

fn check_governing_rule(draft: &TagDraft) -> Option<Violation> {
    check_present(
        TagRule::GoverningRulePresent,
        "governing_rule",
        &draft.governing_rule,
    )
}

fn check_calm_load(draft: &TagDraft) -> Option<Violation> {
    (draft.mental_state == MentalState::Calm && draft.cognitive_load > CALM_MAX_LOAD).then(|| {
        Violation::new(
            TagRule::CalmLoadCeiling,
            &["mental_state", "cognitive_load"],
            format!(
                "calm state cannot carry cognitive_load {} (max {CALM_MAX_LOAD})",
                draft.cognitive_load
            ),
        )
    })
}

fn check_confused_load(draft: &TagDraft) -> Option<Violation> {
    (draft.mental_state == MentalState::Confused && draft.cognitive_load < CONFUSED_MIN_LOAD)
        .then(|| {
            Violation::new(
                TagRule::ConfusedLoadFloor,
                &["mental_state", "cognitive_load"],
                format!(
                    "confused state needs cognitive_load >= {CONFUSED_MIN_LOAD}, got {}",
                    draft.cognitive_load
                ),
            )
        })
}

fn check_uncertain_certainty(draft: &TagDraft) -> Option<Violation> {
    (draft.mental_state == MentalState::Uncertain
        && draft.certainty_level > UNCERTAIN_MAX_CERTAINTY)
        .then(|| {
            Violation::new(
                TagRule::UncertainCertaintyCeiling,
                &["mental_state", "certainty_level"],
                format!(
                    "uncertain state cannot carry certainty_level {} (max {UNCERTAIN_MAX_CERTAINTY})",
                    draft.certainty_level
                ),
            )
        })
}

fn check_decisive_certainty(draft: &TagDraft) -> Option<Violation> {
    (draft.mental_state == MentalState::Decisive
        && draft.certainty_level < DECISIVE_MIN_CERTAINTY)
        .then(|| {
            Violation::new(
                TagRule::DecisiveCertaintyFloor,
                &["mental_state", "certainty_level"],
                format!(
                    "decisive state needs certainty_level >= {DECISIVE_MIN_CERTAINTY}, got {}",
                    draft.certainty_level
                ),
            )
        })
}

impl CognitiveTag {
    /// Builds a tag from `draft`, stamping it with an id and creation time from
    /// the injected sources. No tag is produced when any rule fails.
    pub fn new(draft: TagDraft, clock: &dyn Clock, ids: &dyn IdSource) -> Result<Self, TagError> {
        let violations = check_draft(&draft);
        if !violations.is_empty() {
            return Err(rejected(violations));
        }

        let cognitive_load = u8::try_from(draft.cognitive_load)
            .map_err(|_| rejected(check_draft(&draft)))?;

        Ok(Self {
            entity_id: ids.next_id(),
            creation_moment: clock.now(),
            thought_stream: draft.thought_stream,
            mental_state: draft.mental_state,
            emotion_tone: draft.emotion_tone,
            cognitive_load,
            temporal_context: draft.temporal_context,
            certainty_level: draft.certainty_level,
            memory_link: draft.memory_link,
            governing_rule: draft.governing_rule,
            enhancement_suggestion: draft.enhancement_suggestion,
            diplomatic_enhancement: draft.diplomatic_enhancement,
            introspective_depth: DEFAULT_INTROSPECTIVE_DEPTH,
            consciousness_level: DEFAULT_CONSCIOUSNESS_LEVEL,
            consciousness_resonance: ResonanceMap::new(),
        })
    }
}
