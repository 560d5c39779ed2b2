use crate::types::StageKey;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Objection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objection {
    pub objection: String,
    pub response: String,
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// One phase of the sales cycle: discovery questions to ask, objections with
/// canned responses, and links (by id) into the resource library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub key: StageKey,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub objections: Vec<Objection>,
    #[serde(default)]
    pub resource_ids: Vec<String>,
}

impl Stage {
    pub fn new(key: StageKey, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            summary: summary.into(),
            questions: Vec::new(),
            objections: Vec::new(),
            resource_ids: Vec::new(),
        }
    }

    pub fn add_question(&mut self, question: impl Into<String>) {
        self.questions.push(question.into());
    }

    pub fn add_objection(&mut self, objection: impl Into<String>, response: impl Into<String>) {
        self.objections.push(Objection {
            objection: objection.into(),
            response: response.into(),
        });
    }

    /// Link a resource, skipping ids already present.
    pub fn link_resource(&mut self, id: &str) {
        if !self.resource_ids.iter().any(|r| r == id) {
            self.resource_ids.push(id.to_string());
        }
    }

    pub fn unlink_resource(&mut self, id: &str) {
        self.resource_ids.retain(|r| r != id);
    }
}

/// The seed content written at init: every stage key present, with starter
/// questions the admin panel can edit or extend.
pub fn default_stages() -> Vec<Stage> {
    let mut discover = Stage::new(
        StageKey::Discover,
        "Discover",
        "Understand the prospect's world before pitching anything.",
    );
    discover.add_question("What does your current workflow look like end to end?");
    discover.add_question("Where does your team lose the most time today?");
    discover.add_question("Who else is affected when this process breaks?");

    let mut qualify = Stage::new(
        StageKey::Qualify,
        "Qualify",
        "Confirm budget, authority, need, and timeline.",
    );
    qualify.add_question("Who signs off on a purchase like this?");
    qualify.add_question("Is there budget allocated this quarter?");
    qualify.add_objection(
        "We already have a tool for this",
        "Ask what the current tool fails to cover, then map those gaps to our differentiators.",
    );

    let mut demonstrate = Stage::new(
        StageKey::Demonstrate,
        "Demonstrate",
        "Show the product against the pains surfaced in discovery.",
    );
    demonstrate.add_question("Which of the workflows we discussed should the demo focus on?");

    let mut propose = Stage::new(
        StageKey::Propose,
        "Propose",
        "Deliver a proposal anchored to quantified value.",
    );
    propose.add_objection(
        "The price is too high",
        "Restate the cost of the status quo in their own numbers before discussing discounts.",
    );

    let close = Stage::new(
        StageKey::Close,
        "Close",
        "Handle procurement, legal, and launch logistics.",
    );

    vec![discover, qualify, demonstrate, propose, close]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
