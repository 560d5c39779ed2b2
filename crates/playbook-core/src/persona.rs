use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Persona
// ---------------------------------------------------------------------------

/// A buyer role the sales team pitches to: who they are, what keeps them up
/// at night, and what to lead with. Personas live inside the guide blob and
/// are persisted through `GuideState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_summary: Option<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub talking_points: Vec<String>,
    /// Line of business this persona belongs to, validated against the
    /// managed `lobs` vocabulary by callers that care.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lob: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Persona {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            slug: slug.into(),
            title: title.into(),
            role_summary: None,
            concerns: Vec::new(),
            talking_points: Vec::new(),
            lob: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_concern(&mut self, concern: impl Into<String>) {
        self.concerns.push(concern.into());
        self.updated_at = Utc::now();
    }

    pub fn add_talking_point(&mut self, point: impl Into<String>) {
        self.talking_points.push(point.into());
        self.updated_at = Utc::now();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.updated_at = Utc::now();
    }

    pub fn set_role_summary(&mut self, summary: Option<String>) {
        self.role_summary = summary;
        self.updated_at = Utc::now();
    }

    pub fn set_lob(&mut self, lob: Option<String>) {
        self.lob = lob;
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
