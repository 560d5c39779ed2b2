use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StageKey
// ---------------------------------------------------------------------------

/// The five phases of the sales cycle, in order. One `Stage` record exists
/// per key; the set is fixed at init and only the content is editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKey {
    Discover,
    Qualify,
    Demonstrate,
    Propose,
    Close,
}

impl StageKey {
    pub fn all() -> &'static [StageKey] {
        &[
            StageKey::Discover,
            StageKey::Qualify,
            StageKey::Demonstrate,
            StageKey::Propose,
            StageKey::Close,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StageKey::Discover => "discover",
            StageKey::Qualify => "qualify",
            StageKey::Demonstrate => "demonstrate",
            StageKey::Propose => "propose",
            StageKey::Close => "close",
        }
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StageKey {
    type Err = crate::error::PlaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discover" => Ok(StageKey::Discover),
            "qualify" => Ok(StageKey::Qualify),
            "demonstrate" => Ok(StageKey::Demonstrate),
            "propose" => Ok(StageKey::Propose),
            "close" => Ok(StageKey::Close),
            _ => Err(crate::error::PlaybookError::StageNotFound(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ResourceType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Doc,
    Deck,
    CaseStudy,
    Video,
    Tool,
    Link,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Doc => "doc",
            ResourceType::Deck => "deck",
            ResourceType::CaseStudy => "case_study",
            ResourceType::Video => "video",
            ResourceType::Tool => "tool",
            ResourceType::Link => "link",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = crate::error::PlaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doc" => Ok(ResourceType::Doc),
            "deck" => Ok(ResourceType::Deck),
            "case_study" | "case-study" => Ok(ResourceType::CaseStudy),
            "video" => Ok(ResourceType::Video),
            "tool" => Ok(ResourceType::Tool),
            "link" => Ok(ResourceType::Link),
            _ => Err(crate::error::PlaybookError::InvalidResourceType(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ListKind
// ---------------------------------------------------------------------------

/// The three managed vocabularies: free-form tags, resource categories,
/// and lines of business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Tags,
    Categories,
    Lobs,
}

impl ListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Tags => "tags",
            ListKind::Categories => "categories",
            ListKind::Lobs => "lobs",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListKind {
    type Err = crate::error::PlaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tags" => Ok(ListKind::Tags),
            "categories" => Ok(ListKind::Categories),
            "lobs" => Ok(ListKind::Lobs),
            _ => Err(crate::error::PlaybookError::InvalidListKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
