//! Activity catalogue: the fixed set of activities the app offers.
//!
//! Identifiers are the kebab-case strings the UI routes on. Parsing an
//! unknown identifier is an error; there is no fallback activity.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Catalogue lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Grouping used by the UI's navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Games,
    Activities,
    Community,
    Support,
    Progress,
}

impl ActivityCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Activities => "activities",
            Self::Community => "community",
            Self::Support => "support",
            Self::Progress => "progress",
        }
    }
}

impl FromStr for ActivityCategory {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "games" => Ok(Self::Games),
            "activities" => Ok(Self::Activities),
            "community" => Ok(Self::Community),
            "support" => Ok(Self::Support),
            "progress" => Ok(Self::Progress),
            other => Err(CatalogueError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every activity in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    MemoryMatch,
    EmotionDetective,
    WordBuilder,
    CatchTheStars,
    DailyRoutine,
    SocialStories,
    ParentCommunity,
    AiAssistant,
    VideoConsultation,
    ProgressDashboard,
    AiVideoCoach,
}

/// Static metadata for one activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ActivityCategory,
    pub description: &'static str,
    pub target_skills: &'static [&'static str],
}

impl ActivityKind {
    /// Catalogue in display order.
    pub const ALL: [ActivityKind; 11] = [
        Self::MemoryMatch,
        Self::EmotionDetective,
        Self::WordBuilder,
        Self::CatchTheStars,
        Self::DailyRoutine,
        Self::SocialStories,
        Self::ParentCommunity,
        Self::AiAssistant,
        Self::VideoConsultation,
        Self::ProgressDashboard,
        Self::AiVideoCoach,
    ];

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn category(self) -> ActivityCategory {
        self.info().category
    }

    pub fn info(self) -> ActivityInfo {
        use ActivityCategory::*;

        match self {
            Self::MemoryMatch => entry(
                "memory-match",
                "Memory Match",
                Games,
                "Boost cognitive skills with engaging memory challenges",
                &["memory", "concentration", "pattern-recognition"],
            ),
            Self::EmotionDetective => entry(
                "emotion-detective",
                "Emotion Detective",
                Games,
                "Master emotional intelligence through interactive scenarios",
                &["emotional-intelligence", "social-skills"],
            ),
            Self::WordBuilder => entry(
                "word-builder",
                "Word Builder",
                Games,
                "Develop speech and vocabulary with fun word puzzles",
                &["speech", "vocabulary", "communication"],
            ),
            Self::CatchTheStars => entry(
                "catch-the-stars",
                "Catch the Stars",
                Games,
                "Enhance motor skills and hand-eye coordination",
                &["motor-skills", "hand-eye-coordination"],
            ),
            Self::DailyRoutine => entry(
                "daily-routine",
                "Daily Routine",
                Activities,
                "Build independence with structured daily schedules",
                &["organization", "independence"],
            ),
            Self::SocialStories => entry(
                "social-stories",
                "Social Stories",
                Activities,
                "Learn social skills through interactive storytelling",
                &["social-interaction", "communication"],
            ),
            Self::ParentCommunity => entry(
                "parent-community",
                "Parent Circle",
                Community,
                "Connect with supportive parent community",
                &[],
            ),
            Self::AiAssistant => entry(
                "ai-assistant",
                "AI Companion",
                Support,
                "24/7 intelligent guidance and personalized support",
                &[],
            ),
            Self::VideoConsultation => entry(
                "video-consultation",
                "Expert Connect",
                Support,
                "Schedule sessions with certified therapists",
                &[],
            ),
            Self::ProgressDashboard => entry(
                "progress-dashboard",
                "Progress Analytics",
                Progress,
                "Track growth with detailed insights and reports",
                &[],
            ),
            Self::AiVideoCoach => entry(
                "ai-video-coach",
                "AI Video Coach",
                Support,
                "Real-time AI monitoring with voice and gesture guidance",
                &["all-skills", "real-time-feedback"],
            ),
        }
    }
}

const fn entry(
    id: &'static str,
    name: &'static str,
    category: ActivityCategory,
    description: &'static str,
    target_skills: &'static [&'static str],
) -> ActivityInfo {
    ActivityInfo {
        id,
        name,
        category,
        description,
        target_skills,
    }
}

impl FromStr for ActivityKind {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| CatalogueError::UnknownActivity(s.to_string()))
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Catalogue entries, optionally restricted to one category.
pub fn by_category(category: Option<ActivityCategory>) -> Vec<ActivityInfo> {
    ActivityKind::ALL
        .into_iter()
        .filter(|kind| category.is_none_or(|c| kind.category() == c))
        .map(ActivityKind::info)
        .collect()
}
