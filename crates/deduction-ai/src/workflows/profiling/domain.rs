use serde::{Deserialize, Serialize};

/// Profiles that trigger the manipulation caution at any confidence.
pub const MANIPULATION_WATCHLIST: &[&str] = &[
    "Psychopathy",
    "Narcissism",
    "Machiavellianism",
    "Manipulator",
    "Dark_Persuasion",
    "Antisocial",
];

/// Profiles flagged as dangerous when reported at high confidence or above.
pub const PRIORITY_PROFILES: &[&str] = &[
    "Psychopathy",
    "Narcissism",
    "Machiavellianism",
    "Deception",
    "Manipulator",
    "Hostility",
];

/// Observation categories covered by the cue library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueCategory {
    PhysicalMarkers,
    BehavioralClusters,
    MicroExpressions,
    ForensicLinguistics,
    VocalMarkers,
    DarkTriadMarkers,
}

impl CueCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PhysicalMarkers,
            Self::BehavioralClusters,
            Self::MicroExpressions,
            Self::ForensicLinguistics,
            Self::VocalMarkers,
            Self::DarkTriadMarkers,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PhysicalMarkers => "Physical Markers",
            Self::BehavioralClusters => "Behavioral Clusters",
            Self::MicroExpressions => "Micro-Expressions",
            Self::ForensicLinguistics => "Forensic Linguistics",
            Self::VocalMarkers => "Vocal Markers",
            Self::DarkTriadMarkers => "Dark Triad Markers",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::PhysicalMarkers => "physical_markers",
            Self::BehavioralClusters => "behavioral_clusters",
            Self::MicroExpressions => "micro_expressions",
            Self::ForensicLinguistics => "forensic_linguistics",
            Self::VocalMarkers => "vocal_markers",
            Self::DarkTriadMarkers => "dark_triad_markers",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| normalized == category.key())
    }
}

/// Confidence bucket derived from a profile's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Critical,
    VeryHigh,
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical/Certain",
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Threat bucket derived from the same score thresholds as confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatTier {
    Extreme,
    High,
    Moderate,
    Low,
    Normal,
}

impl ThreatTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Extreme => "Extreme",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::Normal => "Normal",
        }
    }
}

/// Caller-supplied observation set for a single subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectObservation {
    #[serde(default)]
    pub observed_cues: Vec<String>,
    #[serde(default)]
    pub context_tags: Vec<String>,
}

impl SubjectObservation {
    /// Fold another observation set into this one, preserving recorded order.
    pub fn merge(&mut self, other: SubjectObservation) {
        self.observed_cues.extend(other.observed_cues);
        self.context_tags.extend(other.context_tags);
    }

    pub fn is_empty(&self) -> bool {
        self.observed_cues.is_empty() && self.context_tags.is_empty()
    }
}

/// Ranked entry in a subject assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReport {
    pub profile: &'static str,
    pub score: i16,
    pub confidence: ConfidenceTier,
    pub confidence_label: &'static str,
    pub threat: ThreatTier,
    pub threat_label: &'static str,
}

impl ProfileReport {
    /// Dangerous profile reported at high confidence or above.
    pub fn priority_alert(&self) -> bool {
        PRIORITY_PROFILES.contains(&self.profile)
            && matches!(
                self.confidence,
                ConfidenceTier::Critical | ConfidenceTier::VeryHigh | ConfidenceTier::High
            )
    }

    pub fn display_name(&self) -> String {
        self.profile.replace('_', " ")
    }
}

/// Contradiction between two simultaneously observed cues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictFinding {
    pub first_cue: &'static str,
    pub second_cue: &'static str,
    pub topic: &'static str,
    pub detail: &'static str,
}

impl ConflictFinding {
    pub fn summary(&self) -> String {
        format!("{}: {}", self.topic, self.detail)
    }
}

/// Full analysis output: ranked profiles plus incongruence findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectAssessment {
    pub profiles: Vec<ProfileReport>,
    pub findings: Vec<ConflictFinding>,
}

impl SubjectAssessment {
    /// Any watchlist profile present, regardless of confidence.
    pub fn manipulation_risk(&self) -> bool {
        self.profiles
            .iter()
            .any(|report| MANIPULATION_WATCHLIST.contains(&report.profile))
    }

    pub fn top_profiles(&self, limit: usize) -> &[ProfileReport] {
        &self.profiles[..self.profiles.len().min(limit)]
    }

    pub fn finding_summaries(&self) -> Vec<String> {
        self.findings.iter().map(ConflictFinding::summary).collect()
    }
}
