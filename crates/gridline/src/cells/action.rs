//! Action tokens and their preset presentation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of actions an action cell can trigger.
///
/// Parsing is lenient: case is ignored and `_`, `-` and spaces are
/// interchangeable, so `"Add Data"`, `"add_data"` and `"ADD-DATA"` all name
/// [`ActionKind::AddData`]. Unknown tokens parse as [`ActionKind::Open`]
/// through [`ActionKind::parse_or_default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Upload,
    Validate,
    Generate,
    Setup,
    Download,
    AddData,
    RunValuation,
    #[default]
    Open,
}

/// Icon, label and color an action renders with when not overridden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionPreset {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl ActionKind {
    /// Every action, in declaration order.
    pub const ALL: [ActionKind; 8] = [
        ActionKind::Upload,
        ActionKind::Validate,
        ActionKind::Generate,
        ActionKind::Setup,
        ActionKind::Download,
        ActionKind::AddData,
        ActionKind::RunValuation,
        ActionKind::Open,
    ];

    /// Canonical token, as reported to callbacks.
    pub fn token(self) -> &'static str {
        match self {
            ActionKind::Upload => "upload",
            ActionKind::Validate => "validate",
            ActionKind::Generate => "generate",
            ActionKind::Setup => "setup",
            ActionKind::Download => "download",
            ActionKind::AddData => "add-data",
            ActionKind::RunValuation => "run-valuation",
            ActionKind::Open => "open",
        }
    }

    pub fn preset(self) -> ActionPreset {
        let (icon, label, color) = match self {
            ActionKind::Upload => ("upload", "Upload", "primary"),
            ActionKind::Validate => ("check-circle", "Validate", "success"),
            ActionKind::Generate => ("sparkles", "Generate", "primary"),
            ActionKind::Setup => ("settings", "Setup", "neutral"),
            ActionKind::Download => ("download", "Download", "neutral"),
            ActionKind::AddData => ("plus", "Add Data", "primary"),
            ActionKind::RunValuation => ("play", "Run Valuation", "success"),
            ActionKind::Open => ("external-link", "Open", "neutral"),
        };
        ActionPreset { icon, label, color }
    }

    /// Parses a token, falling back to [`ActionKind::Open`].
    pub fn parse_or_default(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned for tokens outside the action set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        ActionKind::ALL
            .into_iter()
            .find(|a| a.token() == normalized)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_preset() {
        let preset = ActionKind::Upload.preset();
        assert_eq!(preset.label, "Upload");
        assert_eq!(preset.icon, "upload");
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!("UPLOAD".parse::<ActionKind>(), Ok(ActionKind::Upload));
        assert_eq!("add_data".parse::<ActionKind>(), Ok(ActionKind::AddData));
        assert_eq!("Add Data".parse::<ActionKind>(), Ok(ActionKind::AddData));
        assert_eq!(" run-valuation ".parse::<ActionKind>(), Ok(ActionKind::RunValuation));
    }

    #[test]
    fn unknown_tokens_fall_back_to_open() {
        assert_eq!(
            "launch".parse::<ActionKind>(),
            Err(UnknownAction("launch".to_string()))
        );
        assert_eq!(ActionKind::parse_or_default("launch"), ActionKind::Open);
        assert_eq!(ActionKind::parse_or_default(""), ActionKind::Open);
    }

    #[test]
    fn tokens_round_trip_through_parse() {
        for action in ActionKind::ALL {
            assert_eq!(action.token().parse::<ActionKind>(), Ok(action));
        }
    }

    #[test]
    fn serde_uses_tokens() {
        let json = serde_json::to_string(&ActionKind::RunValuation).unwrap();
        assert_eq!(json, r#""run-valuation""#);
    }
}
