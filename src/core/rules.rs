//! # Ranking rules
//!
//! Two house-rule switches that change how hands are classified and how
//! ties are broken. Both default to off, which reproduces the classic
//! behaviour of this crate:
//!
//! - `ace_low_straights`: when off, `A-5-4-3-2` is only ace high. When on it
//!   is a five high straight (or straight flush).
//! - `resolve_kickers`: when off, four of a kind, full houses and three of a
//!   kind are decided by the value of the largest group alone and otherwise
//!   tie. When on, the remaining groups are compared as well.
//!
//! ## Loading from JSON
//!
//! Every field is optional.
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use five_card_showdown::core::RankingRules;
//!
//! let rules = RankingRules::from_json(r#"{"ace_low_straights": true}"#).unwrap();
//! assert!(rules.ace_low_straights);
//! assert!(!rules.resolve_kickers);
//! # }
//! ```

#[cfg(feature = "serde")]
use std::{io::ErrorKind, path::Path};

#[cfg(feature = "serde")]
use thiserror::Error;
#[cfg(feature = "serde")]
use tracing::debug;

/// Switches for the optional poker rules.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RankingRules {
    /// Count `A-5-4-3-2` as the lowest straight.
    pub ace_low_straights: bool,
    /// Look past the largest group when breaking quads, full house and trips
    /// ties.
    pub resolve_kickers: bool,
}

impl RankingRules {
    /// The classic rules; same as `Default`.
    pub const fn reference() -> Self {
        Self {
            ace_low_straights: false,
            resolve_kickers: false,
        }
    }

    /// Rules as played in a card room: wheel straights and full kickers.
    pub const fn standard() -> Self {
        Self {
            ace_low_straights: true,
            resolve_kickers: true,
        }
    }

    pub const fn with_ace_low_straights(mut self, enabled: bool) -> Self {
        self.ace_low_straights = enabled;
        self
    }

    pub const fn with_resolve_kickers(mut self, enabled: bool) -> Self {
        self.resolve_kickers = enabled;
        self
    }
}

/// Errors that can occur while loading [`RankingRules`].
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum RulesConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "serde")]
impl RankingRules {
    /// Create from a JSON string
    pub fn from_json(json: &str) -> Result<Self, RulesConfigError> {
        let rules: RankingRules = serde_json::from_str(json)?;
        debug!(?rules, "Loaded ranking rules");
        Ok(rules)
    }

    /// Create from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RulesConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to parse as file path first, then as inline JSON
    pub fn from_str_or_file(input: &str) -> Result<Self, RulesConfigError> {
        match Self::from_file(input) {
            Ok(rules) => Ok(rules),
            Err(RulesConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                Self::from_json(input)
            }
            Err(err) => Err(err),
        }
    }
}
