//! Shared model types

use crate::api::Asset;
use crate::config::ConfigError;
use crate::logic::errors::ErrorType;

/// Cards per page, limited to a fixed set of sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
    NinetySix,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Twelve,
        PageSize::TwentyFour,
        PageSize::FortyEight,
        PageSize::NinetySix,
    ];

    pub fn get(&self) -> usize {
        match self {
            PageSize::Twelve => 12,
            PageSize::TwentyFour => 24,
            PageSize::FortyEight => 48,
            PageSize::NinetySix => 96,
        }
    }

    /// Closest supported size (ties go to the smaller one)
    pub fn nearest(value: usize) -> Self {
        let mut best = PageSize::Twelve;
        for size in PageSize::ALL {
            if size.get().abs_diff(value) < best.get().abs_diff(value) {
                best = size;
            }
        }
        best
    }

    /// Next size, wrapping back to the smallest
    pub fn cycle(&self) -> Self {
        match self {
            PageSize::Twelve => PageSize::TwentyFour,
            PageSize::TwentyFour => PageSize::FortyEight,
            PageSize::FortyEight => PageSize::NinetySix,
            PageSize::NinetySix => PageSize::Twelve,
        }
    }
}

/// Which fetch a failure belongs to, so retry re-issues the right one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Locales,
    Assets,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogError {
    /// Host parameters missing; no request is ever sent
    Configuration(ConfigError),
    /// Network or API failure for one stage
    Fetch {
        stage: FetchStage,
        kind: ErrorType,
        message: String,
    },
}

impl DialogError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, DialogError::Fetch { .. })
    }
}

/// Dialog state machine: `Idle → LoadingLocales → LoadingAssets → Ready ⇄ Error`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogPhase {
    #[default]
    Idle,
    LoadingLocales,
    LoadingAssets,
    Ready,
    Error(DialogError),
}

impl DialogPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, DialogPhase::LoadingLocales | DialogPhase::LoadingAssets)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DialogPhase::Idle => "Idle",
            DialogPhase::LoadingLocales => "Loading locales",
            DialogPhase::LoadingAssets => "Loading assets",
            DialogPhase::Ready => "Ready",
            DialogPhase::Error(_) => "Error",
        }
    }
}

/// How the dialog was closed
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Saved(Vec<Asset>),
    Cancelled,
}

impl DialogOutcome {
    /// The list handed to the host; cancelling yields an empty list
    pub fn into_selection(self) -> Vec<Asset> {
        match self {
            DialogOutcome::Saved(selection) => selection,
            DialogOutcome::Cancelled => Vec::new(),
        }
    }
}
