//! View state and its update function.
//!
//! The guide holds exactly two pieces of state: which top-level section is
//! shown and which scenario (if any) is expanded. Both fields change only
//! through [`ViewState::update`]; the fields are independent of each other.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{ScenarioEntry, ScenarioId};
use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Section {
    #[default]
    Principles,
    Scenarios,
}

impl Section {
    pub fn key(self) -> &'static str {
        match self {
            Section::Principles => "principles",
            Section::Scenarios => "scenarios",
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Section::Principles => "Key Principles",
            Section::Scenarios => "Real Scenarios",
        }
    }

    /// Tabs in display order.
    pub fn all() -> &'static [Section] {
        &[Section::Principles, Section::Scenarios]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // `basics` is the older name of the principles tab.
            "principles" | "basics" => Ok(Section::Principles),
            "scenarios" => Ok(Section::Scenarios),
            other => Err(GuideError::UnknownSection(other.to_string())),
        }
    }
}

/// A user input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    SelectSection(Section),
    SelectScenario(ScenarioId),
}

/// The whole mutable state of the guide.
///
/// There is intentionally no way to clear a selection: once a scenario has
/// been opened, the scenarios section keeps showing a detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewState {
    active_section: Section,
    selected_scenario: Option<ScenarioId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn selected_scenario(&self) -> Option<ScenarioId> {
        self.selected_scenario
    }

    pub fn selected_entry(&self) -> Option<&'static ScenarioEntry> {
        self.selected_scenario.map(ScenarioId::entry)
    }

    /// Pure transition: returns the state after `msg`.
    #[must_use]
    pub fn update(self, msg: Msg) -> Self {
        match msg {
            Msg::SelectSection(section) => {
                debug!(section = section.key(), "select section");
                Self {
                    active_section: section,
                    ..self
                }
            }
            Msg::SelectScenario(id) => {
                debug!(scenario = id.key(), "select scenario");
                Self {
                    selected_scenario: Some(id),
                    ..self
                }
            }
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        *self = self.update(msg);
    }

    pub fn select_section(&mut self, section: Section) {
        self.dispatch(Msg::SelectSection(section));
    }

    pub fn select_scenario(&mut self, id: ScenarioId) {
        self.dispatch(Msg::SelectScenario(id));
    }

    /// String-keyed variant of [`ViewState::select_scenario`].
    ///
    /// On an unknown key the state is left untouched.
    pub fn select_scenario_key(&mut self, key: &str) -> Result<ScenarioId, GuideError> {
        let id = key.parse::<ScenarioId>()?;
        self.select_scenario(id);
        Ok(id)
    }
}
