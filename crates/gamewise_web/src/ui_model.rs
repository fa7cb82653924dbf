//! Presentation metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! styling hooks on the host.

use gamewise::content::{INSIGHT_HEADING, REAL_WORLD_HEADING, SITUATION_HEADING, STRATEGY_HEADING};

pub fn tab_class(active: bool) -> &'static str {
    if active {
        "gw-tab active"
    } else {
        "gw-tab"
    }
}

pub fn card_class(selected: bool) -> &'static str {
    if selected {
        "gw-scenario-card selected"
    } else {
        "gw-scenario-card"
    }
}

/// The four colored blocks of the scenario detail panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelBlock {
    Situation,
    Insight,
    Strategy,
    RealWorld,
}

impl PanelBlock {
    pub fn heading(self) -> &'static str {
        match self {
            PanelBlock::Situation => SITUATION_HEADING,
            PanelBlock::Insight => INSIGHT_HEADING,
            PanelBlock::Strategy => STRATEGY_HEADING,
            PanelBlock::RealWorld => REAL_WORLD_HEADING,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            PanelBlock::Situation => "gw-block tone-yellow",
            PanelBlock::Insight => "gw-block tone-green",
            PanelBlock::Strategy => "gw-block tone-purple",
            PanelBlock::RealWorld => "gw-block tone-blue",
        }
    }

    pub fn all() -> &'static [PanelBlock] {
        &[
            PanelBlock::Situation,
            PanelBlock::Insight,
            PanelBlock::Strategy,
            PanelBlock::RealWorld,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_idle_classes_differ() {
        assert_ne!(tab_class(true), tab_class(false));
        assert_ne!(card_class(true), card_class(false));
        assert!(tab_class(true).starts_with(tab_class(false)));
        assert!(card_class(true).starts_with(card_class(false)));
    }

    #[test]
    fn panel_blocks_follow_reading_order() {
        let headings: Vec<&str> = PanelBlock::all().iter().map(|b| b.heading()).collect();
        assert_eq!(
            headings,
            [
                "The Situation",
                "Game Theory Insight",
                "Strategic Approach",
                "Real-World Impact",
            ]
        );

        let mut classes: Vec<&str> = PanelBlock::all().iter().map(|b| b.class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }
}
