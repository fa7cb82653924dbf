//! Projection of a [`ViewState`] onto what the page shows.
//!
//! [`render`] is pure: the same state always yields the same [`PageView`].
//! Front ends only draw a `PageView`; they never look at the content tables
//! directly.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::content::{
    self, PrincipleEntry, ScenarioEntry, ScenarioId, ToolkitTip, INTRO_BODY, INTRO_TITLE,
    PAGE_ICON, PAGE_SUBTITLE, PAGE_TITLE, PRINCIPLES, TOOLKIT, TOOLKIT_TITLE,
};
use crate::state::{Section, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PageView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub tabs: Vec<TabView>,
    pub body: SectionView,
    pub toolkit: ToolkitView,
}

impl PageView {
    /// The expanded scenario, if the scenarios section is showing one.
    pub fn detail(&self) -> Option<&DetailPanel> {
        match &self.body {
            SectionView::Scenarios(s) => s.detail.as_ref(),
            SectionView::Principles(_) => None,
        }
    }

    pub fn active_tab(&self) -> Option<&TabView> {
        self.tabs.iter().find(|t| t.active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TabView {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "section", rename_all = "snake_case"))]
pub enum SectionView {
    Principles(PrinciplesView),
    Scenarios(ScenariosView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PrinciplesView {
    pub intro_title: &'static str,
    pub intro_body: &'static str,
    pub principles: &'static [PrincipleEntry],
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScenariosView {
    pub cards: Vec<CardView>,
    pub detail: Option<DetailPanel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CardView {
    pub id: ScenarioId,
    pub title: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DetailPanel {
    pub id: ScenarioId,
    pub title: &'static str,
    pub icon: &'static str,
    pub situation: &'static str,
    pub insight: &'static str,
    pub strategy: &'static [&'static str],
    pub real_world: &'static str,
}

impl From<&'static ScenarioEntry> for DetailPanel {
    fn from(e: &'static ScenarioEntry) -> Self {
        Self {
            id: e.id,
            title: e.title,
            icon: e.id.icon(),
            situation: e.situation,
            insight: e.insight,
            strategy: e.strategy,
            real_world: e.real_world,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ToolkitView {
    pub title: &'static str,
    pub tips: &'static [ToolkitTip],
}

pub fn render(state: &ViewState) -> PageView {
    let active = state.active_section();

    let tabs = Section::all()
        .iter()
        .map(|&section| TabView {
            section,
            label: section.label(),
            active: section == active,
        })
        .collect();

    let body = match active {
        Section::Principles => SectionView::Principles(PrinciplesView {
            intro_title: INTRO_TITLE,
            intro_body: INTRO_BODY,
            principles: &PRINCIPLES,
        }),
        Section::Scenarios => {
            let selected = state.selected_scenario();
            let cards = content::scenarios()
                .map(|e| CardView {
                    id: e.id,
                    title: e.title,
                    icon: e.id.icon(),
                    selected: selected == Some(e.id),
                })
                .collect();
            SectionView::Scenarios(ScenariosView {
                cards,
                detail: state.selected_entry().map(DetailPanel::from),
            })
        }
    };

    PageView {
        title: PAGE_TITLE,
        subtitle: PAGE_SUBTITLE,
        icon: PAGE_ICON,
        tabs,
        body,
        toolkit: ToolkitView {
            title: TOOLKIT_TITLE,
            tips: &TOOLKIT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenarios_with(id: ScenarioId) -> ViewState {
        let mut s = ViewState::new();
        s.select_section(Section::Scenarios);
        s.select_scenario(id);
        s
    }

    #[test]
    fn initial_page_shows_principles_only() {
        let page = render(&ViewState::new());
        assert_eq!(page.active_tab().map(|t| t.section), Some(Section::Principles));
        assert!(page.detail().is_none());

        let SectionView::Principles(p) = &page.body else {
            panic!("expected principles body");
        };
        assert_eq!(p.intro_title, "What is Game Theory?");
        let titles: Vec<&str> = p.principles.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            [
                "Think Beyond Yourself",
                "Information is Power",
                "Long-term Reputation Matters",
                "Sometimes Cooperation Beats Competition",
            ]
        );
    }

    #[test]
    fn exactly_one_tab_is_active() {
        for &section in Section::all() {
            let mut s = ViewState::new();
            s.select_section(section);
            let page = render(&s);
            assert_eq!(page.tabs.len(), 2);
            assert_eq!(page.tabs.iter().filter(|t| t.active).count(), 1);
            assert_eq!(page.active_tab().map(|t| t.section), Some(section));
        }
    }

    #[test]
    fn scenarios_without_selection_render_cards_only() {
        let mut s = ViewState::new();
        s.select_section(Section::Scenarios);
        let page = render(&s);

        let SectionView::Scenarios(v) = &page.body else {
            panic!("expected scenarios body");
        };
        assert!(v.detail.is_none());
        let ids: Vec<ScenarioId> = v.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, ScenarioId::all());
        assert!(v.cards.iter().all(|c| !c.selected));
    }

    #[test]
    fn only_the_selected_card_is_highlighted() {
        let page = render(&scenarios_with(ScenarioId::Salary));
        let SectionView::Scenarios(v) = &page.body else {
            panic!("expected scenarios body");
        };
        let selected: Vec<ScenarioId> =
            v.cards.iter().filter(|c| c.selected).map(|c| c.id).collect();
        assert_eq!(selected, [ScenarioId::Salary]);
    }

    #[test]
    fn selection_is_hidden_while_principles_are_active() {
        let mut s = scenarios_with(ScenarioId::Teamwork);
        s.select_section(Section::Principles);
        assert!(render(&s).detail().is_none());

        s.select_section(Section::Scenarios);
        assert_eq!(render(&s).detail().map(|d| d.id), Some(ScenarioId::Teamwork));
    }

    #[test]
    fn footer_is_independent_of_state() {
        let a = render(&ViewState::new());
        let b = render(&scenarios_with(ScenarioId::Networking));
        assert_eq!(a.toolkit, b.toolkit);
        assert_eq!(a.toolkit.title, "Your Game Theory Toolkit");
        assert_eq!(a.title, b.title);
    }
}
