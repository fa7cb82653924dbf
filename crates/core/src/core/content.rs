//! Static guide content.
//!
//! Everything in here is fixed at compile time and never mutated. Scenarios
//! are addressed through the closed [`ScenarioId`] enumeration, so a lookup
//! can never miss once an id exists; string keys are only parsed at the edges.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GuideError;

pub const PAGE_TITLE: &str = "Game Theory for Your Future";
pub const PAGE_SUBTITLE: &str = "Learn how strategic thinking can help you make better decisions about school, career, and life.";
pub const PAGE_ICON: &str = "📖";

pub const INTRO_TITLE: &str = "What is Game Theory?";
pub const INTRO_BODY: &str = "Game theory is about making smart decisions when other people's choices affect your outcomes. It's not about \"gaming the system\" - it's about understanding that your success often depends on predicting and responding to what others will do.";

pub const SITUATION_HEADING: &str = "The Situation";
pub const INSIGHT_HEADING: &str = "Game Theory Insight";
pub const STRATEGY_HEADING: &str = "Strategic Approach";
pub const REAL_WORLD_HEADING: &str = "Real-World Impact";

pub const TOOLKIT_TITLE: &str = "Your Game Theory Toolkit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScenarioId {
    College,
    Internship,
    Salary,
    Teamwork,
    Networking,
}

impl ScenarioId {
    /// Stable string key, as used on the command line and in exports.
    pub fn key(self) -> &'static str {
        match self {
            ScenarioId::College => "college",
            ScenarioId::Internship => "internship",
            ScenarioId::Salary => "salary",
            ScenarioId::Teamwork => "teamwork",
            ScenarioId::Networking => "networking",
        }
    }

    /// Name of the decorative glyph shown next to the scenario title.
    pub fn icon_name(self) -> &'static str {
        match self {
            ScenarioId::College => "graduation-cap",
            ScenarioId::Internship => "briefcase",
            ScenarioId::Salary => "dollar-sign",
            ScenarioId::Teamwork => "users",
            ScenarioId::Networking => "trophy",
        }
    }

    /// Emoji stand-in for [`ScenarioId::icon_name`].
    pub fn icon(self) -> &'static str {
        match self {
            ScenarioId::College => "🎓",
            ScenarioId::Internship => "💼",
            ScenarioId::Salary => "💵",
            ScenarioId::Teamwork => "👥",
            ScenarioId::Networking => "🏆",
        }
    }

    pub fn entry(self) -> &'static ScenarioEntry {
        match self {
            ScenarioId::College => &COLLEGE,
            ScenarioId::Internship => &INTERNSHIP,
            ScenarioId::Salary => &SALARY,
            ScenarioId::Teamwork => &TEAMWORK,
            ScenarioId::Networking => &NETWORKING,
        }
    }

    /// All scenarios, in display order.
    pub fn all() -> &'static [ScenarioId] {
        &[
            ScenarioId::College,
            ScenarioId::Internship,
            ScenarioId::Salary,
            ScenarioId::Teamwork,
            ScenarioId::Networking,
        ]
    }

    pub(crate) fn key_list() -> String {
        ScenarioId::all()
            .iter()
            .map(|id| id.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioId {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioId::all()
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| GuideError::UnknownScenario(s.to_string()))
    }
}

/// One real-world situation with its game-theory reading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScenarioEntry {
    pub id: ScenarioId,
    pub title: &'static str,
    pub situation: &'static str,
    pub insight: &'static str,
    pub strategy: &'static [&'static str],
    pub real_world: &'static str,
}

impl ScenarioEntry {
    pub fn key(&self) -> &'static str {
        self.id.key()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PrincipleEntry {
    pub title: &'static str,
    pub description: &'static str,
}

/// A general tip from the footer toolkit; shown regardless of view state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ToolkitTip {
    pub title: &'static str,
    pub body: &'static str,
}

static COLLEGE: ScenarioEntry = ScenarioEntry {
    id: ScenarioId::College,
    title: "College Application Strategy",
    situation: "You're applying to colleges. Do you apply to your dream school even though it's competitive?",
    insight: "This is a coordination game with asymmetric information. Other students are making similar decisions, but you don't know their strategies.",
    strategy: &[
        "Apply to a mix: reach schools, matches, and safeties",
        "Consider that if everyone thinks a school is 'too competitive,' it might actually be less competitive",
        "Your unique background might give you an edge others don't see",
    ],
    real_world: "Many students avoid applying to top schools, thinking they won't get in. This creates opportunities for those who do apply.",
};

static INTERNSHIP: ScenarioEntry = ScenarioEntry {
    id: ScenarioId::Internship,
    title: "Internship Competition",
    situation: "Limited internship spots at top companies. Should you apply for the most prestigious ones or safer options?",
    insight: "This is a multi-player competition game where your success depends on both your qualifications and others' choices.",
    strategy: &[
        "Apply broadly - don't put all eggs in one basket",
        "Build unique skills that differentiate you",
        "Network early - relationships matter as much as qualifications",
    ],
    real_world: "Students who only apply to Google/Apple often miss great opportunities at smaller companies with less competition.",
};

static SALARY: ScenarioEntry = ScenarioEntry {
    id: ScenarioId::Salary,
    title: "Salary Negotiation",
    situation: "You got a job offer! Should you negotiate the salary or accept what's offered?",
    insight: "This is a bargaining game. Both sides want a deal, but each wants the best terms possible.",
    strategy: &[
        "Research market rates - information is power",
        "Negotiate other benefits if salary is fixed",
        "Show enthusiasm while negotiating - you want the job",
    ],
    real_world: "Many entry-level workers leave money on the table. Even a small increase compounds over your career.",
};

static TEAMWORK: ScenarioEntry = ScenarioEntry {
    id: ScenarioId::Teamwork,
    title: "Group Project Dynamics",
    situation: "Group project where everyone's grade depends on the team's work. How much effort should you put in?",
    insight: "This is the classic 'free rider problem' - everyone benefits from good work, but individuals might slack off.",
    strategy: &[
        "Establish clear expectations and deadlines early",
        "Create accountability mechanisms",
        "Be the reliable team member - your reputation matters long-term",
    ],
    real_world: "Your reputation in school follows you to internships and jobs. Professors and classmates become your network.",
};

static NETWORKING: ScenarioEntry = ScenarioEntry {
    id: ScenarioId::Networking,
    title: "Professional Networking",
    situation: "Industry events and networking opportunities. Should you focus on meeting senior people or peers?",
    insight: "This is a network effects game - the value of connections grows as the network grows.",
    strategy: &[
        "Mix of both: seniors can mentor, peers can collaborate",
        "Give before you receive - offer help to others",
        "Maintain relationships over time, not just when you need something",
    ],
    real_world: "Many jobs come through referrals. Your classmates today might be hiring managers tomorrow.",
};

pub static PRINCIPLES: [PrincipleEntry; 4] = [
    PrincipleEntry {
        title: "Think Beyond Yourself",
        description: "Consider what others are likely to do, not just what you want to do",
    },
    PrincipleEntry {
        title: "Information is Power",
        description: "The more you know about the situation and other players, the better your decisions",
    },
    PrincipleEntry {
        title: "Long-term Reputation Matters",
        description: "Today's decisions affect future opportunities through your reputation",
    },
    PrincipleEntry {
        title: "Sometimes Cooperation Beats Competition",
        description: "Working together often creates more value than fighting over limited resources",
    },
];

pub static TOOLKIT: [ToolkitTip; 3] = [
    ToolkitTip {
        title: "Before Any Decision",
        body: "Ask: \"What are others likely to do?\" and \"How does that affect my best choice?\"",
    },
    ToolkitTip {
        title: "Gather Information",
        body: "Research, network, and understand the \"rules of the game\" before playing.",
    },
    ToolkitTip {
        title: "Think Long-term",
        body: "Your reputation and relationships compound over time. Invest in both.",
    },
];

/// Scenario entries in display order.
pub fn scenarios() -> impl Iterator<Item = &'static ScenarioEntry> {
    ScenarioId::all().iter().map(|id| id.entry())
}
