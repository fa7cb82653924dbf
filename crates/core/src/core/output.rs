//! Serialized renderings of a [`PageView`].
//!
//! All outputs are deterministic functions of the page. HTML is produced by
//! writing Markdown first and handing it to `pulldown-cmark`.

use core::fmt::{self, Write as _};
use core::str::FromStr;

use pulldown_cmark::{html, Options, Parser};

use crate::content::{
    INSIGHT_HEADING, REAL_WORLD_HEADING, SITUATION_HEADING, STRATEGY_HEADING,
};
use crate::error::GuideError;
use crate::render::{DetailPanel, PageView, SectionView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Markdown,
    Html,
    #[cfg(feature = "serde")]
    Json,
}

impl Format {
    pub fn label(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Markdown => "markdown",
            Format::Html => "html",
            #[cfg(feature = "serde")]
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "markdown" | "md" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            #[cfg(feature = "serde")]
            "json" => Ok(Format::Json),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

/// Renders `page` in the requested format.
pub fn render_as(page: &PageView, format: Format) -> Result<String, GuideError> {
    Ok(match format {
        Format::Text => to_text(page),
        Format::Markdown => to_markdown(page),
        Format::Html => to_html(page),
        #[cfg(feature = "serde")]
        Format::Json => to_json(page)?,
    })
}

/// Plain text layout for a terminal.
pub fn to_text(page: &PageView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, page);
    out
}

fn write_text(out: &mut String, page: &PageView) -> fmt::Result {
    writeln!(out, "{} {}", page.icon, page.title)?;
    writeln!(out, "{}", page.subtitle)?;
    writeln!(out)?;

    let tabs: Vec<String> = page
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                format!(" {} ", t.label)
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join("  "))?;
    writeln!(out)?;

    match &page.body {
        SectionView::Principles(p) => {
            writeln!(out, "{}", p.intro_title)?;
            writeln!(out, "  {}", p.intro_body)?;
            for principle in p.principles {
                writeln!(out)?;
                writeln!(out, "* {}", principle.title)?;
                writeln!(out, "  {}", principle.description)?;
            }
        }
        SectionView::Scenarios(s) => {
            for card in &s.cards {
                let marker = if card.selected { '>' } else { ' ' };
                writeln!(out, "{marker} {} {:<32} ({})", card.icon, card.title, card.id)?;
            }
            if let Some(d) = &s.detail {
                writeln!(out)?;
                write_detail_text(out, d)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", page.toolkit.title)?;
    for tip in page.toolkit.tips {
        writeln!(out, "- {}: {}", tip.title, tip.body)?;
    }
    Ok(())
}

fn write_detail_text(out: &mut String, d: &DetailPanel) -> fmt::Result {
    let rule = "-".repeat(d.title.chars().count() + 3);
    writeln!(out, "{} {}", d.icon, d.title)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{SITUATION_HEADING}")?;
    writeln!(out, "  {}", d.situation)?;
    writeln!(out, "{INSIGHT_HEADING}")?;
    writeln!(out, "  {}", d.insight)?;
    writeln!(out, "{STRATEGY_HEADING}")?;
    for (i, point) in d.strategy.iter().enumerate() {
        writeln!(out, "  {}. {point}", i + 1)?;
    }
    writeln!(out, "{REAL_WORLD_HEADING}")?;
    writeln!(out, "  {}", d.real_world)?;
    Ok(())
}

/// CommonMark rendering of the page.
pub fn to_markdown(page: &PageView) -> String {
    let mut out = String::new();
    let _ = write_markdown(&mut out, page);
    out
}

fn write_markdown(out: &mut String, page: &PageView) -> fmt::Result {
    writeln!(out, "# {} {}\n", page.icon, page.title)?;
    writeln!(out, "{}\n", page.subtitle)?;

    let tabs: Vec<String> = page
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("**{}**", t.label)
            } else {
                t.label.to_string()
            }
        })
        .collect();
    writeln!(out, "{}\n", tabs.join(" | "))?;

    match &page.body {
        SectionView::Principles(p) => {
            writeln!(out, "## {}\n", p.intro_title)?;
            writeln!(out, "{}\n", p.intro_body)?;
            for principle in p.principles {
                writeln!(out, "### {}\n", principle.title)?;
                writeln!(out, "{}\n", principle.description)?;
            }
        }
        SectionView::Scenarios(s) => {
            for card in &s.cards {
                if card.selected {
                    writeln!(out, "- {} **{}**", card.icon, card.title)?;
                } else {
                    writeln!(out, "- {} {}", card.icon, card.title)?;
                }
            }
            writeln!(out)?;
            if let Some(d) = &s.detail {
                writeln!(out, "## {} {}\n", d.icon, d.title)?;
                writeln!(out, "### {SITUATION_HEADING}\n\n{}\n", d.situation)?;
                writeln!(out, "### {INSIGHT_HEADING}\n\n{}\n", d.insight)?;
                writeln!(out, "### {STRATEGY_HEADING}\n")?;
                for (i, point) in d.strategy.iter().enumerate() {
                    writeln!(out, "{}. {point}", i + 1)?;
                }
                writeln!(out)?;
                writeln!(out, "### {REAL_WORLD_HEADING}\n\n{}\n", d.real_world)?;
            }
        }
    }

    writeln!(out, "## {}\n", page.toolkit.title)?;
    for tip in page.toolkit.tips {
        writeln!(out, "- **{}**: {}", tip.title, tip.body)?;
    }
    Ok(())
}

/// Renders Markdown into an HTML fragment.
pub fn render_markdown(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(md, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Standalone HTML document for the page.
pub fn to_html(page: &PageView) -> String {
    let body = render_markdown(&to_markdown(page));
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>{}</title>\n</head>\n<body>\n<main class=\"gamewise\">\n{}</main>\n</body>\n</html>\n",
        page.title, body
    )
}

#[cfg(feature = "serde")]
pub fn to_json(page: &PageView) -> Result<String, GuideError> {
    Ok(serde_json::to_string_pretty(page)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ScenarioId;
    use crate::render::render;
    use crate::state::{Section, ViewState};

    fn salary_page() -> PageView {
        let mut s = ViewState::new();
        s.select_section(Section::Scenarios);
        s.select_scenario(ScenarioId::Salary);
        render(&s)
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("HTML".parse::<Format>().unwrap(), Format::Html);
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert!("pdf".parse::<Format>().is_err());
    }

    #[test]
    fn text_lists_strategy_points_in_order() {
        let text = to_text(&salary_page());
        let a = text.find("1. Research market rates").unwrap();
        let b = text.find("2. Negotiate other benefits").unwrap();
        let c = text.find("3. Show enthusiasm").unwrap();
        assert!(a < b && b < c);
        assert!(text.contains("[Real Scenarios]"));
        assert!(text.contains("> 💵 Salary Negotiation"));
    }

    #[test]
    fn principles_text_has_no_detail_headings() {
        let text = to_text(&render(&ViewState::new()));
        assert!(text.contains("[Key Principles]"));
        assert!(text.contains("What is Game Theory?"));
        assert!(!text.contains(STRATEGY_HEADING));
    }

    #[test]
    fn markdown_marks_selected_card() {
        let md = to_markdown(&salary_page());
        assert!(md.contains("- 💵 **Salary Negotiation**"));
        assert!(md.contains("- 🎓 College Application Strategy"));
        assert!(md.contains("### Strategic Approach"));
    }

    #[test]
    fn html_is_a_complete_document() {
        let html = to_html(&salary_page());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Game Theory for Your Future</title>"));
        assert!(html.contains("<h3>Strategic Approach</h3>"));
        assert!(html.contains("<li>Negotiate other benefits if salary is fixed</li>"));
        assert_eq!(html.matches("<ol>").count(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_carries_the_detail_panel() {
        let json = to_json(&salary_page()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["body"]["section"], "scenarios");
        assert_eq!(v["body"]["detail"]["id"], "salary");
        assert_eq!(v["body"]["detail"]["strategy"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn render_as_dispatches_on_format() {
        let page = salary_page();
        assert_eq!(render_as(&page, Format::Markdown).unwrap(), to_markdown(&page));
        assert_eq!(render_as(&page, Format::Text).unwrap(), to_text(&page));
    }
}
