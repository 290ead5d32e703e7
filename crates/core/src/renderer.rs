//! Markdown outline rendering.
//!
//! The outline always starts with a fixed preamble:
//!
//! ```markdown
//! ## Contents
//!
//! # <topic>
//!
//! ```
//!
//! followed by one line per heading, `#` repeated `level` times, a space, then the heading text.
//! Lines are joined with `\n` and no trailing newline is added.

use crate::constants::CONTENTS_HEADER;
use outline_types::Heading;

/// Renders `headings` under `topic` as a markdown outline.
pub fn render_outline(topic: &str, headings: &[Heading]) -> String {
    let mut lines = Vec::with_capacity(headings.len() + 4);
    lines.push(CONTENTS_HEADER.to_owned());
    lines.push(String::new());
    lines.push(format!("# {topic}"));
    lines.push(String::new());

    for heading in headings {
        lines.push(format!("{} {}", heading.level.marker(), heading.text));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_types::{HeadingLevel, NonEmptyText};

    fn heading(level: u8, text: &str) -> Heading {
        Heading::new(
            HeadingLevel::new(level).unwrap(),
            NonEmptyText::new(text).unwrap(),
        )
    }

    #[test]
    fn renders_france_example() {
        let headings = vec![
            heading(2, "History"),
            heading(3, "Middle Ages"),
            heading(2, "Geography"),
        ];

        assert_eq!(
            render_outline("France", &headings),
            "## Contents\n\n# France\n\n## History\n### Middle Ages\n## Geography"
        );
    }

    #[test]
    fn empty_headings_render_preamble_only() {
        assert_eq!(render_outline("Tuvalu", &[]), "## Contents\n\n# Tuvalu\n");
    }

    #[test]
    fn one_line_per_heading_with_matching_markers() {
        let headings: Vec<Heading> = (1..=6).map(|l| heading(l, "Section")).collect();
        let outline = render_outline("Chile", &headings);
        let lines: Vec<&str> = outline.split('\n').collect();

        assert_eq!(lines.len(), 4 + headings.len());
        for (line, h) in lines[4..].iter().zip(&headings) {
            let hashes = line.chars().take_while(|c| *c == '#').count();
            assert_eq!(hashes, usize::from(h.level.get()));
            assert_eq!(&line[hashes..], " Section");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let headings = vec![heading(2, "Demographics"), heading(4, "Languages")];
        assert_eq!(
            render_outline("Peru", &headings),
            render_outline("Peru", &headings)
        );
    }
}
