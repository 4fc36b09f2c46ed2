//! Line grammar for generated blog text.
//!
//! Every non-blank line is tested against an ordered table of patterns and
//! the first match decides its kind. Headings come first, then Q/A markers,
//! list markers and dividers; anything left over is a paragraph. The order
//! is part of the contract: a run of asterisks such as `*****` is a
//! heading because the asterisk heading rule is checked before the divider
//! rule.

use regex::Regex;

/// Classification of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Section heading with markers removed
    Heading(String),
    /// Question with its `Q.`/`질문:` marker removed
    Question(String),
    /// Answer with its `A.`/`답변:` marker removed
    Answer(String),
    /// List item with its bullet or number removed
    ListItem(String),
    /// Horizontal rule
    Divider,
    /// Anything else, carrying the whole line
    Paragraph(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Heading,
    Question,
    Answer,
    ListItem,
    Divider,
}

/// One entry of the ordered grammar.
#[derive(Debug)]
struct Rule {
    name: &'static str,
    class: Class,
    regex: Regex,
}

/// Ordered (pattern, kind) table plus the title-line patterns.
#[derive(Debug)]
pub struct LinePatterns {
    rules: Vec<Rule>,
    title: Vec<Regex>,
}

/// Rules in priority order. Capture group 1 (or the first group that
/// participated) is the payload text.
const RULES: &[(&str, Class, &str)] = &[
    (
        "heading_bracket",
        Class::Heading,
        r"^(?:\[\s*(\S.*?)\s*\]|【\s*(\S.*?)\s*】)$",
    ),
    ("heading_arrow", Class::Heading, r"^[▶▷►➤→]\s*(\S.*)$"),
    ("heading_bullet", Class::Heading, r"^[●◉○◎]\s*(\S.*)$"),
    ("heading_box", Class::Heading, r"^[■□▣◆◇]\s*(\S.*)$"),
    ("heading_asterisk", Class::Heading, r"^\*\*\s*(\S.*?)\s*\*\*$"),
    ("heading_markdown", Class::Heading, r"^#{2,3}\s+(\S.*)$"),
    (
        "question",
        Class::Question,
        r"^(?:Q\d*\s*[.:：)]|질문\s*\d*\s*[.:：])\s*(\S.*)$",
    ),
    (
        "answer",
        Class::Answer,
        r"^(?:A\d*\s*[.:：)]|답변\s*\d*\s*[.:：])\s*(\S.*)$",
    ),
    ("list_item", Class::ListItem, r"^(?:[-•*]|\d+[.)])\s+(\S.*)$"),
    ("divider", Class::Divider, r"^[-=_*~─━═·]{3,}$"),
];

const TITLE_RULES: &[&str] = &[r"^(?i:title|제목)\s*[:：]\s*(\S.*)$", r"^#\s+(\S.*)$"];

impl LinePatterns {
    /// Compile the grammar.
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|&(name, class, pattern)| Rule {
                name,
                class,
                regex: Regex::new(pattern).unwrap(),
            })
            .collect();
        let title = TITLE_RULES
            .iter()
            .map(|pattern| Regex::new(pattern).unwrap())
            .collect();
        Self { rules, title }
    }

    /// Rule names in the order they are tested.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Classify a trimmed, non-empty line.
    pub fn classify(&self, line: &str) -> LineKind {
        for rule in &self.rules {
            let Some(caps) = rule.regex.captures(line) else {
                continue;
            };
            let text = caps
                .iter()
                .skip(1)
                .flatten()
                .next()
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            return match rule.class {
                Class::Heading => LineKind::Heading(text),
                Class::Question => LineKind::Question(text),
                Class::Answer => LineKind::Answer(text),
                Class::ListItem => LineKind::ListItem(text),
                Class::Divider => LineKind::Divider,
            };
        }
        LineKind::Paragraph(line.to_string())
    }

    /// Return the title text if the line is a title line.
    pub fn match_title(&self, line: &str) -> Option<String> {
        self.title.iter().find_map(|re| {
            re.captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
    }
}

impl Default for LinePatterns {
    fn default() -> Self {
        Self::new()
    }
}
