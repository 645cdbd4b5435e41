//! Supported target languages for code generation.

use anyhow::Result;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::ui::Style;

/// A programming language the endpoint can be asked to generate code in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Java,
    Cpp,
    TypeScript,
}

/// All supported languages, in the order they are offered to the user.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language::Python,
    Language::JavaScript,
    Language::Java,
    Language::Cpp,
    Language::TypeScript,
];

impl Language {
    /// Display name, also sent to the endpoint as the language hint.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::TypeScript => "TypeScript",
        }
    }

    /// Lower-cased display name, used to tag code replies.
    pub fn tag(self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("cpp") {
            return Ok(Self::Cpp);
        }

        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unsupported language: '{s}'\n\n\
                     Supported languages: {}\n\
                     Run 'codechat languages' to see them all.",
                    SUPPORTED_LANGUAGES
                        .iter()
                        .map(|l| l.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Renders the supported languages, tagging `marked` with `(note)`.
pub fn render_languages(marked: Language, note: &str) -> String {
    let mut out = format!("{}\n", Style::header("Supported languages"));
    for lang in SUPPORTED_LANGUAGES {
        if *lang == marked {
            let _ = writeln!(out, "  {:11} {}", Style::code(lang.name()), Style::marker(note));
        } else {
            let _ = writeln!(out, "  {}", Style::code(lang.name()));
        }
    }
    out
}

/// Prints all supported languages to stdout.
pub fn print_languages(marked: Language, note: &str) {
    println!("{}", render_languages(marked, note));
}
