//! ---
//! asminfo_section: "02-code-emission"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Version metadata model and multi-language code emission."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
use std::fmt;
use std::str::FromStr;

use crate::emitter::{CSharpEmitter, CodeEmitter, FSharpEmitter, VisualBasicEmitter};
use crate::errors::{GenerateError, Result};

static CSHARP: CSharpEmitter = CSharpEmitter;
static VISUAL_BASIC: VisualBasicEmitter = VisualBasicEmitter;
static FSHARP: FSharpEmitter = FSharpEmitter;

/// Target languages with a [`CodeEmitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C#
    CSharp,
    /// Visual Basic
    VisualBasic,
    /// F#
    FSharp,
}

impl Language {
    /// Emitter rendering this language.
    #[must_use]
    pub fn emitter(self) -> &'static dyn CodeEmitter {
        match self {
            Language::CSharp => &CSHARP,
            Language::VisualBasic => &VISUAL_BASIC,
            Language::FSharp => &FSHARP,
        }
    }

    /// Conventional source file extension, without the dot.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Language::CSharp => "cs",
            Language::VisualBasic => "vb",
            Language::FSharp => "fs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::CSharp => write!(f, "C#"),
            Language::VisualBasic => write!(f, "Visual Basic"),
            Language::FSharp => write!(f, "F#"),
        }
    }
}

impl FromStr for Language {
    type Err = GenerateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c#" => Ok(Language::CSharp),
            "visual basic" | "visualbasic" | "vb" => Ok(Language::VisualBasic),
            "f#" => Ok(Language::FSharp),
            _ => Err(GenerateError::UnsupportedLanguage(s.to_owned())),
        }
    }
}

/// Map a language identifier to its emitter.
pub fn select_emitter(language: &str) -> Result<&'static dyn CodeEmitter> {
    Ok(language.parse::<Language>()?.emitter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_basic_synonyms() {
        for id in ["VB", "visual basic", "VisualBasic", " vb "] {
            assert_eq!(id.parse::<Language>().unwrap(), Language::VisualBasic);
        }
    }

    #[test]
    fn identifiers_are_case_insensitive() {
        assert_eq!("C#".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!("f#".parse::<Language>().unwrap(), Language::FSharp);
    }

    #[test]
    fn unknown_language_is_unsupported() {
        assert_eq!(
            "pascal".parse::<Language>().unwrap_err(),
            GenerateError::UnsupportedLanguage("pascal".into())
        );
        assert!(select_emitter("").is_err());
        assert!(select_emitter("csharp").is_err());
    }

    #[test]
    fn selected_emitter_matches_language() {
        assert_eq!(select_emitter("vb").unwrap().comment_token(), "'");
        assert_eq!(select_emitter("c#").unwrap().comment_token(), "//");
        assert_eq!(Language::FSharp.file_extension(), "fs");
    }
}
