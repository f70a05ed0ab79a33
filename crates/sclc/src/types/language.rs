//! Target languages a backend can emit

use std::fmt;
use std::str::FromStr;

use crate::common::CompileError;

/// Output programming language, identified by the sandbox's language id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetLanguage {
    Python,
    JavaScript,
    Java,
    Cpp,
    CSharp,
    Php,
    R,
    TypeScript,
    Swift,
    Go,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 10] = [
        TargetLanguage::Python,
        TargetLanguage::JavaScript,
        TargetLanguage::Java,
        TargetLanguage::Cpp,
        TargetLanguage::CSharp,
        TargetLanguage::Php,
        TargetLanguage::R,
        TargetLanguage::TypeScript,
        TargetLanguage::Swift,
        TargetLanguage::Go,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TargetLanguage::Python => "python",
            TargetLanguage::JavaScript => "javascript",
            TargetLanguage::Java => "java",
            TargetLanguage::Cpp => "cpp",
            TargetLanguage::CSharp => "csharp",
            TargetLanguage::Php => "php",
            TargetLanguage::R => "r",
            TargetLanguage::TypeScript => "typescript",
            TargetLanguage::Swift => "swift",
            TargetLanguage::Go => "go",
        }
    }

    /// Conventional source file name for a generated unit
    pub fn file_name(self) -> &'static str {
        match self {
            TargetLanguage::Python => "main.py",
            TargetLanguage::JavaScript => "main.js",
            TargetLanguage::Java => "Main.java",
            TargetLanguage::Cpp => "main.cpp",
            TargetLanguage::CSharp => "Program.cs",
            TargetLanguage::Php => "main.php",
            TargetLanguage::R => "main.R",
            TargetLanguage::TypeScript => "main.ts",
            TargetLanguage::Swift => "main.swift",
            TargetLanguage::Go => "main.go",
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = CompileError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| CompileError::unsupported_language(id))
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;

    #[test]
    fn test_language_ids() {
        for language in TargetLanguage::ALL {
            assert_eq!(language.id().parse::<TargetLanguage>().unwrap(), language);
        }
        assert_eq!("Python".parse::<TargetLanguage>().unwrap(), TargetLanguage::Python);
    }

    #[test]
    fn test_unknown_language() {
        let err = "cobol".parse::<TargetLanguage>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedLanguage);
    }
}
