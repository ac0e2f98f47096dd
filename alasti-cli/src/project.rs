//! Project names, project types and the generator command for each type

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// Name used when the user leaves the name prompt blank
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Target directory name handed to the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Build a project name from raw user input
    ///
    /// Blank input falls back to `default`. The remaining text is kept
    /// verbatim apart from surrounding whitespace.
    #[must_use]
    pub fn from_input(input: &str, default: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self(default.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// The name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of project to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// React + TypeScript through `create-vite`
    ReactVite,
    /// React + TypeScript through `create-react-app`
    React,
    /// Next.js app router project through `create-next-app`
    Next,
}

impl ProjectType {
    /// All choices, in the order they are offered
    pub const ALL: [Self; 3] = [Self::ReactVite, Self::React, Self::Next];

    /// Tag shown in the selection list and accepted by `--type`
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ReactVite => "react-vite",
            Self::React => "react",
            Self::Next => "next",
        }
    }

    /// Generator command for a project called `name`
    #[must_use]
    pub fn invocation(self, name: &ProjectName) -> Invocation {
        let name = name.as_str();
        match self {
            Self::ReactVite => Invocation::new("pnpm")
                .args(["create", "vite@latest"])
                .arg(name)
                .args(["--template", "react-ts"]),
            Self::React => Invocation::new("npx")
                .arg("create-react-app")
                .arg(name)
                .args(["--template", "typescript"]),
            Self::Next => Invocation::new("pnpm")
                .args(["create", "next-app"])
                .arg(name)
                .args([
                    "--ts",
                    "--tailwind",
                    "--eslint",
                    "--app",
                    "--src-dir",
                    "--import-alias",
                    "@/*",
                    "--use-pnpm",
                    "--skip-install",
                ]),
        }
    }

    /// Spinner text shown while the generator runs
    #[must_use]
    pub const fn wait_message(self) -> &'static str {
        match self {
            Self::ReactVite => "Please wait while we run vite@latest",
            Self::React => "Please wait while we run create-react-app",
            Self::Next => "Please wait while we run next-app",
        }
    }

    /// Spinner text shown once the generator succeeded
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::ReactVite => "Project created successfully! Don't forget to pnpm install",
            Self::React | Self::Next => "Project created successfully!",
        }
    }

    /// Follow-up instruction printed after a successful run, if any
    #[must_use]
    pub fn reminder(self, name: &ProjectName) -> Option<String> {
        match self {
            Self::Next => Some(format!("Don't forget to cd into {name} and run pnpm install!")),
            Self::ReactVite | Self::React => None,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ProjectType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ScaffoldError::InvalidSelection(s.to_string()))
    }
}

/// A program and its arguments, run without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Start an invocation of `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program to execute
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Single-quote an argument for display if a POSIX shell would split or expand it
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./@=:,+%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> ProjectName {
        ProjectName::from_input("demo", DEFAULT_PROJECT_NAME)
    }

    #[test]
    fn test_blank_name_uses_default() {
        assert_eq!(ProjectName::from_input("", DEFAULT_PROJECT_NAME).as_str(), "my-project");
        assert_eq!(ProjectName::from_input("   ", DEFAULT_PROJECT_NAME).as_str(), "my-project");
        assert_eq!(ProjectName::from_input("", "scratch").as_str(), "scratch");
        assert_eq!(ProjectName::default().as_str(), "my-project");
    }

    #[test]
    fn test_name_kept_verbatim() {
        assert_eq!(ProjectName::from_input("  My App  ", DEFAULT_PROJECT_NAME).as_str(), "My App");
    }

    #[test]
    fn test_tags_round_trip() {
        for kind in ProjectType::ALL {
            assert_eq!(kind.tag().parse::<ProjectType>().unwrap(), kind);
        }
        let tags: Vec<_> = ProjectType::ALL.iter().map(|kind| kind.tag()).collect();
        assert_eq!(tags, ["react-vite", "react", "next"]);
    }

    #[test]
    fn test_unknown_tag_is_invalid_selection() {
        let err = "vue".parse::<ProjectType>().unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidSelection(ref tag) if tag == "vue"));

        // Tags are matched exactly
        assert!("Next".parse::<ProjectType>().is_err());
        assert!(" next".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_react_vite_invocation() {
        let invocation = ProjectType::ReactVite.invocation(&demo());
        assert_eq!(invocation.program(), "pnpm");
        assert_eq!(
            invocation.arguments(),
            ["create", "vite@latest", "demo", "--template", "react-ts"]
        );
        assert_eq!(
            invocation.to_string(),
            "pnpm create vite@latest demo --template react-ts"
        );
    }

    #[test]
    fn test_react_invocation() {
        let invocation = ProjectType::React.invocation(&demo());
        assert_eq!(
            invocation.to_string(),
            "npx create-react-app demo --template typescript"
        );
    }

    #[test]
    fn test_next_invocation_flags() {
        let invocation = ProjectType::Next.invocation(&demo());
        assert_eq!(invocation.program(), "pnpm");
        assert_eq!(&invocation.arguments()[..3], ["create", "next-app", "demo"]);
        for flag in [
            "--ts",
            "--tailwind",
            "--eslint",
            "--app",
            "--src-dir",
            "--import-alias",
            "--use-pnpm",
            "--skip-install",
        ] {
            assert!(
                invocation.arguments().iter().any(|arg| arg == flag),
                "missing {flag}"
            );
        }
        assert!(invocation.to_string().contains("--import-alias '@/*'"));
    }

    #[test]
    fn test_name_with_shell_metacharacters_stays_one_argument() {
        let name = ProjectName::from_input("demo; rm -rf /", DEFAULT_PROJECT_NAME);
        let invocation = ProjectType::ReactVite.invocation(&name);
        assert_eq!(invocation.arguments()[2], "demo; rm -rf /");
        assert_eq!(invocation.arguments().len(), 5);
        assert!(invocation.to_string().contains("'demo; rm -rf /'"));
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain-name"), "plain-name");
        assert_eq!(quote(""), "''");
        assert_eq!(quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_reminder_only_for_next() {
        assert_eq!(
            ProjectType::Next.reminder(&demo()).as_deref(),
            Some("Don't forget to cd into demo and run pnpm install!")
        );
        assert!(ProjectType::ReactVite.reminder(&demo()).is_none());
        assert!(ProjectType::React.reminder(&demo()).is_none());
    }
}
