use std::fmt;
use std::path::Path;

/// Lifecycle phases offered as one-click goals
pub const DEFAULT_GOALS: [&str; 9] = [
    "clean", "validate", "compile", "test", "package", "verify", "install", "site", "deploy",
];

/// Label of the terminal archetype generation runs in
pub const ARCHETYPE_TERMINAL_NAME: &str = "Maven-Archetype";

/// A build-tool invocation rendered the way a shell would receive it
///
/// Arguments are kept verbatim: goal strings typed by the user may already
/// contain flags and quoting, so nothing is re-split or escaped here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    executable: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
        }
    }

    /// `<mvn> <goals> -f "<descriptor>"`
    pub fn for_goals(executable: &str, goals: &str, descriptor: &Path) -> Self {
        Self::new(executable).arg(goals.trim()).file(descriptor)
    }

    /// `<mvn> help:effective-pom -f "<descriptor>" -Doutput="<output>"`
    pub fn effective_pom(executable: &str, descriptor: &Path, output: &Path) -> Self {
        Self::new(executable)
            .arg("help:effective-pom")
            .file(descriptor)
            .property("output", &output.display().to_string())
    }

    /// `<mvn> archetype:generate -DarchetypeArtifactId=.. -DarchetypeGroupId=.. [-DarchetypeVersion=..]`
    pub fn archetype_generate(
        executable: &str,
        group_id: &str,
        artifact_id: &str,
        version: Option<&str>,
    ) -> Self {
        let command = Self::new(executable)
            .arg("archetype:generate")
            .property("archetypeArtifactId", artifact_id)
            .property("archetypeGroupId", group_id);
        match version {
            Some(version) => command.property("archetypeVersion", version),
            None => command,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        let arg = arg.into();
        if !arg.is_empty() {
            self.args.push(arg);
        }
        self
    }

    /// `-f "<descriptor>"`
    pub fn file(self, descriptor: &Path) -> Self {
        let quoted = format!("\"{}\"", descriptor.display());
        self.arg("-f").arg(quoted)
    }

    /// `-D<key>="<value>"`
    pub fn property(self, key: &str, value: &str) -> Self {
        self.arg(format!("-D{}=\"{}\"", key, value))
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
