//! Prompt construction for the three request modes

/// What the user is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Shell command suggestion (default)
    Command,
    /// Bare code snippet, printed without rendering
    Code,
    /// Short explanation of a command or concept
    Explain,
}

impl Mode {
    pub fn from_flags(code: bool, explain: bool) -> Self {
        if code {
            Mode::Code
        } else if explain {
            Mode::Explain
        } else {
            Mode::Command
        }
    }

    /// Code mode output is printed verbatim
    pub fn renders_markdown(self) -> bool {
        !matches!(self, Mode::Code)
    }
}

/// The operating system and shell the suggestion is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemContext {
    pub os: String,
    pub shell: String,
}

impl SystemContext {
    pub fn detect() -> Self {
        let shell = std::env::var("SHELL").ok();
        Self {
            os: std::env::consts::OS.to_string(),
            shell: shell_name(shell.as_deref(), std::env::consts::OS),
        }
    }
}

/// Final path component of `$SHELL`, or a platform default when unset
pub fn shell_name(shell: Option<&str>, os: &str) -> String {
    match shell.filter(|s| !s.is_empty()) {
        Some(path) => path.rsplit('/').next().unwrap_or(path).to_string(),
        None if os == "windows" => "cmd/powershell".to_string(),
        None => "sh".to_string(),
    }
}

/// Build the full prompt sent to the provider
pub fn build(mode: Mode, context: &SystemContext, query: &str) -> String {
    let SystemContext { os, shell } = context;
    match mode {
        Mode::Code => format!(
            "You are a code-writing assistant. The user is on {os} using {shell} shell and needs a code snippet.

User request: {query}

Respond with ONLY the code that would accomplish this task. Do not include explanations, code comments, markdown formatting, or extra text. Write the most concise code possible, and prefer use of standard libraries to third parties.
"
        ),
        Mode::Explain => format!(
            "You are a programming expert. The user is on {os} using {shell} shell and needs a brief explanation of a CLI command or a programming library or concept.

User request: {query}

Respond with ONLY a very brief, concise description of the concept or solution. The answer should not exceed 2 paragraphs.
"
        ),
        Mode::Command => format!(
            "You are a command-line assistant. The user is on {os} using {shell} shell and needs a command suggestion.

User request: {query}

Respond with ONLY the command(s) that would accomplish this task. Do not include explanations, markdown formatting, or extra text. If multiple commands are needed, put each on a separate line.

Examples:
- For \"search for foo in directory\" → \"grep -R foo .\"
- For \"list files by size\" → \"ls -laSh\"
- For \"find large files\" → \"find . -type f -size +100M\""
        ),
    }
}
