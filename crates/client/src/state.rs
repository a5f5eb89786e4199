//! Application mode for the terminal UI.

/// Which map operation a filename prompt is collecting a name for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Save,
    Load,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Save => "Save map as",
            PromptKind::Load => "Load map",
        }
    }
}

/// Text being typed into a filename prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub buffer: String,
    /// Stored map names offered while typing.
    pub suggestions: Vec<String>,
}

impl PromptState {
    /// Longest name the prompt accepts.
    pub const MAX_LEN: usize = 64;

    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Suggestions that start with what has been typed so far.
    pub fn matching(&self) -> impl Iterator<Item = &str> + '_ {
        let typed = self.buffer.trim_start();
        self.suggestions
            .iter()
            .map(String::as_str)
            .filter(move |name| name.starts_with(typed))
    }

    pub fn push(&mut self, ch: char) {
        if !ch.is_control() && self.buffer.chars().count() < Self::MAX_LEN {
            self.buffer.push(ch);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }
}

/// Top-level mode determining input handling and overlays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Editing the map.
    #[default]
    Normal,
    /// Typing a map name.
    Prompt(PromptState),
}

/// Mutable UI state outside the editor session.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_prompt(&mut self, prompt: PromptState) {
        self.mode = AppMode::Prompt(prompt);
    }

    /// Leaves the prompt, returning what was typed.
    pub fn close_prompt(&mut self) -> Option<PromptState> {
        match std::mem::take(&mut self.mode) {
            AppMode::Prompt(prompt) => Some(prompt),
            AppMode::Normal => None,
        }
    }

    pub fn prompt_mut(&mut self) -> Option<&mut PromptState> {
        match &mut self.mode {
            AppMode::Prompt(prompt) => Some(prompt),
            AppMode::Normal => None,
        }
    }
}
