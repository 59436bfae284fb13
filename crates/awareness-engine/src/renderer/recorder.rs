use super::traits::{DrawCommand, Renderer, TextCommand, Viewport};

/// Renderer that keeps every command in memory.
/// Used by tests and headless runs to inspect what a frame would show.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
    texts: Vec<TextCommand>,
    presented: u32,
}

impl CommandRecorder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Forget the recorded commands (the present counter is kept).
    pub fn clear(&mut self) {
        self.commands.clear();
        self.texts.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> &[TextCommand] {
        &self.texts
    }

    /// Whether any recorded string equals `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t.text == text)
    }

    /// Number of completed frames.
    pub fn presented(&self) -> u32 {
        self.presented
    }
}

impl Renderer for CommandRecorder {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw(&mut self, cmd: &DrawCommand) {
        self.commands.push(cmd.clone());
    }

    fn text(&mut self, cmd: &TextCommand) {
        self.texts.push(cmd.clone());
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}
