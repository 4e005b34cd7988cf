use crate::domain::AppConfig;
use crate::ports::{ClipboardWriter, FormPrompter};

/// Application context holding configuration and I/O ports for command execution.
pub struct AppContext<C: ClipboardWriter, P: FormPrompter> {
    config: AppConfig,
    clipboard: C,
    prompter: P,
}

impl<C: ClipboardWriter, P: FormPrompter> AppContext<C, P> {
    /// Create a new application context.
    pub fn new(config: AppConfig, clipboard: C, prompter: P) -> Self {
        Self { config, clipboard, prompter }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }
}
