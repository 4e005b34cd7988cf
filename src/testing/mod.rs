mod mock_clipboard;
mod scripted_prompter;

#[allow(unused_imports)]
pub use mock_clipboard::MockClipboard;
#[allow(unused_imports)]
pub use scripted_prompter::{Answer, ScriptedPrompter};
