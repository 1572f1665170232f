//! Terminal-style line editing over the window/event protocol.
//!
//! [`LineEditor`] is the bounded command-line buffer a text client
//! accumulates keystrokes into; [`Console`] ties one to a window and a
//! cursor line and drives the poll loop. All of it is plain state owned by
//! the caller — no process-wide globals.

use alloc::string::String;

use lynx_abi::{Event, COMMAND_LINE_CAPACITY, SCANCODE_ENTER};

use crate::error::Result;
use crate::gateway::Gateway;
use crate::input;
use crate::window::Window;

/// A bounded accumulating line buffer, seeded with a prompt prefix.
///
/// The prompt occupies the front of the buffer and is repainted with the
/// input, exactly as the user sees it; [`take_line`](Self::take_line)
/// strips it again before the line is interpreted as a command.
pub struct LineEditor {
    buf: [u8; COMMAND_LINE_CAPACITY],
    len: usize,
    prompt_len: usize,
}

impl LineEditor {
    /// Create an editor whose buffer starts as `prompt`.
    ///
    /// A prompt longer than the buffer capacity is truncated to fit, at a
    /// character boundary so the buffer stays valid UTF-8.
    pub fn new(prompt: &str) -> Self {
        let mut take = prompt.len().min(COMMAND_LINE_CAPACITY);
        while !prompt.is_char_boundary(take) {
            take -= 1;
        }
        let mut buf = [0u8; COMMAND_LINE_CAPACITY];
        buf[..take].copy_from_slice(&prompt.as_bytes()[..take]);
        Self {
            buf,
            len: take,
            prompt_len: take,
        }
    }

    /// Append one character.
    ///
    /// Returns `false` when the character was dropped: the buffer is at
    /// capacity, or the byte is not ASCII (the event protocol only carries
    /// ASCII in the character field). Dropped input is silent apart from
    /// the return value and a log warning. The line terminator is handled
    /// a layer up and always dispatches, full buffer or not.
    pub fn push(&mut self, ch: u8) -> bool {
        if !ch.is_ascii() {
            log::warn!("dropping non-ASCII input byte {:#04x}", ch);
            return false;
        }
        if self.len >= COMMAND_LINE_CAPACITY {
            log::warn!("command line full, dropping input");
            return false;
        }
        self.buf[self.len] = ch;
        self.len += 1;
        true
    }

    /// Current visible contents, prompt included.
    pub fn as_str(&self) -> &str {
        // Safety: push only ever stores ASCII bytes, and the prompt was
        // copied from a &str with truncation on a char boundary.
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.len]) }
    }

    /// Bytes accumulated after the prompt.
    pub fn command_len(&self) -> usize {
        self.len - self.prompt_len
    }

    /// Complete the line: strip the prompt prefix, return the remainder,
    /// and reset the buffer to just the prompt.
    pub fn take_line(&mut self) -> String {
        let line = String::from(&self.as_str()[self.prompt_len..]);
        self.len = self.prompt_len;
        line
    }
}

/// Layout knobs for a [`Console`].
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    /// Fixed x position every line is painted at.
    pub origin_x: u16,
    /// y position of the first line.
    pub origin_y: u16,
    /// Vertical advance per dispatched line.
    pub line_step: u16,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            origin_x: 5,
            origin_y: 20,
            line_step: 20,
        }
    }
}

/// A terminal session: a window, a line editor, and a cursor line.
///
/// Known limitation, kept deliberately: there is no scrolling or
/// wraparound, so after enough dispatches the cursor line runs off the
/// bottom of the window and later paints land out of bounds.
pub struct Console<'g, G: Gateway> {
    window: Window<'g, G>,
    editor: LineEditor,
    x: u16,
    y: u16,
    line_step: u16,
}

impl<'g, G: Gateway> Console<'g, G> {
    /// Wrap a window and paint the initial prompt.
    pub fn new(window: Window<'g, G>, prompt: &str, config: ConsoleConfig) -> Result<Self> {
        let mut console = Self {
            window,
            editor: LineEditor::new(prompt),
            x: config.origin_x,
            y: config.origin_y,
            line_step: config.line_step,
        };
        console.repaint()?;
        Ok(console)
    }

    /// The line buffer, for inspection.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Current cursor line position.
    pub fn cursor_y(&self) -> u16 {
        self.y
    }

    /// Feed one event through the state machine.
    ///
    /// Non-keyboard events are discarded without touching any state. A
    /// character appends to the buffer and repaints it in place; a dropped
    /// character (full buffer) repaints nothing. The line terminator
    /// advances the cursor one line and returns the completed command with
    /// the prompt stripped — follow up with [`finish_line`](Self::finish_line)
    /// once it has been evaluated.
    pub fn handle_event(&mut self, event: &Event) -> Result<Option<String>> {
        if !event.is_keyboard() {
            return Ok(None);
        }

        if event.scancode == SCANCODE_ENTER {
            self.y = self.y.saturating_add(self.line_step);
            return Ok(Some(self.editor.take_line()));
        }

        if self.editor.push(event.character) {
            self.repaint()?;
        }
        Ok(None)
    }

    /// Poll once and feed the result through [`handle_event`](Self::handle_event).
    pub fn poll(&mut self) -> Result<Option<String>> {
        let event = input::poll_event(self.window.gateway());
        self.handle_event(&event)
    }

    /// Complete a dispatch cycle: paint the evaluator's reply (if any) on
    /// the current line, then a fresh prompt on the line below it.
    pub fn finish_line(&mut self, reply: Option<&str>) -> Result<()> {
        if let Some(reply) = reply {
            self.window.paint_text(reply, self.x, self.y)?;
            self.y = self.y.saturating_add(self.line_step);
        }
        self.repaint()
    }

    /// Drive the event loop forever.
    ///
    /// Each completed line is handed to `eval`; its reply (or `None` for
    /// silence) is painted via [`finish_line`](Self::finish_line). The loop
    /// busy-polls — the protocol offers no blocking wait — with a CPU relax
    /// hint on empty polls.
    pub fn run<F>(&mut self, mut eval: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        loop {
            match self.poll()? {
                Some(line) => {
                    let reply = eval(&line);
                    self.finish_line(reply.as_deref())?;
                }
                None => core::hint::spin_loop(),
            }
        }
    }

    fn repaint(&mut self) -> Result<()> {
        self.window.paint_text(self.editor.as_str(), self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_starts_as_prompt() {
        let editor = LineEditor::new("lynx $ ");
        assert_eq!(editor.as_str(), "lynx $ ");
        assert_eq!(editor.command_len(), 0);
    }

    #[test]
    fn characters_accumulate_in_order() {
        let mut editor = LineEditor::new("> ");
        for ch in b"hello" {
            assert!(editor.push(*ch));
        }
        assert_eq!(editor.as_str(), "> hello");
        assert_eq!(editor.command_len(), 5);
    }

    #[test]
    fn take_line_strips_prompt_and_resets() {
        let mut editor = LineEditor::new("prompt$ ");
        for ch in b"hello" {
            editor.push(*ch);
        }
        assert_eq!(editor.take_line(), "hello");
        assert_eq!(editor.as_str(), "prompt$ ");
        assert_eq!(editor.command_len(), 0);
    }

    #[test]
    fn overflow_is_dropped_silently() {
        let mut editor = LineEditor::new("");
        for _ in 0..COMMAND_LINE_CAPACITY {
            assert!(editor.push(b'a'));
        }
        assert!(!editor.push(b'b'));
        assert_eq!(editor.as_str().len(), COMMAND_LINE_CAPACITY);
        assert!(editor.as_str().ends_with('a'));
    }

    #[test]
    fn non_ascii_is_dropped() {
        let mut editor = LineEditor::new("");
        assert!(!editor.push(0xc3));
        assert_eq!(editor.as_str(), "");
    }

    #[test]
    fn oversized_prompt_is_truncated() {
        let long = core::str::from_utf8(&[b'p'; 400]).unwrap();
        let editor = LineEditor::new(long);
        assert_eq!(editor.as_str().len(), COMMAND_LINE_CAPACITY);
        assert_eq!(editor.command_len(), 0);
    }

    #[test]
    fn prompt_truncation_respects_char_boundaries() {
        // A multibyte character straddling the capacity boundary must be
        // dropped whole, never split.
        let mut prompt = alloc::string::String::new();
        for _ in 0..COMMAND_LINE_CAPACITY - 1 {
            prompt.push('p');
        }
        prompt.push('é');
        let editor = LineEditor::new(&prompt);
        assert_eq!(editor.as_str().len(), COMMAND_LINE_CAPACITY - 1);
        assert!(core::str::from_utf8(editor.as_str().as_bytes()).is_ok());
        assert!(editor.as_str().chars().all(|c| c == 'p'));
    }
}
