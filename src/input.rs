//! Single character input

use std::io;
use std::io::{Read, Stdin, Write};
use std::str;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use crossterm::tty::IsTty;

/// A blocking source of characters
pub trait KeySource {
    /// Blocks until the next character is available. Returns `None` when input has ended.
    fn next_key(&mut self) -> io::Result<Option<char>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        (**self).next_key()
    }
}

/// Yields characters from an iterator, then ends
pub struct ScriptedKeys<I> {
    keys: I,
}

impl<I: Iterator<Item = char>> ScriptedKeys<I> {
    pub fn new<T>(keys: T) -> Self
    where
        T: IntoIterator<Item = char, IntoIter = I>,
    {
        Self {
            keys: keys.into_iter(),
        }
    }
}

impl<I: Iterator<Item = char>> KeySource for ScriptedKeys<I> {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        Ok(self.keys.next())
    }
}

/// Reads characters one at a time from a UTF-8 byte stream.
/// Line terminators are skipped since line-buffered input leaves one after every key.
pub struct ReaderKeys<R> {
    reader: R,
}

impl<R: Read> ReaderKeys<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.read_byte()? {
            None => return Ok(None),
            Some(b) => b,
        };
        let len = utf8_len(first).ok_or_else(invalid_utf8)?;
        let mut buf = [first, 0, 0, 0];
        for b in &mut buf[1..len] {
            *b = self.read_byte()?.ok_or_else(invalid_utf8)?;
        }
        let s = str::from_utf8(&buf[..len]).map_err(|_| invalid_utf8())?;
        Ok(s.chars().next())
    }
}

impl<R: Read> KeySource for ReaderKeys<R> {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        loop {
            match self.read_char()? {
                Some('\n') | Some('\r') => continue,
                c => return Ok(c),
            }
        }
    }
}

fn utf8_len(first: u8) -> Option<usize> {
    match first.leading_ones() {
        0 => Some(1),
        2 => Some(2),
        3 => Some(3),
        4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8")
}

/// Reads single key presses from the terminal without waiting for Enter.
/// Raw mode is only enabled while waiting for a key.
pub struct TerminalKeys {
    echo: bool,
}

impl TerminalKeys {
    /// `echo` writes every key read to standard output
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        let key = {
            let _raw_mode = RawMode::enable()?;
            read_key_press()?
        };
        if self.echo {
            if let Some(c) = key.filter(|c| !c.is_control()) {
                let mut stdout = io::stdout();
                write!(stdout, "{}", c)?;
                stdout.flush()?;
            }
        }
        Ok(key)
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to restore terminal mode: {}", e);
        }
    }
}

fn read_key_press() -> io::Result<Option<char>> {
    loop {
        if let Event::Key(key) = event::read()? {
            match key_press(key) {
                KeyPress::Char(c) => return Ok(Some(c)),
                KeyPress::End => return Ok(None),
                KeyPress::Ignored => {}
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum KeyPress {
    Char(char),
    End,
    Ignored,
}

/// Maps a key event to the character a console key read reports for it
fn key_press(key: KeyEvent) -> KeyPress {
    if key.kind != KeyEventKind::Press {
        return KeyPress::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') | KeyCode::Char('d') = key.code {
            return KeyPress::End;
        }
    }
    match key.code {
        KeyCode::Char(c) => KeyPress::Char(c),
        KeyCode::Enter => KeyPress::Char('\r'),
        KeyCode::Tab => KeyPress::Char('\t'),
        KeyCode::Backspace => KeyPress::Char('\u{8}'),
        KeyCode::Esc => KeyPress::Char('\u{1b}'),
        KeyCode::Modifier(_) => KeyPress::Ignored,
        _ => KeyPress::Char('\0'),
    }
}

/// Standard input: key presses on a terminal, a character stream otherwise
pub enum StdinKeys {
    Terminal(TerminalKeys),
    Reader(ReaderKeys<Stdin>),
}

impl StdinKeys {
    pub fn new() -> Self {
        let stdin = io::stdin();
        if stdin.is_tty() {
            debug!("reading keys from the terminal");
            StdinKeys::Terminal(TerminalKeys::new(true))
        } else {
            debug!("reading keys from a stream");
            StdinKeys::Reader(ReaderKeys::new(stdin))
        }
    }
}

impl Default for StdinKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for StdinKeys {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        match self {
            StdinKeys::Terminal(keys) => keys.next_key(),
            StdinKeys::Reader(keys) => keys.next_key(),
        }
    }
}
