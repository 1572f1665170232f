//! Wire format for the window and input-event protocol.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// A window creation request as the kernel reads it.
///
/// This is only the *request*; the handle used for every later paint or
/// blit is the opaque window id the kernel returns from
/// [`Syscall::CreateWindow`](crate::Syscall::CreateWindow). `name` points
/// at a NUL-terminated label that must stay valid for the duration of the
/// trap — the kernel reads it while the caller is suspended.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct RawWindowSpec {
    /// Top-left corner, screen coordinates.
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// NUL-terminated window label.
    pub name: *const u8,
    /// Background colour, packed 0x00RRGGBB.
    pub colour: u32,
}

bitflags::bitflags! {
    /// Bits of [`Event::flags`].
    ///
    /// Bit 0 is the only one the text clients care about; the mouse bits are
    /// produced by the kernel but unused here. Remaining bits are reserved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventFlags: u8 {
        const KEY_PRESSED         = 0b0000_0001;
        const MOUSE_LEFT_CLICKED  = 0b0000_0010;
        const MOUSE_RIGHT_CLICKED = 0b0000_0100;
    }
}

/// One unit of kernel-reported input state, obtained by polling.
///
/// [`Syscall::GetEvent`](crate::Syscall::GetEvent) returns a pointer to a
/// kernel-owned `Event` — never null — which the caller copies out by value
/// before the next poll overwrites it. An event with no flag bits set means
/// "nothing happened" and must be discarded, not treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Event {
    /// See [`EventFlags`].
    pub flags: u8,
    /// Raw keyboard scancode, when the keyboard bit is set.
    pub scancode: u8,
    /// ASCII translation of the key, when the keyboard bit is set.
    pub character: u8,
    /// Reserved; keeps the struct padding-free.
    pub _reserved: u8,
    pub mouse_x: u16,
    pub mouse_y: u16,
}

impl Event {
    /// An event with nothing in it, as the kernel reports between inputs.
    pub const EMPTY: Event = Event {
        flags: 0,
        scancode: 0,
        character: 0,
        _reserved: 0,
        mouse_x: 0,
        mouse_y: 0,
    };

    /// Whether this event carries keyboard data.
    pub fn is_keyboard(&self) -> bool {
        EventFlags::from_bits_truncate(self.flags).contains(EventFlags::KEY_PRESSED)
    }
}

/// Scancode the terminal treats as the line terminator (Enter).
pub const SCANCODE_ENTER: u8 = 0x1c;

/// Capacity of a client-side command line buffer, prompt included.
pub const COMMAND_LINE_CAPACITY: usize = 255;
