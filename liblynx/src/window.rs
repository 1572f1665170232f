//! Window creation and painting.

use alloc::vec::Vec;

use lynx_abi::RawWindowSpec;

use crate::error::{check, check_unit, Result};
use crate::gateway::Gateway;
use crate::sys;

/// Packed 0x00RRGGBB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour(u32);

impl Colour {
    pub const BLACK: Colour = Colour(0x000000);
    pub const WHITE: Colour = Colour(0xffffff);

    pub const fn new(rgb: u32) -> Self {
        Colour(rgb)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// A window creation request.
///
/// This is what the client asks for; the handle used afterwards is the
/// opaque [`Wid`] the kernel returns.
#[derive(Debug, Clone, Copy)]
pub struct WindowSpec<'a> {
    /// Top-left corner, screen coordinates.
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// Short label shown in the title bar.
    pub name: &'a str,
    /// Background colour.
    pub colour: Colour,
}

/// Opaque window id.
///
/// Valid only within the creating process; the kernel validates it on
/// every paint or blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wid(u32);

impl Wid {
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

/// A created window.
///
/// The protocol has no destroy operation — windows live until the process
/// exits — so there is nothing to release on drop.
pub struct Window<'g, G: Gateway> {
    gw: &'g G,
    wid: Wid,
}

impl<'g, G: Gateway> Window<'g, G> {
    /// Ask the kernel to create a window.
    ///
    /// With `repaint` set the kernel redraws the surface on every
    /// compositor pass instead of only on paint calls.
    pub fn create(gw: &'g G, spec: &WindowSpec<'_>, repaint: bool) -> Result<Self> {
        // The kernel reads the label as a NUL-terminated string while the
        // caller is suspended, so it needs a terminated copy that outlives
        // the trap.
        let mut name = Vec::with_capacity(spec.name.len() + 1);
        name.extend_from_slice(spec.name.as_bytes());
        name.push(0);

        let raw = RawWindowSpec {
            x: spec.x,
            y: spec.y,
            width: spec.width,
            height: spec.height,
            name: name.as_ptr(),
            colour: spec.colour.as_u32(),
        };
        let wid = check(sys::window::create(gw, &raw, repaint))?;
        Ok(Self {
            gw,
            wid: Wid(wid as u32),
        })
    }

    /// The window id the kernel assigned.
    pub fn wid(&self) -> Wid {
        self.wid
    }

    /// The gateway this window was created through.
    pub fn gateway(&self) -> &'g G {
        self.gw
    }

    /// Paint `text` at window-relative position (`x`, `y`).
    ///
    /// Repeating the call with identical arguments repaints the same glyphs
    /// over themselves; it is safe and idempotent.
    pub fn paint_text(&mut self, text: &str, x: u16, y: u16) -> Result<()> {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        check_unit(sys::window::paint_string(
            self.gw,
            bytes.as_ptr(),
            self.wid.0 as usize,
            x as usize,
            y as usize,
        ))
    }

    /// Replace the window's surface with `pixels`.
    ///
    /// The buffer must hold exactly width × height pixels; the kernel
    /// rejects a size mismatch.
    pub fn blit(&mut self, pixels: &[u32]) -> Result<()> {
        check_unit(sys::window::copy_to_win_buffer(
            self.gw,
            self.wid.0 as usize,
            pixels.as_ptr(),
            pixels.len(),
        ))
    }
}
