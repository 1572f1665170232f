//! In-memory kernel double for testing lynx userland code.
//!
//! [`MockKernel`] implements the [`Gateway`] trait with plain data
//! structures: per-process message queues, window records that capture
//! paints and blits, a scriptable event queue, and an in-memory file
//! table. Tests drive the same typed wrappers real programs use and then
//! inspect what "the kernel" saw.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use liblynx::gateway::Gateway;
use lynx_abi::{Event, RawMessage, RawWindowSpec, Syscall};

/// Messages a single queue holds before sends start failing.
pub const MAILBOX_CAPACITY: usize = 32;

/// Window slots per process.
pub const MAX_WINDOWS: usize = 8;

const PAGE_SIZE: usize = 4096;

/// One text paint captured by a mock window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintedText {
    pub text: String,
    pub x: u16,
    pub y: u16,
}

struct MockWindow {
    width: u16,
    height: u16,
    name: String,
    colour: u32,
    repaint: bool,
    paints: Vec<PaintedText>,
    pixels: Vec<u32>,
}

struct QueuedMessage {
    sender: u64,
    receiver: u64,
    kind: u64,
    payload: Vec<u8>,
}

/// A message handed out by ReceiveMessage.
///
/// The real kernel allocates a fresh block per delivery and never reclaims
/// it; the mock mirrors that by keeping every delivered block alive for
/// its own lifetime, which is also what keeps the returned pointers valid.
struct Delivered {
    _raw: Box<RawMessage>,
    _payload: Box<[u8]>,
}

struct OpenFile {
    name: String,
    pos: usize,
}

struct State {
    pid: u64,
    protocol_version: isize,
    mailboxes: BTreeMap<u64, VecDeque<QueuedMessage>>,
    delivered: Vec<Delivered>,
    windows: Vec<MockWindow>,
    events: VecDeque<Event>,
    event_slot: Box<Event>,
    console_out: Vec<u8>,
    files: BTreeMap<String, Vec<u8>>,
    open_files: BTreeMap<usize, OpenFile>,
    next_fd: usize,
    exited: bool,
}

/// Scriptable kernel stand-in.
///
/// Single-threaded by construction (interior state lives in a `RefCell`),
/// which matches how the trap boundary behaves anyway: one process, one
/// trap at a time.
pub struct MockKernel {
    state: RefCell<State>,
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MockKernel {
    pub fn new() -> Self {
        Self::with_protocol_version(lynx_abi::PROTOCOL_VERSION as isize)
    }

    /// A mock that reports the given protocol revision, for testing the
    /// startup handshake against mismatched kernels.
    pub fn with_protocol_version(version: isize) -> Self {
        let pid = 1;
        let mut mailboxes = BTreeMap::new();
        mailboxes.insert(pid, VecDeque::new());
        Self {
            state: RefCell::new(State {
                pid,
                protocol_version: version,
                mailboxes,
                delivered: Vec::new(),
                windows: Vec::new(),
                events: VecDeque::new(),
                event_slot: Box::new(Event::EMPTY),
                console_out: Vec::new(),
                files: BTreeMap::new(),
                open_files: BTreeMap::new(),
                next_fd: 3,
                exited: false,
            }),
        }
    }

    /// Change which process the caller is. Registers its mailbox too.
    pub fn set_pid(&self, pid: u64) {
        let mut state = self.state.borrow_mut();
        state.pid = pid;
        state.mailboxes.entry(pid).or_default();
    }

    /// Make `pid` a known process with an (empty) mailbox.
    pub fn register_process(&self, pid: u64) {
        self.state.borrow_mut().mailboxes.entry(pid).or_default();
    }

    /// Queue a keyboard event.
    pub fn push_key(&self, scancode: u8, character: u8) {
        self.push_event(Event {
            flags: lynx_abi::EventFlags::KEY_PRESSED.bits(),
            scancode,
            character,
            _reserved: 0,
            mouse_x: 0,
            mouse_y: 0,
        });
    }

    /// Queue an arbitrary event.
    pub fn push_event(&self, event: Event) {
        self.state.borrow_mut().events.push_back(event);
    }

    /// Seed the in-memory filesystem.
    pub fn add_file(&self, name: &str, contents: &[u8]) {
        self.state
            .borrow_mut()
            .files
            .insert(String::from(name), contents.to_vec());
    }

    /// Text paints a window has received, in order.
    pub fn paints(&self, wid: usize) -> Vec<PaintedText> {
        self.state.borrow().windows[wid].paints.clone()
    }

    /// Metadata of a created window: (name, colour, repaint flag).
    pub fn window_info(&self, wid: usize) -> (String, u32, bool) {
        let state = self.state.borrow();
        let w = &state.windows[wid];
        (w.name.clone(), w.colour, w.repaint)
    }

    pub fn window_count(&self) -> usize {
        self.state.borrow().windows.len()
    }

    /// Current surface contents of a window.
    pub fn pixels(&self, wid: usize) -> Vec<u32> {
        self.state.borrow().windows[wid].pixels.clone()
    }

    /// Everything written to stdout and stderr, interleaved.
    pub fn console_output(&self) -> Vec<u8> {
        self.state.borrow().console_out.clone()
    }

    /// Pending messages in a process's queue.
    pub fn queue_len(&self, pid: u64) -> usize {
        self.state
            .borrow()
            .mailboxes
            .get(&pid)
            .map_or(0, VecDeque::len)
    }

    pub fn exited(&self) -> bool {
        self.state.borrow().exited
    }
}

// Safety: the caller handed this pointer through the trap interface, which
// promises it points at a NUL-terminated string valid for the call.
unsafe fn read_cstr(ptr: *const u8) -> String {
    let mut bytes = Vec::new();
    let mut p = ptr;
    loop {
        let b = unsafe { *p };
        if b == 0 {
            break;
        }
        bytes.push(b);
        p = unsafe { p.add(1) };
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

impl Gateway for MockKernel {
    fn trap(&self, op: Syscall, args: [usize; 4]) -> isize {
        let mut state = self.state.borrow_mut();
        match op {
            Syscall::Read => {
                let (fd, ptr, len) = (args[0], args[1] as *mut u8, args[2]);
                match fd {
                    0 => 0,
                    1 | 2 => -1,
                    _ => {
                        let Some(open) = state.open_files.get(&fd) else {
                            return -1;
                        };
                        let (name, pos) = (open.name.clone(), open.pos);
                        let contents = &state.files[&name];
                        let n = len.min(contents.len().saturating_sub(pos));
                        unsafe {
                            core::ptr::copy_nonoverlapping(contents[pos..].as_ptr(), ptr, n);
                        }
                        state.open_files.get_mut(&fd).unwrap().pos += n;
                        n as isize
                    }
                }
            }
            Syscall::Write => {
                let (fd, ptr, len) = (args[0], args[1] as *const u8, args[2]);
                let bytes = unsafe { core::slice::from_raw_parts(ptr, len) };
                match fd {
                    1 | 2 => {
                        state.console_out.extend_from_slice(bytes);
                        len as isize
                    }
                    _ => {
                        let Some(open) = state.open_files.get(&fd) else {
                            return -1;
                        };
                        let (name, pos) = (open.name.clone(), open.pos);
                        let contents = state.files.get_mut(&name).unwrap();
                        if contents.len() < pos + len {
                            contents.resize(pos + len, 0);
                        }
                        contents[pos..pos + len].copy_from_slice(bytes);
                        state.open_files.get_mut(&fd).unwrap().pos += len;
                        len as isize
                    }
                }
            }
            Syscall::Open => {
                let name = unsafe { read_cstr(args[0] as *const u8) };
                if !state.files.contains_key(&name) {
                    return -1;
                }
                let fd = state.next_fd;
                state.next_fd += 1;
                state.open_files.insert(fd, OpenFile { name, pos: 0 });
                fd as isize
            }
            Syscall::Close => {
                if state.open_files.remove(&args[0]).is_some() {
                    0
                } else {
                    -1
                }
            }
            Syscall::Lseek => {
                let (fd, offset, whence) = (args[0], args[1] as isize, args[2]);
                let Some(open) = state.open_files.get(&fd) else {
                    return -1;
                };
                let len = state.files[&open.name].len() as isize;
                let base = match whence {
                    0 => 0,
                    1 => open.pos as isize,
                    2 => len,
                    _ => return -1,
                };
                let new = base + offset;
                if new < 0 {
                    return -1;
                }
                state.open_files.get_mut(&fd).unwrap().pos = new as usize;
                new
            }
            Syscall::Isatty => match args[0] {
                0..=2 => 1,
                fd if state.open_files.contains_key(&fd) => 0,
                _ => -1,
            },
            Syscall::AllocatePages => {
                let count = args[0];
                if count == 0 {
                    return -1;
                }
                // Leak on purpose: the caller keeps using the region for
                // the rest of the test.
                let region = Box::leak(alloc::vec![0u8; count * PAGE_SIZE].into_boxed_slice());
                region.as_ptr() as isize
            }
            Syscall::FreePages => 0,
            Syscall::Exit => {
                state.exited = true;
                0
            }
            Syscall::Getpid => state.pid as isize,
            Syscall::SendMessage => {
                // Safety: trap contract, RawMessage valid for the call.
                let raw = unsafe { core::ptr::read(args[0] as *const RawMessage) };
                let payload = if raw.data.is_null() || raw.length == 0 {
                    Vec::new()
                } else {
                    unsafe { core::slice::from_raw_parts(raw.data, raw.length as usize) }.to_vec()
                };
                let sender = state.pid;
                let Some(queue) = state.mailboxes.get_mut(&raw.receiver_pid) else {
                    return -1;
                };
                if queue.len() >= MAILBOX_CAPACITY {
                    return -1;
                }
                queue.push_back(QueuedMessage {
                    sender,
                    receiver: raw.receiver_pid,
                    kind: raw.kind,
                    payload,
                });
                0
            }
            Syscall::ReceiveMessage => {
                let pid = state.pid;
                let Some(queued) = state.mailboxes.get_mut(&pid).and_then(VecDeque::pop_front)
                else {
                    return 0;
                };
                let payload: Box<[u8]> = queued.payload.into_boxed_slice();
                let raw = Box::new(RawMessage {
                    sender_pid: queued.sender,
                    receiver_pid: queued.receiver,
                    data: if payload.is_empty() {
                        core::ptr::null()
                    } else {
                        payload.as_ptr()
                    },
                    length: payload.len() as u64,
                    kind: queued.kind,
                });
                let ptr = raw.as_ref() as *const RawMessage as isize;
                state.delivered.push(Delivered {
                    _raw: raw,
                    _payload: payload,
                });
                ptr
            }
            Syscall::CreateWindow => {
                // Safety: trap contract, RawWindowSpec valid for the call.
                let spec = unsafe { core::ptr::read(args[0] as *const RawWindowSpec) };
                if spec.width == 0 || spec.height == 0 {
                    return -1;
                }
                if state.windows.len() >= MAX_WINDOWS {
                    return -1;
                }
                let name = unsafe { read_cstr(spec.name) };
                state.windows.push(MockWindow {
                    width: spec.width,
                    height: spec.height,
                    name,
                    colour: spec.colour,
                    repaint: args[1] != 0,
                    paints: Vec::new(),
                    pixels: alloc::vec![0; spec.width as usize * spec.height as usize],
                });
                (state.windows.len() - 1) as isize
            }
            Syscall::GetEvent => {
                let event = state.events.pop_front().unwrap_or(Event::EMPTY);
                *state.event_slot = event;
                state.event_slot.as_ref() as *const Event as isize
            }
            Syscall::PaintString => {
                let text = unsafe { read_cstr(args[0] as *const u8) };
                let (wid, x, y) = (args[1], args[2], args[3]);
                let Some(window) = state.windows.get_mut(wid) else {
                    return -1;
                };
                if x >= window.width as usize || y >= window.height as usize {
                    return -1;
                }
                window.paints.push(PaintedText {
                    text,
                    x: x as u16,
                    y: y as u16,
                });
                0
            }
            Syscall::CopyToWinBuffer => {
                let (wid, ptr, count) = (args[0], args[1] as *const u32, args[2]);
                let Some(window) = state.windows.get_mut(wid) else {
                    return -1;
                };
                if count != window.width as usize * window.height as usize {
                    return -1;
                }
                let pixels = unsafe { core::slice::from_raw_parts(ptr, count) };
                window.pixels.copy_from_slice(pixels);
                0
            }
            Syscall::ProtocolVersion => state.protocol_version,
        }
    }
}
