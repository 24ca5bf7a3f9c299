//! Core data model for the desktop shell: process records, shell state, and
//! window geometry types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Unique identifier of a running simulated application instance.
pub struct ProcessId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Application tag identifying which view a process mounts.
///
/// Tags arrive as small integers from launch surfaces; anything unrecognized
/// maps to [`ApplicationKind::Unknown`] and resolves to a blank window rather
/// than an error; the registry never validates kinds.
pub enum ApplicationKind {
    /// Plain-text editor.
    Notepad,
    /// Embedded browser frame.
    Webview,
    /// Embedded code editor frame.
    Codepad,
    /// Unrecognized tag; mounts the blank fallback window.
    Unknown,
}

impl ApplicationKind {
    /// Maps a numeric launch tag to a kind.
    pub const fn from_tag(tag: u32) -> Self {
        match tag {
            1 => Self::Notepad,
            2 => Self::Webview,
            3 => Self::Codepad,
            _ => Self::Unknown,
        }
    }

    /// Stable numeric tag for this kind.
    pub const fn tag(self) -> u32 {
        match self {
            Self::Notepad => 1,
            Self::Webview => 2,
            Self::Codepad => 3,
            Self::Unknown => 0,
        }
    }

    /// Default window title for this kind.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Notepad => "Notepad",
            Self::Webview => "Web Browser",
            Self::Codepad => "Code",
            Self::Unknown => "Window",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One registry entry: a running simulated application instance.
pub struct ProcessRecord {
    /// Unique process id.
    pub id: ProcessId,
    /// Application view tag.
    pub kind: ApplicationKind,
    /// Front-to-back layering key; higher renders in front. The maximum
    /// among non-minimized processes is the focused window.
    pub stack_order: u32,
    /// Minimized processes are excluded from normal stacking but stay in
    /// the registry.
    pub minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Whole-shell state snapshot: the process registry plus start panel state.
pub struct ShellState {
    /// Next process id to assign.
    pub next_process_id: u64,
    /// Registry in insertion order; stacking is resolved via `stack_order`,
    /// never via list position.
    pub processes: Vec<ProcessRecord>,
    /// Whether the start panel popup is open.
    pub start_menu_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            next_process_id: 1,
            processes: Vec::new(),
            start_menu_open: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in viewport CSS pixels.
pub struct PointerPoint {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window position and size owned by a presenter instance.
pub struct WindowGeometry {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Outer width.
    pub width: i32,
    /// Outer height.
    pub height: i32,
}

impl WindowGeometry {
    /// Returns the geometry translated by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the geometry with size clamped to the given minimums.
    pub fn with_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner grabbed during a resize session.
pub enum ResizeEdge {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}
