//! Per-window presenter state machine: geometry, drag/resize sessions, and
//! the maximize/restore toggle.
//!
//! A presenter instance owns its window's geometry exclusively; the process
//! registry never sees positions or sizes. Minimize and close therefore never
//! touch geometry; a window restored from the taskbar reappears exactly
//! where it was.

use host_services::ViewportSize;

use crate::model::{PointerPoint, ResizeEdge, WindowGeometry};

/// Minimum managed window width under resize.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum managed window height under resize.
pub const MIN_WINDOW_HEIGHT: i32 = 140;

/// Default preset: position at 25%/10% and size at 50%/70% of the viewport.
pub fn default_geometry(viewport: ViewportSize) -> WindowGeometry {
    WindowGeometry {
        x: viewport.width / 4,
        y: viewport.height / 10,
        width: viewport.width / 2,
        height: viewport.height * 7 / 10,
    }
}

/// Maximized preset: origin-anchored, full width, 95% of the viewport height.
pub fn maximized_geometry(viewport: ViewportSize) -> WindowGeometry {
    WindowGeometry {
        x: 0,
        y: 0,
        width: viewport.width,
        height: viewport.height * 95 / 100,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    pointer_offset: PointerPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResizeSession {
    edge: ResizeEdge,
    pointer_start: PointerPoint,
    geometry_start: WindowGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interactive surface state for one managed window.
pub struct WindowPresenter {
    geometry: WindowGeometry,
    maximized_preset: WindowGeometry,
    restore_target: WindowGeometry,
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
}

impl WindowPresenter {
    /// Creates a presenter with presets derived from the viewport at mount.
    pub fn mount(viewport: ViewportSize) -> Self {
        let geometry = default_geometry(viewport);
        Self {
            geometry,
            maximized_preset: maximized_geometry(viewport),
            restore_target: geometry,
            drag: None,
            resize: None,
        }
    }

    /// Current window geometry.
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    /// Whether the current geometry equals the maximized preset exactly.
    ///
    /// The comparison covers position AND size; a maximized window that was
    /// dragged away no longer counts as maximized.
    pub fn is_maximized(&self) -> bool {
        self.geometry == self.maximized_preset
    }

    /// Whether a drag or resize session is active and global pointer
    /// listeners must stay bound.
    pub fn is_tracking(&self) -> bool {
        self.drag.is_some() || self.resize.is_some()
    }

    /// Starts a drag session, capturing the pointer-to-origin offset.
    pub fn begin_drag(&mut self, pointer: PointerPoint) {
        self.resize = None;
        self.drag = Some(DragSession {
            pointer_offset: PointerPoint {
                x: pointer.x - self.geometry.x,
                y: pointer.y - self.geometry.y,
            },
        });
    }

    /// Starts a resize session for the given edge. Ignored while maximized.
    pub fn begin_resize(&mut self, edge: ResizeEdge, pointer: PointerPoint) {
        if self.is_maximized() {
            return;
        }
        self.drag = None;
        self.resize = Some(ResizeSession {
            edge,
            pointer_start: pointer,
            geometry_start: self.geometry,
        });
    }

    /// Advances the active session for a pointer move; no-op otherwise.
    ///
    /// Drag positions are never clamped; windows may leave the viewport.
    pub fn pointer_move(&mut self, pointer: PointerPoint) {
        if let Some(drag) = self.drag {
            self.geometry.x = pointer.x - drag.pointer_offset.x;
            self.geometry.y = pointer.y - drag.pointer_offset.y;
        } else if let Some(resize) = self.resize {
            let dx = pointer.x - resize.pointer_start.x;
            let dy = pointer.y - resize.pointer_start.y;
            self.geometry = resize_geometry(resize.geometry_start, resize.edge, dx, dy)
                .with_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        }
    }

    /// Ends any active drag/resize session, keeping the last geometry.
    pub fn end_session(&mut self) {
        self.drag = None;
        self.resize = None;
    }

    /// Toggles between the maximized preset and the remembered geometry.
    pub fn toggle_maximize(&mut self) {
        if self.is_maximized() {
            self.geometry = self.restore_target;
        } else {
            self.restore_target = self.geometry;
            self.geometry = self.maximized_preset;
        }
    }
}

fn resize_geometry(start: WindowGeometry, edge: ResizeEdge, dx: i32, dy: i32) -> WindowGeometry {
    match edge {
        ResizeEdge::East => WindowGeometry {
            width: start.width + dx,
            ..start
        },
        ResizeEdge::West => WindowGeometry {
            x: start.x + dx,
            width: start.width - dx,
            ..start
        },
        ResizeEdge::South => WindowGeometry {
            height: start.height + dy,
            ..start
        },
        ResizeEdge::North => WindowGeometry {
            y: start.y + dy,
            height: start.height - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowGeometry {
            y: start.y + dy,
            width: start.width + dx,
            height: start.height - dy,
            ..start
        },
        ResizeEdge::NorthWest => WindowGeometry {
            x: start.x + dx,
            y: start.y + dy,
            width: start.width - dx,
            height: start.height - dy,
        },
        ResizeEdge::SouthEast => WindowGeometry {
            width: start.width + dx,
            height: start.height + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowGeometry {
            x: start.x + dx,
            width: start.width - dx,
            height: start.height + dy,
            ..start
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn viewport() -> ViewportSize {
        ViewportSize {
            width: 1000,
            height: 800,
        }
    }

    #[test]
    fn mount_derives_default_presets_from_the_viewport() {
        let presenter = WindowPresenter::mount(viewport());
        assert_eq!(
            presenter.geometry(),
            WindowGeometry {
                x: 250,
                y: 80,
                width: 500,
                height: 560,
            }
        );
        assert!(!presenter.is_maximized());
    }

    #[test]
    fn drag_applies_the_total_pointer_delta_regardless_of_move_count() {
        let mut presenter = WindowPresenter::mount(viewport());
        let start = presenter.geometry();

        presenter.begin_drag(PointerPoint { x: 300, y: 120 });
        for step in [
            PointerPoint { x: 301, y: 125 },
            PointerPoint { x: 340, y: 90 },
            PointerPoint { x: 280, y: 300 },
            PointerPoint { x: 412, y: 205 },
        ] {
            presenter.pointer_move(step);
        }
        presenter.end_session();

        // Final position depends only on W0 + (P1 - P0).
        assert_eq!(presenter.geometry().x, start.x + (412 - 300));
        assert_eq!(presenter.geometry().y, start.y + (205 - 120));
        assert_eq!(presenter.geometry().width, start.width);
        assert_eq!(presenter.geometry().height, start.height);
    }

    #[test]
    fn drag_allows_offscreen_positions() {
        let mut presenter = WindowPresenter::mount(viewport());
        presenter.begin_drag(PointerPoint { x: 260, y: 90 });
        presenter.pointer_move(PointerPoint { x: -500, y: -300 });

        assert!(presenter.geometry().x < 0);
        assert!(presenter.geometry().y < 0);
    }

    #[test]
    fn pointer_moves_outside_a_session_are_ignored() {
        let mut presenter = WindowPresenter::mount(viewport());
        let before = presenter.geometry();
        presenter.pointer_move(PointerPoint { x: 900, y: 700 });
        assert_eq!(presenter.geometry(), before);
    }

    #[test]
    fn maximize_matches_the_viewport_preset() {
        let mut presenter = WindowPresenter::mount(viewport());
        presenter.toggle_maximize();
        assert_eq!(
            presenter.geometry(),
            WindowGeometry {
                x: 0,
                y: 0,
                width: 1000,
                height: 760,
            }
        );
        assert!(presenter.is_maximized());
    }

    #[test]
    fn maximize_round_trip_restores_the_exact_pre_maximize_geometry() {
        let mut presenter = WindowPresenter::mount(viewport());

        // Any starting geometry, not just the default preset.
        presenter.begin_drag(PointerPoint { x: 260, y: 90 });
        presenter.pointer_move(PointerPoint { x: 123, y: 456 });
        presenter.end_session();
        let dragged = presenter.geometry();

        presenter.toggle_maximize();
        presenter.toggle_maximize();
        assert_eq!(presenter.geometry(), dragged);
    }

    #[test]
    fn dragging_a_maximized_window_demotes_it_to_normal_state() {
        let mut presenter = WindowPresenter::mount(viewport());
        presenter.toggle_maximize();

        presenter.begin_drag(PointerPoint { x: 500, y: 10 });
        presenter.pointer_move(PointerPoint { x: 520, y: 60 });
        presenter.end_session();

        assert!(!presenter.is_maximized());
        // The next toggle maximizes again and remembers the dragged spot.
        let dragged = presenter.geometry();
        presenter.toggle_maximize();
        presenter.toggle_maximize();
        assert_eq!(presenter.geometry(), dragged);
    }

    #[test]
    fn resize_from_the_south_east_grows_size_only() {
        let mut presenter = WindowPresenter::mount(viewport());
        let start = presenter.geometry();

        presenter.begin_resize(ResizeEdge::SouthEast, PointerPoint { x: 750, y: 640 });
        presenter.pointer_move(PointerPoint { x: 800, y: 700 });
        presenter.end_session();

        assert_eq!(
            presenter.geometry(),
            WindowGeometry {
                x: start.x,
                y: start.y,
                width: start.width + 50,
                height: start.height + 60,
            }
        );
    }

    #[test]
    fn resize_from_the_north_west_moves_origin_and_shrinks() {
        let mut presenter = WindowPresenter::mount(viewport());
        let start = presenter.geometry();

        presenter.begin_resize(ResizeEdge::NorthWest, PointerPoint { x: 250, y: 80 });
        presenter.pointer_move(PointerPoint { x: 270, y: 100 });

        assert_eq!(
            presenter.geometry(),
            WindowGeometry {
                x: start.x + 20,
                y: start.y + 20,
                width: start.width - 20,
                height: start.height - 20,
            }
        );
    }

    #[test]
    fn resize_clamps_to_minimum_dimensions() {
        let mut presenter = WindowPresenter::mount(viewport());

        presenter.begin_resize(ResizeEdge::East, PointerPoint { x: 750, y: 300 });
        presenter.pointer_move(PointerPoint { x: -2000, y: 300 });

        assert_eq!(presenter.geometry().width, MIN_WINDOW_WIDTH);
    }

    #[test]
    fn resize_is_ignored_while_maximized() {
        let mut presenter = WindowPresenter::mount(viewport());
        presenter.toggle_maximize();
        let before = presenter.geometry();

        presenter.begin_resize(ResizeEdge::South, PointerPoint { x: 500, y: 755 });
        presenter.pointer_move(PointerPoint { x: 500, y: 900 });

        assert!(!presenter.is_tracking());
        assert_eq!(presenter.geometry(), before);
    }
}
