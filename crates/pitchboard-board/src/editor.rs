//! Pointer gesture state machine.
//!
//! One [`Editor`] owns the board, the camera, the active tool, and the
//! current gesture. Every pointer or wheel event is handled to completion
//! and reports whether the host should repaint.

use pitchboard_engine::coords::{Rect, Vec2};
use pitchboard_engine::input::{MouseButton, PointerEvent, WheelDelta};
use pitchboard_engine::view::{Camera, ZoomDirection};

use crate::hit;
use crate::model::Board;

/// Active annotation tool. `Move` is the default and also the only tool
/// that selects and drags markers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Tool {
    #[default]
    Move,
    Pen,
    Eraser,
}

/// Outcome of one input event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventResult {
    /// State visible to the user changed — repaint.
    Redraw,
    /// Nothing visible changed.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn needs_redraw(self) -> bool {
        self == EventResult::Redraw
    }
}

/// The in-flight gesture, one per pointer-down-to-up sequence.
///
/// The eraser never appears here: it fires once at pointer-down and has no
/// drag phase.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Gesture {
    Idle,
    /// Middle-drag view pan. `anchor` is the down point minus the camera
    /// offset at that moment, so `offset = pos - anchor` tracks the grab.
    Panning { anchor: Vec2 },
    /// Pen stroke in progress; vertices go to the board's active stroke.
    Drawing,
    /// Right-drag rubber band from `start` (world space).
    RangeSelecting { start: Vec2 },
    /// Left-drag of the selection; `last_world` is the previous sample, so
    /// each move applies only the incremental delta.
    Dragging { last_world: Vec2 },
}

/// The interaction controller.
#[derive(Debug)]
pub struct Editor {
    board: Board,
    camera: Camera,
    tool: Tool,
    gesture: Gesture,
    /// Rubber-band overlay in world space while range-selecting.
    selection_rect: Option<Rect>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            board: Board::new(),
            camera: Camera::new(),
            tool: Tool::default(),
            gesture: Gesture::Idle,
            selection_rect: None,
        }
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Rubber-band rectangle while a range selection is in progress.
    #[inline]
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect
    }

    /// Replaces the whole board, e.g. after a file import. Any in-flight
    /// gesture is abandoned.
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.gesture = Gesture::Idle;
        self.selection_rect = None;
    }

    /// Resets both teams to the default formation and clears annotations.
    pub fn reset_formation(&mut self) -> EventResult {
        self.board.reset_formation();
        EventResult::Redraw
    }

    /// Sets the player marker radius; see [`Board::set_player_radius`].
    pub fn set_player_radius(&mut self, r: f32) -> EventResult {
        if self.board.set_player_radius(r) {
            EventResult::Redraw
        } else {
            EventResult::Ignored
        }
    }

    /// Sets the ball radius; see [`Board::set_ball_radius`].
    pub fn set_ball_radius(&mut self, r: f32) -> EventResult {
        if self.board.set_ball_radius(r) {
            EventResult::Redraw
        } else {
            EventResult::Ignored
        }
    }

    // ── event entry point ─────────────────────────────────────────────────

    /// Handles one input event and reports whether to repaint.
    pub fn handle(&mut self, event: PointerEvent) -> EventResult {
        match event {
            PointerEvent::Down { button, pos } => self.on_pointer_down(button, pos),
            PointerEvent::Moved { pos } => self.on_pointer_move(pos),
            PointerEvent::Up { .. } => self.on_pointer_up(),
            PointerEvent::Wheel { delta, pos } => self.on_wheel(delta, pos),
            PointerEvent::CaptureLost => self.cancel_gesture(),
        }
    }

    // ── pointer down ──────────────────────────────────────────────────────

    fn on_pointer_down(&mut self, button: MouseButton, pos: Vec2) -> EventResult {
        let world = self.camera.to_world(pos);

        // Button bindings beat the tool: middle always pans, right always
        // range-selects.
        match button {
            MouseButton::Middle => {
                self.gesture = Gesture::Panning {
                    anchor: pos - self.camera.offset,
                };
                return EventResult::Ignored;
            }
            MouseButton::Right => {
                self.board.clear_selection();
                self.selection_rect = Some(Rect::from_corners(world, world));
                self.gesture = Gesture::RangeSelecting { start: world };
                return EventResult::Redraw;
            }
            MouseButton::Left => {}
            MouseButton::Other(code) => {
                log::trace!("unbound pointer button {code}");
                return EventResult::Ignored;
            }
        }

        match self.tool {
            Tool::Pen => {
                self.board.begin_stroke(world);
                self.gesture = Gesture::Drawing;
                EventResult::Redraw
            }
            Tool::Eraser => {
                // Single shot: erase and stay idle, no drag phase.
                self.board
                    .erase_strokes_near(world, hit::STROKE_HIT_RADIUS);
                EventResult::Redraw
            }
            Tool::Move => self.on_move_tool_down(world),
        }
    }

    fn on_move_tool_down(&mut self, world: Vec2) -> EventResult {
        match hit::pick_entity(&self.board, world) {
            Some(id) => {
                // A click on an already-selected entity keeps the group, so
                // a multi-selection can be dragged as one.
                if !self.board.selection().contains(&id) {
                    self.board.replace_selection([id]);
                    self.board.bring_to_front(id);
                }
                self.gesture = Gesture::Dragging { last_world: world };
            }
            None => {
                // Only a click on empty board clears the selection.
                self.board.clear_selection();
            }
        }
        EventResult::Redraw
    }

    // ── pointer move ──────────────────────────────────────────────────────

    fn on_pointer_move(&mut self, pos: Vec2) -> EventResult {
        let world = self.camera.to_world(pos);

        match self.gesture {
            Gesture::Idle => EventResult::Ignored,

            Gesture::Panning { anchor } => {
                self.camera.pan_to(pos - anchor);
                EventResult::Redraw
            }

            Gesture::Drawing => {
                self.board.append_active_stroke(world);
                EventResult::Redraw
            }

            Gesture::RangeSelecting { start } => {
                let rect = Rect::from_corners(start, world);
                self.selection_rect = Some(rect);
                // Recomputed from scratch on every move; shrinking the band
                // deselects again.
                self.board.select_in_rect(rect);
                EventResult::Redraw
            }

            Gesture::Dragging { last_world } => {
                self.board.move_selected(world - last_world);
                self.gesture = Gesture::Dragging { last_world: world };
                EventResult::Redraw
            }
        }
    }

    // ── pointer up ────────────────────────────────────────────────────────

    fn on_pointer_up(&mut self) -> EventResult {
        let finished = self.gesture;
        self.gesture = Gesture::Idle;

        match finished {
            // The band overlay disappears; the selection it computed stays.
            Gesture::RangeSelecting { .. } => {
                self.selection_rect = None;
                EventResult::Redraw
            }
            // Pan keeps the view, drag/draw keep their applied edits, and a
            // plain release never clears a non-empty selection.
            _ => EventResult::Ignored,
        }
    }

    // ── wheel / capture ───────────────────────────────────────────────────

    /// Wheel always zooms, never pans, whatever the gesture state.
    fn on_wheel(&mut self, delta: WheelDelta, pos: Vec2) -> EventResult {
        let direction = if delta.y > 0.0 {
            ZoomDirection::Out
        } else {
            ZoomDirection::In
        };
        self.camera.zoom_at(pos, direction);
        EventResult::Redraw
    }

    /// Abandons any in-flight gesture, e.g. when the surface loses pointer
    /// capture. Edits already applied stay applied.
    fn cancel_gesture(&mut self) -> EventResult {
        let had_overlay = self.selection_rect.take().is_some();
        let was_active = self.gesture != Gesture::Idle;
        self.gesture = Gesture::Idle;

        if had_overlay || was_active {
            EventResult::Redraw
        } else {
            EventResult::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;

    const KEEPER: Vec2 = Vec2::new(1080.0, 350.0);

    fn down(editor: &mut Editor, button: MouseButton, pos: Vec2) -> EventResult {
        editor.handle(PointerEvent::Down { button, pos })
    }

    fn moved(editor: &mut Editor, pos: Vec2) -> EventResult {
        editor.handle(PointerEvent::Moved { pos })
    }

    fn up(editor: &mut Editor, pos: Vec2) -> EventResult {
        editor.handle(PointerEvent::Up {
            button: MouseButton::Left,
            pos,
        })
    }

    fn wheel(editor: &mut Editor, y: f32, pos: Vec2) -> EventResult {
        editor.handle(PointerEvent::Wheel {
            delta: WheelDelta::new(0.0, y),
            pos,
        })
    }

    // ── selection & drag ──────────────────────────────────────────────────

    #[test]
    fn click_selects_and_raises_the_hit_player() {
        let mut editor = Editor::new();
        let keeper = editor.board().players()[0].id;

        down(&mut editor, MouseButton::Left, KEEPER);
        up(&mut editor, KEEPER);

        assert!(editor.board().selection().contains(&EntityId::Player(keeper)));
        assert_eq!(editor.board().players().last().unwrap().id, keeper);
    }

    #[test]
    fn click_on_selected_entity_keeps_the_group() {
        let mut editor = Editor::new();
        let a = EntityId::Player(editor.board().players()[0].id);
        let b = EntityId::Ball;

        // Pre-select a group, then click one member.
        let mut board = editor.board().clone();
        board.replace_selection([a, b]);
        editor.replace_board(board);

        down(&mut editor, MouseButton::Left, KEEPER);
        up(&mut editor, KEEPER);

        assert_eq!(editor.board().selection().len(), 2);
        assert!(editor.board().selection().contains(&b));
    }

    #[test]
    fn click_on_selected_entity_does_not_reorder() {
        let mut editor = Editor::new();
        let keeper = editor.board().players()[0].id;

        let mut board = editor.board().clone();
        board.replace_selection([EntityId::Player(keeper)]);
        editor.replace_board(board);

        down(&mut editor, MouseButton::Left, KEEPER);
        up(&mut editor, KEEPER);

        // Raised only on fresh selection; the keeper stays at index 0.
        assert_eq!(editor.board().players()[0].id, keeper);
    }

    #[test]
    fn click_on_empty_board_clears_selection() {
        let mut editor = Editor::new();
        down(&mut editor, MouseButton::Left, KEEPER);
        assert_eq!(editor.board().selection().len(), 1);
        up(&mut editor, KEEPER);

        down(&mut editor, MouseButton::Left, Vec2::new(-300.0, -300.0));
        assert!(editor.board().selection().is_empty());
    }

    #[test]
    fn drag_moves_the_whole_selection_incrementally() {
        let mut editor = Editor::new();
        down(&mut editor, MouseButton::Left, KEEPER);
        moved(&mut editor, KEEPER + Vec2::new(10.0, 0.0));
        moved(&mut editor, KEEPER + Vec2::new(25.0, 5.0));
        up(&mut editor, KEEPER + Vec2::new(25.0, 5.0));

        let pos = editor.board().players().last().unwrap().pos;
        assert_eq!(pos, KEEPER + Vec2::new(25.0, 5.0));
    }

    #[test]
    fn selecting_the_ball_reorders_nothing() {
        let mut editor = Editor::new();
        let order: Vec<_> = editor.board().players().iter().map(|m| m.id).collect();

        let ball = editor.board().ball();
        down(&mut editor, MouseButton::Left, ball);
        up(&mut editor, ball);

        assert!(editor.board().selection().contains(&EntityId::Ball));
        let after: Vec<_> = editor.board().players().iter().map(|m| m.id).collect();
        assert_eq!(order, after);
    }

    // ── range select ──────────────────────────────────────────────────────

    #[test]
    fn range_select_keeps_selection_after_release() {
        let mut editor = Editor::new();

        // Band around the home back line at x = 940 (mirrored 260-column).
        down(&mut editor, MouseButton::Right, Vec2::new(900.0, 100.0));
        moved(&mut editor, Vec2::new(1000.0, 600.0));
        assert!(editor.selection_rect().is_some());
        assert_eq!(editor.board().selection().len(), 4);

        up(&mut editor, Vec2::new(1000.0, 600.0));
        assert!(editor.selection_rect().is_none());
        assert_eq!(editor.board().selection().len(), 4);
    }

    #[test]
    fn range_select_recomputes_on_shrink() {
        let mut editor = Editor::new();
        down(&mut editor, MouseButton::Right, Vec2::new(900.0, 100.0));
        moved(&mut editor, Vec2::new(1000.0, 600.0));
        assert_eq!(editor.board().selection().len(), 4);

        moved(&mut editor, Vec2::new(1000.0, 200.0));
        assert_eq!(editor.board().selection().len(), 1);
    }

    #[test]
    fn range_select_excludes_markers_on_the_band_edge() {
        let mut editor = Editor::new();
        // Keeper at (1080, 350): band edge passes exactly through it.
        down(&mut editor, MouseButton::Right, Vec2::new(1080.0, 300.0));
        moved(&mut editor, Vec2::new(1150.0, 400.0));
        assert!(editor.board().selection().is_empty());
    }

    #[test]
    fn right_click_clears_previous_selection() {
        let mut editor = Editor::new();
        down(&mut editor, MouseButton::Left, KEEPER);
        up(&mut editor, KEEPER);
        assert_eq!(editor.board().selection().len(), 1);

        down(&mut editor, MouseButton::Right, Vec2::new(0.0, 0.0));
        assert!(editor.board().selection().is_empty());
    }

    // ── pen & eraser ──────────────────────────────────────────────────────

    #[test]
    fn pen_gesture_builds_one_stroke() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Pen);

        down(&mut editor, MouseButton::Left, Vec2::new(10.0, 10.0));
        moved(&mut editor, Vec2::new(20.0, 15.0));
        moved(&mut editor, Vec2::new(30.0, 25.0));
        up(&mut editor, Vec2::new(30.0, 25.0));

        assert_eq!(editor.board().strokes().len(), 1);
        assert_eq!(editor.board().strokes()[0].points().len(), 3);
    }

    #[test]
    fn pen_points_are_stored_in_world_space() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Pen);

        // Zoom in first; screen coords must land converted on the board.
        wheel(&mut editor, -1.0, Vec2::zero());
        let screen = Vec2::new(110.0, 110.0);
        let world = editor.camera().to_world(screen);

        down(&mut editor, MouseButton::Left, screen);
        up(&mut editor, screen);
        assert_eq!(editor.board().strokes()[0].points()[0], world);
    }

    #[test]
    fn eraser_fires_once_with_no_drag_phase() {
        let mut editor = Editor::new();
        editor.set_tool(Tool::Pen);
        down(&mut editor, MouseButton::Left, Vec2::new(50.0, 50.0));
        up(&mut editor, Vec2::new(50.0, 50.0));

        editor.set_tool(Tool::Eraser);
        down(&mut editor, MouseButton::Left, Vec2::new(52.0, 52.0));
        assert!(editor.board().strokes().is_empty());

        // Moving with the button held must not erase or draw anything.
        editor.set_tool(Tool::Pen);
        down(&mut editor, MouseButton::Left, Vec2::new(200.0, 200.0));
        up(&mut editor, Vec2::new(200.0, 200.0));
        editor.set_tool(Tool::Eraser);
        let r = moved(&mut editor, Vec2::new(201.0, 201.0));
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(editor.board().strokes().len(), 1);
    }

    // ── pan & zoom ────────────────────────────────────────────────────────

    #[test]
    fn middle_drag_pans_the_camera() {
        let mut editor = Editor::new();
        down(&mut editor, MouseButton::Middle, Vec2::new(100.0, 100.0));
        moved(&mut editor, Vec2::new(140.0, 90.0));
        up(&mut editor, Vec2::new(140.0, 90.0));

        assert_eq!(editor.camera().offset, Vec2::new(40.0, -10.0));
    }

    #[test]
    fn wheel_zooms_even_mid_gesture() {
        let mut editor = Editor::new();
        down(&mut editor, MouseButton::Middle, Vec2::zero());

        let r = wheel(&mut editor, -1.0, Vec2::new(400.0, 300.0));
        assert_eq!(r, EventResult::Redraw);
        assert!(editor.camera().scale() > 1.0);
    }

    #[test]
    fn wheel_sign_selects_direction() {
        let mut editor = Editor::new();
        wheel(&mut editor, 1.0, Vec2::zero());
        assert!(editor.camera().scale() < 1.0);

        wheel(&mut editor, -1.0, Vec2::zero());
        wheel(&mut editor, -1.0, Vec2::zero());
        assert!(editor.camera().scale() > 1.0);
    }

    // ── capture loss ──────────────────────────────────────────────────────

    #[test]
    fn capture_loss_abandons_the_gesture_but_keeps_edits() {
        let mut editor = Editor::new();
        down(&mut editor, MouseButton::Left, KEEPER);
        moved(&mut editor, KEEPER + Vec2::new(15.0, 0.0));

        editor.handle(PointerEvent::CaptureLost);

        // Applied movement stays; further moves change nothing.
        let pos = editor.board().players().last().unwrap().pos;
        assert_eq!(pos, KEEPER + Vec2::new(15.0, 0.0));
        let r = moved(&mut editor, KEEPER + Vec2::new(80.0, 0.0));
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(editor.board().players().last().unwrap().pos, pos);
    }
}
