//! Draw pass: board state in, draw stream out.
//!
//! Pure function of the board and the overlay; a renderer applies the
//! camera transform and rasterizes the [`DrawList`] back-to-front. Nothing
//! here feeds back into the model.

use pitchboard_engine::coords::{Rect, Vec2};
use pitchboard_engine::paint::Color;
use pitchboard_engine::scene::shapes::DashPattern;
use pitchboard_engine::scene::{DrawList, ZIndex};

use crate::model::{Board, EntityId};

// Paint layers, back to front.
const FIELD_LAYER: ZIndex = ZIndex::new(0);
const STROKE_LAYER: ZIndex = ZIndex::new(10);
const OPPONENT_LAYER: ZIndex = ZIndex::new(20);
const PLAYER_LAYER: ZIndex = ZIndex::new(30);
const BALL_LAYER: ZIndex = ZIndex::new(40);
const OVERLAY_LAYER: ZIndex = ZIndex::new(50);

// Role colors, with the washed-out variant marking selected entities.
const PLAYER_FILL: Color = Color::from_rgb8(0x00, 0x00, 0xff);
const PLAYER_FILL_SELECTED: Color = Color::from_rgb8(0xaa, 0xdd, 0xff);
const OPPONENT_FILL: Color = Color::from_rgb8(0xff, 0x00, 0x00);
const OPPONENT_FILL_SELECTED: Color = Color::from_rgb8(0xff, 0xbb, 0xbb);
const BALL_FILL: Color = Color::BLACK;
const BALL_FILL_SELECTED: Color = Color::from_rgb8(0x88, 0x88, 0x88);

const LINE_COLOR: Color = Color::BLACK;
const LINE_WIDTH: f32 = 1.0;
const BAND_DASH: DashPattern = DashPattern { on: 6.0, off: 4.0 };

// Field diagram, in world units.
const FIELD_OUTLINE: Rect = Rect::new(50.0, 50.0, 1100.0, 600.0);
const LEFT_GOAL_BOX: Rect = Rect::new(50.0, 300.0, 25.0, 100.0);
const RIGHT_GOAL_BOX: Rect = Rect::new(1125.0, 300.0, 25.0, 100.0);
const CENTER: Vec2 = Vec2::new(600.0, 350.0);
const CENTER_CIRCLE_RADIUS: f32 = 80.0;

/// Records the full board into a fresh draw list.
///
/// `overlay` is the in-progress range-select band, drawn dashed on top of
/// everything.
pub fn draw_board(board: &Board, overlay: Option<Rect>) -> DrawList {
    let mut list = DrawList::new();
    record_board(board, overlay, &mut list);
    list
}

/// Same as [`draw_board`] but reuses a caller-owned list, keeping its
/// allocations warm across frames.
pub fn record_board(board: &Board, overlay: Option<Rect>, list: &mut DrawList) {
    list.clear();

    draw_field(list);

    for stroke in board.strokes() {
        list.push_polyline(
            STROKE_LAYER,
            stroke.points().to_vec(),
            LINE_COLOR,
            LINE_WIDTH,
        );
    }

    let selection = board.selection();

    for m in board.opponents() {
        let selected = selection.contains(&EntityId::Opponent(m.id));
        list.push_circle(
            OPPONENT_LAYER,
            m.pos,
            board.player_radius(),
            if selected { OPPONENT_FILL_SELECTED } else { OPPONENT_FILL },
            Some(LINE_COLOR),
        );
    }

    for m in board.players() {
        let selected = selection.contains(&EntityId::Player(m.id));
        list.push_circle(
            PLAYER_LAYER,
            m.pos,
            board.player_radius(),
            if selected { PLAYER_FILL_SELECTED } else { PLAYER_FILL },
            Some(LINE_COLOR),
        );
    }

    let ball_selected = selection.contains(&EntityId::Ball);
    list.push_circle(
        BALL_LAYER,
        board.ball(),
        board.ball_radius(),
        if ball_selected { BALL_FILL_SELECTED } else { BALL_FILL },
        Some(LINE_COLOR),
    );

    if let Some(band) = overlay {
        list.push_dashed_rect(OVERLAY_LAYER, band, LINE_COLOR, LINE_WIDTH, BAND_DASH);
    }
}

fn draw_field(list: &mut DrawList) {
    list.push_stroke_rect(FIELD_LAYER, FIELD_OUTLINE, LINE_COLOR, LINE_WIDTH);

    // Halfway line.
    list.push_polyline(
        FIELD_LAYER,
        vec![Vec2::new(600.0, 50.0), Vec2::new(600.0, 650.0)],
        LINE_COLOR,
        LINE_WIDTH,
    );

    // Center circle: outline only.
    list.push_circle(
        FIELD_LAYER,
        CENTER,
        CENTER_CIRCLE_RADIUS,
        Color::TRANSPARENT,
        Some(LINE_COLOR),
    );

    list.push_stroke_rect(FIELD_LAYER, LEFT_GOAL_BOX, LINE_COLOR, LINE_WIDTH);
    list.push_stroke_rect(FIELD_LAYER, RIGHT_GOAL_BOX, LINE_COLOR, LINE_WIDTH);
}
