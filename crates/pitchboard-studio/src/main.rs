//! Headless demo: replays a short editing session against the editor core
//! and exports the resulting board as JSON.
//!
//! Usage: `pitchboard-studio [output.json]` — without an argument the JSON
//! goes to stdout.

use anyhow::Context;
use pitchboard_board::{Editor, Tool, persist, render};
use pitchboard_engine::coords::Vec2;
use pitchboard_engine::input::{MouseButton, PointerEvent, WheelDelta};
use pitchboard_engine::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging(None);

    let mut editor = Editor::new();
    let mut repaints = 0usize;

    let keeper = Vec2::new(1080.0, 350.0);

    // Drag the home keeper off his line.
    replay(&mut editor, &mut repaints, [
        PointerEvent::Down { button: MouseButton::Left, pos: keeper },
        PointerEvent::Moved { pos: keeper + Vec2::new(-30.0, 10.0) },
        PointerEvent::Up { button: MouseButton::Left, pos: keeper + Vec2::new(-30.0, 10.0) },
    ]);

    // Sketch a pressing run with the pen.
    editor.set_tool(Tool::Pen);
    replay(&mut editor, &mut repaints, [
        PointerEvent::Down { button: MouseButton::Left, pos: Vec2::new(700.0, 250.0) },
        PointerEvent::Moved { pos: Vec2::new(760.0, 230.0) },
        PointerEvent::Moved { pos: Vec2::new(830.0, 250.0) },
        PointerEvent::Up { button: MouseButton::Left, pos: Vec2::new(830.0, 250.0) },
    ]);
    editor.set_tool(Tool::Move);

    // Band-select the home back four, then pan and zoom the view.
    replay(&mut editor, &mut repaints, [
        PointerEvent::Down { button: MouseButton::Right, pos: Vec2::new(900.0, 100.0) },
        PointerEvent::Moved { pos: Vec2::new(1000.0, 600.0) },
        PointerEvent::Up { button: MouseButton::Right, pos: Vec2::new(1000.0, 600.0) },
        PointerEvent::Down { button: MouseButton::Middle, pos: Vec2::new(400.0, 300.0) },
        PointerEvent::Moved { pos: Vec2::new(420.0, 280.0) },
        PointerEvent::Up { button: MouseButton::Middle, pos: Vec2::new(420.0, 280.0) },
        PointerEvent::Wheel { delta: WheelDelta::new(0.0, -1.0), pos: Vec2::new(600.0, 350.0) },
        PointerEvent::Wheel { delta: WheelDelta::new(0.0, -1.0), pos: Vec2::new(600.0, 350.0) },
    ]);

    let list = render::draw_board(editor.board(), editor.selection_rect());
    log::info!(
        "session done: {repaints} repaints, {} selected, {} stroke(s), {} draw items, zoom {:.2}",
        editor.board().selection().len(),
        editor.board().strokes().len(),
        list.len(),
        editor.camera().scale(),
    );

    let json = persist::export_json(editor.board()).context("exporting board")?;
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, &json).with_context(|| format!("writing {path}"))?;
            log::info!("board written to {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn replay(
    editor: &mut Editor,
    repaints: &mut usize,
    events: impl IntoIterator<Item = PointerEvent>,
) {
    for event in events {
        if editor.handle(event).needs_redraw() {
            *repaints += 1;
        }
    }
}
