//! GameView tests - rendering engine state into a framebuffer

use blockfall::core::GameState;
use blockfall::term::{piece_color, FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};

fn fb_to_string(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn drive_to_game_over(state: &mut GameState) {
    for _ in 0..(BOARD_WIDTH as u32 * BOARD_HEIGHT as u32) {
        if state.game_over() {
            return;
        }
        state.apply_action(GameAction::HardDrop, 0);
    }
    panic!("stacking should have ended the game");
}

#[test]
fn test_renders_border_corners() {
    let state = GameState::new(1);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20, plus border => 22x22
    let fb = view.render(&state, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn test_active_piece_drawn_in_catalog_color() {
    let state = GameState::new(1);
    let view = GameView::default();
    let fb = view.render(&state, Viewport::new(22, 22));

    let active = state.active();
    let (dx, dy) = active.shape.cells()[0];
    // Inside border: (1,1) origin, two columns per board cell.
    let px = 1 + ((active.x + dx) as u16) * 2;
    let py = 1 + ((active.y + dy) as u16);

    let cell = fb.get(px, py).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, piece_color(active.kind));
    // Each board cell renders two columns wide.
    assert_eq!(fb.get(px + 1, py).unwrap().ch, '█');
}

#[test]
fn test_settled_cells_drawn_after_merge() {
    let mut state = GameState::new(4);
    let landed = {
        let mut probe = state.clone();
        while probe.apply_action(GameAction::SoftDrop, 0) {}
        probe.active()
    };
    while state.apply_action(GameAction::SoftDrop, 0) {}
    state.apply_action(GameAction::HardDrop, 0);

    let view = GameView::default();
    let fb = view.render(&state, Viewport::new(22, 22));

    for (dx, dy) in landed.shape.cells() {
        let px = 1 + ((landed.x + dx) as u16) * 2;
        let py = 1 + ((landed.y + dy) as u16);
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(landed.kind));
    }
}

#[test]
fn test_game_over_overlay_text_and_hidden_piece() {
    let mut state = GameState::new(8);
    drive_to_game_over(&mut state);

    let view = GameView::default();
    let fb = view.render(&state, Viewport::new(22, 22));
    let text = fb_to_string(&fb);

    assert!(text.contains("Game Over!"));
    assert!(text.contains("Press Enter to restart"));

    // The overlay dims every block glyph left on screen.
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap();
            if cell.ch == '█' {
                assert!(cell.style.dim, "block at ({}, {}) not dimmed", x, y);
            }
        }
    }

    // The blocked spawn piece is not drawn: any of its cells that is not
    // itself part of the settled stack stays blank.
    let active = state.active();
    for (dx, dy) in active.shape.cells() {
        let (x, y) = (active.x + dx, active.y + dy);
        if state.board().is_occupied(x, y) {
            continue;
        }
        let cell = fb.get(1 + (x as u16) * 2, 1 + y as u16).unwrap();
        assert_ne!(cell.ch, '█', "active piece cell drawn at ({}, {})", x, y);
    }
}

#[test]
fn test_side_panel_shows_score_level_lines() {
    let state = GameState::new(1);
    let view = GameView::default();
    let fb = view.render(&state, Viewport::new(60, 26));
    let text = fb_to_string(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("LINES"));
}

#[test]
fn test_small_viewport_does_not_panic() {
    let state = GameState::new(1);
    let view = GameView::default();

    for (w, h) in [(0, 0), (1, 1), (5, 3), (10, 40), (200, 2)] {
        let fb = view.render(&state, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
