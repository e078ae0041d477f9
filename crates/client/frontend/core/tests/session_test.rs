mod common;

use std::sync::{Arc, atomic::Ordering};

use client_frontend_core::{
    KeyOutcome, Session, frame,
    keymap::keys,
    style,
    surface::RecordingSurface,
};
use common::{ScriptedModule, TILE, origin, settings};
use game_core::Direction;

fn bg_at(surface: &RecordingSurface, col: i32, row: i32) -> Option<style::Colour> {
    surface.fills().find_map(|(rect, colour)| {
        ((rect.x, rect.y) == origin(col, row)).then_some(colour)
    })
}

#[tokio::test]
async fn start_renders_first_frame() {
    let module = Arc::new(ScriptedModule::default());
    let mut surface = RecordingSurface::new();

    let session = Session::start(settings(Arc::clone(&module), 3, 2), &mut surface)
        .await
        .unwrap();

    assert_eq!(module.builds.load(Ordering::SeqCst), 1);
    assert_eq!(session.context().tile_size, TILE);
    assert_eq!(bg_at(&surface, 0, 0), Some(style::WALL_STYLE.bg_colour));
}

#[tokio::test]
async fn vi_and_arrow_keys_send_the_same_move() {
    let module = Arc::new(ScriptedModule::default());
    let mut surface = RecordingSurface::new();

    let mut vi = Session::start(settings(Arc::clone(&module), 3, 3), &mut surface)
        .await
        .unwrap();
    let mut arrow = Session::start(settings(Arc::clone(&module), 3, 3), &mut surface)
        .await
        .unwrap();

    surface.take();
    let vi_outcome = vi.handle_key(keys::K, &mut surface).await.unwrap();
    let vi_frame = surface.take();
    let arrow_outcome = arrow.handle_key(keys::UP, &mut surface).await.unwrap();

    assert_eq!(vi_outcome, KeyOutcome::Moved(Direction::N));
    assert_eq!(arrow_outcome, vi_outcome);
    assert!(!vi_frame.is_empty());

    let logs = module.moves.lock().unwrap();
    assert_eq!(*logs[0].lock().unwrap(), vec![Direction::N]);
    assert_eq!(*logs[1].lock().unwrap(), vec![Direction::N]);
}

#[tokio::test]
async fn unbound_keys_do_nothing() {
    let module = Arc::new(ScriptedModule::default());
    let mut surface = RecordingSurface::new();
    let mut session = Session::start(settings(Arc::clone(&module), 2, 2), &mut surface)
        .await
        .unwrap();
    surface.take();

    let outcome = session.handle_key(65, &mut surface).await.unwrap();

    assert_eq!(outcome, KeyOutcome::Ignored);
    assert!(surface.ops().is_empty());
    assert!(module.moves.lock().unwrap()[0].lock().unwrap().is_empty());
}

#[tokio::test]
async fn quit_keys_leave_the_session_untouched() {
    let module = Arc::new(ScriptedModule::default());
    let mut surface = RecordingSurface::new();
    let mut session = Session::start(settings(Arc::clone(&module), 2, 2), &mut surface)
        .await
        .unwrap();
    surface.take();

    for code in [keys::Q, keys::ESCAPE] {
        assert_eq!(
            session.handle_key(code, &mut surface).await.unwrap(),
            KeyOutcome::Quit
        );
    }
    assert!(surface.ops().is_empty());
    assert_eq!(module.builds.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn reset_key_builds_a_new_engine() {
    let module = Arc::new(ScriptedModule::default());
    let mut surface = RecordingSurface::new();
    let mut session = Session::start(settings(Arc::clone(&module), 3, 1), &mut surface)
        .await
        .unwrap();
    surface.take();

    let outcome = session.handle_key(keys::M, &mut surface).await.unwrap();

    assert_eq!(outcome, KeyOutcome::Reset);
    assert_eq!(module.builds.load(Ordering::SeqCst), 2);
    // Second build puts its wall at column 1.
    assert_eq!(bg_at(&surface, 1, 0), Some(style::WALL_STYLE.bg_colour));
    assert_eq!(bg_at(&surface, 0, 0), Some(style::FLOOR_STYLE.bg_colour));
}

#[tokio::test]
async fn reset_contexts_are_independent() {
    let module = Arc::new(ScriptedModule::default());
    let settings = settings(Arc::clone(&module), 3, 1);
    let mut surface = RecordingSurface::new();

    let first = frame::reset(&settings, &mut surface).await.unwrap();
    let mut second = frame::reset(&settings, &mut surface).await.unwrap();
    second.game.move_player(Direction::E);
    surface.take();

    frame::render(&first, &mut surface).await.unwrap();

    assert_eq!(bg_at(&surface, 0, 0), Some(style::WALL_STYLE.bg_colour));
    assert_eq!(bg_at(&surface, 1, 0), Some(style::FLOOR_STYLE.bg_colour));

    let logs = module.moves.lock().unwrap();
    assert!(logs[0].lock().unwrap().is_empty());
    assert_eq!(*logs[1].lock().unwrap(), vec![Direction::E]);
}

#[tokio::test]
async fn tile_size_change_applies_to_next_frame() {
    let module = Arc::new(ScriptedModule::default());
    let mut surface = RecordingSurface::new();
    let mut session = Session::start(settings(Arc::clone(&module), 2, 1), &mut surface)
        .await
        .unwrap();
    session.handle_key(keys::H, &mut surface).await.unwrap();
    surface.take();

    let session = session.with_tile_size(TILE * 2);
    session.render(&mut surface).await.unwrap();

    assert_eq!(session.settings().tile_size, TILE * 2);
    assert_eq!(session.context().tile_size, TILE * 2);
    let (rect, _) = surface.fills().next().unwrap();
    assert_eq!(rect.width, TILE * 2);

    // Same engine: no rebuild, and its move history is intact.
    assert_eq!(module.builds.load(Ordering::SeqCst), 1);
    assert_eq!(*module.moves.lock().unwrap()[0].lock().unwrap(), vec![Direction::W]);
}

#[tokio::test]
async fn resets_after_resize_use_new_tile_size() {
    let module = Arc::new(ScriptedModule::default());
    let mut surface = RecordingSurface::new();
    let session = Session::start(settings(module, 2, 1), &mut surface)
        .await
        .unwrap();

    let mut session = session.with_tile_size(TILE * 3);
    session.handle_key(keys::M, &mut surface).await.unwrap();

    assert_eq!(session.context().tile_size, TILE * 3);
}
