//! Terminal block puzzle runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_blocks::term`. Configuration comes from `BLOCKS_*` environment
//! variables, see [`tui_blocks::AppConfig`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blocks::core::{Board, GameState, PieceCatalog};
use tui_blocks::input::{handle_key_event, should_quit};
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::POLL_MS;
use tui_blocks::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // Build the catalog before touching the terminal so a bad table fails loudly.
    let pieces = PieceCatalog::get_all();
    eprintln!(
        "[Blocks] board {}x{}, seed {}, {} pieces{}",
        config.board_width,
        config.board_height,
        config.seed,
        pieces.len(),
        if config.debug { ", debug" } else { "" }
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        eprintln!("[Blocks] error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let board = Board::new(config.board_width, config.board_height);
    let mut game_state = GameState::with_board(board, config.seed);

    let view = GameView::default().with_debug(config.debug);
    let mut fb = FrameBuffer::new(0, 0);
    let poll = Duration::from_millis(POLL_MS);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game_state, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(poll)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty |= game_state.apply_action(action);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
