// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrain sculpting session.
//!
//! Builds an editor from an optional TOML config, installs the standard sculpt
//! bindings, replays a scripted input session, and prints the resulting
//! heightfield. Set `RUST_LOG=debug` to watch transitions and stamps.
//!
//! Run:
//! - `cargo run -p furrow_demos --example terrain_sculpt`
//! - `cargo run -p furrow_demos --example terrain_sculpt -- sandbox.toml`
//!
//! Config (all keys optional):
//!
//! ```toml
//! width = 12
//! depth = 8
//! level_step = 2.0
//!
//! [cursor]
//! radius = 1.5
//! sensitivity = 0.05
//! ```

use std::convert::Infallible;

use anyhow::Context;
use furrow_fsm::adapters::terrain::sculpt_machine;
use furrow_fsm::mouse::MouseAction;
use furrow_fsm::pointer::PointerTracker;
use furrow_terrain::{Editor, EditorConfig};
use tracing_subscriber::EnvFilter;

/// One scripted input event, in window terms.
enum Input {
    Button(MouseAction),
    Pointer(f64, f64),
    Scroll(f64),
}

fn load_config() -> anyhow::Result<EditorConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(EditorConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {path}"))?;
    let config: EditorConfig = toml::from_str(&text)
        .with_context(|| format!("parsing {path}"))?;
    tracing::info!(%path, "loaded config");
    Ok(config)
}

fn script() -> Vec<Input> {
    let mut out = vec![
        Input::Pointer(400.0, 300.0),
        Input::Scroll(1.0),
        Input::Scroll(1.0),
        Input::Scroll(1.0),
        Input::Button(MouseAction::LeftPress),
    ];
    // Drag right, then up the screen.
    for i in 1..=40 {
        out.push(Input::Pointer(400.0 + 3.0 * f64::from(i), 300.0));
    }
    for i in 1..=30 {
        out.push(Input::Pointer(520.0, 300.0 - 3.0 * f64::from(i)));
    }
    out.push(Input::Button(MouseAction::LeftRelease));
    // Scroll while idle, then a right click resets the level.
    out.push(Input::Scroll(-1.0));
    out.push(Input::Button(MouseAction::RightPress));
    out.push(Input::Button(MouseAction::ScrollUp));
    out.push(Input::Button(MouseAction::RightRelease));
    out
}

fn print_heights(editor: &Editor) {
    let lattice = editor.lattice();
    for row in 0..lattice.depth() {
        let line: Vec<String> = (0..lattice.width())
            .filter_map(|col| lattice.index_of(row, col))
            .map(|i| format!("{:>4.0}", editor.heights()[i]))
            .collect();
        println!("{}", line.join(""));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let mut editor = Editor::new(&config)?;
    let mut machine = sculpt_machine::<Infallible>()?;
    let mut tracker = PointerTracker::new();

    let mut handled = 0_usize;
    let mut ignored = 0_usize;
    for input in script() {
        let outcome = match input {
            Input::Button(action) => machine.fire(&mut editor, action)?,
            Input::Pointer(x, y) => {
                let (dx, dy) = tracker.update(x, y);
                // Pointer up moves the cursor away from the viewer (-z).
                machine.fire_with(&mut editor, MouseAction::Movement, (dx, -dy))?
            }
            Input::Scroll(dy) => match MouseAction::from_scroll(dy) {
                Some(action) => machine.fire(&mut editor, action)?,
                None => continue,
            },
        };
        if outcome.is_handled() {
            handled += 1;
        } else {
            ignored += 1;
        }
        let changes = editor.take_changes();
        if !changes.is_empty() {
            tracing::debug!(?changes, "frame needs upload");
        }
    }

    tracing::info!(handled, ignored, state = ?machine.current(), "session replayed");
    println!(
        "level={} cursor={:?}",
        editor.level(),
        editor.cursor().center()
    );
    print_heights(&editor);
    Ok(())
}
