// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Furrow Terrain.
//!
//! ## Feature
//!
//! Enable with `terrain_adapter`.
//!
//! ## Bindings
//!
//! [`install_sculpt_bindings`] registers the standard sculpt table on a
//! [`MouseMachine`] whose context is a terrain [`Editor`]:
//!
//! | start | action | end | effect |
//! |---|---|---|---|
//! | `Default` | `Movement` | `Default` | move cursor |
//! | `Default` | `LeftPress` | `LeftPressed` | stamp |
//! | `LeftPressed` | `Movement` | `LeftPressed` | move cursor, stamp |
//! | `LeftPressed` | `LeftRelease` | `Default` | none |
//! | `Default` | `RightPress` | `RightPressed` | none |
//! | `RightPressed` | `RightRelease` | `Default` | reset level |
//! | `Default` | `ScrollUp` | `Default` | raise level by the configured step |
//! | `Default` | `ScrollDown` | `Default` | lower level by the configured step |
//!
//! Hosts that want a different mapping can register over any of these pairs
//! afterwards; the last registration wins.

use furrow_terrain::Editor;

use crate::error::RegisterError;
use crate::mouse::{MouseAction, MouseMachine, MouseState, mouse_machine};

/// Register the standard sculpt transitions on `machine`.
pub fn install_sculpt_bindings<E: 'static>(
    machine: &mut MouseMachine<Editor, E>,
) -> Result<(), RegisterError> {
    use MouseAction::*;
    use MouseState::*;

    machine.on_move(Default, Movement, Default, |ed: &mut Editor, dx, dz| {
        ed.move_cursor(dx, dz);
        Ok(())
    })?;
    machine.on(Default, LeftPress, LeftPressed, |ed: &mut Editor| {
        ed.stamp();
        Ok(())
    })?;
    machine.on_move(LeftPressed, Movement, LeftPressed, |ed: &mut Editor, dx, dz| {
        ed.move_cursor(dx, dz);
        ed.stamp();
        Ok(())
    })?;
    machine.on(LeftPressed, LeftRelease, Default, |_| Ok(()))?;
    machine.on(Default, RightPress, RightPressed, |_| Ok(()))?;
    machine.on(RightPressed, RightRelease, Default, |ed: &mut Editor| {
        ed.reset_level();
        Ok(())
    })?;
    machine.on(Default, ScrollUp, Default, |ed: &mut Editor| {
        ed.raise(ed.level_step());
        Ok(())
    })?;
    machine.on(Default, ScrollDown, Default, |ed: &mut Editor| {
        ed.lower(ed.level_step());
        Ok(())
    })?;
    Ok(())
}

/// Build a fresh mouse machine with the standard sculpt transitions.
pub fn sculpt_machine<E: 'static>() -> Result<MouseMachine<Editor, E>, RegisterError> {
    let mut machine = mouse_machine();
    install_sculpt_bindings(&mut machine)?;
    Ok(machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use furrow_terrain::{Changes, CursorConfig, EditorConfig};

    fn editor() -> Editor {
        Editor::new(&EditorConfig {
            width: 3,
            depth: 3,
            cursor: CursorConfig {
                radius: 0.5,
                sensitivity: 1.0,
                ..CursorConfig::default()
            },
            ..EditorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn table_is_complete() {
        let m = sculpt_machine::<Infallible>().unwrap();
        assert_eq!(m.len(), 8);
        assert_eq!(
            m.target(MouseState::Default, MouseAction::LeftPress),
            Some(MouseState::LeftPressed)
        );
        assert!(!m.contains(MouseState::LeftPressed, MouseAction::ScrollUp));
    }

    #[test]
    fn drag_sculpts_along_the_path() {
        let mut m = sculpt_machine::<Infallible>().unwrap();
        let mut ed = editor();

        m.fire(&mut ed, MouseAction::ScrollUp).unwrap();
        m.fire(&mut ed, MouseAction::ScrollUp).unwrap();
        assert_eq!(ed.level(), 2.0);

        m.fire(&mut ed, MouseAction::LeftPress).unwrap();
        assert_eq!(m.current(), MouseState::LeftPressed);
        m.fire_with(&mut ed, MouseAction::Movement, (1.0, 0.0)).unwrap();
        m.fire(&mut ed, MouseAction::LeftRelease).unwrap();

        let lattice = ed.lattice();
        assert_eq!(ed.heights()[lattice.index_of(1, 1).unwrap()], 2.0);
        assert_eq!(ed.heights()[lattice.index_of(1, 2).unwrap()], 2.0);
        assert_eq!(ed.heights()[lattice.index_of(0, 0).unwrap()], 0.0);
        assert!(ed.take_changes().contains(Changes::HEIGHTS | Changes::CURSOR));
    }

    #[test]
    fn hover_moves_without_stamping() {
        let mut m = sculpt_machine::<Infallible>().unwrap();
        let mut ed = editor();
        m.fire(&mut ed, MouseAction::ScrollUp).unwrap();
        m.fire_with(&mut ed, MouseAction::Movement, (1.0, 1.0)).unwrap();
        assert_eq!(m.current(), MouseState::Default);
        assert!(ed.heights().iter().all(|h| *h == 0.0));
        assert_eq!(ed.take_changes(), Changes::CURSOR | Changes::LEVEL);
    }

    #[test]
    fn scroll_while_held_is_ignored() {
        let mut m = sculpt_machine::<Infallible>().unwrap();
        let mut ed = editor();
        m.fire(&mut ed, MouseAction::LeftPress).unwrap();
        assert!(!m.fire(&mut ed, MouseAction::ScrollUp).unwrap().is_handled());
        assert_eq!(ed.level(), 0.0);
        assert_eq!(m.current(), MouseState::LeftPressed);
    }

    #[test]
    fn right_click_resets_level() {
        let mut m = sculpt_machine::<Infallible>().unwrap();
        let mut ed = editor();
        m.fire(&mut ed, MouseAction::ScrollDown).unwrap();
        assert_eq!(ed.level(), -1.0);
        m.fire(&mut ed, MouseAction::RightPress).unwrap();
        m.fire(&mut ed, MouseAction::RightRelease).unwrap();
        assert_eq!(ed.level(), 0.0);
        assert_eq!(m.current(), MouseState::Default);
    }
}
