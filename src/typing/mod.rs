//! Typing domain: sequence generation and movement keystroke validation.

mod events;
mod resources;
mod sequence;
mod systems;
#[cfg(test)]
mod tests;

pub use events::{AdvanceEvent, SequenceChangedEvent};
pub use resources::MovementTyping;
pub use sequence::{SequenceKind, Symbol, TypeSequence};
pub(crate) use systems::key_symbol;

use bevy::prelude::*;

use crate::core::SessionSet;

pub struct TypingPlugin;

impl Plugin for TypingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTyping>()
            .add_message::<SequenceChangedEvent>()
            .add_message::<AdvanceEvent>()
            .add_systems(
                Update,
                systems::process_movement_keystrokes.in_set(SessionSet::Input),
            );
    }
}
