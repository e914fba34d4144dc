//! Content domain: RON-backed tuning with validation and defaults.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CollisionDef, JumpDef, MovementDef, ObstacleDef, TrackDef, TuningFile};
pub use loader::TuningLoadError;
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::collision::{CollisionTicker, CollisionTuning};
use crate::core::LossLatch;
use crate::movement::{JumpTuning, MovementTuning};
use crate::obstacle::ObstacleTuning;
use crate::track::TrackTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning_resources);
    }
}

/// Load `assets/data/tuning.ron` and publish the per-domain tuning
/// resources. Parse or validation failures fall back to the compiled
/// defaults so the game always starts.
pub(crate) fn load_tuning_resources(mut commands: Commands) {
    let tuning = match loader::load_tuning(Path::new(TUNING_PATH)) {
        Ok(file) => {
            let errors = validation::validate_tuning(&file);
            if errors.is_empty() {
                info!("Loaded tuning from {}", TUNING_PATH);
                file
            } else {
                for error in &errors {
                    warn!("{}", error);
                }
                warn!(
                    "Rejecting {} ({} invalid fields), using built-in tuning",
                    TUNING_PATH,
                    errors.len()
                );
                TuningFile::default()
            }
        }
        Err(error) => {
            warn!("{}; using built-in tuning", error);
            TuningFile::default()
        }
    };

    commands.insert_resource(MovementTuning::from_def(&tuning.movement));
    commands.insert_resource(JumpTuning::from_def(&tuning.jump));
    commands.insert_resource(TrackTuning::from_defs(&tuning.track, &tuning.movement));
    commands.insert_resource(ObstacleTuning::from_def(&tuning.obstacle));
    commands.insert_resource(CollisionTuning::from_def(&tuning.collision));
    commands.insert_resource(CollisionTicker::new(tuning.collision.check_interval));
    commands.insert_resource(LossLatch::new(tuning.collision.loss_latch_delay));
}
