// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request model consumed from the Presenter.
//!
//! Each UI event maps to one [`Command`]; [`App::dispatch`] runs it and
//! returns a serializable [`CommandOutcome`].

use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::error::Result;
use crate::models::{CreateWorkout, WorkoutId, WorkoutView};
use crate::services::MarkerSink;

/// A request from the Presenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Form submission at the clicked map position
    Create(CreateWorkout),
    /// Delete button on a list item
    Delete { id: WorkoutId },
    /// "Delete all" button
    ClearAll,
    /// Sort button
    Sort,
    /// Click on a list item
    Interact { id: WorkoutId },
    /// Re-render the whole list
    List,
}

/// Result of a dispatched command.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Created {
        workout: WorkoutView,
    },
    Deleted {
        id: WorkoutId,
    },
    Cleared,
    Sorted {
        ascending: bool,
        workouts: Vec<WorkoutView>,
    },
    Focused {
        workout: WorkoutView,
    },
    Listed {
        workouts: Vec<WorkoutView>,
        show_controls: bool,
    },
}

impl<S: MarkerSink> App<S> {
    /// Run one command against the application.
    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Create(request) => {
                let workout = self.create_workout(request)?;
                Ok(CommandOutcome::Created { workout })
            }
            Command::Delete { id } => {
                self.delete_workout(&id)?;
                Ok(CommandOutcome::Deleted { id })
            }
            Command::ClearAll => {
                self.clear_workouts()?;
                Ok(CommandOutcome::Cleared)
            }
            Command::Sort => {
                let ascending = self.sort_workouts()?;
                Ok(CommandOutcome::Sorted {
                    ascending,
                    workouts: self.workouts(),
                })
            }
            Command::Interact { id } => {
                let workout = self.interact(&id)?;
                Ok(CommandOutcome::Focused { workout })
            }
            Command::List => Ok(CommandOutcome::Listed {
                workouts: self.workouts(),
                show_controls: self.has_workouts(),
            }),
        }
    }
}
