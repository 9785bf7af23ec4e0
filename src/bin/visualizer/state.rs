use freefall_rust::core::kinematics::solve;
use freefall_rust::core::playback::Playback;
use freefall_rust::core::projection::{Margins, Projection, Viewport, project};

use crate::constants::{BOTTOM_MARGIN, LEFT_MARGIN, RIGHT_MARGIN, TOP_MARGIN};
use crate::model::{ConditionsDraft, Scenario};

pub(crate) struct AppRuntime {
    pub(crate) scenarios: Vec<Scenario>,
    pub(crate) current_scenario_idx: usize,
    pub(crate) draft: ConditionsDraft,
    pub(crate) playback: Playback,
    pub(crate) status_line: String,
    applied_draft: ConditionsDraft,
    cached_projection: Option<(Viewport, Projection)>,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let scenarios = Scenario::catalog();
        let current_scenario_idx = 0usize;
        let draft = ConditionsDraft::from_conditions(scenarios[current_scenario_idx].conditions);
        let playback = Playback::with_trajectory(solve(draft.to_conditions()));
        Self {
            scenarios,
            current_scenario_idx,
            draft,
            playback,
            status_line: "Ready".to_string(),
            applied_draft: draft,
            cached_projection: None,
        }
    }

    pub(crate) fn current_scenario(&self) -> &Scenario {
        &self.scenarios[self.current_scenario_idx]
    }

    pub(crate) fn scenarios_len(&self) -> usize {
        self.scenarios.len()
    }

    pub(crate) fn select_scenario(&mut self, index: usize) {
        self.current_scenario_idx = index;
        self.draft = ConditionsDraft::from_conditions(self.current_scenario().conditions);
        self.recompute();
        self.status_line = format!("Loaded {}", self.current_scenario().code);
    }

    /// Re-solve and reload playback if the panel edited the draft since
    /// the last applied solve.
    pub(crate) fn apply_draft_edits(&mut self) {
        if self.draft != self.applied_draft {
            self.recompute();
            self.status_line = "Parameters changed - trajectory recomputed".to_string();
        }
    }

    fn recompute(&mut self) {
        self.applied_draft = self.draft;
        self.playback.load(solve(self.draft.to_conditions()));
        self.cached_projection = None;
    }

    /// Cached per buffer + viewport; `recompute` drops the cache when a
    /// new trajectory replaces the old one.
    pub(crate) fn projection_for(&mut self, viewport: Viewport) -> Projection {
        if let Some((cached_viewport, projection)) = self.cached_projection
            && cached_viewport == viewport
        {
            return projection;
        }

        let margins = Margins {
            left: f64::from(LEFT_MARGIN),
            right: f64::from(RIGHT_MARGIN),
            top: f64::from(TOP_MARGIN),
            bottom: f64::from(BOTTOM_MARGIN),
        };
        let projection = match self.playback.trajectory() {
            Some(trajectory) => project(trajectory, viewport, margins),
            None => Projection {
                scale_x: 1.0,
                scale_y: 1.0,
                origin_offset_x: margins.left,
                origin_offset_y: viewport.height - margins.bottom,
            },
        };
        self.cached_projection = Some((viewport, projection));
        projection
    }
}
