use chrono::{DateTime, Utc};
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    GRAVITY_SLIDER_MAX_MPS2, GRAVITY_SLIDER_MIN_MPS2, HEIGHT_SLIDER_MAX_M,
    VELOCITY_SLIDER_MAX_MPS,
};
use crate::state::AppRuntime;
use freefall_rust::core::playback::Phase;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) play_pause: bool,
    pub(crate) reset: bool,
    pub(crate) prev_scenario: bool,
    pub(crate) next_scenario: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            play_pause: self.play_pause || other.play_pause,
            reset: self.reset || other.reset,
            prev_scenario: self.prev_scenario || other.prev_scenario,
            next_scenario: self.next_scenario || other.next_scenario,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        play_pause: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        prev_scenario: is_key_pressed(KeyCode::P),
        next_scenario: is_key_pressed(KeyCode::N),
    }
}

pub(crate) fn phase_text(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::Playing => "Playing",
        Phase::Paused => "Paused",
        Phase::Completed => "Completed",
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let scenario_code = state.current_scenario().code;
    let phase = state.playback.snapshot().phase;

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(340.0, 310.0))
        .label(&format!("{scenario_code} Controls"))
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &format!("State: {}", phase_text(phase)));
            ui.separator();
            ui.checkbox(hash!(), "Free fall (dropped)", &mut state.draft.free_fall);
            if !state.draft.free_fall {
                ui.checkbox(hash!(), "Throw upward", &mut state.draft.upward);
                ui.slider(
                    hash!(),
                    "Velocity (m/s)",
                    0.0..VELOCITY_SLIDER_MAX_MPS,
                    &mut state.draft.velocity_mps,
                );
            }
            ui.slider(
                hash!(),
                "Height (m)",
                0.0..HEIGHT_SLIDER_MAX_M,
                &mut state.draft.height_m,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_SLIDER_MIN_MPS2..GRAVITY_SLIDER_MAX_MPS2,
                &mut state.draft.gravity_mps2,
            );
            ui.separator();
            if ui.button(None, "Play / Pause (Space)") {
                actions.play_pause = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Prev Scenario (P)") {
                actions.prev_scenario = true;
            }
            if ui.button(None, "Next Scenario (N)") {
                actions.next_scenario = true;
            }
        });

    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions, now: DateTime<Utc>) {
    if actions.play_pause {
        match state.playback.snapshot().phase {
            Phase::Playing => {
                state.playback.pause();
                state.status_line = "Paused".to_string();
            }
            Phase::Paused => {
                state.playback.start(now);
                state.status_line = "Resumed".to_string();
            }
            Phase::Idle | Phase::Completed => {
                state.playback.start(now);
                state.status_line = "Playing".to_string();
            }
        }
    }

    if actions.reset {
        state.playback.reset();
        state.status_line = "Reset".to_string();
    }

    if actions.prev_scenario && state.current_scenario_idx > 0 {
        state.select_scenario(state.current_scenario_idx - 1);
    }

    if actions.next_scenario && state.current_scenario_idx + 1 < state.scenarios_len() {
        state.select_scenario(state.current_scenario_idx + 1);
    }
}
