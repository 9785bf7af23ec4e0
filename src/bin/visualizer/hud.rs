use macroquad::prelude::*;

use freefall_rust::core::kinematics::Trajectory;
use freefall_rust::core::playback::Snapshot;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::controls::phase_text;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, snapshot: Snapshot, left: f32, screen_h: f32) {
    draw_header_block(state, left);
    draw_stats_block(state, snapshot, left, screen_h);
}

fn draw_header_block(state: &AppRuntime, left: f32) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "FreefallRust - Vertical Motion Playback",
        left,
        TITLE_Y,
        30.0,
        header_color,
    );
    draw_ui_text(
        &format!(
            "Scenario: {} - {}",
            state.current_scenario().code,
            state.current_scenario().title
        ),
        left,
        TITLE_Y + 30.0,
        22.0,
        DARKGRAY,
    );
    draw_ui_text(
        "Controls: Space play/pause | R reset | P/N scenario nav | sliders edit the problem",
        left + 12.0,
        CONTROLS_Y,
        20.0,
        DARKGRAY,
    );
}

fn draw_stats_block(state: &AppRuntime, snapshot: Snapshot, left: f32, screen_h: f32) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let Some(trajectory) = state.playback.trajectory() else {
        return;
    };

    draw_ui_text(
        &stats_line(trajectory),
        left,
        screen_h - 45.0,
        24.0,
        header_color,
    );

    let current = trajectory.sample(snapshot.cursor);
    draw_ui_text(
        &format!(
            "t = {:.2} s | y = {:.2} m | vy = {:+.2} m/s | State: {} | {}",
            current.t,
            current.y,
            current.vy,
            phase_text(snapshot.phase),
            state.status_line
        ),
        left,
        screen_h - 14.0,
        20.0,
        BLUE,
    );
}

fn stats_line(trajectory: &Trajectory) -> String {
    format!(
        "Max height: {:.2} m | Time to max: {:.2} s | Total time: {:.2} s | Impact: {:.2} m/s",
        trajectory.max_height_m(),
        trajectory.time_to_max_height_s(),
        trajectory.total_time_s(),
        trajectory.impact_velocity_mps().abs()
    )
}
