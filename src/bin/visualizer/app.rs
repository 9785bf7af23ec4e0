use chrono::Utc;
use macroquad::prelude::*;

use freefall_rust::core::projection::Viewport;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, TOP_MARGIN,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{draw_axis_tick_labels, draw_ball, draw_grid, draw_ground, draw_path};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "FreefallRust Visualizer".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let mut state = AppRuntime::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions, Utc::now());
        state.apply_draft_edits();

        let advance = state.playback.advance(Utc::now());
        if advance.just_completed {
            state.status_line = "Motion complete: object reached the ground".to_string();
        }

        let viewport = Viewport {
            width: f64::from(screen_w),
            height: f64::from(screen_h),
        };
        let projection = state.projection_for(viewport);

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(
            left,
            right,
            top,
            bottom,
            Color::from_rgba(227, 231, 236, 255),
        );
        draw_line(left, top, left, bottom, 2.0, DARKGRAY);
        draw_ground(left, right, bottom, screen_h);

        if let Some(trajectory) = state.playback.trajectory() {
            draw_axis_tick_labels(
                left,
                right,
                top,
                bottom,
                trajectory.total_time_s() as f32,
                trajectory.max_height_m() as f32,
            );

            // Full path as a faint reference, traveled portion on top.
            draw_path(
                trajectory.samples(),
                &projection,
                2.0,
                Color::from_rgba(76, 141, 245, 120),
            );
            draw_path(
                &trajectory.samples()[..=advance.cursor],
                &projection,
                3.0,
                Color::from_rgba(239, 68, 68, 255),
            );
            draw_ball(trajectory.sample(advance.cursor), &projection);
        }

        draw_hud(&state, state.playback.snapshot(), left, screen_h);

        next_frame().await;
    }
}
