use macroquad::prelude::*;

use freefall_rust::core::kinematics::Sample;
use freefall_rust::core::projection::Projection;

use crate::constants::{
    BALL_RADIUS_PX, INFO_BOX_HEIGHT, INFO_BOX_WIDTH, VELOCITY_VECTOR_MIN_MPS,
    VELOCITY_VECTOR_PX_PER_MPS, X_GRID_LINES, Y_GRID_LINES,
};

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    draw_text(text, x, y, font_size, color);
}

pub(crate) fn map_to_screen(sample: Sample, projection: &Projection) -> Vec2 {
    let (x, y) = projection.map(sample);
    vec2(x as f32, y as f32)
}

pub(crate) fn draw_grid(left: f32, right: f32, top: f32, bottom: f32, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    total_time_s: f32,
    max_height_m: f32,
) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size = 16.0;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        let value = t * total_time_s;
        let label = format_axis_value(value, total_time_s);
        let size = measure_text(&label, None, tick_font_size as u16, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            bottom + 22.0,
            tick_font_size,
            label_color,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        let value = t * max_height_m;
        let label = format_axis_value(value, max_height_m);
        let size = measure_text(&label, None, tick_font_size as u16, 1.0);
        draw_ui_text(
            &label,
            (left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
        );
    }

    draw_ui_text("Time (s)", right - 80.0, bottom + 48.0, 18.0, label_color);
    draw_ui_text("Height (m)", left + 10.0, top - 8.0, 18.0, label_color);
}

pub(crate) fn draw_ground(left: f32, right: f32, bottom: f32, screen_h: f32) {
    draw_rectangle(
        left,
        bottom,
        right - left,
        (screen_h - bottom).max(0.0),
        Color::from_rgba(209, 237, 222, 255),
    );
    draw_line(left, bottom, right, bottom, 3.0, DARKGREEN);
}

pub(crate) fn draw_path(
    samples: &[Sample],
    projection: &Projection,
    thickness: f32,
    color: Color,
) {
    for pair in samples.windows(2) {
        let a = map_to_screen(pair[0], projection);
        let b = map_to_screen(pair[1], projection);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

pub(crate) fn draw_ball(sample: Sample, projection: &Projection) {
    let p = map_to_screen(sample, projection);
    draw_circle(p.x, p.y, BALL_RADIUS_PX, RED);
    draw_circle_lines(p.x, p.y, BALL_RADIUS_PX, 2.0, MAROON);

    draw_velocity_vector(sample, p);
    draw_info_box(sample, p);
}

fn draw_velocity_vector(sample: Sample, ball: Vec2) {
    if sample.vy.abs() <= VELOCITY_VECTOR_MIN_MPS {
        return;
    }

    // Positive vy points up in the domain, up is -y on screen.
    let tip = vec2(
        ball.x,
        ball.y - (sample.vy as f32) * VELOCITY_VECTOR_PX_PER_MPS,
    );
    let arrow_color = Color::from_rgba(139, 92, 246, 255);
    draw_line(ball.x, ball.y, tip.x, tip.y, 3.0, arrow_color);

    let head = 10.0;
    let toward_ball = (ball - tip).normalize_or_zero();
    let side = vec2(-toward_ball.y, toward_ball.x);
    let base = tip + toward_ball * head;
    draw_triangle(tip, base + side * (head * 0.5), base - side * (head * 0.5), arrow_color);
}

fn draw_info_box(sample: Sample, ball: Vec2) {
    let box_x = ball.x + 25.0;
    let box_y = ball.y - 50.0;

    draw_rectangle(
        box_x,
        box_y,
        INFO_BOX_WIDTH,
        INFO_BOX_HEIGHT,
        Color::from_rgba(255, 255, 255, 230),
    );
    draw_rectangle_lines(box_x, box_y, INFO_BOX_WIDTH, INFO_BOX_HEIGHT, 2.0, BLUE);

    let text_color = Color::from_rgba(30, 64, 175, 255);
    draw_ui_text(
        &format!("Time: {:.2} s", sample.t),
        box_x + 10.0,
        box_y + 20.0,
        16.0,
        text_color,
    );
    draw_ui_text(
        &format!("Height: {:.2} m", sample.y),
        box_x + 10.0,
        box_y + 38.0,
        16.0,
        text_color,
    );
    draw_ui_text(
        &format!("Velocity: {:.2} m/s", sample.vy.abs()),
        box_x + 10.0,
        box_y + 56.0,
        16.0,
        Color::from_rgba(124, 58, 237, 255),
    );
}
