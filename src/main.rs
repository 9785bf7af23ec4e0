use std::env;
use std::io::{self, Write};

use freefall_rust::core::kinematics::{
    Direction, EARTH_GRAVITY_MPS2, InitialConditions, MotionType, solve,
};

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_direction(value: &str) -> Result<Direction, String> {
    match value.to_ascii_lowercase().as_str() {
        "up" | "upward" | "u" => Ok(Direction::Upward),
        "down" | "downward" | "d" => Ok(Direction::Downward),
        other => Err(format!(
            "Invalid direction: '{other}'. Expected 'up' or 'down'."
        )),
    }
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn read_direction() -> Result<Direction, String> {
    loop {
        print!("Direction (up/down): ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match parse_direction(line.trim()) {
            Ok(direction) => return Ok(direction),
            Err(_) => eprintln!("Please enter 'up' or 'down'."),
        }
    }
}

/// Zero velocity means the object is simply dropped.
fn conditions_from(velocity_mps: f64, height_m: f64, direction: Direction) -> InitialConditions {
    if velocity_mps == 0.0 {
        InitialConditions::free_fall(height_m)
    } else {
        InitialConditions {
            initial_velocity_mps: velocity_mps,
            initial_height_m: height_m,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            direction,
            motion_type: MotionType::VerticalThrow,
        }
    }
}

fn get_conditions_from_user() -> Result<InitialConditions, String> {
    let velocity_mps = read_f64("Initial velocity (m/s, 0 = dropped): ")?;
    let height_m = read_f64("Initial height (m): ")?;
    let direction = if velocity_mps == 0.0 {
        Direction::Downward
    } else {
        read_direction()?
    };
    Ok(conditions_from(velocity_mps, height_m, direction))
}

fn get_conditions_from_args(args: &[String]) -> Result<InitialConditions, String> {
    if args.len() != 4 {
        return Err(
            "Expected exactly 3 arguments: <velocity_mps> <height_m> <up|down>.".to_string(),
        );
    }

    let velocity_mps = parse_f64(&args[1], "velocity")?;
    let height_m = parse_f64(&args[2], "height")?;
    let direction = parse_direction(&args[3])?;
    if velocity_mps < 0.0 {
        return Err("Velocity cannot be negative; use 'down' for downward throws.".to_string());
    }
    if height_m < 0.0 {
        return Err("Height cannot be negative.".to_string());
    }

    Ok(conditions_from(velocity_mps, height_m, direction))
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <velocity_mps> <height_m> <up|down>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 20 0 up");
    println!("  {program} 0 45 down");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let conditions = if args.len() == 1 {
        get_conditions_from_user()?
    } else {
        get_conditions_from_args(&args)?
    };

    let trajectory = solve(conditions);

    println!("\nMaximum height: {:.3} m", trajectory.max_height_m());
    println!(
        "Time to max height: {:.3} s",
        trajectory.time_to_max_height_s()
    );
    println!("Total flight time: {:.3} s", trajectory.total_time_s());
    println!(
        "Impact velocity: {:.3} m/s",
        trajectory.impact_velocity_mps().abs()
    );
    println!("Trajectory samples: {}", trajectory.len());

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
