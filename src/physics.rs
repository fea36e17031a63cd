/// Inertial steering for the spaceship.
///
/// Input pushes the speed towards the axis limit with diminishing
/// acceleration, friction (`fading`) pulls it back towards zero every tick.

use crate::config::MotionConfig;

fn apply_acceleration(speed: f64, limit: f64, forward: bool, config: &MotionConfig) -> f64 {
    // cos falls from 1 at rest to ~0.54 at the limit: acceleration tapers off.
    let delta = (speed / limit).cos() * config.acceleration * limit / 2.0;
    let speed = if forward { speed + delta } else { speed - delta };
    speed.clamp(-limit, limit)
}

fn update_axis(speed: f64, direction: i8, limit: f64, config: &MotionConfig) -> f64 {
    let speed = match direction.signum() {
        0 => speed,
        d => apply_acceleration(speed, limit, d > 0, config),
    };
    let speed = speed * config.fading;
    if speed.abs() < config.rest_threshold {
        0.0
    } else {
        speed
    }
}

/// Next `(row_speed, column_speed)` for the given directional input.
///
/// Directions outside `{-1, 0, 1}` are treated by sign.
pub fn next_velocity(
    row_speed: f64,
    column_speed: f64,
    rows_direction: i8,
    columns_direction: i8,
    config: &MotionConfig,
) -> (f64, f64) {
    (
        update_axis(row_speed, rows_direction, config.row_speed_limit, config),
        update_axis(column_speed, columns_direction, config.column_speed_limit, config),
    )
}
