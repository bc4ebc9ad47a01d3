use crate::error::{BoardError, BoardResult};
use crate::interaction::ScrollPanConfig;

pub(super) fn validate_scroll_pan_config(config: ScrollPanConfig) -> BoardResult<ScrollPanConfig> {
    if !config.velocity_scale.is_finite() || config.velocity_scale <= 0.0 {
        return Err(BoardError::InvalidConfig(
            "scroll pan velocity_scale must be finite and > 0".to_owned(),
        ));
    }
    if !config.friction.is_finite() || config.friction <= 0.0 || config.friction >= 1.0 {
        return Err(BoardError::InvalidConfig(
            "scroll pan friction must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !config.stop_velocity_abs.is_finite() || config.stop_velocity_abs <= 0.0 {
        return Err(BoardError::InvalidConfig(
            "scroll pan stop_velocity_abs must be finite and > 0".to_owned(),
        ));
    }
    if !config.drag_multiplier.is_finite() || config.drag_multiplier <= 0.0 {
        return Err(BoardError::InvalidConfig(
            "scroll pan drag_multiplier must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}
