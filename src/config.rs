/**
 * Typed, validated configuration loaded from TOML.
 *
 * Mirrors the teacher's `config.rs` choice of `serde` + `toml`, but
 * replaces its panic-on-bad-config loader with a `Result`-returning one
 * that validates every option against the ranges in spec §6's table
 * before handing back a `Config` the rest of the crate can trust.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::DispatchError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_max_floors")]
    pub max_floors: u32,
    #[serde(default = "default_elevator_count")]
    pub elevator_count: u32,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_door_open_ticks")]
    pub door_open_ticks: u32,
    #[serde(default = "default_elevator_movement_ticks")]
    pub elevator_movement_ticks: u32,
    #[serde(default = "default_request_interval_seconds")]
    pub request_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_floors: default_max_floors(),
            elevator_count: default_elevator_count(),
            tick_interval_ms: default_tick_interval_ms(),
            door_open_ticks: default_door_open_ticks(),
            elevator_movement_ticks: default_elevator_movement_ticks(),
            request_interval_seconds: default_request_interval_seconds(),
        }
    }
}

fn default_max_floors() -> u32 {
    10
}

fn default_elevator_count() -> u32 {
    4
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_door_open_ticks() -> u32 {
    3
}

fn default_elevator_movement_ticks() -> u32 {
    3
}

fn default_request_interval_seconds() -> u64 {
    5
}

impl Config {
    fn validate(&self) -> Result<(), DispatchError> {
        if !(2..=100).contains(&self.max_floors) {
            return Err(DispatchError::InvalidConfig(format!(
                "max_floors must be in [2, 100], got {}",
                self.max_floors
            )));
        }
        if !(1..=10).contains(&self.elevator_count) {
            return Err(DispatchError::InvalidConfig(format!(
                "elevator_count must be in [1, 10], got {}",
                self.elevator_count
            )));
        }
        if !(10..=10000).contains(&self.tick_interval_ms) {
            return Err(DispatchError::InvalidConfig(format!(
                "tick_interval_ms must be in [10, 10000], got {}",
                self.tick_interval_ms
            )));
        }
        if !(1..=10).contains(&self.door_open_ticks) {
            return Err(DispatchError::InvalidConfig(format!(
                "door_open_ticks must be in [1, 10], got {}",
                self.door_open_ticks
            )));
        }
        if self.elevator_movement_ticks < 1 {
            return Err(DispatchError::InvalidConfig(format!(
                "elevator_movement_ticks must be >= 1, got {}",
                self.elevator_movement_ticks
            )));
        }
        if !(1..=60).contains(&self.request_interval_seconds) {
            return Err(DispatchError::InvalidConfig(format!(
                "request_interval_seconds must be in [1, 60], got {}",
                self.request_interval_seconds
            )));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, DispatchError> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| DispatchError::InvalidConfig(format!("failed to read {}: {}", path, e)))?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| DispatchError::InvalidConfig(format!("failed to parse {}: {}", path, e)))?;
    config.validate()?;
    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
