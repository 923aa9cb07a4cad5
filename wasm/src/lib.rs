//! MoodFlow WASM Module
//!
//! This crate provides WebAssembly bindings for the derived habit and water
//! views, so a browser presentation layer shows exactly the numbers the
//! core computes.

use moodflow_shared::{
    assign_unique_colors, habit_counter_text, habit_percent, water_progress_fraction, Habit,
    HabitUnit,
};
use wasm_bindgen::prelude::*;

fn parse_unit(unit: &str) -> Result<HabitUnit, String> {
    unit.parse::<HabitUnit>()
}

fn target_days(target: i32, unit: &str) -> Result<i64, String> {
    Ok(parse_unit(unit)?.to_days(target))
}

fn recolor(json: &str) -> Result<String, String> {
    let habits: Vec<Habit> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    serde_json::to_string(&assign_unique_colors(habits)).map_err(|e| e.to_string())
}

/// Target normalised to days (months are 30 days, years 365)
#[wasm_bindgen]
pub fn habit_target_days(target: i32, unit: &str) -> Result<f64, JsError> {
    target_days(target, unit)
        .map(|days| days as f64)
        .map_err(|e| JsError::new(&e))
}

/// Completion percentage, 0 to 100
#[wasm_bindgen(js_name = habit_percent)]
pub fn habit_percent_for(progress: i32, target: i32, unit: &str) -> Result<i32, JsError> {
    target_days(target, unit)
        .map(|days| habit_percent(progress, days))
        .map_err(|e| JsError::new(&e))
}

/// Counter text such as `"3/30"`
#[wasm_bindgen(js_name = habit_counter_text)]
pub fn habit_counter(progress: i32, target: i32, unit: &str) -> Result<String, JsError> {
    target_days(target, unit)
        .map(|days| habit_counter_text(progress, days))
        .map_err(|e| JsError::new(&e))
}

/// Raw consumed/goal fraction; not clamped
#[wasm_bindgen(js_name = water_progress_fraction)]
pub fn water_fraction(consumed_ml: f64, goal_ml: i32) -> f64 {
    water_progress_fraction(consumed_ml as i64, goal_ml)
}

/// Take a JSON array of habits and return it with unique colours
#[wasm_bindgen]
pub fn assign_unique_colors_json(json: &str) -> Result<String, JsError> {
    recolor(json).map_err(|e| JsError::new(&e))
}
