use crate::calendar::{self, SUPPORTED_YEARS, month_name};
use crate::color::{Bucket, Palette, color_for, completed_count};
use crate::config::TrackerConfig;
use crate::errors::AppError;
use crate::models::{
    CalendarCell, CalendarQuery, CalendarResponse, DayHabits, DayResponse, HabitRecord,
    HabitStatus, MonthView, ToggleRequest, YearCalendar, date_key,
};
use crate::state::AppState;
use crate::store::parse_date;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{Html, Redirect},
};
use chrono::{Datelike, Local, NaiveDate};
use std::sync::Arc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let calendar = calendar::build(today.year());
    let store = state.store.lock().await;
    Html(render_index(today, &calendar, store.record(), &state.config))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<DayResponse>, AppError> {
    let date = date_key(today());
    let store = state.store.lock().await;
    let habits = store.completed(&date);

    Ok(Json(to_response(date, habits, &state.config)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let year = query.year.unwrap_or_else(|| today().year());
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(AppError::bad_request(format!(
            "year must be between {} and {}",
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )));
    }

    let calendar = calendar::build(year);
    let store = state.store.lock().await;
    Ok(Json(to_calendar_response(
        &calendar,
        store.record(),
        &state.config.palette,
    )))
}

pub async fn toggle(
    State(state): State<AppState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<DayResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let date = match payload.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => today(),
    };

    let response = apply_toggle(&state, date, payload.index).await?;
    Ok(Json(response))
}

pub async fn toggle_today(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    apply_toggle(&state, today(), index).await?;
    Ok(Redirect::to("/"))
}

async fn apply_toggle(
    state: &AppState,
    date: NaiveDate,
    index: usize,
) -> Result<DayResponse, AppError> {
    let date = date_key(date);
    let mut store = Arc::clone(&state.store).lock_owned().await;
    let key = date.clone();
    // The file write blocks, so it runs on the blocking pool with the lock held.
    let habits = tokio::task::spawn_blocking(move || store.toggle(&key, index))
        .await
        .map_err(AppError::internal)??;
    info!(%date, index, done = habits.get(index).copied().unwrap_or(false), "habit toggled");

    Ok(to_response(date, habits, &state.config))
}

fn to_response(date: String, habits: DayHabits, config: &TrackerConfig) -> DayResponse {
    let completed = habits.iter().filter(|done| **done).count();
    let bucket = Bucket::from_count(completed);
    let habits = config
        .habit_slots
        .iter()
        .zip(habits)
        .enumerate()
        .map(|(index, (slot, done))| HabitStatus {
            index,
            name: slot.name.clone(),
            icon: slot.icon.clone(),
            done,
        })
        .collect();

    DayResponse {
        date,
        habits,
        completed,
        bucket,
        color: config.palette.color(bucket),
    }
}

fn to_calendar_response(
    calendar: &YearCalendar,
    record: &HabitRecord,
    palette: &Palette,
) -> CalendarResponse {
    let months = calendar
        .months
        .iter()
        .map(|grid| MonthView {
            month: grid.month,
            name: month_name(grid.month),
            weeks: grid
                .weeks
                .iter()
                .map(|week| {
                    week.iter()
                        .map(|slot| {
                            slot.map(|cell| {
                                let date = cell.key();
                                CalendarCell {
                                    completed: completed_count(record, &date),
                                    color: color_for(record, &date, palette),
                                    index: cell.index,
                                    date,
                                }
                            })
                        })
                        .collect()
                })
                .collect(),
        })
        .collect();

    CalendarResponse {
        year: calendar.year,
        months,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_response_pairs_slots_with_state() {
        let config = TrackerConfig::classic();
        let response = to_response(
            "2024-03-05".into(),
            [true, false, true, false, false, false, false],
            &config,
        );
        assert_eq!(response.habits.len(), 7);
        assert_eq!(response.habits[2].name, "Habit 3");
        assert!(response.habits[2].done);
        assert!(!response.habits[1].done);
        assert_eq!(response.completed, 2);
        assert_eq!(response.bucket, Bucket::Low);
        assert_eq!(response.color.as_str(), "#A5DAFF");
    }

    #[test]
    fn calendar_response_colors_recorded_days() {
        let mut record = HabitRecord::default();
        record.days.insert("2024-01-01".into(), [true; 7]);
        let calendar = calendar::build(2024);
        let response = to_calendar_response(&calendar, &record, &Palette::BLUE);

        assert_eq!(response.year, 2024);
        assert_eq!(response.months.len(), 12);
        assert_eq!(response.months[0].name, "Jan");

        let first = response.months[0].weeks[0][0].as_ref().unwrap();
        assert_eq!(first.date, "2024-01-01");
        assert_eq!(first.completed, 7);
        assert_eq!(first.color.as_str(), "#8A2BE2");

        let second = response.months[0].weeks[0][1].as_ref().unwrap();
        assert_eq!(second.completed, 0);
        assert_eq!(second.color.as_str(), "#EDEDED");
    }
}
