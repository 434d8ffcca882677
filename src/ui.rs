use crate::calendar::month_name;
use crate::color::{Bucket, color_for, completed_count};
use crate::config::TrackerConfig;
use crate::models::{HabitRecord, YearCalendar, date_key};
use chrono::NaiveDate;

pub fn render_index(
    today: NaiveDate,
    calendar: &YearCalendar,
    record: &HabitRecord,
    config: &TrackerConfig,
) -> String {
    let date = date_key(today);
    let completed = completed_count(record, &date);
    INDEX_HTML
        .replace("{{YEAR}}", &calendar.year.to_string())
        .replace("{{DATE}}", &date)
        .replace("{{COMPLETED}}", &completed.to_string())
        .replace("{{LEGEND}}", &render_legend(config))
        .replace("{{CALENDAR}}", &render_calendar(calendar, record, config))
        .replace("{{CHECKLIST}}", &render_checklist(&date, record, config))
}

fn render_calendar(calendar: &YearCalendar, record: &HabitRecord, config: &TrackerConfig) -> String {
    let mut html = String::new();
    for grid in &calendar.months {
        html.push_str(&format!(
            r#"<div class="month"><span class="month-name">{}</span>"#,
            month_name(grid.month)
        ));
        for week in &grid.weeks {
            html.push_str(r#"<div class="week">"#);
            for slot in week {
                match slot {
                    Some(cell) => {
                        let key = cell.key();
                        html.push_str(&format!(
                            r#"<span class="day" title="{}" data-date="{}" style="background-color: {}"></span>"#,
                            cell.label(),
                            key,
                            color_for(record, &key, &config.palette).as_str()
                        ));
                    }
                    None => html.push_str(r#"<span class="day blank"></span>"#),
                }
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }
    html
}

fn render_checklist(date: &str, record: &HabitRecord, config: &TrackerConfig) -> String {
    let done = record.days.get(date).copied().unwrap_or_default();
    let mut html = String::new();
    for (index, slot) in config.habit_slots.iter().enumerate() {
        let checked = done[index];
        let icon = slot
            .icon
            .as_deref()
            .map(|icon| format!(r#"<span class="icon">{}</span>"#, escape(icon)))
            .unwrap_or_default();
        html.push_str(&format!(
            r#"<form method="post" action="/habits/{index}/toggle"><button type="submit" id="habit-{index}" class="habit{}" aria-pressed="{checked}"><span class="check">{}</span>{icon}<span class="habit-label">{}</span></button></form>"#,
            if checked { " done" } else { "" },
            if checked { "&#10003;" } else { "" },
            escape(&slot.name)
        ));
    }
    html
}

fn render_legend(config: &TrackerConfig) -> String {
    let labels = ["0", "1-2", "3-4", "5-6", "7"];
    let buckets = [
        Bucket::None,
        Bucket::Low,
        Bucket::Medium,
        Bucket::High,
        Bucket::Full,
    ];
    let mut html = String::new();
    for (bucket, label) in buckets.into_iter().zip(labels) {
        html.push_str(&format!(
            r#"<span class="legend-item"><span class="day" style="background-color: {}"></span>{label}</span>"#,
            config.palette.color(bucket).as_str()
        ));
    }
    html
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #89cff0;
      --bg-2: #8a2be2;
      --ink: #2b2a28;
      --accent: #8a2be2;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      gap: 24px;
      padding: 40px 18px 48px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
      color: white;
      text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
    }

    .card {
      width: min(1100px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 18px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
      text-align: center;
    }

    .calendar {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 12px;
    }

    .month {
      display: flex;
      flex-direction: column;
      align-items: center;
    }

    .month-name {
      font-weight: 600;
      margin-bottom: 6px;
    }

    .week {
      display: flex;
    }

    .day {
      display: inline-block;
      width: 12px;
      height: 12px;
      margin: 2px;
      border-radius: 50%;
      transition: transform 200ms ease;
    }

    .day.blank {
      background: transparent;
    }

    .month .day:not(.blank):hover {
      transform: scale(1.2);
      cursor: pointer;
    }

    .legend {
      display: flex;
      justify-content: center;
      gap: 14px;
      font-size: 0.85rem;
      color: #6f6a65;
    }

    .legend-item {
      display: inline-flex;
      align-items: center;
      gap: 4px;
    }

    .checklist {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 10px;
    }

    .checklist form {
      margin: 0;
    }

    .habit {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.15);
      border-radius: 999px;
      background: white;
      padding: 10px 16px;
      font: inherit;
      font-weight: 500;
      cursor: pointer;
      display: inline-flex;
      align-items: center;
      gap: 8px;
    }

    .habit .check {
      width: 18px;
      height: 18px;
      border-radius: 6px;
      border: 2px solid var(--accent);
      display: inline-grid;
      place-items: center;
      font-size: 0.8rem;
      color: white;
    }

    .habit.done .check {
      background: var(--accent);
    }

    .hint {
      margin: 0;
      text-align: center;
      color: #6f6a65;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <h1>Habit Tracker</h1>

  <section class="card">
    <h2>{{YEAR}}</h2>
    <div class="calendar">{{CALENDAR}}</div>
    <div class="legend">{{LEGEND}}</div>
  </section>

  <section class="card">
    <h2>Today's Habits</h2>
    <p class="hint"><span id="date">{{DATE}}</span> &middot; <span id="completed">{{COMPLETED}}</span> of 7 done</p>
    <div class="checklist">{{CHECKLIST}}</div>
  </section>
</body>
</html>
"#;
