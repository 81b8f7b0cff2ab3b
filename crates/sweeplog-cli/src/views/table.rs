use chrono::Local;
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use sweeplog_core::models::{ScheduleEntry, TaskInstance};
use sweeplog_core::recurrence::FrequencyRule;

pub fn display_tasks(tasks: &[TaskInstance]) {
    if tasks.is_empty() {
        println!("No tasks scheduled.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Code", "Location", "Team", "Status", "Completed by", "When"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.location_code));

        let mut name_cell = Cell::new(&task.location_name);
        let status_cell = if task.is_completed {
            name_cell = name_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
            Cell::new("done").fg(Color::Green)
        } else {
            Cell::new("pending").fg(Color::Yellow)
        };
        row.add_cell(name_cell);

        row.add_cell(Cell::new(&task.team));
        row.add_cell(status_cell);
        row.add_cell(Cell::new(task.completed_by.as_deref().unwrap_or("")));

        let when = task
            .completion_time
            .map(|ts| HumanTime::from(ts - Local::now().naive_local()).to_string())
            .unwrap_or_default();
        row.add_cell(Cell::new(when));

        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_schedule(entries: &[ScheduleEntry]) {
    if entries.is_empty() {
        println!("No schedule entries.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Code", "Location", "Team", "Frequency"]);

    for entry in entries {
        let mut row = Row::new();
        row.add_cell(Cell::new(&entry.location_code));
        row.add_cell(Cell::new(&entry.location_name));
        row.add_cell(Cell::new(&entry.team));

        let rule_cell = match entry.frequency.parse::<FrequencyRule>() {
            Ok(rule) => Cell::new(rule.to_string()),
            Err(_) => Cell::new(format!("{} (unrecognized)", entry.frequency)).fg(Color::Red),
        };
        row.add_cell(rule_cell);

        table.add_row(row);
    }

    println!("{table}");
}
