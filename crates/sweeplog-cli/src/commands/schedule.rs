use anyhow::Result;
use sweeplog_core::recurrence::matching_entries;
use sweeplog_core::schedule::{CsvScheduleSource, ScheduleSource};

use crate::cli::{ScheduleCommand, ScheduleSubcommand};
use crate::config::Config;
use crate::parser::parse_task_date;
use crate::views::table::display_schedule;

pub async fn schedule_command(config: &Config, command: ScheduleCommand) -> Result<()> {
    let source = CsvScheduleSource::new(&config.schedule_path);

    match command.command {
        ScheduleSubcommand::List => {
            let entries = source.load().await?;
            display_schedule(&entries);
        }
        ScheduleSubcommand::Preview(preview) => {
            let date = parse_task_date(&preview.date)?;
            let entries = source.load().await?;
            let matched: Vec<_> = matching_entries(&entries, date).cloned().collect();
            println!(
                "{} of {} scheduled locations apply on {} ({})",
                matched.len(),
                entries.len(),
                date,
                date.format("%A")
            );
            display_schedule(&matched);
        }
    }

    Ok(())
}
