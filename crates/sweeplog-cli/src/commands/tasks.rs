use anyhow::Result;
use sweeplog_core::repository::Repository;

use crate::cli::TasksCommand;
use crate::parser::parse_task_date;
use crate::views::table::display_tasks;

pub async fn show_tasks(repo: &impl Repository, command: TasksCommand) -> Result<()> {
    let date = parse_task_date(&command.date)?;
    let mut tasks = repo.tasks_for_date(date).await?;

    if let Some(team) = &command.team {
        tasks.retain(|task| task.team == *team);
    }

    println!("Checklist for {}", date);
    display_tasks(&tasks);

    Ok(())
}
