use anyhow::Result;
use dialoguer::Password;
use sweeplog_core::repository::Repository;
use sweeplog_core::users::UserDirectory;

use crate::cli::SubmitCommand;
use crate::config::Config;
use crate::parser::parse_task_date;

pub async fn submit_tasks(
    repo: &impl Repository,
    command: SubmitCommand,
    config: &Config,
) -> Result<()> {
    let date = parse_task_date(&command.date)?;
    let directory = UserDirectory::load(&config.users_path).await?;

    let password = match command.password {
        Some(password) => Some(password),
        None if directory.requires_password(&command.user) => {
            Some(Password::new().with_prompt("Password").interact()?)
        }
        None => None,
    };
    let user = directory.authenticate(&command.user, password.as_deref())?;

    let updated = repo
        .submit_completions(date, &command.codes, &user.user_id)
        .await?;

    if updated == 0 {
        println!("No matching tasks for {}; nothing was submitted.", date);
    } else {
        println!("Submitted {} task(s) for {}.", updated, date);
    }

    Ok(())
}
