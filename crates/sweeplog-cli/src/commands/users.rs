use anyhow::Result;
use sweeplog_core::users::UserDirectory;

use crate::config::Config;

pub async fn list_users(config: &Config) -> Result<()> {
    let directory = UserDirectory::load(&config.users_path).await?;

    for user_id in directory.user_ids() {
        let role = if directory.requires_password(user_id) {
            "inspector"
        } else {
            "cleaner"
        };
        println!("{} ({})", user_id, role);
    }

    Ok(())
}
