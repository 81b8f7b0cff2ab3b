use clap::{Parser, Subcommand};

/// A command-line cleaning checklist tool with schedule-driven daily task lists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show (and materialize) the checklist for a date
    Tasks(TasksCommand),
    /// Submit completed tasks for a date
    Submit(SubmitCommand),
    /// Inspect the cleaning schedule
    Schedule(ScheduleCommand),
    /// List the users who can submit completions
    Users,
}

#[derive(Parser, Debug, Clone)]
pub struct TasksCommand {
    /// The date to show, e.g. '2024-03-01' or 'today'
    #[clap(default_value = "today")]
    pub date: String,
    /// Only show tasks for this team
    #[clap(short, long)]
    pub team: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SubmitCommand {
    /// The date the tasks were completed
    pub date: String,
    /// Location codes to mark as completed
    #[clap(short, long = "code", num_args = 1..)]
    pub codes: Vec<String>,
    /// The user submitting the completions
    #[clap(short, long)]
    pub user: String,
    /// Password (inspectors only; prompted for when omitted)
    #[clap(short, long)]
    pub password: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ScheduleCommand {
    #[command(subcommand)]
    pub command: ScheduleSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScheduleSubcommand {
    /// List every schedule entry
    List,
    /// Show which entries would apply on a date, without materializing
    Preview(SchedulePreviewCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct SchedulePreviewCommand {
    /// The date to check, e.g. '2024-03-01' or 'next monday'
    pub date: String,
}
