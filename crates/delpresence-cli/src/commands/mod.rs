//! One submodule per command group.
//!
//! Every handler takes a [`Context`], performs its calls through the
//! `delpresence` services, and reports the outcome as a toast.

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod course_groups;
pub mod courses;
pub mod reference;
pub mod schedules;
pub mod student_groups;
pub mod study_programs;

use clap::Args;
use delpresence::ApiClient;
use delpresence_config::AttendanceConfig;
use delpresence_core::{Page, PaginationParams, paginate};
use dialoguer::Confirm;

/// Shared state for API-backed commands.
#[derive(Debug, Clone)]
pub struct Context {
    pub client: ApiClient,
    pub attendance: AttendanceConfig,
}

/// `--page` / `--limit` flags of list commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (1-100)
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

impl PageArgs {
    pub fn slice<T>(self, items: Vec<T>) -> Page<T> {
        paginate(items, &PaginationParams::page(self.page, self.limit))
    }
}

/// `--yes` flag of destructive commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl ConfirmArgs {
    /// Asks before a destructive action unless `--yes` was given.
    pub fn confirm(self, prompt: &str) -> anyhow::Result<bool> {
        if self.yes {
            return Ok(true);
        }
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Dibatalkan");
        }
        Ok(confirmed)
    }
}
