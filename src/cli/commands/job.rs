use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ids::UuidGenerator;
use crate::core::job::{JobLogic, NewJob};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::JobStage;
use crate::ui::messages::{info, success};
use crate::utils::formatting::describe_stage;
use crate::utils::table::{Column, Table};
use chrono::Utc;

/// Handle `job-add` and `jobs`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::JobAdd {
            number,
            name,
            contractor,
            site,
            stage,
        } => {
            let stage = match stage {
                Some(s) => JobStage::from_cli(s).ok_or_else(|| AppError::InvalidStage(s.clone()))?,
                None => JobStage::Prestart,
            };

            let mut pool = DbPool::new(&cfg.database)?;
            let job = JobLogic::add(
                &mut pool,
                NewJob {
                    job_number: number.clone(),
                    name: name.clone(),
                    main_contractor: contractor.clone().unwrap_or_default(),
                    site_address: site.clone().unwrap_or_default(),
                    stage,
                },
                Utc::now(),
                &mut UuidGenerator,
            )?;

            ttlog_soft(
                &pool.conn,
                "job_add",
                &job.job_number,
                &format!("Added job {} ({})", job.job_number, job.name),
            );
            success(format!("Job {} added: {}", job.job_number, job.name));
        }
        Commands::Jobs { all } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let jobs = JobLogic::list(&mut pool, *all)?;

            if jobs.is_empty() {
                info("No jobs found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("Number", 10),
                Column::new("Name", 28),
                Column::new("Contractor", 18),
                Column::new("Stage", 11),
                Column::new("Active", 6),
            ])
            .with_separator(&cfg.separator_char);

            for job in &jobs {
                table.add_row(vec![
                    job.job_number.clone(),
                    job.name.clone(),
                    job.main_contractor.clone(),
                    describe_stage(&job.stage).to_string(),
                    if job.active { "yes" } else { "no" }.to_string(),
                ]);
            }

            print!("{}", table.render());
        }
        _ => {}
    }

    Ok(())
}
