use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::job::JobLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        job,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let job = match job {
            Some(key) => Some(JobLogic::resolve(&mut pool, key)?),
            None => None,
        };
        ExportLogic::export(
            &mut pool,
            format,
            file,
            job.as_ref(),
            range.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
