//! Runtime command handlers (up/down/start/stop, backup, shell)

use anyhow::{Context, Result};

use dockcraft::application::{
    backup_services, known_services, open_shell, run_action, validate_service, RuntimeAction,
};

use super::AppContext;
use crate::ui::scoped::run_scoped;
use crate::ui::views::runtime::render_backup_report;

pub fn cmd_runtime(ctx: &AppContext, action: RuntimeAction) -> Result<()> {
    let runtime = ctx.runtime();

    if action.is_attached() {
        // The runtime receives Ctrl+C itself and shuts the containers down
        ignore_interrupts()?;
        run_action(&runtime, action)?;
        return Ok(());
    }

    let stdout = run_scoped(&ctx.ui, action.description(), || {
        run_action(&runtime, action)
    })?;
    if ctx.ui.verbose > 0 && !stdout.trim().is_empty() {
        print!("{}", stdout);
    }
    Ok(())
}

pub fn cmd_backup(ctx: &AppContext) -> Result<()> {
    let runtime = ctx.runtime();
    let services = known_services(&runtime, &ctx.repository());

    let report = run_scoped(&ctx.ui, "Backing up server data", || {
        backup_services(
            &runtime,
            &services,
            ctx.workspace.backup_dir(),
            chrono::Local::now(),
        )
    })?;

    print!(
        "{}",
        render_backup_report(&report, ctx.ui.color, ctx.ui.unicode)
    );
    if !report.failed.is_empty() {
        anyhow::bail!("{} of {} backups failed", report.failed.len(), services.len());
    }
    Ok(())
}

pub fn cmd_shell(ctx: &AppContext, service: &str) -> Result<()> {
    let runtime = ctx.runtime();
    let known = known_services(&runtime, &ctx.repository());
    validate_service(service, &known)?;

    ignore_interrupts()?;
    open_shell(&runtime, service)?;
    Ok(())
}

/// Let the foreground child handle Ctrl+C while we wait on it
fn ignore_interrupts() -> Result<()> {
    ctrlc::set_handler(|| tracing::debug!("interrupt forwarded to child"))
        .context("cannot install the Ctrl+C handler")
}
