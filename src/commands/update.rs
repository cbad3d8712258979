use anyhow::Result;

use dockcraft::application::{
    known_services, validate_service, UpdateMode, UpdateOptions, UpdateUseCase,
};
use dockcraft::infrastructure::LocalFs;

use super::AppContext;
use crate::ui::views::document::render_update_result;

pub fn cmd_update(
    ctx: &AppContext,
    service: Option<String>,
    add: bool,
    remove: bool,
    change: bool,
) -> Result<()> {
    // Checked before anything is read
    let mode = UpdateMode::from_flags(add, remove, change)?;

    // Remove and change target an existing service; add may name a new one
    if let (Some(name), UpdateMode::Remove | UpdateMode::Change) = (&service, mode) {
        let known = known_services(&ctx.runtime(), &ctx.repository());
        validate_service(name, &known)?;
    }

    let prompter = ctx.prompter();
    let confirmer = ctx.confirmer(&prompter);
    let options = UpdateOptions::new(mode).with_service(service);

    let result = UpdateUseCase::new(ctx.repository(), LocalFs::new()).execute(
        &options,
        &ctx.workspace,
        &prompter,
        confirmer,
    )?;

    print!(
        "{}",
        render_update_result(&result, &ctx.root(), ctx.ui.color, ctx.ui.unicode)
    );
    Ok(())
}
