use anyhow::Result;

use dockcraft::application::CreateUseCase;
use dockcraft::infrastructure::LocalFs;

use super::AppContext;
use crate::ui::views::document::render_create_summary;

pub fn cmd_create(ctx: &AppContext, network: Option<&str>) -> Result<()> {
    let prompter = ctx.prompter();
    let confirmer = ctx.confirmer(&prompter);

    let result = CreateUseCase::new(ctx.repository(), LocalFs::new()).execute(
        network,
        &ctx.workspace,
        &prompter,
        confirmer,
    )?;

    print!(
        "{}",
        render_create_summary(
            &result,
            ctx.workspace.document_path(),
            &ctx.root(),
            ctx.ui.color,
            ctx.ui.unicode
        )
    );
    Ok(())
}
