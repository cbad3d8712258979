//! Command handlers, one per `Commands` variant

pub mod build;
pub mod create;
pub mod runtime;
pub mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};

use dockcraft::application::Workspace;
use dockcraft::config::{load_for_workspace, Config};
use dockcraft::domain::ports::{AssumeYes, Confirmer};
use dockcraft::infrastructure::{DockerComposeGateway, JsonDocumentRepository};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::prompter::DialoguerPrompter;

/// Everything a handler needs, resolved once from the global flags
pub struct AppContext {
    pub workspace: Workspace,
    pub config: Config,
    pub ui: UiContext,
    pub yes: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("cannot read the current directory")?,
        };
        let loaded = load_for_workspace(&root)?;
        let ui = UiContext::new(cli.verbose, cli.color, &loaded.config);

        for warning in &loaded.warnings {
            eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }

        Ok(Self {
            workspace: Workspace::from_config(root, &loaded.config),
            config: loaded.config,
            ui,
            yes: cli.yes,
        })
    }

    pub fn repository(&self) -> JsonDocumentRepository {
        JsonDocumentRepository::new(self.workspace.document_path())
    }

    /// Compose gateway running in the workspace root
    pub fn runtime(&self) -> DockerComposeGateway {
        DockerComposeGateway::new(
            self.config.runtime.binary.clone(),
            self.workspace.root(),
            &self.config.runtime.compose_file,
        )
    }

    pub fn prompter(&self) -> DialoguerPrompter {
        if !self.ui.caps.is_interactive {
            tracing::debug!("stdin is not an interactive terminal, prompts will fail");
        }
        DialoguerPrompter::new(self.ui.color, self.yes)
    }

    /// `--yes` answers every confirmation; otherwise the prompter asks
    pub fn confirmer<'a>(&self, prompter: &'a DialoguerPrompter) -> &'a dyn Confirmer {
        if self.yes {
            &AssumeYes
        } else {
            prompter
        }
    }

    pub fn root(&self) -> PathBuf {
        self.workspace.root().to_path_buf()
    }
}
