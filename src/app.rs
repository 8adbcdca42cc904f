use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra,
    infra::error::AppError,
    state,
    usecases::{
        self, bootstrap,
        context::AppContext,
        replay::{replay, ReplayOutcome, ReplayRequest},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        domain = domain::module_name(),
        state = state::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Replay {
            updates,
            seed,
            dump,
            settle,
        } => {
            let request = ReplayRequest {
                updates,
                seed,
                settle,
            };
            let outcome = replay(&context, &request)?;

            for line in summary_lines(&outcome) {
                eprintln!("{line}");
            }
            if dump {
                println!("{}", infra::seed::encode_state(&outcome.state)?);
            }
        }
        Command::CheckConfig => {
            println!("{}", render_config(&context)?);
        }
    }

    Ok(())
}

fn render_config(context: &AppContext) -> Result<String, AppError> {
    let body = toml::to_string_pretty(&context.config).map_err(AppError::ConfigEncode)?;
    Ok(format!("# source: {}\n{body}", context.config_source))
}

fn summary_lines(outcome: &ReplayOutcome) -> [String; 3] {
    let report = &outcome.report;
    [
        format!(
            "updates: {} received, {} committed (state version {})",
            report.updates_received, report.updates_committed, outcome.version
        ),
        format!(
            "effects: {} actions requested, {} notifications",
            outcome.actions_requested, outcome.notifications_delivered
        ),
        format!(
            "scheduled tasks: {} fired, {} pending",
            report.tasks_fired, report.tasks_left
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::global_state::GlobalState, infra::config::AppConfig,
        usecases::update_loop::LoopReport,
    };

    #[test]
    fn rendered_config_names_its_source_and_sections() {
        let context = AppContext::new(AppConfig::default(), "config.toml".to_owned());

        let rendered = render_config(&context).expect("config should render");

        assert!(rendered.starts_with("# source: config.toml\n"));
        assert!(rendered.contains("[state]"));
        assert!(rendered.contains("max_active_pinned_chats = 5"));
        assert!(!rendered.contains("current_user_id"));
    }

    #[test]
    fn summary_reports_counts() {
        let outcome = ReplayOutcome {
            report: LoopReport {
                updates_received: 4,
                updates_committed: 3,
                tasks_fired: 1,
                tasks_left: 0,
            },
            version: 5,
            actions_requested: 2,
            notifications_delivered: 1,
            state: GlobalState::default(),
        };

        let lines = summary_lines(&outcome);

        assert_eq!(lines[0], "updates: 4 received, 3 committed (state version 5)");
        assert_eq!(lines[1], "effects: 2 actions requested, 1 notifications");
        assert_eq!(lines[2], "scheduled tasks: 1 fired, 0 pending");
    }
}
