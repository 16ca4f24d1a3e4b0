use clap::Parser;
use llm_eval::api::Server;
use llm_eval::grading::{GradeResult, GraderKind};
use llm_eval::{EvaluationRequest, Evaluator, FixedScoreEvaluator, TestCase};

use crate::args::{CliArgs, Command, ServeArgs};
use crate::config::load_config;
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config)?;
    let mut config = loaded.config;

    match args.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(serve) => {
            serve.apply(&mut config.server);
            init_logging(&config.logging, config.server.debug)?;
            if !loaded.exists {
                log::info!(
                    "No config file at {}, using defaults",
                    loaded.path.display()
                );
            }
            Server::new(config.server).run().await?;
        }
        Command::Evaluate {
            response,
            reference,
        } => {
            init_logging(&config.logging, false)?;
            let req = EvaluationRequest::new(response, reference.unwrap_or_default());
            let result = FixedScoreEvaluator.evaluate(&TestCase::from(&req)).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Grade {
            expected,
            actual,
            grader,
        } => {
            println!("{}", render_grade(grader, &expected, &actual)?);
        }
    }
    Ok(())
}

/// Grades `actual` and renders the result as `{"score": ..}`.
fn render_grade(grader: GraderKind, expected: &str, actual: &str) -> serde_json::Result<String> {
    serde_json::to_string(&GradeResult {
        score: grader.grade(expected, actual),
    })
}
