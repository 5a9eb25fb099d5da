//! Interactive trip planner over the replanning workflow.
//!
//! Reads one request per line, runs the workflow, prints the final answer.
//! Every tool request stops at a console checkpoint (y/n/r). `--mock` runs
//! against scripted capabilities, no API keys needed.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripflow::{
    Decision, LlmClient, MockLlm, MockToolSource, OpenAiClient, Outcome, ReplanWorkflow,
    ReviewChannel, ReviewError, ReviewItem, TavilySearch, ToolSource, WorkflowBuilder,
};

#[derive(Debug, Parser)]
#[command(name = "tripflow", about = "Trip planner with human-gated tool use")]
struct Args {
    /// Run against scripted mock capabilities instead of live APIs.
    #[arg(long)]
    mock: bool,

    /// Maximum replans granted per request.
    #[arg(long, default_value_t = tripflow::DEFAULT_MAX_REPLANS)]
    max_replans: u32,

    /// Transition budget per request.
    #[arg(long, default_value_t = tripflow::DEFAULT_STEP_LIMIT)]
    step_limit: usize,

    /// Web search results per query.
    #[arg(long, default_value_t = 3)]
    max_results: u32,
}

/// Console checkpoint: prints the latest agent output, asks y/n/r.
struct ConsoleReview;

impl ConsoleReview {
    fn show(item: &ReviewItem) {
        match item {
            ReviewItem::ToolRequest(calls) => {
                println!("\n--- AI Requesting Tools ---");
                for call in calls {
                    println!("{}: {}", call.name, call.arguments);
                }
            }
            ReviewItem::AgentReply(text) => {
                println!("\n--- AI Response ---");
                println!("{text}");
            }
        }
    }
}

#[async_trait]
impl ReviewChannel for ConsoleReview {
    async fn decide(&self, item: &ReviewItem) -> Result<Decision, ReviewError> {
        Self::show(item);
        // Blocking stdin read, off the async runtime.
        tokio::task::spawn_blocking(|| {
            loop {
                print!("Is this correct? (y/n/r for yes/no/replan): ");
                std::io::stdout()
                    .flush()
                    .map_err(|e| ReviewError::Closed(e.to_string()))?;
                let mut line = String::new();
                let n = std::io::stdin()
                    .read_line(&mut line)
                    .map_err(|e| ReviewError::Closed(e.to_string()))?;
                if n == 0 {
                    return Err(ReviewError::Closed("stdin closed".into()));
                }
                match line.trim().to_lowercase().as_str() {
                    "y" => return Ok(Decision::Approve),
                    "n" => return Ok(Decision::Reject),
                    "r" => return Ok(Decision::Replan),
                    _ => println!("Please answer y, n, or r."),
                }
            }
        })
        .await
        .map_err(|e| ReviewError::Closed(e.to_string()))?
    }
}

async fn build_workflow(args: &Args) -> anyhow::Result<ReplanWorkflow> {
    let review = Arc::new(ConsoleReview);

    let (llm, tools): (Arc<dyn LlmClient>, Arc<dyn ToolSource>) = if args.mock {
        (
            Arc::new(MockLlm::search_then_answer(
                "3-day Berlin itinerary",
                "Day 1: Museum Island. Day 2: Reichstag and Tiergarten. Day 3: East Side Gallery.",
            )),
            Arc::new(MockToolSource::web_search_example()),
        )
    } else {
        let tools: Arc<dyn ToolSource> = Arc::new(
            TavilySearch::from_env()
                .context("web search setup failed")?
                .with_max_results(args.max_results),
        );
        let specs = tools
            .list_tools()
            .await
            .context("listing tools failed")?;
        let llm = OpenAiClient::from_env()
            .context("LLM setup failed")?
            .with_tools(&specs);
        (Arc::new(llm), tools)
    };

    WorkflowBuilder::new(llm, tools, review)
        .with_max_replans(args.max_replans)
        .with_step_limit(args.step_limit)
        .build()
        .context("workflow compilation failed")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tripflow=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let workflow = build_workflow(&args).await?;

    println!("Welcome to the trip planner. Type 'quit', 'exit', or 'q' to leave.");
    println!("{}", "-".repeat(50));

    loop {
        print!("User: ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "quit" | "exit" | "q") {
            println!("Goodbye!");
            break;
        }

        println!("Planning your trip, please wait...");
        match workflow.run(input).await {
            Ok(state) => {
                match state.outcome {
                    Some(Outcome::Answered) => {
                        println!(
                            "\nPlanner:\n{}",
                            state.final_answer().unwrap_or("(no answer)")
                        );
                    }
                    Some(Outcome::Rejected) => println!("\nPlanner: step rejected; stopped."),
                    Some(Outcome::ReplanBudgetExhausted) => {
                        println!("\nPlanner: replan budget exhausted; stopped.")
                    }
                    None => println!("\nPlanner: run ended without an outcome."),
                }
                println!("{}", "-".repeat(50));
            }
            Err(e) => {
                tracing::error!(error = %e, "workflow run failed");
                println!("\nPlanner error: {e}");
            }
        }
    }
    Ok(())
}
