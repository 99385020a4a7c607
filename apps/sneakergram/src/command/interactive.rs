use super::{Command, EngineSource};
use crate::error::{Result, WrapErr};
use crate::render;
use search_core::{FilterOption, SearchEngine};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

const HELP: &str =
    "Type to search. Commands: :filter <all|users|sneakers|posts>, :clear, :trending, :quit";

pub struct InteractiveCommand {
    source: EngineSource,
}

impl InteractiveCommand {
    pub fn new(source: EngineSource) -> Self {
        Self { source }
    }
}

#[derive(Debug, PartialEq)]
enum Input {
    Query(String),
    Filter(FilterOption),
    UnknownFilter(String),
    Clear,
    Trending,
    Quit,
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        ":clear" => Input::Clear,
        ":trending" => Input::Trending,
        ":quit" | ":q" => Input::Quit,
        _ => match trimmed.strip_prefix(":filter") {
            Some(arg) => {
                let arg = arg.trim();
                FilterOption::from_str(arg)
                    .map(Input::Filter)
                    .unwrap_or_else(|_| Input::UnknownFilter(arg.to_string()))
            }
            // 普通输入原样交给引擎，包括空行（清空结果）
            None => Input::Query(line.to_string()),
        },
    }
}

#[async_trait::async_trait]
impl Command for InteractiveCommand {
    async fn execute(&self) -> Result<()> {
        let engine = Arc::new(self.source.load()?);

        println!("{HELP}");
        let (out, mut rendered) = mpsc::unbounded_channel();
        let writer = tokio::spawn(async move {
            while let Some(text) = rendered.recv().await {
                print!("{text}");
            }
        });

        let outcome = run_session(engine, BufReader::new(tokio::io::stdin()), out).await;
        writer.await.wrap_err("Output task failed")?;
        outcome
    }
}

/// Feed `input` line by line into the engine, sending rendered output to `out`.
///
/// Returns once the input ends (or `:quit`), the last debounced search has
/// committed, and everything it produced has been sent.
async fn run_session<R>(
    engine: Arc<SearchEngine>,
    input: R,
    out: mpsc::UnboundedSender<String>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();
    let mut updates = engine.subscribe();
    let printer = tokio::spawn({
        let out = out.clone();
        async move {
            let mut last_revision = 0;
            loop {
                tokio::select! {
                    changed = updates.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = &mut shutdown_rx => break,
                }
                // 查询回显和过滤器切换不打印，只打印新提交的结果
                let state = updates.borrow_and_update().clone();
                if state.revision != last_revision {
                    last_revision = state.revision;
                    if out.send(render::format_state(&state)).is_err() {
                        return;
                    }
                }
            }

            // 退出前补上最后一次尚未打印的提交
            let state = updates.borrow_and_update().clone();
            if state.revision != last_revision {
                let _ = out.send(render::format_state(&state));
            }
        }
    });

    let outcome = read_input(&engine, input, &out).await;

    // 输入结束时让最后一次防抖搜索完成
    while engine.has_pending_search() {
        debug!("Waiting for the pending search before exit");
        tokio::time::sleep(engine.config().debounce()).await;
    }
    let _ = shutdown.send(());
    printer.await.wrap_err("Result printer failed")?;
    outcome
}

async fn read_input<R>(
    engine: &SearchEngine,
    input: R,
    out: &mpsc::UnboundedSender<String>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Query(text) => engine.set_query(text),
            Input::Filter(option) => {
                engine.set_filter(option);
                let _ = out.send(render::format_state(&engine.state()));
            }
            Input::UnknownFilter(arg) => {
                eprintln!("Unknown filter '{arg}', expected all, users, sneakers or posts");
            }
            Input::Clear => engine.clear_search(),
            Input::Trending => {
                let _ = out.send(render::format_trending(engine.trending()));
            }
            Input::Quit => break,
        }
    }
    Ok(())
}
