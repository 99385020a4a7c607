use super::{Command, EngineSource};
use crate::error::Result;
use crate::render;

pub struct TrendingCommand {
    source: EngineSource,
}

impl TrendingCommand {
    pub fn new(source: EngineSource) -> Self {
        Self { source }
    }
}

#[async_trait::async_trait]
impl Command for TrendingCommand {
    async fn execute(&self) -> Result<()> {
        let engine = self.source.load()?;
        print!("{}", render::format_trending(engine.trending()));
        Ok(())
    }
}
