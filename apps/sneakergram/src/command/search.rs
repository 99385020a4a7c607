use super::{Command, EngineSource};
use crate::error::Result;
use crate::render;
use search_core::FilterOption;

pub struct SearchCommand {
    source: EngineSource,
    query: String,
    filter: FilterOption,
}

impl SearchCommand {
    pub fn new(source: EngineSource, query: String, filter: FilterOption) -> Self {
        Self {
            source,
            query,
            filter,
        }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let engine = self.source.load()?;
        engine.set_filter(self.filter);
        engine.search(self.query.as_str());

        print!("{}", render::format_state(&engine.state()));
        Ok(())
    }
}
