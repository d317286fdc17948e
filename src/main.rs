//! gridpager demo - Entry Point

use clap::Parser;
use gridpager::source::demo::employee_source;
use gridpager::state::PagingOrchestrator;
use gridpager::view::{demo_columns, PagingBar, TableView, TuiApp};
use std::path::PathBuf;
use tracing::info;

/// Browse a synthetic employee table with paging and column sorting.
#[derive(Parser, Debug)]
#[command(name = "gridpager")]
#[command(version)]
#[command(about = "Pagination and sort orchestration demo")]
pub struct Args {
    /// Records per page
    #[arg(short, long)]
    pub page_size: Option<u32>,

    /// Defer the first fetch until a page is requested
    #[arg(long)]
    pub lazy_load: bool,

    /// Message shown when there are no results
    #[arg(long)]
    pub empty_message: Option<String>,

    /// Number of synthetic records to generate
    #[arg(long, default_value = "87")]
    pub rows: usize,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = gridpager::config::load_config_with_precedence(args.config.clone())?;
        let merged = gridpager::config::merge_config(config_file);
        let with_env = gridpager::config::apply_env_overrides(merged);

        // --lazy-load is a bare flag: only override when explicitly set
        let lazy_override = if args.lazy_load { Some(true) } else { None };
        gridpager::config::apply_cli_overrides(
            with_env,
            args.page_size,
            lazy_override,
            args.empty_message.clone(),
        )
    };

    gridpager::logging::init(&config.log_file_path)?;
    info!(config = ?config, rows = args.rows, "Configuration loaded and resolved");

    let source = employee_source(args.rows, config.page_size);
    let pager = PagingOrchestrator::new(
        PagingBar::new(),
        TableView::new(demo_columns()),
        source,
        config.pager(),
    );

    let mut app = TuiApp::new(pager)?;
    let result = app.run();
    gridpager::view::restore_terminal()?;
    result?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_with_no_flags() {
        let args = Args::parse_from(["gridpager"]);
        assert_eq!(args.page_size, None);
        assert!(!args.lazy_load);
        assert_eq!(args.rows, 87);
    }

    #[test]
    fn args_parse_page_size_and_rows() {
        let args = Args::parse_from(["gridpager", "-p", "25", "--rows", "500"]);
        assert_eq!(args.page_size, Some(25));
        assert_eq!(args.rows, 500);
    }
}
