use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use dbug_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            files,
            kind,
            title,
            collapsed,
            max_depth,
            fragment,
            sequence,
        } => {
            let mut options = config.dump_options().kind(kind.into()).sequence(sequence);
            if let Some(title) = title {
                options = options.title(title);
            }
            if collapsed {
                options = options.collapsed(true);
            }
            if let Some(max_depth) = max_depth {
                options = options.max_depth(max_depth);
            }

            handlers::render::handle(&files, options, config, fragment)
        }
    }
}
