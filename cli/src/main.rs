mod commands;
mod terminal;

use commands::{CommandLine, Commands, menu, order};
use pizzeria_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging(cfg.quiet);
    print::initialize(&cfg);
    print::banner(&cfg);

    match commands.command {
        Commands::Order { payment } => {
            print::header("taking your order", &cfg);
            order::order(payment, &cfg)
        }
        Commands::Menu => {
            print::header("menu", &cfg);
            menu::menu(&cfg);
            Ok(())
        }
    }
}
