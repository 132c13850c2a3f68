use clap::ArgAction;
use clap::Parser;

use game_of_life::config::Config;
use game_of_life::config::ConfigError;
use game_of_life::config::DEFAULT_DELAY_MS;
use game_of_life::config::DEFAULT_HEIGHT;
use game_of_life::config::DEFAULT_WIDTH;
use game_of_life::rule_set::B3S23;
use game_of_life::rule_set::RuleSet;

/// Conway's Game of Life in the terminal.
///
/// Space pauses and resumes, Esc clears the grid, a left click toggles a cell and q quits.
#[derive(Parser, Debug)]
#[command(name = "game-of-life")]
#[command(disable_help_flag = true, allow_negative_numbers = true)]
pub struct Args {
    /// Grid width, in cells
    #[arg(short = 'w', value_name = "width", default_value_t = DEFAULT_WIDTH)]
    pub width: i64,

    /// Grid height, in cells
    #[arg(short = 'h', value_name = "height", default_value_t = DEFAULT_HEIGHT)]
    pub height: i64,

    /// Delay between generations, in milliseconds
    #[arg(short = 'd', value_name = "delay", default_value_t = DEFAULT_DELAY_MS)]
    pub delay: i64,

    /// Start from a random pattern generated with this seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Birth/survival rule, e.g. B36/S23
    #[arg(long, default_value_t = B3S23)]
    pub rule: RuleSet,

    /// Show this help message
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let config = Config::new(self.width, self.height, self.delay)?
            .with_seed(self.seed)
            .with_rule(self.rule);

        Ok(config)
    }
}
