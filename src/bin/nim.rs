//! Train a Nim agent by self-play, then optionally play against it.
//!
//! Usage: cargo run --bin nim -- play --episodes 10000

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use nim_rl::{Action, AgentConfig, GameRng, Nim, NimAgent, PlayerId, Trainer, TrainingConfig};

/// Nim with a self-taught Q-learning opponent
#[derive(Parser, Debug)]
#[command(name = "nim")]
#[command(about = "Train a Q-learning agent to play Nim", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Train an agent and print a summary.
    Train(TrainArgs),

    /// Train an agent, then play one game against it.
    Play {
        #[command(flatten)]
        train: TrainArgs,

        /// Take the first move
        #[arg(long, conflicts_with = "ai_first")]
        human_first: bool,

        /// Let the AI take the first move
        #[arg(long)]
        ai_first: bool,

        /// Pause before each turn, in milliseconds
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },
}

#[derive(Args, Debug)]
struct TrainArgs {
    /// Number of self-play training games
    #[arg(short, long, default_value_t = 10_000)]
    episodes: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,

    /// Exploration rate during training
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Starting piles, comma separated
    #[arg(long, value_delimiter = ',', default_value = "1,3,5,7")]
    piles: Vec<u32>,

    /// Log progress every N episodes (0 disables)
    #[arg(long, default_value_t = 1_000)]
    log_interval: usize,
}

impl TrainArgs {
    fn train(&self) -> Result<NimAgent> {
        let agent_config = AgentConfig::default()
            .with_alpha(self.alpha)
            .with_epsilon(self.epsilon);
        let config = TrainingConfig::default()
            .with_episodes(self.episodes)
            .with_initial_piles(self.piles.clone())
            .with_seed(self.seed)
            .with_log_interval(self.log_interval);

        let (agent, report) = Trainer::new(agent_config, config)?.run()?;
        println!("{report}");
        Ok(agent)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Train(args) => {
            args.train()?;
        }
        Commands::Play {
            train,
            human_first,
            ai_first,
            delay_ms,
        } => {
            let agent = train.train()?;
            let mut rng = GameRng::new(train.seed).fork();

            let human = if human_first {
                PlayerId::FIRST
            } else if ai_first {
                PlayerId::SECOND
            } else if rng.gen_bool(0.5) {
                PlayerId::FIRST
            } else {
                PlayerId::SECOND
            };

            play(&agent, Nim::with_piles(train.piles.clone()), human, delay_ms, &mut rng)?;
        }
    }

    Ok(())
}

fn play(
    agent: &NimAgent,
    mut game: Nim,
    human: PlayerId,
    delay_ms: u64,
    rng: &mut GameRng,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.is_over() {
        println!();
        print!("{game}");
        thread::sleep(Duration::from_millis(delay_ms));

        let action = if game.current_player() == human {
            println!("Your Turn");
            read_human_action(&game, &mut input)?
        } else {
            println!("AI's Turn");
            let action = agent
                .choose_action(&game.state_key(), false, rng)
                .context("AI has no legal move")?;
            println!("AI chose to take {} from pile {}.", action.count, action.pile);
            action
        };

        game.apply_move(action)?;
    }

    println!("\nGAME OVER");
    let winner = if game.winner() == Some(human) { "Human" } else { "AI" };
    println!("Winner is {winner}");
    Ok(())
}

fn read_human_action(game: &Nim, input: &mut impl BufRead) -> Result<Action> {
    loop {
        let pile = prompt_number("Choose Pile: ", input)?;
        let count = prompt_number("Choose Count: ", input)?;

        match Action::from_signed(pile, count) {
            Ok(action) if game.is_legal(action) => return Ok(action),
            Ok(_) | Err(_) => println!("Invalid move, try again."),
        }
    }
}

fn prompt_number(prompt: &str, input: &mut impl BufRead) -> Result<i64> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        match line.trim().parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}
