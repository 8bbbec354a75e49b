#[macro_use]
extern crate log;

use balanced_trees::avl_tree::AvlMap;
use balanced_trees::config::Config;
use balanced_trees::error::Result;
use balanced_trees::layout;
use balanced_trees::red_black_tree::RedBlackMap;
use balanced_trees::source::{self, User};
use balanced_trees::{OrderedEngine, Record};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::process;

struct Engine {
    name: &'static str,
    title: &'static str,
    map: Box<dyn OrderedEngine<User>>,
}

impl Engine {
    fn print(&self, stage: &str) {
        println!("{} {}:", self.name, stage);
        print!("{}", layout::render(self.title, &self.map.layout()));
    }
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        },
    };

    if let Err(err) = TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not initialize logger: {}", err);
    }

    if let Err(err) = run(&config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut users = source::load_users(&config.path)?;
    info!("loaded {} users from {}", users.len(), config.path.display());

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("shuffling users with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    users.shuffle(&mut rng);

    let mut engines = vec![
        Engine {
            name: "AVL tree",
            title: "AVL TREE",
            map: Box::new(AvlMap::new()),
        },
        Engine {
            name: "Red black tree",
            title: "RED BLACK TREE",
            map: Box::new(RedBlackMap::new()),
        },
    ];

    for engine in engines.iter_mut() {
        for user in &users {
            if let Some(rejected) = engine.map.insert(user.clone()) {
                warn!("{}: ignoring duplicate user {}", engine.name, rejected.key());
            }
        }
        debug!(
            "{}: inserted {} users, height {}",
            engine.name,
            engine.map.len(),
            engine.map.height()
        );
    }
    for engine in &engines {
        engine.print("after insertion");
    }

    let primes = source::prime_keys(&users);
    info!("removing {} users whose id is prime", primes.len());
    for engine in engines.iter_mut() {
        let removed = primes
            .iter()
            .filter(|key| engine.map.remove(**key).is_some())
            .count();
        debug!("{}: removed {} users", engine.name, removed);
    }
    for engine in &engines {
        engine.print("after removing users whose id is prime");
    }

    for engine in &engines {
        engine.map.validate()?;
        info!(
            "{}: {} users, height {}",
            engine.name,
            engine.map.len(),
            engine.map.height()
        );
    }
    Ok(())
}
