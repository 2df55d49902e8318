extern crate five_card_showdown;

mod common;

use clap::Parser;
use five_card_showdown::core::{Deck, Hand, RankingRules, ShowdownError};
use five_card_showdown::showdown::Showdown;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "showdown_table",
    about = "Compare pairs of five card poker hands",
    long_about = "Replay a fixed table of sample showdowns, or deal random heads up hands \
                  from a shuffled deck until it runs out."
)]
struct Args {
    #[command(flatten)]
    tracing: common::TracingArgs,

    /// Ranking rules (JSON file path or inline JSON)
    #[arg(short = 'r', long)]
    rules: Option<String>,

    /// Deal random hands instead of replaying the sample table
    #[arg(short = 'd', long)]
    deal: bool,

    /// Seed for the shuffle; random when absent
    #[arg(short = 's', long)]
    seed: Option<u64>,
}

type Row = [(u8, char); 5];

/// Sample showdowns, first hand then second. A few rows hold cards that
/// don't exist to show how bad input is reported.
const TABLE: [(Row, Row); 26] = [
    // straight flush
    (
        [(5, 'S'), (6, 'S'), (7, 'S'), (8, 'S'), (9, 'S')],
        [(6, 'D'), (7, 'D'), (8, 'D'), (9, 'D'), (10, 'D')],
    ),
    (
        [(5, 'S'), (6, 'S'), (7, 'S'), (8, 'S'), (9, 'S')],
        [(5, 'D'), (6, 'D'), (7, 'D'), (8, 'D'), (9, 'D')],
    ),
    // four of a kind
    (
        [(2, 'H'), (2, 'D'), (2, 'S'), (2, 'C'), (8, 'S')],
        [(4, 'D'), (4, 'S'), (4, 'C'), (4, 'H'), (8, 'S')],
    ),
    // full house
    (
        [(3, 'D'), (3, 'S'), (3, 'H'), (5, 'H'), (5, 'D')],
        [(7, 'D'), (7, 'S'), (7, 'C'), (9, 'S'), (9, 'S')],
    ),
    // flush
    (
        [(8, 'D'), (3, 'D'), (4, 'D'), (6, 'D'), (5, 'D')],
        [(11, 'S'), (9, 'S'), (2, 'S'), (7, 'S'), (10, 'S')],
    ),
    (
        [(11, 'D'), (3, 'D'), (4, 'D'), (6, 'D'), (5, 'D')],
        [(11, 'S'), (9, 'S'), (2, 'S'), (7, 'S'), (10, 'S')],
    ),
    (
        [(11, 'D'), (3, 'D'), (4, 'D'), (10, 'D'), (5, 'D')],
        [(11, 'S'), (9, 'S'), (2, 'S'), (7, 'S'), (10, 'S')],
    ),
    (
        [(11, 'D'), (3, 'D'), (9, 'D'), (10, 'D'), (5, 'D')],
        [(11, 'S'), (9, 'S'), (2, 'S'), (7, 'S'), (10, 'S')],
    ),
    (
        [(11, 'D'), (3, 'D'), (9, 'D'), (10, 'D'), (7, 'D')],
        [(11, 'S'), (9, 'S'), (2, 'S'), (7, 'S'), (10, 'S')],
    ),
    (
        [(11, 'D'), (2, 'D'), (9, 'D'), (10, 'D'), (7, 'D')],
        [(11, 'S'), (9, 'S'), (2, 'S'), (7, 'S'), (10, 'S')],
    ),
    // straight
    (
        [(7, 'H'), (3, 'D'), (4, 'S'), (6, 'D'), (5, 'D')],
        [(8, 'H'), (7, 'K'), (4, 'D'), (6, 'D'), (5, 'D')],
    ),
    (
        [(7, 'H'), (3, 'D'), (4, 'S'), (6, 'D'), (5, 'D')],
        [(7, 'K'), (3, 'C'), (4, 'H'), (6, 'K'), (5, 'S')],
    ),
    // three of a kind
    (
        [(7, 'H'), (7, 'D'), (7, 'S'), (6, 'C'), (5, 'D')],
        [(9, 'K'), (9, 'C'), (9, 'H'), (1, 'K'), (3, 'S')],
    ),
    // two pair
    (
        [(7, 'H'), (7, 'D'), (6, 'S'), (6, 'C'), (5, 'D')],
        [(9, 'K'), (9, 'C'), (3, 'H'), (1, 'K'), (3, 'S')],
    ),
    (
        [(7, 'H'), (7, 'D'), (6, 'S'), (6, 'C'), (5, 'D')],
        [(7, 'C'), (7, 'S'), (3, 'S'), (3, 'C'), (2, 'D')],
    ),
    (
        [(7, 'H'), (7, 'D'), (6, 'S'), (6, 'C'), (5, 'D')],
        [(7, 'H'), (7, 'D'), (6, 'S'), (6, 'C'), (7, 'D')],
    ),
    // one pair
    (
        [(7, 'H'), (7, 'D'), (12, 'S'), (6, 'C'), (5, 'D')],
        [(4, 'H'), (4, 'D'), (6, 'S'), (9, 'C'), (3, 'D')],
    ),
    (
        [(7, 'H'), (7, 'D'), (12, 'S'), (6, 'C'), (5, 'D')],
        [(7, 'S'), (7, 'C'), (6, 'S'), (9, 'C'), (3, 'D')],
    ),
    (
        [(7, 'H'), (7, 'D'), (12, 'S'), (6, 'C'), (5, 'D')],
        [(7, 'S'), (7, 'C'), (8, 'S'), (12, 'C'), (3, 'D')],
    ),
    (
        [(7, 'H'), (7, 'D'), (12, 'S'), (6, 'C'), (5, 'D')],
        [(7, 'S'), (7, 'C'), (6, 'S'), (12, 'C'), (3, 'D')],
    ),
    // high card
    (
        [(7, 'H'), (2, 'D'), (13, 'S'), (6, 'C'), (5, 'D')],
        [(3, 'H'), (9, 'D'), (12, 'C'), (2, 'C'), (11, 'D')],
    ),
    (
        [(7, 'H'), (2, 'D'), (13, 'S'), (6, 'C'), (5, 'D')],
        [(3, 'H'), (9, 'D'), (13, 'C'), (2, 'C'), (11, 'D')],
    ),
    (
        [(7, 'H'), (2, 'D'), (13, 'S'), (11, 'C'), (5, 'D')],
        [(3, 'H'), (9, 'D'), (13, 'C'), (2, 'C'), (11, 'D')],
    ),
    (
        [(7, 'H'), (2, 'D'), (13, 'S'), (11, 'C'), (5, 'D')],
        [(3, 'H'), (7, 'D'), (13, 'C'), (2, 'C'), (11, 'D')],
    ),
    (
        [(7, 'H'), (2, 'D'), (13, 'S'), (11, 'C'), (5, 'D')],
        [(3, 'H'), (7, 'D'), (13, 'C'), (5, 'C'), (11, 'D')],
    ),
    (
        [(7, 'H'), (2, 'D'), (13, 'S'), (11, 'C'), (5, 'D')],
        [(5, 'H'), (7, 'D'), (13, 'C'), (2, 'C'), (11, 'D')],
    ),
];

fn print_showdown(showdown: &Showdown, first: &Hand, second: &Hand) {
    let first_class = showdown.classify(first);
    let second_class = showdown.classify(second);
    println!(
        "{first} ({}) vs {second} ({}): {}",
        first_class.category(),
        second_class.category(),
        showdown.compare(first, second)
    );
}

fn replay_table(showdown: &Showdown) {
    for (idx, (first, second)) in TABLE.iter().enumerate() {
        match (Hand::from_pairs(first), Hand::from_pairs(second)) {
            (Ok(first), Ok(second)) => print_showdown(showdown, &first, &second),
            (Err(err), _) | (_, Err(err)) => {
                warn!(row = idx + 1, %err, "Skipping row");
                println!("row {}: {err}", idx + 1);
            }
        }
    }
}

fn deal_until_empty(showdown: &Showdown, seed: Option<u64>) -> Result<(), ShowdownError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut deck = Deck::default();
    deck.shuffle(&mut rng);
    while deck.len() >= 10 {
        let (first, second) = deck.deal_heads_up()?;
        print_showdown(showdown, &first, &second);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    args.tracing.init_tracing();

    let rules = match args.rules.as_deref() {
        Some(input) => RankingRules::from_str_or_file(input).unwrap_or_else(|err| {
            eprintln!("Unable to load rules from {input}: {err}");
            std::process::exit(1);
        }),
        None => RankingRules::reference(),
    };
    info!(?rules, deal = args.deal, "Starting showdowns");
    let showdown = Showdown::new(rules);

    if args.deal {
        if let Err(err) = deal_until_empty(&showdown, args.seed) {
            eprintln!("Dealing failed: {err}");
            std::process::exit(1);
        }
    } else {
        replay_table(&showdown);
    }
}
