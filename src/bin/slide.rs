//! Sliding puzzle solver
//!
//! Solves the built-in puzzles, a puzzle given on the command line or a
//! random scramble, with uniform-cost search and A*.
use anstream::println;
use clap::Parser;
use clap::ValueEnum;
use hrsw::Stopwatch;
use human_duration::human_duration;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use thiserror::Error;

use slide::algorithms::Algorithm;
use slide::algorithms::astar::AStarSearch;
use slide::algorithms::best_first::BestFirstSearch;
use slide::algorithms::best_first::SearchReport;
use slide::algorithms::ucs::UniformCostSearch;
use slide::frontier::Frontier;
use slide::heuristics::Heuristic;
use slide::heuristics::HeuristicKind;
use slide::heuristics::PuzzleHeuristic;
use slide::problem::Problem;
use slide::problems::presets;
use slide::problems::sliding_puzzle::Depth;
use slide::problems::sliding_puzzle::ProblemError;
use slide::problems::sliding_puzzle::PuzzleParseError;
use slide::problems::sliding_puzzle::PuzzlePath;
use slide::problems::sliding_puzzle::PuzzleProblem;
use slide::problems::sliding_puzzle::PuzzleState;
use slide::space::Space;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Uniform-cost search
    Ucs,
    /// A* with a zero heuristic
    Zero,
    /// A* with misplaced tiles
    Misplaced,
    /// A* with Manhattan distance
    Manhattan,
    /// Every one of the above
    All,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::Ucs => vec![Algorithm::UniformCost],
            AlgorithmArg::Zero => vec![Algorithm::AStar(HeuristicKind::Zero)],
            AlgorithmArg::Misplaced => vec![Algorithm::AStar(HeuristicKind::MisplacedTiles)],
            AlgorithmArg::Manhattan => vec![Algorithm::AStar(HeuristicKind::Manhattan)],
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

/// Command line arguments
///
/// Without a puzzle to solve, every built-in puzzle is solved.
#[derive(Parser, Debug)]
#[clap(long_version = slide::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Built-in puzzle to solve, by optimal solution depth.
    #[arg(short, long, conflicts_with_all = ["initial", "goal", "random"])]
    pub preset: Option<Depth>,

    /// Initial grid, like "1 2 3/4 5 6/7 8 _". Newlines also split rows.
    #[arg(short, long, conflicts_with = "random")]
    pub initial: Option<String>,
    /// Goal grid. Defaults to the solved puzzle.
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Scramble the goal with this many random moves.
    #[arg(short, long)]
    pub random: Option<usize>,
    /// Side of random puzzles without an explicit goal.
    #[arg(long, default_value_t = 3usize)]
    pub side: usize,
    #[arg(long, env = "SLIDE_SEED", default_value_t = 0u64)]
    pub seed: u64,

    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
    pub algorithm: AlgorithmArg,

    /// Print every expansion, and every state along found solutions.
    #[arg(long)]
    pub trace: bool,
    /// Stop searches after this many expansions.
    #[arg(long, env = "SLIDE_MAX_EXPANSIONS")]
    pub max_expansions: Option<usize>,
    /// Print memory usage after every search.
    #[arg(long)]
    pub stats: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Debug, Error)]
enum InputError {
    #[error("There's no preset of depth {depth}, try one of {available:?}")]
    UnknownPreset { depth: Depth, available: Vec<Depth> },
    #[error("Can't scramble a {side}x{side} puzzle: {e}")]
    RandomSide {
        side: usize,
        #[source]
        e: PuzzleParseError,
    },
    #[error(transparent)]
    Problem(#[from] ProblemError),
}

fn problems(args: &Args) -> Result<Vec<(String, PuzzleProblem)>, InputError> {
    if let Some(depth) = args.preset {
        let p = presets::preset(depth).ok_or_else(|| InputError::UnknownPreset {
            depth,
            available: presets::depths().collect(),
        })?;
        return Ok(vec![(format!("Preset {depth}"), p)]);
    }

    if let Some(initial) = &args.initial {
        let p = PuzzleProblem::parse(initial, args.goal.as_deref())?;
        return Ok(vec![("Puzzle".to_string(), p)]);
    }

    if let Some(moves) = args.random {
        let base = match &args.goal {
            Some(goal) => {
                let goal = PuzzleState::try_from(goal.as_str())
                    .map_err(|e| ProblemError::InvalidState { which: "goal", e })?;
                PuzzleProblem::new(goal, goal)?
            }
            None => {
                let goal = PuzzleState::solved(args.side).map_err(|e| InputError::RandomSide {
                    side: args.side,
                    e,
                })?;
                PuzzleProblem::with_solved_goal(goal)
            }
        };
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        let p = base.randomize(&mut rng, moves);
        return Ok(vec![(
            format!("Random walk of {moves} moves (seed {})", args.seed),
            p,
        )]);
    }

    Ok(presets::all()
        .map(|(depth, p)| (format!("Preset {depth}"), p))
        .collect())
}

/// Runs a search, honouring the expansion limit.
fn drive<F, H>(
    mut search: BestFirstSearch<F, H>,
    args: &Args,
) -> std::io::Result<(SearchReport, Option<PuzzlePath>)>
where
    F: Frontier,
    H: Heuristic,
{
    let limit = args.max_expansions.unwrap_or(usize::MAX);

    let mut stopwatch = Stopwatch::new_started();
    while search.nodes_expanded() < limit {
        let Some(node) = search.expand_next() else {
            break;
        };
        if args.trace {
            println!(
                "Expanding state with g(n) = {} and h(n) = {}",
                node.depth.cyan(),
                node.heuristic.cyan()
            );
            println!("{}", node.state);
        }
    }
    stopwatch.stop();

    let report = search.report();
    println!("{report}");
    println!("Elapsed: {}", human_duration(&stopwatch.elapsed()).yellow());
    if args.stats {
        search.write_memory_stats(std::io::stdout().lock())?;
    }
    Ok((report, search.path()))
}

fn print_path(problem: &PuzzleProblem, path: &PuzzlePath, trace: bool) {
    println!("Solution: {}", path.green());
    if !trace {
        return;
    }

    let space = problem.space();
    let mut s = path.start;
    println!("{s}");
    for a in &path.actions {
        let Some(next) = space.apply(&s, a) else {
            log::error!("{a} can't be applied to {s:?}");
            return;
        };
        s = next;
        println!("{}", a.bold());
        println!("{s}");
    }
}

fn solve(problem: &PuzzleProblem, algorithm: Algorithm, args: &Args) -> std::io::Result<()> {
    println!("{} {}", "==".dimmed(), algorithm.bold());
    let (report, path) = match algorithm {
        Algorithm::UniformCost => drive(UniformCostSearch::uniform_cost(problem), args)?,
        Algorithm::AStar(kind) => drive(
            AStarSearch::astar(problem, PuzzleHeuristic::new(kind, problem.goal())),
            args,
        )?,
    };
    log::debug!("{algorithm}: {:?}", report.outcome);

    if let Some(path) = path {
        debug_assert!(problem.space().valid_path(&path));
        print_path(problem, &path, args.trace);
    }
    println!();
    Ok(())
}

fn main() -> std::io::Result<()> {
    #[cfg(feature = "coz_profile")]
    coz::thread_init();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    args.color.write_global();

    let problems = match problems(&args) {
        Ok(problems) => problems,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    for (name, problem) in &problems {
        println!("{} {}", "#".dimmed(), name.bold());
        println!("{problem}");
        if !problem.is_solvable() {
            log::warn!("{name} has no solution, searches will exhaust every reachable state");
        }

        for algorithm in args.algorithm.algorithms() {
            solve(problem, algorithm, &args)?;
        }
    }

    Ok(())
}
