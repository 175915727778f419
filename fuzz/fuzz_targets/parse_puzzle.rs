#![no_main]

use libfuzzer_sys::fuzz_target;

use slide::heuristics::Heuristic;
use slide::heuristics::ManhattanDistance;
use slide::problems::sliding_puzzle::PuzzleSpace;
use slide::problems::sliding_puzzle::PuzzleState;
use slide::space::Space;
use slide::space::State;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(s) = PuzzleState::try_from(text) else {
        return;
    };

    // Whatever parses renders back to the same state.
    let rendered = s.to_string();
    assert_eq!(PuzzleState::try_from(rendered.as_str()), Ok(s));

    let space = PuzzleSpace::new(s.side());
    assert!(space.valid(&s));

    let goal = PuzzleState::solved(s.side()).expect("Parsed sides are supported");
    let h = ManhattanDistance::new(&goal);
    for (n, a) in space.neighbours(&s) {
        assert!(space.valid(&n));
        assert_ne!(n.canonical_key(), s.canonical_key());
        assert_eq!(space.apply(&n, &a.opposite()), Some(s));
        assert_eq!(h.h(&s).abs_diff(h.h(&n)), 1);
    }
});
