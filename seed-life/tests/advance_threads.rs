// Only test in this binary, so no sibling test threads come and go while the
// count is taken.
#![cfg(target_os = "linux")]

use seed_life::{Grid, Seed, Session, World};
use std::fs;

fn thread_count() -> usize {
    fs::read_dir("/proc/self/task")
        .expect("list /proc/self/task")
        .count()
}

#[test]
fn advance_runs_on_the_calling_thread() {
    let mut blinker = Grid::from_states(3, 3, &[false, true, false, false, true, false, false, true, false]);
    let mut session = Session::new(&Seed::new("hello world"));

    let before = thread_count();
    for _ in 0..4 {
        blinker.advance();
        session.update();
    }
    let after = thread_count();

    assert_eq!(before, after);
    assert_eq!(blinker.generation(), 4);
    assert_eq!(
        blinker.alive_states(),
        [false, true, false, false, true, false, false, true, false]
    );
}
