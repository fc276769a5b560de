use std::io;

use tur_inc::{analyze, binary_increment, Renderer, TuringMachine, DEFAULT_LEASH};

#[test]
fn reference_table_is_total() {
    let program = binary_increment();
    assert!(analyze(&program).is_ok());

    for state in program.table.states() {
        for symbol in ['0', '1', ' '] {
            assert!(
                program.table.get(state, symbol).is_some(),
                "missing rule for ({state}, {symbol:?})"
            );
        }
    }
}

#[test]
fn full_reference_run_never_fails() {
    let mut machine = TuringMachine::new(binary_increment());
    let mut out = Vec::new();

    machine
        .run(DEFAULT_LEASH, &Renderer::default(), &mut out)
        .expect("reference table is total");

    assert_eq!(machine.step_count(), DEFAULT_LEASH);
    assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), DEFAULT_LEASH);
}

#[test]
fn single_step_on_empty_tape() {
    let mut machine = TuringMachine::new(binary_increment());
    let mut out = Vec::new();

    machine.run(1, &Renderer::default(), &mut out).unwrap();

    assert_eq!(machine.head(), -1);
    assert_eq!(machine.state(), "car");
    assert!(machine.tape().is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("car {}> <{}\n", " ".repeat(9), " ".repeat(10))
    );
}

#[test]
fn scan_past_a_single_bit() {
    let program = binary_increment().with_tape([(0, '1')]);
    let mut machine = TuringMachine::new(program);

    machine.run(2, &Renderer::default(), &mut io::sink()).unwrap();

    assert_eq!(machine.head(), 0);
    assert_eq!(machine.state(), "car");
    assert_eq!(machine.tape().iter().collect::<Vec<_>>(), vec![(0, '1')]);
}

#[test]
fn carry_propagates_left() {
    let program = binary_increment()
        .with_tape([(0, '1'), (-1, '1')])
        .with_initial_state("car");
    let mut machine = TuringMachine::new(program);

    machine.step().unwrap();

    assert_eq!(machine.head(), -1);
    assert_eq!(machine.state(), "car");
    assert_eq!(
        machine.tape().iter().collect::<Vec<_>>(),
        vec![(-1, '1'), (0, '0')]
    );
}

#[test]
fn zero_leash_renders_nothing() {
    let mut machine = TuringMachine::new(binary_increment());
    let mut out = Vec::new();

    machine.run(0, &Renderer::default(), &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(machine.step_count(), 0);
}

#[test]
fn counter_counts() {
    let mut machine = TuringMachine::new(binary_increment());
    let mut increments = 0;

    for _ in 0..5000 {
        let before = machine.state().to_string();
        machine.step().unwrap();

        if before == "car" && machine.state() == "lsb" {
            increments += 1;
            assert_eq!(machine.tape().binary_value(), Some(increments));
        }
    }

    assert!(increments > 0);
}

#[test]
fn head_leaves_the_window_unmarked() {
    // Counting to 2^10 moves the written region past the left edge of the default window.
    let mut machine = TuringMachine::new(binary_increment());
    while machine.tape().binary_value() != Some(1 << 10) {
        machine.step().unwrap();
    }
    while machine.head() >= -10 {
        machine.step().unwrap();
    }

    let line = Renderer::default().render(&machine);
    assert!(!line.contains('>'));
    assert!(!line.contains('<'));
    assert_eq!(line.len(), "car ".len() + 20);
}
