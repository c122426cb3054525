use super::*;

fn costs_filled(m: usize, fill: f64) -> Matrix {
    let mut costs = Matrix::from_vec(m, m, vec![fill; m * m]).unwrap();
    for d in 0..m {
        *costs.at_mut(d, d) = 0.0;
    }
    costs
}

#[test]
fn rejects_negative_or_non_finite_alpha() {
    let costs = Matrix::zeros(3, 3);
    assert!(matches!(
        select_loop(&costs, -1.0),
        Err(LoopscanError::Validation(_))
    ));
    assert!(matches!(
        select_loop(&costs, f64::NAN),
        Err(LoopscanError::Validation(_))
    ));
    assert!(matches!(
        select_loop(&Matrix::zeros(2, 3), 0.5),
        Err(LoopscanError::Validation(_))
    ));
}

#[test]
fn alpha_zero_over_nonnegative_costs_finds_nothing() {
    // With no length reward, no pair can strictly beat the zero baseline.
    let selection = select_loop(&costs_filled(4, 0.7), 0.0).unwrap();
    assert_eq!(selection, LoopSelection::NoLoop);
}

#[test]
fn reads_costs_with_swapped_indices_and_corrects_by_two() {
    // The jump scored for (start 0, end 2) is costs[2, 0].
    let mut costs = costs_filled(3, 10.0);
    *costs.at_mut(2, 0) = 0.1;

    let selection = select_loop(&costs, 0.5).unwrap();
    let LoopSelection::Found { spec, score } = selection else {
        panic!("expected a loop, got {selection:?}");
    };
    assert_eq!((spec.start, spec.end), (2, 4));
    assert!((score - 0.9).abs() < 1e-12);
}

#[test]
fn ties_resolve_to_the_first_pair_in_scan_order() {
    // (0, 1) and (1, 2) both score 1.0; i-outer, j-inner scan keeps (0, 1).
    let mut costs = Matrix::zeros(3, 3);
    *costs.at_mut(2, 0) = 10.0;

    let selection = select_loop(&costs, 1.0).unwrap();
    assert_eq!(selection.spec().map(|s| (s.start, s.end)), Some((2, 3)));
}

#[test]
fn backward_winner_is_reported_as_no_loop() {
    // A negative cost at costs[0, 2] makes the backward pair (2, 0) the top
    // scorer; a backward jump is never a usable loop.
    let mut costs = Matrix::zeros(3, 3);
    *costs.at_mut(0, 2) = -5.0;

    let selection = select_loop(&costs, 0.0).unwrap();
    assert_eq!(selection, LoopSelection::NoLoop);
}

#[test]
fn loop_length_grows_with_alpha() {
    // Length-1 jumps are cheap, the length-3 jump is rough; a large enough
    // alpha should still prefer it.
    let mut costs = costs_filled(4, 5.0);
    *costs.at_mut(1, 0) = 0.1;
    *costs.at_mut(3, 0) = 1.0;

    let mut last_len = 0usize;
    for alpha in [0.2, 0.5, 1.0, 2.0] {
        let spec = select_loop(&costs, alpha)
            .unwrap()
            .spec()
            .expect("every tested alpha beats the baseline");
        let len = spec.end - spec.start;
        assert!(len >= last_len, "length decreased at alpha {alpha}");
        last_len = len;
    }
    assert_eq!(last_len, 3);
}
