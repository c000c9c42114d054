//! Integration tests for the Q-table, update rule and action selection.

use std::collections::HashMap;

use nim_rl::agent::{AgentConfig, NimAgent};
use nim_rl::core::{Action, GameRng, StateKey};
use nim_rl::games::nim::Nim;

fn key(piles: &[u32]) -> StateKey {
    StateKey::from_piles(piles)
}

// =============================================================================
// Q-values
// =============================================================================

#[test]
fn test_empty_table_reads_zero_without_growing() {
    let agent = NimAgent::default();
    let s = key(&[1, 3, 5, 7]);

    for action in Nim::available_actions(s.piles()) {
        assert_eq!(agent.get_q_value(&s, action), 0.0);
        assert_eq!(agent.get_q_value(&s, action), 0.0);
    }
    assert_eq!(agent.best_future_reward(&s), 0.0);
    assert!(agent.q_table().is_empty());
}

#[test]
fn test_single_update_with_half_alpha() {
    let mut agent = NimAgent::new(AgentConfig::default().with_alpha(0.5)).unwrap();
    let s = key(&[1, 3, 5, 7]);
    let s2 = key(&[0, 3, 5, 7]);
    let a = Action::new(0, 1);

    agent.update(&s, a, &s2, 1.0);

    assert_eq!(agent.get_q_value(&s, a), 0.5);
    assert_eq!(agent.get_q_value(&s, Action::new(1, 1)), 0.0);
    assert_eq!(agent.q_table().len(), 1);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_full_exploration_is_uniform_over_legal_actions() {
    let agent = NimAgent::new(AgentConfig::default().with_epsilon(1.0)).unwrap();
    let s = key(&[1, 3, 5, 7]);
    let legal = Nim::available_actions(s.piles());
    let mut rng = GameRng::new(42);

    let trials = 16_000;
    let mut counts: HashMap<Action, usize> = HashMap::new();
    for _ in 0..trials {
        let action = agent.choose_action(&s, true, &mut rng).unwrap();
        assert!(legal.contains(&action));
        *counts.entry(action).or_default() += 1;
    }

    assert_eq!(counts.len(), legal.len());
    let expected = trials / legal.len(); // 1000
    for (action, count) in counts {
        assert!(
            (700..=1300).contains(&count),
            "{} chosen {} times, expected about {}",
            action,
            count,
            expected
        );
    }
}

#[test]
fn test_greedy_picks_unique_best() {
    let mut agent = NimAgent::default();
    let s = key(&[2, 2]);
    agent.update(&s, Action::new(0, 1), &key(&[1, 2]), 1.0);
    agent.update(&s, Action::new(1, 2), &key(&[2, 0]), -1.0);

    let mut rng = GameRng::new(5);
    for _ in 0..500 {
        assert_eq!(agent.choose_action(&s, false, &mut rng), Some(Action::new(0, 1)));
    }
}

#[test]
fn test_greedy_spreads_over_tied_best() {
    let mut agent = NimAgent::default();
    let s = key(&[3]);
    let tied = [Action::new(0, 1), Action::new(0, 3)];
    for action in tied {
        agent.update(&s, action, &key(&[0]), 1.0);
    }

    let mut rng = GameRng::new(11);
    let mut counts: HashMap<Action, usize> = HashMap::new();
    for _ in 0..4_000 {
        let action = agent.choose_action(&s, false, &mut rng).unwrap();
        *counts.entry(action).or_default() += 1;
    }

    assert_eq!(counts.len(), 2, "only the tied maxima are chosen: {:?}", counts);
    for action in tied {
        let count = counts[&action];
        assert!((1_700..=2_300).contains(&count), "{} chosen {} times", action, count);
    }
}

#[test]
fn test_no_action_for_terminal_state() {
    let agent = NimAgent::default();
    let mut rng = GameRng::new(0);
    assert_eq!(agent.choose_action(&key(&[0, 0, 0, 0]), true, &mut rng), None);
}

#[test]
fn test_selection_is_reproducible_with_same_seed() {
    let agent = NimAgent::new(AgentConfig::default().with_epsilon(0.5)).unwrap();
    let s = key(&[1, 3, 5, 7]);

    let mut rng1 = GameRng::new(99);
    let mut rng2 = GameRng::new(99);
    let seq1: Vec<_> = (0..50).map(|_| agent.choose_action(&s, true, &mut rng1)).collect();
    let seq2: Vec<_> = (0..50).map(|_| agent.choose_action(&s, true, &mut rng2)).collect();

    assert_eq!(seq1, seq2);
}
