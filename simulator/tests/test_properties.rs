//! Property tests for the simulation contract.

use std::collections::HashMap;

use exam_line_core::{Command, Simulation};
use proptest::prelude::*;

/// Command sequences that can never underflow the line: every `PASSED` or
/// `EXTRA` is only kept when somebody is still waiting; an unguarded pop
/// becomes an arrival instead.
fn arb_valid_commands() -> impl Strategy<Value = Vec<Command>> {
    proptest::collection::vec((0u8..3, "[a-z]{1,8}"), 0..64).prop_map(|raw| {
        let mut commands = Vec::with_capacity(raw.len());
        let mut waiting = 0usize;
        for (choice, id) in raw {
            match choice {
                1 if waiting > 0 => {
                    commands.push(Command::Passed);
                    waiting -= 1;
                }
                2 if waiting > 0 => commands.push(Command::Extra),
                _ => {
                    commands.push(Command::Ready { id });
                    waiting += 1;
                }
            }
        }
        commands
    })
}

fn count_by_id<'a, I: Iterator<Item = &'a str>>(ids: I) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for id in ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn prop_dismissal_count_equals_passed_count(commands in arb_valid_commands()) {
        let report = Simulation::run(&commands).unwrap();

        let passed = commands
            .iter()
            .filter(|c| matches!(c, Command::Passed))
            .count();

        prop_assert_eq!(report.dismissed.len(), passed);
    }

    #[test]
    fn prop_dismissed_multiset_is_bounded_by_readied(commands in arb_valid_commands()) {
        let report = Simulation::run(&commands).unwrap();

        let readied = count_by_id(commands.iter().filter_map(|c| match c {
            Command::Ready { id } => Some(id.as_str()),
            _ => None,
        }));
        let dismissed = count_by_id(report.dismissed.identifiers().iter().map(String::as_str));

        for (id, count) in dismissed {
            prop_assert!(
                readied.get(id).copied().unwrap_or(0) >= count,
                "'{}' dismissed more often than readied",
                id
            );
        }
    }

    #[test]
    fn prop_line_plus_dismissals_conserve_arrivals(commands in arb_valid_commands()) {
        let mut simulation = Simulation::new();
        for command in &commands {
            simulation.apply(command).unwrap();
        }

        let arrivals = commands
            .iter()
            .filter(|c| matches!(c, Command::Ready { .. }))
            .count();

        prop_assert_eq!(simulation.line().len() + simulation.dismissed().len(), arrivals);
    }

    #[test]
    fn prop_identical_scripts_yield_identical_reports(commands in arb_valid_commands()) {
        let first = Simulation::run(&commands).unwrap();
        let second = Simulation::run(&commands).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_event_count_equals_command_count(commands in arb_valid_commands()) {
        let report = Simulation::run(&commands).unwrap();

        prop_assert_eq!(report.events.len(), commands.len());
        prop_assert_eq!(report.commands_processed, commands.len());
    }
}
