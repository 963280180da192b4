//! Automatic runner advancement by result type.
//!
//! | Result | Runners on base | Batter |
//! |--------|-----------------|--------|
//! | Home run | all score | scores |
//! | Triple, double | all score | to third / second |
//! | Single | second and third score, first to second | to first |
//! | Walk | forced runners move up one base | to first |
//! | Sacrifice fly | third scores | none (out) |
//! | anything else | none | none |
//!
//! Movements are listed lead runner first, batter last.

use dugout_domain::{AtBatResultType, Base, BasesOccupancy, Destination, PlayerId, RunnerMovement};

/// Movements implied by `result` with the given runners on base.
pub fn automatic_movements(
    result: AtBatResultType,
    bases: &BasesOccupancy,
    batter_id: PlayerId,
) -> Vec<RunnerMovement> {
    match result {
        AtBatResultType::HomeRun => {
            let mut movements = all_runners_score(bases);
            movements.push(RunnerMovement::batter(batter_id, Destination::Home));
            movements
        }
        AtBatResultType::Triple => {
            let mut movements = all_runners_score(bases);
            movements.push(RunnerMovement::batter(batter_id, Destination::Base(Base::Third)));
            movements
        }
        AtBatResultType::Double => {
            let mut movements = all_runners_score(bases);
            movements.push(RunnerMovement::batter(batter_id, Destination::Base(Base::Second)));
            movements
        }
        AtBatResultType::Single => {
            let mut movements = lead_first(bases)
                .map(|(base, runner)| {
                    let to = match base {
                        Base::First => Destination::Base(Base::Second),
                        Base::Second | Base::Third => Destination::Home,
                    };
                    RunnerMovement::runner(runner, base, to)
                })
                .collect::<Vec<_>>();
            movements.push(RunnerMovement::batter(batter_id, Destination::Base(Base::First)));
            movements
        }
        AtBatResultType::Walk => {
            let mut movements = forced_advances(bases);
            movements.push(RunnerMovement::batter(batter_id, Destination::Base(Base::First)));
            movements
        }
        AtBatResultType::SacrificeFly => bases
            .runner_on(Base::Third)
            .map(|runner| vec![RunnerMovement::runner(runner, Base::Third, Destination::Home)])
            .unwrap_or_default(),
        AtBatResultType::Strikeout
        | AtBatResultType::GroundOut
        | AtBatResultType::FlyOut
        | AtBatResultType::Error
        | AtBatResultType::FieldersChoice
        | AtBatResultType::DoublePlay
        | AtBatResultType::TriplePlay => Vec::new(),
    }
}

fn lead_first(bases: &BasesOccupancy) -> impl Iterator<Item = (Base, PlayerId)> + '_ {
    Base::ALL
        .into_iter()
        .rev()
        .filter_map(|base| bases.runner_on(base).map(|runner| (base, runner)))
}

fn all_runners_score(bases: &BasesOccupancy) -> Vec<RunnerMovement> {
    lead_first(bases)
        .map(|(base, runner)| RunnerMovement::runner(runner, base, Destination::Home))
        .collect()
}

/// Runners forced by the batter taking first: the contiguous run of occupied
/// bases starting at first, each moving up one base.
fn forced_advances(bases: &BasesOccupancy) -> Vec<RunnerMovement> {
    let mut forced = Vec::new();
    for base in Base::ALL {
        let Some(runner) = bases.runner_on(base) else {
            break;
        };
        let to = base.next().map(Destination::Base).unwrap_or(Destination::Home);
        forced.push(RunnerMovement::runner(runner, base, to));
    }
    forced.reverse();
    forced
}
