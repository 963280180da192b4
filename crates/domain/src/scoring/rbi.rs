//! Runs-batted-in rule.
//!
//! Credit depends only on the result type and the situation before the pitch,
//! never on the movements the scorer records afterwards.

use crate::types::AtBatResultType;
use crate::value_objects::{Base, BasesOccupancy};

/// RBI credited to the batter for a result, given bases and outs before the play.
///
/// | Result | RBI |
/// |--------|-----|
/// | Home run | runners on base + 1 |
/// | Triple, double | runners on base |
/// | Single | runners on second and third |
/// | Walk | 1 with the bases loaded |
/// | Sacrifice fly, ground out | 1 with a runner on third and fewer than two outs |
/// | Anything else | 0 |
pub fn rbi_for(result: AtBatResultType, bases_before: &BasesOccupancy, outs_before: u8) -> u32 {
    let runner_on_third_with_less_than_two_outs =
        bases_before.is_occupied(Base::Third) && outs_before < 2;

    match result {
        AtBatResultType::HomeRun => bases_before.runner_count() + 1,
        AtBatResultType::Triple | AtBatResultType::Double => bases_before.runner_count(),
        AtBatResultType::Single => [Base::Second, Base::Third]
            .into_iter()
            .filter(|base| bases_before.is_occupied(*base))
            .count() as u32,
        AtBatResultType::Walk => u32::from(bases_before.is_loaded()),
        AtBatResultType::SacrificeFly | AtBatResultType::GroundOut => {
            u32::from(runner_on_third_with_less_than_two_outs)
        }
        AtBatResultType::Strikeout
        | AtBatResultType::FlyOut
        | AtBatResultType::Error
        | AtBatResultType::FieldersChoice
        | AtBatResultType::DoublePlay
        | AtBatResultType::TriplePlay => 0,
    }
}
