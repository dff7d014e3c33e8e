use ai_bt::{Tree, TreeBuilder};
use ai_nav::Navigator;

use crate::{GameStateSink, GuardContext, Perception};

impl<P, N, S> GuardContext<P, N, S>
where
    P: Perception + 'static,
    N: Navigator + 'static,
    S: GameStateSink + 'static,
{
    /// The pursuit tree. Branches are tried in priority order and patrol is the unconditional
    /// fallback.
    #[rustfmt::skip]
    pub fn pursuit_tree() -> Tree<Self> {
        TreeBuilder::new()
            .selector("Guard")
                .sequence("Catch")
                    .condition("InCatchRange", Self::in_catch_range)
                    .action("ReportCaught", Self::catch_target)
                .end()
                .sequence("Chase")
                    .condition("ShouldChase", Self::should_chase)
                    .perform("RefreshChase", Self::refresh_chase)
                    .perform("EnterChase", Self::enter_chase)
                    .parallel("Pursue", 2)
                        .action("MoveToTarget", Self::move_to_target)
                        .action("RaiseAlert", Self::raise_alert)
                    .end()
                .end()
                .sequence("Search")
                    .condition("ShouldSearch", Self::should_search)
                    .perform("EnterSearch", Self::enter_search)
                    .parallel("SearchArea", 2)
                        .action("SearchLastKnownPosition", Self::search_last_known_position)
                        .action("CountDownSearch", Self::count_down_search)
                    .end()
                .end()
                .sequence("ReturnToPatrol")
                    .condition("ShouldReturn", Self::should_return)
                    .perform("EnterReturn", Self::enter_return)
                    .inverter("NotArrived")
                        .condition("ReachedPatrolRoute", Self::reached_patrol_route)
                    .action("TravelToRoute", Self::travel_to_route)
                .end()
                .sequence("Patrol")
                    .perform("EnterPatrol", Self::enter_patrol)
                    .action("FollowRoute", Self::patrol)
                .end()
            .end()
            .build()
    }
}
