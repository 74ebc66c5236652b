//! Handlers for the five built-in event kinds.
//!
//! | Handler           | Kinds                                          | Scheduler after fire |
//! |-------------------|------------------------------------------------|----------------------|
//! | `JoinHandler`     | WandererJoins                                  | `Forced` follow-up   |
//! | `PodCrashHandler` | RefugeePodCrash                                | `Forced` follow-up   |
//! | `QuestHandler`    | RefugeeChased, PrisonerRescue, DownedRefugee   | stays `InProgress`   |
//!
//! A handler that cannot deliver declines with a `Forced` follow-up, so the
//! next event is drawn instead of the scheduler waiting on an event that
//! never started.

use ru_pool::Agent;
use ru_schedule::ScheduleMode;

use crate::{Arrival, ArrivalStyle, EventContext, EventHandler, EventKind};

/// Check an agent out and deliver it, or decline.
fn checkout_and_deliver(
    ctx:     &mut EventContext<'_>,
    style:   ArrivalStyle,
    prepare: impl FnOnce(&mut Agent),
) -> bool {
    let arrival = Arrival::new(ctx.kind, style);
    if !ctx.host.can_deliver(&arrival) {
        tracing::debug!(kind = %ctx.kind, "host cannot take delivery, declining");
        ctx.request_schedule(ScheduleMode::Forced);
        return false;
    }

    let mut agent = match ctx.checkout() {
        Ok(agent) => agent,
        Err(err) => {
            tracing::debug!(kind = %ctx.kind, %err, "checkout failed, declining");
            ctx.request_schedule(ScheduleMode::Forced);
            return false;
        }
    };
    prepare(&mut agent);

    tracing::debug!(kind = %ctx.kind, agent = %agent.id, ?style, "delivering");
    ctx.host.deliver(agent, arrival);
    true
}

/// The agent walks in and joins the player at once.
#[derive(Default, Debug, Clone, Copy)]
pub struct JoinHandler;

impl EventHandler for JoinHandler {
    fn fire(&mut self, ctx: &mut EventContext<'_>) -> bool {
        let delivered = checkout_and_deliver(ctx, ArrivalStyle::WalkIn, |_| {});
        if delivered {
            ctx.request_schedule(ScheduleMode::Forced);
        }
        delivered
    }
}

/// The agent lands in a drop pod, downed.
#[derive(Default, Debug, Clone, Copy)]
pub struct PodCrashHandler;

impl EventHandler for PodCrashHandler {
    fn fire(&mut self, ctx: &mut EventContext<'_>) -> bool {
        let delivered = checkout_and_deliver(ctx, ArrivalStyle::DropPod, |agent| {
            agent.downed = true;
        });
        if delivered {
            ctx.request_schedule(ScheduleMode::Forced);
        }
        delivered
    }
}

/// The agent is offered through a quest.
///
/// No follow-up is requested: the scheduler stays `InProgress` until the
/// host reports a return, a recruitment, or the end of the quest.
#[derive(Default, Debug, Clone, Copy)]
pub struct QuestHandler;

impl EventHandler for QuestHandler {
    fn fire(&mut self, ctx: &mut EventContext<'_>) -> bool {
        checkout_and_deliver(ctx, ArrivalStyle::Quest, |_| {})
    }
}

/// The built-in handler for `kind`.
pub fn builtin_handler(kind: EventKind) -> Box<dyn EventHandler> {
    match kind {
        EventKind::WandererJoins   => Box::new(JoinHandler),
        EventKind::RefugeePodCrash => Box::new(PodCrashHandler),
        EventKind::RefugeeChased
        | EventKind::PrisonerRescue
        | EventKind::DownedRefugee => Box::new(QuestHandler),
    }
}
